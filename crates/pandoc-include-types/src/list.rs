/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

/// Ordered list attributes: `(start number, numbering style, delimiter)`.
pub type ListAttributes = (i64, ListNumberStyle, ListNumberDelim);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListNumberStyle {
    Default,
    Example,
    Decimal,
    LowerRoman,
    UpperRoman,
    LowerAlpha,
    UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListNumberDelim {
    Default,
    Period,
    OneParen,
    TwoParens,
}

impl ListNumberStyle {
    pub fn name(self) -> &'static str {
        match self {
            ListNumberStyle::Default => "DefaultStyle",
            ListNumberStyle::Example => "Example",
            ListNumberStyle::Decimal => "Decimal",
            ListNumberStyle::LowerRoman => "LowerRoman",
            ListNumberStyle::UpperRoman => "UpperRoman",
            ListNumberStyle::LowerAlpha => "LowerAlpha",
            ListNumberStyle::UpperAlpha => "UpperAlpha",
        }
    }
}

impl ListNumberDelim {
    pub fn name(self) -> &'static str {
        match self {
            ListNumberDelim::Default => "DefaultDelim",
            ListNumberDelim::Period => "Period",
            ListNumberDelim::OneParen => "OneParen",
            ListNumberDelim::TwoParens => "TwoParens",
        }
    }
}
