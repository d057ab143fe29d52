/*
 * inline.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, empty_attr};
use crate::block::Blocks;
use crate::tag::InlineTag;

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Str(Str),
    Emph(Emph),
    Strong(Strong),
    Strikeout(Strikeout),
    Superscript(Superscript),
    Subscript(Subscript),
    SmallCaps(SmallCaps),
    Quoted(Quoted),
    Cite(Cite),
    Code(Code),
    Space,
    SoftBreak,
    LineBreak,
    Math(Math),
    RawInline(RawInline),
    Link(Link),
    Image(Image),
    Note(Note),
    Span(Span),
}

pub type Inlines = Vec<Inline>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

/// `(url, title)`
pub type Target = (String, String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MathType {
    InlineMath,
    DisplayMath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CitationMode {
    AuthorInText,
    SuppressAuthor,
    NormalCitation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub id: String,
    pub prefix: Inlines,
    pub suffix: Inlines,
    pub mode: CitationMode,
    pub note_num: i64,
    pub hash: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emph {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strong {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Strikeout {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Superscript {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscript {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmallCaps {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quoted {
    pub quote_type: QuoteType,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cite {
    pub citations: Vec<Citation>,
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Code {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Math {
    pub math_type: MathType,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawInline {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub attr: Attr,
    pub content: Inlines,
    pub target: Target,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub attr: Attr,
    pub content: Inlines,
    pub target: Target,
}

/// Footnote or endnote. The only inline that holds blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub attr: Attr,
    pub content: Inlines,
}

impl Inline {
    pub fn tag(&self) -> InlineTag {
        match self {
            Inline::Str(_) => InlineTag::Str,
            Inline::Emph(_) => InlineTag::Emph,
            Inline::Strong(_) => InlineTag::Strong,
            Inline::Strikeout(_) => InlineTag::Strikeout,
            Inline::Superscript(_) => InlineTag::Superscript,
            Inline::Subscript(_) => InlineTag::Subscript,
            Inline::SmallCaps(_) => InlineTag::SmallCaps,
            Inline::Quoted(_) => InlineTag::Quoted,
            Inline::Cite(_) => InlineTag::Cite,
            Inline::Code(_) => InlineTag::Code,
            Inline::Space => InlineTag::Space,
            Inline::SoftBreak => InlineTag::SoftBreak,
            Inline::LineBreak => InlineTag::LineBreak,
            Inline::Math(_) => InlineTag::Math,
            Inline::RawInline(_) => InlineTag::RawInline,
            Inline::Link(_) => InlineTag::Link,
            Inline::Image(_) => InlineTag::Image,
            Inline::Note(_) => InlineTag::Note,
            Inline::Span(_) => InlineTag::Span,
        }
    }

    pub fn str(text: impl Into<String>) -> Inline {
        Inline::Str(Str { text: text.into() })
    }

    pub fn emph(content: Inlines) -> Inline {
        Inline::Emph(Emph { content })
    }

    pub fn strong(content: Inlines) -> Inline {
        Inline::Strong(Strong { content })
    }

    pub fn code(text: impl Into<String>) -> Inline {
        Inline::Code(Code {
            attr: empty_attr(),
            text: text.into(),
        })
    }

    pub fn link(content: Inlines, url: impl Into<String>) -> Inline {
        Inline::Link(Link {
            attr: empty_attr(),
            content,
            target: (url.into(), String::new()),
        })
    }

    pub fn note(content: Blocks) -> Inline {
        Inline::Note(Note { content })
    }

    pub fn span(attr: Attr, content: Inlines) -> Inline {
        Inline::Span(Span { attr, content })
    }
}

/// Split text on spaces into `Str`/`Space` runs, the way pandoc's
/// readers tokenize plain prose.
pub fn text_inlines(text: &str) -> Inlines {
    let mut result = Vec::new();
    for (i, word) in text.split(' ').filter(|w| !w.is_empty()).enumerate() {
        if i > 0 {
            result.push(Inline::Space);
        }
        result.push(Inline::str(word));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_inlines() {
        assert_eq!(
            text_inlines("hello  brave world"),
            vec![
                Inline::str("hello"),
                Inline::Space,
                Inline::str("brave"),
                Inline::Space,
                Inline::str("world"),
            ]
        );
        assert!(text_inlines("").is_empty());
    }

    #[test]
    fn test_inline_tags() {
        assert_eq!(Inline::str("x").tag(), InlineTag::Str);
        assert_eq!(Inline::Space.tag(), InlineTag::Space);
        assert_eq!(Inline::note(vec![]).tag(), InlineTag::Note);
        assert_eq!(Inline::note(vec![]).tag().name(), "Note");
    }
}
