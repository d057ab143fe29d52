/*
 * tag.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Fieldless discriminators for the node enums, named as on the wire.
 */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockTag {
    Plain,
    Para,
    LineBlock,
    CodeBlock,
    RawBlock,
    BlockQuote,
    OrderedList,
    BulletList,
    DefinitionList,
    Header,
    HorizontalRule,
    Table,
    Div,
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InlineTag {
    Str,
    Emph,
    Strong,
    Strikeout,
    Superscript,
    Subscript,
    SmallCaps,
    Quoted,
    Cite,
    Code,
    Space,
    SoftBreak,
    LineBreak,
    Math,
    RawInline,
    Link,
    Image,
    Note,
    Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaValueTag {
    MetaMap,
    MetaList,
    MetaBool,
    MetaString,
    MetaInlines,
    MetaBlocks,
}

impl BlockTag {
    pub const ALL: [BlockTag; 14] = [
        BlockTag::Plain,
        BlockTag::Para,
        BlockTag::LineBlock,
        BlockTag::CodeBlock,
        BlockTag::RawBlock,
        BlockTag::BlockQuote,
        BlockTag::OrderedList,
        BlockTag::BulletList,
        BlockTag::DefinitionList,
        BlockTag::Header,
        BlockTag::HorizontalRule,
        BlockTag::Table,
        BlockTag::Div,
        BlockTag::Null,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockTag::Plain => "Plain",
            BlockTag::Para => "Para",
            BlockTag::LineBlock => "LineBlock",
            BlockTag::CodeBlock => "CodeBlock",
            BlockTag::RawBlock => "RawBlock",
            BlockTag::BlockQuote => "BlockQuote",
            BlockTag::OrderedList => "OrderedList",
            BlockTag::BulletList => "BulletList",
            BlockTag::DefinitionList => "DefinitionList",
            BlockTag::Header => "Header",
            BlockTag::HorizontalRule => "HorizontalRule",
            BlockTag::Table => "Table",
            BlockTag::Div => "Div",
            BlockTag::Null => "Null",
        }
    }

    pub fn from_name(name: &str) -> Option<BlockTag> {
        BlockTag::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl InlineTag {
    pub const ALL: [InlineTag; 19] = [
        InlineTag::Str,
        InlineTag::Emph,
        InlineTag::Strong,
        InlineTag::Strikeout,
        InlineTag::Superscript,
        InlineTag::Subscript,
        InlineTag::SmallCaps,
        InlineTag::Quoted,
        InlineTag::Cite,
        InlineTag::Code,
        InlineTag::Space,
        InlineTag::SoftBreak,
        InlineTag::LineBreak,
        InlineTag::Math,
        InlineTag::RawInline,
        InlineTag::Link,
        InlineTag::Image,
        InlineTag::Note,
        InlineTag::Span,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InlineTag::Str => "Str",
            InlineTag::Emph => "Emph",
            InlineTag::Strong => "Strong",
            InlineTag::Strikeout => "Strikeout",
            InlineTag::Superscript => "Superscript",
            InlineTag::Subscript => "Subscript",
            InlineTag::SmallCaps => "SmallCaps",
            InlineTag::Quoted => "Quoted",
            InlineTag::Cite => "Cite",
            InlineTag::Code => "Code",
            InlineTag::Space => "Space",
            InlineTag::SoftBreak => "SoftBreak",
            InlineTag::LineBreak => "LineBreak",
            InlineTag::Math => "Math",
            InlineTag::RawInline => "RawInline",
            InlineTag::Link => "Link",
            InlineTag::Image => "Image",
            InlineTag::Note => "Note",
            InlineTag::Span => "Span",
        }
    }

    pub fn from_name(name: &str) -> Option<InlineTag> {
        InlineTag::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl MetaValueTag {
    pub const ALL: [MetaValueTag; 6] = [
        MetaValueTag::MetaMap,
        MetaValueTag::MetaList,
        MetaValueTag::MetaBool,
        MetaValueTag::MetaString,
        MetaValueTag::MetaInlines,
        MetaValueTag::MetaBlocks,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MetaValueTag::MetaMap => "MetaMap",
            MetaValueTag::MetaList => "MetaList",
            MetaValueTag::MetaBool => "MetaBool",
            MetaValueTag::MetaString => "MetaString",
            MetaValueTag::MetaInlines => "MetaInlines",
            MetaValueTag::MetaBlocks => "MetaBlocks",
        }
    }

    pub fn from_name(name: &str) -> Option<MetaValueTag> {
        MetaValueTag::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for InlineTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for MetaValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for tag in BlockTag::ALL {
            assert_eq!(BlockTag::from_name(tag.name()), Some(tag));
        }
        for tag in InlineTag::ALL {
            assert_eq!(InlineTag::from_name(tag.name()), Some(tag));
        }
        for tag in MetaValueTag::ALL {
            assert_eq!(MetaValueTag::from_name(tag.name()), Some(tag));
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(BlockTag::from_name("Figure"), None);
        assert_eq!(InlineTag::from_name("Underline"), None);
        assert_eq!(MetaValueTag::from_name("MetaNumber"), None);
    }
}
