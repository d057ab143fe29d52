/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attr::{Attr, attr_with_classes, empty_attr};
use crate::inline::Inlines;
use crate::list::ListAttributes;
use crate::table::Table;
use crate::tag::BlockTag;

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Plain(Plain),
    Paragraph(Paragraph),
    LineBlock(LineBlock),
    CodeBlock(CodeBlock),
    RawBlock(RawBlock),
    BlockQuote(BlockQuote),
    OrderedList(OrderedList),
    BulletList(BulletList),
    DefinitionList(DefinitionList),
    Header(Header),
    HorizontalRule,
    Table(Table),
    Div(Div),
    Null,
}

pub type Blocks = Vec<Block>;

/// Plain text, not a paragraph
#[derive(Debug, Clone, PartialEq)]
pub struct Plain {
    pub content: Inlines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub content: Inlines,
}

/// Multiple non-breaking lines
#[derive(Debug, Clone, PartialEq)]
pub struct LineBlock {
    pub content: Vec<Inlines>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub attr: Attr,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockQuote {
    pub content: Blocks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderedList {
    pub attr: ListAttributes,
    pub content: Vec<Blocks>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletList {
    pub content: Vec<Blocks>,
}

/// Each item is a term and one or more definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionList {
    pub content: Vec<(Inlines, Vec<Blocks>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub level: i64,
    pub attr: Attr,
    pub content: Inlines,
}

/// Generic block container with attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Div {
    pub attr: Attr,
    pub content: Blocks,
}

impl Block {
    pub fn tag(&self) -> BlockTag {
        match self {
            Block::Plain(_) => BlockTag::Plain,
            Block::Paragraph(_) => BlockTag::Para,
            Block::LineBlock(_) => BlockTag::LineBlock,
            Block::CodeBlock(_) => BlockTag::CodeBlock,
            Block::RawBlock(_) => BlockTag::RawBlock,
            Block::BlockQuote(_) => BlockTag::BlockQuote,
            Block::OrderedList(_) => BlockTag::OrderedList,
            Block::BulletList(_) => BlockTag::BulletList,
            Block::DefinitionList(_) => BlockTag::DefinitionList,
            Block::Header(_) => BlockTag::Header,
            Block::HorizontalRule => BlockTag::HorizontalRule,
            Block::Table(_) => BlockTag::Table,
            Block::Div(_) => BlockTag::Div,
            Block::Null => BlockTag::Null,
        }
    }

    pub fn plain(content: Inlines) -> Block {
        Block::Plain(Plain { content })
    }

    pub fn para(content: Inlines) -> Block {
        Block::Paragraph(Paragraph { content })
    }

    pub fn code_block(attr: Attr, text: impl Into<String>) -> Block {
        Block::CodeBlock(CodeBlock {
            attr,
            text: text.into(),
        })
    }

    /// A code block whose only attribute is the given class list.
    pub fn code_block_with_classes<I, S>(classes: I, text: impl Into<String>) -> Block
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::code_block(attr_with_classes(classes), text)
    }

    pub fn block_quote(content: Blocks) -> Block {
        Block::BlockQuote(BlockQuote { content })
    }

    pub fn bullet_list(items: Vec<Blocks>) -> Block {
        Block::BulletList(BulletList { content: items })
    }

    pub fn header(level: i64, content: Inlines) -> Block {
        Block::Header(Header {
            level,
            attr: empty_attr(),
            content,
        })
    }

    pub fn div(attr: Attr, content: Blocks) -> Block {
        Block::Div(Div { attr, content })
    }
}
