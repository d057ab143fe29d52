/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc AST type definitions.
 *
 * This crate provides pure data type definitions for the Pandoc AST as
 * described by pandoc-types 1.17, the tree shape read and written by
 * `pandoc -t json` / `pandoc -f json`. It has no behavior beyond
 * constructors and tag accessors; traversal lives in
 * `pandoc-include-walk` and the JSON wire format in `pandoc-include`.
 */

pub mod attr;
pub mod block;
pub mod inline;
pub mod list;
pub mod meta;
pub mod pandoc;
pub mod table;
pub mod tag;

// Re-export commonly used types at the crate root
pub use attr::{Attr, attr_with_classes, empty_attr, first_class, is_empty_attr};
pub use block::{
    Block, BlockQuote, Blocks, BulletList, CodeBlock, DefinitionList, Div, Header, LineBlock,
    OrderedList, Paragraph, Plain, RawBlock,
};
pub use inline::{
    Citation, CitationMode, Cite, Code, Emph, Image, Inline, Inlines, Link, Math, MathType, Note,
    QuoteType, Quoted, RawInline, SmallCaps, Span, Str, Strikeout, Strong, Subscript, Superscript,
    Target, text_inlines,
};
pub use list::{ListAttributes, ListNumberDelim, ListNumberStyle};
pub use meta::{Meta, MetaValue};
pub use pandoc::{API_VERSION, Pandoc, is_supported_api_version};
pub use table::{Alignment, Cell, Table};
pub use tag::{BlockTag, InlineTag, MetaValueTag};
