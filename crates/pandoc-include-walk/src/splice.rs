/*
 * splice.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Ownership-taking top-down rewrite of block sequences.
//!
//! `splice_blocks` visits blocks in the same order and with the same
//! crossing semantics as [`crate::walk_blocks`]. Each visited block is
//! handed to the callback by value; the callback either gives it back
//! unchanged, in which case its children are visited next, or returns a
//! replacement sequence that takes the block's place in its parent.
//! Parent sequences are rebuilt as they are traversed, so nothing is ever
//! mutated while it is being iterated.

use pandoc_include_types::{
    Block, BlockQuote, Blocks, BulletList, Cite, DefinitionList, Div, Emph, Header, Image, Inline,
    Inlines, LineBlock, Link, Note, OrderedList, Paragraph, Plain, Quoted, SmallCaps, Span,
    Strikeout, Strong, Subscript, Superscript, Table,
};

pub enum FilterReturn<T, U> {
    Unchanged(T),
    FilterResult(U, bool), // (new content, should recurse)
}

/// Rewrite `blocks` top-down with `filter`.
///
/// When `filter` returns `FilterResult(new, recurse)`, `new` is spliced in
/// place of the block. The replacement blocks themselves are not offered to
/// `filter` again; their children are visited only when `recurse` is set.
/// The first error returned by `filter` aborts the rewrite.
pub fn splice_blocks<E, F>(
    blocks: Blocks,
    cross_into_inlines: bool,
    filter: &mut F,
) -> Result<Blocks, E>
where
    F: FnMut(Block) -> Result<FilterReturn<Block, Blocks>, E>,
{
    let mut result = Vec::with_capacity(blocks.len());
    for block in blocks {
        match filter(block)? {
            FilterReturn::Unchanged(block) => {
                result.push(splice_block_children(block, cross_into_inlines, filter)?);
            }
            FilterReturn::FilterResult(new_content, recurse) => {
                if !recurse {
                    result.extend(new_content);
                    continue;
                }
                for block in new_content {
                    result.push(splice_block_children(block, cross_into_inlines, filter)?);
                }
            }
        }
    }
    Ok(result)
}

fn splice_blocks_vec<E, F>(
    items: Vec<Blocks>,
    cross_into_inlines: bool,
    filter: &mut F,
) -> Result<Vec<Blocks>, E>
where
    F: FnMut(Block) -> Result<FilterReturn<Block, Blocks>, E>,
{
    items
        .into_iter()
        .map(|item| splice_blocks(item, cross_into_inlines, filter))
        .collect()
}

fn splice_block_children<E, F>(block: Block, cross: bool, filter: &mut F) -> Result<Block, E>
where
    F: FnMut(Block) -> Result<FilterReturn<Block, Blocks>, E>,
{
    Ok(match block {
        Block::Plain(plain) => Block::Plain(Plain {
            content: splice_inlines(plain.content, cross, filter)?,
        }),
        Block::Paragraph(para) => Block::Paragraph(Paragraph {
            content: splice_inlines(para.content, cross, filter)?,
        }),
        Block::LineBlock(line_block) => Block::LineBlock(LineBlock {
            content: line_block
                .content
                .into_iter()
                .map(|line| splice_inlines(line, cross, filter))
                .collect::<Result<_, _>>()?,
        }),
        Block::BlockQuote(quote) => Block::BlockQuote(BlockQuote {
            content: splice_blocks(quote.content, cross, filter)?,
        }),
        Block::OrderedList(list) => Block::OrderedList(OrderedList {
            content: splice_blocks_vec(list.content, cross, filter)?,
            ..list
        }),
        Block::BulletList(list) => Block::BulletList(BulletList {
            content: splice_blocks_vec(list.content, cross, filter)?,
        }),
        Block::DefinitionList(list) => Block::DefinitionList(DefinitionList {
            content: list
                .content
                .into_iter()
                .map(|(term, definitions)| -> Result<_, E> {
                    let term = splice_inlines(term, cross, filter)?;
                    let definitions = splice_blocks_vec(definitions, cross, filter)?;
                    Ok((term, definitions))
                })
                .collect::<Result<_, _>>()?,
        }),
        Block::Header(header) => Block::Header(Header {
            content: splice_inlines(header.content, cross, filter)?,
            ..header
        }),
        Block::Table(table) => {
            let caption = splice_inlines(table.caption, cross, filter)?;
            let headers = splice_blocks_vec(table.headers, cross, filter)?;
            let rows = table
                .rows
                .into_iter()
                .map(|row| splice_blocks_vec(row, cross, filter))
                .collect::<Result<_, _>>()?;
            Block::Table(Table {
                caption,
                headers,
                rows,
                ..table
            })
        }
        Block::Div(div) => Block::Div(Div {
            content: splice_blocks(div.content, cross, filter)?,
            ..div
        }),
        Block::CodeBlock(_)
        | Block::RawBlock(_)
        | Block::HorizontalRule
        | Block::Null => block,
    })
}

// Inline content only matters for the blocks held by notes, so it is
// left untouched unless crossing is on.
fn splice_inlines<E, F>(inlines: Inlines, cross: bool, filter: &mut F) -> Result<Inlines, E>
where
    F: FnMut(Block) -> Result<FilterReturn<Block, Blocks>, E>,
{
    if !cross {
        return Ok(inlines);
    }
    inlines
        .into_iter()
        .map(|inline| splice_inline(inline, filter))
        .collect()
}

fn splice_inline<E, F>(inline: Inline, filter: &mut F) -> Result<Inline, E>
where
    F: FnMut(Block) -> Result<FilterReturn<Block, Blocks>, E>,
{
    Ok(match inline {
        Inline::Emph(e) => Inline::Emph(Emph {
            content: splice_inlines(e.content, true, filter)?,
        }),
        Inline::Strong(s) => Inline::Strong(Strong {
            content: splice_inlines(s.content, true, filter)?,
        }),
        Inline::Strikeout(s) => Inline::Strikeout(Strikeout {
            content: splice_inlines(s.content, true, filter)?,
        }),
        Inline::Superscript(s) => Inline::Superscript(Superscript {
            content: splice_inlines(s.content, true, filter)?,
        }),
        Inline::Subscript(s) => Inline::Subscript(Subscript {
            content: splice_inlines(s.content, true, filter)?,
        }),
        Inline::SmallCaps(s) => Inline::SmallCaps(SmallCaps {
            content: splice_inlines(s.content, true, filter)?,
        }),
        Inline::Quoted(q) => Inline::Quoted(Quoted {
            content: splice_inlines(q.content, true, filter)?,
            ..q
        }),
        Inline::Cite(c) => Inline::Cite(Cite {
            content: splice_inlines(c.content, true, filter)?,
            ..c
        }),
        Inline::Link(l) => Inline::Link(Link {
            content: splice_inlines(l.content, true, filter)?,
            ..l
        }),
        Inline::Image(i) => Inline::Image(Image {
            content: splice_inlines(i.content, true, filter)?,
            ..i
        }),
        Inline::Span(s) => Inline::Span(Span {
            content: splice_inlines(s.content, true, filter)?,
            ..s
        }),
        Inline::Note(note) => Inline::Note(Note {
            content: splice_blocks(note.content, true, filter)?,
        }),
        Inline::Str(_)
        | Inline::Code(_)
        | Inline::Space
        | Inline::SoftBreak
        | Inline::LineBreak
        | Inline::Math(_)
        | Inline::RawInline(_) => inline,
    })
}
