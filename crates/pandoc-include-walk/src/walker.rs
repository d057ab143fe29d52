/*
 * walker.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Lazy, document-order traversal of the Pandoc AST.
//!
//! Every iterator in this module is an explicit work stack of slice
//! iterators: a node is yielded, its children are pushed as new frames
//! (rightmost at the bottom) and the next call continues with the first
//! child. This gives strict pre-order without recursion and without
//! collecting nodes up front. Iterators borrow the tree and are single
//! pass; walking again means calling the function again.
//!
//! Blocks and inlines nest into each other in two places that matter
//! here: blocks hold inline content (paragraphs, headers, captions...)
//! and the `Note` inline holds blocks. The crossing flags control whether
//! a walk follows those edges into the other domain.

use pandoc_include_types::{Block, Inline};
use std::iter::FusedIterator;
use std::slice;

/// A borrowed node of either domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Block(&'a Block),
    Inline(&'a Inline),
}

impl NodeRef<'_> {
    /// The wire tag of the node, e.g. `"Para"` or `"Str"`.
    pub fn tag_name(&self) -> &'static str {
        match self {
            NodeRef::Block(block) => block.tag().name(),
            NodeRef::Inline(inline) => inline.tag().name(),
        }
    }
}

enum Frame<'a> {
    Blocks(slice::Iter<'a, Block>),
    Inlines(slice::Iter<'a, Inline>),
}

/// The shared traversal engine. It yields every node it visits; the public
/// iterators narrow that to one domain.
struct Walk<'a> {
    stack: Vec<Frame<'a>>,
    // follow block -> inline content edges
    descend_inlines: bool,
    // follow Note -> blocks edges
    descend_notes: bool,
}

impl<'a> Walk<'a> {
    fn from_blocks(blocks: &'a [Block], descend_inlines: bool, descend_notes: bool) -> Self {
        Walk {
            stack: vec![Frame::Blocks(blocks.iter())],
            descend_inlines,
            descend_notes,
        }
    }

    fn from_inlines(inlines: &'a [Inline], descend_inlines: bool, descend_notes: bool) -> Self {
        Walk {
            stack: vec![Frame::Inlines(inlines.iter())],
            descend_inlines,
            descend_notes,
        }
    }

    fn next_node(&mut self) -> Option<NodeRef<'a>> {
        loop {
            let next = match self.stack.last_mut()? {
                Frame::Blocks(iter) => iter.next().map(NodeRef::Block),
                Frame::Inlines(iter) => iter.next().map(NodeRef::Inline),
            };
            let Some(node) = next else {
                self.stack.pop();
                continue;
            };
            // Children are pushed in document order and then reversed in
            // place, so the leftmost child ends up on top of the stack.
            let mark = self.stack.len();
            match node {
                NodeRef::Block(block) => self.push_block_children(block),
                NodeRef::Inline(inline) => self.push_inline_children(inline),
            }
            self.stack[mark..].reverse();
            return Some(node);
        }
    }

    fn push_blocks(&mut self, blocks: &'a [Block]) {
        if !blocks.is_empty() {
            self.stack.push(Frame::Blocks(blocks.iter()));
        }
    }

    fn push_inlines(&mut self, inlines: &'a [Inline]) {
        if self.descend_inlines && !inlines.is_empty() {
            self.stack.push(Frame::Inlines(inlines.iter()));
        }
    }

    fn push_block_children(&mut self, block: &'a Block) {
        match block {
            Block::Plain(plain) => self.push_inlines(&plain.content),
            Block::Paragraph(para) => self.push_inlines(&para.content),
            Block::LineBlock(line_block) => {
                for line in &line_block.content {
                    self.push_inlines(line);
                }
            }
            Block::CodeBlock(_) | Block::RawBlock(_) | Block::HorizontalRule | Block::Null => {}
            Block::BlockQuote(quote) => self.push_blocks(&quote.content),
            Block::OrderedList(list) => {
                for item in &list.content {
                    self.push_blocks(item);
                }
            }
            Block::BulletList(list) => {
                for item in &list.content {
                    self.push_blocks(item);
                }
            }
            Block::DefinitionList(list) => {
                for (term, definitions) in &list.content {
                    self.push_inlines(term);
                    for definition in definitions {
                        self.push_blocks(definition);
                    }
                }
            }
            Block::Header(header) => self.push_inlines(&header.content),
            Block::Table(table) => {
                self.push_inlines(&table.caption);
                for cell in &table.headers {
                    self.push_blocks(cell);
                }
                for row in &table.rows {
                    for cell in row {
                        self.push_blocks(cell);
                    }
                }
            }
            Block::Div(div) => self.push_blocks(&div.content),
        }
    }

    fn push_inline_children(&mut self, inline: &'a Inline) {
        match inline {
            Inline::Str(_)
            | Inline::Code(_)
            | Inline::Space
            | Inline::SoftBreak
            | Inline::LineBreak
            | Inline::Math(_)
            | Inline::RawInline(_) => {}
            Inline::Emph(e) => self.push_inlines(&e.content),
            Inline::Strong(s) => self.push_inlines(&s.content),
            Inline::Strikeout(s) => self.push_inlines(&s.content),
            Inline::Superscript(s) => self.push_inlines(&s.content),
            Inline::Subscript(s) => self.push_inlines(&s.content),
            Inline::SmallCaps(s) => self.push_inlines(&s.content),
            Inline::Quoted(q) => self.push_inlines(&q.content),
            Inline::Cite(c) => self.push_inlines(&c.content),
            Inline::Link(l) => self.push_inlines(&l.content),
            Inline::Image(i) => self.push_inlines(&i.content),
            Inline::Span(s) => self.push_inlines(&s.content),
            Inline::Note(note) => {
                if self.descend_notes {
                    self.push_blocks(&note.content);
                }
            }
        }
    }
}

/// Iterator over blocks in document order. See [`walk_blocks`].
pub struct WalkBlocks<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for WalkBlocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<&'a Block> {
        while let Some(node) = self.walk.next_node() {
            if let NodeRef::Block(block) = node {
                return Some(block);
            }
        }
        None
    }
}

impl FusedIterator for WalkBlocks<'_> {}

/// Iterator over inlines in document order. See [`walk_inlines`].
pub struct WalkInlines<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for WalkInlines<'a> {
    type Item = &'a Inline;

    fn next(&mut self) -> Option<&'a Inline> {
        while let Some(node) = self.walk.next_node() {
            if let NodeRef::Inline(inline) = node {
                return Some(inline);
            }
        }
        None
    }
}

impl FusedIterator for WalkInlines<'_> {}

/// Iterator over every node of both domains. See [`walk_all`].
pub struct WalkNodes<'a> {
    walk: Walk<'a>,
}

impl<'a> Iterator for WalkNodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        self.walk.next_node()
    }
}

impl FusedIterator for WalkNodes<'_> {}

/// Walk every block reachable from `blocks`, in pre-order.
///
/// Block-valued children are always followed: block quote contents, list
/// items, definitions, table cells and div contents. When
/// `cross_into_inlines` is set, the inline content of paragraphs, plain
/// blocks, line blocks, definition terms, headers and table captions is
/// searched as well, and blocks inside `Note` inlines found there are
/// yielded in place. When it is unset, inline content is never inspected.
pub fn walk_blocks(blocks: &[Block], cross_into_inlines: bool) -> WalkBlocks<'_> {
    WalkBlocks {
        walk: Walk::from_blocks(blocks, cross_into_inlines, true),
    }
}

/// Walk every inline reachable from `inlines`, in pre-order.
///
/// Inline-valued children are always followed. When `cross_into_blocks`
/// is set, the blocks of each `Note` are searched too and the inlines
/// inside them are yielded right after the note.
pub fn walk_inlines(inlines: &[Inline], cross_into_blocks: bool) -> WalkInlines<'_> {
    WalkInlines {
        walk: Walk::from_inlines(inlines, true, cross_into_blocks),
    }
}

/// Start from inlines and yield only the blocks found inside notes.
pub fn blocks_in_inlines(inlines: &[Inline]) -> WalkBlocks<'_> {
    WalkBlocks {
        walk: Walk::from_inlines(inlines, true, true),
    }
}

/// Start from blocks and yield only the inlines found inside them.
pub fn inlines_in_blocks(blocks: &[Block]) -> WalkInlines<'_> {
    WalkInlines {
        walk: Walk::from_blocks(blocks, true, true),
    }
}

/// Walk every block and inline reachable from `blocks`, crossing in both
/// directions.
pub fn walk_all(blocks: &[Block]) -> WalkNodes<'_> {
    WalkNodes {
        walk: Walk::from_blocks(blocks, true, true),
    }
}
