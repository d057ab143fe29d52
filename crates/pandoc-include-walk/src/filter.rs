/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Tag-narrowed views over the walkers.

use crate::walker::{walk_blocks, walk_inlines};
use pandoc_include_types::{Block, BlockTag, CodeBlock, Inline, InlineTag};

/// Blocks reachable from `blocks` whose tag is `tag`, in walker order.
pub fn filter_blocks(
    tag: BlockTag,
    blocks: &[Block],
    cross_into_inlines: bool,
) -> impl Iterator<Item = &Block> {
    walk_blocks(blocks, cross_into_inlines).filter(move |block| block.tag() == tag)
}

/// Inlines reachable from `inlines` whose tag is `tag`, in walker order.
pub fn filter_inlines(
    tag: InlineTag,
    inlines: &[Inline],
    cross_into_blocks: bool,
) -> impl Iterator<Item = &Inline> {
    walk_inlines(inlines, cross_into_blocks).filter(move |inline| inline.tag() == tag)
}

/// Every code block reachable from `blocks`, as its payload.
pub fn code_blocks(
    blocks: &[Block],
    cross_into_inlines: bool,
) -> impl Iterator<Item = &CodeBlock> {
    walk_blocks(blocks, cross_into_inlines).filter_map(|block| match block {
        Block::CodeBlock(code) => Some(code),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandoc_include_types::{Inline, text_inlines};

    #[test]
    fn test_filter_blocks_keeps_order() {
        let blocks = vec![
            Block::code_block_with_classes(["a"], "1"),
            Block::block_quote(vec![Block::code_block_with_classes(["b"], "2")]),
            Block::para(text_inlines("x")),
            Block::code_block_with_classes(["c"], "3"),
        ];
        let texts: Vec<_> = code_blocks(&blocks, false)
            .map(|code| code.text.as_str())
            .collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
        assert_eq!(filter_blocks(BlockTag::CodeBlock, &blocks, false).count(), 3);
        assert_eq!(filter_blocks(BlockTag::Para, &blocks, false).count(), 1);
    }

    #[test]
    fn test_filter_inlines() {
        let inlines = vec![
            Inline::str("a"),
            Inline::Space,
            Inline::strong(vec![Inline::str("b")]),
            Inline::note(vec![Block::para(vec![Inline::str("c")])]),
        ];
        let strs: Vec<_> = filter_inlines(InlineTag::Str, &inlines, false).collect();
        assert_eq!(strs, vec![&Inline::str("a"), &Inline::str("b")]);
        assert_eq!(filter_inlines(InlineTag::Str, &inlines, true).count(), 3);
    }

    #[test]
    fn test_code_blocks_in_notes() {
        let blocks = vec![Block::para(vec![Inline::note(vec![
            Block::code_block_with_classes(["include"], "n.md"),
        ])])];
        assert_eq!(code_blocks(&blocks, false).count(), 0);
        assert_eq!(code_blocks(&blocks, true).count(), 1);
    }
}
