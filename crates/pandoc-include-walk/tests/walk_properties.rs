/*
 * walk_properties.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Property tests for the walkers and filters over generated trees.
 */

use pandoc_include_types::{Block, BlockTag, Blocks, Inline, InlineTag, empty_attr};
use pandoc_include_walk::{code_blocks, filter_blocks, filter_inlines, walk_blocks, walk_inlines};
use proptest::prelude::*;

fn arb_inline_leaf() -> impl Strategy<Value = Inline> {
    prop_oneof![
        "[a-z]{1,5}".prop_map(Inline::str),
        Just(Inline::Space),
        Just(Inline::SoftBreak),
        "[a-z]{1,3}".prop_map(Inline::code),
    ]
}

fn arb_block_leaf() -> impl Strategy<Value = Block> {
    prop_oneof![
        Just(Block::Null),
        Just(Block::HorizontalRule),
        ("[a-z]{1,7}", "[a-z./]{0,8}")
            .prop_map(|(class, text)| Block::code_block_with_classes([class], text)),
    ]
}

fn arb_blocks() -> impl Strategy<Value = Blocks> {
    let block = arb_block_leaf().prop_recursive(4, 64, 4, |inner| {
        let inline = prop_oneof![
            4 => arb_inline_leaf(),
            1 => prop::collection::vec(arb_inline_leaf(), 0..3).prop_map(Inline::emph),
            1 => prop::collection::vec(inner.clone(), 0..3).prop_map(Inline::note),
            1 => prop::collection::vec(inner.clone(), 0..2)
                .prop_map(|blocks| Inline::strong(vec![Inline::note(blocks)])),
        ]
        .boxed();
        let inlines = prop::collection::vec(inline, 0..4).boxed();
        prop_oneof![
            inlines.clone().prop_map(Block::para),
            (1i64..4, inlines).prop_map(|(level, content)| Block::header(level, content)),
            prop::collection::vec(inner.clone(), 0..3).prop_map(Block::block_quote),
            prop::collection::vec(prop::collection::vec(inner.clone(), 0..2), 0..3)
                .prop_map(Block::bullet_list),
            prop::collection::vec(inner, 0..3).prop_map(|content| Block::div(empty_attr(), content)),
        ]
    });
    prop::collection::vec(block, 0..5)
}

// Straightforward recursive reference traversal.
fn reference_blocks<'a>(blocks: &'a [Block], cross: bool, out: &mut Vec<&'a Block>) {
    for block in blocks {
        out.push(block);
        match block {
            Block::Paragraph(p) => reference_inline_blocks(&p.content, cross, out),
            Block::Header(h) => reference_inline_blocks(&h.content, cross, out),
            Block::BlockQuote(q) => reference_blocks(&q.content, cross, out),
            Block::BulletList(l) => {
                for item in &l.content {
                    reference_blocks(item, cross, out);
                }
            }
            Block::Div(d) => reference_blocks(&d.content, cross, out),
            _ => {}
        }
    }
}

fn reference_inline_blocks<'a>(inlines: &'a [Inline], cross: bool, out: &mut Vec<&'a Block>) {
    if !cross {
        return;
    }
    for inline in inlines {
        match inline {
            Inline::Note(n) => reference_blocks(&n.content, cross, out),
            Inline::Emph(e) => reference_inline_blocks(&e.content, cross, out),
            Inline::Strong(s) => reference_inline_blocks(&s.content, cross, out),
            _ => {}
        }
    }
}

proptest! {
    #[test]
    fn walk_blocks_matches_recursive_order(blocks in arb_blocks(), cross in any::<bool>()) {
        let mut expected = Vec::new();
        reference_blocks(&blocks, cross, &mut expected);
        let actual: Vec<&Block> = walk_blocks(&blocks, cross).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn filter_blocks_is_complete_and_ordered(blocks in arb_blocks(), cross in any::<bool>()) {
        let walked: Vec<&Block> = walk_blocks(&blocks, cross).collect();
        let mut total = 0;
        for tag in BlockTag::ALL {
            let filtered: Vec<&Block> = filter_blocks(tag, &blocks, cross).collect();
            let expected: Vec<&Block> =
                walked.iter().copied().filter(|b| b.tag() == tag).collect();
            prop_assert_eq!(&filtered, &expected);
            total += filtered.len();
        }
        prop_assert_eq!(total, walked.len());
    }

    #[test]
    fn code_blocks_match_filter(blocks in arb_blocks(), cross in any::<bool>()) {
        let typed = code_blocks(&blocks, cross).count();
        let tagged = filter_blocks(BlockTag::CodeBlock, &blocks, cross).count();
        prop_assert_eq!(typed, tagged);
    }

    #[test]
    fn crossing_never_loses_blocks(blocks in arb_blocks()) {
        let without: Vec<&Block> = walk_blocks(&blocks, false).collect();
        let with: Vec<&Block> = walk_blocks(&blocks, true).collect();
        prop_assert!(with.len() >= without.len());
        // the uncrossed walk is a subsequence of the crossed one
        let mut rest = with.iter();
        for block in &without {
            prop_assert!(rest.any(|b| std::ptr::eq(*b, *block)));
        }
    }

    #[test]
    fn inline_filter_is_complete(blocks in arb_blocks()) {
        let Some(inlines) = blocks.iter().find_map(|b| match b {
            Block::Paragraph(p) => Some(&p.content),
            _ => None,
        }) else {
            return Ok(());
        };
        for cross in [false, true] {
            let walked = walk_inlines(inlines, cross).count();
            let total: usize = InlineTag::ALL
                .iter()
                .map(|tag| filter_inlines(*tag, inlines, cross).count())
                .sum();
            prop_assert_eq!(total, walked);
        }
    }
}
