/*
 * walk_order.rs
 * Copyright (c) 2025 Posit, PBC
 */

use pandoc_include_types::{
    Alignment, Block, DefinitionList, Inline, Table, empty_attr, text_inlines,
};
use pandoc_include_walk::{NodeRef, walk_all, walk_blocks, walk_inlines};

fn sample_document() -> Vec<Block> {
    vec![
        Block::header(
            1,
            vec![
                Inline::str("Title"),
                Inline::note(vec![Block::para(vec![Inline::str("fn")])]),
            ],
        ),
        Block::div(
            empty_attr(),
            vec![
                Block::code_block_with_classes(["include"], "sub.md"),
                Block::bullet_list(vec![vec![Block::plain(text_inlines("a"))], vec![Block::Null]]),
            ],
        ),
        Block::Table(Table {
            caption: vec![Inline::str("cap")],
            alignments: vec![Alignment::Default],
            widths: vec![0.0],
            headers: vec![vec![Block::plain(vec![Inline::str("h")])]],
            rows: vec![vec![vec![Block::para(vec![Inline::emph(vec![Inline::str(
                "c",
            )])])]]],
        }),
        Block::DefinitionList(DefinitionList {
            content: vec![(
                vec![Inline::str("term")],
                vec![vec![Block::para(vec![Inline::str("def")])]],
            )],
        }),
    ]
}

fn describe(node: NodeRef<'_>) -> String {
    match node {
        NodeRef::Inline(Inline::Str(s)) => format!("Str {}", s.text),
        other => other.tag_name().to_string(),
    }
}

fn listing<'a>(nodes: impl Iterator<Item = NodeRef<'a>>) -> String {
    nodes.map(describe).collect::<Vec<_>>().join("\n")
}

#[test]
fn test_walk_all_order() {
    let doc = sample_document();
    insta::assert_snapshot!(listing(walk_all(&doc)), @r"
    Header
    Str Title
    Note
    Para
    Str fn
    Div
    CodeBlock
    BulletList
    Plain
    Str a
    Null
    Table
    Str cap
    Plain
    Str h
    Para
    Emph
    Str c
    DefinitionList
    Str term
    Para
    Str def
    ");
}

#[test]
fn test_walk_blocks_without_crossing() {
    let doc = sample_document();
    insta::assert_snapshot!(listing(walk_blocks(&doc, false).map(NodeRef::Block)), @r"
    Header
    Div
    CodeBlock
    BulletList
    Plain
    Null
    Table
    Plain
    Para
    DefinitionList
    Para
    ");
}

#[test]
fn test_walk_blocks_with_crossing_adds_note_blocks() {
    let doc = sample_document();
    let crossed: Vec<_> = walk_blocks(&doc, true).map(|b| b.tag().name()).collect();
    assert_eq!(
        crossed,
        vec![
            "Header",
            "Para",
            "Div",
            "CodeBlock",
            "BulletList",
            "Plain",
            "Null",
            "Table",
            "Plain",
            "Para",
            "DefinitionList",
            "Para",
        ]
    );
}

#[test]
fn test_walk_inlines_from_header_content() {
    let doc = sample_document();
    let Block::Header(header) = &doc[0] else {
        panic!("expected a header");
    };
    let plain: Vec<_> = walk_inlines(&header.content, false)
        .map(|i| i.tag().name())
        .collect();
    assert_eq!(plain, vec!["Str", "Note"]);

    insta::assert_snapshot!(listing(walk_inlines(&header.content, true).map(NodeRef::Inline)), @r"
    Str Title
    Note
    Str fn
    ");
}
