/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Writer for the Pandoc JSON AST (pandoc-types 1.17).
 */

use pandoc_include_types::{
    Attr, Block, Blocks, Citation, CitationMode, Inline, Inlines, ListAttributes, MathType, Meta,
    MetaValue, Pandoc, QuoteType, Table, Target,
};
use serde_json::{Map, Value, json};

fn node(t: &str, c: Option<Value>) -> Value {
    match c {
        Some(c) => json!({"t": t, "c": c}),
        None => json!({"t": t}),
    }
}

fn write_attr(attr: &Attr) -> Value {
    json!([
        attr.0, // id
        attr.1, // classes
        attr.2
            .iter()
            .map(|(k, v)| json!([k, v]))
            .collect::<Vec<_>>() // key-value pairs
    ])
}

fn write_target(target: &Target) -> Value {
    json!([target.0, target.1])
}

fn write_inlines(inlines: &Inlines) -> Value {
    Value::Array(inlines.iter().map(write_inline).collect())
}

fn write_blocks(blocks: &Blocks) -> Value {
    Value::Array(blocks.iter().map(write_block).collect())
}

fn write_blockss(blockss: &[Blocks]) -> Value {
    Value::Array(blockss.iter().map(write_blocks).collect())
}

fn write_citation(citation: &Citation) -> Value {
    let mode = match citation.mode {
        CitationMode::AuthorInText => "AuthorInText",
        CitationMode::SuppressAuthor => "SuppressAuthor",
        CitationMode::NormalCitation => "NormalCitation",
    };
    json!({
        "citationId": citation.id,
        "citationPrefix": write_inlines(&citation.prefix),
        "citationSuffix": write_inlines(&citation.suffix),
        "citationMode": node(mode, None),
        "citationNoteNum": citation.note_num,
        "citationHash": citation.hash,
    })
}

fn write_inline(inline: &Inline) -> Value {
    let t = inline.tag().name();
    let c = match inline {
        Inline::Space | Inline::SoftBreak | Inline::LineBreak => None,
        Inline::Str(s) => Some(json!(s.text)),
        Inline::Emph(e) => Some(write_inlines(&e.content)),
        Inline::Strong(s) => Some(write_inlines(&s.content)),
        Inline::Strikeout(s) => Some(write_inlines(&s.content)),
        Inline::Superscript(s) => Some(write_inlines(&s.content)),
        Inline::Subscript(s) => Some(write_inlines(&s.content)),
        Inline::SmallCaps(s) => Some(write_inlines(&s.content)),
        Inline::Quoted(q) => {
            let quote_type = match q.quote_type {
                QuoteType::SingleQuote => "SingleQuote",
                QuoteType::DoubleQuote => "DoubleQuote",
            };
            Some(json!([node(quote_type, None), write_inlines(&q.content)]))
        }
        Inline::Cite(cite) => Some(json!([
            cite.citations.iter().map(write_citation).collect::<Vec<_>>(),
            write_inlines(&cite.content)
        ])),
        Inline::Code(code) => Some(json!([write_attr(&code.attr), code.text])),
        Inline::Math(math) => {
            let math_type = match math.math_type {
                MathType::InlineMath => "InlineMath",
                MathType::DisplayMath => "DisplayMath",
            };
            Some(json!([node(math_type, None), math.text]))
        }
        Inline::RawInline(raw) => Some(json!([raw.format, raw.text])),
        Inline::Link(link) => Some(json!([
            write_attr(&link.attr),
            write_inlines(&link.content),
            write_target(&link.target)
        ])),
        Inline::Image(image) => Some(json!([
            write_attr(&image.attr),
            write_inlines(&image.content),
            write_target(&image.target)
        ])),
        Inline::Note(note) => Some(write_blocks(&note.content)),
        Inline::Span(span) => Some(json!([write_attr(&span.attr), write_inlines(&span.content)])),
    };
    node(t, c)
}

fn write_list_attributes(attr: &ListAttributes) -> Value {
    json!([attr.0, node(attr.1.name(), None), node(attr.2.name(), None)])
}

fn write_table(table: &Table) -> Value {
    json!([
        write_inlines(&table.caption),
        table
            .alignments
            .iter()
            .map(|a| node(a.name(), None))
            .collect::<Vec<_>>(),
        table.widths,
        write_blockss(&table.headers),
        table
            .rows
            .iter()
            .map(|row| write_blockss(row))
            .collect::<Vec<_>>()
    ])
}

fn write_block(block: &Block) -> Value {
    let t = block.tag().name();
    let c = match block {
        Block::HorizontalRule | Block::Null => None,
        Block::Plain(plain) => Some(write_inlines(&plain.content)),
        Block::Paragraph(para) => Some(write_inlines(&para.content)),
        Block::LineBlock(line_block) => Some(Value::Array(
            line_block.content.iter().map(write_inlines).collect(),
        )),
        Block::CodeBlock(code) => Some(json!([write_attr(&code.attr), code.text])),
        Block::RawBlock(raw) => Some(json!([raw.format, raw.text])),
        Block::BlockQuote(quote) => Some(write_blocks(&quote.content)),
        Block::OrderedList(list) => Some(json!([
            write_list_attributes(&list.attr),
            write_blockss(&list.content)
        ])),
        Block::BulletList(list) => Some(write_blockss(&list.content)),
        Block::DefinitionList(list) => Some(Value::Array(
            list.content
                .iter()
                .map(|(term, definitions)| json!([write_inlines(term), write_blockss(definitions)]))
                .collect(),
        )),
        Block::Header(header) => Some(json!([
            header.level,
            write_attr(&header.attr),
            write_inlines(&header.content)
        ])),
        Block::Table(table) => Some(write_table(table)),
        Block::Div(div) => Some(json!([write_attr(&div.attr), write_blocks(&div.content)])),
    };
    node(t, c)
}

fn write_meta_value(value: &MetaValue) -> Value {
    let t = value.tag().name();
    let c = match value {
        MetaValue::MetaMap(map) => write_meta(map),
        MetaValue::MetaList(items) => Value::Array(items.iter().map(write_meta_value).collect()),
        MetaValue::MetaBool(b) => json!(b),
        MetaValue::MetaString(s) => json!(s),
        MetaValue::MetaInlines(inlines) => write_inlines(inlines),
        MetaValue::MetaBlocks(blocks) => write_blocks(blocks),
    };
    node(t, Some(c))
}

fn write_meta(meta: &Meta) -> Value {
    let mut obj = Map::new();
    for (key, value) in meta {
        obj.insert(key.clone(), write_meta_value(value));
    }
    Value::Object(obj)
}

/// Build the JSON value for a whole document.
pub fn to_value(pandoc: &Pandoc) -> Value {
    json!({
        "pandoc-api-version": pandoc.api_version,
        "meta": write_meta(&pandoc.meta),
        "blocks": write_blocks(&pandoc.blocks),
    })
}

pub fn write<W: std::io::Write>(pandoc: &Pandoc, writer: &mut W) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, &to_value(pandoc)).map_err(std::io::Error::other)?;
    writer.flush()
}
