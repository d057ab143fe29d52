/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Reader for the Pandoc JSON AST (pandoc-types 1.17).
 */

pub use crate::errors::JsonReadError;
use pandoc_include_types::{
    Alignment, Attr, Block, BlockQuote, BlockTag, Blocks, BulletList, Citation, CitationMode, Cite,
    Code, CodeBlock, DefinitionList, Div, Emph, Header, Image, Inline, InlineTag, Inlines,
    LineBlock, Link, ListAttributes, ListNumberDelim, ListNumberStyle, Math, MathType, Meta,
    MetaValue, Note, OrderedList, Pandoc, Paragraph, Plain, QuoteType, Quoted, RawBlock, RawInline,
    SmallCaps, Span, Str, Strikeout, Strong, Subscript, Superscript, Table, Target,
    is_supported_api_version,
};
use serde_json::{Map, Value};

type Result<T> = std::result::Result<T, JsonReadError>;

fn invalid(msg: impl Into<String>) -> JsonReadError {
    JsonReadError::InvalidType(msg.into())
}

fn read_str(value: &Value, what: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(format!("{} must be a string", what)))
}

fn read_int(value: &Value, what: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| invalid(format!("{} must be an integer", what)))
}

fn read_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| invalid(format!("Expected array for {}", what)))
}

/// Read a fixed-size tuple encoded as a JSON array.
fn read_tuple<'a>(value: &'a Value, len: usize, what: &str) -> Result<&'a [Value]> {
    let arr = read_array(value, what)?;
    if arr.len() != len {
        return Err(invalid(format!(
            "{} array must have {} elements, found {}",
            what,
            len,
            arr.len()
        )));
    }
    Ok(arr)
}

fn read_list<T>(value: &Value, what: &str, f: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
    read_array(value, what)?.iter().map(f).collect()
}

/// Split a `{"t": ..., "c": ...}` node into its tag and optional content.
fn read_node<'a>(value: &'a Value, what: &str) -> Result<(&'a str, Option<&'a Value>)> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid(format!("Expected object for {}", what)))?;
    let t = obj
        .get("t")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonReadError::MissingField("t".to_string()))?;
    Ok((t, obj.get("c")))
}

fn content<'a>(c: Option<&'a Value>, tag: &str) -> Result<&'a Value> {
    c.ok_or_else(|| JsonReadError::MissingField(format!("c (in {})", tag)))
}

/// Read a unit enum encoded as `{"t": "Name"}`.
fn read_enum_tag<'a>(value: &'a Value, what: &str) -> Result<&'a str> {
    read_node(value, what).map(|(t, _)| t)
}

fn read_attr(value: &Value) -> Result<Attr> {
    let arr = read_tuple(value, 3, "Attr")?;
    let id = read_str(&arr[0], "Attr id")?;
    let classes = read_list(&arr[1], "Attr classes", |v| read_str(v, "Class"))?;
    let kvs = read_list(&arr[2], "Attr key-values", |v| {
        let kv = read_tuple(v, 2, "Key-value pair")?;
        Ok((read_str(&kv[0], "Key")?, read_str(&kv[1], "Value")?))
    })?;
    Ok((id, classes, kvs))
}

fn read_target(value: &Value) -> Result<Target> {
    let arr = read_tuple(value, 2, "Target")?;
    Ok((read_str(&arr[0], "Target url")?, read_str(&arr[1], "Target title")?))
}

fn read_inlines(value: &Value) -> Result<Inlines> {
    read_list(value, "Inlines", read_inline)
}

fn read_blocks(value: &Value) -> Result<Blocks> {
    read_list(value, "Blocks", read_block)
}

fn read_blockss(value: &Value) -> Result<Vec<Blocks>> {
    read_list(value, "list items", read_blocks)
}

fn read_quote_type(value: &Value) -> Result<QuoteType> {
    match read_enum_tag(value, "QuoteType")? {
        "SingleQuote" => Ok(QuoteType::SingleQuote),
        "DoubleQuote" => Ok(QuoteType::DoubleQuote),
        other => Err(JsonReadError::UnsupportedVariant(format!("QuoteType {}", other))),
    }
}

fn read_math_type(value: &Value) -> Result<MathType> {
    match read_enum_tag(value, "MathType")? {
        "InlineMath" => Ok(MathType::InlineMath),
        "DisplayMath" => Ok(MathType::DisplayMath),
        other => Err(JsonReadError::UnsupportedVariant(format!("MathType {}", other))),
    }
}

fn read_citation_mode(value: &Value) -> Result<CitationMode> {
    match read_enum_tag(value, "CitationMode")? {
        "AuthorInText" => Ok(CitationMode::AuthorInText),
        "SuppressAuthor" => Ok(CitationMode::SuppressAuthor),
        "NormalCitation" => Ok(CitationMode::NormalCitation),
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "CitationMode {}",
            other
        ))),
    }
}

fn read_citation(value: &Value) -> Result<Citation> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("Expected object for Citation"))?;
    let field = |name: &str| {
        obj.get(name)
            .ok_or_else(|| JsonReadError::MissingField(name.to_string()))
    };
    Ok(Citation {
        id: read_str(field("citationId")?, "citationId")?,
        prefix: read_inlines(field("citationPrefix")?)?,
        suffix: read_inlines(field("citationSuffix")?)?,
        mode: read_citation_mode(field("citationMode")?)?,
        note_num: read_int(field("citationNoteNum")?, "citationNoteNum")?,
        hash: read_int(field("citationHash")?, "citationHash")?,
    })
}

fn read_inline(value: &Value) -> Result<Inline> {
    let (t, c) = read_node(value, "Inline")?;
    let tag = InlineTag::from_name(t)
        .ok_or_else(|| JsonReadError::UnsupportedVariant(format!("Inline {}", t)))?;

    let inline = match tag {
        InlineTag::Space => Inline::Space,
        InlineTag::SoftBreak => Inline::SoftBreak,
        InlineTag::LineBreak => Inline::LineBreak,
        InlineTag::Str => Inline::Str(Str {
            text: read_str(content(c, t)?, "Str content")?,
        }),
        InlineTag::Emph => Inline::Emph(Emph {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::Strong => Inline::Strong(Strong {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::Strikeout => Inline::Strikeout(Strikeout {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::Superscript => Inline::Superscript(Superscript {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::Subscript => Inline::Subscript(Subscript {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::SmallCaps => Inline::SmallCaps(SmallCaps {
            content: read_inlines(content(c, t)?)?,
        }),
        InlineTag::Quoted => {
            let arr = read_tuple(content(c, t)?, 2, "Quoted")?;
            Inline::Quoted(Quoted {
                quote_type: read_quote_type(&arr[0])?,
                content: read_inlines(&arr[1])?,
            })
        }
        InlineTag::Cite => {
            let arr = read_tuple(content(c, t)?, 2, "Cite")?;
            Inline::Cite(Cite {
                citations: read_list(&arr[0], "Citations", read_citation)?,
                content: read_inlines(&arr[1])?,
            })
        }
        InlineTag::Code => {
            let arr = read_tuple(content(c, t)?, 2, "Code")?;
            Inline::Code(Code {
                attr: read_attr(&arr[0])?,
                text: read_str(&arr[1], "Code text")?,
            })
        }
        InlineTag::Math => {
            let arr = read_tuple(content(c, t)?, 2, "Math")?;
            Inline::Math(Math {
                math_type: read_math_type(&arr[0])?,
                text: read_str(&arr[1], "Math text")?,
            })
        }
        InlineTag::RawInline => {
            let arr = read_tuple(content(c, t)?, 2, "RawInline")?;
            Inline::RawInline(RawInline {
                format: read_str(&arr[0], "RawInline format")?,
                text: read_str(&arr[1], "RawInline text")?,
            })
        }
        InlineTag::Link => {
            let arr = read_tuple(content(c, t)?, 3, "Link")?;
            Inline::Link(Link {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
                target: read_target(&arr[2])?,
            })
        }
        InlineTag::Image => {
            let arr = read_tuple(content(c, t)?, 3, "Image")?;
            Inline::Image(Image {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
                target: read_target(&arr[2])?,
            })
        }
        InlineTag::Note => Inline::Note(Note {
            content: read_blocks(content(c, t)?)?,
        }),
        InlineTag::Span => {
            let arr = read_tuple(content(c, t)?, 2, "Span")?;
            Inline::Span(Span {
                attr: read_attr(&arr[0])?,
                content: read_inlines(&arr[1])?,
            })
        }
    };
    Ok(inline)
}

fn read_list_attributes(value: &Value) -> Result<ListAttributes> {
    let arr = read_tuple(value, 3, "ListAttributes")?;
    let start = read_int(&arr[0], "List start number")?;
    let style = match read_enum_tag(&arr[1], "ListNumberStyle")? {
        "DefaultStyle" => ListNumberStyle::Default,
        "Example" => ListNumberStyle::Example,
        "Decimal" => ListNumberStyle::Decimal,
        "LowerRoman" => ListNumberStyle::LowerRoman,
        "UpperRoman" => ListNumberStyle::UpperRoman,
        "LowerAlpha" => ListNumberStyle::LowerAlpha,
        "UpperAlpha" => ListNumberStyle::UpperAlpha,
        other => {
            return Err(JsonReadError::UnsupportedVariant(format!(
                "ListNumberStyle {}",
                other
            )));
        }
    };
    let delim = match read_enum_tag(&arr[2], "ListNumberDelim")? {
        "DefaultDelim" => ListNumberDelim::Default,
        "Period" => ListNumberDelim::Period,
        "OneParen" => ListNumberDelim::OneParen,
        "TwoParens" => ListNumberDelim::TwoParens,
        other => {
            return Err(JsonReadError::UnsupportedVariant(format!(
                "ListNumberDelim {}",
                other
            )));
        }
    };
    Ok((start, style, delim))
}

fn read_alignment(value: &Value) -> Result<Alignment> {
    match read_enum_tag(value, "Alignment")? {
        "AlignLeft" => Ok(Alignment::Left),
        "AlignRight" => Ok(Alignment::Right),
        "AlignCenter" => Ok(Alignment::Center),
        "AlignDefault" => Ok(Alignment::Default),
        other => Err(JsonReadError::UnsupportedVariant(format!("Alignment {}", other))),
    }
}

fn read_table(value: &Value) -> Result<Table> {
    let arr = read_tuple(value, 5, "Table")?;
    Ok(Table {
        caption: read_inlines(&arr[0])?,
        alignments: read_list(&arr[1], "Table alignments", read_alignment)?,
        widths: read_list(&arr[2], "Table widths", |v| {
            v.as_f64()
                .ok_or_else(|| invalid("Table width must be a number"))
        })?,
        headers: read_blockss(&arr[3])?,
        rows: read_list(&arr[4], "Table rows", read_blockss)?,
    })
}

fn read_block(value: &Value) -> Result<Block> {
    let (t, c) = read_node(value, "Block")?;
    let tag = BlockTag::from_name(t)
        .ok_or_else(|| JsonReadError::UnsupportedVariant(format!("Block {}", t)))?;

    let block = match tag {
        BlockTag::HorizontalRule => Block::HorizontalRule,
        BlockTag::Null => Block::Null,
        BlockTag::Plain => Block::Plain(Plain {
            content: read_inlines(content(c, t)?)?,
        }),
        BlockTag::Para => Block::Paragraph(Paragraph {
            content: read_inlines(content(c, t)?)?,
        }),
        BlockTag::LineBlock => Block::LineBlock(LineBlock {
            content: read_list(content(c, t)?, "LineBlock", read_inlines)?,
        }),
        BlockTag::CodeBlock => {
            let arr = read_tuple(content(c, t)?, 2, "CodeBlock")?;
            Block::CodeBlock(CodeBlock {
                attr: read_attr(&arr[0])?,
                text: read_str(&arr[1], "CodeBlock text")?,
            })
        }
        BlockTag::RawBlock => {
            let arr = read_tuple(content(c, t)?, 2, "RawBlock")?;
            Block::RawBlock(RawBlock {
                format: read_str(&arr[0], "RawBlock format")?,
                text: read_str(&arr[1], "RawBlock text")?,
            })
        }
        BlockTag::BlockQuote => Block::BlockQuote(BlockQuote {
            content: read_blocks(content(c, t)?)?,
        }),
        BlockTag::OrderedList => {
            let arr = read_tuple(content(c, t)?, 2, "OrderedList")?;
            Block::OrderedList(OrderedList {
                attr: read_list_attributes(&arr[0])?,
                content: read_blockss(&arr[1])?,
            })
        }
        BlockTag::BulletList => Block::BulletList(BulletList {
            content: read_blockss(content(c, t)?)?,
        }),
        BlockTag::DefinitionList => Block::DefinitionList(DefinitionList {
            content: read_list(content(c, t)?, "DefinitionList", |item| {
                let pair = read_tuple(item, 2, "DefinitionList item")?;
                Ok((read_inlines(&pair[0])?, read_blockss(&pair[1])?))
            })?,
        }),
        BlockTag::Header => {
            let arr = read_tuple(content(c, t)?, 3, "Header")?;
            Block::Header(Header {
                level: read_int(&arr[0], "Header level")?,
                attr: read_attr(&arr[1])?,
                content: read_inlines(&arr[2])?,
            })
        }
        BlockTag::Table => Block::Table(read_table(content(c, t)?)?),
        BlockTag::Div => {
            let arr = read_tuple(content(c, t)?, 2, "Div")?;
            Block::Div(Div {
                attr: read_attr(&arr[0])?,
                content: read_blocks(&arr[1])?,
            })
        }
    };
    Ok(block)
}

fn read_meta_value(value: &Value) -> Result<MetaValue> {
    let (t, c) = read_node(value, "MetaValue")?;
    match t {
        "MetaMap" => Ok(MetaValue::MetaMap(read_meta(content(c, t)?)?)),
        "MetaList" => Ok(MetaValue::MetaList(read_list(
            content(c, t)?,
            "MetaList",
            read_meta_value,
        )?)),
        "MetaBool" => content(c, t)?
            .as_bool()
            .map(MetaValue::MetaBool)
            .ok_or_else(|| invalid("MetaBool content must be a boolean")),
        "MetaString" => Ok(MetaValue::MetaString(read_str(
            content(c, t)?,
            "MetaString content",
        )?)),
        "MetaInlines" => Ok(MetaValue::MetaInlines(read_inlines(content(c, t)?)?)),
        "MetaBlocks" => Ok(MetaValue::MetaBlocks(read_blocks(content(c, t)?)?)),
        other => Err(JsonReadError::UnsupportedVariant(format!(
            "MetaValue {}",
            other
        ))),
    }
}

fn read_meta(value: &Value) -> Result<Meta> {
    let obj: &Map<String, Value> = value
        .as_object()
        .ok_or_else(|| invalid("Expected object for Meta"))?;
    let mut meta = Meta::new();
    for (key, value) in obj {
        meta.insert(key.clone(), read_meta_value(value)?);
    }
    Ok(meta)
}

fn read_api_version(value: &Value) -> Result<Vec<u32>> {
    let version = read_list(value, "pandoc-api-version", |v| {
        v.as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| invalid("pandoc-api-version entries must be small integers"))
    })?;
    if !is_supported_api_version(&version) {
        return Err(JsonReadError::UnsupportedApiVersion { version });
    }
    Ok(version)
}

/// Read a whole document from an already parsed JSON value.
pub fn read_value(value: &Value) -> Result<Pandoc> {
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("Expected object for Pandoc"))?;
    let field = |name: &str| {
        obj.get(name)
            .ok_or_else(|| JsonReadError::MissingField(name.to_string()))
    };

    // The version is checked first so that documents from other pandoc
    // releases are rejected with a clear message instead of a shape error.
    let api_version = read_api_version(field("pandoc-api-version")?)?;
    let meta = read_meta(field("meta")?)?;
    let blocks = read_blocks(field("blocks")?)?;
    Ok(Pandoc {
        api_version,
        meta,
        blocks,
    })
}

pub fn read_str_document(input: &str) -> Result<Pandoc> {
    let json: Value = serde_json::from_str(input)?;
    read_value(&json)
}

pub fn read<R: std::io::Read>(reader: &mut R) -> Result<Pandoc> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| JsonReadError::InvalidJson(serde_json::Error::io(e)))?;
    read_str_document(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(blocks: Value) -> Value {
        json!({"pandoc-api-version": [1, 17, 5, 4], "meta": {}, "blocks": blocks})
    }

    #[test]
    fn test_read_code_block() {
        let pandoc = read_value(&doc(json!([
            {"t": "CodeBlock", "c": [["", ["include"], []], "sub.md"]}
        ])))
        .unwrap();
        assert_eq!(
            pandoc.blocks,
            vec![Block::code_block_with_classes(["include"], "sub.md")]
        );
        assert_eq!(pandoc.api_version, vec![1, 17, 5, 4]);
    }

    #[test]
    fn test_unknown_block_tag_is_rejected() {
        let err = read_value(&doc(json!([{"t": "Figure", "c": []}]))).unwrap_err();
        assert!(matches!(err, JsonReadError::UnsupportedVariant(ref v) if v == "Block Figure"));
    }

    #[test]
    fn test_unknown_inline_tag_is_rejected() {
        let err = read_value(&doc(json!([
            {"t": "Para", "c": [{"t": "Underline", "c": []}]}
        ])))
        .unwrap_err();
        assert!(matches!(err, JsonReadError::UnsupportedVariant(_)));
    }

    #[test]
    fn test_payload_mismatch_is_invalid_type() {
        let err = read_value(&doc(json!([{"t": "Para", "c": "text"}]))).unwrap_err();
        assert!(matches!(err, JsonReadError::InvalidType(_)));

        let err = read_value(&doc(json!([{"t": "Header", "c": [1, ["", [], []]]}]))).unwrap_err();
        assert!(matches!(err, JsonReadError::InvalidType(_)));
    }

    #[test]
    fn test_missing_content() {
        let err = read_value(&doc(json!([{"t": "Para"}]))).unwrap_err();
        assert!(matches!(err, JsonReadError::MissingField(_)));
    }

    #[test]
    fn test_version_rejected() {
        let value = json!({"pandoc-api-version": [1, 22], "meta": {}, "blocks": []});
        let err = read_value(&value).unwrap_err();
        assert!(matches!(
            err,
            JsonReadError::UnsupportedApiVersion { ref version } if version == &vec![1, 22]
        ));

        let value = json!({"meta": {}, "blocks": []});
        assert!(matches!(
            read_value(&value).unwrap_err(),
            JsonReadError::MissingField(_)
        ));
    }

    #[test]
    fn test_read_meta() {
        let value = json!({
            "pandoc-api-version": [1, 17, 5, 4],
            "meta": {
                "draft": {"t": "MetaBool", "c": true},
                "title": {"t": "MetaInlines", "c": [{"t": "Str", "c": "Hi"}]},
                "tags": {"t": "MetaList", "c": [{"t": "MetaString", "c": "a"}]}
            },
            "blocks": []
        });
        let pandoc = read_value(&value).unwrap();
        assert_eq!(pandoc.meta.get("draft"), Some(&MetaValue::MetaBool(true)));
        assert_eq!(
            pandoc.meta.get("title"),
            Some(&MetaValue::MetaInlines(vec![Inline::str("Hi")]))
        );
        assert_eq!(
            pandoc.meta.get("tags"),
            Some(&MetaValue::MetaList(vec![MetaValue::MetaString("a".into())]))
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            read_str_document("{not json").unwrap_err(),
            JsonReadError::InvalidJson(_)
        ));
    }
}
