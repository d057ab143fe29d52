/*
 * filter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * JSON filter plumbing.
 *
 * Pandoc runs a JSON filter with the document as JSON on stdin and reads
 * the filtered document as JSON from stdout.
 */

use crate::errors::{IncludeError, JsonFilterError};
use crate::{readers, writers};
use pandoc_include_types::Pandoc;
use std::io::{Read, Write};

/// Read a document from `reader`, apply `f` and write the result to `writer`.
///
/// The output is serialized in full before anything is written, so
/// `writer` receives nothing when reading or `f` fails.
pub fn run_json_filter<R, W, F>(reader: &mut R, writer: &mut W, f: F) -> Result<(), JsonFilterError>
where
    R: Read,
    W: Write,
    F: FnOnce(Pandoc) -> Result<Pandoc, IncludeError>,
{
    let input = readers::json::read(reader).map_err(JsonFilterError::Read)?;
    let output = f(input)?;

    let mut buf = Vec::new();
    writers::json::write(&output, &mut buf).map_err(JsonFilterError::Write)?;
    writer.write_all(&buf).map_err(JsonFilterError::Write)?;
    writer.flush().map_err(JsonFilterError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pandoc_include_types::{Block, Inline};
    use std::path::PathBuf;

    const INPUT: &str = r#"{"pandoc-api-version":[1,17,5,4],"meta":{},"blocks":[{"t":"Para","c":[{"t":"Str","c":"hi"}]}]}"#;

    #[test]
    fn test_identity_filter() {
        let mut out = Vec::new();
        run_json_filter(&mut INPUT.as_bytes(), &mut out, Ok).unwrap();
        let doc = readers::json::read(&mut out.as_slice()).unwrap();
        assert_eq!(doc.blocks, vec![Block::para(vec![Inline::str("hi")])]);
    }

    #[test]
    fn test_transform_is_applied() {
        let mut out = Vec::new();
        run_json_filter(&mut INPUT.as_bytes(), &mut out, |mut doc| {
            doc.blocks.push(Block::HorizontalRule);
            Ok(doc)
        })
        .unwrap();
        let doc = readers::json::read(&mut out.as_slice()).unwrap();
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_nothing_written_on_failure() {
        let mut out = Vec::new();
        let err = run_json_filter(&mut INPUT.as_bytes(), &mut out, |_| {
            Err(IncludeError::EmptyDirective {
                base_dir: PathBuf::from("."),
            })
        })
        .unwrap_err();
        assert!(matches!(err, JsonFilterError::Transform(_)));
        assert!(out.is_empty());

        let err = run_json_filter(&mut "not json".as_bytes(), &mut out, Ok).unwrap_err();
        assert!(matches!(err, JsonFilterError::Read(_)));
        assert!(out.is_empty());
    }
}
