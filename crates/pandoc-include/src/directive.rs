/*
 * directive.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Include directives: code blocks whose first class is the marker class,
//! with one `<path>[!<dialect>]` reference per line of text.

use crate::errors::IncludeError;
use crate::options::IncludeOptions;
use pandoc_include_types::{CodeBlock, first_class};
use std::path::{Component, Path, PathBuf};

/// One file reference from a directive body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRef {
    /// The path as written in the directive.
    pub path: String,
    /// Input format passed to the converter.
    pub dialect: String,
}

pub fn is_directive(code: &CodeBlock, options: &IncludeOptions) -> bool {
    first_class(&code.attr) == Some(options.marker_class.as_str())
}

/// Parse a directive body into its references, in listed order.
///
/// Lines are trimmed and blank lines skipped. An absent or empty dialect
/// means `options.default_dialect`.
pub fn parse_directive(
    text: &str,
    base_dir: &Path,
    options: &IncludeOptions,
) -> Result<Vec<IncludeRef>, IncludeError> {
    let refs: Vec<IncludeRef> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (path, dialect) = match line.split_once(options.separator) {
                Some((path, dialect)) => (path.trim(), dialect.trim()),
                None => (line, ""),
            };
            let dialect = if dialect.is_empty() {
                options.default_dialect.as_str()
            } else {
                dialect
            };
            IncludeRef {
                path: path.to_string(),
                dialect: dialect.to_string(),
            }
        })
        .collect();

    if refs.is_empty() {
        return Err(IncludeError::EmptyDirective {
            base_dir: base_dir.to_path_buf(),
        });
    }
    Ok(refs)
}

/// Join `path` onto `base_dir` and normalise `.` and `..` lexically.
///
/// Absolute paths ignore `base_dir`. Symlinks are not resolved and `..`
/// never climbs above the root.
pub fn resolve_path(base_dir: &Path, path: &str) -> PathBuf {
    let joined = base_dir.join(path);
    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match resolved.components().next_back() {
                Some(Component::Normal(_)) => {
                    resolved.pop();
                }
                None | Some(Component::ParentDir) => resolved.push(".."),
                Some(Component::RootDir | Component::Prefix(_) | Component::CurDir) => {}
            },
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}
