/*
 * include.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Recursive include expansion.
 */

//! Recursive include expansion.
//!
//! Every code block whose first class is the marker class (`include`) is
//! replaced by the documents it names. For each reference the file is
//! resolved against the current base directory, converted, expanded with
//! the file's own directory as the new base, and wrapped in a
//! `Div ("", ["included"], [])`. A directive naming several files becomes
//! that many sibling divs, in listed order.
//!
//! Expansion of a fragment happens in two steps. First all directives are
//! found with the typed code-block filter and expanded in document order,
//! depth-first. Then the fragment is rebuilt with `splice_blocks`, which
//! visits blocks in the same order, and each directive is swapped for its
//! expansion. Code blocks inside footnotes are directives too.
//!
//! Any failure aborts the whole expansion.

use crate::converter::{Converter, PandocConverter};
use crate::directive::{is_directive, parse_directive, resolve_path};
use crate::errors::IncludeError;
use crate::options::IncludeOptions;
use crate::transform::AstTransform;
use pandoc_include_types::{Block, Blocks, Pandoc, attr_with_classes};
use pandoc_include_walk::{FilterReturn, code_blocks, splice_blocks};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Expand all include directives in `document`, resolving relative paths
/// against `base_dir` and converting files with pandoc.
pub fn expand(base_dir: impl AsRef<Path>, document: Pandoc) -> Result<Pandoc, IncludeError> {
    let options = IncludeOptions::default();
    let converter = PandocConverter::from_options(&options);
    expand_with(&options, &converter, base_dir.as_ref(), document)
}

/// Like [`expand`], with explicit options and converter.
///
/// Only `document.blocks` is changed; the metadata and API version are
/// returned as given.
pub fn expand_with(
    options: &IncludeOptions,
    converter: &dyn Converter,
    base_dir: &Path,
    mut document: Pandoc,
) -> Result<Pandoc, IncludeError> {
    let mut expander = Expander::new(options, converter);
    document.blocks = expander.expand_fragment(document.blocks, base_dir)?;
    tracing::info!(
        base_dir = %base_dir.display(),
        files = expander.files_included,
        "Include expansion finished"
    );
    Ok(document)
}

/// Include expansion as a pipeline step.
pub struct IncludeTransform {
    base_dir: PathBuf,
    options: IncludeOptions,
    converter: Box<dyn Converter>,
}

impl IncludeTransform {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        IncludeTransform::with_options(base_dir, IncludeOptions::default())
    }

    pub fn with_options(base_dir: impl Into<PathBuf>, options: IncludeOptions) -> Self {
        let converter = Box::new(PandocConverter::from_options(&options));
        IncludeTransform {
            base_dir: base_dir.into(),
            options,
            converter,
        }
    }

    /// Replace the converter, e.g. with a stub in tests.
    pub fn with_converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }
}

impl AstTransform for IncludeTransform {
    fn name(&self) -> &str {
        "include"
    }

    fn transform(&self, ast: &mut Pandoc) -> Result<(), IncludeError> {
        let blocks = std::mem::take(&mut ast.blocks);
        let mut expander = Expander::new(&self.options, self.converter.as_ref());
        ast.blocks = expander.expand_fragment(blocks, &self.base_dir)?;
        Ok(())
    }
}

struct Expander<'a> {
    options: &'a IncludeOptions,
    converter: &'a dyn Converter,
    // files currently being expanded, outermost first
    stack: Vec<PathBuf>,
    files_included: usize,
}

impl<'a> Expander<'a> {
    fn new(options: &'a IncludeOptions, converter: &'a dyn Converter) -> Self {
        Expander {
            options,
            converter,
            stack: Vec::new(),
            files_included: 0,
        }
    }

    fn expand_fragment(&mut self, blocks: Blocks, base_dir: &Path) -> Result<Blocks, IncludeError> {
        let mut planned = VecDeque::new();
        for code in code_blocks(&blocks, true) {
            if is_directive(code, self.options) {
                planned.push_back(self.expand_directive(&code.text, base_dir)?);
            }
        }
        if planned.is_empty() {
            return Ok(blocks);
        }

        let options = self.options;
        splice_blocks(blocks, true, &mut |block: Block| match block {
            Block::CodeBlock(code) if is_directive(&code, options) => match planned.pop_front() {
                Some(divs) => Ok(FilterReturn::FilterResult(divs, false)),
                None => Err(IncludeError::UnplannedDirective { text: code.text }),
            },
            other => Ok(FilterReturn::Unchanged(other)),
        })
    }

    /// One div per referenced file.
    fn expand_directive(&mut self, text: &str, base_dir: &Path) -> Result<Blocks, IncludeError> {
        let refs = parse_directive(text, base_dir, self.options)?;
        tracing::debug!(
            base_dir = %base_dir.display(),
            files = refs.len(),
            "Expanding include directive"
        );
        refs.iter()
            .map(|include| {
                let path = resolve_path(base_dir, &include.path);
                self.include_file(&path, &include.dialect, text)
            })
            .collect()
    }

    fn include_file(
        &mut self,
        path: &Path,
        dialect: &str,
        directive: &str,
    ) -> Result<Block, IncludeError> {
        if self.stack.iter().any(|open| open == path) {
            let mut chain = self.stack.clone();
            chain.push(path.to_path_buf());
            return Err(IncludeError::Cycle { chain });
        }
        if self.stack.len() >= self.options.max_depth {
            return Err(IncludeError::DepthExceeded {
                max_depth: self.options.max_depth,
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(
            path = %path.display(),
            dialect,
            depth = self.stack.len(),
            "Including file"
        );
        let document =
            self.converter
                .convert(path, dialect)
                .map_err(|source| IncludeError::Convert {
                    path: path.to_path_buf(),
                    directive: directive.to_string(),
                    source,
                })?;
        self.files_included += 1;

        let file_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.stack.push(path.to_path_buf());
        let expanded = self.expand_fragment(document.blocks, &file_dir);
        self.stack.pop();

        Ok(Block::div(
            attr_with_classes([self.options.container_class.as_str()]),
            expanded?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConverterError;
    use pandoc_include_types::{Inline, text_inlines};
    use std::collections::HashMap;

    struct MapConverter(HashMap<PathBuf, Blocks>);

    impl Converter for MapConverter {
        fn convert(&self, path: &Path, _dialect: &str) -> Result<Pandoc, ConverterError> {
            self.0
                .get(path)
                .map(|blocks| Pandoc::new(blocks.clone()))
                .ok_or_else(|| ConverterError::NotFound {
                    path: path.to_path_buf(),
                })
        }
    }

    fn include(text: &str) -> Block {
        Block::code_block_with_classes(["include"], text)
    }

    #[test]
    fn test_fragment_without_directives_is_returned_as_is() {
        let converter = MapConverter(HashMap::new());
        let options = IncludeOptions::default();
        let mut expander = Expander::new(&options, &converter);
        let blocks = vec![
            Block::para(text_inlines("plain text")),
            Block::code_block_with_classes(["rust"], "fn main() {}"),
        ];
        let result = expander.expand_fragment(blocks.clone(), Path::new("/doc"));
        assert_eq!(result.unwrap(), blocks);
        assert_eq!(expander.files_included, 0);
    }

    #[test]
    fn test_stack_is_unwound_after_error() {
        let converter = MapConverter(HashMap::from([(
            PathBuf::from("/doc/a.md"),
            vec![include("missing.md")],
        )]));
        let options = IncludeOptions::default();
        let mut expander = Expander::new(&options, &converter);
        let result = expander.expand_fragment(vec![include("a.md")], Path::new("/doc"));
        assert!(matches!(result, Err(IncludeError::Convert { .. })));
        assert!(expander.stack.is_empty());
    }

    #[test]
    fn test_directive_in_note_is_expanded() {
        let converter = MapConverter(HashMap::from([(
            PathBuf::from("/doc/n.md"),
            vec![Block::para(text_inlines("note body"))],
        )]));
        let options = IncludeOptions::default();
        let mut expander = Expander::new(&options, &converter);
        let blocks = vec![Block::para(vec![
            Inline::str("text"),
            Inline::note(vec![include("n.md")]),
        ])];
        let result = expander
            .expand_fragment(blocks, Path::new("/doc"))
            .unwrap();
        assert_eq!(
            result,
            vec![Block::para(vec![
                Inline::str("text"),
                Inline::note(vec![Block::div(
                    attr_with_classes(["included"]),
                    vec![Block::para(text_inlines("note body"))],
                )]),
            ])]
        );
    }
}
