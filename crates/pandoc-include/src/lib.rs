/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Include-directive expansion for Pandoc documents.
 *
 * A code block whose first class is `include` names one or more files.
 * Each file is converted to a Pandoc AST with an external converter,
 * expanded recursively relative to its own directory, wrapped in a
 * `Div` with class `included`, and spliced into the directive's place.
 */

pub mod converter;
pub mod directive;
pub mod errors;
pub mod filter;
pub mod options;
pub mod readers;
pub mod transform;
pub mod transforms;
pub mod writers;

pub use converter::{Converter, PandocConverter};
pub use errors::{ConverterError, IncludeError, JsonFilterError, JsonReadError};
pub use filter::run_json_filter;
pub use options::IncludeOptions;
pub use transform::{AstTransform, TransformPipeline};
pub use transforms::include::{IncludeTransform, expand, expand_with};
