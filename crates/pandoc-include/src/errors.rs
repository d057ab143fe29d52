/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while reading a Pandoc JSON document.
#[derive(Error, Debug)]
pub enum JsonReadError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("unrecognized node kind: {0}")]
    UnsupportedVariant(String),

    #[error("unsupported pandoc-api-version {version:?} (expected 1.17.x)")]
    UnsupportedApiVersion { version: Vec<u32> },
}

/// Errors raised while turning a referenced file into a document.
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to run {}", .program.display())]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with {status} while converting {}", .program.display(), .path.display())]
    NonZeroExit {
        program: PathBuf,
        path: PathBuf,
        status: ExitStatus,
    },

    #[error("{} produced output that is not valid UTF-8", .program.display())]
    InvalidUtf8Output {
        program: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("could not read the converted document for {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: JsonReadError,
    },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by include expansion. Any of these aborts the whole expansion.
#[derive(Error, Debug)]
pub enum IncludeError {
    #[error("include directive in {} names no files", .base_dir.display())]
    EmptyDirective { base_dir: PathBuf },

    #[error("could not include {} (directive: {directive:?})", .path.display())]
    Convert {
        path: PathBuf,
        directive: String,
        #[source]
        source: ConverterError,
    },

    #[error("include cycle: {}", format_chain(.chain))]
    Cycle { chain: Vec<PathBuf> },

    #[error("includes nested deeper than {max_depth} levels at {}", .path.display())]
    DepthExceeded { max_depth: usize, path: PathBuf },

    #[error("include directive {text:?} was not expanded")]
    UnplannedDirective { text: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised by [`crate::run_json_filter`].
#[derive(Error, Debug)]
pub enum JsonFilterError {
    #[error("failed to read the input document")]
    Read(#[source] JsonReadError),

    #[error(transparent)]
    Transform(#[from] IncludeError),

    #[error("failed to write the output document")]
    Write(#[source] io::Error),
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
