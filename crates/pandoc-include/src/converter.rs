/*
 * converter.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Turning referenced files into documents.
 */

use crate::errors::ConverterError;
use crate::options::IncludeOptions;
use crate::readers;
use pandoc_include_types::Pandoc;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable naming the pandoc executable.
pub const PANDOC_ENV_VAR: &str = "PANDOC";

/// Dialect that is read directly instead of through pandoc.
pub const JSON_DIALECT: &str = "json";

/// Parses a file in some input format into a document.
pub trait Converter {
    fn convert(&self, path: &Path, dialect: &str) -> Result<Pandoc, ConverterError>;
}

/// Runs `pandoc -f <dialect> -t json <path>` for each file.
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: PathBuf,
}

impl PandocConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        PandocConverter {
            program: program.into(),
        }
    }

    /// Use `options.pandoc_path` if set, else [`find_pandoc`].
    pub fn from_options(options: &IncludeOptions) -> Self {
        match &options.pandoc_path {
            Some(path) => PandocConverter::new(path.clone()),
            None => PandocConverter::new(find_pandoc()),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run_pandoc(&self, path: &Path, dialect: &str) -> Result<Pandoc, ConverterError> {
        tracing::debug!(
            program = %self.program.display(),
            path = %path.display(),
            dialect,
            "Running pandoc"
        );
        let output = Command::new(&self.program)
            .arg("-f")
            .arg(dialect)
            .arg("-t")
            .arg("json")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit()) // pandoc diagnostics go straight to the user
            .output()
            .map_err(|source| ConverterError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ConverterError::NonZeroExit {
                program: self.program.clone(),
                path: path.to_path_buf(),
                status: output.status,
            });
        }

        let stdout =
            String::from_utf8(output.stdout).map_err(|source| ConverterError::InvalidUtf8Output {
                program: self.program.clone(),
                source,
            })?;
        readers::json::read_str_document(&stdout).map_err(|source| ConverterError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for PandocConverter {
    fn default() -> Self {
        PandocConverter::from_options(&IncludeOptions::default())
    }
}

impl Converter for PandocConverter {
    fn convert(&self, path: &Path, dialect: &str) -> Result<Pandoc, ConverterError> {
        if !path.is_file() {
            return Err(ConverterError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if dialect == JSON_DIALECT {
            return read_json_file(path);
        }
        self.run_pandoc(path, dialect)
    }
}

/// Locate pandoc: the `PANDOC` environment variable when it names a file,
/// then `PATH`. Falls back to the bare name so that a missing pandoc is
/// reported when it is first run.
pub fn find_pandoc() -> PathBuf {
    if let Some(path) = std::env::var_os(PANDOC_ENV_VAR).map(PathBuf::from) {
        if path.is_file() {
            return path;
        }
        tracing::warn!(
            path = %path.display(),
            "{} does not name a file, searching PATH",
            PANDOC_ENV_VAR
        );
    }
    which::which("pandoc").unwrap_or_else(|_| PathBuf::from("pandoc"))
}

/// Read a file that already holds a Pandoc JSON document.
pub fn read_json_file(path: &Path) -> Result<Pandoc, ConverterError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConverterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    readers::json::read_str_document(&text).map_err(|source| ConverterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
