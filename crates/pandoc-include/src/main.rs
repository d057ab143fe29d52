/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::{Context, Result};
use clap::Parser;
use pandoc_include::{IncludeOptions, PandocConverter, expand_with, run_json_filter};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pandoc JSON filter that replaces `include` code blocks with the files they name.
#[derive(Parser, Debug)]
#[command(name = "pandoc-include")]
#[command(version, about)]
struct Args {
    /// Output format; pandoc passes it to every JSON filter. Ignored.
    target_format: Option<String>,

    /// Read the document from FILE instead of stdin
    #[arg(short = 'i', long = "input")]
    input: Option<PathBuf>,

    /// Write the document to FILE instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Directory that relative include paths are resolved against
    #[arg(long = "base-dir")]
    base_dir: Option<PathBuf>,

    /// Pandoc executable used to convert included files
    #[arg(long = "pandoc", value_name = "PATH")]
    pandoc: Option<PathBuf>,

    /// Input format for references that do not name one
    #[arg(long = "default-dialect", value_name = "NAME")]
    default_dialect: Option<String>,

    /// Deepest allowed chain of nested includes
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,
}

impl Args {
    fn options(&self) -> IncludeOptions {
        let mut options = IncludeOptions {
            pandoc_path: self.pandoc.clone(),
            ..IncludeOptions::default()
        };
        if let Some(dialect) = &self.default_dialect {
            options.default_dialect = dialect.clone();
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        options
    }
}

fn main() -> Result<()> {
    // stdout carries the document, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pandoc_include=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let options = args.options();
    let base_dir = match &args.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    let converter = PandocConverter::from_options(&options);
    tracing::debug!(
        base_dir = %base_dir.display(),
        pandoc = %converter.program().display(),
        target_format = args.target_format.as_deref().unwrap_or(""),
        "Starting include filter"
    );

    let mut reader: Box<dyn io::Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let expand = |doc| expand_with(&options, &converter, &base_dir, doc);
    match &args.output {
        Some(path) => {
            // Expand into memory first so a failed run leaves no output file.
            let mut buf = Vec::new();
            run_json_filter(&mut reader, &mut buf, expand)?;
            std::fs::write(path, buf)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            run_json_filter(&mut reader, &mut writer, expand)?;
        }
    }
    Ok(())
}
