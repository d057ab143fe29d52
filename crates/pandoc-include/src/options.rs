/*
 * options.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::path::PathBuf;

/// Settings for include expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeOptions {
    /// First class that marks a code block as an include directive.
    pub marker_class: String,
    /// Class put on the `Div` wrapping each included document.
    pub container_class: String,
    /// Input format used when a reference names none.
    pub default_dialect: String,
    /// Separates a path from its input format within one reference line.
    pub separator: char,
    /// Deepest allowed chain of nested includes.
    pub max_depth: usize,
    /// Explicit pandoc executable. When unset, `PANDOC` and then `PATH` are searched.
    pub pandoc_path: Option<PathBuf>,
}

impl Default for IncludeOptions {
    fn default() -> Self {
        IncludeOptions {
            marker_class: "include".to_string(),
            container_class: "included".to_string(),
            default_dialect: "markdown".to_string(),
            separator: '!',
            max_depth: 64,
            pandoc_path: None,
        }
    }
}
