/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

pub use crate::block::Blocks;
use crate::meta::Meta;

/// The pandoc-api-version written for documents built in code.
pub const API_VERSION: [u32; 4] = [1, 17, 5, 4];

/*
 * A data structure that mimics Pandoc's `data Pandoc` type, as emitted by
 * `pandoc -t json` for pandoc-types 1.17.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Pandoc {
    /// The `pandoc-api-version` array, kept verbatim from the input so that
    /// a filter hands pandoc back the version it was given.
    pub api_version: Vec<u32>,
    pub meta: Meta,
    pub blocks: Blocks,
}

impl Pandoc {
    pub fn new(blocks: Blocks) -> Self {
        Pandoc {
            api_version: API_VERSION.to_vec(),
            meta: Meta::new(),
            blocks,
        }
    }
}

impl Default for Pandoc {
    fn default() -> Self {
        Pandoc::new(vec![])
    }
}

/// Only the major.minor pair identifies the tree shape; later components
/// are patch levels that do not change it.
pub fn is_supported_api_version(version: &[u32]) -> bool {
    version.len() >= 2 && version[0] == API_VERSION[0] && version[1] == API_VERSION[1]
}
