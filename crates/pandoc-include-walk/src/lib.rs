/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Traversal utilities for the Pandoc AST.
 *
 * - `walker`: lazy pre-order iterators over blocks and inlines, with the
 *   two crossing modes (blocks into note-contained blocks, inlines into
 *   note-contained inlines).
 * - `filter`: the walker narrowed to one node tag.
 * - `splice`: an ownership-taking rewrite that visits blocks in the same
 *   order as the walker and splices replacements in place.
 */

pub mod filter;
pub mod splice;
pub mod walker;

pub use filter::{code_blocks, filter_blocks, filter_inlines};
pub use splice::{FilterReturn, splice_blocks};
pub use walker::{
    NodeRef, WalkBlocks, WalkInlines, WalkNodes, blocks_in_inlines, inlines_in_blocks, walk_all,
    walk_blocks, walk_inlines,
};
