/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::Blocks;
use crate::inline::Inlines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Default,
}

impl Alignment {
    pub fn name(self) -> &'static str {
        match self {
            Alignment::Left => "AlignLeft",
            Alignment::Right => "AlignRight",
            Alignment::Center => "AlignCenter",
            Alignment::Default => "AlignDefault",
        }
    }
}

/// A table cell is a list of blocks.
pub type Cell = Blocks;

/// A pandoc-types 1.17 table.
///
/// On the wire this is the fixed 5-tuple
/// `[caption, alignments, widths, headers, rows]`. Widths are relative
/// column widths, `0` meaning "default".
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub caption: Inlines,
    pub alignments: Vec<Alignment>,
    pub widths: Vec<f64>,
    pub headers: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}
