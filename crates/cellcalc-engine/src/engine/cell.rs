//! Cell data structures for the spreadsheet grid.
//!
//! - [`Cell`] - The raw formula last entered into a cell plus its displayed text
//! - [`CellValue`] - The outcome of evaluating a formula
//! - [`Grid`] - Sparse storage for edited cells (backed by `DashMap`)
//! - [`CellLookup`] - Read-only query surface used during reference resolution

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell_ref::CellRef;
use super::format::format_number;

/// A cell in the spreadsheet grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Raw text last entered by the user; `None` if the cell was never edited.
    pub formula: Option<String>,
    /// Text shown when the cell is not being edited.
    pub displayed: String,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    pub fn new(formula: &str, displayed: &str) -> Cell {
        Cell {
            formula: Some(formula.to_string()),
            displayed: displayed.to_string(),
        }
    }

    /// Get the text to show while the cell is being edited.
    pub fn to_input_string(&self) -> String {
        self.formula.clone().unwrap_or_default()
    }
}

/// A computed cell value, before it is rendered for display.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Number(f64),
    /// Text displayed verbatim (formulas classified as literals).
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Sparse grid storage. Cells that were never edited have no entry.
pub type Grid = DashMap<CellRef, Cell>;

/// Read access to the live grid, borrowed for the duration of one evaluation.
pub trait CellLookup {
    /// Find the cell at (`column`, `row`). Column labels match case-insensitively.
    ///
    /// Returns `None` when the address is not part of the grid. In-grid cells
    /// that were never edited are returned as [`Cell::new_empty`].
    fn lookup_cell(&self, column: &str, row: usize) -> Option<Cell>;
}
