//! Error types for Cellcalc core.

use std::path::PathBuf;

use thiserror::Error;

use cellcalc_engine::engine::CellRef;

/// Errors raised by the sheet model. Formula problems are not errors here:
/// they become the affected cell's displayed text.
#[derive(Error, Debug)]
pub enum CellcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    #[error("Cell {cell} is outside the grid")]
    OutOfBounds { cell: CellRef },

    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, CellcalcError>;
