//! Spreadsheet formula engine API.
//!
//! - [`Cell`], [`CellValue`], [`Grid`], [`CellLookup`] - Cell storage and the grid query surface
//! - [`CellRef`] - Address encoding (column index ↔ letters, `B3` ↔ col/row)
//! - [`classify`] - Decide whether text is a literal, numeric or reference formula
//! - [`resolve_references`] - Substitute referenced cells' displayed values
//! - [`evaluate`] - Four-level `+ - * /` evaluator with parenthesis groups
//! - [`evaluate_formula`] - The whole pipeline for one cell
//! - [`format_number`] - Format values for display

mod cell;
mod cell_ref;
mod classify;
mod eval;
mod format;
mod formula;
mod resolve;

pub use cell::{Cell, CellLookup, CellValue, Grid};
pub use cell_ref::CellRef;
pub use classify::{FormulaKind, classify, reference_tokens};
pub use eval::{
    DEFAULT_MAX_DEPTH, ErrorMode, EvalOptions, evaluate, evaluate_with, split_top_level,
};
pub use format::{format_number, format_outcome};
pub use formula::evaluate_formula;
pub use resolve::{Resolution, is_self_reference, resolve_references};
