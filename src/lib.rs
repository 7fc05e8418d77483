//! cellcalc - Spreadsheet cell formula evaluator.
//!
//! A [`Sheet`] holds a fixed-size grid of cells. The UI raises two events:
//! [`Sheet::on_cell_focused`] returns the raw formula for editing, and
//! [`Sheet::on_cell_unfocused`] stores newly entered text and computes the
//! value to display. Formulas combine numbers and cell addresses (`A1`, `b12`)
//! with `+ - * /` and parentheses.
//!
//! ```
//! use cellcalc::{CellRef, Sheet};
//!
//! let mut sheet = Sheet::new();
//! let a1 = CellRef::from_str("A1").unwrap();
//! let b1 = CellRef::from_str("B1").unwrap();
//!
//! sheet.on_cell_unfocused(&a1, "(2+3)*4").unwrap();
//! assert_eq!(sheet.on_cell_unfocused(&b1, "a1/5").unwrap().as_deref(), Some("4"));
//! assert_eq!(sheet.on_cell_focused(&b1).unwrap(), "a1/5");
//! ```

pub use cellcalc_core::{CellcalcError, Result, Settings, Sheet, config};
pub use cellcalc_engine::engine;
pub use cellcalc_engine::engine::{Cell, CellRef, CellValue, ErrorMode, EvalOptions};
pub use cellcalc_engine::EvalError;
