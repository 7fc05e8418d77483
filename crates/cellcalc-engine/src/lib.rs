//! cellcalc_engine - Spreadsheet cell formula engine.

pub mod engine;
pub mod error;

pub use error::{EvalError, Result};
