//! cellcalc-core - UI-agnostic sheet model: grid, settings and cell events.

pub mod config;
pub mod error;
pub mod sheet;

pub use config::Settings;
pub use error::{CellcalcError, Result};
pub use sheet::Sheet;

pub use cellcalc_engine::engine::{Cell, CellRef, ErrorMode};
