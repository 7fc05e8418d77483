//! Sheet state and the focus/blur event facade (UI-agnostic).

mod eval;
mod ops;
mod state;

pub use state::Sheet;
