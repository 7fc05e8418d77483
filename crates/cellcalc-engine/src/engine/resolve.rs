//! Reference resolution by textual substitution.
//!
//! Each reference token that names a cell is replaced, everywhere it occurs,
//! by that cell's displayed text. Substitution is plain string replacement
//! over the progressively rewritten formula, so a token that is a prefix of
//! another (`A1` inside `A10`) rewrites both occurrences.

use log::trace;

use super::cell::CellLookup;
use super::cell_ref::CellRef;
use super::classify::reference_tokens;
use super::eval::is_decimal;

/// Result of substituting references into a formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The formula with every resolved token replaced.
    pub expression: String,
    /// Tokens containing letters that named no cell and are not decimal literals.
    pub unresolved: Vec<String>,
}

/// Whether `text` contains the address of `cell` anywhere (case-insensitive).
pub fn is_self_reference(cell: &CellRef, text: &str) -> bool {
    text.to_ascii_lowercase()
        .contains(&cell.to_string().to_ascii_lowercase())
}

/// Look a single token up against the grid.
fn lookup_token<L: CellLookup + ?Sized>(token: &str, lookup: &L) -> Option<String> {
    let cell_ref = CellRef::from_str(token)?;
    lookup
        .lookup_cell(&cell_ref.column(), cell_ref.row)
        .map(|cell| cell.displayed)
}

fn is_number(token: &str) -> bool {
    !token.bytes().any(|b| b.is_ascii_alphabetic()) || is_decimal(token)
}

/// Substitute every token of `text` that names a cell with its displayed value.
pub fn resolve_references<L: CellLookup + ?Sized>(text: &str, lookup: &L) -> Resolution {
    let mut expression = text.to_string();
    let mut unresolved = Vec::new();

    for token in reference_tokens(text) {
        match lookup_token(token, lookup) {
            Some(displayed) => {
                trace!("substituting {token} -> {displayed:?}");
                expression = expression.replace(token, &displayed);
            }
            None if !is_number(token) => {
                if !unresolved.iter().any(|t| t == token) {
                    unresolved.push(token.to_string());
                }
            }
            None => {}
        }
    }

    Resolution {
        expression,
        unresolved,
    }
}
