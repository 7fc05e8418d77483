//! The full evaluation pipeline for one cell: classify, resolve, evaluate.

use log::{debug, warn};

use super::cell::{CellLookup, CellValue};
use super::cell_ref::CellRef;
use super::classify::{FormulaKind, classify};
use super::eval::{ErrorMode, EvalOptions, evaluate_with};
use super::resolve::{is_self_reference, resolve_references};
use crate::error::{EvalError, Result};

/// Compute the value of `text` entered into `cell`, reading other cells
/// through `lookup`. The grid is only borrowed for the duration of the call.
pub fn evaluate_formula<L: CellLookup + ?Sized>(
    cell: &CellRef,
    text: &str,
    lookup: &L,
    options: &EvalOptions,
) -> Result<CellValue> {
    let kind = classify(text);
    let outcome = match kind {
        FormulaKind::Literal => Ok(CellValue::Text(text.to_string())),
        FormulaKind::Numeric => evaluate_with(text, options).map(CellValue::Number),
        FormulaKind::Reference => evaluate_references(cell, text, lookup, options),
    };
    debug!("evaluated {cell} ({kind:?}) {text:?} -> {outcome:?}");
    outcome
}

fn evaluate_references<L: CellLookup + ?Sized>(
    cell: &CellRef,
    text: &str,
    lookup: &L,
    options: &EvalOptions,
) -> Result<CellValue> {
    if is_self_reference(cell, text) {
        warn!("{cell} refers to itself: {text:?}");
        return Err(EvalError::SelfReference { cell: cell.clone() });
    }

    let resolution = resolve_references(text, lookup);
    if options.mode == ErrorMode::Strict
        && let Some(token) = resolution.unresolved.into_iter().next()
    {
        return Err(EvalError::UnresolvedReference { token });
    }

    evaluate_with(&resolution.expression, options).map(CellValue::Number)
}
