//! Error types for formula evaluation.

use thiserror::Error;

use crate::engine::CellRef;

/// Errors raised while evaluating a single cell's formula.
///
/// None of these abort anything beyond the cell being evaluated: the caller
/// renders them as the cell's displayed text via [`EvalError::sentinel`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("formula in {cell} refers to its own cell")]
    SelfReference { cell: CellRef },

    #[error("unresolved reference: {token}")]
    UnresolvedReference { token: String },

    #[error("malformed expression at operand {operand:?}")]
    MalformedExpression { operand: String },

    #[error("parentheses nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
}

impl EvalError {
    /// Displayed text for this error. Self-references show `error_text`.
    pub fn sentinel<'a>(&self, error_text: &'a str) -> &'a str {
        match self {
            EvalError::SelfReference { .. } => error_text,
            EvalError::UnresolvedReference { .. } => "#REF!",
            EvalError::MalformedExpression { .. } => "#VALUE!",
            EvalError::DepthExceeded { .. } => "#DEPTH!",
        }
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
