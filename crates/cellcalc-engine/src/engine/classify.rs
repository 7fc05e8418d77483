//! Formula classification.
//!
//! Decides how raw cell text is treated before evaluation. The reference test
//! runs first and fires on any alphanumeric run, so plain numbers such as
//! `123` are reference expressions too; resolution leaves them untouched.

use regex::Regex;
use std::sync::OnceLock;

/// How a piece of cell text is evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormulaKind {
    /// Displayed verbatim.
    Literal,
    /// Arithmetic over numbers and parentheses only.
    Numeric,
    /// Contains at least one reference token; resolved before evaluation.
    Reference,
}

/// Maximal runs of ASCII letters and digits.
pub(crate) fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z0-9]+").expect("token regex must compile"))
}

pub fn classify(text: &str) -> FormulaKind {
    if token_re().is_match(text) {
        return FormulaKind::Reference;
    }
    match text.chars().next() {
        Some(c) if c == '(' || c.is_ascii_digit() => FormulaKind::Numeric,
        _ => FormulaKind::Literal,
    }
}

/// Every reference token in `text`, in order of appearance (duplicates kept).
pub fn reference_tokens(text: &str) -> Vec<&str> {
    token_re().find_iter(text).map(|m| m.as_str()).collect()
}
