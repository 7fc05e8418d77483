//! Arithmetic evaluation.
//!
//! Expressions are evaluated by four mutually recursive precedence levels,
//! lowest to highest:
//!
//! 1. sum: split on `+` outside parentheses, fold with addition
//! 2. difference: split on every `-`, subtract left to right
//! 3. product: split on every `*`, fold with multiplication
//! 4. quotient: split on every `/`, divide left to right
//!
//! Only the sum level tracks parenthesis depth when splitting. A quotient
//! operand that starts with `(` has its outer pair stripped and is evaluated
//! again from the sum level, which is how groups escape the lower levels.
//!
//! All arithmetic is `f64`; division by zero yields infinity or NaN.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::{EvalError, Result};

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How evaluation treats operands that are not numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Unresolved references and malformed operands are typed errors.
    #[default]
    Strict,
    /// Blank operands count as 0 and unparseable ones as NaN.
    Lenient,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    pub mode: ErrorMode,
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            mode: ErrorMode::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluate an arithmetic expression with the default (strict) options.
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, &EvalOptions::default())
}

pub fn evaluate_with(expression: &str, options: &EvalOptions) -> Result<f64> {
    Evaluator { options }.sum(expression, 0)
}

/// Split on `operator` wherever the parenthesis depth is zero.
///
/// A trailing empty chunk is dropped; empty chunks elsewhere are kept.
pub fn split_top_level(expression: &str, operator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: i64 = 0;
    let mut start = 0;

    for (idx, ch) in expression.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && ch == operator {
            parts.push(&expression[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    if start < expression.len() {
        parts.push(&expression[start..]);
    }
    parts
}

struct Evaluator<'a> {
    options: &'a EvalOptions,
}

impl Evaluator<'_> {
    fn sum(&self, expression: &str, depth: usize) -> Result<f64> {
        split_top_level(expression, '+')
            .into_iter()
            .try_fold(0.0, |acc, part| Ok(acc + self.difference(part, depth)?))
    }

    fn difference(&self, expression: &str, depth: usize) -> Result<f64> {
        let mut parts = expression.split('-');
        let first = parts.next().unwrap_or_default();
        let has_more = expression.contains('-');

        // A blank leading operand is a unary minus.
        let seed = if has_more && first.trim().is_empty() {
            0.0
        } else {
            self.product(first, depth)?
        };
        parts.try_fold(seed, |acc, part| Ok(acc - self.product(part, depth)?))
    }

    fn product(&self, expression: &str, depth: usize) -> Result<f64> {
        expression
            .split('*')
            .try_fold(1.0, |acc, part| Ok(acc * self.quotient(part, depth)?))
    }

    fn quotient(&self, expression: &str, depth: usize) -> Result<f64> {
        let mut parts = expression.split('/');
        let seed = self.operand(parts.next().unwrap_or_default(), depth)?;
        parts.try_fold(seed, |acc, part| Ok(acc / self.operand(part, depth)?))
    }

    fn operand(&self, text: &str, depth: usize) -> Result<f64> {
        if let Some(rest) = text.strip_prefix('(') {
            if depth >= self.options.max_depth {
                return Err(EvalError::DepthExceeded {
                    limit: self.options.max_depth,
                });
            }
            return self.sum(strip_last_char(rest), depth + 1);
        }
        self.number(text)
    }

    fn number(&self, text: &str) -> Result<f64> {
        let trimmed = text.trim();
        match self.options.mode {
            ErrorMode::Strict => {
                parse_number(trimmed).ok_or_else(|| EvalError::MalformedExpression {
                    operand: text.to_string(),
                })
            }
            ErrorMode::Lenient if trimmed.is_empty() => Ok(0.0),
            ErrorMode::Lenient => Ok(parse_number(trimmed).unwrap_or(f64::NAN)),
        }
    }
}

fn decimal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("decimal regex must compile")
    })
}

/// Whether `text` is a plain decimal literal (`12`, `0.5`, `.5`, `1e3`).
pub(crate) fn is_decimal(text: &str) -> bool {
    decimal_re().is_match(text)
}

/// Parse an operand: a decimal literal, or one of the spellings
/// `format_number` uses for non-finite values (`Infinity`, `NaN`).
/// Words such as `inf` or `nan` are not numbers.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    match text {
        "Infinity" => Some(f64::INFINITY),
        "NaN" => Some(f64::NAN),
        _ if is_decimal(text) => text.parse::<f64>().ok(),
        _ => None,
    }
}

/// Drop the final character, which closes the group being unwrapped.
fn strip_last_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
