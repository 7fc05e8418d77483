use super::cell::CellValue;
use crate::error::EvalError;

/// Magnitudes from here up display in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Format a number for display.
///
/// Non-finite values use the spellings `Infinity`, `-Infinity` and `NaN`,
/// which parse back as numbers when another formula references the cell.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        // Collapse -0 so "0-0" does not display as "-0".
        "0".to_string()
    } else if n.abs() >= EXPONENT_THRESHOLD {
        // Positive exponent only: "1e21" reads back as one operand.
        format!("{:e}", n)
    } else {
        n.to_string()
    }
}

/// Render an evaluation outcome as the cell's displayed text.
///
/// `error_text` is the literal shown for self-referencing formulas.
pub fn format_outcome(outcome: &Result<CellValue, EvalError>, error_text: &str) -> String {
    match outcome {
        Ok(value) => value.to_string(),
        Err(err) => err.sentinel(error_text).to_string(),
    }
}
