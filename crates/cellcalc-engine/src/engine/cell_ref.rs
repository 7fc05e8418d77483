//! Cell address encoding and decoding.
//!
//! Provides bidirectional conversion between cell addresses as they appear in
//! formula text (e.g., "A0", "B2", "AA100") and zero-indexed column/row
//! coordinates. The row part of an address is the row index itself, so the
//! first row of the sheet is row `0`.
//!
//! # Examples
//!
//! ```
//! use cellcalc_engine::engine::CellRef;
//!
//! let cell = CellRef::from_str("B3").unwrap();
//! assert_eq!(cell.col, 1); // 0-indexed
//! assert_eq!(cell.row, 3);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]+)(?<numbers>[0-9]+)$")
            .expect("address regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell address (e.g., "A0", "b2", "AA10"). Case-insensitive.
    ///
    /// Returns None if the input is not an address. Rows written with a
    /// leading zero ("A01") are rejected: no cell renders its address that way.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Option<CellRef> {
        Self::parse_address(name)
    }

    fn parse_address(name: &str) -> Option<CellRef> {
        let caps = address_re().captures(name)?;
        let numbers = &caps["numbers"];
        if numbers.len() > 1 && numbers.starts_with('0') {
            return None;
        }

        let col = Self::letters_to_col(&caps["letters"])?;
        let row = numbers.parse::<usize>().ok()?;
        Some(CellRef::new(col, row))
    }

    /// Convert column index to spreadsheet-style letters (0 -> A, 25 -> Z, 26 -> AA).
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// Inverse of [`CellRef::col_to_letters`]. Accepts either case.
    pub fn letters_to_col(letters: &str) -> Option<usize> {
        if letters.is_empty() {
            return None;
        }
        let mut col_acc = 0usize;
        for c in letters.bytes() {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            let digit = (c.to_ascii_uppercase() - b'A') as usize + 1;
            col_acc = col_acc.checked_mul(26)?.checked_add(digit)?;
        }
        col_acc.checked_sub(1)
    }

    /// The first `count` column labels in order: A, B, ..., Z, AA, AB, ...
    pub fn column_labels(count: usize) -> Vec<String> {
        (0..count).map(Self::col_to_letters).collect()
    }

    /// Column label of this reference.
    pub fn column(&self) -> String {
        Self::col_to_letters(self.col)
    }
}

impl std::str::FromStr for CellRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_address(s).ok_or_else(|| format!("Invalid cell reference: {}", s))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_col_to_letters_known_values() {
        assert_eq!(CellRef::col_to_letters(0), "A");
        assert_eq!(CellRef::col_to_letters(25), "Z");
        assert_eq!(CellRef::col_to_letters(26), "AA");
        assert_eq!(CellRef::col_to_letters(27), "AB");
        assert_eq!(CellRef::col_to_letters(51), "AZ");
        assert_eq!(CellRef::col_to_letters(52), "BA");
        assert_eq!(CellRef::col_to_letters(701), "ZZ");
        assert_eq!(CellRef::col_to_letters(702), "AAA");
    }

    #[test]
    fn test_column_labels_in_order() {
        let labels = CellRef::column_labels(28);
        assert_eq!(labels.len(), 28);
        assert_eq!(labels[0], "A");
        assert_eq!(labels[25], "Z");
        assert_eq!(labels[26], "AA");
        assert_eq!(labels[27], "AB");
        assert!(CellRef::column_labels(0).is_empty());
    }

    #[test]
    fn test_letters_to_col_rejects_garbage() {
        assert_eq!(CellRef::letters_to_col(""), None);
        assert_eq!(CellRef::letters_to_col("A1"), None);
        assert_eq!(CellRef::letters_to_col("zz"), Some(701));
    }

    #[test]
    fn test_parse_address_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::from_str(&huge).is_none());
    }

    #[test]
    fn test_parse_rejects_leading_zero_rows() {
        assert!(CellRef::from_str("A01").is_none());
        assert_eq!(CellRef::from_str("A0"), Some(CellRef::new(0, 0)));
    }

    #[test]
    fn test_col_to_letters_handles_max_usize() {
        let letters = CellRef::col_to_letters(usize::MAX);
        assert!(!letters.is_empty());
        assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    proptest! {
        #[test]
        fn letters_round_trip(col in 0usize..1_000_000) {
            let letters = CellRef::col_to_letters(col);
            prop_assert_eq!(CellRef::letters_to_col(&letters), Some(col));
        }

        #[test]
        fn address_round_trip(col in 0usize..20_000, row in 0usize..1_000_000) {
            let cell = CellRef::new(col, row);
            prop_assert_eq!(CellRef::from_str(&cell.to_string()), Some(cell.clone()));
            prop_assert_eq!(CellRef::from_str(&cell.to_string().to_lowercase()), Some(cell));
        }
    }
}
