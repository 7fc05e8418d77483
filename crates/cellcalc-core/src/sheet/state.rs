use crate::config::Settings;
use crate::error::{CellcalcError, Result};
use cellcalc_engine::engine::{Cell, CellLookup, CellRef, Grid};
use std::ops::Range;

/// UI-agnostic state for one fixed-size sheet.
pub struct Sheet {
    /// Edited cells. In-bounds cells without an entry are blank.
    pub grid: Grid,
    pub settings: Settings,
}

impl Sheet {
    /// Create a sheet with default settings.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Sheet {
            grid: Grid::new(),
            settings,
        }
    }

    /// Create a sheet using the user's `settings.toml`, if any.
    pub fn from_user_settings() -> Self {
        Self::with_settings(Settings::load_default())
    }

    pub fn width(&self) -> usize {
        self.settings.width
    }

    pub fn height(&self) -> usize {
        self.settings.height
    }

    /// Column header labels, left to right.
    pub fn column_labels(&self) -> Vec<String> {
        CellRef::column_labels(self.width())
    }

    /// Row header indices, top to bottom.
    pub fn row_labels(&self) -> Range<usize> {
        0..self.height()
    }

    pub fn contains(&self, cell_ref: &CellRef) -> bool {
        cell_ref.col < self.width() && cell_ref.row < self.height()
    }

    pub(crate) fn check_bounds(&self, cell_ref: &CellRef) -> Result<()> {
        if self.contains(cell_ref) {
            Ok(())
        } else {
            Err(CellcalcError::OutOfBounds {
                cell: cell_ref.clone(),
            })
        }
    }

    /// Parse an address such as `"b3"` into an in-bounds reference.
    pub fn parse_address(&self, address: &str) -> Result<CellRef> {
        let cell_ref = CellRef::from_str(address)
            .ok_or_else(|| CellcalcError::InvalidAddress(address.to_string()))?;
        self.check_bounds(&cell_ref)?;
        Ok(cell_ref)
    }

    /// The cell at `cell_ref`; blank cells are returned as empty cells.
    pub fn cell(&self, cell_ref: &CellRef) -> Option<Cell> {
        if !self.contains(cell_ref) {
            return None;
        }
        Some(
            self.grid
                .get(cell_ref)
                .map(|entry| entry.clone())
                .unwrap_or_default(),
        )
    }
}

impl CellLookup for Sheet {
    fn lookup_cell(&self, column: &str, row: usize) -> Option<Cell> {
        let col = CellRef::letters_to_col(column)?;
        self.cell(&CellRef::new(col, row))
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn small() -> Sheet {
        Sheet::with_settings(Settings {
            width: 3,
            height: 4,
            ..Settings::default()
        })
    }

    #[test]
    fn test_default_dimensions() {
        let sheet = Sheet::new();
        assert_eq!(sheet.column_labels().len(), 100);
        assert_eq!(sheet.column_labels()[99], "CV");
        assert_eq!(sheet.row_labels(), 0..1000);
    }

    #[test]
    fn test_headers() {
        let sheet = small();
        assert_eq!(sheet.column_labels(), vec!["A", "B", "C"]);
        assert_eq!(sheet.row_labels().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_lookup_cell_respects_bounds_and_case() {
        let sheet = small();
        sheet.grid.insert(CellRef::new(1, 2), Cell::new("7", "7"));

        assert_eq!(sheet.lookup_cell("b", 2), Some(Cell::new("7", "7")));
        assert_eq!(sheet.lookup_cell("B", 2), Some(Cell::new("7", "7")));
        assert_eq!(sheet.lookup_cell("C", 3), Some(Cell::new_empty()));
        assert_eq!(sheet.lookup_cell("D", 0), None);
        assert_eq!(sheet.lookup_cell("A", 4), None);
        assert_eq!(sheet.lookup_cell("A1", 0), None);
    }

    #[test]
    fn test_parse_address() {
        let sheet = small();
        assert_eq!(sheet.parse_address("c3").unwrap(), CellRef::new(2, 3));
        assert!(matches!(
            sheet.parse_address("D0"),
            Err(CellcalcError::OutOfBounds { .. })
        ));
        assert!(matches!(
            sheet.parse_address("3C"),
            Err(CellcalcError::InvalidAddress(_))
        ));
    }
}
