use super::Sheet;
use crate::error::Result;
use cellcalc_engine::engine::{CellRef, evaluate_formula, format_outcome};

impl Sheet {
    /// Compute the displayed text for `text` entered into `cell_ref`
    /// against the current grid, without changing any state.
    pub fn evaluate(&self, cell_ref: &CellRef, text: &str) -> String {
        let outcome = evaluate_formula(cell_ref, text, self, &self.settings.eval_options());
        format_outcome(&outcome, &self.settings.error_text)
    }

    /// Get the displayed text for a cell (empty for blank cells).
    pub fn displayed(&self, cell_ref: &CellRef) -> String {
        self.grid
            .get(cell_ref)
            .map(|cell| cell.displayed.clone())
            .unwrap_or_default()
    }

    /// Get the raw formula last entered into a cell.
    pub fn formula(&self, cell_ref: &CellRef) -> Option<String> {
        self.grid.get(cell_ref).and_then(|cell| cell.formula.clone())
    }

    /// Re-run a cell's stored formula against the current grid and store the
    /// new displayed text. Returns `None` for cells that were never edited.
    pub fn recompute(&mut self, cell_ref: &CellRef) -> Result<Option<String>> {
        self.check_bounds(cell_ref)?;
        let Some(formula) = self.formula(cell_ref) else {
            return Ok(None);
        };
        let displayed = self.evaluate(cell_ref, &formula);
        if let Some(mut cell) = self.grid.get_mut(cell_ref) {
            cell.displayed = displayed.clone();
        }
        Ok(Some(displayed))
    }
}

#[cfg(test)]
mod tests {
    use crate::Sheet;
    use crate::config::Settings;
    use cellcalc_engine::engine::{Cell, CellRef, ErrorMode};
    use pretty_assertions::assert_eq;

    fn cell(addr: &str) -> CellRef {
        CellRef::from_str(addr).unwrap()
    }

    #[test]
    fn test_evaluate_does_not_store() {
        let sheet = Sheet::new();
        assert_eq!(sheet.evaluate(&cell("A0"), "2+3*4"), "14");
        assert!(sheet.grid.is_empty());
        assert_eq!(sheet.displayed(&cell("A0")), "");
        assert_eq!(sheet.formula(&cell("A0")), None);
    }

    #[test]
    fn test_evaluate_renders_errors() {
        let sheet = Sheet::with_settings(Settings {
            error_text: "#SELF!".to_string(),
            ..Settings::default()
        });
        assert_eq!(sheet.evaluate(&cell("B3"), "1+b3"), "#SELF!");
        assert_eq!(sheet.evaluate(&cell("B3"), "ZZZ9"), "#REF!");
        assert_eq!(sheet.evaluate(&cell("B3"), "1//2"), "#VALUE!");
    }

    #[test]
    fn test_lenient_mode_shows_nan() {
        let sheet = Sheet::with_settings(Settings {
            error_mode: ErrorMode::Lenient,
            ..Settings::default()
        });
        assert_eq!(sheet.evaluate(&cell("A0"), "hello"), "NaN");
        assert_eq!(sheet.evaluate(&cell("A0"), "A0"), "error");
    }

    #[test]
    fn test_recompute_picks_up_changed_references() {
        let mut sheet = Sheet::new();
        sheet.grid.insert(cell("A1"), Cell::new("5", "5"));
        sheet.grid.insert(cell("B1"), Cell::new("A1*2", "10"));

        sheet.grid.insert(cell("A1"), Cell::new("6", "6"));
        assert_eq!(sheet.recompute(&cell("B1")).unwrap(), Some("12".to_string()));
        assert_eq!(sheet.displayed(&cell("B1")), "12");
        assert_eq!(sheet.recompute(&cell("C1")).unwrap(), None);
    }
}
