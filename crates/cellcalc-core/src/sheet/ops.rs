use super::Sheet;
use crate::error::Result;
use cellcalc_engine::engine::{Cell, CellRef};
use log::debug;

impl Sheet {
    /// The cell gained focus: return the raw formula for editing (empty if
    /// the cell was never edited).
    pub fn on_cell_focused(&self, cell_ref: &CellRef) -> Result<String> {
        self.check_bounds(cell_ref)?;
        Ok(self
            .cell(cell_ref)
            .map(|cell| cell.to_input_string())
            .unwrap_or_default())
    }

    /// The cell lost focus with `entered` as its text.
    ///
    /// Non-empty text is stored as the cell's formula and evaluated; the new
    /// displayed text is returned. Empty text leaves the cell unchanged and
    /// returns `None`.
    pub fn on_cell_unfocused(
        &mut self,
        cell_ref: &CellRef,
        entered: &str,
    ) -> Result<Option<String>> {
        self.check_bounds(cell_ref)?;
        if entered.is_empty() {
            debug!("{cell_ref} unfocused with no text; keeping previous state");
            return Ok(None);
        }

        let displayed = self.evaluate(cell_ref, entered);
        self.grid.insert(cell_ref.clone(), Cell::new(entered, &displayed));
        Ok(Some(displayed))
    }
}
