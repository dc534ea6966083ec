//! The editable answer grid for one trial.
//!
//! Pure shape and state — rendering belongs to the UI collaborator. A grid
//! has one working row per partial product plus one final row, every row
//! exactly as wide as the product. Cells are indexed right to left, so
//! cell 0 is the ones column, matching how the learner fills the grid.
//!
//! A working row at shift `p` has its rightmost `p` cells pre-filled with
//! a placeholder glyph standing in for the positional shift; those cells
//! are not editable. All other cells start empty and accept one decimal
//! digit through the typed setters below — there is no lookup by name.

use serde::{Deserialize, Serialize};

use crate::decompose::Decomposition;
use crate::error::GridError;

/// Glyph conventionally rendered in shift placeholder cells.
pub const PLACEHOLDER_GLYPH: char = '.';

/// One cell of the answer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Editable, nothing entered yet.
    Empty,
    /// Editable, holds a single decimal digit.
    Digit(u8),
    /// Fixed shift placeholder; never editable.
    Placeholder,
}

impl Cell {
    pub fn is_editable(&self) -> bool {
        !matches!(self, Cell::Placeholder)
    }

    /// Character the UI would render: digit, placeholder glyph, or a
    /// blank for an empty cell.
    pub fn display_char(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Digit(d) => (b'0' + d) as char,
            Cell::Placeholder => PLACEHOLDER_GLYPH,
        }
    }
}

/// An ordered run of cells, right to left (cell 0 = ones column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    shift: usize,
    cells: Vec<Cell>,
}

impl Row {
    /// A row of `width` cells whose rightmost `shift` cells are
    /// placeholders. The final row uses `shift == 0`.
    pub fn new(width: usize, shift: usize) -> Self {
        let cells = (0..width)
            .map(|col| {
                if col < shift {
                    Cell::Placeholder
                } else {
                    Cell::Empty
                }
            })
            .collect();
        Self { shift, cells }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, col: usize) -> Option<Cell> {
        self.cells.get(col).copied()
    }

    pub fn is_editable(&self, col: usize) -> bool {
        matches!(self.cells.get(col), Some(c) if c.is_editable())
    }

    /// Count of cells the learner can type into.
    pub fn editable_cells(&self) -> usize {
        self.width() - self.shift
    }

    /// Enter one digit into an editable cell.
    pub fn set_digit(&mut self, col: usize, digit: char) -> Result<(), GridError> {
        let width = self.width();
        let cell = self
            .cells
            .get_mut(col)
            .ok_or(GridError::ColumnOutOfRange { col, width })?;
        if !cell.is_editable() {
            return Err(GridError::NotEditable(col));
        }
        if !digit.is_ascii_digit() {
            return Err(GridError::NotADigit(digit));
        }
        *cell = Cell::Digit(digit as u8 - b'0');
        Ok(())
    }

    /// Empty an editable cell.
    pub fn clear(&mut self, col: usize) -> Result<(), GridError> {
        let width = self.width();
        let cell = self
            .cells
            .get_mut(col)
            .ok_or(GridError::ColumnOutOfRange { col, width })?;
        if !cell.is_editable() {
            return Err(GridError::NotEditable(col));
        }
        *cell = Cell::Empty;
        Ok(())
    }

    /// Empty every editable cell, keeping placeholders.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            if cell.is_editable() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Fill the editable region from digits typed left to right, right
    /// aligned against the placeholder boundary — entering `"23"` into a
    /// shift-1 row of width 3 yields `2 3 .` on paper.
    pub fn enter(&mut self, digits: &str) -> Result<(), GridError> {
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(GridError::NotADigit(bad));
        }
        let entered = digits.chars().count();
        let editable = self.editable_cells();
        if entered > editable {
            return Err(GridError::TooManyDigits { entered, editable });
        }
        self.clear_all();
        for (offset, digit) in digits.chars().rev().enumerate() {
            self.set_digit(self.shift + offset, digit)?;
        }
        Ok(())
    }

    /// Left-to-right text of the row as the UI would show it.
    pub fn display_text(&self) -> String {
        self.cells.iter().rev().map(Cell::display_char).collect()
    }
}

/// The full answer surface for one trial: working rows plus final row.
///
/// Exclusively owned by the active trial and replaced wholesale when a
/// new problem is generated; no cell state survives across trials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSchema {
    width: usize,
    rows: Vec<Row>,
    final_row: Row,
}

impl GridSchema {
    /// Lay out the grid for a decomposition: one working row per partial
    /// product (row at shift `p` gets `p` placeholders) and a final row
    /// with none.
    pub fn for_decomposition(decomposition: &Decomposition) -> Self {
        let width = decomposition.width();
        let rows = decomposition
            .partials()
            .iter()
            .map(|p| Row::new(width, p.shift))
            .collect();
        Self {
            width,
            rows,
            final_row: Row::new(width, 0),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Working rows, shift 0 first.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, shift: usize) -> Option<&Row> {
        self.rows.get(shift)
    }

    pub fn row_mut(&mut self, shift: usize) -> Option<&mut Row> {
        self.rows.get_mut(shift)
    }

    pub fn final_row(&self) -> &Row {
        &self.final_row
    }

    pub fn final_row_mut(&mut self) -> &mut Row {
        &mut self.final_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::decompose;
    use crate::model::Problem;

    fn grid_23_14() -> GridSchema {
        GridSchema::for_decomposition(&decompose(&Problem::new(23, 14)))
    }

    #[test]
    fn layout_matches_decomposition() {
        let grid = grid_23_14();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.final_row().width(), 3);
    }

    #[test]
    fn placeholder_count_equals_shift() {
        let grid = GridSchema::for_decomposition(&decompose(&Problem::new(12, 345)));
        for (shift, row) in grid.rows().iter().enumerate() {
            let placeholders = row
                .cells()
                .iter()
                .filter(|c| !c.is_editable())
                .count();
            assert_eq!(placeholders, shift);
            // Placeholders occupy exactly the rightmost cells.
            for col in 0..shift {
                assert!(!row.is_editable(col));
            }
            for col in shift..row.width() {
                assert!(row.is_editable(col));
            }
        }
        assert_eq!(grid.final_row().editable_cells(), grid.width());
    }

    #[test]
    fn set_digit_rejects_placeholder_and_junk() {
        let mut grid = grid_23_14();
        let row1 = grid.row_mut(1).unwrap();
        assert_eq!(row1.set_digit(0, '5'), Err(GridError::NotEditable(0)));
        assert_eq!(row1.set_digit(1, 'x'), Err(GridError::NotADigit('x')));
        assert_eq!(
            row1.set_digit(9, '1'),
            Err(GridError::ColumnOutOfRange { col: 9, width: 3 })
        );
        assert!(row1.set_digit(1, '3').is_ok());
        assert_eq!(row1.cell(1), Some(Cell::Digit(3)));
    }

    #[test]
    fn enter_right_aligns_against_shift() {
        let mut grid = grid_23_14();

        let row0 = grid.row_mut(0).unwrap();
        row0.enter("92").unwrap();
        assert_eq!(row0.display_text(), "_92");

        let row1 = grid.row_mut(1).unwrap();
        row1.enter("23").unwrap();
        assert_eq!(row1.display_text(), "23.");

        let final_row = grid.final_row_mut();
        final_row.enter("322").unwrap();
        assert_eq!(final_row.display_text(), "322");
    }

    #[test]
    fn enter_rejects_overflow() {
        let mut grid = grid_23_14();
        let row1 = grid.row_mut(1).unwrap();
        assert_eq!(
            row1.enter("230"),
            Err(GridError::TooManyDigits {
                entered: 3,
                editable: 2
            })
        );
    }

    #[test]
    fn clear_all_keeps_placeholders() {
        let mut grid = grid_23_14();
        let row1 = grid.row_mut(1).unwrap();
        row1.enter("23").unwrap();
        row1.clear_all();
        assert_eq!(row1.cell(0), Some(Cell::Placeholder));
        assert_eq!(row1.cell(1), Some(Cell::Empty));
        assert_eq!(row1.cell(2), Some(Cell::Empty));
    }
}
