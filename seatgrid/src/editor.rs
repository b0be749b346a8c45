//! Editable room layout drafts.
//!
//! Staff type seat labels into a grid where a blank cell means "aisle". The
//! API stores the explicit [`AISLE`] tag instead, so the two representations
//! are converted here, at the editing boundary, and nowhere else.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use crate::room::{AISLE, StudyRoom};
use crate::wire::parse_count;

/// Stored layout to editor cells: `"aisle"` becomes `""`.
#[must_use]
pub fn to_editable(stored: &[Vec<String>]) -> Vec<Vec<String>> {
    stored
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| if cell == AISLE { String::new() } else { cell.clone() })
                .collect()
        })
        .collect()
}

/// Editor cells to stored layout: whitespace-only cells become `"aisle"`.
#[must_use]
pub fn to_stored(editable: &[Vec<String>]) -> Vec<Vec<String>> {
    editable
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| if cell.trim().is_empty() { AISLE.to_owned() } else { cell.clone() })
                .collect()
        })
        .collect()
}

/// Parse a row/column count input; never below one.
#[must_use]
pub fn parse_dimension(raw: &str) -> usize {
    usize::try_from(parse_count(raw)).unwrap_or(1).max(1)
}

/// A layout being edited plus the requested dimensions typed into the size
/// inputs. The requested size only takes effect on [`LayoutDraft::resize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutDraft {
    cells: Vec<Vec<String>>,
    pub rows: usize,
    pub cols: usize,
}

impl Default for LayoutDraft {
    /// Two blocks of seats split by a centre aisle and a walkway row.
    fn default() -> Self {
        let block = |labels: [&str; 6]| -> Vec<String> {
            let mut row: Vec<String> = labels[..3].iter().map(|l| (*l).to_owned()).collect();
            row.push(String::new());
            row.extend(labels[3..].iter().map(|l| (*l).to_owned()));
            row
        };
        Self::from_cells(vec![
            block(["1", "2", "3", "4", "5", "6"]),
            block(["7", "8", "9", "10", "11", "12"]),
            vec![String::new(); 7],
            block(["13", "14", "15", "16", "17", "18"]),
            block(["19", "20", "21", "22", "23", "24"]),
        ])
    }
}

impl LayoutDraft {
    /// Wrap editor cells. An empty grid becomes a single aisle so there is
    /// always something to edit.
    #[must_use]
    pub fn from_cells(mut cells: Vec<Vec<String>>) -> Self {
        if cells.is_empty() {
            cells.push(vec![String::new()]);
        }
        for row in &mut cells {
            if row.is_empty() {
                row.push(String::new());
            }
        }
        let rows = cells.len();
        let cols = cells.iter().map(Vec::len).max().unwrap_or(1);
        Self { cells, rows, cols }
    }

    /// Load a stored room into the editor.
    #[must_use]
    pub fn from_room(room: &StudyRoom) -> Self {
        Self::from_cells(to_editable(&room.layout))
    }

    #[must_use]
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Row lengths; changes only when the grid shape changes.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.cells.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.cells.get(row).and_then(|r| r.get(col)).map_or("", String::as_str)
    }

    /// Overwrite one cell. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            value.clone_into(cell);
        }
    }

    pub fn set_requested_rows(&mut self, raw: &str) {
        self.rows = parse_dimension(raw);
    }

    pub fn set_requested_cols(&mut self, raw: &str) {
        self.cols = parse_dimension(raw);
    }

    /// Append a row of aisles as wide as the requested column count.
    pub fn add_row(&mut self) {
        self.cells.push(vec![String::new(); self.cols.max(1)]);
        self.rows = self.cells.len();
    }

    /// Drop the last row; a draft never shrinks below one row.
    pub fn remove_row(&mut self) {
        if self.cells.len() <= 1 {
            return;
        }
        self.cells.pop();
        self.rows = self.cells.len();
    }

    /// Append an aisle to every row.
    pub fn add_column(&mut self) {
        for row in &mut self.cells {
            row.push(String::new());
        }
        self.cols = self.width();
    }

    /// Drop the last cell of every row; a draft never shrinks below one
    /// column.
    pub fn remove_column(&mut self) {
        if self.width() <= 1 {
            return;
        }
        for row in &mut self.cells {
            if row.len() > 1 {
                row.pop();
            }
        }
        self.cols = self.width();
    }

    /// Apply the requested dimensions, keeping overlapping cells and padding
    /// new positions with aisles.
    pub fn resize(&mut self) {
        let (rows, cols) = (self.rows.max(1), self.cols.max(1));
        self.cells = (0..rows)
            .map(|r| (0..cols).map(|c| self.cell(r, c).to_owned()).collect())
            .collect();
        self.rows = rows;
        self.cols = cols;
    }

    /// The layout in its stored form.
    #[must_use]
    pub fn to_stored(&self) -> Vec<Vec<String>> {
        to_stored(&self.cells)
    }

    fn width(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }
}
