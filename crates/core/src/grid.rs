//! Grid module - immutable labelled cell matrix with a placement offset
//!
//! A grid is `height` rows of `width` cells stored flat in row-major order
//! (`y * width + x`), plus an `(x, y)` offset that places the grid's cell
//! origin inside a larger shared coordinate space. The playfield background
//! sits at offset (0, 0); a falling piece is a 4x4 grid moved around by its
//! offset.
//!
//! Grids are values: every operation returns a new grid. Cell storage is
//! shared behind an `Arc`, so `clone` and `shift` never copy cells.
//!
//! Coordinates: x grows to the right, y grows downward.

use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::types::{CellValue, EMPTY_CELL};

/// Width and height of a grid in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Placement of a grid's cell origin in the shared coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: usize,
    pub y: usize,
}

/// Owned copy of a grid's cells and offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub cells: Vec<Vec<CellValue>>,
    pub x_offset: usize,
    pub y_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat cells, row-major (y * width + x)
    cells: Arc<[CellValue]>,
    offset: Offset,
}

impl Grid {
    /// Create an empty grid at offset (0, 0)
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height].into(),
            offset: Offset::default(),
        }
    }

    /// Create a grid from rows of cells
    ///
    /// Every row must have the length of the first one.
    pub fn from_rows<R: AsRef<[CellValue]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(EngineError::RaggedRows {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells: cells.into(),
            offset: Offset::default(),
        })
    }

    /// Same cells, placed at `(x, y)`
    pub fn with_offset(self, x: usize, y: usize) -> Self {
        Self {
            offset: Offset { x, y },
            ..self
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn x_offset(&self) -> usize {
        self.offset.x
    }

    pub fn y_offset(&self) -> usize {
        self.offset.y
    }

    /// Owned copy of cells and offsets
    pub fn state(&self) -> GridState {
        GridState {
            cells: self.cells(),
            x_offset: self.offset.x,
            y_offset: self.offset.y,
        }
    }

    /// Raw cell at `(x, y)`, offsets not applied. `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<CellValue> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Raw row `y`
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[CellValue] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Copy of the raw cell matrix (offsets not applied)
    pub fn cells(&self) -> Vec<Vec<CellValue>> {
        (0..self.height).map(|y| self.row(y).to_vec()).collect()
    }

    /// Cell seen at `(x, y)` of the shared coordinate space.
    ///
    /// Empty anywhere outside this grid's placed extent.
    #[inline]
    fn value_at(&self, x: usize, y: usize) -> CellValue {
        if x < self.offset.x || y < self.offset.y {
            return EMPTY_CELL;
        }
        self.get(x - self.offset.x, y - self.offset.y)
            .unwrap_or(EMPTY_CELL)
    }

    /// Cells as they appear once offsets are applied
    ///
    /// The result is `height + y_offset` rows of `width + x_offset` cells; the
    /// leading rows and columns are empty.
    pub fn offset_cells(&self) -> Vec<Vec<CellValue>> {
        self.padded_cells(self.width + self.offset.x, self.height + self.offset.y)
    }

    /// Offset cells padded with empty cells to `width` x `height`, and clipped
    /// to it
    pub fn padded_cells(&self, width: usize, height: usize) -> Vec<Vec<CellValue>> {
        (0..height)
            .map(|y| (0..width).map(|x| self.value_at(x, y)).collect())
            .collect()
    }

    /// Union of this grid and `other`, with this grid's dimensions and offset
    ///
    /// `other` is aligned into this grid's frame through both offsets. Where
    /// both have a cell, this grid's value wins.
    pub fn merge(&self, other: &Grid) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for (x, &own) in self.row(y).iter().enumerate() {
                cells.push(if own != EMPTY_CELL {
                    own
                } else {
                    other.value_at(x + self.offset.x, y + self.offset.y)
                });
            }
        }

        Grid {
            width: self.width,
            height: self.height,
            cells: cells.into(),
            offset: self.offset,
        }
    }

    /// Translate the offset by `down` rows and `right` columns, clamping at 0
    ///
    /// Never rejects: legality is the caller's business.
    pub fn shift(&self, down: i32, right: i32) -> Grid {
        Grid {
            offset: Offset {
                x: clamped_add(self.offset.x, right),
                y: clamped_add(self.offset.y, down),
            },
            ..self.clone()
        }
    }

    /// Remove row `y` and prepend an empty row, keeping the height
    ///
    /// Returns an unchanged copy when `y` is out of range.
    pub fn delete_row(&self, y: usize) -> Grid {
        if y >= self.height {
            return self.clone();
        }

        let width = self.width;
        let mut cells = Vec::with_capacity(self.cells.len());
        cells.resize(width, EMPTY_CELL);
        cells.extend_from_slice(&self.cells[..y * width]);
        cells.extend_from_slice(&self.cells[(y + 1) * width..]);

        Grid {
            width,
            height: self.height,
            cells: cells.into(),
            offset: self.offset,
        }
    }

    /// Whether some position of the shared coordinate space holds a cell of
    /// both grids
    pub fn overlap(&self, other: &Grid) -> bool {
        self.active_cells().any(|(x, y)| {
            other.value_at(x + self.offset.x, y + self.offset.y) != EMPTY_CELL
        })
    }

    /// Raw coordinates of non-empty cells, row by row
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| {
            self.row(y)
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c != EMPTY_CELL)
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY_CELL)
    }

    /// Check if raw row `y` is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.width > 0 && self.row(y).iter().all(|&c| c != EMPTY_CELL)
    }

    /// Topmost completely filled row
    pub fn first_full_row(&self) -> Option<usize> {
        (0..self.height).find(|&y| self.is_row_full(y))
    }
}

impl<const W: usize, const H: usize> From<[[CellValue; W]; H]> for Grid {
    fn from(rows: [[CellValue; W]; H]) -> Self {
        Self {
            width: W,
            height: H,
            cells: rows.iter().flatten().copied().collect(),
            offset: Offset::default(),
        }
    }
}

fn clamped_add(value: usize, delta: i32) -> usize {
    (value as i64 + delta as i64).max(0) as usize
}
