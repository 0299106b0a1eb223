//! Cell-state grid that commands are applied against.

use std::fmt;

/// State of a single grid cell
///
/// Every cell is in exactly one state at any time. `Painted` is terminal
/// within a single pipeline run: once a command covers a cell it never
/// reverts to `MustPaint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Must remain unpainted; no command may ever cover this cell
    MustNotPaint,
    /// Required to end up painted; tracked until a command covers it
    MustPaint,
    /// Already covered by a committed command
    Painted,
}

/// A `height x width` grid of cell states
///
/// Coordinates are `0 <= x < width`, `0 <= y < height`. This layer performs
/// no legality checks beyond bounds; the covering engines must have validated
/// a command before mutating through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell in the given state
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        Self {
            width,
            height,
            cells: vec![state; width * height],
        }
    }

    /// Build a grid from row-major cell states. Rows must all be `width`
    /// long; the `ascii` reader guarantees this before calling.
    pub fn from_rows(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn state(&self, x: usize, y: usize) -> CellState {
        self.cells[y * self.width + x]
    }

    pub fn set_state(&mut self, x: usize, y: usize, state: CellState) {
        self.cells[y * self.width + x] = state;
    }

    /// Whether (x, y) is both in bounds and currently `MustPaint`
    pub fn is_must_paint(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.state(x, y) == CellState::MustPaint
    }

    /// All `MustPaint` coordinates, scanned column-major (x outer, y inner).
    ///
    /// The engines seed their candidate lists from this exact order; the
    /// emitted command sequence depends on it.
    pub fn must_paint_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if self.state(x, y) == CellState::MustPaint {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    /// Count of cells still in `MustPaint`
    pub fn remaining(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == CellState::MustPaint)
            .count()
    }
}

impl fmt::Display for Grid {
    /// Render the working grid: `O` painted, `.` still required, space
    /// forbidden.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match self.state(x, y) {
                    CellState::Painted => 'O',
                    CellState::MustPaint => '.',
                    CellState::MustNotPaint => ' ',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
