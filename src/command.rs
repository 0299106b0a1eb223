//! Drawing command primitives and their canonical text form.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::grid::{CellState, Grid};

/// A single drawing command
///
/// Commands are immutable value objects; they carry no identity beyond their
/// position in the emitted sequence. `apply` paints unconditionally: the
/// covering engines are responsible for checking a command's legality (in
/// bounds, no `MustNotPaint` cell covered) before committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Paints the `(2*radius + 1)^2` cells centered at (x, y). Radius 0 is a
    /// single cell.
    PaintSquare { x: usize, y: usize, radius: usize },
    /// Paints the inclusive run between two axis-aligned endpoints
    PaintLine {
        x1: usize,
        y1: usize,
        x2: usize,
        y2: usize,
    },
    /// Marks one cell as not-painted. Part of the command vocabulary but
    /// never emitted by the covering engines.
    EraseCell { x: usize, y: usize },
}

impl Command {
    pub fn square(x: usize, y: usize, radius: usize) -> Self {
        Command::PaintSquare { x, y, radius }
    }

    /// Construct an axis-aligned line. Endpoints that are neither
    /// horizontally nor vertically aligned are a contract violation and are
    /// rejected here rather than at apply time. Endpoints are normalized so
    /// the smaller coordinate comes first.
    pub fn line(x1: usize, y1: usize, x2: usize, y2: usize) -> Result<Self> {
        if x1 != x2 && y1 != y2 {
            return Err(Error::DiagonalLine { x1, y1, x2, y2 });
        }
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        Ok(Command::PaintLine { x1, y1, x2, y2 })
    }

    pub fn erase(x: usize, y: usize) -> Self {
        Command::EraseCell { x, y }
    }

    /// Apply this command to the grid.
    ///
    /// Precondition: the caller confirmed every touched cell is in bounds and
    /// (for paint commands) not `MustNotPaint`.
    pub fn apply(&self, grid: &mut Grid) {
        match *self {
            Command::PaintSquare { x, y, radius } => {
                for cy in y - radius..=y + radius {
                    for cx in x - radius..=x + radius {
                        grid.set_state(cx, cy, CellState::Painted);
                    }
                }
            }
            Command::PaintLine { x1, y1, x2, y2 } => {
                if x1 == x2 {
                    for cy in y1..=y2 {
                        grid.set_state(x1, cy, CellState::Painted);
                    }
                } else {
                    for cx in x1..=x2 {
                        grid.set_state(cx, y1, CellState::Painted);
                    }
                }
            }
            Command::EraseCell { x, y } => {
                grid.set_state(x, y, CellState::MustNotPaint);
            }
        }
    }
}

impl fmt::Display for Command {
    /// Canonical text form consumed by the plan writer
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::PaintSquare { x, y, radius } => {
                write!(f, "PAINT_SQUARE {} {} {}", x, y, radius)
            }
            Command::PaintLine { x1, y1, x2, y2 } => {
                write!(f, "PAINT_LINE {} {} {} {}", x1, y1, x2, y2)
            }
            Command::EraseCell { x, y } => write!(f, "ERASE_CELL {} {}", x, y),
        }
    }
}
