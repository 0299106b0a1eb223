//! Paintplan Covering Engine
//!
//! Compiles a binary raster target (a grid of cells marked must-paint or
//! must-not-paint) into a short ordered sequence of drawing commands that
//! reproduces the target when executed against a blank canvas.
//!
//! # Features
//!
//! - **Three primitives**: odd-sized centered squares, axis-aligned lines,
//!   single-cell erase
//! - **Greedy multi-pass heuristic**: largest squares first, then longest
//!   lines to a fixed point, then single-cell fallback
//! - **Strategy selection**: the square phase is skipped entirely when a
//!   line-only plan comes out shorter
//!
//! # Example
//!
//! ```
//! use paintplan::{ascii, PlannerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let target = ascii::parse_target("2 3\n###\n###\n")?;
//! let plan = paintplan::plan(&target, &PlannerConfig::default());
//! assert_eq!(plan.len(), 2);
//! println!("{}", ascii::format_plan(&plan));
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

pub mod error;
pub use error::{Error, Result};

pub mod ascii;
pub mod command;
pub mod cover;
pub mod grid;

pub use command::Command;
pub use cover::{plan, LineOnlyPlanner, Planner, SquareLinePlanner};
pub use grid::{CellState, Grid};

/// Which covering pipeline(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Run both pipelines on independent grid copies and keep the shorter
    /// plan
    Auto,
    /// Squares, then lines, then single-cell fallback
    SquaresThenLines,
    /// Lines and single-cell fallback only
    LinesOnly,
}

/// Configuration for the covering planner
///
/// By default both pipelines are tried and squares smaller than 3x3 are
/// left to the line and fallback stages.
///
/// # Examples
///
/// ```
/// let cfg = paintplan::PlannerConfig::default();
/// assert_eq!(cfg.min_commit_radius, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Pipeline selection
    pub strategy: Strategy,
    /// Smallest square radius the square commit pass may emit; clamped to a
    /// minimum of 1, since radius 0 always belongs to the fallback stage
    pub min_commit_radius: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            min_commit_radius: 1,
        }
    }
}

/// An ordered drawing-command sequence
///
/// Produced by a [`Planner`]; applying the commands in order to a blank
/// canvas yields exactly the target's must-paint set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    commands: Vec<Command>,
}

impl Plan {
    pub(crate) fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the plan onto a blank `width x height` canvas and return the
    /// resulting grid. Useful for checking a plan against its target.
    pub fn replay(&self, width: usize, height: usize) -> Grid {
        let mut canvas = Grid::filled(width, height, CellState::MustNotPaint);
        for command in &self.commands {
            command.apply(&mut canvas);
        }
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.strategy, Strategy::Auto);
        assert_eq!(config.min_commit_radius, 1);
    }

    #[test]
    fn replay_applies_commands_in_order() {
        let plan = Plan::new(vec![
            Command::square(1, 1, 1),
            Command::erase(1, 1),
        ]);
        let canvas = plan.replay(3, 3);
        assert_eq!(canvas.state(0, 0), CellState::Painted);
        // The later erase wins over the earlier paint
        assert_eq!(canvas.state(1, 1), CellState::MustNotPaint);
    }
}
