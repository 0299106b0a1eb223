//! Covering pipelines and strategy selection.
//!
//! Two pipelines share the same building blocks: pipeline A runs squares,
//! then lines, then the single-cell fallback; pipeline B skips the square
//! phase entirely. The selector runs whichever the configuration asks for,
//! or both, keeping the shorter plan.

pub mod lines;
pub mod squares;

use log::info;

use crate::command::Command;
use crate::grid::{CellState, Grid};
use crate::{Plan, PlannerConfig, Strategy};

/// A covering pipeline: consumes an owned working grid and produces the
/// ordered command sequence that covers it.
pub trait Planner {
    fn plan(&self, grid: Grid) -> Plan;
}

/// Pipeline A: square covering, then line covering, then single-cell
/// fallback.
pub struct SquareLinePlanner {
    /// Smallest square radius the commit pass may emit (radius 0 always
    /// belongs to the fallback stage)
    pub min_commit_radius: usize,
}

impl Planner for SquareLinePlanner {
    fn plan(&self, mut grid: Grid) -> Plan {
        let seeds = grid.must_paint_cells();
        let mut commands = Vec::new();
        squares::cover_squares(&mut grid, &seeds, self.min_commit_radius, &mut commands);
        lines::cover_lines(&mut grid, &seeds, &mut commands);
        fill_singles(&mut grid, &seeds, &mut commands);
        Plan::new(commands)
    }
}

/// Pipeline B: line covering and single-cell fallback only.
pub struct LineOnlyPlanner;

impl Planner for LineOnlyPlanner {
    fn plan(&self, mut grid: Grid) -> Plan {
        let seeds = grid.must_paint_cells();
        let mut commands = Vec::new();
        lines::cover_lines(&mut grid, &seeds, &mut commands);
        fill_singles(&mut grid, &seeds, &mut commands);
        Plan::new(commands)
    }
}

/// Cover whatever the earlier stages left with radius-0 squares, in seed
/// order.
fn fill_singles(grid: &mut Grid, seeds: &[(usize, usize)], commands: &mut Vec<Command>) {
    for &(x, y) in seeds {
        if grid.state(x, y) == CellState::MustPaint {
            let command = Command::square(x, y, 0);
            command.apply(grid);
            commands.push(command);
        }
    }
}

/// Plan a command sequence for the target grid.
///
/// `Strategy::Auto` runs both pipelines on independent copies of the target
/// and keeps the one with fewer commands (pipeline A on a tie). The fixed
/// strategies run a single pipeline.
pub fn plan(target: &Grid, config: &PlannerConfig) -> Plan {
    let square_line = SquareLinePlanner {
        min_commit_radius: config.min_commit_radius.max(1),
    };
    match config.strategy {
        Strategy::SquaresThenLines => square_line.plan(target.clone()),
        Strategy::LinesOnly => LineOnlyPlanner.plan(target.clone()),
        Strategy::Auto => {
            let with_squares = square_line.plan(target.clone());
            let lines_only = LineOnlyPlanner.plan(target.clone());
            info!(
                "square+line solution: {} commands / line solution: {} commands",
                with_squares.len(),
                lines_only.len()
            );
            if lines_only.len() < with_squares.len() {
                lines_only
            } else {
                with_squares
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows[0].len();
        let mut grid = Grid::filled(width, height, CellState::MustNotPaint);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set_state(x, y, CellState::MustPaint);
                }
            }
        }
        grid
    }

    #[test]
    fn fallback_covers_isolated_cells_in_seed_order() {
        let target = grid_from(&["#.#", "...", "#.#"]);
        let plan = LineOnlyPlanner.plan(target);
        assert_eq!(
            plan.commands(),
            &[
                Command::square(0, 0, 0),
                Command::square(0, 2, 0),
                Command::square(2, 0, 0),
                Command::square(2, 2, 0),
            ]
        );
    }

    #[test]
    fn auto_never_exceeds_either_pipeline() {
        let target = grid_from(&["###.#", "###.#", "###.#", "....#"]);
        let config = PlannerConfig::default();
        let auto = plan(&target, &config);
        let a = plan(
            &target,
            &PlannerConfig {
                strategy: Strategy::SquaresThenLines,
                ..config.clone()
            },
        );
        let b = plan(
            &target,
            &PlannerConfig {
                strategy: Strategy::LinesOnly,
                ..config
            },
        );
        assert_eq!(auto.len(), a.len().min(b.len()));
    }

    #[test]
    fn pipelines_do_not_share_state() {
        let target = grid_from(&["###", "###", "###"]);
        let config = PlannerConfig::default();
        let first = plan(&target, &config);
        let second = plan(&target, &config);
        assert_eq!(first, second);
        // The target itself is untouched
        assert_eq!(target.remaining(), 9);
    }
}
