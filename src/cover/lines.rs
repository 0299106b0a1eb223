//! Line-covering engine.
//!
//! Repeatedly derives maximal horizontal and vertical runs of
//! still-required cells from the residual grid, commits the longest runs
//! first, and loops until no required cell has a required neighbor below or
//! to its right. A run invalidated by an earlier commit in the same pass is
//! dropped whole; the next pass re-derives whatever is left of it.

use std::collections::HashSet;

use log::debug;

use crate::command::Command;
use crate::grid::{CellState, Grid};

/// One candidate run within a pass
#[derive(Debug, Clone, Copy)]
struct Run {
    x1: usize,
    y1: usize,
    x2: usize,
    y2: usize,
}

impl Run {
    fn length_squared(&self) -> usize {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;
        dx * dx + dy * dy
    }
}

/// Cover straight stretches of remaining `MustPaint` cells with line
/// commands, iterating to a fixed point.
///
/// `seeds` is the column-major list of originally-`MustPaint` cells; runs
/// are discovered by scanning it in order, so the emitted sequence is
/// deterministic.
pub fn cover_lines(grid: &mut Grid, seeds: &[(usize, usize)], commands: &mut Vec<Command>) {
    let mut pass = 0usize;
    loop {
        pass += 1;
        let mut candidates = collect_runs(grid, seeds);
        let mut committed = 0usize;

        // Longest first; the sort is stable, so ties keep generation order
        // (horizontal runs of this pass ahead of vertical ones).
        candidates.sort_by(|a, b| b.length_squared().cmp(&a.length_squared()));

        for run in &candidates {
            if span_still_required(grid, run) {
                let command = Command::PaintLine {
                    x1: run.x1,
                    y1: run.y1,
                    x2: run.x2,
                    y2: run.y2,
                };
                command.apply(grid);
                commands.push(command);
                committed += 1;
            }
        }
        debug!(
            "line pass {}: {} candidates, {} committed",
            pass,
            candidates.len(),
            committed
        );

        if runs_exhausted(grid, seeds) {
            break;
        }
    }
}

/// Derive this pass's horizontal then vertical run candidates. Every cell of
/// a discovered run is claimed so it cannot start a second run in the same
/// direction this pass.
fn collect_runs(grid: &Grid, seeds: &[(usize, usize)]) -> Vec<Run> {
    let mut runs = Vec::new();

    let mut claimed_horizontal: HashSet<(usize, usize)> = HashSet::new();
    for &(x, y) in seeds {
        if grid.state(x, y) != CellState::MustPaint || claimed_horizontal.contains(&(x, y)) {
            continue;
        }
        if !grid.is_must_paint(x + 1, y) {
            continue;
        }
        claimed_horizontal.insert((x, y));
        claimed_horizontal.insert((x + 1, y));
        let mut end = x + 1;
        while grid.is_must_paint(end + 1, y) {
            end += 1;
            claimed_horizontal.insert((end, y));
        }
        runs.push(Run {
            x1: x,
            y1: y,
            x2: end,
            y2: y,
        });
    }

    let mut claimed_vertical: HashSet<(usize, usize)> = HashSet::new();
    for &(x, y) in seeds {
        if grid.state(x, y) != CellState::MustPaint || claimed_vertical.contains(&(x, y)) {
            continue;
        }
        if !grid.is_must_paint(x, y + 1) {
            continue;
        }
        claimed_vertical.insert((x, y));
        claimed_vertical.insert((x, y + 1));
        let mut end = y + 1;
        while grid.is_must_paint(x, end + 1) {
            end += 1;
            claimed_vertical.insert((x, end));
        }
        runs.push(Run {
            x1: x,
            y1: y,
            x2: x,
            y2: end,
        });
    }

    runs
}

/// Whether every cell of the run is still `MustPaint`. Earlier commits in
/// the same pass may have painted part of it; a partial run is never
/// committed.
fn span_still_required(grid: &Grid, run: &Run) -> bool {
    if run.x1 == run.x2 {
        (run.y1..=run.y2).all(|y| grid.state(run.x1, y) == CellState::MustPaint)
    } else {
        (run.x1..=run.x2).all(|x| grid.state(x, run.y1) == CellState::MustPaint)
    }
}

/// Fixed-point predicate: no required cell has a required neighbor directly
/// below or to the right. Any surviving multi-cell run would expose such a
/// neighbor at its topmost/leftmost cell, so these two directions suffice.
fn runs_exhausted(grid: &Grid, seeds: &[(usize, usize)]) -> bool {
    for &(x, y) in seeds {
        if grid.state(x, y) == CellState::MustPaint
            && (grid.is_must_paint(x, y + 1) || grid.is_must_paint(x + 1, y))
        {
            return false;
        }
    }
    true
}
