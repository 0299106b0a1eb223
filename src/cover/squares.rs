//! Square-covering engine.
//!
//! Grows a hierarchy of concentric square candidates tier by tier (one tier
//! per radius), then commits the largest still-feasible squares first. Tier
//! growth validates only the newly added outer ring of each candidate: the
//! inner rings were already validated at smaller radii. The commit pass
//! re-checks only the four corners; painting is idempotent, so a stale edge
//! cell can at worst waste a command, never break correctness.

use log::debug;

use crate::command::Command;
use crate::grid::{CellState, Grid};

/// Cover large solid regions of the grid with odd-sized squares.
///
/// `seeds` is the column-major list of originally-`MustPaint` cells; tier 0
/// holds one radius-0 candidate per seed. Commits paint `grid` and append to
/// `commands` in largest-radius-first order. Squares below `min_radius`
/// (never below 1) are left to later stages.
pub fn cover_squares(
    grid: &mut Grid,
    seeds: &[(usize, usize)],
    min_radius: usize,
    commands: &mut Vec<Command>,
) {
    let tiers = build_tiers(grid, seeds);
    commit_tiers(grid, &tiers, min_radius.max(1), commands);
}

/// Grow candidate tiers until a radius yields no feasible center.
///
/// `tiers[s]` holds the centers whose radius-`s` square has every edge cell
/// in bounds and not `MustNotPaint`.
fn build_tiers(grid: &Grid, seeds: &[(usize, usize)]) -> Vec<Vec<(usize, usize)>> {
    let mut tiers: Vec<Vec<(usize, usize)>> = vec![seeds.to_vec()];

    loop {
        let radius = tiers.len();
        let previous = &tiers[radius - 1];
        let survivors: Vec<(usize, usize)> = previous
            .iter()
            .copied()
            .filter(|&(cx, cy)| outer_ring_fits(grid, cx, cy, radius))
            .collect();
        if survivors.is_empty() {
            break;
        }
        debug!(
            "square tier {}: {} candidates survive",
            radius,
            survivors.len()
        );
        tiers.push(survivors);
    }

    tiers
}

/// Whether the radius-`radius` ring around (cx, cy) stays in bounds and
/// avoids every `MustNotPaint` cell. Checks the top and bottom edge rows in
/// full, then the left and right edge columns minus the corners already
/// covered.
fn outer_ring_fits(grid: &Grid, cx: usize, cy: usize, radius: usize) -> bool {
    let (Some(x0), Some(y0)) = (cx.checked_sub(radius), cy.checked_sub(radius)) else {
        return false;
    };
    let (x1, y1) = (cx + radius, cy + radius);
    if x1 >= grid.width() || y1 >= grid.height() {
        return false;
    }

    for x in x0..=x1 {
        if grid.state(x, y0) == CellState::MustNotPaint
            || grid.state(x, y1) == CellState::MustNotPaint
        {
            return false;
        }
    }
    for y in y0 + 1..y1 {
        if grid.state(x0, y) == CellState::MustNotPaint
            || grid.state(x1, y) == CellState::MustNotPaint
        {
            return false;
        }
    }
    true
}

/// Walk tiers from the largest radius down to `min_radius`, committing every
/// candidate whose four corners are still exactly `MustPaint`.
fn commit_tiers(
    grid: &mut Grid,
    tiers: &[Vec<(usize, usize)>],
    min_radius: usize,
    commands: &mut Vec<Command>,
) {
    for radius in (min_radius..tiers.len()).rev() {
        for &(cx, cy) in &tiers[radius] {
            let corners_required = grid.state(cx + radius, cy - radius) == CellState::MustPaint
                && grid.state(cx + radius, cy + radius) == CellState::MustPaint
                && grid.state(cx - radius, cy + radius) == CellState::MustPaint
                && grid.state(cx - radius, cy - radius) == CellState::MustPaint;
            if corners_required {
                let command = Command::square(cx, cy, radius);
                command.apply(grid);
                commands.push(command);
            }
        }
    }
}
