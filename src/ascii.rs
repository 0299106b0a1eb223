//! Line-oriented reader and writer for target rasters and plans.
//!
//! Input: first line `H W` (height then width), followed by `H` rows of `W`
//! characters where `#` marks a must-paint cell and anything else a
//! must-not-paint cell. Output: the command count on the first line, then
//! one canonical command per line. The covering core never touches files;
//! everything here is glue around [`crate::plan`].

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::{CellState, Grid};
use crate::Plan;

/// Parse a target raster from its text form.
///
/// Rows longer than the declared width are truncated; shorter rows, missing
/// rows, and malformed headers are rejected.
pub fn parse_target(input: &str) -> Result<Grid> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::InvalidHeader("empty input".to_string()))?;

    let mut parts = header.split_whitespace();
    let (height, width) = match (parts.next(), parts.next()) {
        (Some(h), Some(w)) => {
            let height: usize = h
                .parse()
                .map_err(|_| Error::InvalidHeader(header.to_string()))?;
            let width: usize = w
                .parse()
                .map_err(|_| Error::InvalidHeader(header.to_string()))?;
            (height, width)
        }
        _ => return Err(Error::InvalidHeader(header.to_string())),
    };

    // Capacity hint only; hostile headers are rejected by the row checks
    // below, so never let the product overflow or pre-allocate unboundedly.
    let mut cells = Vec::with_capacity(width.saturating_mul(height).min(1 << 20));
    let mut rows = 0usize;
    for (row, line) in lines.take(height).enumerate() {
        let mut found = 0usize;
        for ch in line.chars().take(width) {
            cells.push(if ch == '#' {
                CellState::MustPaint
            } else {
                CellState::MustNotPaint
            });
            found += 1;
        }
        if found < width {
            return Err(Error::RowWidth {
                row,
                expected: width,
                found,
            });
        }
        rows += 1;
    }
    if rows < height {
        return Err(Error::RowCount {
            expected: height,
            found: rows,
        });
    }

    Ok(Grid::from_rows(width, height, cells))
}

/// Read and parse a target raster file
pub fn read_target<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    parse_target(&text)
}

/// Render a plan in the canonical output format
pub fn format_plan(plan: &Plan) -> String {
    let mut out = plan.len().to_string();
    for command in plan.commands() {
        out.push('\n');
        out.push_str(&command.to_string());
    }
    out.push('\n');
    out
}

/// Write a plan to a file in the canonical output format
pub fn write_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    fs::write(path, format_plan(plan))?;
    Ok(())
}

/// Serialize a plan's command list as pretty-printed JSON
pub fn plan_to_json(plan: &Plan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
