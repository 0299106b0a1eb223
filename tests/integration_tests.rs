//! Integration tests for the covering planner

use paintplan::{ascii, plan, CellState, Command, Grid, PlannerConfig, Strategy};

fn solve(input: &str) -> paintplan::Plan {
    let target = ascii::parse_target(input).expect("valid target");
    plan(&target, &PlannerConfig::default())
}

/// Replaying the plan must paint exactly the target's must-paint set and
/// never a must-not-paint cell.
fn assert_exact_cover(input: &str) {
    let target = ascii::parse_target(input).expect("valid target");
    let result = plan(&target, &PlannerConfig::default());
    let canvas = result.replay(target.width(), target.height());
    for y in 0..target.height() {
        for x in 0..target.width() {
            let required = target.state(x, y) == CellState::MustPaint;
            let painted = canvas.state(x, y) == CellState::Painted;
            assert_eq!(
                painted, required,
                "cell ({x}, {y}): painted={painted}, required={required}"
            );
        }
    }
}

#[test]
fn solid_3x3_is_one_square() {
    let result = solve("3 3\n###\n###\n###\n");
    assert_eq!(result.commands(), &[Command::square(1, 1, 1)]);
}

#[test]
fn single_row_is_one_line() {
    let result = solve("1 5\n#####\n");
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.commands()[0],
        Command::line(0, 0, 4, 0).expect("aligned")
    );
}

#[test]
fn single_column_is_one_line() {
    let result = solve("4 1\n#\n#\n#\n#\n");
    assert_eq!(result.len(), 1);
    assert_eq!(
        result.commands()[0],
        Command::line(0, 0, 0, 3).expect("aligned")
    );
}

#[test]
fn isolated_cell_is_one_single() {
    let result = solve("3 3\n...\n.#.\n...\n");
    assert_eq!(result.commands(), &[Command::square(1, 1, 0)]);
}

#[test]
fn blank_target_yields_empty_plan() {
    let result = solve("3 4\n....\n....\n....\n");
    assert!(result.is_empty());
}

#[test]
fn checkerboard_falls_back_to_singles() {
    let input = "3 3\n#.#\n.#.\n#.#\n";
    let result = solve(input);
    assert_eq!(result.len(), 5);
    assert!(result
        .commands()
        .iter()
        .all(|c| matches!(c, Command::PaintSquare { radius: 0, .. })));
    assert_exact_cover(input);
}

#[test]
fn exact_cover_on_mixed_shapes() {
    // Solid block, a protruding arm, and scattered singles around forbidden
    // cells
    let input = "6 8\n\
                 #####...\n\
                 #####..#\n\
                 #####...\n\
                 #####..#\n\
                 #####...\n\
                 ........\n";
    assert_exact_cover(input);
}

#[test]
fn exact_cover_on_hollow_frame() {
    let input = "5 7\n\
                 #######\n\
                 #.....#\n\
                 #.....#\n\
                 #.....#\n\
                 #######\n";
    assert_exact_cover(input);
}

#[test]
fn never_paints_forbidden_cells_next_to_large_regions() {
    // A solid region hugging forbidden cells on every side
    let input = "5 5\n\
                 .###.\n\
                 #####\n\
                 #####\n\
                 #####\n\
                 .###.\n";
    assert_exact_cover(input);
}

#[test]
fn selector_picks_the_smaller_pipeline() {
    let inputs = [
        "3 3\n###\n###\n###\n",
        "1 5\n#####\n",
        "4 6\n######\n######\n######\n######\n",
        "3 3\n#.#\n.#.\n#.#\n",
        "5 5\n.###.\n#####\n#####\n#####\n.###.\n",
    ];
    for input in inputs {
        let target = ascii::parse_target(input).expect("valid target");
        let auto = plan(&target, &PlannerConfig::default());
        let a = plan(
            &target,
            &PlannerConfig {
                strategy: Strategy::SquaresThenLines,
                min_commit_radius: 1,
            },
        );
        let b = plan(
            &target,
            &PlannerConfig {
                strategy: Strategy::LinesOnly,
                min_commit_radius: 1,
            },
        );
        assert_eq!(auto.len(), a.len().min(b.len()), "target:\n{input}");
    }
}

#[test]
fn plans_are_deterministic() {
    let input = "5 7\n\
                 ##...##\n\
                 ##.#.##\n\
                 ...#...\n\
                 ##.#.##\n\
                 ##...##\n";
    let first = solve(input);
    let second = solve(input);
    assert_eq!(first, second);
}

#[test]
fn overlapping_commits_stay_idempotent() {
    // A plus shape: the square pipeline may double-cover the center, which
    // must never corrupt the final canvas.
    let input = "5 5\n\
                 ..#..\n\
                 ..#..\n\
                 #####\n\
                 ..#..\n\
                 ..#..\n";
    assert_exact_cover(input);
}

#[test]
fn fixed_strategy_skips_squares_entirely() {
    let target = ascii::parse_target("3 3\n###\n###\n###\n").expect("valid target");
    let result = plan(
        &target,
        &PlannerConfig {
            strategy: Strategy::LinesOnly,
            min_commit_radius: 1,
        },
    );
    assert!(result
        .commands()
        .iter()
        .all(|c| !matches!(c, Command::PaintSquare { radius: 1.., .. })));
    // Still an exact cover, just with more commands
    let canvas = result.replay(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(canvas.state(x, y), CellState::Painted);
        }
    }
}

#[test]
fn min_commit_radius_pushes_work_to_lines() {
    let target = ascii::parse_target("3 3\n###\n###\n###\n").expect("valid target");
    let result = plan(
        &target,
        &PlannerConfig {
            strategy: Strategy::SquaresThenLines,
            min_commit_radius: 2,
        },
    );
    // No 3x3 square allowed; the rows become lines instead
    assert_eq!(result.len(), 3);
    assert!(result
        .commands()
        .iter()
        .all(|c| matches!(c, Command::PaintLine { .. })));
}

#[test]
fn replay_matches_grid_dimensions() {
    let target = Grid::filled(4, 2, CellState::MustPaint);
    let result = plan(&target, &PlannerConfig::default());
    let canvas = result.replay(target.width(), target.height());
    assert_eq!(canvas.width(), 4);
    assert_eq!(canvas.height(), 2);
}
