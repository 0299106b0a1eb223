use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use paintplan::{ascii, PlannerConfig, Strategy};

#[derive(Parser)]
#[command(
    name = "paintplan",
    version,
    about = "Compile binary raster targets into short drawing-command plans"
)]
struct Args {
    /// Target raster files (first line `H W`, then `H` rows where `#` marks
    /// a must-paint cell)
    #[arg(required = true)]
    targets: Vec<PathBuf>,

    /// Covering strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    strategy: StrategyArg,

    /// Smallest square radius the square commit pass may emit
    #[arg(long, default_value_t = 1)]
    min_radius: usize,

    /// Emit the plan as JSON instead of the line format
    #[arg(long)]
    json: bool,

    /// Output path; only valid with a single target. Defaults to
    /// `<target>.out` beside each input.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Auto,
    SquaresThenLines,
    LinesOnly,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => Strategy::Auto,
            StrategyArg::SquaresThenLines => Strategy::SquaresThenLines,
            StrategyArg::LinesOnly => Strategy::LinesOnly,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.output.is_some() && args.targets.len() > 1 {
        bail!("--output requires exactly one target file");
    }

    let config = PlannerConfig {
        strategy: args.strategy.into(),
        min_commit_radius: args.min_radius,
    };

    for target_path in &args.targets {
        let target = ascii::read_target(target_path)
            .with_context(|| format!("failed to read target {}", target_path.display()))?;
        let plan = paintplan::plan(&target, &config);

        let out_path = match &args.output {
            Some(path) => path.clone(),
            None => {
                let mut os = target_path.clone().into_os_string();
                os.push(".out");
                PathBuf::from(os)
            }
        };

        if args.json {
            let json = ascii::plan_to_json(&plan)
                .with_context(|| format!("failed to serialize plan for {}", target_path.display()))?;
            std::fs::write(&out_path, json)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
        } else {
            ascii::write_plan(&out_path, &plan)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
        }

        println!(
            "{}: {} commands -> {}",
            target_path.display(),
            plan.len(),
            out_path.display()
        );
    }

    Ok(())
}
