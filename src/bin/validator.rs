use clap::Parser;
use eagerground::search::{validate, Plan, Task, Verbosity};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Check that a plan solves a problem.
struct Cli {
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(
        help = "Write the states visited by a valid plan as json to this file",
        long = "trace",
        id = "TRACE"
    )]
    trace: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let task = Task::from_path(&cli.domain, &cli.problem).map_err(|e| e.to_string())?;
    let plan = Plan::from_path(&cli.plan, &task).map_err(|e| e.to_string())?;

    let trace = validate(&task, &plan).map_err(|e| e.to_string())?;
    info!(plan_length = plan.len(), plan_cost = plan.cost(), "plan is valid");
    println!("Plan valid");

    if let Some(path) = &cli.trace {
        let json = serde_json::to_string_pretty(&trace.to_json(task.symbols()))
            .map_err(|e| e.to_string())?;
        std::fs::write(path, json)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }
    Ok(())
}
