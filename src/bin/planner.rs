use clap::Parser;
use eagerground::search::{
    ground, heuristics::StateHeuristicNames, search_engines::SearchEngine,
    successor_generators::SuccessorGeneratorName, validate, CancellationToken, PlannerConfig,
    SearchStrategy, Task, Verbosity,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Run the eagerground planner.
struct Cli {
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(
        help = "The output plan file",
        short = 'o',
        long = "output",
        id = "OUTPUT",
        default_value = "<domain>_<problem>.plan"
    )]
    plan: PathBuf,
    #[arg(
        help = "A toml file with planner settings, overridden by the flags below",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search strategy to use",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    strategy: Option<SearchStrategy>,
    #[arg(
        value_enum,
        help = "The successor generator to use",
        short = 'g',
        long = "generator",
        id = "GENERATOR"
    )]
    successor_generator_name: Option<SuccessorGeneratorName>,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use, only used by gbfs",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<StateHeuristicNames>,
    #[arg(
        help = "The maximum number of ground operators",
        long = "operator-cap",
        id = "OPERATOR_CAP"
    )]
    operator_cap: Option<usize>,
    #[arg(
        help = "The time limit for the search, e.g. 30s or 5m",
        short = 't',
        long = "time-limit",
        id = "TIME_LIMIT"
    )]
    time_limit: Option<humantime::Duration>,
    #[arg(
        help = "The memory limit for the search in MiB",
        short = 'm',
        long = "memory-limit",
        id = "MEMORY_LIMIT"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "Write the search statistics as json to this file",
        long = "statistics",
        id = "STATISTICS"
    )]
    statistics: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    /// The config file, if any, with command line flags taking precedence.
    fn config(&self) -> Result<PlannerConfig, String> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_path(path).map_err(|e| e.to_string())?,
            None => PlannerConfig::default(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(generator) = self.successor_generator_name {
            config.successor_generator = generator;
        }
        if let Some(heuristic) = self.heuristic_name {
            config.heuristic = heuristic;
        }
        if let Some(operator_cap) = self.operator_cap {
            config.operator_cap = operator_cap;
        }
        if let Some(time_limit) = self.time_limit {
            config.time_limit = Some(time_limit.into());
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            config.memory_limit_mb = Some(memory_limit_mb);
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn plan(cli: Cli) -> Result<(), String> {
    let config = cli.config()?;
    info!(
        strategy = %config.strategy,
        successor_generator = %config.successor_generator,
        heuristic = %config.heuristic,
        operator_cap = config.operator_cap,
    );

    let task = Task::from_path(&cli.domain, &cli.problem).map_err(|e| e.to_string())?;
    let operators = ground(&task, config.operator_cap).map_err(|e| e.to_string())?;

    let mut engine = SearchEngine::new(config.strategy)
        .with_successor_generator(config.successor_generator)
        .with_heuristic_name(config.heuristic)
        .with_termination_condition(config.termination_condition(CancellationToken::new()));
    let (result, statistics) = engine.search(&task, &operators);

    if let Some(path) = &cli.statistics {
        let json = serde_json::to_string_pretty(&statistics).map_err(|e| e.to_string())?;
        std::fs::write(path, json)
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    }

    let plan = result.map_err(|e| e.to_string())?;

    info!("validating plan");
    validate(&task, &plan).map_err(|e| format!("plan is invalid: {e}"))?;
    info!("plan is valid");

    let text = plan.to_text(task.symbols());
    println!("Plan found:");
    print!("{text}");
    println!("Plan length: {}", plan.len());

    let plan_path = if cli.plan == PathBuf::from("<domain>_<problem>.plan") {
        PathBuf::from(format!("{}-{}.plan", task.domain_name(), task.problem_name()))
    } else {
        cli.plan
    };
    std::fs::write(&plan_path, text)
        .map_err(|e| format!("failed to write {}: {e}", plan_path.display()))
}
