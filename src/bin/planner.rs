use clap::Parser;
use groundplan::search::{
    ground_all, Astar, HeuristicMode, SearchResult, Task, TerminationCondition, Verbosity,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(version)]
/// Run the groundplan planner.
struct Args {
    #[arg(help = "The planning problem file")]
    problem: PathBuf,
    #[arg(
        value_enum,
        help = "The heuristic mode guiding the search",
        id = "HEURISTIC"
    )]
    heuristic_mode: HeuristicMode,
    #[arg(
        long = "time-limit",
        value_parser = humantime::parse_duration,
        help = "Give up after this much search time, e.g. `30s` or `5m`"
    )]
    time_limit: Option<Duration>,
    #[arg(long = "memory-limit", help = "Give up beyond this many megabytes")]
    memory_limit_mb: Option<usize>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
    #[arg(
        help = "Echo the parsed problem before planning",
        short = 'e',
        long = "echo"
    )]
    echo: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level: tracing::Level = args.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(args.colour)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let task = match Task::from_path(&args.problem) {
        Ok(task) => task,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    if args.echo {
        println!("{task}");
        println!();
    }

    plan(&args, &task);
    ExitCode::SUCCESS
}

fn plan(args: &Args, task: &Task) {
    let ground_actions = Rc::new(ground_all(task.action_schemas(), task.symbols()));
    let heuristic = args.heuristic_mode.create(Rc::clone(&ground_actions));
    let termination = TerminationCondition::new(args.time_limit, args.memory_limit_mb);

    let start = Instant::now();
    let (result, statistics) = Astar::new().search(task, &ground_actions, heuristic, termination);
    let elapsed = start.elapsed();
    statistics.finalise_search();

    match result {
        SearchResult::Success(plan) => {
            println!("Plan length: {}", plan.len());
            println!(
                "Search time: {}",
                humantime::format_duration(Duration::from_micros(elapsed.as_micros() as u64))
            );
            println!("Plan:");
            for action in plan.steps() {
                println!("{action}");
            }
        }
        result => {
            println!("No plan found: {result:?}");
        }
    }
}
