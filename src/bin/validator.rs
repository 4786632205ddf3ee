use clap::Parser;
use groundplan::search::{validate, Plan, Task};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version)]
/// Check a plan file against a planning problem.
struct Args {
    #[arg(help = "The planning problem file")]
    problem: PathBuf,
    #[arg(help = "The plan file to validate, one ground action per line")]
    plan: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
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
    let plan = match Plan::from_path(&args.plan, &task) {
        Ok(plan) => plan,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    match validate(&plan, &task) {
        Ok(()) => {
            println!("Plan valid, length {}.", plan.len());
            ExitCode::SUCCESS
        }
        Err(reason) => {
            eprintln!("Plan invalid: {reason}");
            ExitCode::FAILURE
        }
    }
}
