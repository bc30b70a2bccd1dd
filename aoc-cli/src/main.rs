//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::OutputFormatter;
use tracing::{info, warn};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init(config.verbosity);
    info!(input_dir = %config.input_dir.display(), threads = config.thread_count, "starting");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Executor(e.into()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    for w in work_items
        .iter()
        .filter(|w| !executor.inputs().contains(w.year, w.day))
    {
        warn!(
            path = %executor.inputs().input_path(w.year, w.day).display(),
            "missing input for {}/{:02}", w.year, w.day
        );
    }

    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and print results in order as they become ready
fn run_executor(executor: Executor, work_items: Vec<WorkItem>, quiet: bool) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys = work_items.iter().flat_map(|w| {
        w.parts.clone().map(move |part| ResultKey {
            year: w.year,
            day: w.day,
            part,
        })
    });
    let mut aggregator = ResultAggregator::new(expected_keys);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    let registry = builder.build();
    info!(solvers = registry.storage().len(), "registry built");
    Ok(registry)
}
