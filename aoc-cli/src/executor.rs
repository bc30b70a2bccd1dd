//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, debug_span, warn};

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Set on the result that paid for parsing the input
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: RunContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs; shared by reference across the pool
struct RunContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: RunContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.context.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .storage()
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(ctx.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let ctx = &self.context;

        match ctx.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_solver(work, &tx, ctx).err())
                .reduce(ArcExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    by_year
                        .into_par_iter()
                        .filter_map(|items| {
                            items
                                .iter()
                                .filter_map(|work| run_solver(work, &tx, ctx).err())
                                .reduce(ArcExecutorError::combine)
                        })
                        .reduce_with(ArcExecutorError::combine)
                        .map_or(Ok(()), Err)
                })
            }
            // Part additionally splits each day's parts in run_solver
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .filter_map(|work| run_solver(&work, &tx, ctx).err())
                    .reduce_with(ArcExecutorError::combine)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

/// Report the same failure for every selected part
fn send_failure(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(
            tx,
            SolverResult {
                year: work.year,
                day: work.day,
                part,
                answer: Err(error.clone()),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            },
        )?;
    }
    Ok(())
}

/// Load the input and run every selected part of one year/day
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let _span = debug_span!("solver", year, day).entered();

    let input = match ctx.inputs.load(year, day) {
        Ok(input) => input,
        Err(source) => {
            warn!(error = %source, "skipping solver");
            return send_failure(work, ExecutorError::Input { year, day, source }.into(), tx);
        }
    };
    debug!(bytes = input.len(), "loaded input");

    if ctx.parallelize_by == ParallelizeBy::Part {
        run_parts_parallel(work, &input, tx, ctx)
    } else {
        run_parts_sequential(work, &input, tx, ctx)
    }
}

/// Parse once, then solve the parts in order on the same instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let mut solver = match ctx.registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => {
            warn!(error = %e, "parse failed");
            return send_failure(work, ExecutorError::Solver(e).into(), tx);
        }
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(&mut *solver, part);
        result.parse_duration = parse_duration.take();
        send(tx, result)?;
    }
    Ok(())
}

/// Each part gets its own parsed instance so parts run concurrently
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    work.parts.clone().into_par_iter().try_for_each(|part| {
        let result = match ctx.registry.create_solver(work.year, work.day, input) {
            Ok(mut solver) => {
                let mut result = solve_part(&mut *solver, part);
                result.parse_duration = Some(solver.parse_duration());
                result
            }
            Err(e) => SolverResult {
                year: work.year,
                day: work.day,
                part,
                answer: Err(ExecutorError::Solver(e).into()),
                parse_duration: None,
                solve_duration: TimeDelta::zero(),
            },
        };
        send(tx, result)
    })
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(solved) => {
            let duration = solved.duration();
            debug!(part, answer = %solved.answer, "solved");
            (Ok(solved.answer), duration)
        }
        Err(e) => {
            warn!(part, error = %e, "solve failed");
            (Err(ExecutorError::Solver(e.into()).into()), TimeDelta::zero())
        }
    };

    SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        answer,
        parse_duration: None,
        solve_duration,
    }
}
