//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::fmt;
use std::time::{Duration, Instant};

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print a single result; answers go to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(_), _) => println!("{}", self.format_result(result)),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Err(_), false) => eprintln!("{}", self.format_result(result)),
        }
    }

    fn format_result(&self, result: &SolverResult) -> String {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
        match &result.answer {
            Ok(answer) if self.quiet => answer.clone(),
            Ok(answer) => {
                let parse_timing = result
                    .parse_duration
                    .map(|d| format!("parse: {}, ", format_duration(d)))
                    .unwrap_or_default();
                format!(
                    "{}: {} ({}solve: {})",
                    prefix,
                    answer,
                    parse_timing,
                    format_duration(result.solve_duration)
                )
            }
            Err(e) => format!("{}: Error - {}", prefix, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }
        println!();
        print!("{}", Summary::of(results, self.start_time.elapsed()));
    }
}

/// Totals over a finished run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub solved: usize,
    pub failed: usize,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
    pub elapsed: Duration,
}

impl Summary {
    pub fn of(results: &[SolverResult], elapsed: Duration) -> Self {
        let succeeded = || results.iter().filter(|r| r.answer.is_ok());
        let solved = succeeded().count();

        Self {
            solved,
            failed: results.len() - solved,
            parse_time: succeeded().filter_map(|r| r.parse_duration).sum(),
            solve_time: succeeded().map(|r| r.solve_duration).sum(),
            elapsed,
        }
    }

    /// Total compute time over wall-clock time
    pub fn speedup(&self) -> Option<f64> {
        if self.elapsed.is_zero() {
            return None;
        }
        let compute = (self.parse_time + self.solve_time)
            .num_microseconds()
            .unwrap_or(0) as f64
            / 1_000_000.0;
        Some(compute / self.elapsed.as_secs_f64())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Solvers: {} solved, {} failed", self.solved, self.failed)?;
        writeln!(f, "Total parse time: {}", format_duration(self.parse_time))?;
        writeln!(f, "Total solve time: {}", format_duration(self.solve_time))?;
        writeln!(f, "Elapsed wall-clock time: {}", format_std_duration(self.elapsed))?;
        if let Some(speedup) = self.speedup() {
            writeln!(f, "Speedup factor: {:.2}x", speedup)?;
        }
        Ok(())
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArcExecutorError, ExecutorError};

    fn result(part: u8, answer: Result<&str, ArcExecutorError>) -> SolverResult {
        SolverResult {
            year: 2023,
            day: 4,
            part,
            answer: answer.map(str::to_string),
            parse_duration: (part == 1).then(|| TimeDelta::microseconds(250)),
            solve_duration: TimeDelta::milliseconds(3),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_std_duration(Duration::from_millis(12)), "12.00ms");
    }

    #[test]
    fn test_format_result() {
        let full = OutputFormatter::new(false);
        assert_eq!(
            full.format_result(&result(1, Ok("13"))),
            "2023/04 Part 1: 13 (parse: 250µs, solve: 3.00ms)"
        );
        assert_eq!(
            full.format_result(&result(2, Ok("30"))),
            "2023/04 Part 2: 30 (solve: 3.00ms)"
        );

        let quiet = OutputFormatter::new(true);
        assert_eq!(quiet.format_result(&result(2, Ok("30"))), "30");

        let error = ExecutorError::ChannelSend.into();
        assert_eq!(
            full.format_result(&result(1, Err(error))),
            "2023/04 Part 1: Error - Channel send error"
        );
    }

    #[test]
    fn test_summary_counts_only_successes() {
        let results = [
            result(1, Ok("13")),
            result(2, Ok("30")),
            result(1, Err(ExecutorError::ChannelSend.into())),
        ];
        let summary = Summary::of(&results, Duration::from_millis(3));

        assert_eq!((summary.solved, summary.failed), (2, 1));
        assert_eq!(summary.parse_time, TimeDelta::microseconds(250));
        assert_eq!(summary.solve_time, TimeDelta::milliseconds(6));
        let speedup = summary.speedup().unwrap();
        assert!((speedup - 6.25 / 3.0).abs() < 1e-9, "{speedup}");

        let text = summary.to_string();
        assert!(text.contains("Solvers: 2 solved, 1 failed"), "{text}");
        assert!(text.contains("Speedup factor: 2.08x"), "{text}");
    }
}
