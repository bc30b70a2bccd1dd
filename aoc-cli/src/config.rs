//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry
    pub tags: Vec<String>,
    /// Directory holding the puzzle inputs
    pub input_dir: PathBuf,
    pub thread_count: usize,
    pub parallelize_by: ParallelizeBy,
    pub quiet: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = args.threads.unwrap_or_else(num_cpus);
        if thread_count == 0 {
            return Err(CliError::Config("--threads must be at least 1".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "/data/aoc", "--threads", "3", "-q"])
            .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("/data/aoc"));
        assert_eq!(config.thread_count, 3);
        assert!(config.quiet);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let args = Args::try_parse_from(["aoc", "--threads", "0"]).unwrap();
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}
