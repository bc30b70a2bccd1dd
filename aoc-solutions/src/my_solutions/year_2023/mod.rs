//! Advent of Code 2023

use aoc_solver::ParseError;

pub mod day_1;
pub mod day_2;
pub mod day_3;
pub mod day_4;
pub mod day_5;
pub mod day_6;

/// Parse every non-blank line, tagging failures with their 1-based line number
fn parse_lines<'a, T>(
    input: &'a str,
    mut parse_line: impl FnMut(&'a str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", index + 1, e)))
        })
        .collect()
}
