use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "parsing"])]
pub struct Solver;

fn numbers(list: &str) -> anyhow::Result<Vec<u32>> {
    list.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect()
}

/// Number of winning numbers on `Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53`
fn matching_numbers(line: &str) -> anyhow::Result<usize> {
    let (label, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after the card label"))?;
    if !label.starts_with("Card") {
        return Err(anyhow!("expected 'Card <id>', got {label:?}"));
    }
    let (winning, held) = body
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' between number lists"))?;

    let winning: HashSet<u32> = numbers(winning)?.into_iter().collect();
    let held: HashSet<u32> = numbers(held)?.into_iter().collect();
    Ok(winning.intersection(&held).count())
}

/// `2^(matches-1)` for a winning card, zero otherwise
fn points(matches: usize) -> Option<u64> {
    match matches {
        0 => Some(0),
        m => 1u64.checked_shl(u32::try_from(m - 1).ok()?),
    }
}

impl AocParser for Solver {
    /// Matching numbers per card, in card order
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, matching_numbers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .try_fold(0u64, |total, &matches| total.checked_add(points(matches)?))
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::failed("card points overflow u64"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_cards(shared)
            .map(|total| total.to_string())
            .ok_or_else(|| SolveError::failed("card count overflows u64"))
    }
}

/// Each card with `m` matches wins one copy of each of the next `m` cards,
/// per copy held; copies past the last card are dropped. `None` on overflow
fn total_cards(matches: &[usize]) -> Option<u64> {
    let mut copies = vec![1u64; matches.len()];
    for (card, &won) in matches.iter().enumerate() {
        let end = card.saturating_add(1).saturating_add(won).min(matches.len());
        let held = copies[card];
        for next in &mut copies[card + 1..end] {
            *next = next.checked_add(held)?;
        }
    }
    copies.iter().try_fold(0u64, |total, &n| total.checked_add(n))
}
