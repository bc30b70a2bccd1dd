use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    time: u64,
    record: u64,
}

impl Race {
    /// Hold times in `0..=time` that travel strictly further than the record
    ///
    /// Distance `hold * (time - hold)` rises up to `time / 2` and mirrors
    /// after it, so the first winning hold fixes the whole winning span.
    fn ways_to_win(&self) -> u64 {
        let beats = |hold: u64| hold as u128 * (self.time - hold) as u128 > self.record as u128;
        let middle = self.time / 2;
        if !beats(middle) {
            return 0;
        }

        // Smallest winning hold in 0..=middle.
        let (mut low, mut high) = (0, middle);
        while low < high {
            let mid = low + (high - low) / 2;
            if beats(mid) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        self.time - 2 * low + 1
    }
}

/// A labelled line: its numbers, and the same digits read as one number
#[derive(Debug)]
pub struct SheetLine {
    values: Vec<u64>,
    joined: u64,
}

fn parse_sheet_line(line: &str) -> anyhow::Result<SheetLine> {
    let (_, list) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after the line label"))?;
    let values = list
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect::<anyhow::Result<Vec<u64>>>()?;
    ensure!(!values.is_empty(), "no numbers after the label");
    let joined = list
        .split_whitespace()
        .collect::<String>()
        .parse::<u64>()
        .context("joined digits do not fit in 64 bits")?;
    Ok(SheetLine { values, joined })
}

#[derive(Debug)]
pub struct Sheet {
    races: Vec<Race>,
    single_race: Race,
}

impl AocParser for Solver {
    type SharedData<'a> = Sheet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines = parse_lines(input, parse_sheet_line)?;
        let [times, records] = lines.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected a Time and a Distance line, got {} lines",
                lines.len()
            )));
        };
        if times.values.len() != records.values.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                times.values.len(),
                records.values.len()
            )));
        }

        let races = times
            .values
            .iter()
            .zip(&records.values)
            .map(|(&time, &record)| Race { time, record })
            .collect();
        let single_race = Race {
            time: times.joined,
            record: records.joined,
        };
        Ok(Sheet { races, single_race })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .races
            .iter()
            .map(Race::ways_to_win)
            .product::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.single_race.ways_to_win().to_string())
    }
}
