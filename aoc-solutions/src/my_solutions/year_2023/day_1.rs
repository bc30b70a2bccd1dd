use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const SPELLED_DIGITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// A calibration line and where it sits in the input
pub struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Line<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<Line<'a>> = input
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| Line {
                number: index + 1,
                text,
            })
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

fn calibration_sum(lines: &[Line<'_>], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| {
            calibration_value(line.text, spelled)
                .ok_or_else(|| anyhow!("(line {}) no digit in {:?}", line.number, line.text))
        })
        .sum::<anyhow::Result<u32>>()
        .map(|sum| sum.to_string())
        .map_err(SolveError::failed)
}

/// First and last digit of the line read as a two-digit number
///
/// Spelled digits may overlap ("eightwo" holds both 8 and 2).
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let mut digits = line.char_indices().filter_map(|(i, c)| match c {
        '1'..='9' => c.to_digit(10),
        _ if spelled => SPELLED_DIGITS
            .iter()
            .position(|word| line[i..].starts_with(word))
            .map(|p| p as u32 + 1),
        _ => None,
    });
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}
