use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::matrix::{Edges, Matrix};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Matrix<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Matrix::from_lines(input.trim_end().lines())
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn is_symbol(c: &char) -> bool {
    *c != '.' && !c.is_ascii_digit()
}

fn numbers(schematic: &Matrix<char>) -> Vec<Matrix<char>> {
    schematic.continuous_matrices_satisfying(char::is_ascii_digit)
}

fn value(number: &Matrix<char>) -> Result<u64, SolveError> {
    number.parse_number::<u64>().map_err(SolveError::failed)
}

/// Sum of numbers with a symbol somewhere in the ring around them
fn sum_part_numbers(schematic: &Matrix<char>) -> Result<u64, SolveError> {
    numbers(schematic)
        .iter()
        .filter(|number| number.offset_edges_clamped(Edges::ONE).iter().any(is_symbol))
        .map(value)
        .sum()
}

/// Sum of products of the two numbers touching each `*`, for gears touching exactly two
fn sum_gear_ratios(schematic: &Matrix<char>) -> Result<u64, SolveError> {
    let numbers = numbers(schematic);
    let origin = schematic.view().offset;

    let mut total = 0;
    for gear in schematic.continuous_views_satisfying(|c| *c == '*') {
        let area = gear.offset_by(origin).offset_by_edges(Edges::ONE);
        let mut touching = numbers.iter().filter(|n| area.overlaps(&n.view()));
        if let (Some(a), Some(b), None) = (touching.next(), touching.next(), touching.next()) {
            total += value(a)? * value(b)?;
        }
    }
    Ok(total)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_part_numbers(shared).map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_gear_ratios(shared).map(|sum| sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4361");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "467835");
    }

    #[test]
    fn test_numbers_at_grid_border() {
        // Clamped border: corner numbers still see their neighbours.
        let grid = Solver::parse("12..\n...#\n\n").unwrap();
        assert_eq!(sum_part_numbers(&grid).unwrap(), 0);
        let grid = Solver::parse("1#\n.9").unwrap();
        assert_eq!(sum_part_numbers(&grid).unwrap(), 10);
    }

    #[test]
    fn test_gear_needs_exactly_two_numbers() {
        let grid = Solver::parse("2*3\n.4.").unwrap();
        assert_eq!(sum_gear_ratios(&grid).unwrap(), 0);
        let grid = Solver::parse("2*3\n...").unwrap();
        assert_eq!(sum_gear_ratios(&grid).unwrap(), 6);
    }

    #[test]
    fn test_ragged_grid_rejected() {
        assert!(matches!(
            Solver::parse("123\n45\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
