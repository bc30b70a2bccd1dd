use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use super::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    const BAG: Cubes = Cubes {
        red: 12,
        green: 13,
        blue: 14,
    };

    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u64 {
        self.red as u64 * self.green as u64 * self.blue as u64
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    hands: Vec<Cubes>,
}

impl Game {
    fn cubes_needed(&self) -> Cubes {
        self.hands.iter().fold(Cubes::default(), |acc, hand| acc.max(*hand))
    }
}

/// `3 blue, 4 red`
fn parse_hand(hand: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for entry in hand.split(',') {
        let (count, colour) = entry
            .trim()
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<count> <colour>', got {:?}", entry.trim()))?;
        let count: u32 = count.parse().with_context(|| format!("bad cube count {count:?}"))?;
        match colour {
            "red" => cubes.red = count,
            "green" => cubes.green = count,
            "blue" => cubes.blue = count,
            other => bail!("unknown colour {other:?}"),
        }
    }
    Ok(cubes)
}

/// `Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green`
fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (label, hands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' after the game label"))?;
    let id = label
        .trim()
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>', got {label:?}"))?
        .trim()
        .parse::<u32>()
        .context("bad game id")?;
    let hands = hands.split(';').map(parse_hand).collect::<anyhow::Result<_>>()?;
    Ok(Game { id, hands })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, parse_game)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.hands.iter().all(|hand| hand.fits_in(&Cubes::BAG)))
            .map(|game| game.id)
            .sum::<u32>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|game| game.cubes_needed().power())
            .sum::<u64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_cubes_needed() {
        let game = parse_game("Game 7: 1 red; 4 blue, 2 red; 3 green").unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(
            game.cubes_needed(),
            Cubes {
                red: 2,
                green: 3,
                blue: 4
            }
        );
    }

    #[test]
    fn test_parse_error_reports_line() {
        let input = "Game 1: 1 red\n\nGame 2: 3 purple\n";
        match Solver::parse(input) {
            Err(ParseError::InvalidFormat(message)) => {
                assert!(message.starts_with("(line 3)"), "{message}");
                assert!(message.contains("purple"), "{message}");
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }
}
