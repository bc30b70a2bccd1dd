use std::ops::Range;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

/// One `destination source length` line of a map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    destination: i64,
    source: i64,
    length: i64,
}

impl Rule {
    fn source_range(&self) -> Range<i64> {
        self.source..self.source + self.length
    }

    fn shift(&self) -> i64 {
        self.destination - self.source
    }
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    maps: Vec<Vec<Rule>>,
}

fn parse_seeds(line: &str) -> anyhow::Result<Vec<i64>> {
    let list = line
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("expected 'seeds: ...', got {line:?}"))?;
    let seeds: Vec<i64> = list
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad seed {n:?}")))
        .collect::<anyhow::Result<_>>()?;
    if seeds.len() % 2 == 0
        && let Some((start, length)) = seeds
            .iter()
            .tuples()
            .find(|&(start, length)| start.checked_add(*length).is_none())
    {
        bail!("seed range {start} + {length} overflows");
    }
    Ok(seeds)
}

fn parse_rule(line: &str) -> anyhow::Result<Rule> {
    let values: Vec<i64> = line
        .split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect::<anyhow::Result<_>>()?;
    match values[..] {
        [_, _, length] if length < 0 => bail!("negative range length {length}"),
        [destination, source, length] => {
            // source, destination and the shift between them must all fit
            if source.checked_add(length).is_none()
                || destination.checked_add(length).is_none()
                || destination.checked_sub(source).is_none()
            {
                bail!("range {destination} {source} {length} overflows");
            }
            Ok(Rule {
                destination,
                source,
                length,
            })
        }
        _ => bail!("expected 'destination source length', got {line:?}"),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let invalid =
            |index: usize, e: anyhow::Error| ParseError::InvalidFormat(format!("(line {}) {}", index + 1, e));
        let mut lines = input.lines().enumerate().filter(|(_, line)| !line.trim().is_empty());

        let (index, first) = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("no seeds line".into()))?;
        let seeds = parse_seeds(first).map_err(|e| invalid(index, e))?;

        let mut maps: Vec<Vec<Rule>> = Vec::new();
        for (index, line) in lines {
            if line.trim_end().ends_with("map:") {
                maps.push(Vec::new());
                continue;
            }
            let rule = parse_rule(line).map_err(|e| invalid(index, e))?;
            maps.last_mut()
                .ok_or_else(|| invalid(index, anyhow!("range line before any map header")))?
                .push(rule);
        }
        if maps.is_empty() {
            return Err(ParseError::MissingData("no maps after the seeds line".into()));
        }

        Ok(Almanac { seeds, maps })
    }
}

impl Almanac {
    fn location(&self, seed: i64) -> i64 {
        self.maps.iter().fold(seed, |value, map| {
            map.iter()
                .find(|rule| rule.source_range().contains(&value))
                .map_or(value, |rule| value + rule.shift())
        })
    }

    /// Seed list read as `start length` pairs
    fn seed_ranges(&self) -> Result<Vec<Range<i64>>, SolveError> {
        if self.seeds.len() % 2 != 0 {
            return Err(SolveError::failed(format!(
                "{} seed values do not form start/length pairs",
                self.seeds.len()
            )));
        }
        Ok(self
            .seeds
            .iter()
            .tuples()
            .map(|(&start, &length)| {
                start
                    .checked_add(length)
                    .map(|end| start..end)
                    .ok_or_else(|| SolveError::failed(format!("seed range {start} + {length} overflows")))
            })
            .collect::<Result<_, _>>()?)
    }
}

/// Push value ranges through one map, splitting them where rules begin and end
fn map_ranges(ranges: Vec<Range<i64>>, map: &[Rule]) -> Vec<Range<i64>> {
    let mut pending = ranges;
    let mut mapped = Vec::with_capacity(pending.len());

    for rule in map {
        let source = rule.source_range();
        let mut unmatched = Vec::with_capacity(pending.len());
        for range in pending {
            let start = range.start.max(source.start);
            let end = range.end.min(source.end);
            if start < end {
                mapped.push(start + rule.shift()..end + rule.shift());
                if range.start < start {
                    unmatched.push(range.start..start);
                }
                if end < range.end {
                    unmatched.push(end..range.end);
                }
            } else {
                unmatched.push(range);
            }
        }
        pending = unmatched;
    }

    mapped.extend(pending);
    mapped
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| shared.location(seed))
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::failed("no seeds"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ranges = shared
            .maps
            .iter()
            .fold(shared.seed_ranges()?, |ranges, map| map_ranges(ranges, map));
        ranges
            .iter()
            .filter(|range| !range.is_empty())
            .map(|range| range.start)
            .min()
            .map(|location| location.to_string())
            .ok_or_else(|| SolveError::failed("no seed ranges"))
    }
}
