use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["macro-test", "numbers"])]
struct Numbers;

impl AocParser for Numbers {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
            .collect()
    }
}

impl PartSolver<1> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Numbers {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(ToString::to_string)
            .ok_or_else(|| SolveError::failed("no numbers"))
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_derived_parts_constant() {
    assert_eq!(Numbers::PARTS, 2);
    assert_eq!(Untagged::PARTS, 1);
}

#[test]
fn test_derived_dispatch() {
    let mut shared = Numbers::parse("3 9 -4").unwrap();
    assert_eq!(Numbers::solve_part(&mut shared, 1).unwrap(), "8");
    assert_eq!(Numbers::solve_part(&mut shared, 2).unwrap(), "9");
    assert!(matches!(
        Numbers::solve_part(&mut shared, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

#[test]
fn test_plugins_are_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 3));
    assert!(registry.storage().contains(2016, 4));

    let mut solver = registry.create_solver(2016, 4, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

#[test]
fn test_plugins_filtered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 3));
    assert!(!registry.storage().contains(2016, 4));

    let mut solver = registry.create_solver(2016, 3, "").unwrap();
    assert!(matches!(solver.solve(2), Err(SolveError::SolveFailed(_))));
}
