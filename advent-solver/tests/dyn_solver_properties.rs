//! Property-based tests for solving through the registry's type-erased handle

use advent_solver::{
    register_solver, ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver, SolverError,
};
use proptest::prelude::*;

struct SumProduct;

impl PuzzleParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int: {:?}", l)))
            })
            .collect()
    }
}

impl Solver for SumProduct {
    const PARTS: u8 = 2;

    fn solve_part(numbers: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(numbers.iter().sum::<i64>().to_string()),
            2 => Ok(numbers.iter().product::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn registry() -> advent_solver::SolverRegistry {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, SumProduct, 4);
    builder.build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Solving through `DynSolver` yields the same text as calling the module directly.
    #[test]
    fn dyn_solve_matches_direct(numbers in prop::collection::vec(-20i64..20, 1..6), part in 1u8..=2) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let registry = registry();

        let mut solver = registry.create_solver(4, &input).unwrap();
        let via_registry = solver.solve(part).unwrap().answer;

        let mut shared = SumProduct::parse(&input).unwrap();
        let direct = SumProduct::solve_part(&mut shared, part).unwrap();

        prop_assert_eq!(via_registry, direct);
    }
}

#[test]
fn test_timing_is_monotonic() {
    let registry = registry();
    let mut solver = registry.create_solver(4, "3\n4").unwrap();
    let result = solver.solve(1).unwrap();

    assert_eq!(result.answer, "7");
    assert!(result.duration() >= chrono::TimeDelta::zero());
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.parts(), 2);
}

#[test]
fn test_bad_input_is_parse_error() {
    let registry = registry();
    let result = registry.create_solver(4, "3\nfour");
    assert!(matches!(
        result,
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

#[test]
fn test_out_of_range_through_handle() {
    let registry = registry();
    let mut solver = registry.create_solver(4, "1").unwrap();
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}
