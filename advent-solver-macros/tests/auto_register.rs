use advent_solver::{
    AutoRegisterSolver, ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver,
};

#[derive(AutoRegisterSolver)]
#[solution(day = 98)]
struct SumProduct;

impl PuzzleParser for SumProduct {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl Solver for SumProduct {
    const PARTS: u8 = 2;

    fn solve_part(parsed: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(parsed.iter().sum::<i32>().to_string()),
            2 => Ok(parsed.iter().product::<i32>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

// A module that only ever implemented its first entry point
#[derive(AutoRegisterSolver)]
#[solution(day = 99)]
struct PartOneOnly;

impl PuzzleParser for PartOneOnly {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl Solver for PartOneOnly {
    const PARTS: u8 = 1;

    fn solve_part(input: &mut &str, _part: u8) -> Result<String, SolveError> {
        Ok(input.len().to_string())
    }
}

fn plugin_registry() -> advent_solver::SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build()
}

#[test]
fn test_derived_solver_auto_registers() {
    let registry = plugin_registry();

    let mut solver = registry
        .create_solver(98, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.solve(1).expect("part 1").answer, "18");
    assert_eq!(solver.solve(2).expect("part 2").answer, "210");
}

#[test]
fn test_registered_parts_come_from_solver() {
    let registry = plugin_registry();

    assert_eq!(registry.get_info(98).map(|i| i.parts), Some(2));
    assert_eq!(registry.get_info(99).map(|i| i.parts), Some(1));
}

#[test]
fn test_filtered_plugin_registration() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.day == 99)
        .expect("Failed to register plugins")
        .build();

    assert!(registry.contains(99));
    assert!(!registry.contains(98));
}
