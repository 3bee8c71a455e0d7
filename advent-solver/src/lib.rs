//! Advent Solver Library
//!
//! The capability side of the advent harness: how a solution module is
//! described, how it is registered for a day number and how the harness
//! gets a type-erased handle to it.
//!
//! # Overview
//!
//! This library provides:
//! - [`PuzzleParser`] and [`Solver`], the two traits a solution module implements
//! - [`DynSolver`], a type-erased handle with parse/solve timing
//! - [`SolverRegistry`], a lookup from day number to module factory
//! - Plugin collection through `inventory`, fed by `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{register_solver, ParseError, PuzzleParser, RegistryBuilder, SolveError, Solver};
//!
//! pub struct Sum;
//!
//! impl PuzzleParser for Sum {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Sum {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(numbers: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(numbers.iter().sum::<i64>().to_string()),
//!             2 => Ok(numbers.iter().product::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let mut builder = RegistryBuilder::new();
//! register_solver!(builder, Sum, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(1, "3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "7");
//! assert_eq!(solver.solve(2).unwrap().answer, "12");
//! ```
//!
//! # Plugin registration
//!
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[solution(day = 1)]
//! struct Day1Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use advent_solver_macros::AutoRegisterSolver;
