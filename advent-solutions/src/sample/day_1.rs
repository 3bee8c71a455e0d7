use advent_solver::{AutoRegisterSolver, ParseError, PuzzleParser, SolveError, Solver};
use anyhow::anyhow;

/// Reads one integer per line. Part 1 is the sum, part 2 the product.
#[derive(AutoRegisterSolver)]
#[solution(day = 1)]
pub struct Day1;

#[derive(Debug)]
pub struct SharedData {
    numbers: Vec<i64>,
}

impl PuzzleParser for Day1 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<i64>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, anyhow::Error>>()
            .map(|numbers| SharedData { numbers })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day1 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.numbers.iter().sum::<i64>().to_string()),
            2 => shared
                .numbers
                .iter()
                .try_fold(1i64, |acc, &n| acc.checked_mul(n))
                .map(|product| product.to_string())
                .ok_or_else(|| SolveError::SolveFailed(anyhow!("product overflows i64").into())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
