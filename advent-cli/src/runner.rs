//! Loading the selected solution module and verifying its parts

use crate::answers::read_expected_answer;
use crate::cli::{PartTwoSource, TrimRule};
use crate::config::Config;
use crate::discovery::{SolutionDir, discover};
use crate::error::{CliError, LoadError, RunError};
use crate::output::OutputFormatter;
use advent_solver::{FactoryInfo, SolverRegistry};
use chrono::TimeDelta;
use std::fs;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Entry points every solution module must expose
pub const REQUIRED_PARTS: RangeInclusive<u8> = 1..=2;

/// A verified part
#[derive(Debug, Clone)]
pub struct PartOutcome {
    pub part: u8,
    pub answer: String,
    pub parse_duration: TimeDelta,
    pub solve_duration: TimeDelta,
}

/// The solution module resolved for the selected directory
pub struct LoadedSolution<'r> {
    registry: &'r SolverRegistry,
    info: FactoryInfo,
}

/// Resolve the module registered for `target`'s day number
pub fn load<'r>(
    registry: &'r SolverRegistry,
    target: &SolutionDir,
) -> Result<LoadedSolution<'r>, LoadError> {
    let info = registry
        .get_info(target.day)
        .ok_or_else(|| LoadError::NotRegistered {
            day: target.day,
            dir: target.path.clone(),
        })?;

    if let Some(part) = REQUIRED_PARTS.clone().find(|&p| p > info.parts) {
        return Err(LoadError::MissingEntryPoint {
            day: info.day,
            part,
        });
    }

    info!(day = info.day, dir = %target.path.display(), "loaded solution module");
    Ok(LoadedSolution { registry, info })
}

impl LoadedSolution<'_> {
    /// Day number of the loaded module
    pub fn day(&self) -> u32 {
        self.info.day
    }

    /// Run one part against `input_file` and compare with the last line of `answer_file`
    pub fn run_part(
        &self,
        part: u8,
        input_file: &Path,
        answer_file: &Path,
        trim: TrimRule,
    ) -> Result<PartOutcome, RunError> {
        let expected = read_expected_answer(answer_file)?;
        let raw = fs::read_to_string(input_file).map_err(|source| RunError::Input {
            path: input_file.to_path_buf(),
            source,
        })?;
        let input = trim.apply(&raw);
        debug!(part, input = %input_file.display(), answers = %answer_file.display(), "running part");

        let mut solver = self
            .registry
            .create_solver(self.info.day, input)
            .map_err(|source| RunError::Solver { part, source })?;
        let result = solver.solve(part).map_err(|e| RunError::Solver {
            part,
            source: e.into(),
        })?;

        if result.answer != expected {
            return Err(RunError::Mismatch {
                part,
                expected,
                actual: result.answer,
            });
        }

        Ok(PartOutcome {
            part,
            parse_duration: solver.parse_duration(),
            solve_duration: result.duration(),
            answer: result.answer,
        })
    }
}

/// Input and answers files for one part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartPlan {
    pub part: u8,
    pub input_file: PathBuf,
    pub answer_file: PathBuf,
}

/// Runs discover, load, part 1, part 2, halting at the first failure
pub struct Runner<'a> {
    config: &'a Config,
    registry: &'a SolverRegistry,
}

impl<'a> Runner<'a> {
    pub fn new(config: &'a Config, registry: &'a SolverRegistry) -> Self {
        Self { config, registry }
    }

    pub fn run<W: Write>(
        &self,
        formatter: &mut OutputFormatter<W>,
    ) -> Result<Vec<PartOutcome>, CliError> {
        let config = self.config;
        let discovery = discover(
            &config.root,
            &config.prefix,
            &config.layout.entry_file,
            config.sort,
        )?;
        let target = discovery.target();
        let solution = load(self.registry, target)?;
        debug!(
            day = solution.day(),
            target = %target.name,
            candidates = discovery.entries().len(),
            "selected target directory"
        );

        let part_two_dir = match config.part_two_source {
            PartTwoSource::Target => target,
            PartTwoSource::Last => discovery.last(),
        };
        let plan = [
            PartPlan {
                part: 1,
                input_file: target.file(&config.layout.input),
                answer_file: target.file(&config.layout.answers),
            },
            PartPlan {
                part: 2,
                input_file: part_two_dir.file(&config.layout.input2),
                answer_file: part_two_dir.file(&config.layout.answers2),
            },
        ];

        let mut outcomes = Vec::with_capacity(plan.len());
        for step in &plan {
            let outcome =
                solution.run_part(step.part, &step.input_file, &step.answer_file, config.trim)?;
            formatter.print_pass(&outcome)?;
            outcomes.push(outcome);
        }
        formatter.log_summary(&outcomes);

        Ok(outcomes)
    }
}
