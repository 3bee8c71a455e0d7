//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Discovery error
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Load error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A part could not be run or did not match its expected answer
    #[error(transparent)]
    Run(#[from] RunError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors finding solution directories
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The search root could not be listed
    #[error("Failed to read {}: {source}", path.display())]
    ReadRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing under the root matched the naming convention
    #[error("No solution directories named {prefix}<N> containing {entry_file} under {}", root.display())]
    NoSolutionDirs {
        root: PathBuf,
        prefix: String,
        entry_file: String,
    },

    /// A directory carries the prefix but no numeric suffix
    #[error("Directory {name} does not match {prefix}<N>")]
    InvalidSuffix { name: String, prefix: String },

    /// The naming pattern could not be compiled
    #[error("Invalid directory pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors resolving the solution module for the selected directory
#[derive(Error, Debug)]
pub enum LoadError {
    /// No module is registered for the day
    #[error("No solution module registered for day {day} ({})", dir.display())]
    NotRegistered { day: u32, dir: PathBuf },

    /// The module does not expose a required entry point
    #[error("Solution module for day {day} does not implement part {part}")]
    MissingEntryPoint { day: u32, part: u8 },
}

/// Errors reading an expected answer
#[derive(Error, Debug)]
pub enum AnswerError {
    /// The answers file could not be read
    #[error("Failed to read answers {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The answers file has no non-empty line
    #[error("Answers file {} has no answer line", path.display())]
    Empty { path: PathBuf },
}

/// Errors running a single part
#[derive(Error, Debug)]
pub enum RunError {
    /// The input file could not be read
    #[error("Failed to read input {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The expected answer could not be read
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// The solution module failed to parse or solve
    #[error("Part {part} errored: {source}")]
    Solver {
        part: u8,
        #[source]
        source: advent_solver::SolverError,
    },

    /// The computed answer differs from the expected one
    #[error("Part {part} failed, expected {expected}, got {actual}")]
    Mismatch {
        part: u8,
        expected: String,
        actual: String,
    },
}
