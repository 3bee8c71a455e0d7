//! Configuration resolution from CLI args

use crate::cli::{Args, PartTwoSource, SortOrder, TrimRule};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// File names looked up inside a solution directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayout {
    /// Marker file that makes a directory a solution directory
    pub entry_file: String,
    /// Part 1 input
    pub input: String,
    /// Part 1 expected answers
    pub answers: String,
    /// Part 2 input
    pub input2: String,
    /// Part 2 expected answers
    pub answers2: String,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            entry_file: "input.txt".to_string(),
            input: "input.txt".to_string(),
            answers: "solutions.txt".to_string(),
            input2: "input2.txt".to_string(),
            answers2: "solutions2.txt".to_string(),
        }
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory searched for solution directories
    pub root: PathBuf,
    /// Directory name prefix before the day number
    pub prefix: String,
    /// Suffix ordering
    pub sort: SortOrder,
    /// Input trim rule
    pub trim: TrimRule,
    /// Directory supplying part 2 files
    pub part_two_source: PartTwoSource,
    /// Per-directory file names
    pub layout: FileLayout,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.prefix.is_empty() {
            return Err(CliError::Config("Directory prefix must not be empty".to_string()));
        }

        let layout = FileLayout {
            entry_file: args.entry_file,
            input: args.input,
            answers: args.answers,
            input2: args.input2,
            answers2: args.answers2,
        };
        for name in [
            &layout.entry_file,
            &layout.input,
            &layout.answers,
            &layout.input2,
            &layout.answers2,
        ] {
            validate_file_name(name)?;
        }

        Ok(Config {
            root: expand_tilde(&args.root),
            prefix: args.prefix,
            sort: args.sort,
            trim: args.trim,
            part_two_source: args.part_two_source,
            layout,
        })
    }
}

/// File names are joined onto a solution directory, so they must name a
/// single entry inside it
fn validate_file_name(name: &str) -> Result<(), CliError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(_)), None) => Ok(()),
        _ => Err(CliError::Config(format!(
            "Invalid file name {:?}: expected a plain file name",
            name
        ))),
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let mut full = vec!["advent"];
        full.extend_from_slice(argv);
        Config::from_args(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_default_layout() {
        let config = config(&[]).unwrap();
        assert_eq!(config.layout, FileLayout::default());
        assert_eq!(config.root, PathBuf::from("."));
    }

    #[test]
    fn test_overridden_file_names() {
        let config = config(&["--input2", "input.txt", "--entry-file", "solve.rs"]).unwrap();
        assert_eq!(config.layout.input2, "input.txt");
        assert_eq!(config.layout.entry_file, "solve.rs");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(config(&["--prefix", ""]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_nested_file_name_rejected() {
        assert!(matches!(
            config(&["--answers", "../solutions.txt"]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(config(&["--input", "a/b.txt"]), Err(CliError::Config(_))));
    }

    #[test]
    fn test_tilde_expansion() {
        let plain = Path::new("puzzles");
        assert_eq!(expand_tilde(plain), PathBuf::from("puzzles"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/puzzles")), home.join("puzzles"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
