//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How solution directory suffixes are ordered
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum SortOrder {
    /// Compare suffixes as numbers (`day2` before `day10`)
    #[default]
    Numeric,
    /// Compare suffixes as text (`day10` before `day2`)
    Lexicographic,
}

/// How puzzle input is trimmed before it reaches the solver
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum TrimRule {
    /// Strip all trailing whitespace
    #[default]
    TrimEnd,
    /// Strip leading and trailing whitespace
    Trim,
    /// Drop exactly the final character, whatever it is
    DropLastChar,
}

/// Which discovered directory supplies the part 2 files
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum PartTwoSource {
    /// The selected (lowest-numbered) directory, same as part 1
    #[default]
    Target,
    /// The last directory in discovery order
    Last,
}

/// Verify the lowest-numbered puzzle solution against its recorded answers
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Verify puzzle solutions against recorded answers", version)]
pub struct Args {
    /// Directory to search for solution directories
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Name prefix of solution directories, followed by the day number
    #[arg(long, default_value = "day")]
    pub prefix: String,

    /// File a directory must contain to count as a solution directory
    #[arg(long, default_value = "input.txt")]
    pub entry_file: String,

    /// Ordering of directory suffixes
    #[arg(long, value_enum, default_value = "numeric")]
    pub sort: SortOrder,

    /// Trim rule applied to input files
    #[arg(long, value_enum, default_value = "trim-end")]
    pub trim: TrimRule,

    /// Directory that supplies the part 2 input and answers
    #[arg(long = "part2-source", value_enum, default_value = "target")]
    pub part_two_source: PartTwoSource,

    /// Part 1 input file name
    #[arg(long, default_value = "input.txt")]
    pub input: String,

    /// Part 1 expected answers file name
    #[arg(long, default_value = "solutions.txt")]
    pub answers: String,

    /// Part 2 input file name
    #[arg(long, default_value = "input2.txt")]
    pub input2: String,

    /// Part 2 expected answers file name
    #[arg(long, default_value = "solutions2.txt")]
    pub answers2: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_layout() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.prefix, "day");
        assert_eq!(args.sort, SortOrder::Numeric);
        assert_eq!(args.trim, TrimRule::TrimEnd);
        assert_eq!(args.part_two_source, PartTwoSource::Target);
        assert_eq!(args.input2, "input2.txt");
        assert_eq!(args.answers2, "solutions2.txt");
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_value_enums_parse_kebab_case() {
        let args = Args::try_parse_from([
            "advent",
            "--sort",
            "lexicographic",
            "--trim",
            "drop-last-char",
            "--part2-source",
            "last",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.sort, SortOrder::Lexicographic);
        assert_eq!(args.trim, TrimRule::DropLastChar);
        assert_eq!(args.part_two_source, PartTwoSource::Last);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_unknown_trim_rule_rejected() {
        assert!(Args::try_parse_from(["advent", "--trim", "both"]).is_err());
    }
}
