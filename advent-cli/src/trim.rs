//! Input trimming rules

use crate::cli::TrimRule;

impl TrimRule {
    /// Apply the rule to raw file contents
    pub fn apply(self, input: &str) -> &str {
        match self {
            TrimRule::TrimEnd => input.trim_end(),
            TrimRule::Trim => input.trim(),
            TrimRule::DropLastChar => {
                let mut chars = input.chars();
                chars.next_back();
                chars.as_str()
            }
        }
    }
}
