//! Expected answer files

use crate::error::AnswerError;
use std::fs;
use std::path::Path;

/// The last non-empty line of an answers file, without trailing whitespace
///
/// Earlier lines (notes, answers for the example input) are ignored.
pub fn expected_answer(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim_end).find(|line| !line.is_empty())
}

/// Read the expected answer recorded in `path`
pub fn read_expected_answer(path: &Path) -> Result<String, AnswerError> {
    let text = fs::read_to_string(path).map_err(|source| AnswerError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    expected_answer(&text)
        .map(str::to_string)
        .ok_or_else(|| AnswerError::Empty {
            path: path.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_last_line_wins() {
        assert_eq!(expected_answer("...\n7"), Some("7"));
        assert_eq!(expected_answer("example: 3\nreal: 7\n42\n"), Some("42"));
    }

    #[test]
    fn test_trailing_blank_lines_and_crlf_tolerated() {
        assert_eq!(expected_answer("42\n\n\n"), Some("42"));
        assert_eq!(expected_answer("1\r\n42\r\n"), Some("42"));
        assert_eq!(expected_answer("42  \n   \n"), Some("42"));
    }

    #[test]
    fn test_leading_whitespace_kept() {
        assert_eq!(expected_answer("  42"), Some("  42"));
    }

    #[test]
    fn test_empty_has_no_answer() {
        assert_eq!(expected_answer(""), None);
        assert_eq!(expected_answer("\n \n"), None);
    }

    #[test]
    fn test_read_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("solutions.txt");
        fs::write(&path, "...\n7\n").unwrap();
        assert_eq!(read_expected_answer(&path).unwrap(), "7");

        fs::write(&path, "\n").unwrap();
        assert!(matches!(read_expected_answer(&path), Err(AnswerError::Empty { .. })));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = read_expected_answer(&temp.path().join("solutions.txt"));
        assert!(matches!(result, Err(AnswerError::Read { .. })));
    }
}
