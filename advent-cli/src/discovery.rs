//! Solution directory discovery
//!
//! A solution directory sits directly under the search root, is named
//! `<prefix><digits>` and contains the entry marker file.

use crate::cli::SortOrder;
use crate::error::DiscoveryError;
use itertools::Itertools;
use regex::Regex;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A discovered solution directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionDir {
    /// Directory name, e.g. `day7`
    pub name: String,
    /// Full path of the directory
    pub path: PathBuf,
    /// Digits following the prefix, as written
    pub suffix: String,
    /// Parsed day number
    pub day: u32,
}

impl SolutionDir {
    /// Path of a file inside this directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl SortOrder {
    fn compare(self, a: &SolutionDir, b: &SolutionDir) -> Ordering {
        match self {
            SortOrder::Numeric => a.day.cmp(&b.day),
            SortOrder::Lexicographic => a.suffix.cmp(&b.suffix),
        }
        .then_with(|| a.name.cmp(&b.name))
    }
}

/// Sorted, non-empty set of solution directories
#[derive(Debug, Clone)]
pub struct Discovery {
    entries: Vec<SolutionDir>,
}

impl Discovery {
    /// The selected directory: the first in sort order
    pub fn target(&self) -> &SolutionDir {
        &self.entries[0]
    }

    /// The last directory in sort order
    pub fn last(&self) -> &SolutionDir {
        &self.entries[self.entries.len() - 1]
    }

    /// All directories in sort order
    pub fn entries(&self) -> &[SolutionDir] {
        &self.entries
    }
}

/// Scan `root` for solution directories and sort them by suffix
pub fn discover(
    root: &Path,
    prefix: &str,
    entry_file: &str,
    sort: SortOrder,
) -> Result<Discovery, DiscoveryError> {
    let pattern = Regex::new(&format!(r"^{}(\d+)$", regex::escape(prefix)))?;
    let read_root = |source| DiscoveryError::ReadRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(root).map_err(read_root)? {
        let entry = entry.map_err(read_root)?;
        let path = entry.path();

        // Non UTF-8 names can never match the pattern
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with(prefix) || !path.is_dir() || !path.join(entry_file).is_file() {
            continue;
        }

        let invalid = || DiscoveryError::InvalidSuffix {
            name: name.clone(),
            prefix: prefix.to_string(),
        };
        let suffix = pattern
            .captures(&name)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(invalid)?;
        let day = suffix.parse::<u32>().map_err(|_| invalid())?;

        debug!(%name, day, "found solution directory");
        entries.push(SolutionDir {
            name,
            path,
            suffix,
            day,
        });
    }

    if entries.is_empty() {
        return Err(DiscoveryError::NoSolutionDirs {
            root: root.to_path_buf(),
            prefix: prefix.to_string(),
            entry_file: entry_file.to_string(),
        });
    }

    let entries = entries
        .into_iter()
        .sorted_by(|a, b| sort.compare(a, b))
        .collect_vec();
    info!(
        dirs = ?entries.iter().map(|e| e.name.as_str()).collect_vec(),
        "discovered solution directories"
    );

    Ok(Discovery { entries })
}
