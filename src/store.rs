// 💾 Person Store - Line-oriented flat-file persistence
// One person per line, full rewrite on every save. The path is injected at
// construction; there is no global file name.

use crate::person::Person;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file store for the full person set.
///
/// Every registry operation loads the whole set fresh and, on success, writes
/// the whole set back. Save is a direct overwrite with no atomic rename;
/// a crash mid-write can leave a truncated file. Kept for parity with the
/// legacy writer; callers that need stronger guarantees must arrange their
/// own staging.
pub struct PersonStore {
    path: PathBuf,
}

impl PersonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PersonStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full person set. A missing file reads as an empty registry;
    /// malformed lines are skipped.
    pub fn load(&self) -> Result<Vec<Person>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {:?}", self.path))?;

        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Person::from_line)
            .collect())
    }

    /// Rewrite the store with the given set, preserving its order.
    pub fn save(&self, people: &[Person]) -> Result<()> {
        let mut out = String::new();
        for person in people {
            out.push_str(&person.to_line());
            out.push('\n');
        }

        fs::write(&self.path, out)
            .with_context(|| format!("Failed to write store file: {:?}", self.path))
    }
}

// ============================================================================
// TESTS
// ============================================================================
