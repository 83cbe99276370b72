#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_destination, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "test_rows.txt";
pub const DEFAULT_ROWS: u64 = 1_000;

/// Resolved, validated generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub path: PathBuf,
    pub rows: u64,
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Resolves `file` against the current working directory.
    pub fn resolve(file: impl AsRef<Path>, rows: u64) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve_in(&cwd, file, rows)
    }

    /// Resolves `file` against `base` unless it is already absolute, then validates.
    pub fn resolve_in(base: &Path, file: impl AsRef<Path>, rows: u64) -> Result<Self> {
        let config = Self {
            path: base.join(file),
            rows,
            seed: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        validate_destination(&self.path)
    }
}
