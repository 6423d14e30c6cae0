//! Configuration for statsarray
//!
//! Centralized configuration with sensible defaults. Values can be set through
//! the builder or loaded from a TOML file; every key in the file is optional.
//!
//! ```toml
//! dataset_kind = "population"
//! random_max = 100
//! random_count_limit = 1000000
//! random_seed = 42
//! initial_capacity = 0
//! report_path = "results.txt"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StatsError};

/// Main configuration for a statistics session
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Statistics Configuration
    // -------------------------------------------------------------------------
    /// Whether variance-family statistics treat the data as a sample (n-1)
    /// or as the full population (n)
    pub dataset_kind: DatasetKind,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Slots reserved up front. 0 keeps the buffer unallocated until the
    /// first insert.
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Random Insertion Configuration
    // -------------------------------------------------------------------------
    /// Upper bound (inclusive) of the integers produced by `random <count>`
    pub random_max: u32,

    /// Largest `count` accepted by `random <count>`
    pub random_count_limit: usize,

    /// Fixed RNG seed; `None` seeds from the operating system
    pub random_seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Reporting Configuration
    // -------------------------------------------------------------------------
    /// Default destination for `save` when no path is given
    pub report_path: PathBuf,
}

/// Sample vs. population treatment of the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Divisor n-1 in the variance family
    #[default]
    Sample,

    /// Divisor n in the variance family
    Population,
}

impl DatasetKind {
    pub fn is_sample(self) -> bool {
        matches!(self, DatasetKind::Sample)
    }

    /// Lowercase label used inside statistic names ("Variance (sample)")
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Sample => "sample",
            DatasetKind::Population => "population",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Sample => write!(f, "Sample"),
            DatasetKind::Population => write!(f, "Population"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_kind: DatasetKind::Sample,
            initial_capacity: 0,
            random_max: 100,
            random_count_limit: 1_000_000,
            random_seed: None,
            report_path: PathBuf::from("results.txt"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load a config from a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            StatsError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| StatsError::Config(e.to_string()))
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing config (e.g. one loaded from a file)
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set sample or population treatment
    pub fn dataset_kind(mut self, kind: DatasetKind) -> Self {
        self.config.dataset_kind = kind;
        self
    }

    /// Set the number of slots reserved up front
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the inclusive upper bound for random values
    pub fn random_max(mut self, max: u32) -> Self {
        self.config.random_max = max;
        self
    }

    /// Set the largest count a single `random` command may insert
    pub fn random_count_limit(mut self, limit: usize) -> Self {
        self.config.random_count_limit = limit;
        self
    }

    /// Fix the RNG seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set the default report destination
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.report_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
