//! Engine Module
//!
//! The session engine that owns one dataset and executes commands against it.
//!
//! ## Responsibilities
//! - Own the sorted buffer, the dataset kind and the random source
//! - Route each [`Command`] to storage, statistics or reporting
//! - Load numbers from files and write reports to files
//!
//! Failures are returned to the caller; no command is fatal to the session.

use std::fs;
use std::path::Path;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::{Config, DatasetKind};
use crate::error::{Result, StatsError};
use crate::protocol::{Command, Response, StatKind, StatValue};
use crate::report::Summary;
use crate::stats::Statistics;
use crate::storage::SortedBuffer;

/// One statistics session
pub struct Engine {
    /// Session configuration
    config: Config,

    /// Current sample/population setting (starts from the config)
    kind: DatasetKind,

    /// The dataset
    buffer: SortedBuffer,

    /// Source for `random <count>`
    rng: SmallRng,
}

impl Engine {
    /// Create an engine with an empty dataset
    pub fn new(config: Config) -> Self {
        let buffer = if config.initial_capacity > 0 {
            SortedBuffer::with_capacity(config.initial_capacity)
        } else {
            SortedBuffer::new()
        };
        let rng = match config.random_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Self {
            kind: config.dataset_kind,
            config,
            buffer,
            rng,
        }
    }

    /// Execute a command
    ///
    /// Routes commands to the appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!(?command, "executing command");

        match command {
            Command::Insert { value } => {
                self.buffer.insert(value)?;
                Ok(Response::Inserted { value })
            }
            Command::InsertRandom { count } => {
                self.insert_random(count)?;
                Ok(Response::InsertedRandom { count })
            }
            Command::Load { path } => {
                let count = self.load_file(&path)?;
                Ok(Response::Loaded { path, count })
            }
            Command::Delete { value } => {
                let count = self.buffer.erase_value(value, usize::MAX)?;
                Ok(Response::Removed { count })
            }
            Command::SetKind { kind } => {
                self.kind = kind;
                Ok(Response::KindSet { kind })
            }
            Command::Size => Ok(Response::Size(self.buffer.len())),
            Command::Stat { stat } => Ok(Response::Stat {
                stat,
                kind: self.kind,
                value: self.compute(stat)?,
            }),
            Command::Frequency => Ok(Response::Frequency {
                table: self.stats().frequency_table()?,
                total: self.buffer.len(),
            }),
            Command::Report => Ok(Response::Report(Box::new(self.summary()?))),
            Command::Save { path } => {
                let path = path.unwrap_or_else(|| self.config.report_path.clone());
                self.save_report(&path)?;
                Ok(Response::Saved { path })
            }
            Command::Show => Ok(Response::Overview {
                address: self.buffer.data_address(),
                kind: self.kind,
                values: self.buffer.as_slice().to_vec(),
            }),
            Command::Clear => {
                self.buffer.clear();
                Ok(Response::Cleared)
            }
            Command::Help => Ok(Response::Help),
            Command::Quit => Ok(Response::Quit),
        }
    }

    /// Compute a single statistic under the current dataset kind
    pub fn compute(&self, stat: StatKind) -> Result<StatValue> {
        let s = self.stats();
        let kind = self.kind;

        let value = match stat {
            StatKind::Min => StatValue::Scalar(s.min()?),
            StatKind::Max => StatValue::Scalar(s.max()?),
            StatKind::Range => StatValue::Scalar(s.range()?),
            StatKind::Sum => StatValue::Scalar(s.sum()?),
            StatKind::Mean => StatValue::Scalar(s.mean()?),
            StatKind::Median => StatValue::Scalar(s.median()?),
            StatKind::Modes => StatValue::List(s.modes()?),
            StatKind::StdDev => StatValue::Scalar(s.stdev(kind)?),
            StatKind::Variance => StatValue::Scalar(s.variance(kind)?),
            StatKind::Midrange => StatValue::Scalar(s.midrange()?),
            StatKind::Quartiles => StatValue::Quartiles(s.quartiles()?),
            StatKind::Iqr => StatValue::Scalar(s.iqr()?),
            StatKind::Outliers => StatValue::List(s.outliers()?),
            StatKind::SumSquares => StatValue::Scalar(s.sum_squares()?),
            StatKind::MeanAbsDeviation => StatValue::Scalar(s.mean_abs_deviation()?),
            StatKind::Rms => StatValue::Scalar(s.rms()?),
            StatKind::Sem => StatValue::Scalar(s.sem(kind)?),
            StatKind::Skewness => StatValue::Scalar(s.skewness(kind)?),
            StatKind::Kurtosis => StatValue::Scalar(s.kurtosis()?),
            StatKind::KurtosisExcess => StatValue::Scalar(s.kurtosis_excess()?),
            StatKind::CoefficientOfVariation => {
                StatValue::Scalar(s.coefficient_of_variation(kind)?)
            }
            StatKind::RelativeStdDeviation => StatValue::Scalar(s.relative_std_deviation(kind)?),
        };
        Ok(value)
    }

    /// Insert every finite number in a whitespace-separated file
    ///
    /// Unparseable tokens are skipped. Returns the number inserted.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path)?;
        let count = self.buffer.extend_from_tokens(text.split_whitespace());
        info!(path = %path.display(), count, "loaded values from file");
        Ok(count)
    }

    /// Insert `count` uniform integers in `[0, random_max]`
    ///
    /// Counts above `random_count_limit` are rejected before anything is
    /// inserted.
    pub fn insert_random(&mut self, count: usize) -> Result<()> {
        let limit = self.config.random_count_limit;
        if count > limit {
            return Err(StatsError::Command(format!(
                "random count {} exceeds the limit of {}",
                count, limit
            )));
        }

        let max = self.config.random_max;
        for _ in 0..count {
            let value = f64::from(self.rng.random_range(0..=max));
            self.buffer.insert(value)?;
        }
        debug!(count, max, "inserted random values");
        Ok(())
    }

    /// Full report of the current dataset
    pub fn summary(&self) -> Result<Summary> {
        Summary::collect(&self.stats(), self.kind)
    }

    /// Write the full report to `path`
    pub fn save_report(&self, path: &Path) -> Result<()> {
        if self.buffer.is_empty() {
            return Err(StatsError::DatasetEmpty {
                operation: "Write All to File",
            });
        }
        self.summary()?.write_to_file(path)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn stats(&self) -> Statistics<'_> {
        self.buffer.stats()
    }

    pub fn buffer(&self) -> &SortedBuffer {
        &self.buffer
    }

    /// Direct mutable access to the dataset
    pub fn buffer_mut(&mut self) -> &mut SortedBuffer {
        &mut self.buffer
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: DatasetKind) {
        self.kind = kind;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
