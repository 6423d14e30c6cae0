//! Report Module
//!
//! Aggregates every statistic into a [`Summary`] and renders it as the
//! line-oriented text report.
//!
//! ## Layout
//! ```text
//! DATA (sorted, n=4): 3 3 5 8
//!
//! Min: 3
//! Max: 8
//! ...
//! Relative Std Dev (%): 49.7454
//!
//! Frequency Table
//!
//! Value     Frequency   Frequency %
//! 3         2           50.00
//! 5         1           25.00
//! 8         1           25.00
//! ```
//!
//! A statistic whose minimum dataset size is not met is rendered as
//! `unavailable (<reason>)` on its own line; the rest of the report is still
//! produced.

pub mod format;

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::{info, warn};

use crate::config::DatasetKind;
use crate::error::{Result, StatsError};
use crate::stats::{FrequencyEntry, Quartiles, Statistics};

use self::format::{fixed2, general, join};

/// Every statistic of one dataset snapshot
#[derive(Debug)]
pub struct Summary {
    pub kind: DatasetKind,
    pub values: Vec<f64>,

    pub min: Result<f64>,
    pub max: Result<f64>,
    pub range: Result<f64>,
    pub sum: Result<f64>,
    pub mean: Result<f64>,
    pub median: Result<f64>,
    pub modes: Result<Vec<f64>>,
    pub variance: Result<f64>,
    pub stdev: Result<f64>,
    pub midrange: Result<f64>,
    pub quartiles: Result<Quartiles>,
    pub outliers: Result<Vec<f64>>,
    pub sum_squares: Result<f64>,
    pub mean_abs_deviation: Result<f64>,
    pub rms: Result<f64>,
    pub sem: Result<f64>,
    pub skewness: Result<f64>,
    pub kurtosis: Result<f64>,
    pub kurtosis_excess: Result<f64>,
    pub coefficient_of_variation: Result<f64>,
    pub relative_std_deviation: Result<f64>,

    pub frequency: Vec<FrequencyEntry>,
}

impl Summary {
    /// Compute every statistic for `stats` under `kind`
    ///
    /// Fails only for an empty dataset. Per-statistic failures are kept in
    /// the corresponding field.
    pub fn collect(stats: &Statistics<'_>, kind: DatasetKind) -> Result<Self> {
        if stats.is_empty() {
            return Err(StatsError::DatasetEmpty {
                operation: "Print All",
            });
        }

        Ok(Self {
            kind,
            values: stats.values().to_vec(),
            min: stats.min(),
            max: stats.max(),
            range: stats.range(),
            sum: stats.sum(),
            mean: stats.mean(),
            median: stats.median(),
            modes: stats.modes(),
            variance: stats.variance(kind),
            stdev: stats.stdev(kind),
            midrange: stats.midrange(),
            quartiles: stats.quartiles(),
            outliers: stats.outliers(),
            sum_squares: stats.sum_squares(),
            mean_abs_deviation: stats.mean_abs_deviation(),
            rms: stats.rms(),
            sem: stats.sem(kind),
            skewness: stats.skewness(kind),
            kurtosis: stats.kurtosis(),
            kurtosis_excess: stats.kurtosis_excess(),
            coefficient_of_variation: stats.coefficient_of_variation(kind),
            relative_std_deviation: stats.relative_std_deviation(kind),
            frequency: stats.frequency_table()?,
        })
    }

    /// Write the rendered report to `path`, creating or truncating it
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        match self.write_io(path) {
            Ok(()) => {
                info!(path = %path.display(), n = self.values.len(), "report written");
                Ok(())
            }
            Err(source) => {
                warn!(path = %path.display(), error = %source, "report write failed");
                Err(StatsError::ReportWrite {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    fn write_io(&self, path: &Path) -> std::io::Result<()> {
        use std::io::Write;

        let mut out = BufWriter::new(File::create(path)?);
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind.label();

        writeln!(
            f,
            "DATA (sorted, n={}): {}",
            self.values.len(),
            join(&self.values, " ")
        )?;
        writeln!(f)?;

        writeln!(f, "Min: {}", scalar(&self.min))?;
        writeln!(f, "Max: {}", scalar(&self.max))?;
        writeln!(f, "Range: {}", scalar(&self.range))?;
        writeln!(f, "Sum: {}", scalar(&self.sum))?;
        writeln!(f, "Mean: {}", scalar(&self.mean))?;
        writeln!(f, "Median: {}", scalar(&self.median))?;
        writeln!(f, "Mode(s): {}", list(&self.modes))?;
        writeln!(f, "Variance ({}): {}", kind, scalar(&self.variance))?;
        writeln!(f, "Std Dev ({}): {}", kind, scalar(&self.stdev))?;
        writeln!(f, "Midrange: {}", scalar(&self.midrange))?;
        match &self.quartiles {
            Ok(q) => {
                writeln!(
                    f,
                    "Quartiles (Q1,Q2,Q3): {}, {}, {}",
                    general(q.q1),
                    general(q.q2),
                    general(q.q3)
                )?;
                writeln!(f, "IQR: {}", general(q.iqr()))?;
            }
            Err(e) => {
                writeln!(f, "Quartiles (Q1,Q2,Q3): {}", unavailable(e))?;
                writeln!(f, "IQR: {}", unavailable(e))?;
            }
        }
        writeln!(f, "Outliers (Tukey +/- 1.5*IQR): {}", list(&self.outliers))?;
        writeln!(f, "Sum of Squares: {}", scalar(&self.sum_squares))?;
        writeln!(f, "Mean Abs Deviation: {}", scalar(&self.mean_abs_deviation))?;
        writeln!(f, "RMS: {}", scalar(&self.rms))?;
        writeln!(f, "SEM: {}", scalar(&self.sem))?;
        writeln!(f, "Skewness: {}", scalar(&self.skewness))?;
        writeln!(f, "Kurtosis (Pearson): {}", scalar(&self.kurtosis))?;
        writeln!(f, "Kurtosis Excess: {}", scalar(&self.kurtosis_excess))?;
        writeln!(
            f,
            "Coefficient of Variation: {}",
            scalar(&self.coefficient_of_variation)
        )?;
        writeln!(
            f,
            "Relative Std Dev (%): {}",
            scalar(&self.relative_std_deviation)
        )?;

        writeln!(f)?;
        write_frequency_table(f, &self.frequency, self.values.len())
    }
}

/// Frequency table with header, as printed by the report and the `freq`
/// command
///
/// Only the percentage column uses two fixed decimals. Every value is
/// printed in general format, so rows after the first read `5`, not the
/// `5.00` that reports from the older console tool carried over from the
/// previous row's percentage formatting.
pub fn write_frequency_table(
    f: &mut impl fmt::Write,
    table: &[FrequencyEntry],
    total: usize,
) -> fmt::Result {
    writeln!(f, "Frequency Table")?;
    writeln!(f)?;
    writeln!(f, "{:<10}{:<12}{}", "Value", "Frequency", "Frequency %")?;
    for entry in table {
        writeln!(
            f,
            "{:<10}{:<12}{:<12}",
            general(entry.value),
            entry.count,
            fixed2(entry.percent_of(total))
        )?;
    }
    Ok(())
}

fn scalar(value: &Result<f64>) -> String {
    match value {
        Ok(v) => general(*v),
        Err(e) => unavailable(e),
    }
}

fn list(values: &Result<Vec<f64>>) -> String {
    match values {
        Ok(v) if v.is_empty() => "(none)".to_string(),
        Ok(v) => join(v, " "),
        Err(e) => unavailable(e),
    }
}

fn unavailable(e: &StatsError) -> String {
    format!("unavailable ({})", e)
}
