//! Sums, means and central moments
//!
//! All sums go through [`CompensatedSum`](super::CompensatedSum). Moments
//! are computed in two passes: the mean first, then the deviations from it,
//! which avoids the cancellation of the `E[x²] - E[x]²` shortcut.

use crate::config::DatasetKind;
use crate::error::{Result, StatsError};

use super::accumulate::sum_of;
use super::Statistics;

impl<'a> Statistics<'a> {
    // =========================================================================
    // Sums and Means
    // =========================================================================

    pub fn sum(&self) -> Result<f64> {
        self.require(1, "Sum")?;
        Ok(self.sum_unchecked())
    }

    pub fn mean(&self) -> Result<f64> {
        self.require(1, "Mean")?;
        Ok(self.mean_unchecked())
    }

    /// Σx²
    pub fn sum_squares(&self) -> Result<f64> {
        self.require(1, "Sum of Squares")?;
        Ok(self.sum_squares_unchecked())
    }

    /// Mean of |x - mean|
    pub fn mean_abs_deviation(&self) -> Result<f64> {
        self.require(1, "Mean Absolute Deviation")?;
        Ok(sum_of(self.deviations().map(f64::abs)) / self.n())
    }

    /// Root mean square: sqrt(Σx² / n)
    pub fn rms(&self) -> Result<f64> {
        self.require(1, "Root Mean Square")?;
        Ok((self.sum_squares_unchecked() / self.n()).sqrt())
    }

    // =========================================================================
    // Dispersion
    // =========================================================================

    /// Mean squared deviation with divisor n-1 (sample) or n (population)
    pub fn variance(&self, kind: DatasetKind) -> Result<f64> {
        let operation = match kind {
            DatasetKind::Sample => "Variance (sample)",
            DatasetKind::Population => "Variance (population)",
        };
        self.require(min_for_dispersion(kind), operation)?;
        Ok(self.variance_unchecked(kind))
    }

    pub fn stdev(&self, kind: DatasetKind) -> Result<f64> {
        let operation = match kind {
            DatasetKind::Sample => "Standard Deviation (sample)",
            DatasetKind::Population => "Standard Deviation (population)",
        };
        self.require(min_for_dispersion(kind), operation)?;
        Ok(self.variance_unchecked(kind).sqrt())
    }

    /// Standard error of the mean: stdev / sqrt(n)
    pub fn sem(&self, kind: DatasetKind) -> Result<f64> {
        let operation = match kind {
            DatasetKind::Sample => "Standard Error of Mean (sample)",
            DatasetKind::Population => "Standard Error of Mean (population)",
        };
        self.require(min_for_dispersion(kind), operation)?;
        Ok(self.variance_unchecked(kind).sqrt() / self.n().sqrt())
    }

    /// stdev / mean
    ///
    /// Fails with [`StatsError::ZeroMean`] when the mean is exactly 0, and
    /// with the standard deviation's own size error for a one-value sample.
    pub fn coefficient_of_variation(&self, kind: DatasetKind) -> Result<f64> {
        const OPERATION: &str = "Coefficient of Variation";
        self.require(1, OPERATION)?;

        let mean = self.mean_unchecked();
        if mean == 0.0 {
            return Err(StatsError::ZeroMean {
                operation: OPERATION,
            });
        }
        Ok(self.stdev(kind)? / mean)
    }

    /// 100 × coefficient of variation
    pub fn relative_std_deviation(&self, kind: DatasetKind) -> Result<f64> {
        Ok(100.0 * self.coefficient_of_variation(kind)?)
    }

    // =========================================================================
    // Shape
    // =========================================================================

    /// Third standardized moment
    ///
    /// Population: Σz³ / n with z = (x - mean) / σ, σ the population
    /// standard deviation. Sample: the adjusted Fisher-Pearson coefficient,
    /// √(n(n-1))/(n-2) · Σz³ / n with z standardized by the sample
    /// standard deviation.
    /// Returns 0 when all values are equal.
    pub fn skewness(&self, kind: DatasetKind) -> Result<f64> {
        let (operation, required) = match kind {
            DatasetKind::Sample => ("Skewness (sample)", 3),
            DatasetKind::Population => ("Skewness (population)", 1),
        };
        self.require(required, operation)?;

        let n = self.n();
        let sd = self.variance_unchecked(kind).sqrt();
        if sd == 0.0 {
            return Ok(0.0);
        }

        // Standardize before cubing so large deviations stay in range
        let g1 = sum_of(self.deviations().map(|d| {
            let z = d / sd;
            z * z * z
        })) / n;

        Ok(match kind {
            DatasetKind::Sample => (n * (n - 1.0)).sqrt() / (n - 2.0) * g1,
            DatasetKind::Population => g1,
        })
    }

    /// Bias-corrected fourth standardized moment (spreadsheet `KURT` before
    /// the excess correction)
    ///
    /// n(n+1) / ((n-1)(n-2)(n-3)) · Σz⁴, where z = (x - mean) / s and s is
    /// the sample standard deviation. Returns 0 when all values are equal.
    pub fn kurtosis(&self) -> Result<f64> {
        self.require(4, "Kurtosis")?;
        Ok(self.kurtosis_terms().map_or(0.0, |(term1, _)| term1))
    }

    /// Kurtosis minus 3(n-1)² / ((n-2)(n-3)); 0 for a normal distribution
    pub fn kurtosis_excess(&self) -> Result<f64> {
        self.require(4, "Kurtosis Excess")?;
        Ok(self
            .kurtosis_terms()
            .map_or(0.0, |(term1, term2)| term1 - term2))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn sum_unchecked(&self) -> f64 {
        sum_of(self.data.iter().copied())
    }

    fn mean_unchecked(&self) -> f64 {
        self.sum_unchecked() / self.n()
    }

    fn sum_squares_unchecked(&self) -> f64 {
        sum_of(self.data.iter().map(|&x| x * x))
    }

    /// x - mean for every value
    fn deviations(&self) -> impl Iterator<Item = f64> + 'a {
        let mean = self.mean_unchecked();
        let data: &'a [f64] = self.data;
        data.iter().map(move |&x| x - mean)
    }

    fn variance_unchecked(&self, kind: DatasetKind) -> f64 {
        let squares = sum_of(self.deviations().map(|d| d * d));
        let divisor = match kind {
            DatasetKind::Sample => self.n() - 1.0,
            DatasetKind::Population => self.n(),
        };
        (squares / divisor).max(0.0)
    }

    /// (term1, term2) of the bias-corrected kurtosis, or `None` for zero
    /// spread. Caller guarantees n >= 4.
    fn kurtosis_terms(&self) -> Option<(f64, f64)> {
        let n = self.n();
        let s = self.variance_unchecked(DatasetKind::Sample).sqrt();
        if s == 0.0 {
            return None;
        }

        let sum_z4 = sum_of(self.deviations().map(|d| {
            let z = d / s;
            let z2 = z * z;
            z2 * z2
        }));

        let term1 = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0)) * sum_z4;
        let term2 = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
        Some((term1, term2))
    }
}

/// Minimum n for the variance family
fn min_for_dispersion(kind: DatasetKind) -> usize {
    match kind {
        DatasetKind::Sample => 2,
        DatasetKind::Population => 1,
    }
}
