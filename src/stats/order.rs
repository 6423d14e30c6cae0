//! Order statistics
//!
//! Everything here reads positions in the sorted slice directly; nothing is
//! re-sorted.

use crate::error::Result;

use super::Statistics;

/// Tukey fence multiplier applied to the IQR
const FENCE_FACTOR: f64 = 1.5;

/// First, second and third quartiles (Tukey's hinges)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower and upper Tukey fences: Q1 - 1.5 IQR and Q3 + 1.5 IQR
    pub fn fences(&self) -> (f64, f64) {
        let width = FENCE_FACTOR * self.iqr();
        (self.q1 - width, self.q3 + width)
    }
}

impl<'a> Statistics<'a> {
    pub fn min(&self) -> Result<f64> {
        self.require(1, "Minimum")?;
        Ok(self.data[0])
    }

    pub fn max(&self) -> Result<f64> {
        self.require(1, "Maximum")?;
        Ok(self.data[self.data.len() - 1])
    }

    pub fn range(&self) -> Result<f64> {
        self.require(1, "Range")?;
        Ok(self.data[self.data.len() - 1] - self.data[0])
    }

    /// (min + max) / 2
    pub fn midrange(&self) -> Result<f64> {
        self.require(1, "Midrange")?;
        Ok(midpoint(self.data[0], self.data[self.data.len() - 1]))
    }

    /// Middle value, or the mean of the two middle values for even n
    pub fn median(&self) -> Result<f64> {
        self.require(1, "Median")?;
        Ok(median_of(self.data))
    }

    /// Quartiles by the halves method
    ///
    /// Q2 is the median. The lower half is the first n/2 values and the upper
    /// half the last n/2 values, so for odd n the median itself belongs to
    /// neither. Q1 and Q3 are the medians of the halves.
    pub fn quartiles(&self) -> Result<Quartiles> {
        self.require(2, "Quartiles")?;
        Ok(self.quartiles_unchecked())
    }

    /// Q3 - Q1
    pub fn iqr(&self) -> Result<f64> {
        self.require(2, "Interquartile Range")?;
        Ok(self.quartiles_unchecked().iqr())
    }

    /// Values strictly outside the Tukey fences, ascending
    pub fn outliers(&self) -> Result<Vec<f64>> {
        self.require(2, "Outliers")?;
        let (lo, hi) = self.quartiles_unchecked().fences();

        // Sorted input: outliers are a prefix and a suffix
        let below = self.data.partition_point(|&x| x < lo);
        let above = self.data.partition_point(|&x| x <= hi);

        let mut out = Vec::with_capacity(below + self.data.len() - above);
        out.extend_from_slice(&self.data[..below]);
        out.extend_from_slice(&self.data[above..]);
        Ok(out)
    }

    fn quartiles_unchecked(&self) -> Quartiles {
        let n = self.data.len();
        let half = n / 2;
        let upper_start = half + n % 2;

        Quartiles {
            q1: median_of(&self.data[..half]),
            q2: median_of(self.data),
            q3: median_of(&self.data[upper_start..]),
        }
    }
}

/// Median of a non-empty sorted slice
fn median_of(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        midpoint(sorted[mid - 1], sorted[mid])
    }
}

/// (a + b) / 2 without overflowing when a + b exceeds `f64::MAX`
///
/// The result always lies in `[min(a, b), max(a, b)]`.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}
