//! Frequency runs, modes and the frequency table
//!
//! A run is a maximal slice of equal adjacent values. The buffer is sorted,
//! so each distinct value forms exactly one run.

use crate::error::Result;

use super::Statistics;

/// One row of the frequency table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyEntry {
    pub value: f64,
    pub count: usize,
}

impl FrequencyEntry {
    /// Share of `total` as a percentage
    pub fn percent_of(&self, total: usize) -> f64 {
        100.0 * self.count as f64 / total as f64
    }
}

impl<'a> Statistics<'a> {
    /// Most frequent values, ascending
    ///
    /// Empty when no value occurs more than once. Every value whose run ties
    /// for the longest is returned.
    pub fn modes(&self) -> Result<Vec<f64>> {
        self.require(1, "Mode(s)")?;

        let best = self.runs().map(|e| e.count).max().unwrap_or(0);
        if best <= 1 {
            return Ok(Vec::new());
        }

        Ok(self
            .runs()
            .filter(|e| e.count == best)
            .map(|e| e.value)
            .collect())
    }

    /// (value, count) for each distinct value, ascending
    pub fn frequency_table(&self) -> Result<Vec<FrequencyEntry>> {
        self.require(1, "Frequency Table")?;
        Ok(self.runs().collect())
    }

    fn runs(&self) -> impl Iterator<Item = FrequencyEntry> + 'a {
        let data: &'a [f64] = self.data;
        data.chunk_by(|a, b| a == b).map(|run| FrequencyEntry {
            value: run[0],
            count: run.len(),
        })
    }
}
