//! Statistics Module
//!
//! Read-only descriptive statistics over a [`SortedBuffer`].
//!
//! ## Responsibilities
//! - Derive every statistic on demand from the live sorted values
//! - Enforce each statistic's minimum dataset size
//! - Accumulate sums and moments with compensated summation
//!
//! ## Minimum Sizes
//! ```text
//! ┌───────────────────────────────────────────────┬────────┐
//! │ Statistic                                     │ Min n  │
//! ├───────────────────────────────────────────────┼────────┤
//! │ min max range sum mean median modes midrange  │   1    │
//! │ sum_squares mad rms frequency_table           │   1    │
//! │ variance / stdev / sem (population)           │   1    │
//! │ variance / stdev / sem (sample)               │   2    │
//! │ quartiles iqr outliers                        │   2    │
//! │ skewness (population / sample)                │  1 / 3 │
//! │ kurtosis kurtosis_excess                      │   4    │
//! └───────────────────────────────────────────────┴────────┘
//! ```
//!
//! An empty dataset always fails with [`StatsError::DatasetEmpty`]; a
//! non-empty one below the minimum fails with
//! [`StatsError::InsufficientData`].

mod accumulate;
mod frequency;
mod moments;
mod order;

pub use accumulate::CompensatedSum;
pub use frequency::FrequencyEntry;
pub use order::Quartiles;

use crate::error::{Result, StatsError};
use crate::storage::SortedBuffer;

/// Borrowed statistics view over a sorted buffer
///
/// Holding a `Statistics` borrows the buffer, so the values cannot change
/// while the view is alive. Every query recomputes from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Statistics<'a> {
    data: &'a [f64],
}

impl<'a> Statistics<'a> {
    pub fn new(buffer: &'a SortedBuffer) -> Self {
        Self {
            data: buffer.as_slice(),
        }
    }

    /// Number of values in the snapshot
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The sorted values
    pub fn values(&self) -> &'a [f64] {
        self.data
    }

    /// Fail unless the dataset holds at least `required` values
    fn require(&self, required: usize, operation: &'static str) -> Result<()> {
        let n = self.data.len();
        if n == 0 {
            Err(StatsError::DatasetEmpty { operation })
        } else if n < required {
            Err(StatsError::InsufficientData {
                operation,
                required,
            })
        } else {
            Ok(())
        }
    }

    fn n(&self) -> f64 {
        self.data.len() as f64
    }
}

impl SortedBuffer {
    /// Statistics view over the current contents
    pub fn stats(&self) -> Statistics<'_> {
        Statistics::new(self)
    }
}
