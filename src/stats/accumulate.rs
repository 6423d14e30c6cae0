//! Compensated accumulation
//!
//! Neumaier's variant of Kahan summation. Each addition carries the
//! low-order bits lost to rounding in a separate compensation term, so the
//! error stays O(ε) independent of the number of terms, and stays small when
//! an addend is larger in magnitude than the running total.

/// Running compensated sum of `f64` terms
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one term
    pub fn add(&mut self, x: f64) {
        let t = self.sum + x;
        if self.sum.abs() >= x.abs() {
            self.compensation += (self.sum - t) + x;
        } else {
            self.compensation += (x - t) + self.sum;
        }
        self.sum = t;
    }

    /// Current total including the compensation term
    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Compensated total of `iter`
pub(crate) fn sum_of<I: IntoIterator<Item = f64>>(iter: I) -> f64 {
    iter.into_iter().collect::<CompensatedSum>().total()
}
