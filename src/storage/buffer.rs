//! SortedBuffer implementation
//!
//! Vec-backed sorted array with an explicitly managed capacity.

use tracing::{debug, trace};

use crate::error::{Result, StatsError};

/// Capacity allocated on the first insert into an empty buffer
pub const INITIAL_CAPACITY: usize = 8;

/// Growable array of finite `f64` values kept in ascending order
///
/// ## Capacity
/// `capacity` is tracked here rather than read from the `Vec`, because the
/// allocator is free to hand back more than `reserve_exact` asked for. The
/// logical capacity is what the growth policy is defined over:
/// - 0 until the first insert
/// - 8 after the first insert
/// - doubled whenever an insert finds the buffer full
pub struct SortedBuffer {
    /// Stored values, always non-decreasing
    data: Vec<f64>,

    /// Logical capacity, always >= data.len()
    capacity: usize,
}

impl SortedBuffer {
    /// Create an empty buffer without allocating
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Create an empty buffer with `capacity` slots reserved
    ///
    /// A requested capacity of 0 reserves [`INITIAL_CAPACITY`] slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity > 0 { capacity } else { INITIAL_CAPACITY };
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Insert `value` at its sorted position
    ///
    /// The value lands before any existing run of equal values. Returns the
    /// index it was written to.
    pub fn insert(&mut self, value: f64) -> Result<usize> {
        if !value.is_finite() {
            return Err(StatsError::NonFiniteValue(value));
        }

        let pos = self.lower_bound(value);
        self.grow_if_needed();
        self.data.insert(pos, value);

        trace!(value, pos, len = self.data.len(), "inserted value");
        Ok(pos)
    }

    /// Remove up to `max_count` occurrences of `value`
    ///
    /// Returns the number of values actually removed (0 if absent).
    pub fn erase_value(&mut self, value: f64, max_count: usize) -> Result<usize> {
        if max_count == 0 {
            return Err(StatsError::InvalidCount(max_count));
        }

        let start = self.lower_bound(value);
        let run = self.data[start..]
            .iter()
            .take_while(|&&x| x == value)
            .take(max_count)
            .count();

        if run > 0 {
            self.data.drain(start..start + run);
            trace!(value, removed = run, len = self.data.len(), "erased value");
        }
        Ok(run)
    }

    /// Remove and return the value at `index`
    pub fn erase_at(&mut self, index: usize) -> Result<f64> {
        if index >= self.data.len() {
            return Err(StatsError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        let value = self.data.remove(index);
        trace!(index, value, len = self.data.len(), "erased index");
        Ok(value)
    }

    /// Remove every value; capacity is kept
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Parse and insert every token that is a finite number
    ///
    /// Tokens that do not parse as a whole, or parse to NaN/infinity, are
    /// skipped. Returns the number of values inserted.
    pub fn extend_from_tokens<'a, I>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut inserted = 0;
        let mut skipped = 0;

        for token in tokens {
            let parsed = token.trim().parse::<f64>().ok();
            match parsed.map(|value| self.insert(value)) {
                Some(Ok(_)) => inserted += 1,
                _ => skipped += 1,
            }
        }

        debug!(inserted, skipped, "bulk insert from tokens");
        inserted
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of stored values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical capacity (see type docs)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Value at `index`, bounds-checked
    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(StatsError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Sorted view of the stored values
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    /// Address of the backing allocation, or 0 if nothing is allocated
    ///
    /// For diagnostic display only. Any insert may reallocate and change it.
    pub fn data_address(&self) -> usize {
        if self.capacity == 0 {
            0
        } else {
            self.data.as_ptr() as usize
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// First index whose value is not less than `value`
    fn lower_bound(&self, value: f64) -> usize {
        self.data.partition_point(|&x| x < value)
    }

    /// Double the capacity (or seed it) when the buffer is full
    fn grow_if_needed(&mut self) {
        if self.data.len() < self.capacity {
            return;
        }

        let new_capacity = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity * 2
        };
        self.data.reserve_exact(new_capacity - self.data.len());
        debug!(old = self.capacity, new = new_capacity, "grew buffer");
        self.capacity = new_capacity;
    }
}

impl Default for SortedBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SortedBuffer {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl std::fmt::Debug for SortedBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortedBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}

impl PartialEq for SortedBuffer {
    /// Two buffers are equal when they hold the same values; capacity is
    /// not compared.
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<'a> IntoIterator for &'a SortedBuffer {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
