//! Storage Module
//!
//! Sorted, growable storage for finite real numbers.
//!
//! ## Responsibilities
//! - Keep values in ascending order after every mutation
//! - Binary-search insert and erase positions
//! - Grow capacity by doubling (seed 8), never shrink
//! - Reject non-finite values and out-of-range indexes with typed errors
//!
//! ## Layout
//! ```text
//! ┌─────┬─────┬─────┬─────┬─────┬─────────────────────┐
//! │ 1.0 │ 3.0 │ 3.0 │ 5.0 │ 8.0 │   (spare capacity)  │
//! └─────┴─────┴─────┴─────┴─────┴─────────────────────┘
//!   0     1     2     3     4    len           capacity
//! ```
//!
//! Equal values are always adjacent, so every run of equal values is a
//! contiguous slice. The statistics layer relies on this for mode detection
//! and the frequency table.

mod buffer;

pub use buffer::{SortedBuffer, INITIAL_CAPACITY};
