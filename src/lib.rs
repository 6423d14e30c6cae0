//! # statsarray
//!
//! A sorted numeric container with a full battery of descriptive statistics:
//! - Values kept in ascending order after every insert and erase
//! - Capacity that grows by doubling from a seed of 8
//! - Compensated summation for sums and moments
//! - Explicit minimum-size errors for every statistic
//! - A line-oriented text report and a console command layer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CLI / Shell (statsarray-cli)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ text lines
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              Protocol (Command / Response)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │            (dataset kind, RNG, file load/save)               │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐                ┌─────────────────┐
//!   │     Report      │───────────────▶│   Statistics    │
//!   │   (Summary)     │                │  (read-only)    │
//!   └─────────────────┘                └────────┬────────┘
//!                                               │
//!                                               ▼
//!                                      ┌─────────────────┐
//!                                      │  SortedBuffer   │
//!                                      │   (storage)     │
//!                                      └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use statsarray::{DatasetKind, SortedBuffer};
//!
//! let mut buffer = SortedBuffer::new();
//! for x in [5.0, 3.0, 8.0, 3.0] {
//!     buffer.insert(x).unwrap();
//! }
//! assert_eq!(buffer.as_slice(), &[3.0, 3.0, 5.0, 8.0]);
//!
//! let stats = buffer.stats();
//! assert_eq!(stats.mean().unwrap(), 4.75);
//! assert_eq!(stats.median().unwrap(), 4.0);
//! assert_eq!(stats.modes().unwrap(), vec![3.0]);
//! assert!(stats.variance(DatasetKind::Sample).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod storage;
pub mod stats;
pub mod report;
pub mod protocol;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, Result, StatsError};
pub use config::{Config, DatasetKind};
pub use storage::SortedBuffer;
pub use stats::{FrequencyEntry, Quartiles, Statistics};
pub use report::Summary;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of statsarray
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
