//! Epoch-indexed metric logs for neural-network training runs.
//!
//! This crate provides the data model shared by the training utilities:
//!
//! # Metric Logs
//!
//! - [`MetricLog`] - ordered metric name → per-epoch value series mapping
//! - [`EpochSnapshot`] - the metric values produced by one epoch
//!
//! # Histories
//!
//! - [`FitHistory`] - the history object a training run accumulates
//! - [`History`] - either a run history or a raw mapping, normalized to one
//!   [`MetricLog`] and merged key-wise with [`History::merge_from`]
//!
//! # Example
//!
//! ```
//! use nn_history::{FitHistory, History, EpochSnapshot};
//!
//! // Full history from past runs, freshly started.
//! let mut full = History::default();
//!
//! // A new run records one snapshot per epoch.
//! let mut run = FitHistory::new();
//! run.record(&EpochSnapshot::new().with_metric("loss", 0.9));
//! run.record(&EpochSnapshot::new().with_metric("loss", 0.5));
//!
//! full.merge_from(&run);
//! assert_eq!(full.log().series("loss"), Some(&[0.9, 0.5][..]));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod history;
mod log;
mod snapshot;

// Re-export histories
pub use history::{FitHistory, History};

// Re-export metric logs
pub use log::MetricLog;
pub use snapshot::EpochSnapshot;

// Re-export error types
pub use error::{HistoryError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{EpochSnapshot, FitHistory, History, HistoryError, MetricLog};
}
