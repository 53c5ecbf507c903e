//! Training-loop observers for neural-network training runs.
//!
//! This crate provides the observer contract a training loop drives and two
//! ready-made observers:
//!
//! # Observer Contract
//!
//! - [`EpochCallback`] - epoch-end notification with default begin/end hooks
//!
//! # Observers
//!
//! - [`IntervalLogger`] - prints loss metrics every N epochs
//! - [`HistoryRecorder`] - accumulates every epoch into a
//!   [`FitHistory`](nn_history::FitHistory)
//!
//! # Example
//!
//! ```
//! use nn_callbacks::{EpochCallback, IntervalLogger};
//! use nn_history::EpochSnapshot;
//!
//! // Print every 10th epoch; the training loop's own printing stays off.
//! let mut logger = IntervalLogger::new(10);
//!
//! let logs = EpochSnapshot::new().with_metric("loss", 0.42);
//! logger.on_epoch_end(0, &logs)?;
//! # Ok::<(), nn_callbacks::CallbackError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod callback;
mod error;
mod logger;
mod recorder;

// Re-export the observer contract
pub use callback::EpochCallback;

// Re-export observers
pub use logger::IntervalLogger;
pub use recorder::HistoryRecorder;

// Re-export error types
pub use error::{CallbackError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{CallbackError, EpochCallback, HistoryRecorder, IntervalLogger};
}
