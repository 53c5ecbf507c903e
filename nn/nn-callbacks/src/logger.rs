//! Periodic epoch logging.

use nn_history::EpochSnapshot;
use serde::{Deserialize, Serialize};

use crate::callback::EpochCallback;
use crate::error::{CallbackError, Result};

/// Prints loss metrics to stdout every `every` epochs.
///
/// Meant for training loops whose own per-epoch printing is disabled; the
/// logger prints the epoch index and the "loss" value, plus "mse" when that
/// metric is present. The interval is fixed at construction.
///
/// A "loss" entry is presumed to exist in every snapshot; its absence is a
/// [`CallbackError::MissingMetric`], propagated to the training loop.
///
/// # Example
///
/// ```
/// use nn_callbacks::IntervalLogger;
///
/// let logger = IntervalLogger::new(2);
/// assert!(logger.should_log(0));
/// assert!(!logger.should_log(1));
/// assert!(logger.should_log(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalLogger {
    every: usize,
}

impl IntervalLogger {
    /// Creates a logger that prints every `every` epochs.
    #[must_use]
    pub const fn new(every: usize) -> Self {
        Self { every }
    }

    /// Returns the logging interval.
    #[must_use]
    pub const fn every(&self) -> usize {
        self.every
    }

    /// Returns whether this epoch should be printed.
    #[must_use]
    pub const fn should_log(&self, epoch: usize) -> bool {
        self.every > 0 && epoch % self.every == 0
    }

    /// Formats the log line for one epoch.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackError::MissingMetric`] if the snapshot has no
    /// "loss" entry.
    pub fn format_line(epoch: usize, logs: &EpochSnapshot) -> Result<String> {
        let loss = logs
            .get("loss")
            .ok_or_else(|| CallbackError::missing_metric("loss"))?;

        let mut line = format!("Epoch: {epoch} - loss: {loss}");
        if let Some(mse) = logs.get("mse") {
            line.push_str(&format!(" - mse: {mse}"));
        }
        Ok(line)
    }
}

impl EpochCallback for IntervalLogger {
    fn on_epoch_end(&mut self, epoch: usize, logs: &EpochSnapshot) -> Result<()> {
        if self.should_log(epoch) {
            println!("{}", Self::format_line(epoch, logs)?);
        }
        Ok(())
    }
}
