//! History-recording callback.

use nn_history::{EpochSnapshot, FitHistory};
use serde::{Deserialize, Serialize};

use crate::callback::EpochCallback;
use crate::error::Result;

/// Accumulates every epoch's metrics into a [`FitHistory`].
///
/// Register alongside other callbacks to obtain the run's history once
/// training finishes. Snapshots are appended in epoch order; the recorder
/// does not reset between runs, so reuse across runs concatenates them.
///
/// # Example
///
/// ```
/// use nn_callbacks::{EpochCallback, HistoryRecorder};
/// use nn_history::EpochSnapshot;
///
/// let mut recorder = HistoryRecorder::new();
/// recorder.on_epoch_end(0, &EpochSnapshot::new().with_metric("loss", 0.9))?;
/// recorder.on_epoch_end(1, &EpochSnapshot::new().with_metric("loss", 0.5))?;
///
/// let history = recorder.into_history();
/// assert_eq!(history.log().series("loss"), Some(&[0.9, 0.5][..]));
/// # Ok::<(), nn_callbacks::CallbackError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecorder {
    history: FitHistory,
}

impl HistoryRecorder {
    /// Creates a recorder with an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: FitHistory::new(),
        }
    }

    /// Returns the accumulated history.
    #[must_use]
    pub const fn history(&self) -> &FitHistory {
        &self.history
    }

    /// Consumes the recorder, returning the accumulated history.
    #[must_use]
    pub fn into_history(self) -> FitHistory {
        self.history
    }
}

impl EpochCallback for HistoryRecorder {
    fn on_epoch_end(&mut self, _epoch: usize, logs: &EpochSnapshot) -> Result<()> {
        self.history.record(logs);
        Ok(())
    }
}
