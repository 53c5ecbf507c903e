//! The training-loop observer contract.

use nn_history::EpochSnapshot;

use crate::error::Result;

/// Observer invoked synchronously by a training loop.
///
/// `on_epoch_end` is called once per epoch, after that epoch's computation
/// completes, with the 0-based epoch index and the metrics it produced.
/// The begin/end hooks default to no-ops; implement only what the observer
/// needs.
///
/// # Example
///
/// ```
/// use nn_callbacks::EpochCallback;
/// use nn_history::EpochSnapshot;
///
/// struct CountEpochs(usize);
///
/// impl EpochCallback for CountEpochs {
///     fn on_epoch_end(
///         &mut self,
///         _epoch: usize,
///         _logs: &EpochSnapshot,
///     ) -> nn_callbacks::Result<()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut counter = CountEpochs(0);
/// counter.on_epoch_end(0, &EpochSnapshot::new())?;
/// counter.on_epoch_end(1, &EpochSnapshot::new())?;
/// assert_eq!(counter.0, 2);
/// # Ok::<(), nn_callbacks::CallbackError>(())
/// ```
pub trait EpochCallback {
    /// Called once before the first epoch.
    ///
    /// Default: no-op.
    fn on_train_begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called at the end of every epoch with that epoch's metrics.
    fn on_epoch_end(&mut self, epoch: usize, logs: &EpochSnapshot) -> Result<()>;

    /// Called once after the last epoch.
    ///
    /// Default: no-op.
    fn on_train_end(&mut self) -> Result<()> {
        Ok(())
    }
}
