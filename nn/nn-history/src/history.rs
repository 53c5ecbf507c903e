//! Training-run histories and the merge operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HistoryError, Result};
use crate::log::MetricLog;
use crate::snapshot::EpochSnapshot;

/// The history object produced by a training run.
///
/// Owns a [`MetricLog`] and records one [`EpochSnapshot`] per epoch, in
/// epoch order.
///
/// # Example
///
/// ```
/// use nn_history::{EpochSnapshot, FitHistory};
///
/// let mut history = FitHistory::new();
/// history.record(&EpochSnapshot::new().with_metric("loss", 0.9));
/// history.record(&EpochSnapshot::new().with_metric("loss", 0.5));
///
/// assert_eq!(history.epochs(), 2);
/// assert_eq!(history.log().series("loss"), Some(&[0.9, 0.5][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitHistory {
    log: MetricLog,
}

impl FitHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            log: MetricLog::new(),
        }
    }

    /// Creates a history from an existing log.
    #[must_use]
    pub const fn from_log(log: MetricLog) -> Self {
        Self { log }
    }

    /// Appends one epoch's metric values to the log.
    pub fn record(&mut self, snapshot: &EpochSnapshot) {
        for (name, value) in snapshot.iter() {
            self.log.append(name, value);
        }
    }

    /// Returns the underlying metric log.
    #[must_use]
    pub const fn log(&self) -> &MetricLog {
        &self.log
    }

    /// Returns the underlying metric log mutably.
    pub const fn log_mut(&mut self) -> &mut MetricLog {
        &mut self.log
    }

    /// Consumes the history, returning its log.
    #[must_use]
    pub fn into_log(self) -> MetricLog {
        self.log
    }

    /// Returns the number of recorded epochs.
    #[must_use]
    pub fn epochs(&self) -> usize {
        self.log.num_epochs()
    }
}

/// Either a run's history object or a raw metric mapping.
///
/// The two accepted shapes for an accumulated history. Both expose the same
/// [`MetricLog`] through a single normalization, shared by merging and
/// plotting; no other shape is representable.
///
/// # Example
///
/// ```
/// use nn_history::{FitHistory, History, MetricLog};
///
/// let mut raw = MetricLog::new();
/// raw.insert("loss", vec![0.9]);
/// let mut full = History::from(raw);
///
/// let mut recent = FitHistory::new();
/// recent.log_mut().insert("loss", vec![0.5, 0.4]);
///
/// full.merge_from(&recent);
/// assert_eq!(full.log().series("loss"), Some(&[0.9, 0.5, 0.4][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum History {
    /// A history object from a prior run.
    Fit(FitHistory),
    /// A raw metric mapping, possibly empty.
    Raw(MetricLog),
}

impl Default for History {
    fn default() -> Self {
        Self::Raw(MetricLog::new())
    }
}

impl From<FitHistory> for History {
    fn from(history: FitHistory) -> Self {
        Self::Fit(history)
    }
}

impl From<MetricLog> for History {
    fn from(log: MetricLog) -> Self {
        Self::Raw(log)
    }
}

impl History {
    /// Returns the metric log, whichever variant holds it.
    #[must_use]
    pub const fn log(&self) -> &MetricLog {
        match self {
            Self::Fit(history) => history.log(),
            Self::Raw(log) => log,
        }
    }

    /// Returns the metric log mutably.
    pub const fn log_mut(&mut self) -> &mut MetricLog {
        match self {
            Self::Fit(history) => history.log_mut(),
            Self::Raw(log) => log,
        }
    }

    /// Consumes the history, returning its log.
    #[must_use]
    pub fn into_log(self) -> MetricLog {
        match self {
            Self::Fit(history) => history.into_log(),
            Self::Raw(log) => log,
        }
    }

    /// Merges a recent run's history into this accumulated history.
    ///
    /// Key-wise concatenation in place: see [`MetricLog::merge_from`] for
    /// the exact semantics, including the absence of overlap detection.
    pub fn merge_from(&mut self, recent: &FitHistory) {
        self.log_mut().merge_from(recent.log());
    }

    /// Parses a history from JSON, accepting either of the two shapes.
    ///
    /// A JSON object of the form `{"history": {name: [values]}}` is read as
    /// a run history; a plain `{name: [values]}` object is read as a raw
    /// mapping. Anything else is an [`HistoryError::InvalidShape`].
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Serialization`] for malformed JSON and
    /// [`HistoryError::InvalidShape`] for well-formed JSON of the wrong
    /// shape.
    ///
    /// # Example
    ///
    /// ```
    /// use nn_history::History;
    ///
    /// let full = History::from_json(r#"{"loss": [0.9, 0.5]}"#)?;
    /// assert_eq!(full.log().series("loss"), Some(&[0.9, 0.5][..]));
    /// # Ok::<(), nn_history::HistoryError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(object) = value else {
            return Err(HistoryError::invalid_shape(
                "expected a history object or a raw metric mapping",
            ));
        };

        if object.len() == 1 {
            if let Some(Value::Object(inner)) = object.get("history") {
                let log = log_from_object(inner)?;
                return Ok(Self::Fit(FitHistory::from_log(log)));
            }
        }

        Ok(Self::Raw(log_from_object(&object)?))
    }
}

fn log_from_object(object: &serde_json::Map<String, Value>) -> Result<MetricLog> {
    let mut log = MetricLog::new();
    for (name, value) in object {
        let Value::Array(values) = value else {
            return Err(HistoryError::invalid_shape(format!(
                "metric '{name}' is not an array"
            )));
        };

        let mut series = Vec::with_capacity(values.len());
        for entry in values {
            let Some(number) = entry.as_f64() else {
                return Err(HistoryError::invalid_shape(format!(
                    "metric '{name}' holds a non-numeric value"
                )));
            };
            series.push(number);
        }
        log.insert(name.clone(), series);
    }
    Ok(log)
}
