//! Epoch-indexed metric series.

use serde::{Deserialize, Serialize};

/// An ordered mapping from metric name to its per-epoch value series.
///
/// Keys keep insertion order, and within each series the values keep epoch
/// order (index 0 is the first epoch). For a single training run all series
/// have equal length; this is a documented convention, not an enforced
/// invariant, so logs merged from mismatched runs are tolerated.
///
/// # Example
///
/// ```
/// use nn_history::MetricLog;
///
/// let mut log = MetricLog::new();
/// log.append("loss", 0.9);
/// log.append("loss", 0.5);
///
/// assert_eq!(log.series("loss"), Some(&[0.9, 0.5][..]));
/// assert_eq!(log.num_epochs(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricLog {
    series: Vec<(String, Vec<f64>)>,
}

impl MetricLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Inserts (or replaces) a full series under the given name.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        let name = name.into();
        if let Some(entry) = self.series.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = values;
        } else {
            self.series.push((name, values));
        }
    }

    /// Appends a single value to the named series, creating it if absent.
    pub fn append(&mut self, name: &str, value: f64) {
        if let Some(entry) = self.series.iter_mut().find(|(n, _)| n == name) {
            entry.1.push(value);
        } else {
            self.series.push((name.to_string(), vec![value]));
        }
    }

    /// Extends the named series with the given values, creating it if absent.
    pub fn extend_series(&mut self, name: &str, values: &[f64]) {
        if let Some(entry) = self.series.iter_mut().find(|(n, _)| n == name) {
            entry.1.extend_from_slice(values);
        } else {
            self.series.push((name.to_string(), values.to_vec()));
        }
    }

    /// Returns the series recorded under the given name.
    #[must_use]
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Returns true if a series with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.series.iter().any(|(n, _)| n == name)
    }

    /// Iterates over metric names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates over `(name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.series.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Returns the number of metric series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if no series have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns the length of the longest series.
    ///
    /// For a well-formed single-run log every series has this length.
    #[must_use]
    pub fn num_epochs(&self) -> usize {
        self.series.iter().map(|(_, v)| v.len()).max().unwrap_or(0)
    }

    /// Merges the series of `recent` into this log, key by key.
    ///
    /// Existing keys are extended with `recent`'s values (prior epochs
    /// first); keys absent from this log are created verbatim. Keys present
    /// only in this log are untouched. No overlap detection is performed:
    /// merging the same `recent` log twice double-counts its entries.
    ///
    /// # Example
    ///
    /// ```
    /// use nn_history::MetricLog;
    ///
    /// let mut full = MetricLog::new();
    /// full.insert("loss", vec![0.9]);
    ///
    /// let mut recent = MetricLog::new();
    /// recent.insert("loss", vec![0.5, 0.4]);
    ///
    /// full.merge_from(&recent);
    /// assert_eq!(full.series("loss"), Some(&[0.9, 0.5, 0.4][..]));
    /// ```
    pub fn merge_from(&mut self, recent: &Self) {
        for (name, values) in recent.iter() {
            self.extend_series(name, values);
        }
    }
}
