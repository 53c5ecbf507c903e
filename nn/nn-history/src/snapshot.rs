//! Per-epoch metric snapshots.

use serde::{Deserialize, Serialize};

/// The metric values produced by one training epoch.
///
/// An ordered name → value mapping, handed to epoch-end observers and
/// appended to a [`FitHistory`](crate::FitHistory) one snapshot per epoch.
///
/// # Example
///
/// ```
/// use nn_history::EpochSnapshot;
///
/// let snapshot = EpochSnapshot::new()
///     .with_metric("loss", 0.42)
///     .with_metric("mse", 1.3);
///
/// assert_eq!(snapshot.get("loss"), Some(0.42));
/// assert_eq!(snapshot.get("accuracy"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpochSnapshot {
    entries: Vec<(String, f64)>,
}

impl EpochSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a metric value, replacing any previous value under the name.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a metric value, replacing any previous value under the name.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Gets a metric value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Returns true if a value exists under the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Returns the number of recorded metrics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot holds no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
