//! SVG line charts for training metric histories.
//!
//! Renders one chart per metric from a [`History`](nn_history::History):
//! x-axis is the 0-based epoch index, y-axis the value series, titled with
//! the metric name. Output is plain SVG text; displaying or saving it is
//! left to the caller's environment.
//!
//! # Rendering
//!
//! - [`plot_history`] - one [`MetricChart`] per metric key
//! - [`render_series`] - a single series to SVG
//! - [`ChartParams`] - size, padding and colors
//!
//! # Example
//!
//! ```
//! use nn_history::History;
//! use nn_plot::{ChartParams, plot_history};
//!
//! let history = History::from_json(r#"{"loss": [0.9, 0.5, 0.4]}"#)?;
//! let charts = plot_history(&history, &ChartParams::default());
//!
//! assert_eq!(charts.len(), 1);
//! assert!(charts[0].svg.contains("loss"));
//! # Ok::<(), nn_history::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod chart;
mod params;

// Re-export rendering
pub use chart::{MetricChart, plot_history, render_series};

// Re-export parameters
pub use params::ChartParams;

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{ChartParams, MetricChart, plot_history, render_series};
}
