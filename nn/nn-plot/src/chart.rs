//! SVG line chart rendering for metric series.

use std::fmt::Write;

use nn_history::History;
use serde::{Deserialize, Serialize};

use crate::params::ChartParams;

/// One rendered chart for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricChart {
    /// The metric name the chart is titled with.
    pub metric: String,
    /// Number of plotted points (the metric's epoch count).
    pub points: usize,
    /// The rendered SVG document.
    pub svg: String,
}

/// Renders one line chart per metric in the history.
///
/// Charts are produced in the mapping's iteration order, one per key,
/// independent of each other. The x-axis is the 0-based epoch index; the
/// y-axis is the value series; the chart is titled with the key.
///
/// # Example
///
/// ```
/// use nn_history::History;
/// use nn_plot::{ChartParams, plot_history};
///
/// let history = History::from_json(r#"{"loss": [0.9, 0.5], "mse": [1.2, 1.1]}"#)?;
/// let charts = plot_history(&history, &ChartParams::default());
///
/// assert_eq!(charts.len(), 2);
/// assert_eq!(charts[0].metric, "loss");
/// assert!(charts[0].svg.contains("<svg"));
/// # Ok::<(), nn_history::HistoryError>(())
/// ```
#[must_use]
pub fn plot_history(history: &History, params: &ChartParams) -> Vec<MetricChart> {
    history
        .log()
        .iter()
        .map(|(name, values)| MetricChart {
            metric: name.to_string(),
            points: values.len(),
            svg: render_series(name, values, params),
        })
        .collect()
}

/// Renders a single metric series as an SVG line chart.
///
/// # Arguments
///
/// * `name` - The metric name, used as the chart title
/// * `values` - One value per epoch, in epoch order
/// * `params` - Rendering parameters
///
/// # Returns
///
/// A string containing the SVG content.
///
/// # Example
///
/// ```
/// use nn_plot::{ChartParams, render_series};
///
/// let svg = render_series("loss", &[0.9, 0.5, 0.4], &ChartParams::default());
/// assert!(svg.contains("<svg"));
/// assert!(svg.contains("loss"));
/// assert!(svg.contains("Epoch"));
/// assert!(svg.contains("Value"));
/// ```
#[must_use]
pub fn render_series(name: &str, values: &[f64], params: &ChartParams) -> String {
    if values.is_empty() {
        return format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n\
  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n\
  <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" fill=\"#999\">No data for {}</text>\n\
</svg>",
            params.width, params.height, params.width, params.height, params.background_color, name
        );
    }

    // Value bounds; a flat series still gets a visible band.
    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < 1e-12 {
        min -= 0.5;
        max += 0.5;
    }
    let range = max - min;

    let padding = f64::from(params.padding);
    let available_width = 2.0f64.mul_add(-padding, f64::from(params.width));
    let available_height = 2.0f64.mul_add(-padding, f64::from(params.height));

    let x_at = |epoch: usize| -> f64 {
        if values.len() > 1 {
            #[allow(clippy::cast_precision_loss)]
            let fraction = epoch as f64 / (values.len() - 1) as f64;
            fraction.mul_add(available_width, padding)
        } else {
            available_width.mul_add(0.5, padding)
        }
    };
    let y_at = |value: f64| -> f64 { ((max - value) / range).mul_add(available_height, padding) };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  <rect width="100%" height="100%" fill="{}"/>
"#,
        params.width, params.height, params.width, params.height, params.background_color,
    );

    // Axes: left for values, bottom for epochs.
    let _ = writeln!(
        svg,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
        padding,
        padding,
        padding,
        padding + available_height,
        params.axis_color
    );
    let _ = writeln!(
        svg,
        r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
        padding,
        padding + available_height,
        padding + available_width,
        padding + available_height,
        params.axis_color
    );

    // The series itself: a path for a real line, a dot for a single epoch.
    if values.len() > 1 {
        let mut path = String::new();
        for (epoch, &value) in values.iter().enumerate() {
            if epoch == 0 {
                let _ = write!(path, "M {:.4} {:.4}", x_at(epoch), y_at(value));
            } else {
                let _ = write!(path, " L {:.4} {:.4}", x_at(epoch), y_at(value));
            }
        }
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{:.2}"/>"#,
            path, params.line_color, params.stroke_width
        );
    } else {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.4}" cy="{:.4}" r="3" fill="{}"/>"#,
            x_at(0),
            y_at(values[0]),
            params.line_color
        );
    }

    // Title and axis labels.
    let _ = writeln!(
        svg,
        "  <text x=\"50%\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"monospace\" \
         font-size=\"14\" fill=\"{}\">{}</text>",
        padding / 2.0,
        params.axis_color,
        name
    );
    let _ = writeln!(
        svg,
        "  <text x=\"50%\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"monospace\" \
         font-size=\"12\" fill=\"{}\">Epoch</text>",
        f64::from(params.height) - padding / 3.0,
        params.axis_color
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"50%\" text-anchor=\"middle\" font-family=\"monospace\" \
         font-size=\"12\" fill=\"{}\" transform=\"rotate(-90 {:.2} {:.2})\">Value</text>",
        padding / 3.0,
        params.axis_color,
        padding / 3.0,
        f64::from(params.height) / 2.0
    );

    // Bounds as tick labels: value range on the left, epoch range below.
    let _ = writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-family=\"monospace\" \
         font-size=\"10\" fill=\"{}\">{:.4}</text>",
        padding - 4.0,
        padding + 4.0,
        params.axis_color,
        max
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-family=\"monospace\" \
         font-size=\"10\" fill=\"{}\">{:.4}</text>",
        padding - 4.0,
        padding + available_height,
        params.axis_color,
        min
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"monospace\" \
         font-size=\"10\" fill=\"{}\">0</text>",
        padding,
        padding + available_height + 14.0,
        params.axis_color
    );
    let _ = writeln!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"monospace\" \
         font-size=\"10\" fill=\"{}\">{}</text>",
        padding + available_width,
        padding + available_height + 14.0,
        params.axis_color,
        values.len() - 1
    );

    svg.push_str("</svg>");

    svg
}
