//! Chart rendering parameters.

use serde::{Deserialize, Serialize};

/// Parameters for metric chart rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartParams {
    /// Width of the SVG in pixels.
    pub width: u32,
    /// Height of the SVG in pixels.
    pub height: u32,
    /// Padding between the plot area and the SVG edge in pixels.
    pub padding: u32,
    /// Stroke width for the metric line.
    pub stroke_width: f64,
    /// Color of the metric line (CSS color string).
    pub line_color: String,
    /// Color of the axes and labels.
    pub axis_color: String,
    /// Background color.
    pub background_color: String,
}

impl Default for ChartParams {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            padding: 60,
            stroke_width: 1.5,
            line_color: "#4a90d9".to_string(),
            axis_color: "#666666".to_string(),
            background_color: "#f5f5f5".to_string(),
        }
    }
}

impl ChartParams {
    /// Create params with custom colors.
    #[must_use]
    pub fn with_colors(mut self, line: &str, axis: &str) -> Self {
        self.line_color = line.to_string();
        self.axis_color = axis.to_string();
        self
    }

    /// Create params with custom size.
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_default() {
        let params = ChartParams::default();
        assert_eq!(params.width, 800);
        assert_eq!(params.height, 600);
        assert_eq!(params.padding, 60);
    }

    #[test]
    fn params_builder() {
        let params = ChartParams::default()
            .with_colors("#ff0000", "#000000")
            .with_size(1024, 768);

        assert_eq!(params.line_color, "#ff0000");
        assert_eq!(params.axis_color, "#000000");
        assert_eq!(params.width, 1024);
        assert_eq!(params.height, 768);
    }

    #[test]
    fn params_serialization() {
        let params = ChartParams::default();
        let json = serde_json::to_string(&params);
        assert!(json.is_ok());

        let parsed: Result<ChartParams, _> = serde_json::from_str(&json.unwrap_or_default());
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap_or_default(), params);
    }
}
