//! Chart series types and the declarative chart specification

use serde::{Deserialize, Serialize};

/// Upper bound of the rating scale; the y-axis always ends here
pub const RATING_SCALE_MAX: f64 = 10.0;

/// Supported series kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Scatter,
}

/// A trend-line endpoint in global x coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// A plotted episode rating with its hover text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub y: f64,
    pub tooltip: String,
}

/// Per-kind series payload.
///
/// Scatter data is index-aligned to the full episode sequence: entry `i`
/// is the point at global x position `i`, `None` where the episode belongs
/// to another season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesData {
    Line(Vec<LinePoint>),
    Scatter(Vec<Option<ScatterPoint>>),
}

/// Marker shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    Circle,
}

/// Marker display hints for one series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub visible: bool,
    pub shape: MarkerShape,
    pub radius: u32,
}

impl MarkerStyle {
    /// Markers disabled (trend lines)
    pub fn hidden() -> Self {
        Self {
            visible: false,
            shape: MarkerShape::Circle,
            radius: 0,
        }
    }

    /// Small circular markers (scatter points)
    pub fn circle() -> Self {
        Self {
            visible: true,
            shape: MarkerShape::Circle,
            radius: 3,
        }
    }
}

/// One drawable series of the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub label: String,
    /// Hex color string, shared between a season's line and scatter series
    pub color: String,
    pub marker: MarkerStyle,
    /// Series-level hover text; scatter points carry their own instead
    pub tooltip: Option<String>,
    pub data: SeriesData,
}

/// Display options passed through from the render request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Start the y-axis at 0 instead of the lowest rating
    pub rating_from_zero: bool,
}

/// Declarative chart description handed to the charting layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub series: Vec<ChartSeries>,
    pub y_min: f64,
    pub y_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_styles() {
        let hidden = MarkerStyle::hidden();
        assert!(!hidden.visible);
        assert_eq!(hidden.radius, 0);

        let circle = MarkerStyle::circle();
        assert!(circle.visible);
        assert_eq!(circle.shape, MarkerShape::Circle);
        assert!(circle.radius > 0);
    }

    #[test]
    fn test_series_data_json_shape() {
        let data = SeriesData::Scatter(vec![
            None,
            Some(ScatterPoint {
                y: 8.2,
                tooltip: "S1E2".to_string(),
            }),
        ]);
        let value = serde_json::to_value(&data).unwrap();
        assert!(value["scatter"][0].is_null());
        assert_eq!(value["scatter"][1]["y"], 8.2);
    }

    #[test]
    fn test_render_options_default() {
        assert!(!RenderOptions::default().rating_from_zero);
    }
}
