use arcpop_core::PopupConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PALETTE: [&str; 15] = [
    "#284B70", "#702828", "#5F7143", "#F6BC0C", "#382C6C", "#50224F", "#1D7554", "#4C4C4C",
    "#0271AE", "#706E41", "#446A73", "#0C3E69", "#757575", "#B7B7B7", "#A3A3A3",
];

/// Sizes, colors and label densities shared by all chart layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub foreground: String,
    pub axis_opacity: f64,
    pub axis_thickness: f64,
    pub palette: Vec<String>,
    pub bar_label_count: usize,
    pub column_label_count: usize,
    pub line_label_count: usize,
    pub min_bar_size: f64,
    pub bar_margin: f64,
    pub point_radius: f64,
    pub line_width: f64,
    pub tick_length: f64,
    /// How far axis lines reach past the plot area.
    pub axis_overhang: f64,
    pub slice_outline: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            font_size: 10.0,
            foreground: "#000000".to_string(),
            axis_opacity: 0.5,
            axis_thickness: 0.75,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            bar_label_count: 3,
            column_label_count: 7,
            line_label_count: 7,
            min_bar_size: 2.0,
            bar_margin: 2.0,
            point_radius: 5.0,
            line_width: 2.0,
            tick_length: 5.0,
            axis_overhang: 5.0,
            slice_outline: "#FFFFFF".to_string(),
        }
    }
}

impl ChartStyle {
    /// Applies overrides found under `chart.*`. Values of the wrong type or out of range are
    /// ignored.
    pub fn from_config(config: &PopupConfig) -> Self {
        let mut style = Self::default();
        let positive = |key: &str| config.get_f64(key).filter(|v| *v > 0.0);
        let non_negative = |key: &str| config.get_f64(key).filter(|v| *v >= 0.0);
        let count = |key: &str| {
            config
                .get_f64(key)
                .filter(|v| *v >= 1.0 && v.fract() == 0.0)
                .map(|v| v as usize)
        };

        if let Some(v) = positive("chart.width") {
            style.width = v;
        }
        if let Some(v) = positive("chart.height") {
            style.height = v;
        }
        if let Some(v) = positive("chart.fontSize") {
            style.font_size = v;
        }
        if let Some(v) = config.get_str("chart.foreground").filter(|s| !s.trim().is_empty()) {
            style.foreground = v.trim().to_string();
        }
        if let Some(v) = config
            .get_f64("chart.axisOpacity")
            .filter(|v| (0.0..=1.0).contains(v))
        {
            style.axis_opacity = v;
        }
        if let Some(v) = non_negative("chart.axisThickness") {
            style.axis_thickness = v;
        }
        if let Some(palette) = config.get("chart.palette").and_then(|v| v.as_array()) {
            let colors: Vec<String> = palette
                .iter()
                .filter_map(|c| c.as_str())
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            if colors.is_empty() {
                tracing::debug!("ignoring empty chart.palette override");
            } else {
                style.palette = colors;
            }
        }
        if let Some(v) = count("chart.barLabelCount") {
            style.bar_label_count = v;
        }
        if let Some(v) = count("chart.columnLabelCount") {
            style.column_label_count = v;
        }
        if let Some(v) = count("chart.lineLabelCount") {
            style.line_label_count = v;
        }
        if let Some(v) = non_negative("chart.minBarSize") {
            style.min_bar_size = v;
        }
        if let Some(v) = non_negative("chart.barMargin") {
            style.bar_margin = v;
        }
        if let Some(v) = non_negative("chart.pointRadius") {
            style.point_radius = v;
        }
        if let Some(v) = non_negative("chart.lineWidth") {
            style.line_width = v;
        }
        style
    }

    /// Palette color for the `index`-th series entry, cycling through the palette.
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return &self.foreground;
        }
        &self.palette[index % self.palette.len()]
    }
}
