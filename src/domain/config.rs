use serde::Deserialize;

/// Grid cell sizing in pixels plus line color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub cell_min_width: u32,
    pub cell_max_width: u32,
    pub color: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self { cell_min_width: 70, cell_max_width: 80, color: "#a4a4a4".to_string() }
    }
}

/// Text metrics for the two-line trade label.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub padding_x: f64,
    pub padding_y: f64,
    pub line_spacing: f64,
    pub font_size1: f64,
    pub font_size2: f64,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self { padding_x: 10.0, padding_y: 7.0, line_spacing: 5.0, font_size1: 12.0, font_size2: 8.0 }
    }
}

/// Single-line result label metrics.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResultLabelOptions {
    pub padding_x: f64,
    pub padding_y: f64,
    pub font_size: f64,
    pub border_radius: f64,
    pub circle_radius: f64,
}

impl Default for ResultLabelOptions {
    fn default() -> Self {
        Self { padding_x: 7.0, padding_y: 5.0, font_size: 12.0, border_radius: 5.0, circle_radius: 4.0 }
    }
}

/// Colors and geometry for the trade overlay.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    pub up_color: String,
    pub down_color: String,
    pub flag_color: String,
    pub circle_fill: String,
    pub circle_radius: f64,
    pub line_width: f64,
    pub label: LabelOptions,
    pub result_label: ResultLabelOptions,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            up_color: "#008000".to_string(),
            down_color: "#ff0000".to_string(),
            flag_color: "gold".to_string(),
            circle_fill: "white".to_string(),
            circle_radius: 3.0,
            line_width: 1.0,
            label: LabelOptions::default(),
            result_label: ResultLabelOptions::default(),
        }
    }
}

/// Engine configuration. Everything is overridable from JSON through the
/// wasm facade; the defaults reproduce the reference chart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Wall-clock interval between committed samples, in milliseconds.
    pub sampling_period_ms: f64,
    /// Synthetic back-dated samples generated at startup.
    pub seed_samples: usize,
    /// Trailing-window offset keeping "now" inside the viewport, in seconds.
    pub autoscroll_offset: f64,
    /// Ordered visible-duration choices, ascending, in seconds.
    pub levels: Vec<f64>,
    /// Index into `levels` selected at startup.
    pub initial_level: usize,
    /// Fixed y (price) domain.
    pub y_domain: [f64; 2],
    /// Pixels reserved below the plot for the time axis.
    pub axis_margin: f64,
    /// Right-edge margin for y-axis labels.
    pub label_margin: f64,
    /// How long a settled result stays on screen, in milliseconds.
    pub result_display_ms: f64,
    /// Expire flag lead ahead of the newest point, in seconds.
    pub expire_offset: f64,
    pub grid: GridOptions,
    pub overlay: OverlayOptions,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            sampling_period_ms: 500.0,
            seed_samples: 2000,
            autoscroll_offset: 200.0,
            levels: (0..200).map(|i| ((i + 5) * 10) as f64).collect(),
            initial_level: 4,
            y_domain: [61090.0, 61105.0],
            axis_margin: 30.0,
            label_margin: 10.0,
            result_display_ms: 3000.0,
            expire_offset: 30.0,
            grid: GridOptions::default(),
            overlay: OverlayOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_are_ascending_decades() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.levels.len(), 200);
        assert_eq!(cfg.levels[0], 50.0);
        assert_eq!(cfg.levels[4], 90.0);
        assert!(cfg.levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn partial_json_overrides_keep_defaults() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{"sampling_period_ms": 250.0, "initial_level": 0}"#).unwrap();
        assert_eq!(cfg.sampling_period_ms, 250.0);
        assert_eq!(cfg.initial_level, 0);
        assert_eq!(cfg.grid.cell_min_width, 70);
        assert_eq!(cfg.y_domain, [61090.0, 61105.0]);
    }
}
