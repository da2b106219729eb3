use crate::color_utils::set_hex_opacity;
use crate::domain::chart::scale::LinearScale;
use crate::domain::config::OverlayOptions;
use crate::time_utils::format_duration;

use super::entities::{Trade, TradeResult, TradeSide};

/// Text measurement collaborator. The canvas context implements this in
/// production; tests plug in a fixed-width stub.
pub trait TextMeasurer {
    /// Rendered width of `text` at `font_px` pixels.
    fn text_width(&self, text: &str, font_px: f64) -> f64;
}

/// A candidate or placed label rectangle, scoped to one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBound {
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBound {
    pub fn new(x1: f64, y1: f64, width: f64, height: f64) -> Self {
        Self { x1, y1, width, height }
    }

    pub fn x2(&self) -> f64 {
        self.x1 + self.width
    }

    pub fn y2(&self) -> f64 {
        self.y1 + self.height
    }
}

/// Axis-aligned rectangle overlap: true iff the projections overlap on
/// both axes.
pub fn rect_overlap(a: &LabelBound, b: &LabelBound) -> bool {
    let no_horizontal = a.x1 + a.width <= b.x1 || b.x1 + b.width <= a.x1;
    let no_vertical = a.y1 + a.height <= b.y1 || b.y1 + b.height <= a.y1;
    !(no_horizontal || no_vertical)
}

/// Collision strategy seam: given a candidate and everything placed so far
/// this frame, produce the final bound.
pub trait LabelPlacement {
    fn place(&self, candidate: LabelBound, placed: &[LabelBound]) -> LabelBound;
}

/// The reference behavior: on the first overlap in placement order, shift
/// the candidate left by the overlapped bound's width plus the marker
/// diameter plus a 10px gap, and accept the result without re-checking the
/// remaining bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftLeftOnce {
    pub circle_radius: f64,
}

impl LabelPlacement for ShiftLeftOnce {
    fn place(&self, mut candidate: LabelBound, placed: &[LabelBound]) -> LabelBound {
        for bound in placed {
            if rect_overlap(&candidate, bound) {
                candidate.x1 -= bound.width + self.circle_radius * 2.0 + 10.0;
                break;
            }
        }
        candidate
    }
}

/// Everything a renderer needs to draw one trade, pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDrawData {
    pub circle_x: f64,
    pub label_x: f64,
    pub close_x: f64,
    pub y: f64,
    pub color: String,
    pub text1: String,
    pub text2: String,
}

/// Draw geometry for one settled result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDrawData {
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub color: String,
}

/// Pure layout pass over the trade overlay. Processes trades in insertion
/// order, resolves label collisions through `placement` and emits the
/// draw-time geometry; no drawing happens here.
pub fn layout_trades(
    trades: &[Trade],
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    measurer: &dyn TextMeasurer,
    options: &OverlayOptions,
    placement: &dyn LabelPlacement,
    now_ms: f64,
) -> Vec<TradeDrawData> {
    let mut bounds: Vec<LabelBound> = Vec::with_capacity(trades.len());
    let mut draw_data = Vec::with_capacity(trades.len());

    for trade in trades {
        let base_color = match trade.side {
            TradeSide::Up => &options.up_color,
            TradeSide::Down => &options.down_color,
        };
        let color = set_hex_opacity(base_color, 0.75);

        let x1 = x_scale.scale(trade.open_time);
        let x2 = x_scale.scale(trade.close_time);
        let y = y_scale.scale(trade.price);

        let text1 = format!("{} {}$", trade.side.arrow(), trade.amount);
        let remaining_ms = (trade.close_time + 1.0) * 1000.0 - now_ms;
        let text2 = format_duration(remaining_ms);

        let candidate = label_bounds(measurer, &options.label, x1, y, &text1, &text2);
        let bound = placement.place(candidate, &bounds);

        bounds.push(bound);
        draw_data.push(TradeDrawData {
            circle_x: x1,
            label_x: bound.x1,
            close_x: x2,
            y,
            color,
            text1,
            text2,
        });
    }

    draw_data
}

/// Result labels are centered above their own marker; results are sparse
/// and short-lived, so no collision avoidance is applied.
pub fn layout_results(
    results: impl Iterator<Item = impl std::borrow::Borrow<TradeResult>>,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    measurer: &dyn TextMeasurer,
    options: &OverlayOptions,
) -> Vec<ResultDrawData> {
    let label = options.result_label;
    results
        .map(|result| {
            let result = result.borrow();
            let x = x_scale.scale(result.time);
            let y = y_scale.scale(result.price);
            let text = format!("+{}$", result.reward);
            let text_width = measurer.text_width(&text, label.font_size);
            let width = text_width + label.padding_x * 2.0;
            let height = label.font_size + label.padding_y * 2.0;
            ResultDrawData {
                x,
                y,
                label_x: x - width / 2.0,
                label_y: y - height - 10.0,
                width,
                height,
                text,
                color: result.color.clone(),
            }
        })
        .collect()
}

/// Candidate bound for the two-line trade label, anchored at the marker.
fn label_bounds(
    measurer: &dyn TextMeasurer,
    label: &crate::domain::config::LabelOptions,
    x: f64,
    y: f64,
    line1: &str,
    line2: &str,
) -> LabelBound {
    let line1_width = measurer.text_width(line1, label.font_size1);
    let line2_width = measurer.text_width(line2, label.font_size2);
    let text_width = line1_width.max(line2_width);
    let width = text_width + label.padding_x * 2.0;
    let height = label.font_size1 + label.font_size2 + label.line_spacing + label.padding_y * 2.0;
    LabelBound::new(x, y, width, height)
}
