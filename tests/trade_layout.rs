use line_chart_wasm::domain::chart::LinearScale;
use line_chart_wasm::domain::config::OverlayOptions;
use line_chart_wasm::domain::trading::{
    ShiftLeftOnce, TextMeasurer, Trade, TradeSide, layout_trades,
};

/// Fixed 6px glyphs so expected label widths are easy to compute by hand.
struct FixedWidth;

impl TextMeasurer for FixedWidth {
    fn text_width(&self, text: &str, _font_px: f64) -> f64 {
        text.chars().count() as f64 * 6.0
    }
}

fn trade(id: &str, side: TradeSide) -> Trade {
    Trade {
        id: id.to_string(),
        open_time: 10.0,
        close_time: 30.0,
        price: 61101.0,
        side,
        amount: 5.0,
    }
}

fn scales() -> (LinearScale, LinearScale) {
    (
        LinearScale::new([0.0, 90.0], [0.0, 900.0]),
        LinearScale::new([61090.0, 61105.0], [570.0, 0.0]),
    )
}

#[test]
fn label_text_and_colors() {
    let (x, y) = scales();
    let options = OverlayOptions::default();
    let placement = ShiftLeftOnce { circle_radius: options.circle_radius };
    let trades = [trade("a", TradeSide::Up), trade("b", TradeSide::Down)];

    let laid = layout_trades(&trades, &x, &y, &FixedWidth, &options, &placement, 0.0);
    assert_eq!(laid[0].text1, "\u{25b2} 5$");
    assert_eq!(laid[1].text1, "\u{25bc} 5$");
    // Countdown runs to one second past close: (30 + 1)s.
    assert_eq!(laid[0].text2, "00:31");
    assert_eq!(laid[0].color, "#008000bf");
    assert_eq!(laid[1].color, "#ff0000bf");
}

#[test]
fn geometry_comes_from_the_scales() {
    let (x, y) = scales();
    let options = OverlayOptions::default();
    let placement = ShiftLeftOnce { circle_radius: options.circle_radius };
    let trades = [trade("a", TradeSide::Up)];

    let laid = layout_trades(&trades, &x, &y, &FixedWidth, &options, &placement, 0.0);
    assert_eq!(laid[0].circle_x, 100.0);
    assert_eq!(laid[0].close_x, 300.0);
    assert_eq!(laid[0].y, y.scale(61101.0));
    // No collision: the label stays anchored at the marker.
    assert_eq!(laid[0].label_x, 100.0);
}

#[test]
fn colliding_label_shifts_left_once() {
    let (x, y) = scales();
    let options = OverlayOptions::default();
    let placement = ShiftLeftOnce { circle_radius: options.circle_radius };
    let trades = [
        trade("a", TradeSide::Up),
        trade("b", TradeSide::Up),
        trade("c", TradeSide::Up),
    ];

    let laid = layout_trades(&trades, &x, &y, &FixedWidth, &options, &placement, 0.0);
    // Widest line is "00:31" (5 glyphs * 6px) plus 2 * 10px padding.
    let bound_width = 50.0;
    let shift = bound_width + options.circle_radius * 2.0 + 10.0;
    assert_eq!(laid[0].label_x, 100.0);
    assert_eq!(laid[1].label_x, 100.0 - shift);
    // One shift per label: the third resolves against the first overlap
    // it finds and stops, even though it now covers the second.
    assert_eq!(laid[2].label_x, 100.0 - shift);
}

#[test]
fn countdown_clamps_after_close() {
    let (x, y) = scales();
    let options = OverlayOptions::default();
    let placement = ShiftLeftOnce { circle_radius: options.circle_radius };
    let trades = [trade("a", TradeSide::Up)];

    let laid = layout_trades(&trades, &x, &y, &FixedWidth, &options, &placement, 60_000.0);
    assert_eq!(laid[0].text2, "00:00");
}
