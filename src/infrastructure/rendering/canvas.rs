use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color_utils::set_hex_opacity;
use crate::domain::chart::ChartEngine;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::trading::TextMeasurer;
use crate::time_utils::format_clock;

const SERIES_COLOR: &str = "#4c6ef5";
const BACKGROUND_COLOR: &str = "#ffffff";
const AXIS_TEXT_COLOR: &str = "#666666";
const PRICE_LINE_COLOR: &str = "#333333";

/// Canvas 2D renderer. Consumes the engine's scales, interpolated series
/// and overlay layout; draws nothing it computed itself.
pub struct CanvasRenderer {
    canvas_id: String,
    width: u32,
    height: u32,
}

/// `TextMeasurer` backed by the live 2D context, so label bounds match
/// what `fill_text` will actually paint.
struct CanvasMeasurer<'a> {
    context: &'a CanvasRenderingContext2d,
}

impl TextMeasurer for CanvasMeasurer<'_> {
    fn text_width(&self, text: &str, font_px: f64) -> f64 {
        self.context.set_font(&format!("{font_px}px Arial"));
        match self.context.measure_text(text) {
            Ok(metrics) => metrics.width(),
            // Rough average glyph width when the context refuses to measure.
            Err(_) => text.chars().count() as f64 * font_px * 0.6,
        }
    }
}

impl CanvasRenderer {
    pub fn new(canvas_id: String, width: u32, height: u32) -> Self {
        Self { canvas_id, width, height }
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn get_canvas_context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(&self.canvas_id)
            .ok_or_else(|| JsValue::from_str("Canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

        canvas.set_width(self.width);
        canvas.set_height(self.height);

        let context = canvas
            .get_context("2d")
            .map_err(|_| JsValue::from_str("Failed to get 2D context"))?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))?;

        Ok((canvas, context))
    }

    /// Full frame: background, grid, series, overlays, axes. `t_ms` is the
    /// same elapsed clock the engine was stepped with, used only for the
    /// pulse animation.
    pub fn draw(&self, engine: &ChartEngine, t_ms: f64) -> Result<(), JsValue> {
        let (_canvas, context) = self.get_canvas_context()?;
        let width = self.width as f64;
        let height = self.height as f64;
        let plot_bottom = height - engine.config().axis_margin;

        context.clear_rect(0.0, 0.0, width, height);
        context.set_fill_style(&JsValue::from(BACKGROUND_COLOR));
        context.fill_rect(0.0, 0.0, width, height);

        self.draw_grid(&context, engine, plot_bottom)?;
        self.draw_series(&context, engine, plot_bottom)?;
        self.draw_expire_flag(&context, engine, plot_bottom)?;
        self.draw_trades(&context, engine)?;
        self.draw_results(&context, engine)?;
        self.draw_pulse(&context, engine, t_ms)?;
        self.draw_axes(&context, engine, plot_bottom)?;
        self.draw_price_line(&context, engine, width)?;

        Ok(())
    }

    fn draw_grid(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        plot_bottom: f64,
    ) -> Result<(), JsValue> {
        let width = self.width as f64;
        context.set_stroke_style(&JsValue::from(engine.config().grid.color.as_str()));
        context.set_line_width(0.5);

        for tick in engine.x_ticks() {
            let x = engine.x_current().scale(tick);
            context.begin_path();
            context.move_to(x, 0.0);
            context.line_to(x, plot_bottom);
            context.stroke();
        }
        for tick in engine.y_ticks() {
            let y = engine.y_current().scale(tick);
            context.begin_path();
            context.move_to(0.0, y);
            context.line_to(width, y);
            context.stroke();
        }
        Ok(())
    }

    fn draw_series(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        plot_bottom: f64,
    ) -> Result<(), JsValue> {
        let data = engine.interpolated_data();
        if data.len() < 2 {
            get_logger().warn(
                LogComponent::Infrastructure("CanvasRenderer"),
                "Nothing to draw yet: interpolated series is empty",
            );
            return Ok(());
        }

        let x = engine.x_current();
        let y = engine.y_current();

        // Filled area down to the axis, then the line on top.
        context.begin_path();
        context.move_to(x.scale(data[0].time), plot_bottom);
        for sample in data {
            context.line_to(x.scale(sample.time), y.scale(sample.value));
        }
        if let Some(last) = data.last() {
            context.line_to(x.scale(last.time), plot_bottom);
        }
        context.close_path();
        context.set_fill_style(&JsValue::from(set_hex_opacity(SERIES_COLOR, 0.15)));
        context.fill();

        context.begin_path();
        context.move_to(x.scale(data[0].time), y.scale(data[0].value));
        for sample in &data[1..] {
            context.line_to(x.scale(sample.time), y.scale(sample.value));
        }
        context.set_stroke_style(&JsValue::from(SERIES_COLOR));
        context.set_line_width(2.0);
        context.stroke();

        Ok(())
    }

    fn draw_trades(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
    ) -> Result<(), JsValue> {
        let overlay = &engine.config().overlay;
        let label = overlay.label;
        let measurer = CanvasMeasurer { context };

        for trade in engine.layout_trades(&measurer) {
            // Horizontal guide from entry to expiry.
            context.set_stroke_style(&JsValue::from(trade.color.as_str()));
            context.set_line_width(overlay.line_width);
            context.begin_path();
            context.move_to(trade.circle_x, trade.y);
            context.line_to(trade.close_x, trade.y);
            context.stroke();

            // Expiry flag pole.
            context.set_stroke_style(&JsValue::from(overlay.flag_color.as_str()));
            context.begin_path();
            context.move_to(trade.close_x, trade.y);
            context.line_to(trade.close_x, trade.y - 14.0);
            context.stroke();
            context.set_fill_style(&JsValue::from(overlay.flag_color.as_str()));
            context.begin_path();
            context.move_to(trade.close_x, trade.y - 14.0);
            context.line_to(trade.close_x + 8.0, trade.y - 11.0);
            context.line_to(trade.close_x, trade.y - 8.0);
            context.close_path();
            context.fill();

            // Two-line label, anchored where the collision pass put it.
            let line1_width = measurer.text_width(&trade.text1, label.font_size1);
            let line2_width = measurer.text_width(&trade.text2, label.font_size2);
            let box_width = line1_width.max(line2_width) + label.padding_x * 2.0;
            let box_height =
                label.font_size1 + label.font_size2 + label.line_spacing + label.padding_y * 2.0;
            context.set_fill_style(&JsValue::from(trade.color.as_str()));
            rounded_rect(context, trade.label_x, trade.y, box_width, box_height, 5.0)?;
            context.fill();

            context.set_fill_style(&JsValue::from("#ffffff"));
            context.set_text_align("left");
            context.set_font(&format!("{}px Arial", label.font_size1));
            context.fill_text(
                &trade.text1,
                trade.label_x + label.padding_x,
                trade.y + label.padding_y + label.font_size1,
            )?;
            context.set_font(&format!("{}px Arial", label.font_size2));
            context.fill_text(
                &trade.text2,
                trade.label_x + label.padding_x,
                trade.y + label.padding_y + label.font_size1 + label.line_spacing
                    + label.font_size2,
            )?;

            // Entry marker on top of everything.
            context.set_fill_style(&JsValue::from(overlay.circle_fill.as_str()));
            context.set_stroke_style(&JsValue::from(trade.color.as_str()));
            context.begin_path();
            context.arc(trade.circle_x, trade.y, overlay.circle_radius, 0.0, std::f64::consts::TAU)?;
            context.fill();
            context.stroke();
        }
        Ok(())
    }

    fn draw_results(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
    ) -> Result<(), JsValue> {
        let label = engine.config().overlay.result_label;
        let measurer = CanvasMeasurer { context };

        for result in engine.layout_results(&measurer) {
            context.set_fill_style(&JsValue::from(result.color.as_str()));
            context.begin_path();
            context.arc(result.x, result.y, label.circle_radius, 0.0, std::f64::consts::TAU)?;
            context.fill();

            rounded_rect(
                context,
                result.label_x,
                result.label_y,
                result.width,
                result.height,
                label.border_radius,
            )?;
            context.fill();

            context.set_fill_style(&JsValue::from("#ffffff"));
            context.set_text_align("center");
            context.set_font(&format!("{}px Arial", label.font_size));
            context.fill_text(
                &result.text,
                result.label_x + result.width / 2.0,
                result.label_y + label.padding_y + label.font_size - 2.0,
            )?;
        }
        Ok(())
    }

    /// Breathing marker on the newest interpolated point, one cycle per
    /// second.
    fn draw_pulse(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        t_ms: f64,
    ) -> Result<(), JsValue> {
        let Some(last) = engine.interpolated_data().last() else {
            return Ok(());
        };
        let x = engine.x_current().scale(last.time);
        let y = engine.y_current().scale(last.value);
        let phase = (t_ms % 1000.0) / 1000.0;

        context.set_fill_style(&JsValue::from(set_hex_opacity(SERIES_COLOR, 1.0 - phase)));
        context.begin_path();
        context.arc(x, y, 3.0 + 6.0 * phase, 0.0, std::f64::consts::TAU)?;
        context.fill();

        context.set_fill_style(&JsValue::from(SERIES_COLOR));
        context.begin_path();
        context.arc(x, y, 3.0, 0.0, std::f64::consts::TAU)?;
        context.fill();
        Ok(())
    }

    /// Dashed marker ahead of the newest point showing where a trade
    /// opened now would expire.
    fn draw_expire_flag(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        plot_bottom: f64,
    ) -> Result<(), JsValue> {
        let Some(last) = engine.interpolated_data().last() else {
            return Ok(());
        };
        let flag_color = engine.config().overlay.flag_color.clone();
        let x = engine.x_current().scale(last.time + engine.config().expire_offset);

        let dash = Array::of2(&JsValue::from_f64(4.0), &JsValue::from_f64(4.0));
        context.set_line_dash(&dash)?;
        context.set_stroke_style(&JsValue::from(flag_color.as_str()));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(x, 0.0);
        context.line_to(x, plot_bottom);
        context.stroke();
        context.set_line_dash(&Array::new())?;

        context.set_fill_style(&JsValue::from(flag_color.as_str()));
        context.begin_path();
        context.move_to(x, 6.0);
        context.line_to(x + 10.0, 10.0);
        context.line_to(x, 14.0);
        context.close_path();
        context.fill();
        Ok(())
    }

    fn draw_axes(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        plot_bottom: f64,
    ) -> Result<(), JsValue> {
        let width = self.width as f64;
        let start = engine.start_timestamp_ms();

        context.set_fill_style(&JsValue::from(AXIS_TEXT_COLOR));
        context.set_font("12px Arial");
        context.set_text_align("center");
        for tick in engine.x_ticks() {
            let x = engine.x_current().scale(tick);
            context.fill_text(&format_clock(start + tick * 1000.0), x, plot_bottom + 18.0)?;
        }

        context.set_text_align("right");
        for tick in engine.y_ticks() {
            let y = engine.y_current().scale(tick);
            context.fill_text(
                &format!("{tick:.2}"),
                width - engine.config().label_margin,
                y - 3.0,
            )?;
        }
        Ok(())
    }

    fn draw_price_line(
        &self,
        context: &CanvasRenderingContext2d,
        engine: &ChartEngine,
        width: f64,
    ) -> Result<(), JsValue> {
        let Some(price) = engine.last_price() else {
            return Ok(());
        };
        let y = engine.y_current().scale(price);

        context.set_stroke_style(&JsValue::from(PRICE_LINE_COLOR));
        context.set_line_width(1.0);
        context.begin_path();
        context.move_to(0.0, y);
        context.line_to(width, y);
        context.stroke();

        let text = format!("{price:.2}");
        let measurer = CanvasMeasurer { context };
        let text_width = measurer.text_width(&text, 12.0);
        let box_width = text_width + 12.0;
        let box_height = 18.0;

        context.set_fill_style(&JsValue::from(PRICE_LINE_COLOR));
        rounded_rect(context, width - box_width, y - box_height / 2.0, box_width, box_height, 4.0)?;
        context.fill();

        context.set_fill_style(&JsValue::from("#ffffff"));
        context.set_text_align("right");
        context.set_font("12px Arial");
        context.fill_text(&text, width - 6.0, y + 4.0)?;
        Ok(())
    }
}

fn rounded_rect(
    context: &CanvasRenderingContext2d,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
) -> Result<(), JsValue> {
    let r = radius.min(width / 2.0).min(height / 2.0);
    context.begin_path();
    context.move_to(x + r, y);
    context.arc_to(x + width, y, x + width, y + height, r)?;
    context.arc_to(x + width, y + height, x, y + height, r)?;
    context.arc_to(x, y + height, x, y, r)?;
    context.arc_to(x, y, x + width, y, r)?;
    context.close_path();
    Ok(())
}
