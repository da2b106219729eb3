use crate::domain::config::ChartConfig;
use crate::domain::errors::ChartResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market_data::{PriceFeed, Sample, SampleBuffer};
use crate::domain::trading::{
    ResultDrawData, ShiftLeftOnce, TextMeasurer, Trade, TradeBook, TradeDrawData, TradeResult,
    TradeSide, layout_results, layout_trades,
};

use super::animation::AnimationClock;
use super::scale::{LinearScale, ScaleSet, ZoomTransform, aligned_ticks, nice_ticks};
use super::zoom::{ZoomController, ZoomDirection, cell_duration};

/// Host request to open a trade. Times are wall-clock epoch millis; the
/// entry price and open time are snapped from the interpolated series.
#[derive(Debug, Clone)]
pub struct TradeRequest {
    pub id: String,
    pub side: TradeSide,
    pub amount: f64,
    pub close_time_ms: f64,
}

/// Host request to settle a trade.
#[derive(Debug, Clone)]
pub struct ResultRequest {
    pub id: String,
    pub side: TradeSide,
    pub reward: f64,
    pub open_price: f64,
    pub close_time_ms: f64,
}

/// The viewport and animation engine.
///
/// All state lives here, owned by the host and mutated only inside the
/// ordered per-frame pass (`on_frame`) plus the between-frame event
/// handlers (resize, wheel, trade ops). No ambient statics.
pub struct ChartEngine {
    config: ChartConfig,
    scales: ScaleSet,
    zoom: ZoomController,
    clock: AnimationClock,
    samples: SampleBuffer,
    interpolated: Vec<Sample>,
    book: TradeBook,
    feed: Box<dyn PriceFeed>,
    autoscroll: bool,
    width: f64,
    height: f64,
    cell_duration: f64,
    start_timestamp_ms: f64,
    last_frame_ms: f64,
}

impl ChartEngine {
    pub fn new(
        width: f64,
        height: f64,
        start_timestamp_ms: f64,
        config: ChartConfig,
        feed: Box<dyn PriceFeed>,
    ) -> ChartResult<Self> {
        let zoom = ZoomController::new(config.levels.clone(), config.initial_level)?;
        let display_duration = zoom.display_duration();
        let scales =
            ScaleSet::init(width, height, display_duration, config.y_domain, config.axis_margin);
        let cell = cell_duration(display_duration, width as u32, &config.grid);
        Ok(Self {
            clock: AnimationClock::new(config.sampling_period_ms),
            book: TradeBook::new(config.result_display_ms),
            samples: SampleBuffer::new(),
            interpolated: Vec::new(),
            autoscroll: false,
            cell_duration: cell,
            start_timestamp_ms,
            last_frame_ms: 0.0,
            config,
            scales,
            zoom,
            feed,
            width,
            height,
        })
    }

    /// Pre-populate the buffer with back-dated samples one period apart,
    /// ending at time 0, so the viewport is non-empty at start.
    pub fn seed_history(&mut self) {
        let n = self.config.seed_samples;
        let period_s = self.config.sampling_period_ms / 1000.0;
        for i in (0..=n).rev() {
            let time = if i == 0 { 0.0 } else { -(period_s * i as f64) };
            let sample = self.feed.next_sample(time);
            self.samples.push(sample);
        }
        let last_time = self.samples.latest().map(|s| s.time).unwrap_or(0.0);
        self.clock.set_last_sample_time_ms(last_time * 1000.0);
        get_logger().info(
            LogComponent::Domain("Engine"),
            &format!("Seeded {} samples", self.samples.len()),
        );
    }

    /// The ordered per-frame pass. `t_ms` is elapsed milliseconds since
    /// chart start, as reported by the frame driver.
    pub fn on_frame(&mut self, t_ms: f64) {
        self.last_frame_ms = t_ms;
        self.clock.update_fraction(t_ms);
        self.scroll(t_ms);
        self.admit_sample(t_ms);
        if let Some(data) = self.clock.interpolate(self.samples.samples()) {
            self.interpolated = data;
        }
        self.book.purge_expired(t_ms);
        // Current y tracks origin; only x carries a zoom transform.
        self.scales.set_y_current(self.scales.y_origin().clone());
    }

    /// Synchronous recompute without admitting a sample, for hosts that
    /// changed the domain manually and need fresh scales/layout now.
    pub fn recompute(&mut self) {
        self.scroll(self.last_frame_ms);
        if let Some(data) = self.clock.interpolate(self.samples.samples()) {
            self.interpolated = data;
        }
        self.scales.set_y_current(self.scales.y_origin().clone());
    }

    fn scroll(&mut self, t_ms: f64) {
        if self.autoscroll {
            let t_s = t_ms / 1000.0;
            let offset = self.config.autoscroll_offset;
            let duration = self.zoom.display_duration();
            self.scales.x_origin_mut().set_domain([t_s - offset, t_s + duration - offset]);
        }
        // Zoom transforms are stateful; re-derive the current scale every
        // frame even when autoscroll left the domain alone.
        let rescaled = self.zoom.transform().rescale_x(self.scales.x_origin());
        self.scales.set_x_current(rescaled);
    }

    fn admit_sample(&mut self, t_ms: f64) {
        if !self.clock.should_admit(t_ms) {
            return;
        }
        let t_s = t_ms / 1000.0;
        let sample = self.feed.next_sample(t_s);
        self.clock.admit(t_ms);
        self.samples.push(sample);
    }

    /// Wheel/gesture input: the delta's sign picks the step direction
    /// (positive = finer) and the transform snapshot contributes only its
    /// translation. Returns whether the level actually changed.
    pub fn handle_wheel(&mut self, delta: f64, translate_x: f64, translate_y: f64) -> bool {
        let Some(direction) = ZoomDirection::from_delta(delta) else {
            return false;
        };
        if !self.zoom.step(direction) {
            return false;
        }
        self.apply_level_change(translate_x, translate_y);
        get_logger().debug(
            LogComponent::Domain("Zoom"),
            &format!(
                "Level {} ({}s visible)",
                self.zoom.level_index(),
                self.zoom.display_duration()
            ),
        );
        true
    }

    /// Jump to an explicit level; out-of-range indices are reported.
    pub fn set_level(&mut self, index: usize) -> ChartResult<()> {
        self.zoom.set_level(index)?;
        let translation = self.zoom.transform();
        self.apply_level_change(translation.x, translation.y);
        Ok(())
    }

    fn apply_level_change(&mut self, translate_x: f64, translate_y: f64) {
        let duration = self.zoom.display_duration();
        self.cell_duration = cell_duration(duration, self.width as u32, &self.config.grid);
        self.scales.x_origin_mut().set_domain([0.0, duration]);
        self.zoom.set_transform(ZoomTransform::translated(translate_x, translate_y));
        let rescaled = self.zoom.transform().rescale_x(self.scales.x_origin());
        self.scales.set_x_current(rescaled);
    }

    /// Viewport resize: ranges change, domains stay.
    pub fn handle_resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.scales.x_origin_mut().set_range([0.0, width]);
        self.scales.y_origin_mut().set_range([height - self.config.axis_margin, 0.0]);
        let rescaled = self.zoom.transform().rescale_x(self.scales.x_origin());
        self.scales.set_x_current(rescaled);
        self.scales.set_y_current(self.scales.y_origin().clone());
        self.cell_duration =
            cell_duration(self.zoom.display_duration(), width as u32, &self.config.grid);
    }

    pub fn set_autoscroll(&mut self, on: bool) {
        self.autoscroll = on;
    }

    /// Open a trade at the current interpolated point. Skips silently
    /// while no data exists; reports malformed ids.
    pub fn add_trade(&mut self, request: TradeRequest) -> ChartResult<()> {
        let Some(last) = self.interpolated.last().copied() else {
            return Ok(());
        };
        let close_time = (request.close_time_ms - self.start_timestamp_ms) / 1000.0;
        self.book.add_trade(Trade {
            id: request.id,
            open_time: last.time,
            close_time,
            price: last.value,
            side: request.side,
            amount: request.amount,
        })?;
        Ok(())
    }

    /// Settle a trade: the result replaces it immediately and expires
    /// after the configured display duration. Reward is paid only when
    /// the market moved in the trade's direction.
    pub fn add_result(&mut self, request: ResultRequest) {
        let Some(last) = self.interpolated.last().copied() else {
            return;
        };
        let price = last.value;
        let time = (request.close_time_ms - self.start_timestamp_ms) / 1000.0;

        let won = (request.open_price > price && request.side == TradeSide::Down)
            || (request.open_price < price && request.side == TradeSide::Up);
        let (reward, color) = if won {
            (request.reward, "green".to_string())
        } else {
            (0.0, "red".to_string())
        };

        self.book.add_result(
            TradeResult { id: request.id, side: request.side, reward, time, price, color },
            self.last_frame_ms,
        );
    }

    pub fn remove_trade(&mut self, id: &str) -> ChartResult<Trade> {
        self.book.remove_trade(id)
    }

    /// Label placement for all live trades, in insertion order.
    pub fn layout_trades(&self, measurer: &dyn TextMeasurer) -> Vec<TradeDrawData> {
        let placement = ShiftLeftOnce { circle_radius: self.config.overlay.circle_radius };
        layout_trades(
            self.book.trades(),
            self.scales.x_current(),
            self.scales.y_current(),
            measurer,
            &self.config.overlay,
            &placement,
            self.last_frame_ms,
        )
    }

    /// Label placement for visible results.
    pub fn layout_results(&self, measurer: &dyn TextMeasurer) -> Vec<ResultDrawData> {
        layout_results(
            self.book.results(),
            self.scales.x_current(),
            self.scales.y_current(),
            measurer,
            &self.config.overlay,
        )
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        aligned_ticks(self.scales.x_current().domain(), self.cell_duration)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        let [lo, hi] = self.scales.y_origin().domain();
        nice_ticks(lo, hi, 20)
    }

    pub fn interpolated_data(&self) -> &[Sample] {
        &self.interpolated
    }

    pub fn last_price(&self) -> Option<f64> {
        self.interpolated.last().map(|s| s.value)
    }

    pub fn scales(&self) -> &ScaleSet {
        &self.scales
    }

    pub fn scales_mut(&mut self) -> &mut ScaleSet {
        &mut self.scales
    }

    pub fn x_current(&self) -> &LinearScale {
        self.scales.x_current()
    }

    pub fn y_current(&self) -> &LinearScale {
        self.scales.y_current()
    }

    pub fn book(&self) -> &TradeBook {
        &self.book
    }

    pub fn fraction(&self) -> f64 {
        self.clock.fraction()
    }

    pub fn cell_duration(&self) -> f64 {
        self.cell_duration
    }

    pub fn display_duration(&self) -> f64 {
        self.zoom.display_duration()
    }

    pub fn level_index(&self) -> usize {
        self.zoom.level_index()
    }

    pub fn autoscroll(&self) -> bool {
        self.autoscroll
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn start_timestamp_ms(&self) -> f64 {
        self.start_timestamp_ms
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
