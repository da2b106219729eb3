use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::SignalSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::chart::{ChartEngine, ResultRequest, TradeRequest};
use crate::domain::config::ChartConfig;
use crate::domain::errors::ChartResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::trading::TradeSide;
use crate::infrastructure::feed::RandomPriceFeed;
use crate::{global_signals, log_error};
use crate::infrastructure::rendering::CanvasRenderer;

global_signals! {
    pub current_price_signal => current_price: f64,
    pub open_trades_signal => open_trades: usize,
    pub autoscroll_signal => autoscroll: bool,
    pub level_index_signal => level_index: usize,
}

/// Drives the engine from `requestAnimationFrame`, feeds the renderer and
/// mirrors engine state into UI signals.
pub struct ChartController {
    engine: Rc<RefCell<ChartEngine>>,
    renderer: Rc<RefCell<CanvasRenderer>>,
    running: Rc<Cell<bool>>,
    trade_seq: Cell<u64>,
}

impl ChartController {
    pub fn new(canvas_id: &str, width: u32, height: u32, config: ChartConfig) -> ChartResult<Self> {
        let start_timestamp_ms = js_sys::Date::now();
        let feed = Box::new(RandomPriceFeed::new());
        let mut engine =
            ChartEngine::new(width as f64, height as f64, start_timestamp_ms, config, feed)?;
        engine.seed_history();

        Ok(Self {
            engine: Rc::new(RefCell::new(engine)),
            renderer: Rc::new(RefCell::new(CanvasRenderer::new(
                canvas_id.to_string(),
                width,
                height,
            ))),
            running: Rc::new(Cell::new(false)),
            trade_seq: Cell::new(0),
        })
    }

    pub fn engine(&self) -> Rc<RefCell<ChartEngine>> {
        Rc::clone(&self.engine)
    }

    /// Start the frame loop. Subsequent calls while running are no-ops.
    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        get_logger().info(LogComponent::Application("Controller"), "Starting frame loop");

        let engine = Rc::clone(&self.engine);
        let renderer = Rc::clone(&self.renderer);
        let running = Rc::clone(&self.running);
        let origin: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));

        // The usual self-referential rAF closure dance.
        let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let handle_clone = Rc::clone(&handle);

        *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !running.get() {
                return;
            }
            let start = match origin.get() {
                Some(start) => start,
                None => {
                    origin.set(Some(now));
                    now
                }
            };
            let t_ms = now - start;

            {
                let mut engine = engine.borrow_mut();
                engine.on_frame(t_ms);
                current_price_signal().set(engine.last_price().unwrap_or(0.0));
                open_trades_signal().set(engine.book().trades().len());
            }
            if let Err(e) = renderer.borrow().draw(&engine.borrow(), t_ms) {
                log_error!(LogComponent::Application("Controller"), "Frame draw failed: {e:?}");
            }

            if let Some(closure) = handle_clone.borrow().as_ref() {
                request_frame(closure);
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(closure) = handle.borrow().as_ref() {
            request_frame(closure);
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    /// Demo trade: opens at the current point, closes after
    /// `DEMO_TRADE_DELAY_MS` and settles itself at the close time.
    pub fn place_trade(&self, side: TradeSide, amount: f64) -> ChartResult<()> {
        const DEMO_TRADE_DELAY_MS: f64 = 3000.0;

        let seq = self.trade_seq.get() + 1;
        self.trade_seq.set(seq);
        let id = format!("trade-{seq}");

        let open_price = self.engine.borrow().last_price().unwrap_or(0.0);
        let close_time_ms = js_sys::Date::now() + DEMO_TRADE_DELAY_MS;

        self.engine.borrow_mut().add_trade(TradeRequest {
            id: id.clone(),
            side,
            amount,
            close_time_ms,
        })?;

        let engine = Rc::clone(&self.engine);
        spawn_local(async move {
            TimeoutFuture::new(DEMO_TRADE_DELAY_MS as u32).await;
            engine.borrow_mut().add_result(ResultRequest {
                id,
                side,
                reward: amount * 2.0,
                open_price,
                close_time_ms,
            });
        });

        Ok(())
    }

    pub fn handle_wheel(&self, delta: f64) {
        let mut engine = self.engine.borrow_mut();
        if engine.handle_wheel(delta, 0.0, 0.0) {
            level_index_signal().set(engine.level_index());
        }
    }

    pub fn set_autoscroll(&self, on: bool) {
        self.engine.borrow_mut().set_autoscroll(on);
        autoscroll_signal().set(on);
    }

    pub fn set_level(&self, index: usize) -> ChartResult<()> {
        self.engine.borrow_mut().set_level(index)?;
        level_index_signal().set(index);
        Ok(())
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.engine.borrow_mut().handle_resize(width as f64, height as f64);
        self.renderer.borrow_mut().set_dimensions(width, height);
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window()
        && window.request_animation_frame(closure.as_ref().unchecked_ref()).is_err()
    {
        get_logger()
            .error(LogComponent::Application("Controller"), "requestAnimationFrame failed");
    }
}
