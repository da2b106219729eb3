use std::str::FromStr;

use wasm_bindgen::prelude::*;

use crate::application::ChartController;
use crate::domain::chart::{ResultRequest, TradeRequest};
use crate::domain::config::ChartConfig;
use crate::domain::errors::ChartError;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::trading::TradeSide;

/// JS-facing facade over the controller. Methods take primitives and
/// translate domain errors into `JsValue`s.
#[wasm_bindgen]
pub struct ChartApi {
    controller: ChartController,
}

#[wasm_bindgen]
impl ChartApi {
    /// `config_json` optionally overrides engine defaults; unknown fields
    /// are ignored, missing ones fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas_id: String,
        width: u32,
        height: u32,
        config_json: Option<String>,
    ) -> Result<ChartApi, JsValue> {
        let config = match config_json {
            Some(json) => serde_json::from_str::<ChartConfig>(&json)
                .map_err(|e| JsValue::from_str(&format!("Bad config: {e}")))?,
            None => ChartConfig::default(),
        };
        let controller = ChartController::new(&canvas_id, width, height, config).map_err(to_js)?;
        get_logger().info(
            LogComponent::Presentation("ChartApi"),
            &format!("Chart created on #{canvas_id} ({width}x{height})"),
        );
        Ok(ChartApi { controller })
    }

    pub fn start(&self) {
        self.controller.start();
    }

    pub fn stop(&self) {
        self.controller.stop();
    }

    #[wasm_bindgen(js_name = addTrade)]
    pub fn add_trade(
        &self,
        id: String,
        side: String,
        amount: f64,
        close_time_ms: f64,
    ) -> Result<(), JsValue> {
        let side = parse_side(&side)?;
        self.controller
            .engine()
            .borrow_mut()
            .add_trade(TradeRequest { id, side, amount, close_time_ms })
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = addResult)]
    pub fn add_result(
        &self,
        id: String,
        side: String,
        reward: f64,
        open_price: f64,
        close_time_ms: f64,
    ) -> Result<(), JsValue> {
        let side = parse_side(&side)?;
        self.controller.engine().borrow_mut().add_result(ResultRequest {
            id,
            side,
            reward,
            open_price,
            close_time_ms,
        });
        Ok(())
    }

    #[wasm_bindgen(js_name = removeTrade)]
    pub fn remove_trade(&self, id: String) -> Result<(), JsValue> {
        self.controller.engine().borrow_mut().remove_trade(&id).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setAutoscroll)]
    pub fn set_autoscroll(&self, on: bool) {
        self.controller.set_autoscroll(on);
    }

    #[wasm_bindgen(js_name = setLevel)]
    pub fn set_level(&self, index: usize) -> Result<(), JsValue> {
        self.controller.set_level(index).map_err(to_js)
    }

    pub fn zoom(&self, delta: f64) {
        self.controller.handle_wheel(delta);
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.controller.resize(width, height);
    }

    /// Recompute scales and the interpolated series outside the frame
    /// loop; the next frame paints the fresh state.
    #[wasm_bindgen(js_name = forceRedraw)]
    pub fn force_redraw(&self) {
        self.controller.engine().borrow_mut().recompute();
    }

    #[wasm_bindgen(js_name = currentPrice)]
    pub fn current_price(&self) -> Option<f64> {
        self.controller.engine().borrow().last_price()
    }

    #[wasm_bindgen(js_name = levelIndex)]
    pub fn level_index(&self) -> usize {
        self.controller.engine().borrow().level_index()
    }
}

fn parse_side(side: &str) -> Result<TradeSide, JsValue> {
    TradeSide::from_str(side)
        .map_err(|_| JsValue::from_str(&format!("Unknown trade side: {side}")))
}

fn to_js(e: ChartError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
