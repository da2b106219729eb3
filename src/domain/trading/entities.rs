use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

use crate::domain::errors::{ChartError, ChartResult};

/// Direction of a binary trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum TradeSide {
    #[display(fmt = "UP")]
    #[strum(serialize = "UP")]
    #[serde(rename = "UP")]
    Up,
    #[display(fmt = "DOWN")]
    #[strum(serialize = "DOWN")]
    #[serde(rename = "DOWN")]
    Down,
}

impl TradeSide {
    pub fn arrow(&self) -> &'static str {
        match self {
            TradeSide::Up => "\u{25b2}",
            TradeSide::Down => "\u{25bc}",
        }
    }
}

/// An open position. `open_time`/`close_time` are chart seconds, `price`
/// is the entry price snapped from the interpolated series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: String,
    pub open_time: f64,
    pub close_time: f64,
    pub price: f64,
    pub side: TradeSide,
    pub amount: f64,
}

/// A settled trade, shown briefly at its settlement point.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeResult {
    pub id: String,
    pub side: TradeSide,
    pub reward: f64,
    pub time: f64,
    pub price: f64,
    pub color: String,
}

#[derive(Debug, Clone)]
struct ResultEntry {
    result: TradeResult,
    expires_at_ms: f64,
}

/// Live trades and short-lived results, insertion-ordered.
///
/// Layout tie-breaks depend on insertion order, so the backing store is a
/// plain Vec with id lookup; the handful of concurrent trades a user can
/// hold keeps linear scans cheap.
#[derive(Debug, Clone, Default)]
pub struct TradeBook {
    trades: Vec<Trade>,
    results: Vec<ResultEntry>,
    result_display_ms: f64,
}

impl TradeBook {
    pub fn new(result_display_ms: f64) -> Self {
        Self { trades: Vec::new(), results: Vec::new(), result_display_ms }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn results(&self) -> impl Iterator<Item = &TradeResult> {
        self.results.iter().map(|e| &e.result)
    }

    pub fn trade(&self, id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Insert or replace under the same id; a replacement keeps the
    /// original insertion position.
    pub fn add_trade(&mut self, trade: Trade) -> ChartResult<()> {
        if trade.id.is_empty() {
            return Err(ChartError::InvalidTradeId(trade.id));
        }
        match self.trades.iter_mut().find(|t| t.id == trade.id) {
            Some(existing) => *existing = trade,
            None => self.trades.push(trade),
        }
        Ok(())
    }

    pub fn remove_trade(&mut self, id: &str) -> ChartResult<Trade> {
        let pos = self
            .trades
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ChartError::UnknownTrade(id.to_string()))?;
        Ok(self.trades.remove(pos))
    }

    /// A result replaces the trade with the same id immediately and stays
    /// visible for the configured display duration from `now_ms`.
    pub fn add_result(&mut self, result: TradeResult, now_ms: f64) {
        self.trades.retain(|t| t.id != result.id);
        self.results.retain(|e| e.result.id != result.id);
        self.results.push(ResultEntry { expires_at_ms: now_ms + self.result_display_ms, result });
    }

    /// Drop results whose display duration has elapsed.
    pub fn purge_expired(&mut self, now_ms: f64) {
        self.results.retain(|e| now_ms < e.expires_at_ms);
    }

    pub fn clear(&mut self) {
        self.trades.clear();
        self.results.clear();
    }
}
