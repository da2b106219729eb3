pub mod entities;
pub mod layout;

pub use entities::{Trade, TradeBook, TradeResult, TradeSide};
pub use layout::{
    LabelBound, LabelPlacement, ResultDrawData, ShiftLeftOnce, TextMeasurer, TradeDrawData,
    layout_results, layout_trades, rect_overlap,
};
