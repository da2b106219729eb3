pub mod chart;
pub mod config;
pub mod errors;
pub mod logging;
pub mod market_data;
pub mod trading;
