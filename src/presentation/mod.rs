pub mod chart_api;

pub use chart_api::ChartApi;
