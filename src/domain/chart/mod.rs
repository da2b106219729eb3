pub mod animation;
pub mod engine;
pub mod scale;
pub mod zoom;

pub use animation::AnimationClock;
pub use engine::{ChartEngine, ResultRequest, TradeRequest};
pub use scale::{LinearScale, ScaleSet, ZoomTransform, aligned_ticks, nice_ticks};
pub use zoom::{ZoomController, ZoomDirection, cell_duration, grid_cell_px};
