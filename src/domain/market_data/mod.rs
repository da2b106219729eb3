pub mod entities;
pub mod feed;
pub mod value_objects;

pub use entities::SampleBuffer;
pub use feed::PriceFeed;
pub use value_objects::Sample;
