pub mod feed;
pub mod rendering;
