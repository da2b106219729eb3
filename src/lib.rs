use wasm_bindgen::prelude::*;

use crate::domain::logging::{ConsoleLogger, LogComponent, init_logger};

pub mod app;
pub mod application;
pub mod color_utils;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;

#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_logger(Box::new(ConsoleLogger::new_development()));
    log_info!(LogComponent::Presentation("Initialize"), "Chart engine initialized");
}

/// Mount the demo host into `<body>`. Hosts embedding the chart through
/// `ChartApi` skip this.
#[wasm_bindgen]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}
