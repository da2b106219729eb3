//! Browser-only checks; everything scale/layout related runs natively in
//! the sibling test files.
#![cfg(target_arch = "wasm32")]

use line_chart_wasm::time_utils::format_clock;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn clock_labels_are_hh_mm_ss() {
    let label = format_clock(js_sys::Date::now());
    assert_eq!(label.len(), 8);
    let bytes = label.as_bytes();
    assert_eq!(bytes[2], b':');
    assert_eq!(bytes[5], b':');
}

#[wasm_bindgen_test]
fn console_logger_accepts_all_levels() {
    use line_chart_wasm::domain::logging::{ConsoleLogger, LogComponent, Logger};
    let logger = ConsoleLogger::new_development();
    logger.debug(LogComponent::Domain("Test"), "debug");
    logger.info(LogComponent::Application("Test"), "info");
    logger.warn(LogComponent::Infrastructure("Test"), "warn");
    logger.error(LogComponent::Presentation("Test"), "error");
}
