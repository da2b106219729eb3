use js_sys::Date;
use wasm_bindgen::JsValue;

/// Format a countdown as `MM:SS`, or `HH:MM:SS` once an hour or more
/// remains. Negative inputs clamp to `00:00`.
pub fn format_duration(ms: f64) -> String {
    let total_seconds = (ms.max(0.0) / 1000.0).floor() as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Wall-clock `HH:MM:SS` for an epoch-millisecond timestamp, local time.
pub fn format_clock(timestamp_ms: f64) -> String {
    let date = Date::new(&JsValue::from_f64(timestamp_ms));
    format!("{:02}:{:02}:{:02}", date.get_hours(), date.get_minutes(), date.get_seconds())
}

#[cfg(test)]
mod tests {
    use super::format_duration;

    #[test]
    fn countdown_formats() {
        assert_eq!(format_duration(0.0), "00:00");
        assert_eq!(format_duration(999.0), "00:00");
        assert_eq!(format_duration(61_000.0), "01:01");
        assert_eq!(format_duration(3_600_000.0), "01:00:00");
        assert_eq!(format_duration(3_725_000.0), "01:02:05");
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(format_duration(-5_000.0), "00:00");
    }
}
