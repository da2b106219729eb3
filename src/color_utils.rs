/// Append an alpha channel to a `#rrggbb` color, yielding `#rrggbbaa`.
/// Opacity is clamped to `[0, 1]`; inputs already carrying an alpha pass
/// through unchanged.
pub fn set_hex_opacity(hex: &str, opacity: f64) -> String {
    let body = hex.strip_prefix('#').unwrap_or(hex);
    if body.len() != 6 {
        return hex.to_string();
    }
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("#{body}{alpha:02x}")
}

#[cfg(test)]
mod tests {
    use super::set_hex_opacity;

    #[test]
    fn appends_alpha_byte() {
        assert_eq!(set_hex_opacity("#008000", 0.75), "#008000bf");
        assert_eq!(set_hex_opacity("#ff0000", 1.0), "#ff0000ff");
        assert_eq!(set_hex_opacity("#ff0000", 0.0), "#ff000000");
    }

    #[test]
    fn opacity_is_clamped() {
        assert_eq!(set_hex_opacity("#ffffff", 2.0), "#ffffffff");
        assert_eq!(set_hex_opacity("#ffffff", -1.0), "#ffffff00");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(set_hex_opacity("gold", 0.5), "gold");
    }
}
