// File: crates/chart-render-skia/src/color.rs
// Summary: CSS color strings (as carried by the chart option) to Skia colors.

use skia_safe as skia;

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic CSS color name.
pub fn parse_css_color(s: &str) -> Option<skia::Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|n| n * 17);
        return match hex.len() {
            3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
            _ => None,
        };
    }
    let rgb = match s.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "teal" => (0, 128, 128),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, rgb.0, rgb.1, rgb.2))
}
