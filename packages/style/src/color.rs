//! Hex color arithmetic.

/// Adjust the brightness of a `#rrggbb` color by adding `amount` to each
/// channel, clamping to `[0, 255]`. The result is lower-case. Input that is
/// not a 6-digit hex color is returned unchanged, so derivation stays total.
pub fn adjust_color(color: &str, amount: i32) -> String {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return color.to_string();
    }

    let channel = |range: std::ops::Range<usize>| -> i32 {
        i32::from_str_radix(&hex[range], 16).unwrap_or(0)
    };
    let r = (channel(0..2) + amount).clamp(0, 255);
    let g = (channel(2..4) + amount).clamp(0, 255);
    let b = (channel(4..6) + amount).clamp(0, 255);

    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_adjustment_is_identity() {
        for c in ["#000000", "#007bff", "#ffffff", "#a1B2c3"] {
            assert_eq!(adjust_color(c, 0), c.to_lowercase());
        }
    }

    #[test]
    fn adds_per_channel() {
        assert_eq!(adjust_color("#000000", 40), "#282828");
        assert_eq!(adjust_color("#007bff", 40), "#28a3ff");
    }

    #[test]
    fn channels_clamp() {
        assert_eq!(adjust_color("#ffffff", 40), "#ffffff");
        assert_eq!(adjust_color("#000000", -40), "#000000");
        assert_eq!(adjust_color("#f0f0f0", 40), "#ffffff");
    }

    #[test]
    fn invalid_input_passes_through() {
        assert_eq!(adjust_color("transparent", 40), "transparent");
        assert_eq!(adjust_color("#fff", 40), "#fff");
        assert_eq!(adjust_color("rgba(0,0,0,0.2)", 40), "rgba(0,0,0,0.2)");
    }
}
