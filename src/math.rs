//! Color math — direct conversions without external dependencies.
//! RGB channels are normalized f64 in 0.0–1.0; hue is in degrees.

/// HSV → RGB using the six-sector method.
///
/// `h` is in degrees and wraps into 0–360; `s` and `v` are 0.0–1.0.
/// Returns normalized (r, g, b).
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h = if h.is_finite() { h } else { 0.0 };
    let h6 = h.rem_euclid(360.0) / 60.0;
    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (i as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSV. Takes normalized channels, returns hue in degrees.
///
/// Hue is 0 for achromatic input and saturation is 0 for black.
pub(crate) fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    (h, s, v)
}

/// Clamp a 0–255 channel and round it to the nearest integer.
pub(crate) fn channel_to_u8(x: f64) -> u8 {
    x.clamp(0.0, 255.0).round() as u8
}

/// Parse `#RGB` / `#RRGGBB` (the `#` is optional) into bytes.
///
/// Shorthand digits are duplicated, so `F` becomes `FF`.
pub(crate) fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                *slot = u8::from_str_radix(&digits[i..i + 1], 16).ok()? * 17;
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for (slot, i) in out.iter_mut().zip(0..3) {
                *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Normalize raw hex-field text: add the `#` prefix if missing and uppercase.
pub(crate) fn normalize_hex_text(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    if upper.starts_with('#') {
        upper
    } else {
        format!("#{upper}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_round_trip_through_hsv() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_eq!(rgb_to_hsv(0.0, 0.0, 1.0), (240.0, 1.0, 1.0));
    }

    #[test]
    fn hue_wraps_at_360() {
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), hsv_to_rgb(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(-120.0, 1.0, 1.0), hsv_to_rgb(240.0, 1.0, 1.0));
    }

    #[test]
    fn achromatic_hue_and_black_saturation_are_zero() {
        let (h, s, _) = rgb_to_hsv(0.5, 0.5, 0.5);
        assert_eq!((h, s), (0.0, 0.0));
        let (_, s, v) = rgb_to_hsv(0.0, 0.0, 0.0);
        assert_eq!((s, v), (0.0, 0.0));
    }

    #[test]
    fn magenta_hue_is_positive() {
        let (h, _, _) = rgb_to_hsv(1.0, 0.0, 0.5);
        assert!((h - 330.0).abs() < 1e-9, "h = {h}");
    }

    #[test]
    fn non_finite_hue_is_treated_as_red() {
        assert_eq!(hsv_to_rgb(f64::NAN, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn parse_hex_accepts_short_and_long_forms() {
        assert_eq!(parse_hex("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex("1a2B3c"), Some([0x1A, 0x2B, 0x3C]));
        assert_eq!(parse_hex("#abc"), Some([0xAA, 0xBB, 0xCC]));
    }

    #[test]
    fn parse_hex_rejects_other_lengths_and_digits() {
        for bad in ["", "#", "#F", "#FFFF", "#FFFFFFF", "#GGGGGG", "##FFF", "#FF FF", "#ÿÿÿ"] {
            assert_eq!(parse_hex(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn channel_to_u8_clamps_and_rounds() {
        assert_eq!(channel_to_u8(-4.0), 0);
        assert_eq!(channel_to_u8(300.0), 255);
        assert_eq!(channel_to_u8(127.5), 128);
        assert_eq!(channel_to_u8(12.49), 12);
    }

    #[test]
    fn normalize_hex_text_prefixes_and_uppercases() {
        assert_eq!(normalize_hex_text("abc"), "#ABC");
        assert_eq!(normalize_hex_text("#f"), "#F");
        assert_eq!(normalize_hex_text(""), "#");
    }
}
