//! Color value types: [`Rgb`], [`Hsv`], and the validated [`HexColor`].
//!
//! `HexColor` is the authoritative color representation. It can only be built
//! through validating constructors, so holding one means holding a color that
//! formats to a canonical uppercase `#RRGGBB`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::math;

/// Returns true if `s` is `#` (optional) followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex(s: &str) -> bool {
    math::parse_hex(s).is_some()
}

/// Build a color from 0–255 channels given as floats.
///
/// Each channel is clamped to 0–255 and rounded. A non-finite channel has no
/// meaningful color, so the whole result falls back to black.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> HexColor {
    if !(r.is_finite() && g.is_finite() && b.is_finite()) {
        log::warn!("non-finite rgb ({r}, {g}, {b}), falling back to black");
        return HexColor::BLACK;
    }
    HexColor::from_rgb(
        math::channel_to_u8(r),
        math::channel_to_u8(g),
        math::channel_to_u8(b),
    )
}

/// Integer RGB triple, each channel 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to HSV (hue in degrees, saturation and value 0.0–1.0).
    pub fn to_hsv(self) -> Hsv {
        let (h, s, v) = math::rgb_to_hsv(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
        Hsv { h, s, v }
    }

    /// True when all three channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<HexColor> for Rgb {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// HSV triple: hue in degrees 0–360, saturation and value 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Convert to integer RGB, rounding each channel.
    pub fn to_rgb(self) -> Rgb {
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let (r, g, b) = math::hsv_to_rgb(self.h, s, v);
        Rgb {
            r: math::channel_to_u8(r * 255.0),
            g: math::channel_to_u8(g * 255.0),
            b: math::channel_to_u8(b * 255.0),
        }
    }
}

/// A validated 6-digit hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Create from 0–255 RGB values. Every triple is a valid color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgb::new(r, g, b))
    }

    /// Parse `#RGB` or `#RRGGBB`, case-insensitive, `#` optional.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        math::parse_hex(hex)
            .map(|[r, g, b]| Self::from_rgb(r, g, b))
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))
    }

    /// Like [`HexColor::parse`], discarding the error.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::parse(hex).ok()
    }

    /// Create from an HSV triple, rounding to the nearest RGB color.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self(hsv.to_rgb())
    }

    pub fn rgb(self) -> Rgb {
        self.0
    }

    /// Red component (0–255).
    pub fn r(self) -> u8 {
        self.0.r
    }
    /// Green component (0–255).
    pub fn g(self) -> u8 {
        self.0.g
    }
    /// Blue component (0–255).
    pub fn b(self) -> u8 {
        self.0.b
    }

    pub fn to_hsv(self) -> Hsv {
        self.0.to_hsv()
    }

    /// Format as canonical uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_hex_matches_three_or_six_digits() {
        assert!(is_valid_hex("#FFF"));
        assert!(is_valid_hex("fff"));
        assert!(is_valid_hex("#336699"));
        assert!(is_valid_hex("336699"));
        assert!(!is_valid_hex("#F"));
        assert!(!is_valid_hex("#FFFF"));
        assert!(!is_valid_hex("#33669"));
        assert!(!is_valid_hex("#3366990"));
        assert!(!is_valid_hex("#33669G"));
    }

    #[test]
    fn parse_expands_shorthand() {
        let c = HexColor::parse("#fa0").unwrap();
        assert_eq!(c.rgb(), Rgb::new(0xFF, 0xAA, 0x00));
        assert_eq!(c.to_hex(), "#FFAA00");
    }

    #[test]
    fn parse_reports_the_offending_text() {
        assert_eq!(
            HexColor::parse("#12"),
            Err(ColorError::InvalidHex("#12".to_string()))
        );
    }

    #[test]
    fn display_is_uppercase_and_zero_padded() {
        assert_eq!(HexColor::from_rgb(1, 2, 171).to_string(), "#0102AB");
        assert_eq!("#abcdef".parse::<HexColor>().unwrap().to_string(), "#ABCDEF");
    }

    #[test]
    fn rgb_to_hex_clamps_and_rounds() {
        assert_eq!(rgb_to_hex(-10.0, 300.0, 127.5).to_string(), "#00FF80");
        assert_eq!(rgb_to_hex(51.2, 101.6, 153.0).to_string(), "#336699");
    }

    #[test]
    fn rgb_to_hex_falls_back_to_black_on_nan() {
        assert_eq!(rgb_to_hex(f64::NAN, 10.0, 10.0), HexColor::BLACK);
        assert_eq!(rgb_to_hex(10.0, f64::INFINITY, 10.0), HexColor::BLACK);
    }

    #[test]
    fn hsv_of_known_colors() {
        let hsv = HexColor::parse("#336699").unwrap().to_hsv();
        assert!((hsv.h - 210.0).abs() < 1e-9, "h = {}", hsv.h);
        assert!((hsv.s - 2.0 / 3.0).abs() < 1e-9, "s = {}", hsv.s);
        assert!((hsv.v - 0.6).abs() < 1e-9, "v = {}", hsv.v);
    }

    #[test]
    fn hsv_to_rgb_clamps_out_of_range_saturation_and_value() {
        assert_eq!(Hsv::new(0.0, 2.0, 2.0).to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hsv::new(0.0, 1.0, -1.0).to_rgb(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hsv_recovers_up_to_rounding() {
        let hsv = Hsv::new(200.0, 0.5, 0.8);
        let back = hsv.to_rgb().to_hsv();
        assert!((back.h - hsv.h).abs() < 1.0, "h = {}", back.h);
        assert!((back.s - hsv.s).abs() < 0.01, "s = {}", back.s);
        assert!((back.v - hsv.v).abs() < 0.01, "v = {}", back.v);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_survives_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let hex = rgb_to_hex(r as f64, g as f64, b as f64).to_string();
                let back = HexColor::parse(&hex).unwrap().rgb();
                prop_assert_eq!(back, Rgb::new(r, g, b));
            }

            #[test]
            fn hex_survives_rgb_round_trip(hex in "#[0-9a-fA-F]{6}") {
                let rgb = HexColor::parse(&hex).unwrap().rgb();
                let back = rgb_to_hex(rgb.r as f64, rgb.g as f64, rgb.b as f64);
                prop_assert_eq!(back.to_string(), hex.to_uppercase());
            }

            #[test]
            fn rgb_survives_hsv_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let rgb = Rgb::new(r, g, b);
                prop_assert_eq!(rgb.to_hsv().to_rgb(), rgb);
            }
        }
    }
}
