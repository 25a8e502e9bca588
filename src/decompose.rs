//! Base color + intensity decomposition.
//!
//! The wheel edits a full-brightness *base color* and the slider edits an
//! *intensity* (HSV value as a percentage). [`recompose`] is the single place
//! where the two are turned back into one color.
//!
//! Invalid text input falls back to "full brightness, no hue": white for the
//! base color and 100 for the intensity.

use crate::color::{HexColor, Hsv};

impl HexColor {
    /// Full-brightness version of this color.
    ///
    /// Value is raised to 1 while hue and saturation are kept, so grays stay
    /// gray and [`recompose`] with [`HexColor::intensity`] gets the color back.
    pub fn base_color(self) -> HexColor {
        let hsv = self.to_hsv();
        HexColor::from_hsv(Hsv { v: 1.0, ..hsv })
    }

    /// Brightness as a percentage, `round(v * 100)`.
    pub fn intensity(self) -> u8 {
        (self.to_hsv().v * 100.0).round() as u8
    }

    /// Scale HSV value by `factor`, clamped to 0.0–1.0.
    pub fn scale_brightness(self, factor: f64) -> HexColor {
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        let hsv = self.to_hsv();
        HexColor::from_hsv(Hsv {
            v: hsv.v * factor,
            ..hsv
        })
    }
}

/// Base color of a hex string, or white if it is not a valid color.
pub fn base_color_of(hex: &str) -> HexColor {
    HexColor::from_hex(hex).map_or(HexColor::WHITE, HexColor::base_color)
}

/// Intensity of a hex string, or 100 if it is not a valid color.
pub fn intensity_of(hex: &str) -> u8 {
    HexColor::from_hex(hex).map_or(100, HexColor::intensity)
}

/// Scale the brightness of a hex string. `None` if `hex` is invalid.
pub fn adjust_brightness(hex: &str, factor: f64) -> Option<HexColor> {
    HexColor::from_hex(hex).map(|c| c.scale_brightness(factor))
}

/// Apply an intensity percentage (clamped to 0–100) on top of a base color.
pub fn recompose(base: HexColor, intensity: u8) -> HexColor {
    base.scale_brightness(intensity.min(100) as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn base_color_keeps_hue_and_saturation() {
        assert_eq!(base_color_of("#336699"), hex("#55AAFF"));
        assert_eq!(base_color_of("#800000"), hex("#FF0000"));
    }

    #[test]
    fn base_color_of_gray_is_white() {
        assert_eq!(base_color_of("#808080"), HexColor::WHITE);
        assert_eq!(base_color_of("#000000"), HexColor::WHITE);
    }

    #[test]
    fn invalid_input_falls_back_to_full_brightness() {
        assert_eq!(base_color_of("#12"), HexColor::WHITE);
        assert_eq!(intensity_of("nope"), 100);
        assert_eq!(adjust_brightness("#12", 0.5), None);
    }

    #[test]
    fn intensity_endpoints() {
        assert_eq!(intensity_of("#000000"), 0);
        assert_eq!(intensity_of("#FFFFFF"), 100);
        assert_eq!(intensity_of("#336699"), 60);
    }

    #[test]
    fn recompose_reverses_decomposition() {
        let c = hex("#336699");
        assert_eq!(recompose(c.base_color(), c.intensity()), c);
    }

    #[test]
    fn recompose_clamps_intensity() {
        assert_eq!(recompose(hex("#FF0000"), 250), hex("#FF0000"));
        assert_eq!(recompose(hex("#FF0000"), 0), HexColor::BLACK);
    }

    #[test]
    fn recompose_darkens_gray_base() {
        assert_eq!(recompose(HexColor::WHITE, 50), hex("#808080"));
        assert_eq!(recompose(HexColor::WHITE, 25), hex("#404040"));
    }

    #[test]
    fn adjust_brightness_clamps_factor() {
        assert_eq!(adjust_brightness("#FF0000", 3.0), Some(hex("#FF0000")));
        assert_eq!(adjust_brightness("#FF0000", -1.0), Some(HexColor::BLACK));
        assert_eq!(adjust_brightness("#FF0000", f64::NAN), Some(HexColor::BLACK));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn channel_diff(a: HexColor, b: HexColor) -> [u8; 3] {
            [a.r().abs_diff(b.r()), a.g().abs_diff(b.g()), a.b().abs_diff(b.b())]
        }

        proptest! {
            #[test]
            fn recompose_stays_close_to_input(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                let c = HexColor::from_rgb(r, g, b);
                let back = recompose(c.base_color(), c.intensity());
                let diff = channel_diff(c, back);
                prop_assert!(diff.iter().all(|&d| d <= 2), "{c} -> {back}");
                let max_c = r.max(g).max(b);
                let max_back = back.r().max(back.g()).max(back.b());
                prop_assert!(max_c.abs_diff(max_back) <= 1, "{c} -> {back}");
            }

            #[test]
            fn grays_recompose_within_one(level in any::<u8>()) {
                let c = HexColor::from_rgb(level, level, level);
                let back = recompose(c.base_color(), c.intensity());
                prop_assert!(back.rgb().is_gray());
                prop_assert!(level.abs_diff(back.r()) <= 1, "{c} -> {back}");
            }

            #[test]
            fn base_color_of_gray_stays_gray(level in any::<u8>()) {
                let c = HexColor::from_rgb(level, level, level);
                prop_assert!(c.base_color().rgb().is_gray());
            }

            #[test]
            fn base_color_has_full_intensity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
                prop_assume!(r > 0 || g > 0 || b > 0);
                let c = HexColor::from_rgb(r, g, b);
                prop_assert_eq!(c.base_color().intensity(), 100);
            }
        }
    }
}
