//! ColorSession — the state behind one open color picker.
//!
//! A session holds one logical color in five views: the validated final
//! color, the wheel's base color, the slider's intensity, and the hex and RGB
//! drafts. Every edit is one `&mut self` call that derives all of its outputs
//! from its own inputs. No edit triggers another, so there is nothing to guard
//! against re-entry.
//!
//! Commits take the session by value: once a color is selected (or cleared)
//! the session is gone.

use crate::color::{HexColor, Hsv};
use crate::decompose::recompose;
use crate::draft::{Channel, HexDraft, RgbDraft, parse_channel};

/// What a session hands back to its caller when it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// "Select": the chosen color.
    Color(HexColor),
    /// "None": clear the color / remove formatting.
    None,
}

impl Selection {
    pub fn into_option(self) -> Option<HexColor> {
        match self {
            Selection::Color(c) => Some(c),
            Selection::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorSession {
    seed: HexColor,
    final_color: HexColor,
    base_color: HexColor,
    intensity: u8,
    hex_input: HexDraft,
    rgb_input: RgbDraft,
}

impl ColorSession {
    /// Open a session on `seed`. Absent or invalid seeds start from black.
    pub fn open(seed: Option<&str>) -> Self {
        let seed = match seed {
            Some(text) => HexColor::from_hex(text).unwrap_or_else(|| {
                log::warn!("invalid seed color {text:?}, starting from black");
                HexColor::BLACK
            }),
            None => HexColor::BLACK,
        };
        Self::open_color(seed)
    }

    /// Open on an already-validated color.
    pub fn open_color(seed: HexColor) -> Self {
        log::debug!("color session opened on {seed}");
        Self {
            seed,
            final_color: seed,
            base_color: seed.base_color(),
            intensity: seed.intensity(),
            hex_input: HexDraft::from(seed),
            rgb_input: RgbDraft::from(seed.rgb()),
        }
    }

    pub fn seed(&self) -> HexColor {
        self.seed
    }

    pub fn final_color(&self) -> HexColor {
        self.final_color
    }

    pub fn base_color(&self) -> HexColor {
        self.base_color
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn hex_input(&self) -> &HexDraft {
        &self.hex_input
    }

    pub fn rgb_input(&self) -> &RgbDraft {
        &self.rgb_input
    }

    /// Wheel pick. Invalid hex is ignored; intensity is kept.
    ///
    /// Returns whether the final color changed.
    pub fn pick_from_wheel(&mut self, base: &str) -> bool {
        match HexColor::from_hex(base) {
            Some(base) => self.set_base(base),
            None => {
                log::trace!("ignoring invalid wheel color {base:?}");
                false
            }
        }
    }

    /// Wheel pick from a hue (degrees) and saturation (0.0–1.0) at full value.
    pub fn pick_from_wheel_hsv(&mut self, hue: f64, saturation: f64) -> bool {
        let base = HexColor::from_hsv(Hsv::new(hue, saturation, 1.0));
        self.set_base(base)
    }

    /// Slider move. Values above 100 are clamped; the base color is kept.
    pub fn move_slider(&mut self, intensity: u8) -> bool {
        self.intensity = intensity.min(100);
        let color = recompose(self.base_color, self.intensity);
        self.show_recomposed(color)
    }

    /// Hex field keystroke.
    ///
    /// The draft always echoes the normalized text. A valid draft also
    /// becomes the final color, but the draft keeps the user's own spelling
    /// (`#FFF` stays `#FFF`).
    pub fn type_hex(&mut self, raw: &str) -> bool {
        let draft = HexDraft::from_raw(raw);
        let parsed = draft.parse();
        self.hex_input = draft;
        match parsed {
            Some(color) => {
                let changed = self.final_color != color;
                self.final_color = color;
                self.base_color = color.base_color();
                self.intensity = color.intensity();
                self.rgb_input = RgbDraft::from(color.rgb());
                log::trace!("hex edit -> {color}");
                changed
            }
            None => false,
        }
    }

    /// RGB field keystroke.
    ///
    /// Text that is neither empty nor an integer 0–255 is dropped without a
    /// state change. Accepted text updates only its own field until all three
    /// fields hold numbers.
    pub fn type_rgb_channel(&mut self, channel: Channel, raw: &str) -> bool {
        let value = match parse_channel(raw) {
            Ok(value) => value,
            Err(err) => {
                log::trace!("ignoring rgb input: {err}");
                return false;
            }
        };
        self.rgb_input.set(channel, value);
        let Some(rgb) = self.rgb_input.complete() else {
            return false;
        };
        let color = HexColor::from(rgb);
        let changed = self.final_color != color;
        self.final_color = color;
        self.hex_input = HexDraft::from(color);
        self.base_color = color.base_color();
        self.intensity = color.intensity();
        log::trace!("rgb edit -> {color}");
        changed
    }

    /// Palette click: like typing the full 6-digit hex of `swatch`.
    pub fn pick_default(&mut self, swatch: HexColor) -> bool {
        let changed = self.type_hex(&swatch.to_hex());
        // The swatch text is already canonical, so every field now agrees.
        debug_assert_eq!(self.hex_input.text(), swatch.to_hex());
        changed
    }

    /// "None": close with no color.
    pub fn commit_none(self) -> Selection {
        log::debug!("color session closed with no color");
        Selection::None
    }

    /// "Select": close with the current color.
    pub fn commit_selected(self) -> Selection {
        let color = select_color(
            Some(self.final_color),
            Some(recompose(self.base_color, self.intensity)),
            self.seed,
        );
        log::debug!("color session closed with {color}");
        Selection::Color(color)
    }

    fn set_base(&mut self, base: HexColor) -> bool {
        self.base_color = base;
        let color = recompose(base, self.intensity);
        self.show_recomposed(color)
    }

    /// Push a wheel/slider result out to the final color and both drafts.
    fn show_recomposed(&mut self, color: HexColor) -> bool {
        let changed = self.final_color != color;
        self.final_color = color;
        self.hex_input = HexDraft::from(color);
        self.rgb_input = RgbDraft::from(color.rgb());
        log::trace!("wheel/slider edit -> {color}");
        changed
    }
}

/// First available of: the final color, the recomposed color, the seed.
fn select_color(
    final_color: Option<HexColor>,
    recomposed: Option<HexColor>,
    seed: HexColor,
) -> HexColor {
    final_color.or(recomposed).unwrap_or_else(|| {
        log::warn!("no valid color to select, falling back to seed {seed}");
        seed
    })
}

impl Default for ColorSession {
    fn default() -> Self {
        Self::open(None)
    }
}
