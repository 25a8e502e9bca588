//! Draft input: what the user has typed, which may not be a color yet.
//!
//! Drafts are kept apart from [`HexColor`]; the only way from a draft to a
//! color is through [`HexDraft::parse`] or [`RgbDraft::complete`].

use std::fmt;

use crate::color::{HexColor, Rgb};
use crate::error::ColorError;
use crate::math;

/// Text in the hex field, normalized to `#`-prefixed uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexDraft(String);

impl HexDraft {
    /// Normalize raw keystrokes. `"f"` becomes `"#F"`.
    pub fn from_raw(raw: &str) -> Self {
        Self(math::normalize_hex_text(raw))
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// The color this text names, if it is a valid 3- or 6-digit hex.
    pub fn parse(&self) -> Option<HexColor> {
        HexColor::from_hex(&self.0)
    }
}

impl From<HexColor> for HexDraft {
    fn from(color: HexColor) -> Self {
        Self(color.to_hex())
    }
}

impl fmt::Display for HexDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the three RGB input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Field label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
        }
    }
}

/// Parse RGB field text: empty means "cleared", otherwise an integer 0–255.
///
/// `Ok(None)` is an empty field; anything that is not digits in range is an
/// error and must leave the field untouched.
pub fn parse_channel(raw: &str) -> Result<Option<u8>, ColorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ColorError::ChannelOutOfRange(raw.to_string()));
    }
    trimmed
        .parse::<u8>()
        .map(Some)
        .map_err(|_| ColorError::ChannelOutOfRange(raw.to_string()))
}

/// The RGB fields, each either a value or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbDraft {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
}

impl RgbDraft {
    pub fn get(&self, channel: Channel) -> Option<u8> {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
        }
    }

    pub fn set(&mut self, channel: Channel, value: Option<u8>) {
        match channel {
            Channel::R => self.r = value,
            Channel::G => self.g = value,
            Channel::B => self.b = value,
        }
    }

    /// The full triple, once no field is empty.
    pub fn complete(&self) -> Option<Rgb> {
        Some(Rgb::new(self.r?, self.g?, self.b?))
    }

    /// Display text for one field: the number, or `""` when empty.
    pub fn text(&self, channel: Channel) -> String {
        self.get(channel).map(|v| v.to_string()).unwrap_or_default()
    }
}

impl From<Rgb> for RgbDraft {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: Some(rgb.r),
            g: Some(rgb.g),
            b: Some(rgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_draft_echoes_invalid_text() {
        let d = HexDraft::from_raw("#f");
        assert_eq!(d.text(), "#F");
        assert_eq!(d.parse(), None);
    }

    #[test]
    fn hex_draft_keeps_shorthand() {
        let d = HexDraft::from_raw("fff");
        assert_eq!(d.text(), "#FFF");
        assert_eq!(d.parse(), Some(HexColor::WHITE));
    }

    #[test]
    fn parse_channel_accepts_empty_and_range() {
        assert_eq!(parse_channel(""), Ok(None));
        assert_eq!(parse_channel("0"), Ok(Some(0)));
        assert_eq!(parse_channel("255"), Ok(Some(255)));
        assert_eq!(parse_channel("007"), Ok(Some(7)));
    }

    #[test]
    fn parse_channel_rejects_garbage() {
        for bad in ["256", "-1", "1.5", "abc", "12a", "+3", "99999999999"] {
            assert!(parse_channel(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn rgb_draft_completes_only_when_full() {
        let mut d = RgbDraft::default();
        d.set(Channel::R, Some(255));
        d.set(Channel::G, Some(0));
        assert_eq!(d.complete(), None);
        assert_eq!(d.text(Channel::B), "");
        d.set(Channel::B, Some(0));
        assert_eq!(d.complete(), Some(Rgb::new(255, 0, 0)));
    }
}
