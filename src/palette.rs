//! Default swatches and runtime picker options.

use crate::color::HexColor;

/// One-click preset colors, in display order.
pub const DEFAULT_PALETTE: [HexColor; 10] = [
    HexColor::from_rgb(0xFF, 0xFF, 0xFF),
    HexColor::from_rgb(0xE0, 0xE0, 0xE0),
    HexColor::from_rgb(0x75, 0x75, 0x75),
    HexColor::from_rgb(0x00, 0x00, 0x00),
    HexColor::from_rgb(0xFF, 0xFF, 0x00),
    HexColor::from_rgb(0xFF, 0x00, 0x00),
    HexColor::from_rgb(0x00, 0xFF, 0x00),
    HexColor::from_rgb(0x00, 0x00, 0xFF),
    HexColor::from_rgb(0xF5, 0x7C, 0x00),
    HexColor::from_rgb(0x51, 0x2D, 0xA8),
];

/// Which parts of the picker to show, and which swatches to offer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub palette: Vec<HexColor>,
    /// Show the "no color" button next to the swatches.
    pub show_none: bool,
    pub show_rgb_inputs: bool,
    /// Show clipboard buttons. Only has an effect with the `copy` feature.
    pub show_copy: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            show_none: true,
            show_rgb_inputs: true,
            show_copy: true,
        }
    }
}

impl PickerConfig {
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = HexColor>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    pub fn with_none(mut self, show: bool) -> Self {
        self.show_none = show;
        self
    }

    pub fn with_rgb_inputs(mut self, show: bool) -> Self {
        self.show_rgb_inputs = show;
        self
    }

    pub fn with_copy(mut self, show: bool) -> Self {
        self.show_copy = show;
        self
    }
}
