//! Sizing, color, and styling constants for the picker.

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on the intensity slider
pub const THUMB_RADIUS: f64 = 7.0;

/// Side length in pixels of the cached wheel raster
pub const WHEEL_RASTER_SIZE: u32 = 360;

/// Border radius for tracks, swatches and buttons
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// RGB input field width
pub const INPUT_WIDTH: f32 = 36.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 72.0;

/// Input font size
pub const INPUT_FONT: f32 = 11.0;

/// Label font size
pub const LABEL_FONT: f32 = 10.0;

/// Default palette swatch side
pub const SWATCH_SIZE: f32 = 22.0;

/// Width of the new/current preview block
pub const PREVIEW_WIDTH: f32 = 50.0;

/// Height of each half of the preview block
pub const PREVIEW_HALF_HEIGHT: f32 = 25.0;
