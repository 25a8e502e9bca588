//! Error types for color parsing.

use thiserror::Error;

/// Errors produced when text cannot be turned into a color.
///
/// The picker session never returns these; it keeps invalid input as a draft
/// instead. They surface only from the fallible constructors on
/// [`HexColor`](crate::HexColor) and [`Rgb`](crate::Rgb).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not `#` followed by exactly 3 or 6 hexadecimal digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// An RGB channel was not an integer in 0–255.
    #[error("rgb channel out of range: {0:?}")]
    ChannelOutOfRange(String),
}
