//! # floem-tint
//!
//! A hex/RGB/HSV color picker for [Floem](https://github.com/lapce/floem),
//! built around a plain-Rust [`ColorSession`].
//!
//! The session keeps one color consistent across a wheel (base color), an
//! intensity slider, a hex field and three RGB fields, while tolerating
//! half-typed input. It has no UI dependency and can be driven directly:
//!
//! ```rust
//! use floem_tint::{Channel, ColorSession};
//!
//! let mut session = ColorSession::open(Some("#336699"));
//! session.type_rgb_channel(Channel::R, "255");
//! session.type_rgb_channel(Channel::G, "0");
//! session.type_rgb_channel(Channel::B, "0");
//! let picked = session.commit_selected().into_option();
//! assert_eq!(picked.map(|c| c.to_hex()), Some("#FF0000".to_string()));
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_tint::{tint_picker, PickerConfig};
//!
//! // Use `tint_picker(...)` in your Floem view tree.
//! let _view = tint_picker(Some("#F57C00"), PickerConfig::default(), |picked| {
//!     println!("picked {picked:?}");
//! });
//! ```

mod brightness_slider;
mod color;
mod color_wheel;
mod constants;
mod decompose;
mod draft;
mod error;
mod inputs;
mod math;
mod palette;
mod picker;
mod session;
mod swatches;

pub use color::{HexColor, Hsv, Rgb, is_valid_hex, rgb_to_hex};
pub use decompose::{adjust_brightness, base_color_of, intensity_of, recompose};
pub use draft::{Channel, HexDraft, RgbDraft, parse_channel};
pub use error::ColorError;
pub use palette::{DEFAULT_PALETTE, PickerConfig};
pub use session::{ColorSession, Selection};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Opens a session on `initial` and builds the picker view for it.
///
/// Invalid or absent `initial` colors start the picker at black.
/// `on_commit` is called once per "Select" (with the color) or "no color"
/// (with `None`).
pub fn tint_picker<F>(
    initial: Option<&str>,
    config: PickerConfig,
    on_commit: F,
) -> impl IntoView + use<F>
where
    F: Fn(Option<HexColor>) + 'static,
{
    tint_picker_with(RwSignal::new(ColorSession::open(initial)), config, on_commit)
}

/// Builds the picker view over a session signal owned by the caller.
///
/// The view writes to `session` only through its edit operations, so the
/// caller can read any of its fields reactively.
pub fn tint_picker_with(
    session: RwSignal<ColorSession>,
    config: PickerConfig,
    on_commit: impl Fn(Option<HexColor>) + 'static,
) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker(session, config, on_commit)
}
