//! Picker panel: wheel, intensity slider and swatches on the left; hex and
//! RGB fields, preview and the Select button on the right.

use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalWith};

use crate::brightness_slider::brightness_slider;
use crate::color::HexColor;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::draft::Channel;
#[cfg(feature = "copy")]
use crate::inputs::copy_button;
use crate::inputs::{channel_input, hex_input};
use crate::palette::PickerConfig;
use crate::session::ColorSession;
use crate::swatches::{none_button, palette_row, preview};

fn select_button(on_select: impl Fn() + 'static) -> impl IntoView {
    label(|| "Select")
        .style(|s| {
            s.padding_horiz(14.0)
                .padding_vert(4.0)
                .font_size(constants::INPUT_FONT)
                .color(Color::WHITE)
                .background(Color::rgb8(25, 118, 210))
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(21, 101, 192)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| on_select())
}

/// Builds the panel around an open session.
///
/// `on_commit` receives the selected color, or `None` for "no color". The
/// session is cloned out of its signal and consumed by the commit; the caller
/// is expected to close the picker afterwards.
pub(crate) fn picker(
    session: RwSignal<ColorSession>,
    config: PickerConfig,
    on_commit: impl Fn(Option<HexColor>) + 'static,
) -> impl IntoView {
    let on_commit = Rc::new(on_commit);
    let on_none = {
        let on_commit = on_commit.clone();
        move || on_commit(session.with_untracked(|s| s.clone().commit_none()).into_option())
    };
    let on_select =
        move || on_commit(session.with_untracked(|s| s.clone().commit_selected()).into_option());

    let show_none = config.show_none;
    let show_rgb = config.show_rgb_inputs;
    #[cfg(feature = "copy")]
    let show_copy = config.show_copy;

    let left = v_stack((
        color_wheel(session),
        h_stack((
            label(|| "Val").style(|s| s.font_size(constants::LABEL_FONT).min_width(22.0)),
            brightness_slider(session).style(|s| s.flex_grow(1.0)),
        ))
        .style(|s| s.items_center().gap(4.0)),
        label(|| "Defaults").style(|s| s.font_size(constants::LABEL_FONT)),
        h_stack((
            palette_row(session, config.palette),
            none_button(on_none).style(move |s| s.apply_if(!show_none, |s| s.hide())),
        ))
        .style(|s| s.gap(constants::GAP / 2.0).items_start()),
    ))
    .style(|s| s.width(180.0).gap(constants::GAP));

    let hex_row = h_stack((
        hex_input(session),
        #[cfg(feature = "copy")]
        copy_button(move || session.with(|s| s.final_color().to_hex()))
            .style(move |s| s.apply_if(!show_copy, |s| s.hide())),
    ))
    .style(|s| s.gap(4.0).items_start());

    let rgb_rows = v_stack((
        channel_input(session, Channel::R),
        channel_input(session, Channel::G),
        channel_input(session, Channel::B),
    ))
    .style(move |s| s.gap(4.0).apply_if(!show_rgb, |s| s.hide()));

    let right = v_stack((hex_row, rgb_rows, preview(session)))
        .style(|s| s.gap(constants::GAP).items_center());

    v_stack((
        h_stack((left, right)).style(|s| s.gap(constants::GAP * 2.0)),
        h_stack((empty().style(|s| s.flex_grow(1.0)), select_button(on_select))),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding(constants::PADDING)
            .background(Color::rgb8(242, 242, 242))
    })
}
