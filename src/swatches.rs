//! Default palette buttons, the "no color" button, and the new/current preview.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::color::HexColor;
use crate::constants;
use crate::session::ColorSession;

fn fill(color: HexColor) -> Color {
    Color::rgb8(color.r(), color.g(), color.b())
}

fn swatch(session: RwSignal<ColorSession>, color: HexColor) -> impl IntoView {
    empty()
        .style(move |s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .background(fill(color))
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.border_color(Color::rgb8(80, 80, 80)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            session.update(|s| {
                s.pick_default(color);
            });
        })
}

/// Clickable palette swatches, wrapping onto as many rows as needed.
pub(crate) fn palette_row(session: RwSignal<ColorSession>, palette: Vec<HexColor>) -> impl IntoView {
    h_stack_from_iter(palette.into_iter().map(move |color| swatch(session, color))).style(|s| {
        s.flex_wrap(floem::taffy::FlexWrap::Wrap)
            .gap(constants::GAP / 2.0)
            .items_center()
    })
}

/// Icon button for "no color". `on_none` should commit the session.
pub(crate) fn none_button(on_none: impl Fn() + 'static) -> impl IntoView {
    label(|| lucide_icons::Icon::Eraser.unicode().to_string())
        .style(|s| {
            s.size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .items_center()
                .justify_center()
                .font_size(14.0)
                .font_family("lucide".to_string())
                .color(Color::rgb8(120, 120, 120))
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| on_none())
}

/// Two-part preview: the edited color on top, the seed below.
pub(crate) fn preview(session: RwSignal<ColorSession>) -> impl IntoView {
    let half = move |pick: fn(&ColorSession) -> HexColor| {
        empty().style(move |s| {
            let c = session.with(pick);
            s.width_full()
                .height(constants::PREVIEW_HALF_HEIGHT)
                .background(fill(c))
        })
    };
    v_stack((
        label(|| "New").style(|s| s.font_size(constants::LABEL_FONT)),
        v_stack((half(ColorSession::final_color), half(ColorSession::seed))).style(|s| {
            s.width(constants::PREVIEW_WIDTH)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .border_radius(constants::RADIUS)
        }),
        label(|| "Current").style(|s| s.font_size(constants::LABEL_FONT)),
    ))
    .style(|s| s.items_center().gap(2.0))
}
