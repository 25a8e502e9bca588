//! Text inputs for the hex field and the three RGB fields.
//!
//! Each field owns a text signal. Keystrokes go into the session as draft
//! edits; the field text is then re-read from the session's draft, so the
//! session decides what the field shows.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect};

use crate::constants;
use crate::draft::Channel;
use crate::session::ColorSession;

fn field_style(s: floem::style::Style, width: f32) -> floem::style::Style {
    s.width(width)
        .padding(2.0)
        .font_size(constants::INPUT_FONT)
        .font_family("monospace".to_string())
        .background(Color::WHITE)
        .border(1.0)
        .border_color(Color::rgb8(200, 200, 200))
        .border_radius(3.0)
}

fn caption(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(120, 120, 120))
    })
}

/// Keep `text` and a session draft in step.
///
/// `read` renders the draft as text; `write` feeds a keystroke into the
/// session. A keystroke is only forwarded when it differs from the draft,
/// which ends the text → session → text round trip after one pass.
fn bind_draft(
    session: RwSignal<ColorSession>,
    text: RwSignal<String>,
    read: impl Fn(&ColorSession) -> String + Copy + 'static,
    write: impl Fn(&mut ColorSession, &str) + 'static,
) {
    create_effect(move |_| {
        let shown = session.with(read);
        if text.get_untracked() != shown {
            text.set(shown);
        }
    });

    create_effect(move |_| {
        let raw = text.get();
        if session.with_untracked(read) != raw {
            session.update(|s| write(s, &raw));
        }
    });
}

/// The hex field. Shows the user's text even while it is not a valid color.
pub(crate) fn hex_input(session: RwSignal<ColorSession>) -> impl IntoView {
    let text = RwSignal::new(session.with_untracked(|s| s.hex_input().text().to_string()));
    bind_draft(
        session,
        text,
        |s| s.hex_input().text().to_string(),
        |s, raw| {
            s.type_hex(raw);
        },
    );

    v_stack((
        text_input(text).style(|s| field_style(s, constants::HEX_INPUT_WIDTH)),
        caption("Hex"),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// One RGB field. Rejected keystrokes snap back to the previous value.
pub(crate) fn channel_input(session: RwSignal<ColorSession>, channel: Channel) -> impl IntoView {
    let text = RwSignal::new(session.with_untracked(|s| s.rgb_input().text(channel)));
    bind_draft(
        session,
        text,
        move |s| s.rgb_input().text(channel),
        move |s, raw| {
            s.type_rgb_channel(channel, raw);
        },
    );

    v_stack((
        text_input(text).style(|s| field_style(s, constants::INPUT_WIDTH)),
        caption(channel.label()),
    ))
    .style(|s| s.items_center().gap(1.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
#[cfg(feature = "copy")]
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        let text = get_text();
        if let Err(err) = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text)) {
            log::warn!("clipboard copy failed: {err}");
        }
    })
}
