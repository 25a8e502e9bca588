//! Intensity slider (0–100).
//!
//! A horizontal track from black (left) to the session's base color (right),
//! drawn as a rasterized image rather than a vger linear gradient.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalUpdate, SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::HexColor;
use crate::constants;
use crate::session::ColorSession;

/// Rasterize black → `base` left to right.
fn rasterize_intensity_track(width: u32, height: u32, base: HexColor) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let span = (width - 1).max(1) as f64;
    for px in 0..width {
        let t = px as f64 / span;
        let texel = [
            (t * base.r() as f64 + 0.5) as u8,
            (t * base.g() as f64 + 0.5) as u8,
            (t * base.b() as f64 + 0.5) as u8,
            255,
        ];
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&texel);
        }
    }
    buf
}

/// Map an x position on a track of `width` to an intensity 0–100.
fn intensity_at(x: f64, width: f64) -> Option<u8> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    (usable > 0.0).then(|| (((x - r) / usable).clamp(0.0, 1.0) * 100.0).round() as u8)
}

enum SliderUpdate {
    Intensity(u8),
    Base(HexColor),
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    held: bool,
    intensity: u8,
    base: HexColor,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(u8)>,
    track_img: Option<peniko::Image>,
    track_hash: Vec<u8>,
    cached: Option<(HexColor, u32, u32)>,
}

/// Creates the slider. Moves go to [`ColorSession::move_slider`].
pub(crate) fn brightness_slider(session: RwSignal<ColorSession>) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let intensity = session.with(|s| s.intensity());
        id.update_state(SliderUpdate::Intensity(intensity));
    });

    create_effect(move |_| {
        let base = session.with(|s| s.base_color());
        id.update_state(SliderUpdate::Base(base));
    });

    let (intensity, base) = session.with_untracked(|s| (s.intensity(), s.base_color()));

    BrightnessSlider {
        id,
        held: false,
        intensity,
        base,
        size: Default::default(),
        on_change: Box::new(move |value| {
            session.update(|s| {
                s.move_slider(value);
            });
        }),
        track_img: None,
        track_hash: Vec::new(),
        cached: None,
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn drag_to(&mut self, x: f64) {
        let Some(value) = intensity_at(x, self.size.width as f64) else {
            return;
        };
        if value != self.intensity {
            self.intensity = value;
            (self.on_change)(value);
        }
        self.id.request_layout();
    }

    fn ensure_track_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached == Some((self.base, pw, ph)) {
            return;
        }
        let blob = Blob::new(Arc::new(rasterize_intensity_track(pw, ph, self.base)));
        self.track_hash = blob.id().to_le_bytes().to_vec();
        self.track_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, pw, ph));
        self.cached = Some((self.base, pw, ph));
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Intensity(i) => self.intensity = i,
                SliderUpdate::Base(base) => self.base = base,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.drag_to(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.drag_to(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        self.size = self.id.get_layout().unwrap_or_default().size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_track_image(scale);
        if let Some(ref img) = self.track_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.track_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        let radius = constants::THUMB_RADIUS;
        let thumb = (
            radius + self.intensity as f64 / 100.0 * (w - 2.0 * radius),
            h / 2.0,
        );
        cx.stroke(
            &Circle::new(thumb, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(&Circle::new(thumb, radius - 1.5), Color::WHITE, &Stroke::new(2.0));
        cx.stroke(
            &Circle::new(thumb, radius - 3.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
    }
}
