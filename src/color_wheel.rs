//! Hue/saturation wheel bound to a session's base color.
//!
//! Angle is hue and distance from the center is saturation, always at full
//! value. The wheel is rasterized once at a fixed resolution and scaled to
//! the widget; the session's intensity is shown as a dark overlay.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{BezPath, Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalUpdate, SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::session::ColorSession;

/// Feather width in raster pixels for anti-aliasing the circle edge.
const FEATHER: f64 = 3.0;

/// Closed polygonal circle, used for the brightness overlay.
fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Map a point relative to the wheel center to (hue degrees, saturation).
fn polar_to_hue_sat(dx: f64, dy: f64, radius: f64) -> (f64, f64) {
    let hue = dy.atan2(dx).to_degrees().rem_euclid(360.0);
    let sat = ((dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0);
    (hue, sat)
}

/// Rasterize the full-value wheel into a `side`×`side` RGBA8 buffer.
///
/// The circle is inset by [`FEATHER`] so the alpha fade fits inside the
/// buffer; color in the feather zone stays at full saturation.
fn rasterize_wheel(side: u32) -> Vec<u8> {
    let c = side as f64 / 2.0;
    let radius = c - FEATHER;
    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = py as f64 + 0.5 - c;
        for px in 0..side {
            let dx = px as f64 + 0.5 - c;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist > radius + FEATHER {
                continue;
            }
            let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);
            let (hue, sat) = polar_to_hue_sat(dx, dy, radius);
            let rgb = Hsv::new(hue, sat, 1.0).to_rgb();

            let offset = ((py * side + px) * 4) as usize;
            buf[offset] = rgb.r;
            buf[offset + 1] = rgb.g;
            buf[offset + 2] = rgb.b;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }
    buf
}

enum WheelUpdate {
    /// Hue in degrees, saturation 0.0–1.0.
    Base(f64, f64),
    Intensity(u8),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    hue: f64,
    saturation: f64,
    intensity: u8,
    size: floem::taffy::prelude::Size<f32>,
    on_pick: Box<dyn Fn(f64, f64)>,
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates the wheel. Picks go to [`ColorSession::pick_from_wheel_hsv`].
pub(crate) fn color_wheel(session: RwSignal<ColorSession>) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let hsv = session.with(|s| s.base_color().to_hsv());
        id.update_state(WheelUpdate::Base(hsv.h, hsv.s));
    });

    create_effect(move |_| {
        let intensity = session.with(|s| s.intensity());
        id.update_state(WheelUpdate::Intensity(intensity));
    });

    let (base, intensity) = session.with_untracked(|s| (s.base_color().to_hsv(), s.intensity()));

    ColorWheel {
        id,
        held: false,
        hue: base.h,
        saturation: base.s,
        intensity,
        size: Default::default(),
        on_pick: Box::new(move |hue, sat| {
            session.update(|s| {
                s.pick_from_wheel_hsv(hue, sat);
            });
        }),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn radius(&self) -> f64 {
        (self.size.width as f64).min(self.size.height as f64) / 2.0
    }

    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    fn pick_at(&mut self, pos: Point) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        let c = self.center();
        let (hue, sat) = polar_to_hue_sat(pos.x - c.x, pos.y - c.y, radius);
        self.hue = hue;
        self.saturation = sat;
        (self.on_pick)(hue, sat);
        self.id.request_layout();
    }

    fn cursor_position(&self) -> Point {
        let c = self.center();
        let angle = self.hue.to_radians();
        let r = self.saturation * self.radius();
        Point::new(c.x + angle.cos() * r, c.y + angle.sin() * r)
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }
        let side = constants::WHEEL_RASTER_SIZE;
        let blob = Blob::new(Arc::new(rasterize_wheel(side)));
        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, side, side));
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                // Gray bases carry no hue; keep the cursor's angle.
                WheelUpdate::Base(h, s) => {
                    if s > 0.0 {
                        self.hue = h;
                    }
                    self.saturation = s;
                }
                WheelUpdate::Intensity(i) => self.intensity = i,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.pick_at(e.pos);
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.pick_at(e.pos);
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
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        let center = self.center();
        let rect = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );

        cx.save();
        cx.clip(&Circle::new(center, radius));
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Darken by the session's intensity so the wheel previews the result.
        let overlay_alpha = 1.0 - self.intensity as f64 / 100.0;
        if overlay_alpha > 0.001 {
            cx.fill(
                &circle_path(center, radius),
                Color::rgba(0.0, 0.0, 0.0, overlay_alpha),
                0.0,
            );
        }

        let cur = self.cursor_position();
        let ring = |r: f64, color: Color, width: f64| (Circle::new(cur, r), color, width);
        for (circle, color, width) in [
            ring(constants::CURSOR_RADIUS + 1.0, Color::rgba8(0, 0, 0, 80), 1.0),
            ring(constants::CURSOR_RADIUS, Color::WHITE, 2.0),
            ring(constants::CURSOR_RADIUS - 1.5, Color::rgba8(0, 0, 0, 80), 1.0),
        ] {
            cx.stroke(&circle, color, &floem::kurbo::Stroke::new(width));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_mapping_covers_hue_and_saturation() {
        let (h, s) = polar_to_hue_sat(10.0, 0.0, 10.0);
        assert_eq!((h, s), (0.0, 1.0));
        let (h, s) = polar_to_hue_sat(0.0, 5.0, 10.0);
        assert!((h - 90.0).abs() < 1e-9 && (s - 0.5).abs() < 1e-9);
        let (h, _) = polar_to_hue_sat(0.0, -5.0, 10.0);
        assert!((h - 270.0).abs() < 1e-9, "h = {h}");
        let (_, s) = polar_to_hue_sat(30.0, 40.0, 10.0);
        assert_eq!(s, 1.0);
    }

    #[test]
    fn raster_is_opaque_red_at_right_edge_and_clear_in_corner() {
        let side = 64;
        let buf = rasterize_wheel(side);
        assert_eq!(buf.len(), (side * side * 4) as usize);
        assert_eq!(buf[3], 0, "corner should be transparent");
        let y = side / 2;
        let x = side - 1 - FEATHER as u32 - 1;
        let o = ((y * side + x) * 4) as usize;
        assert_eq!(buf[o], 255);
        assert!(buf[o + 1] < 40 && buf[o + 2] < 40, "{:?}", &buf[o..o + 4]);
        assert_eq!(buf[o + 3], 255);
    }
}
