//! Fly-Ghost Geometry
//!
//! A contributed card flies from its board cell into the community carousel.
//! All math works on plain rectangles; the DOM is only touched through
//! [`Measure`].

use crate::models::Card;

pub const FLY_DURATION_MS: u32 = 700;
pub const DESTINATION_INSET_PX: f64 = 12.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Screen measurement capability
pub trait Measure {
    fn measure(&self, element: &web_sys::Element) -> Rect;
}

/// Viewport-relative rectangles from `getBoundingClientRect`
#[derive(Clone, Copy, Default)]
pub struct BrowserMeasure;

impl Measure for BrowserMeasure {
    fn measure(&self, element: &web_sys::Element) -> Rect {
        let r = element.get_bounding_client_rect();
        Rect { x: r.left(), y: r.top(), width: r.width(), height: r.height() }
    }
}

/// Where a ghost lands inside the carousel viewport
pub fn destination_for(viewport: Rect) -> Point {
    Point {
        x: viewport.x + DESTINATION_INSET_PX,
        y: viewport.y + DESTINATION_INSET_PX,
    }
}

/// One animation stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Progress in [0, 1]
    pub at: f64,
    /// Fraction of the origin→destination travel covered
    pub travel: f64,
    pub scale: f64,
    pub opacity: f64,
}

const STOPS: [Frame; 3] = [
    Frame { at: 0.0, travel: 0.0, scale: 1.0, opacity: 1.0 },
    Frame { at: 0.75, travel: 1.0, scale: 0.6, opacity: 0.9 },
    Frame { at: 1.0, travel: 1.0, scale: 0.2, opacity: 0.0 },
];

#[derive(Debug, Clone, PartialEq)]
pub struct FlyGhost {
    /// Increments per contribution so a replacement restarts the animation
    pub flight: u64,
    pub card: Card,
    pub from: Rect,
    pub to: Point,
}

impl FlyGhost {
    pub fn new(flight: u64, card: Card, from: Rect, to: Point) -> Self {
        Self { flight, card, from, to }
    }

    /// Translation from the origin's top-left corner to the destination
    pub fn delta(&self) -> (f64, f64) {
        (self.to.x - self.from.x, self.to.y - self.from.y)
    }

    /// Interpolated stop at progress `t` (clamped to [0, 1])
    pub fn sample(&self, t: f64) -> Frame {
        let t = t.clamp(0.0, 1.0);
        let mut prev = STOPS[0];
        for next in STOPS.iter().skip(1) {
            if t <= next.at {
                let span = next.at - prev.at;
                let k = if span > 0.0 { (t - prev.at) / span } else { 1.0 };
                return Frame {
                    at: t,
                    travel: lerp(prev.travel, next.travel, k),
                    scale: lerp(prev.scale, next.scale, k),
                    opacity: lerp(prev.opacity, next.opacity, k),
                };
            }
            prev = *next;
        }
        prev
    }

    /// Translate in pixels at progress `t`
    pub fn offset_at(&self, t: f64) -> Point {
        let (dx, dy) = self.delta();
        let frame = self.sample(t);
        Point { x: dx * frame.travel, y: dy * frame.travel }
    }

    pub fn animation_name(&self) -> String {
        format!("fly-ghost-{}", self.flight)
    }

    pub fn keyframes_css(&self) -> String {
        let body: String = STOPS
            .iter()
            .map(|f| {
                let offset = self.offset_at(f.at);
                format!(
                    "{:.0}%{{transform:translate({:.1}px,{:.1}px) scale({});opacity:{};}}",
                    f.at * 100.0,
                    tidy(offset.x),
                    tidy(offset.y),
                    f.scale,
                    f.opacity
                )
            })
            .collect();
        format!("@keyframes {}{{{}}}", self.animation_name(), body)
    }

    /// Inline style pinning the ghost over its origin cell
    pub fn style(&self) -> String {
        let mut style = format!(
            "position:fixed;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
             transform-origin:top left;pointer-events:none;\
             background-color:{};animation:{} {}ms ease-in forwards;",
            self.from.x,
            self.from.y,
            self.from.width,
            self.from.height,
            self.card.background_color,
            self.animation_name(),
            FLY_DURATION_MS
        );
        if let Some(color) = &self.card.text_color {
            style.push_str(&format!("color:{};", color));
        }
        style
    }
}

fn lerp(a: f64, b: f64, k: f64) -> f64 {
    a + (b - a) * k
}

/// Avoids `-0.0` in generated CSS
fn tidy(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
