use druid::kurbo::Point;

use crate::math::{distance, ease_toward};

/// Default radius of the pointer effect around the mouse.
pub const MOUSE_RADIUS: f64 = 55.0;
/// Dot radius while resting.
pub const REST_RADIUS: f64 = 1.5;
/// Dot opacity while resting.
pub const BASE_ALPHA: f64 = 0.2;
/// Fraction of the remaining offset recovered per frame when easing home.
const EASE_FACTOR: f64 = 0.1;

/// One point of the animated grid.
pub struct Dot {
    /// Fixed origin; the dot eases back here when the pointer leaves.
    pub base: Point,
    /// Currently displayed position.
    pub pos: Point,
    pub radius: f64,
    pub base_alpha: f64,
    pub alpha: f64,
    /// Vestigial random weight carried over from the original effect;
    /// read by no logic.
    pub density: f64,
}

impl Dot {
    pub fn new(x: f64, y: f64) -> Self {
        Dot {
            base: Point::new(x, y),
            pos: Point::new(x, y),
            radius: REST_RADIUS,
            base_alpha: BASE_ALPHA,
            alpha: BASE_ALPHA,
            density: rand::random::<f64>() * 30.0 + 1.0,
        }
    }

    /// Advances the dot one frame against the current pointer position.
    ///
    /// Within `mouse_radius` (strict) the dot grows and brightens with
    /// proximity; outside it snaps back to resting size and opacity and
    /// eases toward its origin.
    pub fn update(&mut self, pointer: Point, mouse_radius: f64) {
        let dist = distance(self.pos, pointer);
        if dist < mouse_radius {
            let intensity = 1.0 - dist / mouse_radius;
            self.radius = 2.0 + intensity * 2.0;
            // Carried over verbatim from the original effect. Overshoots any
            // displayable opacity range; the rasterizer clamps it to fully
            // opaque when drawing.
            self.alpha = 20.0 + intensity * 0.2;
        } else {
            self.radius = REST_RADIUS;
            self.alpha = self.base_alpha;
            self.pos.x = ease_toward(self.pos.x, self.base.x, EASE_FACTOR);
            self.pos.y = ease_toward(self.pos.y, self.base.y, EASE_FACTOR);
        }
    }
}
