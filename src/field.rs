use druid::kurbo::Point;

use crate::dot::Dot;
use crate::graphics;

/// Default distance between dots, in pixels (smaller = more dots).
pub const SPACING: f64 = 20.0;

/// The grid of dots covering the window.
///
/// Owned by the renderer; rebuilt wholesale whenever the window size
/// changes, never updated incrementally.
pub struct DotField {
    dots: Vec<Dot>,
    spacing: f64,
    mouse_radius: f64,
}

impl DotField {
    pub fn new(spacing: f64, mouse_radius: f64) -> Self {
        DotField {
            dots: Vec::new(),
            spacing,
            mouse_radius,
        }
    }

    /// Discards the grid and recreates a dot at every multiple of the
    /// spacing within `[0, width) x [0, height)`, outer loop over x.
    pub fn rebuild(&mut self, width: f64, height: f64) {
        self.dots.clear();
        let mut x = 0.0;
        while x < width {
            let mut y = 0.0;
            while y < height {
                self.dots.push(Dot::new(x, y));
                y += self.spacing;
            }
            x += self.spacing;
        }
        tracing::debug!(width, height, dots = self.dots.len(), "rebuilt dot grid");
    }

    /// Advances every dot one frame, in grid order.
    pub fn tick(&mut self, pointer: Point) {
        for dot in &mut self.dots {
            dot.update(pointer, self.mouse_radius);
        }
    }

    /// Paints every dot into the RGBA buffer, in grid order. The caller
    /// clears the buffer first; overlap between neighboring dots is
    /// resolved purely by draw order.
    pub fn draw(&self, pixel_data: &mut [u8], width: usize, height: usize, color: (u8, u8, u8)) {
        for dot in &self.dots {
            graphics::fill_circle(
                pixel_data, width, height, dot.pos.x, dot.pos.y, dot.radius, color, dot.alpha,
            );
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}
