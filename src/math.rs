use druid::kurbo::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Moves `value` one easing step toward `target`, covering `factor` of the
/// remaining distance. Exponential decay: converges but never overshoots.
pub fn ease_toward(value: f64, target: f64, factor: f64) -> f64 {
    value - (value - target) * factor
}
