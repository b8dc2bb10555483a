/// Fills the whole RGBA buffer with an opaque color.
pub fn clear(pixel_data: &mut [u8], color: (u8, u8, u8)) {
    for px in pixel_data.chunks_exact_mut(4) {
        px[0] = color.0;
        px[1] = color.1;
        px[2] = color.2;
        px[3] = 255;
    }
}

/// Draws a filled circle into the pixel buffer with source-over blending.
///
/// Alpha is clamped into `[0, 1]` before blending, so overdriven opacity
/// values from the attracted regime render as fully opaque. Pixels outside
/// the buffer are skipped.
pub fn fill_circle(
    pixel_data: &mut [u8],
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    color: (u8, u8, u8),
    alpha: f64,
) {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha == 0.0 || radius <= 0.0 || width == 0 || height == 0 {
        return;
    }
    // Entirely off the buffer
    if cx + radius < 0.0
        || cy + radius < 0.0
        || cx - radius >= width as f64
        || cy - radius >= height as f64
    {
        return;
    }

    // Compute bounding box of the circle, clamped to the buffer
    let min_x = (cx - radius).floor().max(0.0) as usize;
    let max_x = (cx + radius).ceil().min(width as f64 - 1.0) as usize;
    let min_y = (cy - radius).floor().max(0.0) as usize;
    let max_y = (cy + radius).ceil().min(height as f64 - 1.0) as usize;

    let r_squared = radius * radius;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f64 + 0.5 - cx;
            let dy = y as f64 + 0.5 - cy;
            if dx * dx + dy * dy <= r_squared {
                let offset = (y * width + x) * 4;
                pixel_data[offset] = blend(color.0, pixel_data[offset], alpha);
                pixel_data[offset + 1] = blend(color.1, pixel_data[offset + 1], alpha);
                pixel_data[offset + 2] = blend(color.2, pixel_data[offset + 2], alpha);
                pixel_data[offset + 3] = 255;
            }
        }
    }
}

fn blend(src: u8, dst: u8, alpha: f64) -> u8 {
    (src as f64 * alpha + dst as f64 * (1.0 - alpha)).round() as u8
}
