//! Circular heat injection.

use super::Field;

/// Fraction of the configured intensity added per interaction event.
pub const INJECTION_SCALE: f32 = 0.1;

/// Saturation ceiling for injected heat.
pub const SATURATION: f32 = 1.0;

/// Add heat inside a circle around `(x, y)` (grid coordinates, col/row order).
///
/// Writes go directly into the current buffer so the stroke is visible on the
/// very next render, without waiting for a diffusion pass. Injection is
/// additive and saturates at 1.0, so holding the brush in one spot has
/// diminishing effect. Centers outside the grid are fine; the bounding box is
/// clamped and out-of-circle cells are skipped.
pub fn inject(field: &mut Field, x: f32, y: f32, radius: f32, intensity: f32) {
    let n = field.resolution();
    let max = (n - 1) as f32;
    let r_sq = radius * radius;

    let min_col = (x - radius).floor().clamp(0.0, max) as usize;
    let max_col = (x + radius).ceil().clamp(0.0, max) as usize;
    let min_row = (y - radius).floor().clamp(0.0, max) as usize;
    let max_row = (y + radius).ceil().clamp(0.0, max) as usize;

    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let dx = col as f32 - x;
            let dy = row as f32 - y;
            if dx * dx + dy * dy <= r_sq {
                let heated = field.value_at(row, col) + intensity * INJECTION_SCALE;
                field.set_value(row, col, heated.min(SATURATION));
            }
        }
    }
}
