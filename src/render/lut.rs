//! Precomputed value-to-color lookup table.

use crate::schema::{Palette, Rgb};

/// Number of quantized temperature levels.
pub const LUT_SIZE: usize = 256;

/// Cached 256-entry RGBA table for one palette.
///
/// Building the table costs 256 interpolations; rendering a frame costs one
/// indexed load per cell. The table is rebuilt only when the selected palette
/// actually changes, never per frame.
pub struct ColorLut {
    palette: Palette,
    table: Vec<u8>,
}

impl ColorLut {
    /// Build the table for a palette.
    pub fn new(palette: Palette) -> Self {
        let mut lut = Self {
            palette,
            table: vec![0; LUT_SIZE * 4],
        };
        lut.rebuild();
        lut
    }

    /// Currently active palette.
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Switch palettes, rebuilding only on an actual change.
    pub fn set_palette(&mut self, palette: Palette) {
        if palette != self.palette {
            self.palette = palette;
            self.rebuild();
        }
    }

    /// RGBA entry for a quantized level in `0..256`.
    #[inline]
    pub fn entry(&self, index: usize) -> &[u8] {
        &self.table[index * 4..index * 4 + 4]
    }

    /// The full table: 256 RGBA entries.
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    fn rebuild(&mut self) {
        let stops = self.palette.stops();
        for i in 0..LUT_SIZE {
            let t = i as f32 / (LUT_SIZE - 1) as f32;
            let [r, g, b] = color_at(stops, t);
            self.table[i * 4] = r;
            self.table[i * 4 + 1] = g;
            self.table[i * 4 + 2] = b;
            self.table[i * 4 + 3] = 255;
        }
    }
}

/// Piecewise-linear interpolation over an ordered stop list at `t` in [0, 1].
///
/// Pure function of its inputs; the LUT is just this memoized at 256 points.
/// `t <= 0` returns the first stop exactly and `t >= 1` the last, so the
/// table endpoints are never subject to rounding.
pub fn color_at(stops: &[Rgb], t: f32) -> Rgb {
    debug_assert!(stops.len() >= 2);
    if t <= 0.0 {
        return stops[0];
    }
    if t >= 1.0 {
        return stops[stops.len() - 1];
    }

    let segments = stops.len() - 1;
    let segment_len = 1.0 / segments as f32;
    let index = ((t / segment_len) as usize).min(segments - 1);
    let frac = (t - index as f32 * segment_len) / segment_len;

    let a = stops[index];
    let b = stops[index + 1];
    let mut out = [0u8; 3];
    for c in 0..3 {
        out[c] = (a[c] as f32 + frac * (b[c] as f32 - a[c] as f32)).round() as u8;
    }
    out
}
