//! Field-to-pixel conversion and per-frame statistics.

use serde::{Deserialize, Serialize};

use super::ColorLut;
use crate::compute::Field;

/// Scalar summary of one field pass.
///
/// `max_temp` and `total_energy` use the raw, unclamped values: a cell driven
/// past 1.0 renders at the palette ceiling but still shows up in the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub max_temp: f32,
    pub avg_temp: f32,
    pub total_energy: f32,
    pub iteration: u64,
}

/// Render the current field into an RGBA pixel buffer, one pass.
///
/// Pixels are row-major, 8 bits per channel, matching the field's indexing;
/// `pixels` is resized to `cell_count * 4`. Each raw value is clamped to
/// [0, 1] and quantized to a LUT level with `floor(v * 255)`; statistics
/// accumulate the unclamped values alongside.
pub fn render_into(field: &Field, lut: &ColorLut, pixels: &mut Vec<u8>) -> FrameStats {
    let cells = field.current();
    pixels.resize(cells.len() * 4, 0);

    let mut max_temp = 0.0f32;
    let mut total_energy = 0.0f32;

    for (px, &raw) in pixels.chunks_exact_mut(4).zip(cells.iter()) {
        total_energy += raw;
        if raw > max_temp {
            max_temp = raw;
        }
        let level = (raw.clamp(0.0, 1.0) * 255.0) as usize;
        px.copy_from_slice(lut.entry(level));
    }

    FrameStats {
        max_temp,
        avg_temp: total_energy / cells.len() as f32,
        total_energy,
        iteration: field.iteration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Palette;

    #[test]
    fn test_cold_field_maps_to_first_stop() {
        let field = Field::new(4).unwrap();
        let lut = ColorLut::new(Palette::Magma);
        let mut pixels = Vec::new();

        let stats = render_into(&field, &lut, &mut pixels);

        assert_eq!(pixels.len(), 64);
        let first_stop = Palette::Magma.stops()[0];
        for px in pixels.chunks_exact(4) {
            assert_eq!(&px[..3], &first_stop);
            assert_eq!(px[3], 255);
        }
        assert_eq!(stats.max_temp, 0.0);
        assert_eq!(stats.total_energy, 0.0);
        assert_eq!(stats.iteration, 0);
    }

    #[test]
    fn test_hot_cell_maps_to_last_stop() {
        let mut field = Field::new(4).unwrap();
        field.set_value(1, 1, 1.0);
        let lut = ColorLut::new(Palette::Ice);
        let mut pixels = Vec::new();

        render_into(&field, &lut, &mut pixels);

        let i = field.idx(1, 1) * 4;
        let stops = Palette::Ice.stops();
        assert_eq!(&pixels[i..i + 3], &stops[stops.len() - 1]);
    }

    #[test]
    fn test_stats_use_unclamped_values() {
        // Super-heated cells saturate the rendered color but not the stats.
        let mut field = Field::new(4).unwrap();
        field.set_value(1, 1, 2.5);
        field.set_value(2, 2, 0.5);
        let lut = ColorLut::new(Palette::Viridis);
        let mut pixels = Vec::new();

        let stats = render_into(&field, &lut, &mut pixels);

        assert!((stats.max_temp - 2.5).abs() < 1e-6);
        assert!((stats.total_energy - 3.0).abs() < 1e-6);
        assert!((stats.avg_temp - 3.0 / 16.0).abs() < 1e-6);

        let hot = field.idx(1, 1) * 4;
        let stops = Palette::Viridis.stops();
        assert_eq!(&pixels[hot..hot + 3], &stops[stops.len() - 1]);
    }

    #[test]
    fn test_negative_values_clamp_to_first_stop() {
        let mut field = Field::new(4).unwrap();
        field.set_value(1, 1, -0.3);
        let lut = ColorLut::new(Palette::Magma);
        let mut pixels = Vec::new();

        let stats = render_into(&field, &lut, &mut pixels);

        let i = field.idx(1, 1) * 4;
        assert_eq!(&pixels[i..i + 3], &Palette::Magma.stops()[0]);
        // max_temp never goes negative; total_energy does.
        assert_eq!(stats.max_temp, 0.0);
        assert!(stats.total_energy < 0.0);
    }

    #[test]
    fn test_stats_json_matches_front_end() {
        let stats = FrameStats {
            max_temp: 1.0,
            avg_temp: 0.5,
            total_energy: 8.0,
            iteration: 30,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"maxTemp\""));
        assert!(json.contains("\"totalEnergy\""));
    }
}
