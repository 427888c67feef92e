//! Named color palettes for field rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single RGB color stop.
pub type Rgb = [u8; 3];

/// Named palette selection.
///
/// Each palette is an ordered list of at least two stops, interpolated
/// linearly across the normalized temperature range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Magma,
    Inferno,
    Viridis,
    Ice,
}

const MAGMA: [Rgb; 6] = [
    [0, 0, 4],
    [59, 15, 112],
    [140, 41, 129],
    [222, 73, 104],
    [254, 159, 109],
    [252, 253, 191],
];

const INFERNO: [Rgb; 6] = [
    [0, 0, 4],
    [66, 10, 104],
    [147, 38, 103],
    [221, 81, 58],
    [252, 165, 10],
    [252, 255, 164],
];

const VIRIDIS: [Rgb; 6] = [
    [68, 1, 84],
    [65, 68, 135],
    [42, 120, 142],
    [34, 168, 132],
    [122, 209, 81],
    [253, 231, 37],
];

const ICE: [Rgb; 5] = [
    [0, 0, 0],
    [0, 31, 63],
    [0, 116, 217],
    [127, 219, 255],
    [255, 255, 255],
];

impl Palette {
    /// All selectable palettes, in menu order.
    pub const ALL: [Palette; 4] = [
        Palette::Magma,
        Palette::Inferno,
        Palette::Viridis,
        Palette::Ice,
    ];

    /// Ordered color stops for this palette.
    pub fn stops(self) -> &'static [Rgb] {
        match self {
            Palette::Magma => &MAGMA,
            Palette::Inferno => &INFERNO,
            Palette::Viridis => &VIRIDIS,
            Palette::Ice => &ICE,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Palette::Magma => "Magma",
            Palette::Inferno => "Inferno",
            Palette::Viridis => "Viridis",
            Palette::Ice => "Ice",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Magma
    }
}

impl FromStr for Palette {
    type Err = UnknownPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPalette(s.to_owned()))
    }
}

/// Error returned when parsing an unrecognized palette name.
#[derive(Debug, thiserror::Error)]
#[error("unknown palette {0:?}")]
pub struct UnknownPalette(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_palettes_have_enough_stops() {
        for palette in Palette::ALL {
            assert!(
                palette.stops().len() >= 2,
                "{} needs at least 2 stops",
                palette.name()
            );
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for palette in Palette::ALL {
            assert_eq!(palette.name().parse::<Palette>().unwrap(), palette);
        }
        assert_eq!("magma".parse::<Palette>().unwrap(), Palette::Magma);
        assert!("plasma".parse::<Palette>().is_err());
    }
}
