use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

use iris_dash::data::Species;

/// Fixed species colours: leaf green, sky blue, flower purple.
const SPECIES_HEX: [(Species, &str); 3] = [
    (Species::Setosa, "#34A853"),
    (Species::Versicolor, "#4285F4"),
    (Species::Virginica, "#9B59B6"),
];

/// Opacity of histogram bars so overlapping species blend.
pub const HISTOGRAM_OPACITY: f32 = 0.7;

// ---------------------------------------------------------------------------
// Colour helpers
// ---------------------------------------------------------------------------

fn parse_hex(hex: &str) -> Option<Color32> {
    let rgb: Srgb<u8> = hex.parse().ok()?;
    Some(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Raise HSL lightness by `amount` (relative, `0.0..=1.0`).
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let rgb: Srgb = Srgb::new(color.r(), color.g(), color.b()).into_format();
    let hsl: Hsl = rgb.into_color();
    let rgb: Srgb = hsl.lighten(amount).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Species, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        let mapping = SPECIES_HEX
            .iter()
            .filter_map(|&(species, hex)| parse_hex(hex).map(|c| (species, c)))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }
}

impl ColorMap {
    pub fn color_for(&self, species: Species) -> Color32 {
        self.mapping
            .get(&species)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Translucent variant for histogram bars.
    pub fn bar_fill_for(&self, species: Species) -> Color32 {
        self.color_for(species).gamma_multiply(HISTOGRAM_OPACITY)
    }

    /// Pale variant for box plot bodies.
    pub fn box_fill_for(&self, species: Species) -> Color32 {
        lighten(self.color_for(species), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_use_fixed_colours() {
        let cm = ColorMap::default();
        assert_eq!(cm.color_for(Species::Setosa), Color32::from_rgb(0x34, 0xA8, 0x53));
        assert_eq!(cm.color_for(Species::Versicolor), Color32::from_rgb(0x42, 0x85, 0xF4));
        assert_eq!(cm.color_for(Species::Virginica), Color32::from_rgb(0x9B, 0x59, 0xB6));
    }

    #[test]
    fn lighten_never_darkens() {
        let base = Color32::from_rgb(0x34, 0xA8, 0x53);
        let pale = lighten(base, 0.5);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(pale) > sum(base));
    }
}
