use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Species colors
// ---------------------------------------------------------------------------

/// Fixed species → color mapping, following the palmerpenguins convention
/// (Adelie orange, Chinstrap purple, Gentoo teal). The mapping is constant
/// so plot, legend, and sidebar swatches always agree.
pub fn species_color(sp: Species) -> Color32 {
    match sp {
        Species::Adelie => Color32::from_rgb(0xff, 0x8c, 0x00),
        Species::Chinstrap => Color32::from_rgb(0xa0, 0x34, 0xf0),
        Species::Gentoo => Color32::from_rgb(0x15, 0x90, 0x90),
    }
}

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

/// Lighten a color by moving its HSL lightness toward white.
/// Used for tinted value-box backgrounds derived from the species palette.
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let srgb = Srgb::new(
        color.r() as f32 / 255.0,
        color.g() as f32 / 255.0,
        color.b() as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_has_a_distinct_color() {
        let colors: Vec<Color32> = Species::ALL.iter().map(|&sp| species_color(sp)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn lighten_moves_toward_white_and_saturates() {
        let base = species_color(Species::Gentoo);
        let lighter = lighten(base, 0.2);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(lighter) > sum(base));
        assert_eq!(lighten(Color32::WHITE, 0.5), Color32::WHITE);
    }
}
