use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.55, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Brand colours
// ---------------------------------------------------------------------------

/// Assigns each brand of the full dataset a fixed colour, so a brand keeps its
/// colour however the view is filtered.
#[derive(Debug, Clone, Default)]
pub struct BrandColors {
    mapping: BTreeMap<String, Color32>,
}

impl BrandColors {
    pub fn new(brands: &[String]) -> Self {
        let mapping = brands
            .iter()
            .cloned()
            .zip(generate_palette(brands.len()))
            .collect();
        Self { mapping }
    }

    /// Colour for `brand`, teal for brands outside the palette.
    pub fn color_for(&self, brand: &str) -> Color32 {
        self.mapping
            .get(brand)
            .copied()
            .unwrap_or(Color32::from_rgb(75, 192, 192))
    }
}
