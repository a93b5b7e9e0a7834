use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::WeatherCode;

/// Daily trend line and the regular-day holiday bar.
pub const PRIMARY: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
/// Holiday bar.
pub const ACCENT: Color32 = Color32::from_rgb(0xff, 0x7f, 0x0e);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` shades of blue, light to dark, for ordered categories.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.5 } else { i as f32 / (n - 1) as f32 };
            let hsl = Hsl::new(210.0, 0.65, 0.75 - 0.45 * t);
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
// Color mapping: weather code → Color32
// ---------------------------------------------------------------------------

/// Maps the weather codes present in the data to distinct shades.
#[derive(Debug, Clone)]
pub struct WeatherColors {
    mapping: BTreeMap<WeatherCode, Color32>,
    default_color: Color32,
}

impl WeatherColors {
    pub fn new(codes: &BTreeSet<WeatherCode>) -> Self {
        let palette = generate_palette(codes.len());
        let mapping = codes.iter().copied().zip(palette).collect();

        WeatherColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a weather code.
    pub fn color_for(&self, code: WeatherCode) -> Color32 {
        self.mapping
            .get(&code)
            .copied()
            .unwrap_or(self.default_color)
    }
}
