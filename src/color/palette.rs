//! Fixed output palettes and nearest-color lookup

use crate::color::distance::{Weighting, color_distance};
use crate::color::types::Color;
use crate::io::error::{Result, invalid_parameter};
use clap::ValueEnum;

/// Colors picked from the reference photograph of the cereal bowl
pub const SAMPLED_COLORS: [Color; 8] = [
    Color::new(225, 96, 98),
    Color::new(240, 204, 94),
    Color::new(127, 179, 99),
    Color::new(146, 123, 139),
    Color::new(105, 175, 181),
    Color::new(225, 116, 55),
    Color::BLACK,
    Color::WHITE,
];

/// Saturated variant of the sampled colors
pub const BRIGHT_COLORS: [Color; 8] = [
    Color::new(255, 0, 0),
    Color::new(255, 231, 0),
    Color::new(124, 255, 0),
    Color::new(201, 0, 255),
    Color::new(0, 223, 255),
    Color::new(248, 149, 33),
    Color::BLACK,
    Color::WHITE,
];

/// Built-in palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PalettePreset {
    /// Colors sampled from the reference photograph
    #[default]
    Sampled,
    /// Fully saturated colors
    Bright,
}

impl PalettePreset {
    /// Colors of this preset in matching order
    pub const fn colors(self) -> &'static [Color] {
        match self {
            Self::Sampled => &SAMPLED_COLORS,
            Self::Bright => &BRIGHT_COLORS,
        }
    }
}

/// Ordered, non-empty set of allowed output colors
///
/// Order only matters for ties: the earliest entry at the minimum distance wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    weighting: Weighting,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_preset(PalettePreset::default())
    }
}

impl Palette {
    /// Create a palette matched with even channel weights
    ///
    /// # Errors
    ///
    /// Returns an error if `colors` is empty
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"a palette needs at least one color",
            ));
        }

        Ok(Self {
            colors,
            weighting: Weighting::default(),
        })
    }

    /// Create a palette from a built-in preset
    pub fn from_preset(preset: PalettePreset) -> Self {
        Self {
            colors: preset.colors().to_vec(),
            weighting: Weighting::default(),
        }
    }

    /// Replace the weighting used for matching
    #[must_use]
    pub const fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Palette entries in matching order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Weighting used for matching
    pub const fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Index of the entry nearest to `sample`
    pub fn closest_index(&self, sample: Color) -> usize {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, &candidate) in self.colors.iter().enumerate() {
            let distance = color_distance(sample, candidate, self.weighting);
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }

        best_index
    }

    /// Entry nearest to `sample`
    pub fn closest_color(&self, sample: Color) -> Color {
        self.colors
            .get(self.closest_index(sample))
            .copied()
            .unwrap_or(sample)
    }
}
