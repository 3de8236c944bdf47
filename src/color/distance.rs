//! Channel-weighted Euclidean distance between colors
//!
//! The weights scale each channel difference before squaring, so the metric is
//! `sqrt(sum(((a - b) * w)^2))`. This is not a variance-weighted distance and the
//! two presets are kept exactly as calibrated.

use crate::color::types::Color;
use clap::ValueEnum;

/// Per-channel multipliers applied to channel differences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelWeights {
    /// Red channel multiplier
    pub red: f64,
    /// Green channel multiplier
    pub green: f64,
    /// Blue channel multiplier
    pub blue: f64,
}

impl ChannelWeights {
    /// Equal weight for every channel
    pub const EVEN: Self = Self {
        red: 0.33,
        green: 0.33,
        blue: 0.33,
    };

    /// Luminance-style weights favouring green
    pub const LUMA: Self = Self {
        red: 0.30,
        green: 0.59,
        blue: 0.11,
    };
}

/// Weighting policy used when matching colors against a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Weighting {
    /// Equal channel weights
    #[default]
    Even,
    /// Green-heavy weights approximating perceived luminance
    Luma,
}

impl Weighting {
    /// Channel multipliers for this policy
    pub const fn weights(self) -> ChannelWeights {
        match self {
            Self::Even => ChannelWeights::EVEN,
            Self::Luma => ChannelWeights::LUMA,
        }
    }
}

/// Weighted Euclidean distance between two colors
pub fn color_distance(a: Color, b: Color, weighting: Weighting) -> f64 {
    let weights = weighting.weights();
    let channel = |x: u8, y: u8, weight: f64| (f64::from(x) - f64::from(y)) * weight;

    let red = channel(a.red, b.red, weights.red);
    let green = channel(a.green, b.green, weights.green);
    let blue = channel(a.blue, b.blue, weights.blue);

    blue.mul_add(blue, red.mul_add(red, green * green)).sqrt()
}
