//! Tests for channel-weighted color distance

#[cfg(test)]
mod tests {
    use floopify::color::distance::ChannelWeights;
    use floopify::color::{Color, Weighting, color_distance};

    const TOLERANCE: f64 = 1e-9;

    // Tests the even weighting scales differences by 0.33
    // Verified by squaring the weights instead of the scaled differences
    #[test]
    fn test_even_distance_value() {
        let distance = color_distance(Color::new(0, 0, 0), Color::new(100, 0, 0), Weighting::Even);
        assert!((distance - 33.0).abs() < TOLERANCE, "got {distance}");

        let distance = color_distance(
            Color::new(10, 20, 30),
            Color::new(13, 24, 30),
            Weighting::Even,
        );
        // sqrt((3 * 0.33)^2 + (4 * 0.33)^2) = 5 * 0.33
        assert!((distance - 1.65).abs() < TOLERANCE, "got {distance}");
    }

    // Tests luma weighting favours green differences over blue
    // Verified by using even weights for the luma policy
    #[test]
    fn test_luma_weighting_values() {
        let green = color_distance(Color::BLACK, Color::new(0, 100, 0), Weighting::Luma);
        let blue = color_distance(Color::BLACK, Color::new(0, 0, 100), Weighting::Luma);
        let red = color_distance(Color::BLACK, Color::new(100, 0, 0), Weighting::Luma);

        assert!((green - 59.0).abs() < TOLERANCE);
        assert!((blue - 11.0).abs() < TOLERANCE);
        assert!((red - 30.0).abs() < TOLERANCE);
    }

    // Tests symmetry and zero self-distance under both weightings
    // Verified by dropping the absolute difference in one channel
    #[test]
    fn test_symmetry_and_identity() {
        let samples = [
            Color::new(0, 0, 0),
            Color::new(255, 255, 255),
            Color::new(225, 96, 98),
            Color::new(17, 200, 3),
        ];

        for weighting in [Weighting::Even, Weighting::Luma] {
            for &a in &samples {
                assert!(color_distance(a, a, weighting).abs() < TOLERANCE);
                for &b in &samples {
                    let ab = color_distance(a, b, weighting);
                    let ba = color_distance(b, a, weighting);
                    assert!((ab - ba).abs() < TOLERANCE, "{a:?} vs {b:?}");
                }
            }
        }
    }

    // Tests default weighting and preset tables
    // Verified by defaulting to luma
    #[test]
    fn test_weighting_presets() {
        assert_eq!(Weighting::default(), Weighting::Even);
        assert_eq!(Weighting::Even.weights(), ChannelWeights::EVEN);
        assert_eq!(Weighting::Luma.weights(), ChannelWeights::LUMA);
        assert!((ChannelWeights::LUMA.green - 0.59).abs() < TOLERANCE);
    }
}
