//! Property-based invariant tests for color parsing and style derivation.
//!
//! 1. Style derivation agrees with the 0.5 luminance threshold.
//! 2. Parsing recovers exact channel values.
//! 3. The 6-digit form is always opaque.
//! 4. Input without a leading '#' is always rejected.

use edgekit_style::{BarStyle, Rgba, parse_hex};
use proptest::prelude::*;

proptest! {
    // Style derivation agrees with the 0.5 luminance threshold for every
    // valid 6-digit hex string.
    #[test]
    fn style_matches_luminance_threshold(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = format!("#{r:02X}{g:02X}{b:02X}");
        let color = parse_hex(&hex).expect("6-digit hex is always valid");
        let luma = (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0;
        let expected = if luma < 0.5 { BarStyle::LightContent } else { BarStyle::Default };
        prop_assert_eq!(BarStyle::for_background(color), expected);
    }

    // Parsing a formatted color recovers the exact channels.
    #[test]
    fn parse_recovers_channels(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255, a in 0u8..=255) {
        let hex = format!("#{a:02X}{r:02X}{g:02X}{b:02X}");
        prop_assert_eq!(parse_hex(&hex), Ok(Rgba::new(r, g, b, a)));
    }

    // A 6-digit form is always opaque.
    #[test]
    fn six_digit_form_is_opaque(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let hex = format!("#{r:02X}{g:02X}{b:02X}");
        let color = parse_hex(&hex).expect("6-digit hex is always valid");
        prop_assert_eq!(color.a, 255);
    }

    // Input without a leading '#' is rejected no matter its content.
    #[test]
    fn missing_hash_is_rejected(s in "[0-9a-fA-F]{6}") {
        prop_assert!(parse_hex(&s).is_err());
    }
}
