//! Quality factor handling.
//!
//! Callers express quality as a factor in (0, 1], the same scale browsers
//! use for lossy canvas exports. Anything outside that range is not an
//! error: it falls back to [`DEFAULT_QUALITY`].

/// Quality used whenever the requested factor is unusable.
pub const DEFAULT_QUALITY: f32 = 0.9;

/// Resolve a requested quality factor to one inside (0, 1].
pub fn effective_quality(requested: f32) -> f32 {
    if requested.is_finite() && requested > 0.0 && requested <= 1.0 {
        requested
    } else {
        DEFAULT_QUALITY
    }
}

/// Map a quality factor onto the JPEG encoder's 1-100 scale.
pub fn jpeg_quality(requested: f32) -> u8 {
    let q = effective_quality(requested);
    (q * 100.0).round().clamp(1.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_values_pass_through() {
        assert_eq!(effective_quality(0.8), 0.8);
        assert_eq!(effective_quality(1.0), 1.0);
        assert_eq!(effective_quality(0.01), 0.01);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(effective_quality(0.0), DEFAULT_QUALITY);
        assert_eq!(effective_quality(-0.5), DEFAULT_QUALITY);
        assert_eq!(effective_quality(1.5), DEFAULT_QUALITY);
        assert_eq!(effective_quality(f32::NAN), DEFAULT_QUALITY);
        assert_eq!(effective_quality(f32::INFINITY), DEFAULT_QUALITY);
    }

    #[test]
    fn test_jpeg_quality_mapping() {
        assert_eq!(jpeg_quality(0.8), 80);
        assert_eq!(jpeg_quality(1.0), 100);
        assert_eq!(jpeg_quality(0.0), 90);
        assert_eq!(jpeg_quality(0.001), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any f32 resolves to a factor inside (0, 1].
        #[test]
        fn prop_effective_quality_in_range(q in any::<f32>()) {
            let e = effective_quality(q);
            prop_assert!(e > 0.0 && e <= 1.0);
        }

        /// Property: invalid factors always resolve to the default.
        #[test]
        fn prop_outside_range_is_default(q in prop_oneof![-1000.0f32..=0.0, 1.0001f32..1000.0]) {
            prop_assert_eq!(effective_quality(q), DEFAULT_QUALITY);
        }

        /// Property: the encoder scale is always 1-100.
        #[test]
        fn prop_jpeg_quality_bounds(q in any::<f32>()) {
            let jq = jpeg_quality(q);
            prop_assert!((1..=100).contains(&jq));
        }
    }
}
