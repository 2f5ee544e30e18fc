//! Geometric primitives used by the surface pipeline.

use serde::{Deserialize, Serialize};

/// An integer size with `u32` dimensions.
///
/// Surface geometry is always stored as non-negative integers; hosts that
/// measure fractionally (layout engines commonly report sub-pixel sizes)
/// are converted through [`SizeInt::from_fractional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SizeInt {
    /// The width component of the size.
    pub width: u32,
    /// The height component of the size.
    pub height: u32,
}

impl SizeInt {
    /// A size of (0, 0), the geometry of a surface before any measurement.
    pub const ZERO: SizeInt = SizeInt::new(0, 0);

    /// Creates a new `SizeInt`.
    pub const fn new(width: u32, height: u32) -> Self {
        SizeInt { width, height }
    }

    /// Converts fractional host measurements to integer geometry.
    ///
    /// Each dimension is rounded to the nearest integer; non-finite and
    /// negative inputs clamp to zero so the non-negativity of surface
    /// geometry holds structurally.
    pub fn from_fractional(width: f64, height: f64) -> Self {
        SizeInt {
            width: round_dimension(width),
            height: round_dimension(height),
        }
    }

    /// Checks if the area is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

fn round_dimension(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // u32::MAX as f64 is exact; anything above saturates.
    value.round().min(u32::MAX as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    assert_impl_all!(SizeInt: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Send, Sync);

    #[test]
    fn size_int_new_and_accessors() {
        let s = SizeInt::new(800, 600);
        assert_eq!(s.width, 800);
        assert_eq!(s.height, 600);
        assert!(!s.is_empty());
    }

    #[test]
    fn size_int_default_is_zero() {
        assert_eq!(SizeInt::default(), SizeInt::ZERO);
        assert!(SizeInt::ZERO.is_empty());
    }

    #[test]
    fn size_int_is_empty_on_either_axis() {
        assert!(SizeInt::new(0, 10).is_empty());
        assert!(SizeInt::new(10, 0).is_empty());
        assert!(!SizeInt::new(1, 1).is_empty());
    }

    #[test]
    fn from_fractional_rounds_to_nearest() {
        assert_eq!(SizeInt::from_fractional(100.4, 50.5), SizeInt::new(100, 51));
        assert_eq!(SizeInt::from_fractional(99.5, 0.49), SizeInt::new(100, 0));
    }

    #[test]
    fn from_fractional_clamps_negative_and_non_finite() {
        assert_eq!(SizeInt::from_fractional(-3.0, 10.0), SizeInt::new(0, 10));
        assert_eq!(SizeInt::from_fractional(f64::NAN, f64::INFINITY), SizeInt::ZERO);
    }

    #[test]
    fn size_int_serde_round_trip() {
        let s = SizeInt::new(1280, 720);
        let serialized = serde_json::to_string(&s).unwrap();
        let deserialized: SizeInt = serde_json::from_str(&serialized).unwrap();
        assert_eq!(s, deserialized);
    }
}
