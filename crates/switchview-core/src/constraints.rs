//! Layout constraints handed down by the host.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
///
/// A host measure pass maps onto these directly: an exact size is
/// [`Constraints::tight`], an upper bound is [`Constraints::loose`] and no
/// opinion is [`Constraints::unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size.width, size.width, size.height, size.height)
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    ///
    /// Malformed bounds never panic: a NaN bound is ignored and when a
    /// minimum exceeds its maximum the minimum wins.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            fit(size.width, self.min_width, self.max_width),
            fit(size.height, self.min_height, self.max_height),
        )
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }
}

// `f32::min`/`max` return the other operand for NaN, unlike `clamp`.
fn fit(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_forces_size() {
        let c = Constraints::tight(Size::new(200.0, 100.0));
        assert!(c.is_tight());
        assert_eq!(c.constrain(Size::new(140.0, 70.0)), Size::new(200.0, 100.0));
    }

    #[test]
    fn test_loose_caps_size() {
        let c = Constraints::loose(Size::new(100.0, 100.0));
        assert_eq!(c.constrain(Size::new(140.0, 70.0)), Size::new(100.0, 70.0));
    }

    #[test]
    fn test_unbounded_keeps_size() {
        let c = Constraints::default();
        assert!(!c.is_tight());
        assert_eq!(c.constrain(Size::new(140.0, 70.0)), Size::new(140.0, 70.0));
    }

    #[test]
    fn test_malformed_bounds_do_not_panic() {
        let negative = Constraints::loose(Size::new(-1.0, 50.0));
        assert_eq!(negative.constrain(Size::new(140.0, 70.0)), Size::new(0.0, 50.0));

        let inverted = Constraints::new(200.0, 100.0, 0.0, f32::INFINITY);
        assert_eq!(inverted.constrain(Size::new(140.0, 70.0)), Size::new(200.0, 70.0));

        let nan = Constraints::new(f32::NAN, f32::NAN, 0.0, f32::NAN);
        assert_eq!(nan.constrain(Size::new(140.0, 70.0)), Size::new(140.0, 70.0));
        assert_eq!(
            Constraints::tight(Size::new(f32::NAN, 90.0)).constrain(Size::new(140.0, 70.0)),
            Size::new(140.0, 90.0)
        );
    }
}
