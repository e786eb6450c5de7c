//! Geometric primitives: `Size` and the edge-based `Rect`.

use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and non-negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// An axis-aligned rectangle described by its four edges.
///
/// Switch geometry is driven edge-first: the indicator's `left` is moved by
/// drags and animations while `right` is derived from a computed width, so the
/// rectangle stores edges rather than an origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from its edges.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[must_use]
    pub fn from_origin_size(left: f32, top: f32, size: Size) -> Self {
        Self::new(left, top, left + size.width, top + size.height)
    }

    /// Width (`right - left`).
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height (`bottom - top`).
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Copy of this rectangle with `left` moved and the width preserved.
    #[must_use]
    pub fn with_left(&self, left: f32) -> Self {
        Self::new(left, self.top, left + self.width(), self.bottom)
    }

    /// Copy of this rectangle with `right` set to `left + width`.
    #[must_use]
    pub fn with_width(&self, width: f32) -> Self {
        Self::new(self.left, self.top, self.left + width, self.bottom)
    }

    /// Create a new rectangle inset vertically by `amount` on top and bottom.
    #[must_use]
    pub fn inset_vertical(&self, amount: f32) -> Self {
        Self::new(self.left, self.top + amount, self.right, self.bottom - amount)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
