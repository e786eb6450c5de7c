//! Paint seam implemented by the host renderer.

use crate::{Color, Rect};

/// Drawing surface the switch paints itself onto.
///
/// The switch only ever needs a rounded track and an outlined indicator; how
/// those shapes are rasterized is up to the host.
pub trait Canvas {
    /// Fill a rectangle with uniformly rounded corners.
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color);

    /// Stroke the ellipse (or capsule, when wider than tall) inscribed in `rect`.
    fn stroke_oval(&mut self, rect: Rect, color: Color, width: f32);
}
