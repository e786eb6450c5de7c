//! Geometry model: track and indicator rectangles and the drag-range mappings.
//!
//! The indicator's `left` edge is the single driven coordinate. Its width and
//! the track's opacity are both linear functions of `left` over the drag range
//! `[min_left, max_right]`:
//!
//! - at `min_left` the indicator is a full circle (`max_width`, ON side) and
//!   the track is fully opaque;
//! - at `max_right` the indicator collapses to `min_width` (OFF side) and the
//!   track fades to `min_track_opacity`.

use crate::config::SwitchConfig;
use crate::error::SwitchError;
use switchview_core::{Color, Rect, Size};

/// Settled or in-flight visual state the animation channels interpolate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Indicator width
    pub indicator_width: f32,
    /// Indicator left edge
    pub indicator_left: f32,
    /// Track fill
    pub container_color: Color,
}

/// Track and indicator geometry plus the track paint color.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchModel {
    track: Rect,
    indicator: Rect,
    track_color: Color,
    padding: f32,
    min_width: f32,
    min_opacity: f32,
    on_color: Color,
    off_color: Color,
}

impl SwitchModel {
    /// Build the model with the track at the origin, settled for `config.checked`.
    pub fn new(config: &SwitchConfig) -> Result<Self, SwitchError> {
        config.validate()?;
        let track = Rect::from_origin_size(0.0, 0.0, config.track_size_value());
        let mut model = Self {
            track,
            indicator: track.inset_vertical(config.padding),
            track_color: config.on_color,
            padding: config.padding,
            min_width: config.min_indicator_width,
            min_opacity: config.min_track_opacity,
            on_color: config.on_color,
            off_color: config.off_color,
        };
        model.settle(config.checked);
        Ok(model)
    }

    /// Reposition the track inside a host view of `view` size.
    ///
    /// The track keeps its configured size, hugs the right edge of the view
    /// and is centred vertically. The indicator is reset to the canonical
    /// geometry for `checked`.
    pub fn layout(&mut self, view: Size, checked: bool) -> Result<(), SwitchError> {
        if !view.is_valid() {
            let width_ok = view.width.is_finite() && view.width >= 0.0;
            let (field, value) = if width_ok {
                ("view height", view.height)
            } else {
                ("view width", view.width)
            };
            return Err(SwitchError::InvalidDimension { field, value });
        }

        let size = self.track.size();
        let top = view.height / 2.0 - size.height / 2.0;
        self.track = Rect::from_origin_size(view.width - size.width, top, size);
        self.indicator = self.track.inset_vertical(self.padding);
        self.settle(checked);
        Ok(())
    }

    /// Track rectangle.
    #[must_use]
    pub const fn track(&self) -> Rect {
        self.track
    }

    /// Indicator rectangle.
    #[must_use]
    pub const fn indicator(&self) -> Rect {
        self.indicator
    }

    /// Current track fill.
    #[must_use]
    pub const fn track_color(&self) -> Color {
        self.track_color
    }

    /// Corner radius that makes the track a stadium.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.track.height() / 2.0
    }

    /// Leftmost indicator position (ON side).
    #[must_use]
    pub fn min_left(&self) -> f32 {
        self.track.left + self.padding
    }

    /// Rightmost indicator position (OFF side).
    #[must_use]
    pub fn max_right(&self) -> f32 {
        self.track.right - self.padding - self.indicator.height() / 2.0
    }

    /// Indicator width when fully expanded (a circle).
    #[must_use]
    pub fn max_width(&self) -> f32 {
        self.indicator.height()
    }

    /// Indicator width when fully collapsed.
    #[must_use]
    pub const fn min_width(&self) -> f32 {
        self.min_width
    }

    /// Clamp a candidate left edge to the drag range.
    #[must_use]
    pub fn clamp_left(&self, left: f32) -> f32 {
        left.clamp(self.min_left(), self.max_right())
    }

    /// Indicator width for a left edge.
    ///
    /// Linear from `max_width` at `min_left` down to `min_width` at
    /// `max_right`, clamped to `[min_width, max_width]`.
    #[must_use]
    pub fn indicator_width_for_left(&self, left: f32) -> f32 {
        let (l, r) = (self.min_left(), self.max_right());
        let (w_max, w_min) = (self.max_width(), self.min_width);

        // Exact at the ends of the range.
        if left <= l {
            return w_max;
        }
        if left >= r {
            return w_min;
        }

        let slope = (l - r) / (w_max - w_min);
        let intercept = slope.mul_add(-w_min, r);
        ((left - intercept) / slope).clamp(w_min, w_max)
    }

    /// Track opacity factor for a left edge: `1.0` at `min_left`, `min_track_opacity` at `max_right`.
    #[must_use]
    pub fn container_opacity_for_left(&self, left: f32) -> f32 {
        let on_fraction = self.on_fraction(left);
        if on_fraction >= 1.0 {
            return 1.0;
        }
        (1.0 - self.min_opacity)
            .mul_add(on_fraction, self.min_opacity)
            .clamp(self.min_opacity, 1.0)
    }

    /// Track fill for a left edge: OFF→ON blend with the opacity fade applied.
    #[must_use]
    pub fn track_color_for_left(&self, left: f32) -> Color {
        self.off_color
            .lerp(&self.on_color, self.on_fraction(left))
            .scale_alpha(self.container_opacity_for_left(left))
    }

    /// Fully settled snapshot for a state.
    #[must_use]
    pub fn canonical_snapshot(&self, checked: bool) -> Snapshot {
        let left = if checked { self.min_left() } else { self.max_right() };
        Snapshot {
            indicator_width: self.indicator_width_for_left(left),
            indicator_left: left,
            container_color: self.track_color_for_left(left),
        }
    }

    /// Current visual state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            indicator_width: self.indicator.width(),
            indicator_left: self.indicator.left,
            container_color: self.track_color,
        }
    }

    /// Jump to the canonical geometry for a state.
    pub fn settle(&mut self, checked: bool) {
        let snapshot = self.canonical_snapshot(checked);
        self.apply_snapshot(&snapshot);
    }

    /// Apply an animation frame through the explicit setters.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.set_indicator_left(snapshot.indicator_left);
        self.set_indicator_width(snapshot.indicator_width);
        self.set_track_color(snapshot.container_color);
    }

    /// Move the indicator by `dx`, re-deriving width and track color.
    ///
    /// A non-finite `dx` leaves the model untouched.
    pub fn drag_by(&mut self, dx: f32) {
        if !dx.is_finite() {
            return;
        }
        let left = self.clamp_left(self.indicator.left + dx);
        self.set_indicator_left(left);
        self.set_indicator_width(self.indicator_width_for_left(left));
        self.set_track_color(self.track_color_for_left(left));
    }

    /// Move the indicator's left edge, keeping its width.
    pub fn set_indicator_left(&mut self, left: f32) {
        self.indicator = self.indicator.with_left(self.clamp_left(left));
    }

    /// Resize the indicator from its left edge.
    pub fn set_indicator_width(&mut self, width: f32) {
        let width = width.clamp(self.min_width, self.max_width());
        self.indicator = self.indicator.with_width(width);
    }

    /// Set the track fill.
    pub fn set_track_color(&mut self, color: Color) {
        self.track_color = color;
    }

    /// Horizontal center of the indicator.
    #[must_use]
    pub fn indicator_center_x(&self) -> f32 {
        self.indicator.center_x()
    }

    /// Horizontal midpoint of the track.
    #[must_use]
    pub fn track_mid_x(&self) -> f32 {
        self.track.center_x()
    }

    /// How far towards ON a left edge is: `1.0` at `min_left`, `0.0` at `max_right`.
    fn on_fraction(&self, left: f32) -> f32 {
        let (l, r) = (self.min_left(), self.max_right());
        ((r - left) / (r - l)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn model(checked: bool) -> SwitchModel {
        SwitchModel::new(&SwitchConfig::default().checked(checked)).unwrap()
    }

    #[test]
    fn test_drag_range_from_default_track() {
        let m = model(true);
        // track 140x70 at origin, padding 21, indicator height 28
        assert_eq!(m.min_left(), 21.0);
        assert_eq!(m.max_right(), 105.0);
        assert_eq!(m.max_width(), 28.0);
        assert_eq!(m.min_width(), 1.0);
        assert_eq!(m.corner_radius(), 35.0);
    }

    #[test]
    fn test_canonical_on_geometry() {
        let m = model(true);
        assert_eq!(m.indicator(), Rect::new(21.0, 21.0, 49.0, 49.0));
        assert_eq!(m.track_color(), SwitchConfig::default().on_color);
    }

    #[test]
    fn test_canonical_off_geometry() {
        let m = model(false);
        assert_eq!(m.indicator(), Rect::new(105.0, 21.0, 106.0, 49.0));
        let config = SwitchConfig::default();
        let expected = config.off_color.scale_alpha(config.min_track_opacity);
        assert_eq!(m.track_color(), expected);
    }

    #[test]
    fn test_width_boundaries_exact() {
        let m = model(true);
        assert_eq!(m.indicator_width_for_left(m.min_left()), m.max_width());
        assert_eq!(m.indicator_width_for_left(m.max_right()), m.min_width());
        assert_eq!(m.indicator_width_for_left(-1000.0), m.max_width());
        assert_eq!(m.indicator_width_for_left(1000.0), m.min_width());
    }

    #[test]
    fn test_width_linear_midpoint() {
        let m = model(true);
        let mid = (m.min_left() + m.max_right()) / 2.0;
        let expected = (m.max_width() + m.min_width()) / 2.0;
        assert!((m.indicator_width_for_left(mid) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_opacity_boundaries() {
        let m = model(true);
        assert_eq!(m.container_opacity_for_left(m.min_left()), 1.0);
        assert!((m.container_opacity_for_left(m.max_right()) - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_left() {
        let m = model(true);
        assert_eq!(m.clamp_left(0.0), 21.0);
        assert_eq!(m.clamp_left(500.0), 105.0);
        assert_eq!(m.clamp_left(60.0), 60.0);
    }

    #[test]
    fn test_drag_by_morphs_indicator() {
        let mut m = model(true);
        m.drag_by(42.0);
        assert_eq!(m.indicator().left, 63.0);
        assert!(m.indicator().width() < m.max_width());
        assert!(m.indicator().width() > m.min_width());
        assert!(m.track_color().a < 1.0);

        m.drag_by(1000.0);
        assert_eq!(m.indicator().left, m.max_right());
        assert_eq!(m.indicator().width(), m.min_width());
    }

    #[test]
    fn test_setters_clamp() {
        let mut m = model(true);
        m.set_indicator_width(500.0);
        assert_eq!(m.indicator().width(), m.max_width());
        m.set_indicator_width(0.0);
        assert_eq!(m.indicator().width(), m.min_width());
        m.set_indicator_left(-50.0);
        assert_eq!(m.indicator().left, m.min_left());
    }

    #[test]
    fn test_layout_right_aligns_and_centers() {
        let mut m = model(false);
        m.layout(Size::new(300.0, 100.0), false).unwrap();
        assert_eq!(m.track(), Rect::new(160.0, 15.0, 300.0, 85.0));
        assert_eq!(m.indicator().top, 36.0);
        assert_eq!(m.indicator().bottom, 64.0);
        assert_eq!(m.indicator().left, m.max_right());
        assert_eq!(m.indicator().width(), m.min_width());
    }

    #[test]
    fn test_layout_rejects_bad_sizes() {
        let mut m = model(true);
        assert!(m.layout(Size::new(f32::NAN, 100.0), true).is_err());
        assert!(m.layout(Size::new(100.0, -1.0), true).is_err());
        assert!(matches!(
            m.layout(Size::new(f32::INFINITY, 100.0), true),
            Err(SwitchError::InvalidDimension { field: "view width", .. })
        ));
        assert!(matches!(
            m.layout(Size::new(100.0, f32::NAN), true),
            Err(SwitchError::InvalidDimension { field: "view height", .. })
        ));
        assert_eq!(m.snapshot(), m.canonical_snapshot(true));
    }

    #[test]
    fn test_drag_by_ignores_non_finite_delta() {
        let mut m = model(true);
        m.drag_by(10.0);
        let before = m.snapshot();
        m.drag_by(f32::NAN);
        m.drag_by(f32::NEG_INFINITY);
        assert_eq!(m.snapshot(), before);
    }

    #[test]
    fn test_snapshot_roundtrip_through_setters() {
        let mut m = model(true);
        let off = m.canonical_snapshot(false);
        m.apply_snapshot(&off);
        assert_eq!(m.snapshot(), off);
    }

    proptest! {
        #[test]
        fn prop_width_within_bounds(left in 21.0f32..=105.0) {
            let m = model(true);
            let w = m.indicator_width_for_left(left);
            prop_assert!(w >= m.min_width() && w <= m.max_width());
        }

        #[test]
        fn prop_width_non_increasing(a in 21.0f32..=105.0, b in 21.0f32..=105.0) {
            let m = model(true);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(m.indicator_width_for_left(lo) >= m.indicator_width_for_left(hi));
        }

        #[test]
        fn prop_opacity_within_bounds(left in -100.0f32..300.0) {
            let m = model(true);
            let alpha = m.container_opacity_for_left(left);
            prop_assert!((0.6..=1.0).contains(&alpha));
        }
    }
}
