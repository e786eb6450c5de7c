//! Switch configuration: dimensions, colors, timing and gesture thresholds.
//!
//! Every option is fixed at construction. A config can be built with the
//! chained setters or loaded from YAML:
//!
//! ```
//! use switchview::SwitchConfig;
//!
//! let config = SwitchConfig::from_yaml(
//!     "checked: false\ntrack_width: 160\nanimation_duration_ms: 250\n",
//! )
//! .unwrap();
//! assert!(!config.checked);
//! assert_eq!(config.track_width, 160.0);
//! ```

use crate::error::SwitchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use switchview_core::{Color, Easing, Size};

/// What a cancelled drag does to the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelBehavior {
    /// Leave the indicator wherever the drag stopped.
    #[default]
    LeaveInPlace,
    /// Animate back to the committed state.
    SnapBack,
}

/// Construction-time options for a [`crate::SwitchView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchConfig {
    /// Initial checked state
    pub checked: bool,
    /// Track width
    pub track_width: f32,
    /// Track height
    pub track_height: f32,
    /// Inset between the track edge and the indicator
    pub padding: f32,
    /// Narrowest the indicator gets (OFF side); must be positive
    pub min_indicator_width: f32,
    /// Track fill when ON
    pub on_color: Color,
    /// Track fill when OFF, before opacity modulation
    pub off_color: Color,
    /// Track opacity factor at the OFF end of the drag range
    pub min_track_opacity: f32,
    /// Indicator outline color
    pub indicator_color: Color,
    /// Indicator outline width
    pub indicator_stroke_width: f32,
    /// Settle/toggle animation length
    pub animation_duration_ms: u64,
    /// Settle/toggle animation curve
    pub easing: Easing,
    /// Longest press still classified as a tap
    pub tap_timeout_ms: u64,
    /// Largest horizontal travel still classified as a tap
    pub tap_slop: f32,
    /// Cancelled-drag policy
    pub cancel_behavior: CancelBehavior,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            checked: true,
            track_width: 140.0,
            track_height: 70.0,
            padding: 21.0,
            min_indicator_width: 1.0,
            on_color: Color::new(0.118, 0.118, 0.118, 1.0),
            off_color: Color::new(0.62, 0.62, 0.62, 1.0),
            min_track_opacity: 0.6,
            indicator_color: Color::WHITE,
            indicator_stroke_width: 4.0,
            animation_duration_ms: 330,
            easing: Easing::AccelerateDecelerate,
            tap_timeout_ms: 200,
            tap_slop: 8.0,
            cancel_behavior: CancelBehavior::LeaveInPlace,
        }
    }
}

impl SwitchConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document and validate it.
    ///
    /// Missing keys take their default values; unknown keys are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self, SwitchError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, SwitchError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set the initial checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the track size.
    #[must_use]
    pub const fn track_size(mut self, width: f32, height: f32) -> Self {
        self.track_width = width;
        self.track_height = height;
        self
    }

    /// Set the indicator inset.
    #[must_use]
    pub const fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the minimum indicator width.
    #[must_use]
    pub const fn min_indicator_width(mut self, width: f32) -> Self {
        self.min_indicator_width = width;
        self
    }

    /// Set the ON and OFF track colors.
    #[must_use]
    pub const fn colors(mut self, on: Color, off: Color) -> Self {
        self.on_color = on;
        self.off_color = off;
        self
    }

    /// Set the ON and OFF track colors from hex strings such as `"#3f51b5"`.
    pub fn hex_colors(self, on: &str, off: &str) -> Result<Self, SwitchError> {
        Ok(self.colors(Color::from_hex(on)?, Color::from_hex(off)?))
    }

    /// Use a single track color, faded towards OFF by `min_opacity`.
    #[must_use]
    pub const fn base_color(mut self, color: Color, min_opacity: f32) -> Self {
        self.on_color = color;
        self.off_color = color;
        self.min_track_opacity = min_opacity;
        self
    }

    /// Set the track opacity factor at the OFF end.
    #[must_use]
    pub const fn min_track_opacity(mut self, opacity: f32) -> Self {
        self.min_track_opacity = opacity;
        self
    }

    /// Set the indicator outline color and width.
    #[must_use]
    pub const fn indicator(mut self, color: Color, stroke_width: f32) -> Self {
        self.indicator_color = color;
        self.indicator_stroke_width = stroke_width;
        self
    }

    /// Set the animation duration.
    #[must_use]
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the animation curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the tap duration threshold.
    #[must_use]
    pub fn tap_timeout(mut self, timeout: Duration) -> Self {
        self.tap_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the tap movement deadzone.
    #[must_use]
    pub const fn tap_slop(mut self, slop: f32) -> Self {
        self.tap_slop = slop;
        self
    }

    /// Set the cancelled-drag policy.
    #[must_use]
    pub const fn cancel_behavior(mut self, behavior: CancelBehavior) -> Self {
        self.cancel_behavior = behavior;
        self
    }

    /// Animation duration as a [`Duration`].
    #[must_use]
    pub const fn animation_duration_value(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Track size.
    #[must_use]
    pub const fn track_size_value(&self) -> Size {
        Size::new(self.track_width, self.track_height)
    }

    /// Indicator diameter when fully expanded.
    #[must_use]
    pub fn max_indicator_width(&self) -> f32 {
        2.0f32.mul_add(-self.padding, self.track_height)
    }

    /// Check that the geometry is drawable and the thresholds are sane.
    pub fn validate(&self) -> Result<(), SwitchError> {
        positive("track_width", self.track_width)?;
        positive("track_height", self.track_height)?;
        non_negative("padding", self.padding)?;
        positive("min_indicator_width", self.min_indicator_width)?;
        non_negative("indicator_stroke_width", self.indicator_stroke_width)?;
        non_negative("tap_slop", self.tap_slop)?;

        if !(0.0..=1.0).contains(&self.min_track_opacity) {
            return Err(SwitchError::InvalidValue {
                field: "min_track_opacity",
                message: format!("{} is outside [0, 1]", self.min_track_opacity),
            });
        }

        let max_width = self.max_indicator_width();
        if max_width <= self.min_indicator_width {
            return Err(SwitchError::TrackTooShort {
                track_height: self.track_height,
                padding: self.padding,
                min_width: self.min_indicator_width,
            });
        }

        // Drag range is [track.left + padding, track.right - padding - max_width / 2].
        let required = 2.0f32.mul_add(self.padding, max_width / 2.0);
        if self.track_width <= required {
            return Err(SwitchError::NoDragRange {
                track_width: self.track_width,
                required,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SwitchError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SwitchError::InvalidDimension { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), SwitchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SwitchError::InvalidDimension { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchview_core::ColorParseError;

    #[test]
    fn test_default_config_is_valid() {
        let config = SwitchConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.checked);
        assert_eq!(config.max_indicator_width(), 28.0);
        assert_eq!(config.animation_duration_value(), Duration::from_millis(330));
    }

    #[test]
    fn test_builder_setters() {
        let config = SwitchConfig::new()
            .checked(false)
            .track_size(200.0, 80.0)
            .padding(10.0)
            .min_indicator_width(2.0)
            .base_color(Color::BLACK, 0.3)
            .indicator(Color::BLACK, 2.0)
            .animation_duration(Duration::from_millis(250))
            .easing(Easing::Linear)
            .tap_timeout(Duration::from_millis(150))
            .tap_slop(4.0)
            .cancel_behavior(CancelBehavior::SnapBack);

        assert!(!config.checked);
        assert_eq!(config.track_size_value(), Size::new(200.0, 80.0));
        assert_eq!(config.on_color, config.off_color);
        assert_eq!(config.min_track_opacity, 0.3);
        assert_eq!(config.animation_duration_ms, 250);
        assert_eq!(config.tap_timeout_ms, 150);
        assert_eq!(config.cancel_behavior, CancelBehavior::SnapBack);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hex_colors() {
        let config = SwitchConfig::new().hex_colors("#00ff00", "ff000080").unwrap();
        assert_eq!(config.on_color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(config.off_color.a, 128.0 / 255.0);

        assert!(matches!(
            SwitchConfig::new().hex_colors("#00ff0", "#000000"),
            Err(SwitchError::Color(ColorParseError::InvalidLength))
        ));
        assert!(matches!(
            SwitchConfig::new().hex_colors("#000000", "#zz0000"),
            Err(SwitchError::Color(ColorParseError::InvalidHex))
        ));
    }

    #[test]
    fn test_validate_track_too_short() {
        let config = SwitchConfig::new().track_size(140.0, 42.0);
        assert!(matches!(
            config.validate(),
            Err(SwitchError::TrackTooShort { .. })
        ));
    }

    #[test]
    fn test_validate_no_drag_range() {
        // required = 2 * 21 + 28 / 2 = 56
        let config = SwitchConfig::new().track_size(56.0, 70.0);
        match config.validate() {
            Err(SwitchError::NoDragRange { required, .. }) => assert_eq!(required, 56.0),
            other => panic!("expected NoDragRange, got {other:?}"),
        }
        assert!(SwitchConfig::new().track_size(57.0, 70.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        assert!(SwitchConfig::new().track_size(f32::NAN, 70.0).validate().is_err());
        assert!(SwitchConfig::new().track_size(140.0, 0.0).validate().is_err());
        assert!(SwitchConfig::new().padding(-1.0).validate().is_err());
        assert!(SwitchConfig::new().min_indicator_width(0.0).validate().is_err());
        assert!(SwitchConfig::new().tap_slop(-2.0).validate().is_err());
        assert!(matches!(
            SwitchConfig::new().min_track_opacity(1.5).validate(),
            Err(SwitchError::InvalidValue {
                field: "min_track_opacity",
                ..
            })
        ));
    }

    #[test]
    fn test_from_yaml_partial() {
        let yaml = r##"
checked: false
on_color: "#00ff00"
easing: linear
cancel_behavior: snap-back
"##;
        let config = SwitchConfig::from_yaml(yaml).unwrap();
        assert!(!config.checked);
        assert_eq!(config.on_color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(config.easing, Easing::Linear);
        assert_eq!(config.cancel_behavior, CancelBehavior::SnapBack);
        assert_eq!(config.track_width, 140.0);
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(
            SwitchConfig::from_yaml("bogus_key: 1"),
            Err(SwitchError::Yaml(_))
        ));
        assert!(matches!(
            SwitchConfig::from_yaml("on_color: \"#12\""),
            Err(SwitchError::Yaml(_))
        ));
        assert!(matches!(
            SwitchConfig::from_yaml("track_height: 30"),
            Err(SwitchError::TrackTooShort { .. })
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = SwitchConfig::new().checked(false).tap_slop(3.0);
        let yaml = config.to_yaml().unwrap();
        let back = SwitchConfig::from_yaml(&yaml).unwrap();
        assert_eq!(back.checked, config.checked);
        assert_eq!(back.tap_slop, config.tap_slop);
        assert_eq!(back.easing, config.easing);
    }
}
