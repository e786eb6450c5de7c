//! Error types for switchview.

use switchview_core::ColorParseError;
use thiserror::Error;

/// Configuration and layout errors.
///
/// The interaction loop itself never fails: coordinates are clamped and
/// stray pointer events are dropped. Everything here is a caller mistake
/// surfaced at construction or layout time.
#[derive(Debug, Error)]
pub enum SwitchError {
    /// Track is too short to fit the padding and a minimal indicator.
    #[error(
        "track height {track_height} leaves no room for an indicator \
         (padding {padding} on each side, minimum indicator width {min_width})"
    )]
    TrackTooShort {
        track_height: f32,
        padding: f32,
        min_width: f32,
    },

    /// Track is too narrow for the indicator to travel.
    #[error("track width {track_width} leaves no drag range (needs more than {required})")]
    NoDragRange { track_width: f32, required: f32 },

    /// A size or length was negative, zero where it must be positive, or not finite.
    #[error("invalid {field}: {value}")]
    InvalidDimension { field: &'static str, value: f32 },

    /// A configuration value is out of range.
    #[error("invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),

    /// Configuration file could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Saved state could not be encoded or decoded.
    #[error("saved state error: {0}")]
    SavedState(#[from] serde_json::Error),

    /// Saved state parcel did not hold a recognised value.
    #[error("corrupt saved state parcel: {0:?}")]
    CorruptParcel(Vec<u8>),
}
