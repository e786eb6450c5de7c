//! Saved state: the checked bit, in JSON or a one-byte parcel.
//!
//! Geometry is never persisted. Restoring re-derives it from the checked bit
//! and the current layout.

use crate::error::SwitchError;
use serde::{Deserialize, Serialize};

/// Persistent part of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    /// Whether the switch was ON
    pub checked: bool,
}

impl SavedState {
    /// Create a saved state.
    #[must_use]
    pub const fn new(checked: bool) -> Self {
        Self { checked }
    }

    /// Encode as JSON, e.g. `{"checked":true}`.
    pub fn to_json(&self) -> Result<String, SwitchError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self, SwitchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode as a single byte: `1` for ON, `0` for OFF.
    #[must_use]
    pub fn to_parcel(&self) -> Vec<u8> {
        vec![u8::from(self.checked)]
    }

    /// Decode a parcel written by [`SavedState::to_parcel`].
    pub fn from_parcel(bytes: &[u8]) -> Result<Self, SwitchError> {
        match bytes {
            [0] => Ok(Self::new(false)),
            [1] => Ok(Self::new(true)),
            _ => Err(SwitchError::CorruptParcel(bytes.to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_format() {
        assert_eq!(SavedState::new(true).to_json().unwrap(), r#"{"checked":true}"#);
        assert_eq!(
            SavedState::from_json(r#"{"checked":false}"#).unwrap(),
            SavedState::new(false)
        );
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(matches!(
            SavedState::from_json("{\"checked\":\"yes\"}"),
            Err(SwitchError::SavedState(_))
        ));
    }

    #[test]
    fn test_parcel_bytes() {
        assert_eq!(SavedState::new(true).to_parcel(), vec![1]);
        assert_eq!(SavedState::new(false).to_parcel(), vec![0]);
        assert_eq!(SavedState::from_parcel(&[1]).unwrap(), SavedState::new(true));
    }

    #[test]
    fn test_parcel_rejects_corrupt_input() {
        for bytes in [&[][..], &[2][..], &[1, 0][..]] {
            match SavedState::from_parcel(bytes) {
                Err(SwitchError::CorruptParcel(got)) => assert_eq!(got, bytes),
                other => panic!("expected CorruptParcel, got {other:?}"),
            }
        }
    }
}
