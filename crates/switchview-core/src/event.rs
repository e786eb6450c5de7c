//! Raw pointer events delivered by the host.

use serde::{Deserialize, Serialize};

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

impl std::fmt::Display for PointerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Host event time in milliseconds. Only differences are meaningful.
pub type Timestamp = u64;

/// Pointer event stream consumed by the switch.
///
/// Only the horizontal coordinate matters to a horizontal switch, so events
/// carry `x` alone. Timestamps accompany the events that open and close a
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// A pointer touched down
    Down {
        /// Pointer ID
        pointer_id: PointerId,
        /// Horizontal position
        x: f32,
        /// Event time
        timestamp: Timestamp,
    },
    /// A pointer moved
    Move {
        /// Pointer ID
        pointer_id: PointerId,
        /// Horizontal position
        x: f32,
    },
    /// The last pointer lifted
    Up {
        /// Pointer ID
        pointer_id: PointerId,
        /// Horizontal position
        x: f32,
        /// Event time
        timestamp: Timestamp,
    },
    /// A pointer lifted while others remain down
    AdditionalUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Horizontal position
        x: f32,
    },
    /// The host aborted the gesture
    Cancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
}

impl PointerEvent {
    /// The pointer this event refers to.
    #[must_use]
    pub const fn pointer_id(&self) -> PointerId {
        match self {
            Self::Down { pointer_id, .. }
            | Self::Move { pointer_id, .. }
            | Self::Up { pointer_id, .. }
            | Self::AdditionalUp { pointer_id, .. }
            | Self::Cancel { pointer_id } => *pointer_id,
        }
    }

    /// Horizontal position, if the event carries one.
    #[must_use]
    pub const fn x(&self) -> Option<f32> {
        match self {
            Self::Down { x, .. } | Self::Move { x, .. } | Self::Up { x, .. } | Self::AdditionalUp { x, .. } => {
                Some(*x)
            }
            Self::Cancel { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_id_display() {
        assert_eq!(PointerId(3).to_string(), "#3");
        assert_eq!(PointerId::default(), PointerId(0));
    }

    #[test]
    fn test_pointer_event_accessors() {
        let down = PointerEvent::Down {
            pointer_id: PointerId(1),
            x: 10.0,
            timestamp: 0,
        };
        assert_eq!(down.pointer_id(), PointerId(1));
        assert_eq!(down.x(), Some(10.0));

        let cancel = PointerEvent::Cancel {
            pointer_id: PointerId(2),
        };
        assert_eq!(cancel.pointer_id(), PointerId(2));
        assert_eq!(cancel.x(), None);
    }

    #[test]
    fn test_pointer_event_serde_tagged() {
        let event = PointerEvent::Move {
            pointer_id: PointerId(7),
            x: 42.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"move\""));
        let back: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
