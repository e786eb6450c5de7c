//! Gesture-driven toggle switch engine.
//!
//! A [`SwitchView`] is a two-state control whose indicator can be dragged
//! along a stadium-shaped track. While it moves, the indicator morphs from a
//! circle (ON, left) into a thin bar (OFF, right) and the track fades between
//! its ON and OFF colors. Releasing commits to whichever side the indicator
//! is on; a short, still press toggles instead.
//!
//! The engine is headless: the host feeds pointer events and frame ticks and
//! paints through the [`Canvas`] seam.
//!
//! ```
//! use std::time::Duration;
//! use switchview::{PointerId, SwitchConfig, SwitchView};
//!
//! let mut switch = SwitchView::new(SwitchConfig::default()).unwrap();
//! assert!(switch.is_checked());
//!
//! // A tap flips the state and starts the settle animation.
//! switch.on_pointer_down(PointerId(0), 40.0, 0);
//! let changed = switch.on_pointer_up(PointerId(0), 40.0, 60);
//! assert_eq!(changed.map(|c| c.checked), Some(false));
//!
//! while switch.tick(Duration::from_millis(16)) {}
//! assert_eq!(switch.indicator_geometry().width(), 1.0);
//! ```

pub mod animation;
pub mod config;
mod error;
pub mod interaction;
pub mod model;
pub mod persist;
mod switch;

pub use animation::{AnimationController, AnimationRun, Frame, RunId};
pub use config::{CancelBehavior, SwitchConfig};
pub use error::SwitchError;
pub use interaction::{GestureKind, Phase};
pub use model::{Snapshot, SwitchModel};
pub use persist::SavedState;
pub use switch::{SwitchChanged, SwitchView};

pub use switchview_core::{
    Canvas, Color, Constraints, Easing, PointerEvent, PointerId, Rect, Size, Timestamp,
};
