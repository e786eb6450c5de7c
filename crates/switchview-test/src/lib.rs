//! Testing harness for SwitchView.
//!
//! - [`Harness`]: scripted pointer gestures against a simulated clock, with
//!   frame stepping and state assertions
//! - [`RecordingCanvas`]: a [`switchview_core::Canvas`] that records draw calls
//!
//! ```
//! use switchview::SwitchConfig;
//! use switchview_test::Harness;
//!
//! let mut harness = Harness::from_config(SwitchConfig::default());
//! harness.tap(40.0);
//! harness.settle();
//! harness.assert_checked(false).assert_settled();
//! ```

mod canvas;
mod harness;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use harness::{Harness, DEFAULT_FRAME, PRIMARY};
