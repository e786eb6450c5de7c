//! Core types for the SwitchView toggle engine.
//!
//! This crate provides the primitives the engine is written against:
//! - Geometric primitives: [`Size`], the edge-based [`Rect`]
//! - Layout negotiation: [`Constraints`]
//! - Color representation: [`Color`] with hex parsing and interpolation
//! - Animation curves: [`Easing`], [`Interpolate`]
//! - Input: [`PointerEvent`], [`PointerId`]
//! - Painting: the [`Canvas`] seam

mod canvas;
mod color;
mod constraints;
mod easing;
mod event;
mod geometry;

pub use canvas::Canvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use easing::{Easing, Interpolate};
pub use event::{PointerEvent, PointerId, Timestamp};
pub use geometry::{Rect, Size};
