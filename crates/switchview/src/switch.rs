//! The switch itself: pointer input in, geometry and paint out.

use crate::animation::AnimationController;
use crate::config::{CancelBehavior, SwitchConfig};
use crate::error::SwitchError;
use crate::interaction::{Action, Interaction, Phase, TapThresholds};
use crate::model::SwitchModel;
use crate::persist::SavedState;
use std::time::Duration;
use switchview_core::{Canvas, Color, Constraints, PointerEvent, PointerId, Rect, Size, Timestamp};

/// Message emitted when the committed state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchChanged {
    /// The new state
    pub checked: bool,
}

/// A two-state toggle with a draggable, morphing indicator.
///
/// The host feeds pointer events and frame ticks, then reads geometry back
/// (or calls [`SwitchView::paint`]) whenever [`SwitchView::needs_repaint`]
/// reports a change.
#[derive(Debug)]
pub struct SwitchView {
    config: SwitchConfig,
    model: SwitchModel,
    interaction: Interaction,
    animator: AnimationController,
    dirty: bool,
}

impl SwitchView {
    /// Create a switch settled in `config.checked`, with its track at the origin.
    pub fn new(config: SwitchConfig) -> Result<Self, SwitchError> {
        let model = SwitchModel::new(&config)?;
        let interaction = Interaction::new(
            config.checked,
            TapThresholds {
                timeout_ms: config.tap_timeout_ms,
                slop: config.tap_slop,
            },
        );
        tracing::debug!(checked = config.checked, "switch created");
        Ok(Self {
            config,
            model,
            interaction,
            animator: AnimationController::new(),
            dirty: true,
        })
    }

    /// Options the switch was built with.
    #[must_use]
    pub const fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Geometry model, for hosts that paint on their own.
    #[must_use]
    pub const fn model(&self) -> &SwitchModel {
        &self.model
    }

    // ===== State =====

    /// Committed state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.interaction.is_checked()
    }

    /// Set the state. A change animates to the new side and abandons any drag.
    pub fn set_checked(&mut self, checked: bool) -> Option<SwitchChanged> {
        let action = self.interaction.set_checked(checked);
        self.apply(action)
    }

    /// Flip the state.
    pub fn toggle(&mut self) -> SwitchChanged {
        let action = self.interaction.toggle();
        self.apply(action).unwrap_or(SwitchChanged {
            checked: self.is_checked(),
        })
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.interaction.phase()
    }

    /// Whether an animation is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    // ===== Pointer input =====

    /// First (or additional) pointer touched down.
    pub fn on_pointer_down(&mut self, pointer_id: PointerId, x: f32, timestamp: Timestamp) {
        let action = self.interaction.pointer_down(pointer_id, x, timestamp);
        self.apply(action);
    }

    /// Pointer moved.
    pub fn on_pointer_move(&mut self, pointer_id: PointerId, x: f32) {
        let action = self.interaction.pointer_move(pointer_id, x);
        self.apply(action);
    }

    /// Pointer lifted. Returns the change if this ended the gesture with a new state.
    pub fn on_pointer_up(
        &mut self,
        pointer_id: PointerId,
        x: f32,
        timestamp: Timestamp,
    ) -> Option<SwitchChanged> {
        let action = self.interaction.pointer_up(
            pointer_id,
            x,
            timestamp,
            self.model.indicator_center_x(),
            self.model.track_mid_x(),
        );
        self.apply(action)
    }

    /// A non-final pointer lifted.
    pub fn on_additional_pointer_up(&mut self, pointer_id: PointerId, x: f32) {
        let action = self.interaction.additional_pointer_up(pointer_id, x);
        self.apply(action);
    }

    /// Gesture aborted by the host.
    pub fn on_pointer_cancel(&mut self, pointer_id: PointerId) {
        let action = self.interaction.pointer_cancel(pointer_id);
        self.apply(action);
    }

    /// Dispatch a [`PointerEvent`].
    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<SwitchChanged> {
        match *event {
            PointerEvent::Down {
                pointer_id,
                x,
                timestamp,
            } => {
                self.on_pointer_down(pointer_id, x, timestamp);
                None
            }
            PointerEvent::Move { pointer_id, x } => {
                self.on_pointer_move(pointer_id, x);
                None
            }
            PointerEvent::Up {
                pointer_id,
                x,
                timestamp,
            } => self.on_pointer_up(pointer_id, x, timestamp),
            PointerEvent::AdditionalUp { pointer_id, x } => {
                self.on_additional_pointer_up(pointer_id, x);
                None
            }
            PointerEvent::Cancel { pointer_id } => {
                self.on_pointer_cancel(pointer_id);
                None
            }
        }
    }

    // ===== Animation =====

    /// Advance the running animation by `dt`. Returns whether it is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(frame) = self.animator.tick(dt) else {
            return false;
        };
        self.model.apply_snapshot(&frame.snapshot);
        self.dirty = true;
        if frame.finished {
            self.interaction.animation_finished();
            tracing::debug!(run = frame.run.get(), checked = self.is_checked(), "animation finished");
        }
        !frame.finished
    }

    /// Jump the running animation to its end.
    pub fn finish_animation(&mut self) {
        if let Some(end) = self.animator.finish() {
            self.model.apply_snapshot(&end);
            self.interaction.animation_finished();
            self.dirty = true;
        }
    }

    // ===== Layout =====

    /// Preferred size: the track size, fitted to `constraints`.
    #[must_use]
    pub fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.config.track_size_value())
    }

    /// The host view was resized.
    ///
    /// Any drag or animation is dropped and the indicator settles in the
    /// canonical position for the committed state.
    pub fn on_size_changed(&mut self, width: f32, height: f32) -> Result<(), SwitchError> {
        let checked = self.is_checked();
        if let Err(err) = self.model.layout(Size::new(width, height), checked) {
            tracing::warn!(width, height, error = %err, "rejected layout size");
            return Err(err);
        }
        self.animator.cancel_active();
        self.interaction.reset();
        self.dirty = true;
        tracing::debug!(width, height, track = ?self.model.track(), "layout updated");
        Ok(())
    }

    // ===== Paint =====

    /// Track rectangle.
    #[must_use]
    pub const fn track_geometry(&self) -> Rect {
        self.model.track()
    }

    /// Indicator rectangle.
    #[must_use]
    pub const fn indicator_geometry(&self) -> Rect {
        self.model.indicator()
    }

    /// Track fill.
    #[must_use]
    pub const fn track_color(&self) -> Color {
        self.model.track_color()
    }

    /// Indicator outline color.
    #[must_use]
    pub const fn indicator_color(&self) -> Color {
        self.config.indicator_color
    }

    /// Track corner radius.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.model.corner_radius()
    }

    /// Draw the track, then the indicator outline.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_round_rect(self.track_geometry(), self.corner_radius(), self.track_color());
        canvas.stroke_oval(
            self.indicator_geometry(),
            self.indicator_color(),
            self.config.indicator_stroke_width,
        );
    }

    /// Whether visible state changed since the last [`SwitchView::take_repaint`].
    #[must_use]
    pub const fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Read and clear the repaint flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ===== Persistence =====

    /// Capture the persistent state.
    #[must_use]
    pub const fn save_state(&self) -> SavedState {
        SavedState::new(self.is_checked())
    }

    /// Restore a saved state.
    ///
    /// Any drag or animation is dropped and the indicator lands on the
    /// canonical geometry for the restored state, even when the state itself
    /// does not change.
    pub fn restore_state(&mut self, state: SavedState) -> Option<SwitchChanged> {
        let changed = self.set_checked(state.checked);
        self.animator.cancel_active();
        self.interaction.reset();
        self.model.settle(state.checked);
        self.dirty = true;
        changed
    }

    fn apply(&mut self, action: Action) -> Option<SwitchChanged> {
        match action {
            Action::None => None,
            Action::BeginDrag => {
                if let Some(run) = self.animator.cancel_active() {
                    tracing::debug!(run = run.get(), "animation interrupted by drag");
                }
                None
            }
            Action::DragBy(dx) => {
                self.model.drag_by(dx);
                self.dirty = true;
                None
            }
            Action::Settle {
                checked, changed, ..
            } => {
                self.settle_to(checked);
                changed.then_some(SwitchChanged { checked })
            }
            Action::Abandon { checked } => {
                if self.config.cancel_behavior == CancelBehavior::SnapBack {
                    self.settle_to(checked);
                    self.interaction.begin_settling();
                }
                None
            }
        }
    }

    fn settle_to(&mut self, checked: bool) {
        let from = self.model.snapshot();
        let to = self.model.canonical_snapshot(checked);
        let run = self.animator.run(
            from,
            to,
            self.config.animation_duration_value(),
            self.config.easing,
        );
        tracing::trace!(run = run.get(), checked, "settle animation started");
        self.dirty = true;
    }
}
