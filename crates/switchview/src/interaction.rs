//! Interaction state machine: pointer tracking, tap/drag classification, commit.
//!
//! The machine owns the checked bit and the pointer bookkeeping but no
//! geometry. Every input returns an [`Action`] that the owning
//! [`crate::SwitchView`] carries out against the model and the animation
//! controller.
//!
//! ```text
//!            pointer_down                    pointer_up / set_checked
//!   Idle ─────────────────▶ Dragging ─────────────────────────▶ Animating
//!    ▲                        │  ▲                                   │
//!    │     pointer_cancel     │  └───────── pointer_down ────────────┤
//!    └────────────────────────┘                                      │
//!    ▲                          last tick                            │
//!    └───────────────────────────────────────────────────────────────┘
//! ```

use switchview_core::{PointerId, Timestamp};

/// Coarse state of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Settled, nothing in flight
    #[default]
    Idle,
    /// A pointer is driving the indicator
    Dragging,
    /// A settle/toggle animation is running
    Animating,
}

/// The pointer currently moving the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePointer {
    /// Pointer ID
    pub id: PointerId,
    /// Last horizontal position seen for this pointer
    pub last_x: f32,
}

/// Timing and travel of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTiming {
    /// Timestamp of the pointer-down that opened the gesture
    pub started_at: Timestamp,
    /// Total horizontal distance travelled by the controlling pointer(s)
    pub travel: f32,
}

/// How a released gesture was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Short and still: flips the state
    Tap,
    /// Long or moved: commits to the side the indicator is on
    Drag,
}

/// Work the owner must carry out after an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Nothing to do
    None,
    /// A drag started; freeze any running animation where it is
    BeginDrag,
    /// Move the indicator horizontally by this delta
    DragBy(f32),
    /// Animate to the canonical geometry for `checked`
    Settle {
        /// Target (and already committed) state
        checked: bool,
        /// Whether the committed state differs from before
        changed: bool,
        /// Gesture that caused the settle, `None` for programmatic changes
        gesture: Option<GestureKind>,
    },
    /// The drag was cancelled without a commit
    Abandon {
        /// Committed state, unchanged by the cancelled drag
        checked: bool,
    },
}

/// Tap classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapThresholds {
    /// Longest press still classified as a tap
    pub timeout_ms: u64,
    /// Largest travel still classified as a tap
    pub slop: f32,
}

/// The switch's interaction state.
#[derive(Debug, Clone)]
pub struct Interaction {
    checked: bool,
    phase: Phase,
    active: Option<ActivePointer>,
    secondary: Vec<ActivePointer>,
    gesture: Option<GestureTiming>,
    thresholds: TapThresholds,
}

impl Interaction {
    /// Create an idle machine in the given state.
    #[must_use]
    pub const fn new(checked: bool, thresholds: TapThresholds) -> Self {
        Self {
            checked,
            phase: Phase::Idle,
            active: None,
            secondary: Vec::new(),
            gesture: None,
            thresholds,
        }
    }

    /// Committed state.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Pointer controlling the drag.
    #[must_use]
    pub const fn active_pointer(&self) -> Option<ActivePointer> {
        self.active
    }

    /// Gesture in progress.
    #[must_use]
    pub const fn gesture(&self) -> Option<GestureTiming> {
        self.gesture
    }

    /// Number of pointers currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        usize::from(self.active.is_some()) + self.secondary.len()
    }

    /// A pointer touched down.
    ///
    /// The first pointer opens a drag (interrupting any animation); further
    /// pointers are only tracked so control can be handed to them later.
    /// Events whose `x` is not finite are dropped by every pointer handler.
    pub fn pointer_down(&mut self, id: PointerId, x: f32, timestamp: Timestamp) -> Action {
        if !x.is_finite() {
            tracing::trace!(pointer = %id, "non-finite coordinate ignored");
            return Action::None;
        }
        if self.phase == Phase::Dragging {
            if let Some(pointer) = self.tracked_mut(id) {
                pointer.last_x = x;
            } else {
                self.secondary.push(ActivePointer { id, last_x: x });
                tracing::trace!(pointer = %id, "secondary pointer down");
            }
            return Action::None;
        }

        self.active = Some(ActivePointer { id, last_x: x });
        self.secondary.clear();
        self.gesture = Some(GestureTiming {
            started_at: timestamp,
            travel: 0.0,
        });
        self.phase = Phase::Dragging;
        Action::BeginDrag
    }

    /// A pointer moved. Only the active pointer drags the indicator.
    pub fn pointer_move(&mut self, id: PointerId, x: f32) -> Action {
        if !x.is_finite() {
            tracing::trace!(pointer = %id, "non-finite coordinate ignored");
            return Action::None;
        }
        if self.phase != Phase::Dragging {
            tracing::trace!(pointer = %id, "move outside a drag ignored");
            return Action::None;
        }

        match self.active {
            Some(ref mut active) if active.id == id => {
                let dx = x - active.last_x;
                active.last_x = x;
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.travel += dx.abs();
                }
                Action::DragBy(dx)
            }
            _ => {
                if let Some(pointer) = self.secondary.iter_mut().find(|p| p.id == id) {
                    pointer.last_x = x;
                } else {
                    tracing::trace!(pointer = %id, "move from untracked pointer ignored");
                }
                Action::None
            }
        }
    }

    /// A pointer lifted at `x` while others stay down.
    ///
    /// If it was the active pointer, its final movement counts towards the
    /// gesture's travel and control passes to the longest-held remaining
    /// pointer, with `last_x` reset to that pointer's position so the next
    /// move does not jump.
    pub fn additional_pointer_up(&mut self, id: PointerId, x: f32) -> Action {
        if !x.is_finite() {
            tracing::trace!(pointer = %id, "non-finite coordinate ignored");
            return Action::None;
        }
        if self.phase != Phase::Dragging {
            return Action::None;
        }

        if let Some(index) = self.secondary.iter().position(|p| p.id == id) {
            self.secondary.remove(index);
            return Action::None;
        }

        if let Some(active) = self.active.filter(|active| active.id == id) {
            if let Some(gesture) = self.gesture.as_mut() {
                gesture.travel += (x - active.last_x).abs();
            }
            if self.secondary.is_empty() {
                tracing::trace!(pointer = %id, "additional-up for the only pointer ignored");
            } else {
                let next = self.secondary.remove(0);
                tracing::debug!(from = %id, to = %next.id, last_x = next.last_x, "active pointer handed over");
                self.active = Some(next);
            }
        } else {
            tracing::trace!(pointer = %id, "additional-up from untracked pointer ignored");
        }
        Action::None
    }

    /// A pointer lifted.
    ///
    /// If other pointers remain this behaves like
    /// [`Interaction::additional_pointer_up`]. Otherwise the gesture ends: a
    /// tap flips the state, a drag commits to the side of the track the
    /// indicator's center is on (`indicator_center_x < track_mid_x` is ON).
    pub fn pointer_up(
        &mut self,
        id: PointerId,
        x: f32,
        timestamp: Timestamp,
        indicator_center_x: f32,
        track_mid_x: f32,
    ) -> Action {
        if !x.is_finite() {
            tracing::trace!(pointer = %id, "non-finite coordinate ignored");
            return Action::None;
        }
        if self.phase != Phase::Dragging || self.tracked_mut(id).is_none() {
            tracing::trace!(pointer = %id, "up from untracked pointer ignored");
            return Action::None;
        }
        if self.pointer_count() > 1 {
            return self.additional_pointer_up(id, x);
        }

        let kind = self.classify(x, timestamp);
        let target = match kind {
            GestureKind::Tap => !self.checked,
            GestureKind::Drag => indicator_center_x < track_mid_x,
        };
        let changed = target != self.checked;
        tracing::debug!(?kind, checked = target, changed, "gesture committed");

        self.checked = target;
        self.end_gesture(Phase::Animating);
        Action::Settle {
            checked: target,
            changed,
            gesture: Some(kind),
        }
    }

    /// The host aborted the gesture. No commit happens.
    pub fn pointer_cancel(&mut self, id: PointerId) -> Action {
        if self.phase != Phase::Dragging || self.tracked_mut(id).is_none() {
            tracing::trace!(pointer = %id, "cancel from untracked pointer ignored");
            return Action::None;
        }
        tracing::debug!(pointer = %id, checked = self.checked, "drag cancelled");
        self.end_gesture(Phase::Idle);
        Action::Abandon {
            checked: self.checked,
        }
    }

    /// Set the state programmatically. Same value is a no-op.
    ///
    /// A different value commits immediately and abandons any live drag.
    pub fn set_checked(&mut self, checked: bool) -> Action {
        if checked == self.checked {
            return Action::None;
        }
        if self.phase == Phase::Dragging {
            tracing::debug!("drag abandoned by programmatic change");
        }
        self.checked = checked;
        self.end_gesture(Phase::Animating);
        Action::Settle {
            checked,
            changed: true,
            gesture: None,
        }
    }

    /// Flip the state.
    pub fn toggle(&mut self) -> Action {
        self.set_checked(!self.checked)
    }

    /// Enter `Animating` for a settle the owner started on its own.
    pub fn begin_settling(&mut self) {
        self.phase = Phase::Animating;
    }

    /// The running animation reached its end.
    pub fn animation_finished(&mut self) {
        if self.phase == Phase::Animating {
            self.phase = Phase::Idle;
        }
    }

    /// Drop any gesture or animation bookkeeping and go idle.
    pub fn reset(&mut self) {
        self.end_gesture(Phase::Idle);
    }

    fn classify(&mut self, release_x: f32, timestamp: Timestamp) -> GestureKind {
        let Some(gesture) = self.gesture else {
            return GestureKind::Drag;
        };
        let trailing = self.active.map_or(0.0, |active| (release_x - active.last_x).abs());
        let travel = gesture.travel + trailing;
        let elapsed = timestamp.saturating_sub(gesture.started_at);

        if elapsed <= self.thresholds.timeout_ms && travel <= self.thresholds.slop {
            GestureKind::Tap
        } else {
            GestureKind::Drag
        }
    }

    fn tracked_mut(&mut self, id: PointerId) -> Option<&mut ActivePointer> {
        match self.active {
            Some(ref mut active) if active.id == id => Some(active),
            _ => self.secondary.iter_mut().find(|p| p.id == id),
        }
    }

    fn end_gesture(&mut self, phase: Phase) {
        self.active = None;
        self.secondary.clear();
        self.gesture = None;
        self.phase = phase;
    }
}
