//! Animation controller: one cancellable run interpolating width, position and color.
//!
//! The controller never touches the model. Each [`AnimationController::tick`]
//! returns the interpolated [`Snapshot`] for that frame and the caller applies
//! it through the model's setters, so there are no captured closures and no
//! hidden writes between frames.

use crate::model::Snapshot;
use std::time::Duration;
use switchview_core::{Color, Easing, Interpolate};

/// Handle identifying one animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

impl RunId {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A single transition between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    id: RunId,
    from: Snapshot,
    to: Snapshot,
    duration: f64,
    elapsed: f64,
    easing: Easing,
}

impl AnimationRun {
    fn new(id: RunId, from: Snapshot, to: Snapshot, duration: Duration, easing: Easing) -> Self {
        Self {
            id,
            from,
            to,
            duration: duration.as_secs_f64(),
            elapsed: 0.0,
            easing,
        }
    }

    /// Handle of this run.
    #[must_use]
    pub const fn id(&self) -> RunId {
        self.id
    }

    /// Snapshot captured when the run started.
    #[must_use]
    pub const fn from(&self) -> Snapshot {
        self.from
    }

    /// Snapshot the run ends on.
    #[must_use]
    pub const fn to(&self) -> Snapshot {
        self.to
    }

    /// Linear progress from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Whether the run has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolate all three channels at an already-eased `t`.
    #[must_use]
    pub fn apply_progress(&self, t: f64) -> Snapshot {
        let t = t.clamp(0.0, 1.0);
        Snapshot {
            indicator_width: f32::interpolate(&self.from.indicator_width, &self.to.indicator_width, t),
            indicator_left: f32::interpolate(&self.from.indicator_left, &self.to.indicator_left, t),
            container_color: Color::interpolate(&self.from.container_color, &self.to.container_color, t),
        }
    }

    /// Snapshot at the current elapsed time.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        if self.is_complete() {
            return self.to;
        }
        self.apply_progress(self.easing.apply(self.progress()))
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt.as_secs_f64()).min(self.duration);
    }
}

/// One frame produced by [`AnimationController::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Run that produced the frame
    pub run: RunId,
    /// Values to apply
    pub snapshot: Snapshot,
    /// Whether this was the run's last frame
    pub finished: bool,
}

/// Owns at most one active [`AnimationRun`].
#[derive(Debug, Default)]
pub struct AnimationController {
    active: Option<AnimationRun>,
    next_id: u64,
}

impl AnimationController {
    /// Create new controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run, cancelling whatever was active.
    pub fn run(&mut self, from: Snapshot, to: Snapshot, duration: Duration, easing: Easing) -> RunId {
        let id = RunId(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.active.take() {
            tracing::trace!(previous = previous.id.0, next = id.0, "animation superseded");
        }
        self.active = Some(AnimationRun::new(id, from, to, duration, easing));
        id
    }

    /// Stop `id` if it is the active run. Stale handles are ignored.
    pub fn cancel(&mut self, id: RunId) -> bool {
        if self.active.as_ref().is_some_and(|run| run.id == id) {
            self.active = None;
            tracing::trace!(run = id.0, "animation cancelled");
            true
        } else {
            false
        }
    }

    /// Stop the active run, if any.
    pub fn cancel_active(&mut self) -> Option<RunId> {
        let id = self.active.take().map(|run| run.id)?;
        tracing::trace!(run = id.0, "animation cancelled");
        Some(id)
    }

    /// Advance the active run by `dt` and return the frame to apply.
    ///
    /// The run is dropped after its final frame.
    pub fn tick(&mut self, dt: Duration) -> Option<Frame> {
        let run = self.active.as_mut()?;
        run.advance(dt);
        let frame = Frame {
            run: run.id,
            snapshot: run.current(),
            finished: run.is_complete(),
        };
        if frame.finished {
            self.active = None;
        }
        Some(frame)
    }

    /// Drop the active run and return its end snapshot.
    pub fn finish(&mut self) -> Option<Snapshot> {
        self.active.take().map(|run| run.to)
    }

    /// Whether a run is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The active run.
    #[must_use]
    pub const fn active(&self) -> Option<&AnimationRun> {
        self.active.as_ref()
    }
}
