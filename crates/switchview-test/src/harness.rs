//! Gesture harness for SwitchView.
//!
//! Events are queued with the harness clock's current timestamp and
//! dispatched in order. The clock only moves when a test says so, either
//! explicitly with [`Harness::wait`] or by stepping animation frames.

use std::collections::VecDeque;
use std::time::Duration;

use switchview::{Phase, SwitchChanged, SwitchConfig, SwitchView};
use switchview_core::{PointerEvent, PointerId, Rect, Timestamp};

use crate::canvas::RecordingCanvas;

/// Frame interval used by [`Harness::advance_frames`] unless overridden.
pub const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Pointer used by the single-finger helpers.
pub const PRIMARY: PointerId = PointerId(0);

const TOLERANCE: f32 = 1e-3;
const MAX_SETTLE_FRAMES: usize = 10_000;

/// Test harness driving one [`SwitchView`].
#[derive(Debug)]
pub struct Harness {
    switch: SwitchView,
    event_queue: VecDeque<PointerEvent>,
    clock: Timestamp,
    frame: Duration,
    changes: Vec<SwitchChanged>,
}

impl Harness {
    /// Wrap an existing switch.
    pub fn new(switch: SwitchView) -> Self {
        Self {
            switch,
            event_queue: VecDeque::new(),
            clock: 0,
            frame: DEFAULT_FRAME,
            changes: Vec::new(),
        }
    }

    /// Build a switch from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the config is invalid.
    pub fn from_config(config: SwitchConfig) -> Self {
        match SwitchView::new(config) {
            Ok(switch) => Self::new(switch),
            Err(err) => panic!("invalid switch config: {err}"),
        }
    }

    /// Set the frame interval.
    #[must_use]
    pub const fn frame_interval(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    /// Switch under test.
    pub const fn switch(&self) -> &SwitchView {
        &self.switch
    }

    /// Mutable access to the switch under test.
    pub fn switch_mut(&mut self) -> &mut SwitchView {
        &mut self.switch
    }

    /// Current simulated time in milliseconds.
    pub const fn now(&self) -> Timestamp {
        self.clock
    }

    /// Every change reported so far, oldest first.
    pub fn changes(&self) -> &[SwitchChanged] {
        &self.changes
    }

    /// Drain the recorded changes.
    pub fn take_changes(&mut self) -> Vec<SwitchChanged> {
        std::mem::take(&mut self.changes)
    }

    // === Clock ===

    /// Advance the clock without ticking animations.
    pub fn wait(&mut self, ms: u64) -> &mut Self {
        self.clock += ms;
        self
    }

    /// Step `frames` animation frames. Returns how many frames did work.
    pub fn advance_frames(&mut self, frames: usize) -> usize {
        let mut ticked = 0;
        for _ in 0..frames {
            if !self.switch.is_animating() {
                break;
            }
            self.step_frame();
            ticked += 1;
        }
        ticked
    }

    /// Step frames until no animation is running. Returns the frame count.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.switch.is_animating() {
            assert!(frames < MAX_SETTLE_FRAMES, "animation never finished");
            self.step_frame();
            frames += 1;
        }
        frames
    }

    // === Event Simulation ===

    /// Touch down with `pointer` at `x`.
    pub fn press(&mut self, pointer: PointerId, x: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::Down {
            pointer_id: pointer,
            x,
            timestamp: self.clock,
        });
        self.process_events();
        self
    }

    /// Move `pointer` to `x`.
    pub fn move_to(&mut self, pointer: PointerId, x: f32) -> &mut Self {
        self.event_queue
            .push_back(PointerEvent::Move { pointer_id: pointer, x });
        self.process_events();
        self
    }

    /// Lift `pointer` at `x`.
    pub fn release(&mut self, pointer: PointerId, x: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::Up {
            pointer_id: pointer,
            x,
            timestamp: self.clock,
        });
        self.process_events();
        self
    }

    /// Lift a non-final `pointer` at `x`.
    pub fn release_additional(&mut self, pointer: PointerId, x: f32) -> &mut Self {
        self.event_queue.push_back(PointerEvent::AdditionalUp {
            pointer_id: pointer,
            x,
        });
        self.process_events();
        self
    }

    /// Abort the gesture.
    pub fn cancel(&mut self, pointer: PointerId) -> &mut Self {
        self.event_queue
            .push_back(PointerEvent::Cancel { pointer_id: pointer });
        self.process_events();
        self
    }

    /// Quick, still press and release at `x`.
    pub fn tap(&mut self, x: f32) -> &mut Self {
        self.press(PRIMARY, x).wait(50).release(PRIMARY, x)
    }

    /// Press at `from`, move to `to` in `steps` equal moves spread over
    /// `duration_ms`, then release at `to`.
    pub fn drag(&mut self, from: f32, to: f32, steps: u32, duration_ms: u64) -> &mut Self {
        let steps = steps.max(1);
        let step_ms = duration_ms / u64::from(steps);
        self.press(PRIMARY, from);
        for i in 1..=steps {
            let x = (to - from).mul_add(i as f32 / steps as f32, from);
            self.wait(step_ms).move_to(PRIMARY, x);
        }
        self.release(PRIMARY, to)
    }

    // === Painting ===

    /// Paint the switch into a fresh [`RecordingCanvas`].
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.switch.paint(&mut canvas);
        canvas
    }

    /// Current indicator rectangle.
    pub const fn indicator(&self) -> Rect {
        self.switch.indicator_geometry()
    }

    // === Assertions ===

    /// Assert the committed state.
    ///
    /// # Panics
    ///
    /// Panics if the state does not match.
    pub fn assert_checked(&self, expected: bool) -> &Self {
        assert_eq!(
            self.switch.is_checked(),
            expected,
            "Expected switch to be {} but it is {}",
            on_off(expected),
            on_off(self.switch.is_checked())
        );
        self
    }

    /// Assert the phase.
    ///
    /// # Panics
    ///
    /// Panics if the phase does not match.
    pub fn assert_phase(&self, expected: Phase) -> &Self {
        assert_eq!(self.switch.phase(), expected, "unexpected phase");
        self
    }

    /// Assert the switch is idle with canonical geometry and color for its state.
    ///
    /// # Panics
    ///
    /// Panics if an animation or drag is in progress, or the geometry is off.
    pub fn assert_settled(&self) -> &Self {
        self.assert_phase(Phase::Idle);
        let model = self.switch.model();
        let actual = model.snapshot();
        let expected = model.canonical_snapshot(self.switch.is_checked());
        assert_close("indicator left", actual.indicator_left, expected.indicator_left);
        assert_close("indicator width", actual.indicator_width, expected.indicator_width);
        let (a, e) = (actual.container_color, expected.container_color);
        for (channel, got, want) in [("r", a.r, e.r), ("g", a.g, e.g), ("b", a.b, e.b), ("a", a.a, e.a)] {
            assert_close(channel, got, want);
        }
        self
    }

    /// Assert the indicator's left edge.
    ///
    /// # Panics
    ///
    /// Panics if the left edge differs by more than a small tolerance.
    pub fn assert_indicator_left(&self, expected: f32) -> &Self {
        assert_close("indicator left", self.indicator().left, expected);
        self
    }

    /// Assert the indicator's width.
    ///
    /// # Panics
    ///
    /// Panics if the width differs by more than a small tolerance.
    pub fn assert_indicator_width(&self, expected: f32) -> &Self {
        assert_close("indicator width", self.indicator().width(), expected);
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(change) = self.switch.handle_event(&event) {
                self.changes.push(change);
            }
        }
    }

    fn step_frame(&mut self) {
        self.switch.tick(self.frame);
        self.clock += self.frame.as_millis() as u64;
    }
}

fn on_off(checked: bool) -> &'static str {
    if checked {
        "ON"
    } else {
        "OFF"
    }
}

fn assert_close(what: &str, actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "Expected {what} {expected} but found {actual}"
    );
}
