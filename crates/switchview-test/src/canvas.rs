//! Recording canvas for paint assertions.

use switchview_core::{Canvas, Color, Rect};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rounded rectangle
    RoundRect {
        /// Bounds
        rect: Rect,
        /// Corner radius
        radius: f32,
        /// Fill
        color: Color,
    },
    /// Stroked oval inscribed in `rect`
    StrokeOval {
        /// Bounds
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
}

/// A canvas that records draw commands instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundRect {
            rect,
            radius,
            color,
        });
    }

    fn stroke_oval(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeOval { rect, color, width });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        canvas.fill_round_rect(rect, 5.0, Color::BLACK);
        canvas.stroke_oval(rect, Color::WHITE, 2.0);

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::RoundRect { radius, .. } if radius == 5.0));
        assert!(matches!(canvas.commands()[1], DrawCommand::StrokeOval { width, .. } if width == 2.0));
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_oval(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE, 1.0);
        assert_eq!(canvas.take_commands().len(), 1);
        assert!(canvas.is_empty());
    }
}
