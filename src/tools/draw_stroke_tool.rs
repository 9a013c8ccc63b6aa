use egui::{Color32, Pos2, pos2};

use crate::document::Document;
use crate::stroke::MutableStroke;

/// Per-frame exponential smoothing toward the raw fingertip position.
pub const SMOOTHING_FACTOR: f32 = 0.25;

/// Captures strokes from the OK gesture. While the gesture is held the raw
/// fingertip is smoothed through an anchor point and appended to the
/// in-progress buffer; releasing the gesture (or losing the hand, leaving
/// write mode, or hovering a button) commits the buffer to the document.
pub struct DrawStrokeTool {
    current: MutableStroke,
    anchor: Pos2,
    first_point: bool,
    pen_down: bool,
}

impl Default for DrawStrokeTool {
    fn default() -> Self {
        Self {
            current: MutableStroke::new(),
            anchor: pos2(0.0, 0.0),
            first_point: true,
            pen_down: false,
        }
    }
}

impl DrawStrokeTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame of held OK gesture at the raw fingertip position. The first
    /// frame of a gesture snaps the anchor to the raw position; later frames
    /// lerp the anchor toward it and record the anchor.
    pub fn pen_down(&mut self, raw: Pos2) {
        if !self.pen_down {
            self.pen_down = true;
            self.first_point = true;
        }
        if self.first_point {
            self.anchor = raw;
            self.first_point = false;
        } else {
            self.anchor = self.anchor.lerp(raw, SMOOTHING_FACTOR);
        }
        self.current.add_point(self.anchor);
    }

    /// End of the gesture: commit the buffer (if it captured anything) as a
    /// stroke in `color`, and reset for the next gesture. Harmless to call
    /// on frames where nothing was in progress.
    pub fn pen_up(&mut self, document: &mut Document, color: Color32) {
        if !self.current.is_empty() {
            log::info!("committing stroke with {} points", self.current.len());
            document.add_stroke(self.current.take_stroke(color));
        }
        self.pen_down = false;
        self.first_point = true;
    }

    /// Drop the in-progress buffer without committing (clear-all).
    pub fn reset(&mut self) {
        self.current.clear();
        self.pen_down = false;
        self.first_point = true;
    }

    pub fn is_drawing(&self) -> bool {
        self.pen_down
    }

    /// The in-progress point sequence, for preview rendering.
    pub fn points(&self) -> &[Pos2] {
        self.current.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_snaps_to_the_raw_position() {
        let mut tool = DrawStrokeTool::new();
        tool.pen_down(pos2(50.0, 60.0));
        assert_eq!(tool.points(), &[pos2(50.0, 60.0)]);
    }

    #[test]
    fn anchor_converges_geometrically_toward_a_held_target() {
        let mut tool = DrawStrokeTool::new();
        tool.pen_down(pos2(0.0, 0.0));

        let frames = 8;
        for _ in 0..frames {
            tool.pen_down(pos2(100.0, 0.0));
        }

        let points = tool.points();
        assert_eq!(points.len(), frames + 1);
        // Strictly increasing toward the target...
        for pair in points.windows(2) {
            assert!(pair[1].x > pair[0].x);
            assert!(pair[1].x < 100.0);
        }
        // ...following anchor_k = 100 * (1 - 0.75^k).
        for (k, point) in points.iter().enumerate() {
            let expected = 100.0 * (1.0 - 0.75f32.powi(k as i32));
            assert!((point.x - expected).abs() < 0.001, "frame {k}");
        }
    }

    #[test]
    fn pen_up_commits_and_resets() {
        let mut document = Document::new();
        let mut tool = DrawStrokeTool::new();
        tool.pen_down(pos2(0.0, 0.0));
        tool.pen_down(pos2(10.0, 0.0));

        tool.pen_up(&mut document, Color32::RED);
        assert_eq!(document.stroke_count(), 1);
        assert_eq!(document.strokes()[0].points().len(), 2);
        assert!(tool.points().is_empty());
        assert!(!tool.is_drawing());

        // A second release with nothing buffered commits nothing.
        tool.pen_up(&mut document, Color32::RED);
        assert_eq!(document.stroke_count(), 1);
    }

    #[test]
    fn a_new_gesture_starts_from_a_fresh_anchor() {
        let mut document = Document::new();
        let mut tool = DrawStrokeTool::new();
        tool.pen_down(pos2(0.0, 0.0));
        tool.pen_up(&mut document, Color32::RED);

        tool.pen_down(pos2(500.0, 500.0));
        assert_eq!(tool.points(), &[pos2(500.0, 500.0)]);
    }

    #[test]
    fn reset_discards_without_committing() {
        let mut document = Document::new();
        let mut tool = DrawStrokeTool::new();
        tool.pen_down(pos2(0.0, 0.0));
        tool.reset();
        tool.pen_up(&mut document, Color32::RED);
        assert_eq!(document.stroke_count(), 0);
    }
}
