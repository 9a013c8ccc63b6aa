use egui::Pos2;

use crate::stroke::Stroke;

/// The stroke store. Insertion order is render order; there is no z-index
/// beyond that. A stroke whose points have all been erased is never retained.
#[derive(Default)]
pub struct Document {
    strokes: Vec<Stroke>,
}

impl Document {
    pub fn new() -> Self {
        Self { strokes: Vec::new() }
    }

    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Remove every point of every stroke within `radius` of `pos`, dropping
    /// strokes that end up empty. Runs over all strokes and all points; fine
    /// at the few-hundred-point scale this sketch operates at.
    pub fn erase_near(&mut self, pos: Pos2, radius: f32) -> usize {
        let mut removed = 0;
        for stroke in &mut self.strokes {
            removed += stroke.erase_near(pos, radius);
        }
        self.strokes.retain(|s| !s.is_empty());
        removed
    }
}
