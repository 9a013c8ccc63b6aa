use egui::Pos2;

use crate::document::Document;

/// Points within this distance of the fingertip are erased.
pub const ERASE_RADIUS: f32 = 25.0;

/// Continuous proximity eraser: every frame the fingertip is off-button in
/// erase mode, sweep the whole document.
pub struct EraserTool {
    radius: f32,
}

impl Default for EraserTool {
    fn default() -> Self {
        Self { radius: ERASE_RADIUS }
    }
}

impl EraserTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn erase_at(&self, document: &mut Document, pos: Pos2) -> usize {
        let removed = document.erase_near(pos, self.radius);
        if removed > 0 {
            log::debug!("erased {removed} points near {pos:?}");
        }
        removed
    }
}
