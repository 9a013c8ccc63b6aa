use egui::{Color32, ColorImage, Painter, Pos2, Rect, Stroke as EguiStroke, TextureHandle, TextureOptions, pos2};

use crate::document::Document;
use crate::picker::ColorWheel;

pub const STROKE_WIDTH: f32 = 4.0;

/// Owns the GPU-side textures (camera frame, pre-rendered color wheel) and
/// draws the background and stroke layers each frame.
pub struct Renderer {
    ctx: egui::Context,
    camera_texture: Option<TextureHandle>,
    wheel_texture: Option<TextureHandle>,
}

impl Renderer {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            ctx: cc.egui_ctx.clone(),
            camera_texture: None,
            wheel_texture: None,
        }
    }

    /// Upload the most recent camera frame, reusing the texture after the
    /// first frame.
    pub fn set_camera_frame(&mut self, image: ColorImage) {
        match &mut self.camera_texture {
            Some(texture) => texture.set(image, TextureOptions::LINEAR),
            None => {
                self.camera_texture =
                    Some(self.ctx.load_texture("camera-frame", image, TextureOptions::LINEAR));
            }
        }
    }

    /// The wheel raster never changes, so it is built and uploaded once.
    pub fn wheel_texture(&mut self, wheel: &ColorWheel) -> egui::TextureId {
        self.wheel_texture
            .get_or_insert_with(|| {
                self.ctx
                    .load_texture("color-wheel", wheel.image(), TextureOptions::LINEAR)
            })
            .id()
    }

    /// Camera frame as the backdrop, or a dark clear before the first frame
    /// arrives.
    pub fn draw_background(&self, painter: &Painter, rect: Rect) {
        match &self.camera_texture {
            Some(texture) => painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            ),
            None => painter.rect_filled(rect, 0.0, Color32::from_gray(20)),
        };
    }

    pub fn draw_strokes(&self, painter: &Painter, document: &Document) {
        for stroke in document.strokes() {
            self.draw_stroke_points(painter, stroke.points(), stroke.color());
        }
    }

    /// Draw a point sequence as a midpoint-smoothed polyline. Sequences
    /// with fewer than two points draw nothing.
    pub fn draw_stroke_points(&self, painter: &Painter, points: &[Pos2], color: Color32) {
        let vertices = midpoints(points);
        if vertices.len() < 2 {
            return;
        }
        painter.add(egui::Shape::line(vertices, EguiStroke::new(STROKE_WIDTH, color)));
    }
}

/// Midpoints between each interior point and its successor, the vertices of
/// the smoothed curve.
pub fn midpoints(points: &[Pos2]) -> Vec<Pos2> {
    if points.len() < 2 {
        return Vec::new();
    }
    (1..points.len() - 1)
        .map(|i| {
            pos2(
                (points[i].x + points[i + 1].x) / 2.0,
                (points[i].y + points[i + 1].y) / 2.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sequences_produce_no_curve() {
        assert!(midpoints(&[]).is_empty());
        assert!(midpoints(&[pos2(0.0, 0.0)]).is_empty());
        assert!(midpoints(&[pos2(0.0, 0.0), pos2(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn interior_midpoints_are_emitted_in_order() {
        let points = [
            pos2(0.0, 0.0),
            pos2(10.0, 0.0),
            pos2(20.0, 10.0),
            pos2(30.0, 10.0),
        ];
        let vertices = midpoints(&points);
        assert_eq!(vertices, vec![pos2(15.0, 5.0), pos2(25.0, 10.0)]);
    }
}
