use egui::ecolor::Hsva;
use egui::{Color32, ColorImage, Pos2, Rect, Vec2, pos2};

pub const WHEEL_RADIUS: f32 = 100.0;

/// A fixed-radius HSV disc: angle maps to hue, normalized radial distance to
/// saturation, value pinned at maximum. Positions outside the radius pick
/// nothing, which is how a fingertip position is gated as a valid pick.
#[derive(Clone, Copy, Debug)]
pub struct ColorWheel {
    center: Pos2,
    radius: f32,
}

impl ColorWheel {
    pub fn new(center: Pos2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }

    pub fn contains(&self, pos: Pos2) -> bool {
        pos.distance(self.center) <= self.radius
    }

    /// Hue in degrees [0, 360) and saturation [0, 1] at `pos`, or None
    /// outside the disc.
    pub fn pick_at(&self, pos: Pos2) -> Option<(f32, f32)> {
        let offset = pos - self.center;
        let distance = offset.length();
        if distance > self.radius {
            return None;
        }

        let mut angle = offset.y.atan2(offset.x).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        Some((angle, distance / self.radius))
    }

    pub fn color_at(&self, pos: Pos2) -> Option<Color32> {
        self.pick_at(pos)
            .map(|(hue, saturation)| hsv_color(hue, saturation))
    }

    /// Rasterize the wheel once into an image (transparent outside the
    /// disc); the caller uploads it as a texture.
    pub fn image(&self) -> ColorImage {
        let side = (self.radius * 2.0) as usize;
        let mut pixels = vec![Color32::TRANSPARENT; side * side];
        for y in 0..side {
            for x in 0..side {
                let pos = pos2(
                    self.center.x - self.radius + x as f32 + 0.5,
                    self.center.y - self.radius + y as f32 + 0.5,
                );
                if let Some(color) = self.color_at(pos) {
                    pixels[y * side + x] = color;
                }
            }
        }
        ColorImage {
            size: [side, side],
            pixels,
        }
    }
}

fn hsv_color(hue_degrees: f32, saturation: f32) -> Color32 {
    Color32::from(Hsva::new(hue_degrees / 360.0, saturation, 1.0, 1.0))
}
