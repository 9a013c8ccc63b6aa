use egui::{Color32, Pos2};

// Committed stroke: an ordered point sequence plus the color it was drawn with.
// Content is fixed after commit except for point removal while erasing.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
}

// Mutable point buffer for the stroke currently being drawn. Not part of the
// document until it is converted into a Stroke.
#[derive(Default)]
pub struct MutableStroke {
    points: Vec<Pos2>,
}

impl Stroke {
    pub fn new(color: Color32, points: Vec<Pos2>) -> Self {
        Self { points, color }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every point within `radius` of `pos`. Returns how many points
    /// were removed.
    pub fn erase_near(&mut self, pos: Pos2, radius: f32) -> usize {
        let before = self.points.len();
        self.points.retain(|p| p.distance(pos) >= radius);
        before - self.points.len()
    }
}

impl MutableStroke {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    // Convert to a committed Stroke, capturing the active color and leaving
    // this buffer empty.
    pub fn take_stroke(&mut self, color: Color32) -> Stroke {
        Stroke::new(color, std::mem::take(&mut self.points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn take_stroke_captures_points_and_empties_buffer() {
        let mut buffer = MutableStroke::new();
        buffer.add_point(pos2(1.0, 2.0));
        buffer.add_point(pos2(3.0, 4.0));

        let stroke = buffer.take_stroke(Color32::RED);
        assert_eq!(stroke.points().len(), 2);
        assert_eq!(stroke.color(), Color32::RED);
        assert!(buffer.is_empty());
    }

    #[test]
    fn erase_near_removes_only_points_in_radius() {
        let mut stroke = Stroke::new(
            Color32::BLUE,
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(100.0, 0.0)],
        );
        let removed = stroke.erase_near(pos2(0.0, 0.0), 25.0);
        assert_eq!(removed, 2);
        assert_eq!(stroke.points(), &[pos2(100.0, 0.0)]);
    }
}
