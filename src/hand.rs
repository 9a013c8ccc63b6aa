use egui::Pos2;

/// Thumb-tip to index-tip distance below this many pixels reads as the
/// OK gesture, the "pen down" signal.
pub const OK_GESTURE_DISTANCE: f32 = 50.0;

/// Landmark indices in the 21-point hand model (MediaPipe convention).
/// Only the two tips are consumed; the rest of the set is accepted on the
/// wire and ignored.
pub mod landmark {
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const COUNT: usize = 21;
}

/// One detected hand, reduced to the landmarks this sketch needs, in screen
/// coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Hand {
    pub thumb_tip: Pos2,
    pub index_tip: Pos2,
}

impl Hand {
    pub fn ok_gesture(&self) -> bool {
        self.thumb_tip.distance(self.index_tip) < OK_GESTURE_DISTANCE
    }
}

/// Fingertip position plus the OK-gesture flag for a single-hand frame.
#[derive(Clone, Copy, Debug)]
pub struct Pointer {
    pub pos: Pos2,
    pub ok: bool,
}

/// What the latest detection set means for this frame.
#[derive(Clone, Copy, Debug)]
pub enum HandInput {
    /// No hands: no positional input this frame. Gesture state is left
    /// untouched, not reset.
    None,
    /// Exactly one hand: fingertip position and gesture.
    One(Pointer),
    /// Two or more hands: the commit-and-reset signal.
    Many,
}

pub fn classify(hands: &[Hand]) -> HandInput {
    match hands {
        [] => HandInput::None,
        [hand] => HandInput::One(Pointer {
            pos: hand.index_tip,
            ok: hand.ok_gesture(),
        }),
        _ => HandInput::Many,
    }
}
