//! Fixed button layout on the 640x480 canvas, hit-testing against the
//! fingertip, and the painter code for buttons, status line, picker panel,
//! and effect overlays.

use egui::{Pos2, Rect, pos2, vec2};

mod buttons;
pub use buttons::{draw_buttons, draw_status};

mod overlays;
pub use overlays::{draw_effect, draw_lock_message, draw_picker};

pub const CANVAS_WIDTH: f32 = 640.0;
pub const CANVAS_HEIGHT: f32 = 480.0;

/// Top edge of the color-picker panel.
pub const PICKER_TOP: f32 = 110.0;

/// Center of the color wheel inside the picker panel.
pub fn wheel_center() -> Pos2 {
    pos2(CANVAS_WIDTH / 2.0, PICKER_TOP + 120.0)
}

/// Every always-on-screen interactive region. The picker's confirm button is
/// separate since it only exists while the picker is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonId {
    ClearAll,
    WriteToggle,
    EraseToggle,
    Good,
    Firework,
    Heart,
    Sad,
    Color,
}

impl ButtonId {
    pub const ALL: [ButtonId; 8] = [
        ButtonId::ClearAll,
        ButtonId::WriteToggle,
        ButtonId::EraseToggle,
        ButtonId::Good,
        ButtonId::Firework,
        ButtonId::Heart,
        ButtonId::Sad,
        ButtonId::Color,
    ];

    pub fn rect(self) -> Rect {
        let (min, size) = match self {
            ButtonId::ClearAll => (pos2(20.0, 20.0), vec2(100.0, 50.0)),
            ButtonId::WriteToggle => {
                (pos2(CANVAS_WIDTH / 2.0 - 50.0, CANVAS_HEIGHT - 80.0), vec2(100.0, 50.0))
            }
            ButtonId::EraseToggle => (pos2(30.0, CANVAS_HEIGHT - 80.0), vec2(150.0, 50.0)),
            ButtonId::Good => (pos2(CANVAS_WIDTH - 130.0, CANVAS_HEIGHT - 80.0), vec2(100.0, 50.0)),
            ButtonId::Firework => {
                (pos2(CANVAS_WIDTH - 250.0, CANVAS_HEIGHT - 80.0), vec2(100.0, 50.0))
            }
            ButtonId::Heart => (pos2(CANVAS_WIDTH - 150.0, CANVAS_HEIGHT - 390.0), vec2(100.0, 50.0)),
            ButtonId::Sad => (pos2(CANVAS_WIDTH - 150.0, CANVAS_HEIGHT - 320.0), vec2(100.0, 50.0)),
            ButtonId::Color => (pos2(CANVAS_WIDTH - 150.0, CANVAS_HEIGHT - 460.0), vec2(100.0, 50.0)),
        };
        Rect::from_min_size(min, size)
    }
}

/// Which button (if any) the fingertip is over.
pub fn hit_test(pos: Pos2) -> Option<ButtonId> {
    ButtonId::ALL.into_iter().find(|id| id.rect().contains(pos))
}

/// The picker's confirm button, below and to the right of the wheel.
pub fn confirm_button_rect() -> Rect {
    let wheel = wheel_center();
    Rect::from_min_size(
        pos2(CANVAS_WIDTH / 2.0 + 80.0, wheel.y + crate::picker::WHEEL_RADIUS + 30.0),
        vec2(60.0, 30.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_each_button_at_its_center() {
        for id in ButtonId::ALL {
            assert_eq!(hit_test(id.rect().center()), Some(id), "{id:?}");
        }
    }

    #[test]
    fn hit_test_misses_open_canvas() {
        assert_eq!(hit_test(pos2(320.0, 240.0)), None);
        assert_eq!(hit_test(pos2(250.0, 100.0)), None);
    }

    #[test]
    fn button_regions_do_not_overlap() {
        for (i, a) in ButtonId::ALL.iter().enumerate() {
            for b in &ButtonId::ALL[i + 1..] {
                assert!(
                    a.rect().intersect(b.rect()).is_negative(),
                    "{a:?} overlaps {b:?}"
                );
            }
        }
    }

    #[test]
    fn confirm_button_sits_below_the_wheel() {
        let rect = confirm_button_rect();
        assert_eq!(rect.min, pos2(400.0, 360.0));
        assert_eq!(rect.size(), vec2(60.0, 30.0));
    }
}
