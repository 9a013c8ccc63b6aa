use egui::{Align2, Color32, FontId, Painter, Rect, Stroke as EguiStroke, pos2, vec2};

use super::{ButtonId, CANVAS_WIDTH};
use crate::state::EditorState;

const BUTTON_ROUNDING: f32 = 10.0;
const OUTLINE: EguiStroke = EguiStroke {
    width: 2.0,
    color: Color32::BLACK,
};

fn fill_for(id: ButtonId, state: &EditorState) -> Color32 {
    match id {
        ButtonId::ClearAll => Color32::from_rgba_unmultiplied(255, 0, 0, 180),
        ButtonId::WriteToggle if state.writing() => {
            Color32::from_rgba_unmultiplied(0, 128, 255, 180)
        }
        ButtonId::WriteToggle => Color32::from_rgba_unmultiplied(128, 128, 128, 180),
        ButtonId::EraseToggle if state.erasing() => {
            Color32::from_rgba_unmultiplied(255, 0, 255, 180)
        }
        ButtonId::EraseToggle => Color32::from_rgba_unmultiplied(100, 100, 100, 180),
        ButtonId::Good => Color32::from_rgba_unmultiplied(0, 200, 0, 180),
        ButtonId::Firework => Color32::from_rgba_unmultiplied(255, 128, 0, 180),
        ButtonId::Heart => Color32::from_rgba_unmultiplied(255, 0, 127, 180),
        ButtonId::Sad => Color32::from_rgba_unmultiplied(100, 100, 255, 180),
        ButtonId::Color => Color32::from_rgba_unmultiplied(128, 0, 255, 180),
    }
}

fn label_for(id: ButtonId, state: &EditorState) -> (&'static str, f32) {
    match id {
        ButtonId::ClearAll => ("Erase All", 16.0),
        ButtonId::WriteToggle if state.writing() => ("Writing: ON", 14.0),
        ButtonId::WriteToggle => ("Writing: OFF", 14.0),
        ButtonId::EraseToggle if state.erasing() => ("Erase Mode: ON", 16.0),
        ButtonId::EraseToggle => ("Erase Mode: OFF", 16.0),
        ButtonId::Good => ("Good", 14.0),
        ButtonId::Firework => ("Firework", 14.0),
        ButtonId::Heart => ("Heart", 14.0),
        ButtonId::Sad => ("Sad", 14.0),
        ButtonId::Color => ("Color", 14.0),
    }
}

pub fn draw_buttons(painter: &Painter, state: &EditorState) {
    for id in ButtonId::ALL {
        let rect = id.rect();
        painter.rect_filled(rect, BUTTON_ROUNDING, fill_for(id, state));
        painter.rect_stroke(rect, BUTTON_ROUNDING, OUTLINE);

        let (label, size) = label_for(id, state);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(size),
            Color32::WHITE,
        );
    }
}

/// Mode line plus a swatch of the current drawing color at the top center.
pub fn draw_status(painter: &Painter, state: &EditorState) {
    let mode = if state.erasing() {
        "Erase Mode ON"
    } else if state.writing() {
        "Writing Mode ON"
    } else {
        "Writing Mode OFF"
    };
    painter.text(
        pos2(CANVAS_WIDTH / 2.0, 30.0),
        Align2::CENTER_CENTER,
        mode,
        FontId::proportional(24.0),
        Color32::WHITE,
    );

    let swatch = Rect::from_min_size(pos2(CANVAS_WIDTH / 2.0 - 15.0, 50.0), vec2(30.0, 20.0));
    painter.rect_filled(swatch, 5.0, state.active_color());
    painter.rect_stroke(swatch, 5.0, OUTLINE);
    painter.text(
        pos2(CANVAS_WIDTH / 2.0 - 60.0, 60.0),
        Align2::CENTER_CENTER,
        "Color:",
        FontId::proportional(16.0),
        Color32::WHITE,
    );
}
