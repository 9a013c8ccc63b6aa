use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke as EguiStroke, TextureId, pos2, vec2};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, PICKER_TOP, confirm_button_rect};
use crate::picker::ColorWheel;
use crate::state::{EditorState, Effect};

const OUTLINE: EguiStroke = EguiStroke {
    width: 2.0,
    color: Color32::BLACK,
};

/// Full-screen celebratory text for the active effect.
pub fn draw_effect(painter: &Painter, effect: Effect) {
    let (text, color) = match effect {
        Effect::Good => ("GOOD!", Color32::from_rgb(255, 215, 0)),
        Effect::Firework => ("FIREWORK!", Color32::from_rgb(255, 0, 0)),
        Effect::Heart => ("LOVE!", Color32::from_rgb(255, 0, 127)),
        Effect::Sad => ("So Sad...", Color32::from_rgb(100, 100, 255)),
    };
    painter.text(
        pos2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(48.0),
        color,
    );
}

/// The color-picker panel: wheel, live selection markers, preview swatch,
/// and confirm button.
pub fn draw_picker(
    painter: &Painter,
    wheel_texture: TextureId,
    wheel: &ColorWheel,
    state: &EditorState,
    fingertip: Option<Pos2>,
) {
    let panel = Rect::from_min_size(
        pos2(CANVAS_WIDTH / 2.0 - 160.0, PICKER_TOP),
        vec2(320.0, 280.0),
    );
    painter.rect_filled(panel, 10.0, Color32::from_rgba_unmultiplied(50, 50, 50, 200));
    painter.text(
        pos2(CANVAS_WIDTH / 2.0, PICKER_TOP + 10.0),
        Align2::CENTER_CENTER,
        "HSV Color Picker",
        FontId::proportional(16.0),
        Color32::WHITE,
    );

    painter.image(
        wheel_texture,
        wheel.rect(),
        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
        Color32::WHITE,
    );

    let below_wheel = wheel.center().y + wheel.radius();

    // Preview of the picked color (white until something is picked).
    let preview = Rect::from_min_size(
        pos2(CANVAS_WIDTH / 2.0 - 40.0, below_wheel + 30.0),
        vec2(60.0, 30.0),
    );
    painter.rect_filled(preview, 5.0, state.selected_color().unwrap_or(Color32::WHITE));
    painter.rect_stroke(preview, 5.0, OUTLINE);

    let confirm = confirm_button_rect();
    painter.rect_filled(confirm, 5.0, Color32::from_rgb(0, 200, 0));
    painter.rect_stroke(confirm, 5.0, OUTLINE);
    painter.text(
        confirm.center(),
        Align2::CENTER_CENTER,
        "OK",
        FontId::proportional(16.0),
        Color32::WHITE,
    );

    painter.text(
        pos2(CANVAS_WIDTH / 2.0, below_wheel + 5.0),
        Align2::CENTER_CENTER,
        "Raise both hands to lock the color",
        FontId::proportional(14.0),
        Color32::WHITE,
    );

    // Fingertip marker while it is over the wheel.
    if let Some(pos) = fingertip {
        if wheel.contains(pos) {
            painter.circle(
                pos,
                7.5,
                Color32::from_rgba_unmultiplied(255, 255, 255, 180),
                OUTLINE,
            );
        }
    }

    // Ring around the position that was last picked.
    if let Some(pos) = state.selected_pos() {
        painter.circle_stroke(pos, 10.0, EguiStroke::new(2.0, Color32::WHITE));
    }
}

/// Transient notice shown after both hands locked the picked color in.
pub fn draw_lock_message(painter: &Painter) {
    painter.text(
        pos2(CANVAS_WIDTH / 2.0, PICKER_TOP + 260.0),
        Align2::CENTER_CENTER,
        "Color locked",
        FontId::proportional(16.0),
        Color32::WHITE,
    );
}
