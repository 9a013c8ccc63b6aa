use std::time::Instant;

use egui::{Pos2, Rect, pos2, vec2};

use crate::document::Document;
use crate::feed::{DetectionFeed, FrameFeed, TrackerHandle};
use crate::hand::{self, HandInput, Pointer};
use crate::panels::{self, ButtonId, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::picker::{ColorWheel, WHEEL_RADIUS};
use crate::renderer::Renderer;
use crate::state::{EditorState, Effect};
use crate::tools::{DrawStrokeTool, EraserTool};

/// The whole sketch: per frame, read the latest detections, run the mode
/// machine and tools, then draw camera, strokes, and UI.
pub struct PaintApp {
    document: Document,
    state: EditorState,
    draw_tool: DrawStrokeTool,
    eraser: EraserTool,
    renderer: Renderer,
    wheel: ColorWheel,
    detections: DetectionFeed,
    frames: FrameFeed,
    // Kept alive for the lifetime of the app; killed on drop.
    _tracker: Option<TrackerHandle>,
}

impl PaintApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        detections: DetectionFeed,
        frames: FrameFeed,
        tracker: Option<TrackerHandle>,
    ) -> Self {
        Self {
            document: Document::new(),
            state: EditorState::new(),
            draw_tool: DrawStrokeTool::new(),
            eraser: EraserTool::new(),
            renderer: Renderer::new(cc),
            wheel: ColorWheel::new(panels::wheel_center(), WHEEL_RADIUS),
            detections,
            frames,
            _tracker: tracker,
        }
    }

    fn handle_buttons(&mut self, pos: Pos2, now: Instant) {
        let Some(button) = panels::hit_test(pos) else {
            return;
        };
        match button {
            ButtonId::WriteToggle => self.state.toggle_writing(now),
            ButtonId::EraseToggle => self.state.toggle_erasing(now),
            ButtonId::ClearAll => {
                self.document.clear();
                self.draw_tool.reset();
            }
            ButtonId::Good => self.state.trigger_effect(Effect::Good, now),
            ButtonId::Firework => self.state.trigger_effect(Effect::Firework, now),
            ButtonId::Heart => self.state.trigger_effect(Effect::Heart, now),
            ButtonId::Sad => self.state.trigger_effect(Effect::Sad, now),
            ButtonId::Color => self.state.open_picker(now),
        }
    }

    fn handle_drawing(&mut self, pointer: Pointer) {
        // Over a button: never draw or erase, and finish any stroke that
        // was in flight.
        if panels::hit_test(pointer.pos).is_some() {
            self.draw_tool
                .pen_up(&mut self.document, self.state.active_color());
            return;
        }

        if self.state.erasing() {
            self.eraser.erase_at(&mut self.document, pointer.pos);
        }

        if !self.state.erasing() && self.state.writing() && pointer.ok {
            self.draw_tool.pen_down(pointer.pos);
        } else {
            self.draw_tool
                .pen_up(&mut self.document, self.state.active_color());
        }
    }

    fn handle_picker(&mut self, pointer: Pointer) {
        if let Some(color) = self.wheel.color_at(pointer.pos) {
            self.state.select_color(color, pointer.pos);
        }
        if panels::confirm_button_rect().contains(pointer.pos) {
            self.state.apply_selected_color();
        }
    }

    /// Run one frame's worth of input against the state machine and the
    /// document.
    fn process_input(&mut self, input: HandInput, now: Instant) {
        match input {
            HandInput::None => {}
            HandInput::Many => {
                // Both hands up: finish the stroke in flight, and lock the
                // picked color in if the picker is open with a selection.
                self.draw_tool
                    .pen_up(&mut self.document, self.state.active_color());
                self.state.lock_selected_color(now);
            }
            HandInput::One(pointer) => {
                if self.state.picker_open() {
                    self.handle_picker(pointer);
                } else {
                    self.handle_buttons(pointer.pos, now);
                    self.handle_drawing(pointer);
                }
            }
        }
    }

    fn draw(&mut self, painter: &egui::Painter, now: Instant, fingertip: Option<Pos2>) {
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(CANVAS_WIDTH, CANVAS_HEIGHT));
        self.renderer.draw_background(painter, canvas);
        self.renderer.draw_strokes(painter, &self.document);
        self.renderer
            .draw_stroke_points(painter, self.draw_tool.points(), self.state.active_color());

        panels::draw_buttons(painter, &self.state);

        if self.state.picker_open() {
            let wheel_texture = self.renderer.wheel_texture(&self.wheel);
            panels::draw_picker(painter, wheel_texture, &self.wheel, &self.state, fingertip);
        }

        panels::draw_status(painter, &self.state);

        if let Some(effect) = self.state.effect(now) {
            panels::draw_effect(painter, effect);
        }
        if self.state.lock_message_visible(now) {
            panels::draw_lock_message(painter);
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(frame) = self.frames.take() {
            self.renderer.set_camera_frame(frame);
        }

        let hands = self.detections.snapshot();
        let input = hand::classify(&hands);
        let fingertip = match input {
            HandInput::One(pointer) => Some(pointer.pos),
            _ => None,
        };

        self.process_input(input, now);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (_, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.draw(&painter, now, fingertip);
            });

        // Frame-driven loop: keep repainting even without window events.
        ctx.request_repaint();
    }
}
