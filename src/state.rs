use std::time::{Duration, Instant};

use egui::{Color32, Pos2};

/// Minimum spacing between mode toggles.
pub const TOGGLE_DELAY: Duration = Duration::from_millis(500);
/// How long an effect overlay stays on screen.
pub const EFFECT_DURATION: Duration = Duration::from_millis(2000);
/// How long the "color locked" notice stays on screen.
pub const LOCK_MESSAGE_DURATION: Duration = Duration::from_millis(1500);

pub const DEFAULT_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

/// Transient full-screen text overlays, triggered by the effect buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Good,
    Firework,
    Heart,
    Sad,
}

/// All mode flags, timers, and color selection for the sketch. Time is
/// always passed in, so transitions can be exercised with a simulated clock.
///
/// Invariants: `writing` and `erasing` are never both true (both false is
/// the idle state); at most one effect is active at a time; the selected
/// color is only meaningful while the picker is open.
pub struct EditorState {
    writing: bool,
    erasing: bool,
    picker_open: bool,
    active_color: Color32,
    effect: Option<(Effect, Instant)>,
    selected_color: Option<Color32>,
    selected_pos: Option<Pos2>,
    last_toggle: Option<Instant>,
    lock_message: Option<Instant>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            writing: false,
            erasing: false,
            picker_open: false,
            active_color: DEFAULT_COLOR,
            effect: None,
            selected_color: None,
            selected_pos: None,
            last_toggle: None,
            lock_message: None,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writing(&self) -> bool {
        self.writing
    }

    pub fn erasing(&self) -> bool {
        self.erasing
    }

    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn selected_color(&self) -> Option<Color32> {
        self.selected_color
    }

    pub fn selected_pos(&self) -> Option<Pos2> {
        self.selected_pos
    }

    fn toggle_allowed(&self, now: Instant) -> bool {
        !self.picker_open
            && self
                .last_toggle
                .is_none_or(|last| now.duration_since(last) >= TOGGLE_DELAY)
    }

    /// Flip write mode, turning erase mode off. Debounced, and suppressed
    /// entirely while the picker is open.
    pub fn toggle_writing(&mut self, now: Instant) {
        if !self.toggle_allowed(now) {
            return;
        }
        self.writing = !self.writing;
        self.erasing = false;
        self.last_toggle = Some(now);
        log::info!("writing mode {}", if self.writing { "on" } else { "off" });
    }

    /// Flip erase mode, turning write mode off. Same gating as write.
    pub fn toggle_erasing(&mut self, now: Instant) {
        if !self.toggle_allowed(now) {
            return;
        }
        self.erasing = !self.erasing;
        self.writing = false;
        self.last_toggle = Some(now);
        log::info!("erase mode {}", if self.erasing { "on" } else { "off" });
    }

    /// The active effect, if it has not yet expired. Expiry is evaluated on
    /// read; there is no timer callback.
    pub fn effect(&self, now: Instant) -> Option<Effect> {
        self.effect
            .filter(|(_, started)| now.duration_since(*started) <= EFFECT_DURATION)
            .map(|(effect, _)| effect)
    }

    /// Arm an effect. A no-op while another effect is still on screen.
    pub fn trigger_effect(&mut self, effect: Effect, now: Instant) {
        if self.picker_open || self.effect(now).is_some() {
            return;
        }
        log::info!("effect {effect:?} armed");
        self.effect = Some((effect, now));
    }

    /// Open the color picker. Only available while no effect is active.
    /// The selection starts out empty.
    pub fn open_picker(&mut self, now: Instant) {
        if self.picker_open || self.effect(now).is_some() {
            return;
        }
        self.picker_open = true;
        self.selected_color = None;
        self.selected_pos = None;
    }

    /// Live update of the picked color while the fingertip is on the wheel.
    pub fn select_color(&mut self, color: Color32, pos: Pos2) {
        if !self.picker_open {
            return;
        }
        self.selected_color = Some(color);
        self.selected_pos = Some(pos);
    }

    /// Confirm the picked color as the drawing color and close the picker.
    /// Does nothing without a selection.
    pub fn apply_selected_color(&mut self) -> bool {
        let Some(color) = self.selected_color else {
            return false;
        };
        self.active_color = color;
        self.selected_color = None;
        self.selected_pos = None;
        self.picker_open = false;
        log::info!("drawing color set to {color:?}");
        true
    }

    /// Both hands raised while picking: lock the selection in (same effect
    /// as confirming) and show a transient notice.
    pub fn lock_selected_color(&mut self, now: Instant) -> bool {
        if !self.picker_open || self.selected_color.is_none() {
            return false;
        }
        self.apply_selected_color();
        self.lock_message = Some(now);
        true
    }

    pub fn lock_message_visible(&self, now: Instant) -> bool {
        self.lock_message
            .is_some_and(|shown| now.duration_since(shown) <= LOCK_MESSAGE_DURATION)
    }
}
