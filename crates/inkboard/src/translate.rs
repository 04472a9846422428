//! Input translation: board events and their handlers.
//!
//! The host delivers one [`BoardEvent`] at a time, always between frames.
//! Handlers never fail; malformed requests (an unknown palette index, a
//! zero-sized viewport) are dropped.

use inkboard_engine::core::AppControl;
use inkboard_engine::coords::Viewport;
use inkboard_engine::input::{InputState, Key};

use crate::board::Board;
use crate::palette::Palette;

/// Board-level input, already stripped of platform detail.
///
/// Coordinates are window positions in logical pixels, top-left origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BoardEvent {
    Resize { width: f32, height: f32 },
    ButtonPress { x: f32, y: f32 },
    /// Left button down while the cursor position is unknown.
    ButtonHold,
    ButtonRelease,
    CursorMove { x: f32, y: f32 },
    SelectColor(usize),
    Clear,
    ExitRequest,
}

impl Board {
    /// Routes `event` to its handler.
    pub fn dispatch(&mut self, event: BoardEvent) -> AppControl {
        match event {
            BoardEvent::Resize { width, height } => self.on_resize(width, height),
            BoardEvent::ButtonPress { x, y } => self.on_button_press(x, y),
            BoardEvent::ButtonHold => self.on_button_hold(),
            BoardEvent::ButtonRelease => self.on_button_release(),
            BoardEvent::CursorMove { x, y } => self.on_cursor_move(x, y),
            BoardEvent::SelectColor(index) => self.on_color_select(index),
            BoardEvent::Clear => self.on_clear(),
            BoardEvent::ExitRequest => return self.on_exit_request(),
        }
        AppControl::Continue
    }

    /// Updates the mapping basis. A zero-sized (minimized) viewport keeps
    /// the previous one.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            log::trace!("ignoring resize to {width}x{height}");
            return;
        }
        self.viewport = viewport;
    }

    /// Left button down: start a stroke and stamp its first point.
    pub fn on_button_press(&mut self, x: f32, y: f32) {
        self.pointer_held = true;
        self.stamp(x, y);
    }

    /// Left button down with no known cursor position: the stroke starts
    /// with the next cursor move instead of a guessed point.
    pub fn on_button_hold(&mut self) {
        self.pointer_held = true;
    }

    pub fn on_button_release(&mut self) {
        self.pointer_held = false;
    }

    /// Stamps a point only while the button is held.
    pub fn on_cursor_move(&mut self, x: f32, y: f32) {
        if self.pointer_held {
            self.stamp(x, y);
        }
    }

    /// Switches the brush to palette entry `index`. Existing points keep
    /// their color.
    pub fn on_color_select(&mut self, index: usize) {
        let Some(color) = self.palette.get(index) else {
            log::trace!("no palette entry {index}");
            return;
        };
        if color != self.brush {
            log::debug!("brush -> palette entry {index} {color:?}");
            self.brush = color;
        }
    }

    /// Drops every point; brush and viewport are untouched.
    pub fn on_clear(&mut self) {
        if !self.points.is_empty() {
            log::debug!("clearing {} points", self.points.len());
            self.points.clear();
        }
    }

    pub fn on_exit_request(&mut self) -> AppControl {
        log::debug!("exit requested");
        AppControl::Exit
    }
}

/// Board events implied by the keys currently held.
///
/// Keys are level-triggered: holding a key yields its event every frame.
/// Escape requests exit, digits select palette entries in ascending order
/// (the highest held digit wins) and `C` clears.
pub fn held_key_events(palette: &Palette, input: &InputState) -> Vec<BoardEvent> {
    let mut events = Vec::new();

    if input.key_down(Key::Escape) {
        events.push(BoardEvent::ExitRequest);
    }

    events.extend(
        Key::DIGITS
            .into_iter()
            .filter(|&key| input.key_down(key))
            .filter_map(|key| palette.index_for_key(key))
            .map(BoardEvent::SelectColor),
    );

    if input.key_down(Key::C) {
        events.push(BoardEvent::Clear);
    }

    events
}
