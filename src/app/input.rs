//! Platform-neutral input state
//!
//! The app shell injects winit events through the `inject_*` methods (see
//! [`input_adapter`](crate::app::input_adapter)); gameplay code reads the
//! per-frame edge events and the polled state. `end_frame` clears the
//! transient state once the frame callback has run.

use glam::Vec2;
use rustc_hash::FxHashSet;

/// Physical key, independent of layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    Space,
    Enter,
    Escape,
    Backspace,
    Tab,

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// A key transition edge. Repeats are filtered at injection, so every event
/// is a genuine press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Cursor position in window pixels.
    pub cursor_position: Vec2,
    /// Cursor displacement since the previous frame.
    pub cursor_delta: Vec2,
    /// Scroll amount this frame.
    pub scroll_delta: Vec2,
    /// Window size in pixels.
    pub screen_size: Vec2,
    /// Currently held mouse buttons.
    pub mouse_buttons: FxHashSet<MouseButton>,

    keys: FxHashSet<Key>,
    key_events: Vec<KeyEvent>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key transition edges received since the last `end_frame`.
    #[must_use]
    pub fn key_events(&self) -> &[KeyEvent] {
        &self.key_events
    }

    #[must_use]
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// End-of-frame cleanup (clears deltas and edge events).
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.key_events.clear();
    }

    // === Injection (called by the event adapter) ===

    pub fn inject_key(&mut self, key: Key, pressed: bool, repeat: bool) {
        if repeat {
            return;
        }
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
        self.key_events.push(KeyEvent { key, pressed });
    }

    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn inject_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // First event has no meaningful delta
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    pub fn inject_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    pub fn inject_scroll(&mut self, dx: f32, dy: f32) {
        self.scroll_delta += Vec2::new(dx, dy);
    }
}
