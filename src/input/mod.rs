//! Pointer and keyboard input handling for the diagram canvas.
//!
//! This module is the gesture controller: it turns raw events from the
//! presentation adapter into scene mutations and history checkpoints.
//!
//! ## Architecture
//!
//! The controller uses an explicit state machine (`GestureState`) to track
//! the current interaction. Every handler runs to completion and leaves the
//! machine in a well-defined state; release, confirm and cancel always lead
//! back to `Idle`.
//!
//! ## Modules
//!
//! - `state` - Gesture state machine enum and helper methods
//! - `coords` - Client to canvas coordinate conversion
//! - `mouse_down` - Press handling (select, drag start, connect, deselect)
//! - `drag` - Move handling (node drag, connection preview, anchor hints)
//! - `mouse_up` - Release handling (finish drag, finish connection)
//! - `label_edit` - Inline label editing
//! - `keyboard` - Shortcuts and edit confirm/cancel keys

pub mod coords;
mod drag;
mod keyboard;
mod label_edit;
mod mouse_down;
mod mouse_up;
mod state;

pub use crate::spatial_index::HitTarget;
pub use coords::Viewport;
pub use state::GestureState;

use crate::editor::EditorSession;
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn command(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }
}

/// Every input the presentation adapter can deliver, in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerMove(PointerEvent),
    PointerUp(PointerEvent),
    DoublePress(PointerEvent),
    ContextPress(PointerEvent),
    Key(KeyEvent),
    /// New contents of the inline label editor
    TextInput { text: String },
    /// The inline label editor lost focus
    FocusLost,
}

impl EditorSession {
    /// Resolve a canvas position using the configured anchor radius.
    pub fn hit_test(&self, point: Point) -> HitTarget {
        self.scene.hit_test(point, self.settings.anchor_radius)
    }

    /// Route one event to its handler.
    pub fn dispatch(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(e) => self.handle_pointer_down(e),
            InputEvent::PointerMove(e) => self.handle_pointer_move(e),
            InputEvent::PointerUp(e) => self.handle_pointer_up(e),
            InputEvent::DoublePress(e) => self.handle_double_press(e),
            InputEvent::ContextPress(e) => {
                self.handle_context_press(e);
            }
            InputEvent::Key(e) => self.handle_key(e),
            InputEvent::TextInput { text } => self.update_label_draft(text),
            InputEvent::FocusLost => {
                self.commit_label_edit();
            }
        }
    }
}
