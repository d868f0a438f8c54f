//! Keyboard handling.
//!
//! While a label edit is open the editor owns the keyboard: Enter confirms,
//! Escape cancels and everything else is text for the host's input widget.
//! Otherwise the global shortcuts apply.

use super::{Key, KeyEvent, Modifiers};
use crate::editor::EditorSession;

impl EditorSession {
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if self.canvas.gesture.is_editing() {
            match event.key {
                Key::Enter => {
                    self.commit_label_edit();
                }
                Key::Escape => self.cancel_label_edit(),
                _ => {}
            }
            return;
        }

        let Modifiers { shift, .. } = event.modifiers;
        let command = event.modifiers.command();
        match event.key {
            // Shift reports the capital letter; a bare 'Z' is Caps Lock.
            Key::Char('z') if command => {
                self.undo();
            }
            Key::Char('y') if command => {
                self.redo();
            }
            Key::Char('Z') if command && shift => {
                self.redo();
            }
            Key::Delete | Key::Backspace => {
                self.delete_selected();
            }
            _ => {}
        }
    }
}
