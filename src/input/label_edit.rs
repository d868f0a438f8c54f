//! Inline label editing.
//!
//! A label still showing its kind's default opens with an empty draft. On
//! commit the trimmed draft is resolved (blank falls back to the default)
//! and only a label that actually changed is written and checkpointed.

use super::{GestureState, PointerEvent};
use crate::editor::EditorSession;
use crate::types::NodeId;
use tracing::debug;

impl EditorSession {
    pub fn handle_double_press(&mut self, event: &PointerEvent) {
        let point = self.viewport.client_to_canvas(event.position);
        if let Some(id) = self.hit_test(point).node() {
            self.begin_label_edit(id);
        }
    }

    /// Open the inline editor on a node. Not available during a drag.
    pub fn begin_label_edit(&mut self, id: NodeId) -> bool {
        if self.canvas.gesture.is_dragging() {
            return false;
        }
        match self.canvas.gesture.editing_node() {
            Some(current) if current == id => return true,
            Some(_) => {
                self.commit_label_edit();
            }
            None => {}
        }
        let Some(node) = self.scene.node(id) else {
            return false;
        };
        let draft = if node.has_default_label() {
            String::new()
        } else {
            node.label.clone()
        };
        self.canvas.gesture = GestureState::EditingLabel { node: id, draft };
        self.notify();
        true
    }

    /// Replace the editor's text. Ignored when no edit is open.
    pub fn update_label_draft(&mut self, text: &str) {
        if let GestureState::EditingLabel { draft, .. } = &mut self.canvas.gesture {
            text.clone_into(draft);
            self.notify();
        }
    }

    /// Close the editor keeping its text. Returns true if the label changed.
    pub fn commit_label_edit(&mut self) -> bool {
        if !self.canvas.gesture.is_editing() {
            return false;
        }
        let GestureState::EditingLabel { node, draft } = self.canvas.gesture.take() else {
            return false;
        };
        self.notify();

        let Some(current) = self.scene.node(node) else {
            return false;
        };
        let resolved = current.kind.label_or_default(draft.trim());
        if resolved == current.label {
            return false;
        }

        self.scene.set_label(node, &resolved);
        if self.canvas.selected == Some(node) {
            self.refresh_panel();
        }
        debug!(node = %node, label = %resolved, "label edit committed");
        self.record_history();
        true
    }

    /// Close the editor discarding its text.
    pub fn cancel_label_edit(&mut self) {
        if self.canvas.gesture.is_editing() {
            self.canvas.gesture.reset();
            self.notify();
        }
    }
}
