//! Editor commands - toolbar buttons, context menu entries, palette drops
//! and history navigation.
//!
//! Every command that changes the scene ends with exactly one history
//! checkpoint. Commands on missing targets change nothing.

use super::EditorSession;
use crate::constants::PALETTE_DROP_OFFSET;
use crate::error::{EditorError, EditorResult};
use crate::input::GestureState;
use crate::scene::Snapshot;
use crate::templates::{Template, find_template};
use crate::types::{NodeId, NodeKind, Point};
use tracing::debug;

impl EditorSession {
    /// Delete the selected node and every connection touching it.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.canvas.selected else {
            return false;
        };
        if !self.scene.delete_node(id) {
            return false;
        }
        self.forget_node(id);
        self.select(None);
        self.record_history();
        true
    }

    /// Remove everything and checkpoint the empty canvas.
    pub fn clear_canvas(&mut self) {
        self.scene.clear();
        self.canvas.gesture.reset();
        self.canvas.hovered_anchor = None;
        self.select(None);
        self.record_history();
    }

    /// Copy a node next to itself; the copy becomes a new checkpoint.
    pub fn duplicate_node(&mut self, id: NodeId) -> Option<NodeId> {
        let copy = self.scene.duplicate_node(id, self.settings.duplicate_offset)?;
        self.record_history();
        self.notify();
        Some(copy)
    }

    pub fn duplicate_selected(&mut self) -> Option<NodeId> {
        self.canvas.selected.and_then(|id| self.duplicate_node(id))
    }

    /// Enter inline editing for the selected node (context menu "Edit").
    pub fn edit_selected_label(&mut self) -> bool {
        match self.canvas.selected {
            Some(id) => self.begin_label_edit(id),
            None => false,
        }
    }

    /// Create a node from the palette where it was dropped. Drops outside
    /// the canvas are ignored.
    pub fn drop_from_palette(&mut self, kind: NodeKind, client: Point) -> Option<NodeId> {
        if !self.viewport.contains_client(client) {
            return None;
        }
        let local = self.viewport.client_to_canvas(client);
        let (dx, dy) = PALETTE_DROP_OFFSET;
        let id = self.scene.create_node(kind, local.x - dx, local.y - dy, None);
        self.record_history();
        self.notify();
        Some(id)
    }

    /// Replace the canvas with a built-in template.
    ///
    /// Unknown names are an error and leave the scene untouched.
    pub fn load_template(&mut self, name: &str) -> EditorResult<()> {
        let template =
            find_template(name).ok_or_else(|| EditorError::UnknownTemplate(name.to_string()))?;
        self.load_custom_template(template);
        Ok(())
    }

    /// Replace the canvas with any template; recorded as one checkpoint.
    pub fn load_custom_template(&mut self, template: &Template) {
        self.canvas.gesture.reset();
        self.canvas.hovered_anchor = None;
        self.canvas.selected = None;
        template.load_into(&mut self.scene);
        self.refresh_panel();
        self.record_history();
        self.notify();
    }

    /// Toggle click-to-connect mode. Any pending connection is dropped.
    pub fn toggle_connect_mode(&mut self) -> bool {
        self.canvas.connect_mode = !self.canvas.connect_mode;
        if matches!(self.canvas.gesture, GestureState::ConnectPending { .. }) {
            self.canvas.gesture.reset();
        }
        debug!(enabled = self.canvas.connect_mode, "connect mode toggled");
        self.notify();
        self.canvas.connect_mode
    }

    // ------------------------------------------------------------------
    // Property panel
    // ------------------------------------------------------------------

    /// Live update from the panel's label field. Blank text shows the
    /// kind's default on the node; no checkpoint is taken until
    /// `commit_panel_label`.
    pub fn set_panel_label(&mut self, text: &str) {
        let Some(id) = self.canvas.selected else {
            return;
        };
        if !self.scene.contains(id) {
            return;
        }
        self.scene.set_label(id, text);
        self.panel.label = text.to_string();
        self.notify();
    }

    /// The panel's label field lost focus or was confirmed.
    pub fn commit_panel_label(&mut self) -> bool {
        if self.canvas.selected.is_none() {
            return false;
        }
        self.refresh_panel();
        self.record_history()
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Step back one checkpoint. Ignored while a drag holds the pointer.
    pub fn undo(&mut self) -> bool {
        if self.canvas.gesture.is_dragging() {
            return false;
        }
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.apply_snapshot(&snapshot);
        debug!(undo_len = self.history.undo_len(), "undo applied");
        true
    }

    /// Re-apply the last undone checkpoint. Ignored while a drag holds the
    /// pointer.
    pub fn redo(&mut self) -> bool {
        if self.canvas.gesture.is_dragging() {
            return false;
        }
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.apply_snapshot(&snapshot);
        debug!(redo_len = self.history.redo_len(), "redo applied");
        true
    }

    /// An open label edit is discarded: its draft was typed against the
    /// state being replaced.
    fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        self.scene.restore(snapshot);
        if self.canvas.gesture.is_editing() {
            self.canvas.gesture.reset();
        }
        if let Some(from) = self.canvas.gesture.pending_from() {
            if !self.scene.contains(from) {
                self.canvas.gesture.reset();
            }
        }
        self.canvas.hovered_anchor = None;
        let selected = self.canvas.selected;
        self.select(selected);
    }

    /// Drop interaction state that refers to a node no longer in the scene.
    fn forget_node(&mut self, id: NodeId) {
        let gesture = &self.canvas.gesture;
        if gesture.pending_from() == Some(id)
            || gesture.dragged_node() == Some(id)
            || gesture.editing_node() == Some(id)
        {
            self.canvas.gesture.reset();
        }
        if self.canvas.hovered_anchor.is_some_and(|(node, _)| node == id) {
            self.canvas.hovered_anchor = None;
        }
    }
}
