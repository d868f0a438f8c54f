//! Press handling - selection, drag start, connection start, deselection.
//!
//! Press resolution order:
//! 1. an active label edit ignores presses on its own node; anywhere else
//!    the press blurs the editor, which commits it
//! 2. an anchor starts a connection drag, even in connect mode
//! 3. a node body either feeds connect mode or starts a move
//! 4. the background clears the selection

use super::{GestureState, HitTarget, PointerEvent};
use crate::editor::EditorSession;
use crate::types::NodeId;
use tracing::debug;

impl EditorSession {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        // Pointer capture delivers the release before any new press.
        if self.canvas.gesture.is_dragging() {
            return;
        }

        let point = self.viewport.client_to_canvas(event.position);
        let target = self.hit_test(point);

        if let Some(editing) = self.canvas.gesture.editing_node() {
            if target.node() == Some(editing) {
                return;
            }
            self.commit_label_edit();
        }

        match target {
            HitTarget::Anchor(from, anchor) => {
                debug!(node = %from, ?anchor, "connection drag started");
                self.canvas.gesture = GestureState::DraggingConnection {
                    from,
                    cursor: point,
                };
                self.canvas.hovered_anchor = None;
                self.notify();
            }
            HitTarget::Node(id) if self.canvas.connect_mode => {
                self.handle_connect_click(id);
            }
            HitTarget::Node(id) => {
                let Some(node) = self.scene.node(id) else {
                    return;
                };
                self.canvas.gesture = GestureState::DraggingNode {
                    node: id,
                    grab_offset: point - node.position,
                };
                self.canvas.hovered_anchor = None;
                self.select(Some(id));
            }
            HitTarget::Background => {
                self.select(None);
            }
        }
    }

    /// Click-to-connect: the first click picks the source, a click on the
    /// same node cancels, a click on another node connects the pair.
    fn handle_connect_click(&mut self, id: NodeId) {
        let pending = match self.canvas.gesture {
            GestureState::ConnectPending { from } => Some(from),
            _ => None,
        };

        match pending {
            None => {
                self.canvas.gesture = GestureState::ConnectPending { from: id };
                self.select(Some(id));
            }
            Some(from) if from == id => {
                self.canvas.gesture.reset();
                self.notify();
            }
            Some(from) => {
                if self.scene.connect(from, id).is_some() {
                    self.record_history();
                }
                self.canvas.gesture.reset();
                self.notify();
            }
        }
    }

    /// Select the node under a secondary press so the host can open its
    /// context menu. Returns the node, or `None` over the background.
    pub fn handle_context_press(&mut self, event: &PointerEvent) -> Option<NodeId> {
        if self.canvas.gesture.is_dragging() {
            return None;
        }
        let point = self.viewport.client_to_canvas(event.position);
        let id = self.hit_test(point).node()?;
        self.select(Some(id));
        Some(id)
    }
}
