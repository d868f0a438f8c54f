//! Move handling - node drag, connection preview, anchor hints.
//!
//! Moves are frequent; nothing here touches the history. The checkpoint for
//! a drag is taken once, on release.

use super::{GestureState, PointerEvent};
use crate::constants::ANCHOR_HINT_DISTANCE;
use crate::editor::EditorSession;

impl EditorSession {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        let point = self.viewport.client_to_canvas(event.position);

        match &mut self.canvas.gesture {
            GestureState::DraggingNode { node, grab_offset } => {
                let (node, target) = (*node, point - *grab_offset);
                self.scene.move_node(node, target.x, target.y);
                self.notify();
            }
            GestureState::DraggingConnection { cursor, .. } => {
                *cursor = point;
                self.notify();
            }
            GestureState::EditingLabel { .. } => {}
            GestureState::Idle | GestureState::ConnectPending { .. } => {
                let hovered = self
                    .scene
                    .node_at(point)
                    .and_then(|id| self.scene.node(id))
                    .map(|node| (node.id, node.nearest_anchor(point)))
                    .filter(|(_, (_, distance))| *distance < ANCHOR_HINT_DISTANCE)
                    .map(|(id, (anchor, _))| (id, anchor));
                if hovered != self.canvas.hovered_anchor {
                    self.canvas.hovered_anchor = hovered;
                    self.notify();
                }
            }
        }
    }
}
