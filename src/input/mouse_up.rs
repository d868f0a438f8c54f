//! Release handling - finish node drags and connection drags.

use super::{GestureState, PointerEvent};
use crate::editor::EditorSession;
use tracing::debug;

impl EditorSession {
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) {
        let point = self.viewport.client_to_canvas(event.position);

        match self.canvas.gesture.take() {
            GestureState::DraggingNode { node, .. } => {
                // One checkpoint per drag; a drag that moved nothing records
                // nothing because the state equals the last checkpoint.
                if self.record_history() {
                    debug!(node = %node, "drag recorded");
                }
                self.notify();
            }
            GestureState::DraggingConnection { from, .. } => {
                // Dropping on a target's anchor counts as dropping on it.
                let created = self
                    .hit_test(point)
                    .node()
                    .filter(|&target| target != from)
                    .and_then(|target| self.scene.connect(from, target));
                if created.is_some() {
                    self.record_history();
                }
                self.notify();
            }
            other => self.canvas.gesture = other,
        }
    }
}
