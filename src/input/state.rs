//! Gesture state machine - one explicit state for every pointer interaction.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingNode         (press on a node body, connect mode off)
//! Idle -> DraggingConnection   (press on a node anchor)
//! Idle -> ConnectPending       (press on a node, connect mode on)
//! Idle -> EditingLabel         (double press on a node)
//!
//! DraggingNode -> Idle         (release - records one checkpoint)
//! DraggingConnection -> Idle   (release - connects if over another node)
//! ConnectPending -> Idle       (press on another node connects, same node cancels)
//! EditingLabel -> Idle         (confirm, cancel or focus loss)
//! ```

use crate::types::{NodeId, Point};

/// Current gesture. At most one is active at any time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving a node with the pointer
    DraggingNode {
        node: NodeId,
        /// Offset from the node's top-left corner to the press point
        grab_offset: Point,
    },

    /// Dragging a connection out of a node's anchor
    DraggingConnection {
        from: NodeId,
        /// Free-floating preview endpoint in canvas coordinates
        cursor: Point,
    },

    /// Connect mode: first node picked, waiting for the second click
    ConnectPending { from: NodeId },

    /// Inline label edit in progress
    EditingLabel {
        node: NodeId,
        /// Text currently in the editor
        draft: String,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while the pointer is captured by a drag
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingNode { .. } | Self::DraggingConnection { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::EditingLabel { .. })
    }

    /// Get the node being moved, if any
    pub fn dragged_node(&self) -> Option<NodeId> {
        match self {
            Self::DraggingNode { node, .. } => Some(*node),
            _ => None,
        }
    }

    /// Source node of a connection being formed by drag or by connect mode
    pub fn pending_from(&self) -> Option<NodeId> {
        match self {
            Self::DraggingConnection { from, .. } | Self::ConnectPending { from } => Some(*from),
            _ => None,
        }
    }

    /// Get the node whose label is being edited
    pub fn editing_node(&self) -> Option<NodeId> {
        match self {
            Self::EditingLabel { node, .. } => Some(*node),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::EditingLabel { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Reset to Idle, returning the state that was active
    pub fn take(&mut self) -> GestureState {
        std::mem::take(self)
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
