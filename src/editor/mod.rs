//! Editor session - the single owned object holding one diagram's editing
//! state.
//!
//! The host application constructs an `EditorSession`, feeds it input events
//! and reads back what to draw. Submodules:
//! - `lifecycle` - Construction and settings-driven setup
//! - `actions` - Commands invoked from buttons, menus and shortcuts
//!
//! Pointer and keyboard handlers live in `crate::input` as further
//! `impl EditorSession` blocks.

mod actions;
mod lifecycle;

use crate::history::History;
use crate::input::{GestureState, Viewport};
use crate::scene::Scene;
use crate::settings::EditorSettings;
use crate::types::{Anchor, NodeId, Point};

/// Values shown in the side panel for the selected node.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPanel {
    /// Contents of the label field
    pub label: String,
    /// Read-only kind readout
    pub type_name: &'static str,
    /// Whether the label field accepts input
    pub enabled: bool,
}

impl Default for PropertyPanel {
    fn default() -> Self {
        Self {
            label: String::new(),
            type_name: "None",
            enabled: false,
        }
    }
}

/// Line drawn from a connection's source to the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPreview {
    pub from: NodeId,
    /// Center of the source node
    pub start: Point,
    /// Pointer position
    pub end: Point,
}

/// Interaction state layered over the scene
#[derive(Debug, Default)]
pub struct CanvasState {
    /// Gesture state machine
    pub gesture: GestureState,
    /// Single selected node
    pub selected: Option<NodeId>,
    /// Whether plain clicks form connections
    pub connect_mode: bool,
    /// Anchor nearest the pointer while hovering a node
    pub hovered_anchor: Option<(NodeId, Anchor)>,
}

pub struct EditorSession {
    pub(crate) scene: Scene,
    pub(crate) history: History,
    pub(crate) canvas: CanvasState,
    pub(crate) panel: PropertyPanel,
    pub(crate) viewport: Viewport,
    pub(crate) settings: EditorSettings,
    /// Set whenever something visible changed; drained by the adapter
    pub(crate) redraw: bool,
}

impl EditorSession {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn gesture(&self) -> &GestureState {
        &self.canvas.gesture
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.canvas.selected
    }

    pub fn connect_mode(&self) -> bool {
        self.canvas.connect_mode
    }

    pub fn hovered_anchor(&self) -> Option<(NodeId, Anchor)> {
        self.canvas.hovered_anchor
    }

    pub fn panel(&self) -> &PropertyPanel {
        &self.panel
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether the empty-canvas hint should be shown
    pub fn show_canvas_hint(&self) -> bool {
        self.scene.is_empty()
    }

    /// Preview line while a connection is being dragged out of an anchor
    pub fn connection_preview(&self) -> Option<ConnectionPreview> {
        let GestureState::DraggingConnection { from, cursor } = self.canvas.gesture else {
            return None;
        };
        let source = self.scene.node(from)?;
        Some(ConnectionPreview {
            from,
            start: source.center(),
            end: cursor,
        })
    }

    /// Returns true once after any visible change, then resets.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    pub(crate) fn notify(&mut self) {
        self.redraw = true;
    }

    /// Checkpoint the scene; duplicate states are dropped by the history.
    pub(crate) fn record_history(&mut self) -> bool {
        self.history.record(&self.scene)
    }

    /// Change the single selection and mirror it into the side panel.
    pub fn select(&mut self, id: Option<NodeId>) {
        self.canvas.selected = id.filter(|id| self.scene.contains(*id));
        self.refresh_panel();
        self.notify();
    }

    pub(crate) fn refresh_panel(&mut self) {
        self.panel = match self.canvas.selected.and_then(|id| self.scene.node(id)) {
            Some(node) => PropertyPanel {
                label: node.label.clone(),
                type_name: node.kind.default_label(),
                enabled: true,
            },
            None => PropertyPanel::default(),
        };
    }
}
