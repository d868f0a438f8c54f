//! Session lifecycle - construction from settings.

use super::{CanvasState, EditorSession, PropertyPanel};
use crate::history::History;
use crate::input::Viewport;
use crate::scene::Scene;
use crate::settings::EditorSettings;
use crate::types::{Point, Size};
use tracing::debug;

impl EditorSession {
    /// Create a session with an empty scene whose state is the history
    /// baseline.
    pub fn new(settings: EditorSettings) -> Self {
        let canvas_size = Size::new(settings.canvas_width, settings.canvas_height);
        let scene = Scene::new(canvas_size);
        let history = History::new(scene.snapshot(), settings.history_capacity);

        debug!(
            width = canvas_size.width,
            height = canvas_size.height,
            history_capacity = history.capacity(),
            "editor session created"
        );

        Self {
            scene,
            history,
            canvas: CanvasState::default(),
            panel: PropertyPanel::default(),
            viewport: Viewport::new(Point::default(), canvas_size),
            settings,
            redraw: true,
        }
    }

    /// Move the canvas within the client area. Pointer events are
    /// interpreted relative to this origin.
    pub fn set_canvas_origin(&mut self, origin: Point) {
        self.viewport.origin = origin;
    }

    /// Resize the canvas. Nodes are not reflowed; the new bounds apply to
    /// the next move or creation.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        self.viewport.size = size;
        self.scene.set_canvas_size(size);
        self.notify();
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}
