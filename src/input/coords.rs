//! Coordinate conversion between the host's client space and the canvas.
//!
//! The presentation adapter reports pointer positions in client coordinates.
//! The viewport knows where the canvas sits inside the client area and how
//! large it is.

use crate::types::{Point, Size};

/// Placement of the canvas within the client area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client position of the canvas's top-left corner
    pub origin: Point,
    pub size: Size,
}

impl Viewport {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Convert client position to canvas position
    #[inline]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        client - self.origin
    }

    /// Convert canvas position to client position
    #[inline]
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        canvas + self.origin
    }

    /// Whether a client position falls inside the canvas, edges included
    pub fn contains_client(&self, client: Point) -> bool {
        let local = self.client_to_canvas(client);
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.width && local.y <= self.size.height
    }
}
