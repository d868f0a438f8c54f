//! Editing core for an entity-relationship diagram canvas.
//!
//! Nodes (entities, attributes, relationships, ...) are placed on a canvas,
//! joined by undirected connections and edited through pointer gestures,
//! with linear undo/redo over snapshots of the scene.
//!
//! - [`scene`] - authoritative nodes and connections
//! - [`history`] - bounded undo/redo stacks of snapshots
//! - [`input`] - gesture state machine driven by raw pointer/key events
//! - [`editor`] - the owned session tying the three together
//! - [`templates`] - starter diagrams
//!
//! Rendering is left to the host: it feeds events into an
//! [`EditorSession`] and redraws from [`EditorSession::scene`] whenever
//! [`EditorSession::take_redraw`] says so.

pub mod constants;
pub mod editor;
pub mod error;
pub mod history;
pub mod input;
pub mod logging;
pub mod scene;
pub mod settings;
pub mod spatial_index;
pub mod templates;
pub mod types;

pub use editor::{ConnectionPreview, EditorSession, PropertyPanel};
pub use error::{EditorError, EditorResult};
pub use scene::{Scene, Snapshot};
pub use types::{Connection, ConnectionId, Node, NodeId, NodeKind, Point};
