//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSessionBuilder` - Builder for sessions pre-populated with nodes
//! - Gesture shorthands like `press()`, `drag()`, `double_press()`
//! - Common assertions

use erdraft::input::{InputEvent, Key, KeyEvent, PointerEvent};
use erdraft::settings::EditorSettings;
use erdraft::templates::{Template, TemplateElement};
use erdraft::{EditorSession, NodeId, NodeKind, Scene};

// ============================================================================
// TestSessionBuilder
// ============================================================================

/// Builder for sessions whose nodes are placed through a single template
/// load, so the builder leaves exactly one checkpoint above the baseline.
///
/// # Example
/// ```ignore
/// let (session, ids) = TestSessionBuilder::new()
///     .with_node(NodeKind::Entity, "Book", (100.0, 100.0))
///     .with_node(NodeKind::Entity, "Author", (400.0, 100.0))
///     .with_connection(0, 1)
///     .build();
/// ```
pub struct TestSessionBuilder {
    settings: EditorSettings,
    elements: Vec<TemplateElement>,
    connections: Vec<(String, String)>,
}

impl Default for TestSessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSessionBuilder {
    pub fn new() -> Self {
        Self {
            settings: EditorSettings::default(),
            elements: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: EditorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_node(mut self, kind: NodeKind, label: &str, pos: (f32, f32)) -> Self {
        let key = format!("n{}", self.elements.len());
        self.elements.push(TemplateElement {
            key,
            kind,
            label: label.to_string(),
            x: pos.0,
            y: pos.1,
        });
        self
    }

    /// Connect the `a`-th and `b`-th nodes added so far.
    pub fn with_connection(mut self, a: usize, b: usize) -> Self {
        self.connections.push((format!("n{a}"), format!("n{b}")));
        self
    }

    /// Returns the session and node ids in the order nodes were added.
    pub fn build(self) -> (EditorSession, Vec<NodeId>) {
        let mut session = EditorSession::new(self.settings);
        if self.elements.is_empty() {
            return (session, Vec::new());
        }
        let template = Template {
            name: "test".to_string(),
            elements: self.elements,
            connections: self.connections,
        };
        session.load_custom_template(&template);
        let ids = session.scene().nodes().map(|n| n.id).collect();
        session.take_redraw();
        (session, ids)
    }
}

/// Book at (100, 100) and Author at (400, 100), both entities, unconnected.
///
/// Book spans x 100..240, y 100..156; Author spans x 400..540, y 100..156.
pub fn book_and_author() -> (EditorSession, NodeId, NodeId) {
    let (session, ids) = TestSessionBuilder::new()
        .with_node(NodeKind::Entity, "Book", (100.0, 100.0))
        .with_node(NodeKind::Entity, "Author", (400.0, 100.0))
        .build();
    (session, ids[0], ids[1])
}

// ============================================================================
// Gesture shorthands (client coordinates)
// ============================================================================

pub fn press(session: &mut EditorSession, x: f32, y: f32) {
    session.dispatch(&InputEvent::PointerDown(PointerEvent::at(x, y)));
}

pub fn move_to(session: &mut EditorSession, x: f32, y: f32) {
    session.dispatch(&InputEvent::PointerMove(PointerEvent::at(x, y)));
}

pub fn release(session: &mut EditorSession, x: f32, y: f32) {
    session.dispatch(&InputEvent::PointerUp(PointerEvent::at(x, y)));
}

/// Press at `from`, move in two steps to `to`, release at `to`.
pub fn drag(session: &mut EditorSession, from: (f32, f32), to: (f32, f32)) {
    press(session, from.0, from.1);
    let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    move_to(session, mid.0, mid.1);
    move_to(session, to.0, to.1);
    release(session, to.0, to.1);
}

/// Press and release in place.
pub fn click(session: &mut EditorSession, x: f32, y: f32) {
    press(session, x, y);
    release(session, x, y);
}

pub fn double_press(session: &mut EditorSession, x: f32, y: f32) {
    session.dispatch(&InputEvent::DoublePress(PointerEvent::at(x, y)));
}

pub fn type_text(session: &mut EditorSession, text: &str) {
    session.dispatch(&InputEvent::TextInput {
        text: text.to_string(),
    });
}

pub fn key(session: &mut EditorSession, key: Key) {
    session.dispatch(&InputEvent::Key(KeyEvent::plain(key)));
}

pub fn shortcut(session: &mut EditorSession, key: Key) {
    session.dispatch(&InputEvent::Key(KeyEvent::command(key)));
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_counts(session: &EditorSession, nodes: usize, connections: usize) {
    assert_eq!(session.scene().node_count(), nodes, "node count");
    assert_eq!(session.scene().connection_count(), connections, "connection count");
}

/// No connection may refer to a node missing from the scene.
pub fn assert_referential_integrity(scene: &Scene) {
    for connection in scene.connections() {
        assert!(scene.contains(connection.from), "dangling from: {connection:?}");
        assert!(scene.contains(connection.to), "dangling to: {connection:?}");
        assert_ne!(connection.from, connection.to, "self connection: {connection:?}");
    }
}

/// At most one connection per unordered pair.
pub fn assert_unique_pairs(scene: &Scene) {
    let connections = scene.connections();
    for (i, a) in connections.iter().enumerate() {
        for b in &connections[i + 1..] {
            assert!(!a.joins(b.from, b.to), "duplicate pair: {a:?} / {b:?}");
        }
    }
}

pub fn label_of(session: &EditorSession, id: NodeId) -> String {
    session
        .scene()
        .node(id)
        .map(|n| n.label.clone())
        .unwrap_or_default()
}
