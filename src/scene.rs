//! Scene store - the authoritative set of nodes and connections.
//!
//! The scene is pure data: no rendering, no input. Every mutation keeps the
//! two structural invariants intact:
//!
//! - no connection references a node that is not in the scene
//! - at most one connection exists per unordered pair of distinct nodes
//!
//! Unknown ids and invariant-violating requests are silent no-ops.

use crate::constants::{CANVAS_MARGIN, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::spatial_index::{HitTarget, NodeBounds, SpatialIndex};
use crate::types::{Connection, ConnectionId, Node, NodeId, NodeKind, Point, Size};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Immutable point-in-time copy of a scene.
///
/// Nodes are ordered by id, connections keep their scene order, so two
/// snapshots of structurally equal scenes compare equal.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
}

impl Snapshot {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }
}

/// Nodes keyed by id plus an ordered list of connections.
#[derive(Debug)]
pub struct Scene {
    nodes: BTreeMap<NodeId, Node>,
    connections: Vec<Connection>,
    canvas: Size,
    next_node_id: u64,
    next_connection_id: u64,
    index: SpatialIndex,
}

impl Scene {
    pub fn new(canvas: Size) -> Self {
        Self {
            nodes: BTreeMap::new(),
            connections: Vec::new(),
            canvas,
            next_node_id: 1,
            next_connection_id: 1,
            index: SpatialIndex::new(),
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Nodes in creation order, which is also drawing order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Whether a connection joins `a` and `b` in either direction.
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.connections.iter().any(|c| c.joins(a, b))
    }

    /// Topmost node whose rectangle contains `point`.
    pub fn node_at(&self, point: Point) -> Option<NodeId> {
        self.index.body_at(point)
    }

    /// Resolve `point` to an anchor, a node body or the background.
    /// Anchors reach `anchor_radius` past their node's edges.
    pub fn hit_test(&self, point: Point, anchor_radius: f32) -> HitTarget {
        self.index.hit(point, anchor_radius)
    }

    /// Clamp a top-left corner so a node of `kind` stays inside the canvas
    /// with `CANVAS_MARGIN` to spare. The lower bound wins on canvases too
    /// small to fit the node.
    pub fn clamp_position(&self, kind: NodeKind, x: f32, y: f32) -> Point {
        let size = kind.size();
        let max_x = self.canvas.width - size.width - CANVAS_MARGIN;
        let max_y = self.canvas.height - size.height - CANVAS_MARGIN;
        Point::new(
            x.min(max_x).max(CANVAS_MARGIN),
            y.min(max_y).max(CANVAS_MARGIN),
        )
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Place a new node. Blank labels fall back to the kind's default.
    pub fn create_node(&mut self, kind: NodeKind, x: f32, y: f32, label: Option<&str>) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let node = Node {
            id,
            kind,
            label: kind.label_or_default(label.unwrap_or_default()),
            position: self.clamp_position(kind, x, y),
        };
        self.index.place(id, node.position, node.size());
        debug!(node = %id, kind = %kind, label = %node.label, "node created");
        self.nodes.insert(id, node);
        id
    }

    /// Move a node, clamped to the canvas. Returns false for unknown ids.
    pub fn move_node(&mut self, id: NodeId, x: f32, y: f32) -> bool {
        let Some(kind) = self.nodes.get(&id).map(|n| n.kind) else {
            return false;
        };
        let position = self.clamp_position(kind, x, y);
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
            self.index.place(id, position, kind.size());
            trace!(node = %id, x = position.x, y = position.y, "node moved");
        }
        true
    }

    /// Set a node's label; blank text restores the kind's default.
    /// Returns true if the stored label changed.
    pub fn set_label(&mut self, id: NodeId, text: &str) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        let label = node.kind.label_or_default(text);
        if node.label == label {
            return false;
        }
        debug!(node = %id, label = %label, "label changed");
        node.label = label;
        true
    }

    /// Remove a node together with every connection touching it.
    pub fn delete_node(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_none() {
            return false;
        }
        self.index.remove(id);
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        debug!(
            node = %id,
            dropped_connections = before - self.connections.len(),
            "node deleted"
        );
        true
    }

    /// Connect two distinct, existing, not-yet-connected nodes.
    ///
    /// Returns `None` without touching the scene for self-connections,
    /// unknown ids and pairs that are already connected in either direction.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Option<ConnectionId> {
        if a == b || !self.contains(a) || !self.contains(b) || self.are_connected(a, b) {
            return None;
        }
        let id = ConnectionId(self.next_connection_id);
        self.next_connection_id += 1;
        self.connections.push(Connection { id, from: a, to: b });
        debug!(connection = %id, from = %a, to = %b, "connection created");
        Some(id)
    }

    /// Copy a node's kind and label to a new node offset from the original.
    pub fn duplicate_node(&mut self, id: NodeId, offset: f32) -> Option<NodeId> {
        let node = self.nodes.get(&id)?;
        let (kind, label) = (node.kind, node.label.clone());
        let (x, y) = (node.position.x + offset, node.position.y + offset);
        Some(self.create_node(kind, x, y, Some(&label)))
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.connections.clear();
        self.index.clear();
        debug!("scene cleared");
    }

    /// Change the canvas bounds used by future clamps. Existing nodes keep
    /// their positions.
    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.nodes.values().cloned().collect(),
            connections: self.connections.clone(),
        }
    }

    /// Replace the whole scene with a snapshot's contents.
    ///
    /// Ids are preserved; the id counters only move forward so ids handed
    /// out after a restore never collide with restored ones.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.nodes = snapshot
            .nodes
            .iter()
            .map(|node| (node.id, node.clone()))
            .collect();
        self.connections = snapshot.connections.clone();

        if let Some(max) = self.nodes.keys().next_back() {
            self.next_node_id = self.next_node_id.max(max.0 + 1);
        }
        if let Some(max) = self.connections.iter().map(|c| c.id.0).max() {
            self.next_connection_id = self.next_connection_id.max(max + 1);
        }

        self.index.rebuild(self.nodes.values().map(|n| NodeBounds {
            node: n.id,
            origin: n.position,
            size: n.size(),
        }));
        debug!(
            nodes = self.nodes.len(),
            connections = self.connections.len(),
            "scene restored"
        );
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Size::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT))
    }
}
