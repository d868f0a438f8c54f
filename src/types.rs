//! Core types for the diagram scene.
//!
//! This module defines the value types shared by the scene store, the
//! history manager and the gesture controller: geometry, identifiers and the
//! closed set of ER node kinds.

use crate::constants::{ATTRIBUTE_SIZE, ENTITY_SIZE, ISA_SIZE, RELATIONSHIP_SIZE};
use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Geometry
// ============================================================================

/// A position in canvas (or client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Width and height of a node's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a node, stable for the node's lifetime.
///
/// Ids grow monotonically, so ordering by id is creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Identifier of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection-{}", self.0)
    }
}

// ============================================================================
// Node Kinds
// ============================================================================

/// The closed set of ER constructs a node can represent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Entity,
    WeakEntity,
    Relationship,
    IdentifyingRelationship,
    Attribute,
    KeyAttribute,
    MultivaluedAttribute,
    DerivedAttribute,
    Isa,
    AssociativeEntity,
}

impl NodeKind {
    /// Every kind, in palette order.
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Entity,
        NodeKind::WeakEntity,
        NodeKind::Relationship,
        NodeKind::IdentifyingRelationship,
        NodeKind::Attribute,
        NodeKind::KeyAttribute,
        NodeKind::MultivaluedAttribute,
        NodeKind::DerivedAttribute,
        NodeKind::Isa,
        NodeKind::AssociativeEntity,
    ];

    /// Label used when a node has no text of its own. Doubles as the
    /// read-only type readout shown for the selected node.
    pub fn default_label(self) -> &'static str {
        match self {
            NodeKind::Entity => "Entity",
            NodeKind::WeakEntity => "Weak Entity",
            NodeKind::Relationship => "Relationship",
            NodeKind::IdentifyingRelationship => "Identifying Relationship",
            NodeKind::Attribute => "Attribute",
            NodeKind::KeyAttribute => "Key Attribute",
            NodeKind::MultivaluedAttribute => "Multivalued Attribute",
            NodeKind::DerivedAttribute => "Derived Attribute",
            NodeKind::Isa => "ISA",
            NodeKind::AssociativeEntity => "Associative Entity",
        }
    }

    /// Kebab-case name, as used by templates and the palette.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Entity => "entity",
            NodeKind::WeakEntity => "weak-entity",
            NodeKind::Relationship => "relationship",
            NodeKind::IdentifyingRelationship => "identifying-relationship",
            NodeKind::Attribute => "attribute",
            NodeKind::KeyAttribute => "key-attribute",
            NodeKind::MultivaluedAttribute => "multivalued-attribute",
            NodeKind::DerivedAttribute => "derived-attribute",
            NodeKind::Isa => "isa",
            NodeKind::AssociativeEntity => "associative-entity",
        }
    }

    /// Bounding box of the shape drawn for this kind.
    pub fn size(self) -> Size {
        match self {
            NodeKind::Entity | NodeKind::WeakEntity | NodeKind::AssociativeEntity => {
                ENTITY_SIZE.into()
            }
            NodeKind::Relationship | NodeKind::IdentifyingRelationship => RELATIONSHIP_SIZE.into(),
            NodeKind::Attribute
            | NodeKind::KeyAttribute
            | NodeKind::MultivaluedAttribute
            | NodeKind::DerivedAttribute => ATTRIBUTE_SIZE.into(),
            NodeKind::Isa => ISA_SIZE.into(),
        }
    }

    /// Resolve a label: blank text falls back to the kind's default.
    pub fn label_or_default(self, text: &str) -> String {
        if text.trim().is_empty() {
            self.default_label().to_string()
        } else {
            text.to_string()
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownNodeKind(s.to_string()))
    }
}

// ============================================================================
// Scene Elements
// ============================================================================

/// A placed diagram element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    /// Top-left corner in canvas coordinates
    pub position: Point,
}

impl Node {
    pub fn size(&self) -> Size {
        self.kind.size()
    }

    pub fn center(&self) -> Point {
        let size = self.size();
        Point::new(
            self.position.x + size.width / 2.0,
            self.position.y + size.height / 2.0,
        )
    }

    /// Whether the label still shows the kind's placeholder text.
    pub fn has_default_label(&self) -> bool {
        self.label == self.kind.default_label()
    }

    /// Canvas position of one of the node's connection anchors.
    pub fn anchor_point(&self, anchor: Anchor) -> Point {
        anchor.on_rect(self.position, self.size())
    }

    /// Nearest anchor to `point` and its distance.
    pub fn nearest_anchor(&self, point: Point) -> (Anchor, f32) {
        Anchor::ALL
            .into_iter()
            .map(|anchor| (anchor, self.anchor_point(anchor).distance_to(point)))
            .fold((Anchor::Top, f32::INFINITY), |best, candidate| {
                if candidate.1 < best.1 { candidate } else { best }
            })
    }
}

/// Edge midpoints from which a connection can be dragged out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Top, Anchor::Bottom, Anchor::Left, Anchor::Right];

    /// Midpoint of this edge of the rectangle at `origin` with `size`.
    pub fn on_rect(self, origin: Point, size: Size) -> Point {
        let Size { width, height } = size;
        let Point { x, y } = origin;
        match self {
            Anchor::Top => Point::new(x + width / 2.0, y),
            Anchor::Bottom => Point::new(x + width / 2.0, y + height),
            Anchor::Left => Point::new(x, y + height / 2.0),
            Anchor::Right => Point::new(x + width, y + height / 2.0),
        }
    }
}

/// An undirected edge between two nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NodeId,
    pub to: NodeId,
}

impl Connection {
    /// True if this connection joins `a` and `b`, in either direction.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}
