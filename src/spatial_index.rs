//! Hit testing for the canvas.
//!
//! Node rectangles live in an R-tree. A pointer position resolves to a node
//! anchor, a node body or the background. Anchors sit on the rectangle's
//! edges and reach `anchor_radius` beyond them, so lookups search an
//! envelope widened by that radius and then walk the candidates from the
//! topmost node down.

use crate::types::{Anchor, NodeId, Point, Size};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// What a canvas position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Background,
    Node(NodeId),
    Anchor(NodeId, Anchor),
}

impl HitTarget {
    pub fn node(self) -> Option<NodeId> {
        match self {
            HitTarget::Background => None,
            HitTarget::Node(id) | HitTarget::Anchor(id, _) => Some(id),
        }
    }
}

/// Placed rectangle of one node.
#[derive(Debug, Clone, Copy)]
pub struct NodeBounds {
    pub node: NodeId,
    pub origin: Point,
    pub size: Size,
}

impl NodeBounds {
    fn far_corner(&self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        let far = self.far_corner();
        (self.origin.x..=far.x).contains(&point.x) && (self.origin.y..=far.y).contains(&point.y)
    }

    /// The anchor closest to `point`, if it is within `radius`.
    pub fn anchor_within(&self, point: Point, radius: f32) -> Option<Anchor> {
        Anchor::ALL
            .into_iter()
            .map(|anchor| (anchor, anchor.on_rect(self.origin, self.size).distance_to(point)))
            .filter(|&(_, distance)| distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(anchor, _)| anchor)
    }
}

impl RTreeObject for NodeBounds {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let far = self.far_corner();
        AABB::from_corners([self.origin.x, self.origin.y], [far.x, far.y])
    }
}

// Removal looks entries up by node only.
impl PartialEq for NodeBounds {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

/// Node rectangles keyed by id, searchable by position.
pub struct SpatialIndex {
    tree: RTree<NodeBounds>,
    by_node: HashMap<NodeId, NodeBounds>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            by_node: HashMap::new(),
        }
    }

    /// Record where a node now sits, replacing its previous rectangle.
    pub fn place(&mut self, node: NodeId, origin: Point, size: Size) {
        self.remove(node);
        let bounds = NodeBounds { node, origin, size };
        self.tree.insert(bounds);
        self.by_node.insert(node, bounds);
    }

    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.by_node.remove(&node) {
            Some(bounds) => self.tree.remove(&bounds).is_some(),
            None => false,
        }
    }

    pub fn bounds(&self, node: NodeId) -> Option<&NodeBounds> {
        self.by_node.get(&node)
    }

    /// Nodes whose rectangle, widened by `reach` on every side, touches
    /// `point`. Topmost (newest) first.
    fn candidates(&self, point: Point, reach: f32) -> Vec<&NodeBounds> {
        let reach = reach.max(0.0);
        let area = AABB::from_corners(
            [point.x - reach, point.y - reach],
            [point.x + reach, point.y + reach],
        );
        let mut found: Vec<&NodeBounds> = self.tree.locate_in_envelope_intersecting(&area).collect();
        found.sort_unstable_by(|a, b| b.node.cmp(&a.node));
        found
    }

    /// Topmost node whose body contains `point`; anchors are ignored.
    pub fn body_at(&self, point: Point) -> Option<NodeId> {
        self.candidates(point, 0.0)
            .into_iter()
            .find(|bounds| bounds.contains(point))
            .map(|bounds| bounds.node)
    }

    /// Resolve a press. Each node's anchors are drawn over its body, and a
    /// newer node covers older ones, anchors included.
    pub fn hit(&self, point: Point, anchor_radius: f32) -> HitTarget {
        for bounds in self.candidates(point, anchor_radius) {
            if let Some(anchor) = bounds.anchor_within(point, anchor_radius) {
                return HitTarget::Anchor(bounds.node, anchor);
            }
            if bounds.contains(point) {
                return HitTarget::Node(bounds.node);
            }
        }
        HitTarget::Background
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }

    /// Replace the whole index, e.g. after a snapshot restore.
    pub fn rebuild<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = NodeBounds>,
    {
        self.by_node = nodes.into_iter().map(|b| (b.node, b)).collect();
        self.tree = RTree::bulk_load(self.by_node.values().copied().collect());
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.by_node.clear();
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("nodes", &self.by_node.len())
            .finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
