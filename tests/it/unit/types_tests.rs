//! Node kind, anchor and identifier tests.

use erdraft::types::{Anchor, Node};
use erdraft::{EditorError, NodeId, NodeKind, Point};

#[test]
fn test_node_kind_parses_kebab_case_names() {
    for kind in NodeKind::ALL {
        assert_eq!(kind.as_str().parse::<NodeKind>().unwrap(), kind);
    }
    assert_eq!(
        "identifying-relationship".parse::<NodeKind>().unwrap(),
        NodeKind::IdentifyingRelationship
    );
}

#[test]
fn test_unknown_node_kind_is_error() {
    let err = "table".parse::<NodeKind>().unwrap_err();
    assert!(matches!(err, EditorError::UnknownNodeKind(ref name) if name == "table"));
    assert_eq!(err.to_string(), "Unknown node kind: table");
}

#[test]
fn test_node_kind_serde_matches_as_str() {
    for kind in NodeKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind.as_str()));
        let back: NodeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
    }
}

#[test]
fn test_ids_display_with_prefix() {
    assert_eq!(NodeId(3).to_string(), "node-3");
    assert_eq!(erdraft::ConnectionId(12).to_string(), "connection-12");
}

#[test]
fn test_anchor_points_sit_on_edge_midpoints() {
    let node = Node {
        id: NodeId(1),
        kind: NodeKind::Entity,
        label: "Book".to_string(),
        position: Point::new(100.0, 100.0),
    };

    assert_eq!(node.center(), Point::new(170.0, 128.0));
    assert_eq!(node.anchor_point(Anchor::Top), Point::new(170.0, 100.0));
    assert_eq!(node.anchor_point(Anchor::Bottom), Point::new(170.0, 156.0));
    assert_eq!(node.anchor_point(Anchor::Left), Point::new(100.0, 128.0));
    assert_eq!(node.anchor_point(Anchor::Right), Point::new(240.0, 128.0));

    let (anchor, distance) = node.nearest_anchor(Point::new(236.0, 131.0));
    assert_eq!(anchor, Anchor::Right);
    assert_eq!(distance, 5.0);
}

#[test]
fn test_default_label_detection() {
    let mut node = Node {
        id: NodeId(1),
        kind: NodeKind::MultivaluedAttribute,
        label: "Multivalued Attribute".to_string(),
        position: Point::default(),
    };
    assert!(node.has_default_label());

    node.label = "Phones".to_string();
    assert!(!node.has_default_label());
}
