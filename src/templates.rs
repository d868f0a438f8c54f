//! Starter diagrams that replace the canvas contents in one step.
//!
//! A template lists elements under local keys and connections as pairs of
//! those keys. Loading resolves every key to the id the scene assigns, so
//! nothing in the loaded scene refers to a local key.

use crate::error::EditorResult;
use crate::scene::Scene;
use crate::types::{NodeId, NodeKind};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    /// Template-local key used by `connections`
    pub key: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub label: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub elements: Vec<TemplateElement>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
}

impl Template {
    pub fn from_json(json: &str) -> EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Clear the scene, then create every element and connect every pair.
    ///
    /// Pairs naming an unknown key are skipped. Returns the key to id map.
    pub fn load_into(&self, scene: &mut Scene) -> HashMap<String, NodeId> {
        scene.clear();

        let ids: HashMap<String, NodeId> = self
            .elements
            .iter()
            .map(|e| {
                let id = scene.create_node(e.kind, e.x, e.y, Some(&e.label));
                (e.key.clone(), id)
            })
            .collect();

        for (from, to) in &self.connections {
            match (ids.get(from), ids.get(to)) {
                (Some(&a), Some(&b)) => {
                    scene.connect(a, b);
                }
                _ => warn!(template = %self.name, from = %from, to = %to, "connection references unknown key"),
            }
        }

        debug!(
            template = %self.name,
            nodes = scene.node_count(),
            connections = scene.connection_count(),
            "template loaded"
        );
        ids
    }
}

type ElementRow = (&'static str, NodeKind, &'static str, f32, f32);

fn build(name: &str, elements: &[ElementRow], connections: &[(&str, &str)]) -> Template {
    Template {
        name: name.to_string(),
        elements: elements
            .iter()
            .map(|&(key, kind, label, x, y)| TemplateElement {
                key: key.to_string(),
                kind,
                label: label.to_string(),
                x,
                y,
            })
            .collect(),
        connections: connections
            .iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    }
}

static BUILTIN_TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    use NodeKind::*;
    vec![
        build(
            "library",
            &[
                ("Book", Entity, "Book", 120.0, 140.0),
                ("Author", Entity, "Author", 420.0, 140.0),
                ("Writes", Relationship, "Writes", 280.0, 120.0),
                ("ISBN", KeyAttribute, "ISBN", 80.0, 40.0),
                ("Title", Attribute, "Title", 160.0, 40.0),
                ("Borrower", Entity, "Borrower", 120.0, 360.0),
                ("Loans", Relationship, "Loans", 280.0, 340.0),
                ("LoanDate", Attribute, "Loan Date", 380.0, 280.0),
                ("MemberID", KeyAttribute, "Member ID", 80.0, 280.0),
            ],
            &[
                ("Book", "Writes"),
                ("Author", "Writes"),
                ("Book", "ISBN"),
                ("Book", "Title"),
                ("Borrower", "Loans"),
                ("Book", "Loans"),
                ("Loans", "LoanDate"),
                ("Borrower", "MemberID"),
            ],
        ),
        build(
            "ecommerce",
            &[
                ("Customer", Entity, "Customer", 110.0, 120.0),
                ("Order", Entity, "Order", 380.0, 120.0),
                ("Places", Relationship, "Places", 250.0, 90.0),
                ("Product", Entity, "Product", 380.0, 360.0),
                ("OrderLine", AssociativeEntity, "Order Line", 250.0, 300.0),
                ("Quantity", Attribute, "Quantity", 140.0, 280.0),
                ("Price", Attribute, "Price", 500.0, 300.0),
                ("OrderID", KeyAttribute, "Order ID", 420.0, 20.0),
                ("Email", Attribute, "Email", 60.0, 20.0),
            ],
            &[
                ("Customer", "Places"),
                ("Order", "Places"),
                ("Order", "OrderID"),
                ("Customer", "Email"),
                ("Order", "OrderLine"),
                ("Product", "OrderLine"),
                ("OrderLine", "Quantity"),
                ("OrderLine", "Price"),
            ],
        ),
        build(
            "university",
            &[
                ("Student", Entity, "Student", 110.0, 120.0),
                ("Course", Entity, "Course", 420.0, 120.0),
                ("Enrolls", Relationship, "Enrolls", 280.0, 100.0),
                ("Instructor", Entity, "Instructor", 420.0, 340.0),
                ("Teaches", Relationship, "Teaches", 300.0, 300.0),
                ("Grade", DerivedAttribute, "Grade", 140.0, 260.0),
                ("StudentID", KeyAttribute, "Student ID", 70.0, 20.0),
                ("CourseCode", KeyAttribute, "Course Code", 420.0, 20.0),
            ],
            &[
                ("Student", "Enrolls"),
                ("Course", "Enrolls"),
                ("Enrolls", "Grade"),
                ("Student", "StudentID"),
                ("Course", "CourseCode"),
                ("Instructor", "Teaches"),
                ("Course", "Teaches"),
            ],
        ),
    ]
});

pub fn builtin_templates() -> &'static [Template] {
    &BUILTIN_TEMPLATES
}

pub fn find_template(name: &str) -> Option<&'static Template> {
    BUILTIN_TEMPLATES.iter().find(|t| t.name == name)
}
