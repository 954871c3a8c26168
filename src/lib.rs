//! Linkgraph
//!
//! An embeddable linked-data graph model: nodes whose relations are IRIs,
//! values that are nested nodes, identified nodes or literals, a compact path
//! language to select values, and a structural pattern matcher underneath.
//!
//! # Modules
//!
//! - [`graph`]: node model, literals, matching and result bags
//! - [`query`]: graph path parsing and evaluation
//! - [`rdf`]: vocabulary, namespace prefixes and conversion to RDF graphs
//!
//! ## Example Usage
//!
//! ```rust
//! use linkgraph::graph::{Node, NamedNode};
//! use linkgraph::query::GraphPath;
//! use linkgraph::rdf::NamespaceManager;
//!
//! const MODS: &str = "http://www.loc.gov/mods/v3#";
//!
//! let namespaces = NamespaceManager::new().with_prefix("mods", MODS);
//!
//! // A MODS name with a role and a display form
//! let name = Node::typed(&format!("{MODS}name"))
//!     .unwrap()
//!     .with(format!("{MODS}type"), "personal")
//!     .with_item(
//!         Node::typed(&format!("{MODS}role"))
//!             .unwrap()
//!             .with_item(Node::typed(&format!("{MODS}roleTerm")).unwrap().with_item("aut")),
//!     )
//!     .with_item(Node::typed(&format!("{MODS}displayForm")).unwrap().with_item("Pineau, Severin"))
//!     .with_item(NamedNode::new("http://d-nb.info/gnd/118594893").unwrap());
//!
//! // Query the display form of authors
//! let path = GraphPath::parse(
//!     "* [mods:type personal, * [rdf:type mods:role, * [rdf:type mods:roleTerm, rdf:_1 aut]]] \
//!      * [rdf:type mods:displayForm] rdf:_1",
//!     &namespaces,
//! )
//! .unwrap();
//!
//! assert_eq!(name.find(&path).join_strings(" ; ", true), "Pineau, Severin");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod graph;
pub mod query;
pub mod rdf;

// Re-export main types for convenience
pub use graph::{
    ErrorKind, GraphError, GraphResult, IdentifiableNode, IdentifiableRef, LangString, Literal,
    NamedNode, Node, NodeReference, NodeType, ObjectType, ResultSet,
};

pub use query::{parse_graph_path, GraphPath, LocationStep, ParseError};

pub use rdf::{Model, Namespace, NamespaceManager, PrefixError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
