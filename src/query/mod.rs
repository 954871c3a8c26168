//! Graph path queries
//!
//! Implements the path language used to select values from a node tree:
//! - Parsing of path text with prefix resolution
//! - Paths built programmatically from location steps
//! - Evaluation against a root node
//!
//! # Example
//!
//! ```rust
//! use linkgraph::graph::Node;
//! use linkgraph::query::GraphPath;
//! use linkgraph::rdf::NamespaceManager;
//!
//! let namespaces = NamespaceManager::new().with_prefix("mods", "http://www.loc.gov/mods/v3#");
//! let path = GraphPath::parse("* [rdf:type mods:name] rdf:_1", &namespaces).unwrap();
//!
//! let name = Node::typed("http://www.loc.gov/mods/v3#name")
//!     .unwrap()
//!     .with_item("Pineau, Severin");
//! assert_eq!(name.find(&path).join_strings(" ; ", true), "Pineau, Severin");
//! ```

pub mod ast;
pub mod executor;
pub mod parser;

// Re-export main types
pub use ast::{GraphPath, LocationStep};
pub use executor::find;
pub use parser::{parse_graph_path, ParseError, ParseResult};
