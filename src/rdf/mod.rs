//! RDF support for the graph engine
//!
//! This module provides:
//! - Well-known vocabulary IRIs and positional predicates (`rdf:_n`)
//! - Namespace prefixes for compact IRI notation
//! - Conversion between node trees and flat RDF graphs
//!
//! # Example
//!
//! ```rust
//! use linkgraph::graph::{Node, ResultSet};
//!
//! let node = Node::typed("http://www.loc.gov/mods/v3#name")
//!     .unwrap()
//!     .with_item("Pineau, Severin");
//!
//! let model = node.to_model();
//! assert_eq!(model.len(), 2);
//!
//! let back = ResultSet::create_from(&model, true).unwrap();
//! assert_eq!(back, ResultSet::from(node));
//! ```

pub mod model;
pub mod namespace;
pub mod vocabulary;

pub use model::Model;

pub use namespace::{
    concat, local_name_of, namespace_of,
    Namespace, NamespaceManager,
    PrefixError, PrefixResult,
};
