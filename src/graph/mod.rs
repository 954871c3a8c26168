//! Core graph data model
//!
//! This module implements the linked-data node model with:
//! - Anonymous nodes mapping predicates to value sets
//! - Named nodes and node references identified by absolute IRIs
//! - Plain, typed and language-tagged literals
//! - Structural matching of values against conditions
//! - Result bags returned by lookups and path evaluation

pub mod error;
pub mod identifiable;
pub mod literal;
pub mod node;
pub mod object;
pub mod result;

// Re-export main types
pub use error::{ErrorKind, GraphError, GraphResult};
pub use identifiable::{IdentifiableNode, IdentifiableRef, NamedNode, NodeReference};
pub use literal::{LangString, Literal};
pub use node::Node;
pub use object::{NodeType, ObjectType};
pub use result::ResultSet;
