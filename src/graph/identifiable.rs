//! Nodes that carry a global identifier
//!
//! A [`NamedNode`] owns its content; a [`NodeReference`] only points at an
//! identifier whose content is elsewhere or unknown.

use super::error::{GraphError, GraphResult};
use super::node::Node;
use super::object::ObjectType;
use oxiri::Iri;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

/// Anything addressable by an absolute IRI
pub trait IdentifiableNode {
    /// The node's identifier
    fn identifier(&self) -> &str;
}

/// Whether `iri` parses as an absolute IRI
pub(crate) fn is_absolute_iri(iri: &str) -> bool {
    !iri.is_empty() && Iri::parse(iri).is_ok()
}

pub(crate) fn validate_iri(iri: &str) -> GraphResult<()> {
    if is_absolute_iri(iri) {
        Ok(())
    } else {
        Err(GraphError::InvalidIri(iri.to_string()))
    }
}

/// A node with an identifier and content of its own.
///
/// Two named nodes are equal when their identifiers are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedNode {
    identifier: String,
    node: Node,
}

impl NamedNode {
    /// Create an empty named node
    pub fn new(identifier: impl Into<String>) -> GraphResult<Self> {
        let identifier = identifier.into();
        validate_iri(&identifier)?;
        Ok(Self {
            identifier,
            node: Node::new(),
        })
    }

    /// Create a named node with an `rdf:type`
    pub fn typed(identifier: impl Into<String>, type_iri: &str) -> GraphResult<Self> {
        let mut named = Self::new(identifier)?;
        named.node = Node::typed(type_iri)?;
        Ok(named)
    }

    /// Builder-style [`Node::put`]
    pub fn with(mut self, predicate: impl AsRef<str>, object: impl Into<ObjectType>) -> Self {
        self.node.put(predicate, object);
        self
    }

    /// Builder-style [`Node::add`]
    pub fn with_item(mut self, object: impl Into<ObjectType>) -> Self {
        self.node.add(object);
        self
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    pub fn into_node(self) -> Node {
        self.node
    }

    /// [`Node::as_unordered`] for the content. The identity is kept, so a
    /// named node never collapses into a bare value.
    pub fn as_unordered(&self, remove_type: bool) -> NamedNode {
        Self {
            identifier: self.identifier.clone(),
            node: self.node.unordered_content(remove_type),
        }
    }

    /// The reference pointing at this node
    pub fn to_reference(&self) -> NodeReference {
        NodeReference::new_unchecked(self.identifier.clone())
    }
}

impl IdentifiableNode for NamedNode {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.identifier
    }
}

impl PartialEq for NamedNode {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for NamedNode {}

impl Hash for NamedNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl Deref for NamedNode {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}

impl DerefMut for NamedNode {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.identifier)?;
        self.node.write_tree(f, 0)
    }
}

/// A bare pointer to an identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeReference {
    identifier: String,
}

impl NodeReference {
    /// Create a reference, validating the identifier as an absolute IRI
    pub fn new(identifier: impl Into<String>) -> GraphResult<Self> {
        let identifier = identifier.into();
        validate_iri(&identifier)?;
        Ok(Self { identifier })
    }

    pub(crate) fn new_unchecked(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl IdentifiableNode for NodeReference {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl AsRef<str> for NodeReference {
    fn as_ref(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for NodeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.identifier)
    }
}

/// A borrowed identifiable node out of a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifiableRef<'a> {
    Named(&'a NamedNode),
    Reference(&'a NodeReference),
}

impl<'a> IdentifiableRef<'a> {
    pub fn identifier(&self) -> &'a str {
        match *self {
            IdentifiableRef::Named(named) => &named.identifier,
            IdentifiableRef::Reference(reference) => &reference.identifier,
        }
    }

    /// The named node, if this is one
    pub fn as_named(&self) -> Option<&'a NamedNode> {
        match *self {
            IdentifiableRef::Named(named) => Some(named),
            IdentifiableRef::Reference(_) => None,
        }
    }

    pub fn to_object(&self) -> ObjectType {
        match *self {
            IdentifiableRef::Named(named) => ObjectType::NamedNode(named.clone()),
            IdentifiableRef::Reference(reference) => ObjectType::NodeReference(reference.clone()),
        }
    }
}

impl IdentifiableNode for IdentifiableRef<'_> {
    fn identifier(&self) -> &str {
        IdentifiableRef::identifier(self)
    }
}
