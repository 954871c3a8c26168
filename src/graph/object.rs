//! The object position of a statement
//!
//! Every value stored in a node is an [`ObjectType`]. Matching between a
//! value and a condition is defined here: conditions are themselves objects,
//! and node-shaped conditions are matched structurally.

use super::identifiable::{IdentifiableNode, IdentifiableRef, NamedNode, NodeReference};
use super::literal::{LangString, Literal};
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value in a node: a nested node, an identifiable node, or a literal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    /// Anonymous nested node
    Node(Node),
    /// Node with an identifier and content
    NamedNode(NamedNode),
    /// Identifier without content
    NodeReference(NodeReference),
    Literal(Literal),
    LangString(LangString),
}

impl ObjectType {
    /// Identifier of a named node or node reference
    pub fn identifier(&self) -> Option<&str> {
        match self {
            ObjectType::NamedNode(named) => Some(named.identifier()),
            ObjectType::NodeReference(reference) => Some(reference.identifier()),
            _ => None,
        }
    }

    /// Lexical value of a literal or language-tagged string
    pub fn literal_value(&self) -> Option<&str> {
        match self {
            ObjectType::Literal(literal) => Some(literal.value()),
            ObjectType::LangString(lang_string) => Some(lang_string.value()),
            _ => None,
        }
    }

    pub fn is_identifiable(&self) -> bool {
        matches!(self, ObjectType::NamedNode(_) | ObjectType::NodeReference(_))
    }

    /// Whether the value has node content (anonymous or named)
    pub fn is_node_type(&self) -> bool {
        matches!(self, ObjectType::Node(_) | ObjectType::NamedNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ObjectType::Literal(_) | ObjectType::LangString(_))
    }

    pub fn as_identifiable(&self) -> Option<IdentifiableRef<'_>> {
        match self {
            ObjectType::NamedNode(named) => Some(IdentifiableRef::Named(named)),
            ObjectType::NodeReference(reference) => Some(IdentifiableRef::Reference(reference)),
            _ => None,
        }
    }

    pub fn as_node_type(&self) -> Option<NodeType<'_>> {
        match self {
            ObjectType::Node(node) => Some(NodeType::Node(node)),
            ObjectType::NamedNode(named) => Some(NodeType::Named(named)),
            _ => None,
        }
    }

    pub fn as_node_type_mut(&mut self) -> Option<&mut Node> {
        match self {
            ObjectType::Node(node) => Some(node),
            ObjectType::NamedNode(named) => Some(named.node_mut()),
            _ => None,
        }
    }

    /// Whether this value satisfies `condition`.
    ///
    /// - A node-shaped condition is matched structurally; literals expose
    ///   `rdf:type`, `rdf:value` and `xml:lang` as virtual fields.
    /// - A named-node condition requires the same identifier and, for a
    ///   named value, structurally matching content. A reference value only
    ///   satisfies a named-node condition without content.
    /// - A reference condition requires the same identifier.
    /// - A literal condition requires the same value, and the same datatype
    ///   if it has one.
    pub fn matches(&self, condition: &ObjectType) -> bool {
        match condition {
            ObjectType::Node(pattern) => self.matches_pattern(pattern),
            ObjectType::NamedNode(pattern) => match self {
                ObjectType::NamedNode(named) => {
                    named.identifier() == pattern.identifier()
                        && named.node().matches_pattern(pattern.node())
                }
                ObjectType::NodeReference(reference) => {
                    reference.identifier() == pattern.identifier() && pattern.is_empty()
                }
                _ => false,
            },
            ObjectType::NodeReference(pattern) => self.identifier() == Some(pattern.identifier()),
            ObjectType::Literal(pattern) => match self {
                ObjectType::Literal(literal) => literal.matches_literal(pattern),
                ObjectType::LangString(lang_string) => lang_string.matches_literal(pattern),
                _ => false,
            },
            ObjectType::LangString(pattern) => {
                matches!(self, ObjectType::LangString(lang_string) if lang_string.matches_lang_string(pattern))
            }
        }
    }

    fn matches_pattern(&self, pattern: &Node) -> bool {
        match self {
            ObjectType::Node(node) => node.matches_pattern(pattern),
            ObjectType::NamedNode(named) => named.node().matches_pattern(pattern),
            ObjectType::NodeReference(_) => pattern.is_empty(),
            ObjectType::Literal(literal) => literal.matches_node(pattern),
            ObjectType::LangString(lang_string) => lang_string.matches_node(pattern),
        }
    }
}

impl From<Node> for ObjectType {
    fn from(node: Node) -> Self {
        ObjectType::Node(node)
    }
}

impl From<NamedNode> for ObjectType {
    fn from(named: NamedNode) -> Self {
        ObjectType::NamedNode(named)
    }
}

impl From<NodeReference> for ObjectType {
    fn from(reference: NodeReference) -> Self {
        ObjectType::NodeReference(reference)
    }
}

impl From<Literal> for ObjectType {
    fn from(literal: Literal) -> Self {
        ObjectType::Literal(literal)
    }
}

impl From<LangString> for ObjectType {
    fn from(lang_string: LangString) -> Self {
        ObjectType::LangString(lang_string)
    }
}

/// Absolute IRIs become node references, everything else a plain literal
impl From<&str> for ObjectType {
    fn from(value: &str) -> Self {
        Literal::create(value, None)
    }
}

impl From<String> for ObjectType {
    fn from(value: String) -> Self {
        Literal::create(value, None)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Node(node) => fmt::Display::fmt(node, f),
            ObjectType::NamedNode(named) => fmt::Display::fmt(named, f),
            ObjectType::NodeReference(reference) => fmt::Display::fmt(reference, f),
            ObjectType::Literal(literal) => fmt::Display::fmt(literal, f),
            ObjectType::LangString(lang_string) => fmt::Display::fmt(lang_string, f),
        }
    }
}

/// A borrowed node-shaped value: anonymous or named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType<'a> {
    Node(&'a Node),
    Named(&'a NamedNode),
}

impl<'a> NodeType<'a> {
    /// The node content
    pub fn content(&self) -> &'a Node {
        match *self {
            NodeType::Node(node) => node,
            NodeType::Named(named) => named.node(),
        }
    }

    /// Identifier, for named nodes
    pub fn identifier(&self) -> Option<&'a str> {
        match *self {
            NodeType::Node(_) => None,
            NodeType::Named(named) => Some(named.identifier()),
        }
    }

    pub fn to_object(&self) -> ObjectType {
        match *self {
            NodeType::Node(node) => ObjectType::Node(node.clone()),
            NodeType::Named(named) => ObjectType::NamedNode(named.clone()),
        }
    }
}
