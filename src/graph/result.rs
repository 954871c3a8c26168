//! Query results
//!
//! A [`ResultSet`] is an insertion-ordered bag of values returned by node
//! lookups and path evaluation. Equality ignores order but respects
//! multiplicity.

use super::error::{GraphError, GraphResult};
use super::identifiable::{IdentifiableRef, NamedNode, NodeReference};
use super::literal::{LangString, Literal};
use super::node::Node;
use super::object::{NodeType, ObjectType};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bag of values produced by a lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    elements: Vec<ObjectType>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: impl Into<ObjectType>) {
        self.elements.push(object.into());
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectType> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<ObjectType> {
        self.elements
    }

    /// All named nodes and node references, in order
    pub fn identifiable_nodes(&self) -> Vec<IdentifiableRef<'_>> {
        self.iter().filter_map(ObjectType::as_identifiable).collect()
    }

    /// Whether the result holds exactly one value
    pub fn is_unique(&self) -> bool {
        self.len() == 1
    }

    /// The only value of this result, whatever its kind
    pub fn expectable(&self) -> GraphResult<&ObjectType> {
        exactly_one("value", self.iter())
    }

    /// Whether exactly one element is a named node or node reference
    pub fn is_unique_identifiable_node(&self) -> bool {
        self.iter().filter(|object| object.is_identifiable()).count() == 1
    }

    /// The one identifiable node of this result. Other values are ignored.
    ///
    /// Fails with `NotFound` if there is none and with `Ambiguous` if there
    /// are several.
    pub fn identifiable_node_expectable(&self) -> GraphResult<IdentifiableRef<'_>> {
        exactly_one(
            "identifiable node",
            self.iter().filter_map(ObjectType::as_identifiable),
        )
    }

    /// The identifiable node if there is exactly one, otherwise `fallback`
    pub fn identifiable_node_or<'a>(
        &'a self,
        fallback: IdentifiableRef<'a>,
    ) -> IdentifiableRef<'a> {
        self.identifiable_node_expectable().unwrap_or(fallback)
    }

    pub fn identifiable_node_or_else<'a>(
        &'a self,
        fallback: impl FnOnce() -> IdentifiableRef<'a>,
    ) -> IdentifiableRef<'a> {
        self.identifiable_node_expectable()
            .unwrap_or_else(|_| fallback())
    }

    /// The one node-shaped value of this result, with the same failure
    /// rules as [`identifiable_node_expectable`](Self::identifiable_node_expectable)
    pub fn node(&self) -> GraphResult<NodeType<'_>> {
        exactly_one("node", self.iter().filter_map(ObjectType::as_node_type))
    }

    pub fn is_unique_node(&self) -> bool {
        self.iter().filter(|object| object.is_node_type()).count() == 1
    }

    /// The node-shaped value if there is exactly one, otherwise `fallback`
    pub fn node_or<'a>(&'a self, fallback: NodeType<'a>) -> NodeType<'a> {
        self.node().unwrap_or(fallback)
    }

    pub fn node_or_else<'a>(&'a self, fallback: impl FnOnce() -> NodeType<'a>) -> NodeType<'a> {
        self.node().unwrap_or_else(|_| fallback())
    }

    /// All node-shaped values, anonymous or named
    pub fn nodes(&self) -> Vec<NodeType<'_>> {
        self.iter().filter_map(ObjectType::as_node_type).collect()
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.iter().filter_map(|object| match object {
            ObjectType::Literal(literal) => Some(literal),
            _ => None,
        })
    }

    pub fn lang_strings(&self) -> impl Iterator<Item = &LangString> {
        self.iter().filter_map(|object| match object {
            ObjectType::LangString(lang_string) => Some(lang_string),
            _ => None,
        })
    }

    pub fn named_nodes(&self) -> impl Iterator<Item = &NamedNode> {
        self.iter().filter_map(|object| match object {
            ObjectType::NamedNode(named) => Some(named),
            _ => None,
        })
    }

    pub fn node_references(&self) -> impl Iterator<Item = &NodeReference> {
        self.iter().filter_map(|object| match object {
            ObjectType::NodeReference(reference) => Some(reference),
            _ => None,
        })
    }

    pub fn is_any_literal(&self) -> bool {
        self.iter().any(ObjectType::is_literal)
    }

    pub fn is_any_identifiable_node(&self) -> bool {
        self.iter().any(ObjectType::is_identifiable)
    }

    pub fn is_any_node_type(&self) -> bool {
        self.iter().any(ObjectType::is_node_type)
    }

    /// Non-node values reachable from this result, depth first
    pub fn leaves(&self) -> Vec<&ObjectType> {
        fn collect<'a>(objects: impl Iterator<Item = &'a ObjectType>, leaves: &mut Vec<&'a ObjectType>) {
            for object in objects {
                match object.as_node_type() {
                    Some(node) => collect(node.content().iter(), leaves),
                    None => leaves.push(object),
                }
            }
        }

        let mut leaves = Vec::new();
        collect(self.iter(), &mut leaves);
        leaves
    }

    /// Literal texts, deduplicated, in encounter order
    pub fn strings(&self) -> IndexSet<String> {
        self.strings_with(false)
    }

    /// Literal texts; with `dereference`, identifiers of named nodes and
    /// node references are included as well
    pub fn strings_with(&self, dereference: bool) -> IndexSet<String> {
        self.iter()
            .filter_map(|object| match object {
                ObjectType::Literal(_) | ObjectType::LangString(_) => object.literal_value(),
                ObjectType::NamedNode(_) | ObjectType::NodeReference(_) if dereference => {
                    object.identifier()
                }
                _ => None,
            })
            .map(str::to_string)
            .collect()
    }

    /// [`strings_with`](Self::strings_with), joined by `separator`
    pub fn join_strings(&self, separator: &str, dereference: bool) -> String {
        self.strings_with(dereference)
            .into_iter()
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The single literal text of this result
    pub fn value(&self) -> GraphResult<String> {
        let strings = self.strings();
        match strings.len() {
            0 => Err(GraphError::NotFound("literal")),
            1 => Ok(strings.into_iter().next().unwrap_or_default()),
            count => Err(GraphError::Ambiguous {
                what: "literal",
                count,
            }),
        }
    }
}

/// `NotFound` for no candidate, `Ambiguous` for several
fn exactly_one<T>(what: &'static str, mut candidates: impl Iterator<Item = T>) -> GraphResult<T> {
    let first = candidates.next().ok_or(GraphError::NotFound(what))?;
    match candidates.count() {
        0 => Ok(first),
        more => Err(GraphError::Ambiguous {
            what,
            count: more + 1,
        }),
    }
}

/// Per-kind accessors: `*_expectable` yields the one value of that kind and
/// ignores values of other kinds, `*_or` and `*_or_else` fall back when
/// there is not exactly one, `is_unique_*` tells which case applies.
macro_rules! kind_projections {
    ($($what:literal, $ty:ty, $values:ident => $expectable:ident, $or:ident, $or_else:ident, $is_unique:ident;)*) => {
        impl ResultSet {
            $(
                pub fn $expectable(&self) -> GraphResult<&$ty> {
                    exactly_one($what, self.$values())
                }

                pub fn $or<'a>(&'a self, fallback: &'a $ty) -> &'a $ty {
                    self.$expectable().unwrap_or(fallback)
                }

                pub fn $or_else<'a>(&'a self, fallback: impl FnOnce() -> &'a $ty) -> &'a $ty {
                    self.$expectable().unwrap_or_else(|_| fallback())
                }

                pub fn $is_unique(&self) -> bool {
                    self.$values().take(2).count() == 1
                }
            )*
        }
    };
}

kind_projections! {
    "literal", Literal, literals => literal_expectable, literal_or, literal_or_else, is_unique_literal;
    "language-tagged string", LangString, lang_strings => lang_string_expectable, lang_string_or, lang_string_or_else, is_unique_lang_string;
    "named node", NamedNode, named_nodes => named_node_expectable, named_node_or, named_node_or_else, is_unique_named_node;
    "node reference", NodeReference, node_references => node_reference_expectable, node_reference_or, node_reference_or_else, is_unique_node_reference;
}

impl PartialEq for ResultSet {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut counts: FxHashMap<&ObjectType, usize> = FxHashMap::default();
        for object in &self.elements {
            *counts.entry(object).or_insert(0) += 1;
        }
        for object in &other.elements {
            match counts.get_mut(object) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl Eq for ResultSet {}

impl FromIterator<ObjectType> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ObjectType>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<ObjectType> for ResultSet {
    fn extend<I: IntoIterator<Item = ObjectType>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl From<Node> for ResultSet {
    fn from(node: Node) -> Self {
        Self {
            elements: vec![ObjectType::Node(node)],
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = ObjectType;
    type IntoIter = std::vec::IntoIter<ObjectType>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ObjectType;
    type IntoIter = std::slice::Iter<'a, ObjectType>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, object) in self.elements.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---")?;
            }
            writeln!(f, "{}", object)?;
        }
        Ok(())
    }
}
