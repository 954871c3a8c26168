//! Anonymous node: an unordered map from predicate IRIs to value sets
//!
//! Ordered children are stored under the positional predicates `rdf:_1`,
//! `rdf:_2`, ... and appended with [`Node::add`].

use super::error::{GraphError, GraphResult};
use super::identifiable::{validate_iri, IdentifiableNode, NodeReference};
use super::object::ObjectType;
use super::result::ResultSet;
use crate::query::GraphPath;
use crate::rdf::vocabulary::{
    sequence_number_of, to_url, ANY_PREDICATE, FIRST_INDEX, RDF_ABOUT, RDF_TYPE, RDF_VALUE,
};
use indexmap::IndexSet;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::warn;

/// A node in the linked-data graph
///
/// Nodes can have:
/// - Any number of relations, each holding a set of values
/// - Ordered children under positional predicates
/// - Nested anonymous or named nodes as values
///
/// Equality is structural and does not depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Relation → values
    edges: BTreeMap<String, IndexSet<ObjectType>>,
}

impl Node {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with an `rdf:type`
    pub fn typed(type_iri: &str) -> GraphResult<Self> {
        if type_iri.is_empty() {
            return Err(GraphError::EmptyType);
        }
        validate_iri(type_iri)?;

        let mut node = Self::new();
        node.put(RDF_TYPE, NodeReference::new_unchecked(type_iri));
        Ok(node)
    }

    /// Add a value under a relation. Values already present are ignored.
    ///
    /// `rdf:about` is refused with a warning, as identity belongs to
    /// [`NamedNode`](super::NamedNode). [`try_put`](Self::try_put) reports
    /// the refusal instead.
    pub fn put(&mut self, predicate: impl AsRef<str>, object: impl Into<ObjectType>) -> &mut Self {
        if let Err(err) = self.try_put(predicate, object) {
            warn!("{}", err);
        }
        self
    }

    /// [`put`](Self::put), failing with `ReservedPredicate` on `rdf:about`
    pub fn try_put(
        &mut self,
        predicate: impl AsRef<str>,
        object: impl Into<ObjectType>,
    ) -> GraphResult<&mut Self> {
        let predicate = checked_relation(predicate.as_ref())?;
        self.edges
            .entry(predicate.to_string())
            .or_default()
            .insert(object.into());
        Ok(self)
    }

    /// Builder-style [`put`](Self::put)
    pub fn with(mut self, predicate: impl AsRef<str>, object: impl Into<ObjectType>) -> Self {
        self.put(predicate, object);
        self
    }

    /// Add several values under one relation
    pub fn put_all<I, O>(&mut self, predicate: impl AsRef<str>, objects: I) -> &mut Self
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectType>,
    {
        let predicate = match checked_relation(predicate.as_ref()) {
            Ok(predicate) => predicate,
            Err(err) => {
                warn!("{}", err);
                return self;
            }
        };
        let mut objects = objects.into_iter().map(Into::into).peekable();
        if objects.peek().is_some() {
            self.edges
                .entry(predicate.to_string())
                .or_default()
                .extend(objects);
        }
        self
    }

    /// Append a value after the highest positional index
    pub fn add(&mut self, object: impl Into<ObjectType>) -> &mut Self {
        let index = self.last() + 1;
        self.put(to_url(index), object)
    }

    /// Builder-style [`add`](Self::add)
    pub fn with_item(mut self, object: impl Into<ObjectType>) -> Self {
        self.add(object);
        self
    }

    /// Values of one relation
    pub fn get(&self, predicate: impl AsRef<str>) -> ResultSet {
        self.values(predicate.as_ref()).cloned().collect()
    }

    /// Borrowed values of one relation
    pub fn values<'a>(&'a self, predicate: &str) -> impl Iterator<Item = &'a ObjectType> + 'a {
        self.edges.get(predicate).into_iter().flatten()
    }

    /// Values under any of `relations` that match some of `conditions`.
    ///
    /// No relations, or [`ANY_PREDICATE`] among them, selects every
    /// relation. No conditions accepts every value.
    pub fn get_where(&self, relations: &[&str], conditions: &[ObjectType]) -> ResultSet {
        self.matching(relations, conditions).cloned().collect()
    }

    pub(crate) fn matching<'a>(
        &'a self,
        relations: &'a [&'a str],
        conditions: &'a [ObjectType],
    ) -> impl Iterator<Item = &'a ObjectType> + 'a {
        let all_relations = relations.is_empty() || relations.contains(&ANY_PREDICATE);
        self.edges
            .iter()
            .filter(move |(relation, _)| all_relations || relations.contains(&relation.as_str()))
            .flat_map(|(_, objects)| objects.iter())
            .filter(move |object| {
                conditions.is_empty() || conditions.iter().any(|condition| object.matches(condition))
            })
    }

    /// Values at a positional index
    pub fn get_index(&self, index: u64) -> ResultSet {
        self.get(to_url(index))
    }

    /// Positional values from the first to the highest index, one result
    /// per index, gaps included as empty results
    pub fn get_enumerated(&self) -> Vec<ResultSet> {
        (FIRST_INDEX..=self.last()).map(|index| self.get_index(index)).collect()
    }

    /// Values at the lowest positional index, empty if there is none
    pub fn get_first(&self) -> ResultSet {
        self.first()
            .map(|index| self.get_index(index))
            .unwrap_or_default()
    }

    /// Values at the highest positional index, empty if there is none
    pub fn get_last(&self) -> ResultSet {
        match self.last() {
            0 => ResultSet::new(),
            index => self.get_index(index),
        }
    }

    /// Node-shaped values of one relation whose single type is `type_iri`
    pub fn get_of_type(&self, predicate: &str, type_iri: &str) -> ResultSet {
        self.values(predicate)
            .filter(|object| {
                object.as_node_type().map_or(false, |node| {
                    matches!(node.content().get_type(), Ok(found) if found == type_iri)
                })
            })
            .cloned()
            .collect()
    }

    /// Values of one relation that hold `identifier_value` under
    /// `identifier_relation`. [`ANY_PREDICATE`] looks at every relation.
    pub fn get_identified_by(
        &self,
        predicate: &str,
        identifier_relation: &str,
        identifier_value: impl Into<ObjectType>,
    ) -> ResultSet {
        let condition = [ObjectType::Node(
            Node::new().with(identifier_relation, identifier_value),
        )];
        self.get_where(&[predicate], &condition)
    }

    /// The single `rdf:type` of this node. Only identifiers qualify as
    /// types; a literal under `rdf:type` is not one.
    pub fn get_type(&self) -> GraphResult<&str> {
        let types = match self.edges.get(RDF_TYPE) {
            Some(types) if !types.is_empty() => types,
            _ => return Err(GraphError::NotFound("type")),
        };
        if types.len() > 1 {
            return Err(GraphError::Ambiguous {
                what: "type",
                count: types.len(),
            });
        }
        types
            .first()
            .and_then(ObjectType::identifier)
            .ok_or(GraphError::NotFound("type"))
    }

    /// Whether one of the node's `rdf:type` values is `type_iri`
    pub fn has_type(&self, type_iri: &str) -> bool {
        self.values(RDF_TYPE)
            .any(|value| value.identifier() == Some(type_iri))
    }

    /// Direct node-shaped children carrying `type_iri`
    pub fn get_by_type(&self, type_iri: &str) -> ResultSet {
        self.iter()
            .filter(|object| {
                object
                    .as_node_type()
                    .map_or(false, |node| node.content().has_type(type_iri))
            })
            .cloned()
            .collect()
    }

    /// Direct node-shaped children carrying `type_iri` whose `id_relation`
    /// has the literal text `id_value`
    pub fn get_by_type_and_id(&self, type_iri: &str, id_relation: &str, id_value: &str) -> ResultSet {
        self.iter()
            .filter(|object| {
                object.as_node_type().map_or(false, |node| {
                    let content = node.content();
                    content.has_type(type_iri)
                        && content
                            .values(id_relation)
                            .any(|value| value.literal_value() == Some(id_value))
                })
            })
            .cloned()
            .collect()
    }

    /// Depth-first search for the identifiable value with `identifier`
    pub fn get_by_identifier(&self, identifier: &str) -> Option<&ObjectType> {
        for object in self.iter() {
            if object.identifier() == Some(identifier) {
                return Some(object);
            }
            if let Some(found) = object
                .as_node_type()
                .and_then(|node| node.content().get_by_identifier(identifier))
            {
                return Some(found);
            }
        }
        None
    }

    /// The relations present on this node
    pub fn get_relations(&self) -> BTreeSet<&str> {
        self.edges.keys().map(String::as_str).collect()
    }

    pub fn contains_key(&self, predicate: &str) -> bool {
        self.edges.contains_key(predicate)
    }

    /// Highest positional index, 0 if there is none
    pub fn last(&self) -> u64 {
        self.edges
            .keys()
            .filter_map(|relation| sequence_number_of(relation))
            .max()
            .unwrap_or(0)
    }

    /// Lowest positional index
    pub fn first(&self) -> Option<u64> {
        self.edges
            .keys()
            .filter_map(|relation| sequence_number_of(relation))
            .min()
    }

    /// Remove one value. Relations left empty are dropped.
    pub fn remove(&mut self, predicate: &str, object: &ObjectType) -> bool {
        let Some(objects) = self.edges.get_mut(predicate) else {
            return false;
        };
        let removed = objects.shift_remove(object);
        if objects.is_empty() {
            self.edges.remove(predicate);
        }
        removed
    }

    /// Remove a relation with all its values
    pub fn remove_all(&mut self, predicate: &str) -> ResultSet {
        self.edges
            .remove(predicate)
            .map(|objects| objects.into_iter().collect())
            .unwrap_or_default()
    }

    /// Replace the values of a relation, returning the previous ones
    pub fn replace<I, O>(&mut self, predicate: &str, objects: I) -> ResultSet
    where
        I: IntoIterator<Item = O>,
        O: Into<ObjectType>,
    {
        let previous = self.remove_all(predicate);
        self.put_all(predicate, objects);
        previous
    }

    /// Iterate over all values of all relations
    pub fn iter(&self) -> impl Iterator<Item = &ObjectType> {
        self.edges.values().flatten()
    }

    /// Iterate over relations with their value sets
    pub fn entries(&self) -> impl Iterator<Item = (&str, &IndexSet<ObjectType>)> {
        self.edges
            .iter()
            .map(|(relation, objects)| (relation.as_str(), objects))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of relations
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Whether this node satisfies `condition`. Only node-shaped conditions
    /// can be satisfied by an anonymous node.
    pub fn matches(&self, condition: &ObjectType) -> bool {
        match condition {
            ObjectType::Node(pattern) => self.matches_pattern(pattern),
            _ => false,
        }
    }

    /// Structural match: for every relation of `pattern`, every value of
    /// the pattern must be matched by some value of this node under that
    /// relation. [`ANY_PREDICATE`] in the pattern looks at all values.
    pub(crate) fn matches_pattern(&self, pattern: &Node) -> bool {
        pattern.edges.iter().all(|(relation, required)| {
            if relation == ANY_PREDICATE {
                required
                    .iter()
                    .all(|condition| self.iter().any(|object| object.matches(condition)))
            } else {
                match self.edges.get(relation) {
                    Some(objects) => required
                        .iter()
                        .all(|condition| objects.iter().any(|object| object.matches(condition))),
                    None => false,
                }
            }
        })
    }

    /// Replace every named node without content by a reference to it
    pub fn replace_all_named_nodes_with_no_data_by_node_references(&mut self, recursive: bool) {
        for objects in self.edges.values_mut() {
            let taken = std::mem::take(objects);
            *objects = taken
                .into_iter()
                .map(|object| match object {
                    ObjectType::NamedNode(named) if named.is_empty() => {
                        ObjectType::NodeReference(named.to_reference())
                    }
                    mut object => {
                        if recursive {
                            if let Some(node) = object.as_node_type_mut() {
                                node.replace_all_named_nodes_with_no_data_by_node_references(true);
                            }
                        }
                        object
                    }
                })
                .collect();
        }
    }

    /// A copy of this node for export to formats without ordered children.
    ///
    /// Node-shaped children held positionally or under `rdf:value` are
    /// re-mounted under their single type, which is dropped from them.
    /// Children with no or several types stay under their relation. Other
    /// values held positionally move to `rdf:value`. If all that is left is
    /// one `rdf:value`, that value is returned instead of a node. With
    /// `remove_type`, the node's own `rdf:type` is dropped.
    pub fn as_unordered(&self, remove_type: bool) -> ObjectType {
        let unordered = self.unordered_content(remove_type);
        let sole_value = match unordered.edges.get(RDF_VALUE) {
            Some(values) if unordered.edges.len() == 1 && values.len() == 1 => values.first().cloned(),
            _ => None,
        };
        sole_value.unwrap_or(ObjectType::Node(unordered))
    }

    pub(crate) fn unordered_content(&self, remove_type: bool) -> Node {
        let mut result = Node::new();
        for (relation, objects) in &self.edges {
            if remove_type && relation == RDF_TYPE {
                continue;
            }
            if sequence_number_of(relation).is_none() && relation != RDF_VALUE {
                result.put_all(relation, objects.iter().cloned());
                continue;
            }
            for object in objects {
                match object.as_node_type() {
                    Some(node) => match node.content().get_type() {
                        Ok(type_iri) => {
                            result.put(type_iri, unordered(object, true));
                        }
                        Err(_) => {
                            result.put(relation, unordered(object, false));
                        }
                    },
                    None => {
                        result.put(RDF_VALUE, object.clone());
                    }
                }
            }
        }
        result
    }

    /// Evaluate a graph path with this node as the root
    pub fn find(&self, path: &GraphPath) -> ResultSet {
        crate::query::find(self, path)
    }

    pub(crate) fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let mut positional = Vec::new();
        for (relation, objects) in &self.edges {
            match sequence_number_of(relation) {
                Some(index) => positional.push((index, relation, objects)),
                None => {
                    for object in objects {
                        write_entry(f, indent, relation, object)?;
                    }
                }
            }
        }
        positional.sort_by_key(|(index, _, _)| *index);
        for (_, relation, objects) in positional {
            for object in objects {
                write_entry(f, indent, relation, object)?;
            }
        }
        Ok(())
    }
}

fn checked_relation(predicate: &str) -> GraphResult<&str> {
    if predicate == RDF_ABOUT {
        Err(GraphError::ReservedPredicate(RDF_ABOUT.to_string()))
    } else {
        Ok(predicate)
    }
}

fn unordered(object: &ObjectType, remove_type: bool) -> ObjectType {
    match object {
        ObjectType::Node(node) => node.as_unordered(remove_type),
        ObjectType::NamedNode(named) => named.as_unordered(remove_type).into(),
        other => other.clone(),
    }
}

fn write_entry(
    f: &mut fmt::Formatter<'_>,
    indent: usize,
    relation: &str,
    object: &ObjectType,
) -> fmt::Result {
    match object {
        ObjectType::Node(node) => {
            writeln!(f, "{:indent$}{} {{", "", relation, indent = indent)?;
            node.write_tree(f, indent + 2)?;
            writeln!(f, "{:indent$}}}", "", indent = indent)
        }
        ObjectType::NamedNode(named) => {
            writeln!(f, "{:indent$}{} {{", "", relation, indent = indent)?;
            writeln!(f, "{:indent$}[{}]", "", named.identifier(), indent = indent + 2)?;
            named.node().write_tree(f, indent + 2)?;
            writeln!(f, "{:indent$}}}", "", indent = indent)
        }
        ObjectType::NodeReference(reference) => writeln!(
            f,
            "{:indent$}{} = {}",
            "",
            relation,
            reference.identifier(),
            indent = indent
        ),
        other => writeln!(f, "{:indent$}{} = {}", "", relation, other, indent = indent),
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edges.len().hash(state);
        for (relation, objects) in &self.edges {
            relation.hash(state);
            // Order-independent combination of the value set
            let combined = objects
                .iter()
                .map(|object| {
                    let mut hasher = FxHasher::default();
                    object.hash(&mut hasher);
                    hasher.finish()
                })
                .fold(0u64, u64::wrapping_add);
            combined.hash(state);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a ObjectType;
    type IntoIter = std::iter::Flatten<std::collections::btree_map::Values<'a, String, IndexSet<ObjectType>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{ErrorKind, Literal, NamedNode};
    use std::collections::hash_map::DefaultHasher;

    const NAME: &str = "http://www.loc.gov/mods/v3#name";
    const ROLE: &str = "http://www.loc.gov/mods/v3#role";
    const TYPE: &str = "http://www.loc.gov/mods/v3#type";
    const NAME_PART: &str = "http://www.loc.gov/mods/v3#namePart";

    fn hash_of(node: &Node) -> u64 {
        let mut hasher = DefaultHasher::new();
        node.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_add_appends_after_last() {
        let mut node = Node::new();
        assert_eq!(node.last(), 0);
        assert_eq!(node.first(), None);
        node.add("a").add("b");
        node.put(to_url(7), "c");
        node.add("d");

        assert_eq!(node.first(), Some(1));
        assert_eq!(node.last(), 8);
        assert_eq!(node.get_index(8), ResultSet::from_iter([ObjectType::from("d")]));
        assert_eq!(node.get_enumerated().len(), 8);
        assert!(node.get_enumerated()[2].is_empty());
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = Node::new().with(TYPE, "personal").with(TYPE, "corporate").with(ROLE, "aut");
        let b = Node::new().with(ROLE, "aut").with(TYPE, "corporate").with(TYPE, "personal");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Node::new().with(ROLE, "aut"));
    }

    #[test]
    fn test_is_empty_iff_no_relations() {
        let nodes = [
            Node::new(),
            Node::new().with_item("first"),
            Node::typed(NAME).unwrap(),
            Node::typed(NAME).unwrap().with_item("first"),
        ];
        for node in &nodes {
            assert_eq!(node.is_empty(), node.get_relations().is_empty(), "for {:?}", node);
        }
        assert!(nodes[0].is_empty());
        assert!(!nodes[1].is_empty());

        let mut node = nodes[1].clone();
        node.remove(&to_url(1), &"first".into());
        assert!(node.is_empty());
        assert!(node.get_relations().is_empty());
    }

    #[test]
    fn test_put_ignores_duplicates() {
        let mut node = Node::new();
        node.put(TYPE, "personal").put(TYPE, "personal");
        assert_eq!(node.get(TYPE).len(), 1);
    }

    #[test]
    fn test_get_type() {
        assert_eq!(Node::typed(NAME).unwrap().get_type().unwrap(), NAME);
        assert_eq!(Node::new().get_type().unwrap_err().kind(), ErrorKind::NotFound);

        let mut node = Node::typed(NAME).unwrap();
        node.put(RDF_TYPE, NodeReference::new(ROLE).unwrap());
        assert_eq!(node.get_type().unwrap_err().kind(), ErrorKind::Ambiguous);

        assert_eq!(Node::typed("").unwrap_err(), GraphError::EmptyType);
        assert!(Node::typed("no iri").is_err());
    }

    #[test]
    fn test_literal_type_is_not_a_type() {
        let node = Node::new().with(RDF_TYPE, "foo");
        assert_eq!(node.get_type().unwrap_err().kind(), ErrorKind::NotFound);
        assert!(!node.has_type("foo"));
    }

    #[test]
    fn test_get_where() {
        let node = Node::new()
            .with(NAME_PART, "Pineau")
            .with(NAME_PART, "Severin")
            .with(TYPE, "personal");

        assert_eq!(node.get_where(&[], &[]).len(), 3);
        assert_eq!(node.get_where(&[NAME_PART], &[]).len(), 2);
        assert_eq!(node.get_where(&[ANY_PREDICATE], &[ObjectType::from("personal")]).len(), 1);
        assert_eq!(
            node.get_where(&[NAME_PART, TYPE], &[ObjectType::from("Pineau"), ObjectType::from("personal")]).len(),
            2
        );
        assert!(node.get_where(&[ROLE], &[]).is_empty());
    }

    #[test]
    fn test_structural_match() {
        let node = Node::typed(NAME)
            .unwrap()
            .with(TYPE, "personal")
            .with(ROLE, Node::typed(ROLE).unwrap().with_item("aut"));

        assert!(node.matches(&Node::new().into()));
        assert!(node.matches(&Node::typed(NAME).unwrap().into()));
        assert!(node.matches(
            &Node::new()
                .with(ANY_PREDICATE, Node::typed(ROLE).unwrap())
                .into()
        ));
        assert!(node.matches(
            &Node::new()
                .with(ROLE, Node::new().with(ANY_PREDICATE, "aut"))
                .into()
        ));
        assert!(!node.matches(&Node::new().with(TYPE, "corporate").into()));
        assert!(!node.matches(&Node::new().with(NAME_PART, "Pineau").into()));
        assert!(!node.matches(&Literal::plain("aut").into()));
    }

    #[test]
    fn test_replace_named_nodes_without_data() {
        let empty = NamedNode::new("http://example.org/empty").unwrap();
        let inner = Node::new().with(ROLE, empty.clone());
        let mut node = Node::new()
            .with(ROLE, empty.clone())
            .with(NAME, inner)
            .with(TYPE, NamedNode::new("http://example.org/full").unwrap().with(TYPE, "x"));

        let mut shallow = node.clone();
        shallow.replace_all_named_nodes_with_no_data_by_node_references(false);
        assert_eq!(
            shallow.get(ROLE),
            ResultSet::from_iter([ObjectType::NodeReference(empty.to_reference())])
        );
        assert!(matches!(
            shallow.values(NAME).next().and_then(|n| n.as_node_type()).unwrap().content().values(ROLE).next(),
            Some(ObjectType::NamedNode(_))
        ));

        node.replace_all_named_nodes_with_no_data_by_node_references(true);
        let nested = node.values(NAME).next().and_then(|n| n.as_node_type()).unwrap();
        assert!(matches!(
            nested.content().values(ROLE).next(),
            Some(ObjectType::NodeReference(_))
        ));
        assert!(matches!(node.values(TYPE).next(), Some(ObjectType::NamedNode(_))));
    }

    #[test]
    fn test_remove_and_replace() {
        let mut node = Node::new().with(TYPE, "personal").with(ROLE, "aut");
        assert!(node.remove(TYPE, &"personal".into()));
        assert!(!node.contains_key(TYPE));
        assert!(!node.remove(TYPE, &"personal".into()));

        let previous = node.replace(ROLE, ["edt", "ctb"]);
        assert_eq!(previous, ResultSet::from_iter([ObjectType::from("aut")]));
        assert_eq!(node.get(ROLE).len(), 2);
        assert_eq!(node.remove_all(ROLE).len(), 2);
        assert!(node.is_empty());
    }

    #[test]
    fn test_search_helpers() {
        let role = Node::typed(ROLE).unwrap();
        let named = NamedNode::new("http://example.org/deep").unwrap().with(TYPE, "x");
        let node = Node::new()
            .with_item(role.clone())
            .with_item(Node::new().with(NAME, named.clone()));

        assert_eq!(node.get_by_type(ROLE), ResultSet::from_iter([ObjectType::Node(role)]));
        assert_eq!(
            node.get_by_identifier("http://example.org/deep"),
            Some(&ObjectType::NamedNode(named))
        );
        assert_eq!(node.get_by_identifier("http://example.org/none"), None);
        assert_eq!(node.get_relations().len(), 2);
        assert_eq!((&node).into_iter().count(), 2);
    }

    #[test]
    fn test_get_first_and_last() {
        let mods = Node::typed(NAME).unwrap();
        let mut node = Node::new();
        assert!(node.get_first().is_empty());
        assert!(node.get_last().is_empty());

        node.add(mods.clone()).add("javac.exe");
        node.put(to_url(2), NodeReference::new("https://www.kitodo.org/").unwrap());
        assert_eq!(node.get_first(), ResultSet::from_iter([ObjectType::from(mods)]));
        assert_eq!(node.get_last().len(), 2);
        assert!(node.get_last().strings().contains("javac.exe"));
    }

    #[test]
    fn test_get_of_type() {
        let personal = Node::typed(NAME).unwrap().with(TYPE, "personal");
        let ambiguous = Node::typed(NAME)
            .unwrap()
            .with(RDF_TYPE, NodeReference::new(ROLE).unwrap());
        let node = Node::new()
            .with(ROLE, personal.clone())
            .with(ROLE, ambiguous)
            .with(ROLE, Node::typed(ROLE).unwrap())
            .with(ROLE, "aut");

        assert_eq!(node.get_of_type(ROLE, NAME), ResultSet::from_iter([ObjectType::from(personal)]));
        assert!(node.get_of_type(NAME, NAME).is_empty());
    }

    #[test]
    fn test_get_identified_by() {
        let family = Node::typed(NAME_PART).unwrap().with(TYPE, "family").with_item("Pineau");
        let given = Node::typed(NAME_PART).unwrap().with(TYPE, "given").with_item("Severin");
        let node = Node::new()
            .with(NAME_PART, family.clone())
            .with(NAME_PART, given)
            .with(ROLE, Node::new().with(TYPE, "family"));

        assert_eq!(
            node.get_identified_by(NAME_PART, TYPE, "family"),
            ResultSet::from_iter([ObjectType::from(family)])
        );
        assert_eq!(node.get_identified_by(ANY_PREDICATE, TYPE, "family").len(), 2);
        assert!(node.get_identified_by(NAME_PART, TYPE, "corporate").is_empty());
    }

    #[test]
    fn test_get_by_type_and_id() {
        let record = Node::typed(NAME).unwrap().with(ROLE, "PPN1234");
        let node = Node::new()
            .with_item(record.clone())
            .with_item(Node::typed(NAME).unwrap().with(ROLE, "PPN5678"))
            .with_item(Node::typed(NAME_PART).unwrap().with(ROLE, "PPN1234"));

        assert_eq!(
            node.get_by_type_and_id(NAME, ROLE, "PPN1234"),
            ResultSet::from_iter([ObjectType::from(record)])
        );
        assert!(node.get_by_type_and_id(NAME, TYPE, "PPN1234").is_empty());
    }

    #[test]
    fn test_about_is_not_a_relation() {
        let mut node = Node::new();
        let err = node.try_put(RDF_ABOUT, "http://example.org/a").unwrap_err();
        assert_eq!(err, GraphError::ReservedPredicate(RDF_ABOUT.to_string()));
        assert_eq!(err.kind(), ErrorKind::InvalidConstruction);

        node.put(RDF_ABOUT, "x").put_all(RDF_ABOUT, ["y"]);
        assert!(node.is_empty());
        assert!(node.try_put(TYPE, "personal").is_ok());
    }

    #[test]
    fn test_as_unordered() {
        let node = Node::new()
            .with_item(Node::typed(NAME).unwrap().with(RDF_VALUE, "Max"))
            .with_item(Node::typed(NAME).unwrap().with(RDF_VALUE, "Moritz"))
            .with(ROLE, "foobar");

        let unordered = node.as_unordered(false);
        let unordered = unordered.as_node_type().unwrap().content();
        assert_eq!(unordered.first(), None);
        assert_eq!(unordered.last(), 0);
        assert_eq!(unordered.get(NAME).strings().len(), 2);
        assert_eq!(unordered.get(ROLE).len(), 1);
    }

    #[test]
    fn test_as_unordered_moves_items() {
        let untyped = Node::new().with(TYPE, "personal");
        let node = Node::typed(NAME)
            .unwrap()
            .with_item("Pineau")
            .with_item(untyped.clone())
            .with_item(Node::typed(NAME_PART).unwrap().with_item("Severin"));

        let unordered = node.as_unordered(false);
        let content = unordered.as_node_type().unwrap().content();
        assert!(content.has_type(NAME));
        assert_eq!(content.get(RDF_VALUE), ResultSet::from_iter([ObjectType::from("Pineau")]));
        assert_eq!(content.get(to_url(2)), ResultSet::from_iter([ObjectType::from(untyped)]));
        assert_eq!(content.get(NAME_PART), ResultSet::from_iter([ObjectType::from("Severin")]));

        let without_type = node.as_unordered(true);
        assert!(!without_type.as_node_type().unwrap().content().contains_key(RDF_TYPE));

        let lone = Node::typed(NAME).unwrap().with_item("Pineau");
        assert_eq!(lone.as_unordered(true), ObjectType::from("Pineau"));
        assert!(lone.as_unordered(false).is_node_type());
    }

    #[test]
    fn test_display_tree() {
        let node = Node::typed(NAME)
            .unwrap()
            .with_item(Node::new().with(TYPE, "personal"))
            .with_item("Pineau");

        let text = node.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type = http://www.loc.gov/mods/v3#name",
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#_1 {",
                "  http://www.loc.gov/mods/v3#type = \"personal\"",
                "}",
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#_2 = \"Pineau\"",
            ]
        );
    }
}
