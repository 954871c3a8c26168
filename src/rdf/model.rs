//! Conversion between node trees and flat RDF graphs
//!
//! A node tree becomes a set of triples: anonymous nodes become blank
//! nodes, named nodes become IRI subjects. Reading a graph back starts from
//! every subject that is never used as an object.

use super::vocabulary::XSD_STRING;
use crate::graph::{
    GraphError, GraphResult, IdentifiableNode, LangString, Literal, NamedNode, Node,
    NodeReference, ObjectType, ResultSet,
};
use indexmap::IndexMap;
use oxrdf::{
    BlankNode, Graph, Literal as OxLiteral, NamedNode as OxNamedNode, Subject, Term, Triple,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use tracing::{debug, warn};

/// A flat set of RDF triples
#[derive(Debug, Clone)]
pub struct Model {
    graph: Graph,
}

impl Model {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Number of triples
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Insert a triple, returning whether it was new
    pub fn insert(&mut self, triple: &Triple) -> bool {
        self.graph.insert(triple)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    fn write_node(&mut self, subject: Subject, node: &Node) {
        for (relation, objects) in node.entries() {
            let predicate = OxNamedNode::new_unchecked(relation);
            for object in objects {
                let term = self.write_object(object);
                self.graph
                    .insert(&Triple::new(subject.clone(), predicate.clone(), term));
            }
        }
    }

    fn write_object(&mut self, object: &ObjectType) -> Term {
        match object {
            ObjectType::Node(node) => {
                let blank = BlankNode::default();
                self.write_node(blank.clone().into(), node);
                blank.into()
            }
            ObjectType::NamedNode(named) => {
                let iri = OxNamedNode::new_unchecked(named.identifier());
                self.write_node(iri.clone().into(), named.node());
                iri.into()
            }
            ObjectType::NodeReference(reference) => {
                OxNamedNode::new_unchecked(reference.identifier()).into()
            }
            ObjectType::Literal(literal) => match literal.datatype() {
                None => OxLiteral::new_simple_literal(literal.value()).into(),
                Some(datatype) => OxLiteral::new_typed_literal(
                    literal.value(),
                    OxNamedNode::new_unchecked(datatype),
                )
                .into(),
            },
            ObjectType::LangString(lang_string) => OxLiteral::new_language_tagged_literal_unchecked(
                lang_string.value(),
                lang_string.language(),
            )
            .into(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Graph> for Model {
    fn from(graph: Graph) -> Self {
        Self { graph }
    }
}

/// N-Triples
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}

impl Node {
    /// Convert this node tree into triples, rooted at a blank node.
    ///
    /// Reading the model back with [`ResultSet::create_from`] yields this
    /// node again, except where triples cannot tell values apart:
    /// - a named node without content is written as a bare IRI and comes
    ///   back as a node reference;
    /// - an IRI with statements anywhere in the tree comes back as a named
    ///   node carrying them at every occurrence, including where the tree
    ///   held a node reference;
    /// - an empty node writes no triples and nothing comes back.
    pub fn to_model(&self) -> Model {
        let mut model = Model::new();
        model.write_node(BlankNode::default().into(), self);
        model
    }
}

impl NamedNode {
    /// Convert this node tree into triples, rooted at the node's IRI. The
    /// same losses as for [`Node::to_model`] apply.
    pub fn to_model(&self) -> Model {
        let mut model = Model::new();
        model.write_node(OxNamedNode::new_unchecked(self.identifier()).into(), self.node());
        model
    }
}

impl ResultSet {
    /// Convert all node-shaped elements into one model
    pub fn to_model(&self) -> Model {
        let mut model = Model::new();
        for object in self.iter() {
            if object.is_node_type() {
                model.write_object(object);
            }
        }
        model
    }

    /// Rebuild node trees from a model.
    ///
    /// Every subject that is never an object becomes one element: an
    /// anonymous node for blank subjects, a named node otherwise. IRIs
    /// without statements of their own, and IRIs already on the current
    /// descent, become node references. Every other occurrence of an IRI
    /// becomes a named node with its statements, so a tree that held both
    /// a reference and a named node for one IRI reads back as two named
    /// nodes. An empty model reads as an empty result.
    ///
    /// With `strict`, blank nodes that are shared, cyclic or unreachable
    /// from any root are rejected. Otherwise shared blank nodes are
    /// duplicated and unreachable statements dropped with a warning.
    pub fn create_from(model: &Model, strict: bool) -> GraphResult<ResultSet> {
        let mut statements: IndexMap<Subject, Vec<(String, Term)>> = IndexMap::new();
        let mut incoming: FxHashMap<Subject, usize> = FxHashMap::default();

        for triple in model.graph.iter() {
            let object = triple.object.into_owned();
            if let Some(target) = subject_of(&object) {
                *incoming.entry(target).or_insert(0) += 1;
            }
            statements
                .entry(triple.subject.into_owned())
                .or_default()
                .push((triple.predicate.as_str().to_string(), object));
        }

        let mut reader = ModelReader {
            statements: &statements,
            incoming: &incoming,
            strict,
            visited: FxHashSet::default(),
            descent: Vec::new(),
        };

        let mut result = ResultSet::new();
        for subject in statements.keys() {
            if incoming.contains_key(subject) {
                continue;
            }
            let node = reader.read_subject(subject)?;
            match subject {
                Subject::NamedNode(iri) => result.add(named_node(iri, node)?),
                Subject::BlankNode(_) => result.add(node),
                #[allow(unreachable_patterns)]
                _ => return Err(unsupported_term()),
            }
        }

        let unreached = statements
            .keys()
            .filter(|subject| !reader.visited.contains(*subject))
            .count();
        if unreached > 0 {
            reader.lenient(format!(
                "{} subjects are not reachable from any root",
                unreached
            ))?;
        }

        debug!(
            "Read {} roots from model with {} triples",
            result.len(),
            model.len()
        );
        Ok(result)
    }
}

struct ModelReader<'a> {
    statements: &'a IndexMap<Subject, Vec<(String, Term)>>,
    incoming: &'a FxHashMap<Subject, usize>,
    strict: bool,
    visited: FxHashSet<Subject>,
    descent: Vec<Subject>,
}

impl<'a> ModelReader<'a> {
    fn read_subject(&mut self, subject: &Subject) -> GraphResult<Node> {
        let statements = self.statements;
        let mut node = Node::new();
        let Some(entries) = statements.get(subject) else {
            return Ok(node);
        };

        self.visited.insert(subject.clone());
        self.descent.push(subject.clone());
        for (predicate, object) in entries {
            let value = self.read_object(object)?;
            if let Err(err) = node.try_put(predicate, value) {
                self.lenient(err.to_string())?;
            }
        }
        self.descent.pop();
        Ok(node)
    }

    fn read_object(&mut self, term: &Term) -> GraphResult<ObjectType> {
        match term {
            Term::Literal(literal) => read_literal(literal),
            Term::NamedNode(iri) => {
                let subject = Subject::from(iri.clone());
                if !self.statements.contains_key(&subject) || self.descent.contains(&subject) {
                    return Ok(NodeReference::new(iri.as_str())?.into());
                }
                let node = self.read_subject(&subject)?;
                Ok(named_node(iri, node)?.into())
            }
            Term::BlankNode(blank) => {
                let subject = Subject::from(blank.clone());
                if self.descent.contains(&subject) {
                    self.lenient(format!("blank node _:{} is part of a cycle", blank.as_str()))?;
                    return Ok(Node::new().into());
                }
                if self.incoming.get(&subject).copied().unwrap_or(0) > 1 {
                    self.lenient(format!(
                        "blank node _:{} is shared between several parents",
                        blank.as_str()
                    ))?;
                }
                Ok(self.read_subject(&subject)?.into())
            }
            #[allow(unreachable_patterns)]
            _ => Err(unsupported_term()),
        }
    }

    /// Fail in strict mode, warn otherwise
    fn lenient(&self, message: String) -> GraphResult<()> {
        if self.strict {
            Err(GraphError::InvalidModel(message))
        } else {
            warn!("{}", message);
            Ok(())
        }
    }
}

fn named_node(iri: &OxNamedNode, node: Node) -> GraphResult<NamedNode> {
    let mut named = NamedNode::new(iri.as_str())?;
    *named.node_mut() = node;
    Ok(named)
}

fn read_literal(literal: &OxLiteral) -> GraphResult<ObjectType> {
    if let Some(language) = literal.language() {
        return Ok(LangString::new(literal.value(), Some(language))?.into());
    }
    let datatype = literal.datatype().as_str();
    if datatype == XSD_STRING {
        Ok(Literal::plain(literal.value()).into())
    } else {
        Ok(Literal::new(literal.value(), Some(datatype))?.into())
    }
}

fn subject_of(term: &Term) -> Option<Subject> {
    match term {
        Term::NamedNode(iri) => Some(iri.clone().into()),
        Term::BlankNode(blank) => Some(blank.clone().into()),
        _ => None,
    }
}

fn unsupported_term() -> GraphError {
    GraphError::InvalidModel("RDF-star terms are not supported".to_string())
}
