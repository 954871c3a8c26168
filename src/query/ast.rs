//! Graph path representation
//!
//! A [`GraphPath`] is itself stored as a chain of nodes, one per step:
//!
//! ```text
//! step := { PATH_PREDICATE → <predicate or ANY_PREDICATE>,
//!           PATH_OBJECT    → condition,    (optional)
//!           PATH_TO        → next step }   (optional)
//! ```
//!
//! so two paths are equal exactly when their step nodes are.

use super::parser::parse_graph_path;
use crate::graph::{GraphError, GraphResult, Node, NodeReference, ObjectType};
use crate::rdf::vocabulary::{ANY_PREDICATE, PATH_OBJECT, PATH_PREDICATE, PATH_TO};
use crate::rdf::NamespaceManager;
use std::fmt;
use std::str::FromStr;

/// One step of a graph path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationStep {
    /// Descend through every relation
    Any { condition: Option<Node> },
    /// Descend through one relation
    Relation {
        predicate: String,
        condition: Option<Node>,
    },
}

impl LocationStep {
    /// Wildcard step without condition
    pub fn any() -> Self {
        LocationStep::Any { condition: None }
    }

    /// Wildcard step whose candidates must match `condition`
    pub fn any_matching(condition: Node) -> Self {
        LocationStep::Any {
            condition: Some(condition),
        }
    }

    /// Step through `predicate`
    pub fn relation(predicate: impl Into<String>) -> Self {
        LocationStep::Relation {
            predicate: predicate.into(),
            condition: None,
        }
    }

    /// Step through `predicate` whose candidates must match `condition`
    pub fn relation_matching(predicate: impl Into<String>, condition: Node) -> Self {
        LocationStep::Relation {
            predicate: predicate.into(),
            condition: Some(condition),
        }
    }

    pub fn predicate(&self) -> &str {
        match self {
            LocationStep::Any { .. } => ANY_PREDICATE,
            LocationStep::Relation { predicate, .. } => predicate,
        }
    }

    pub fn condition(&self) -> Option<&Node> {
        match self {
            LocationStep::Any { condition } | LocationStep::Relation { condition, .. } => {
                condition.as_ref()
            }
        }
    }
}

/// A compiled graph path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphPath {
    first: Node,
}

impl GraphPath {
    /// Build a path from its steps. At least one step is required.
    pub fn from_steps(steps: impl IntoIterator<Item = LocationStep>) -> GraphResult<Self> {
        let steps: Vec<LocationStep> = steps.into_iter().collect();

        let mut next: Option<Node> = None;
        for step in steps.into_iter().rev() {
            let (predicate, condition) = match step {
                LocationStep::Any { condition } => (ANY_PREDICATE.to_string(), condition),
                LocationStep::Relation { predicate, condition } => (predicate, condition),
            };

            let mut node = Node::new();
            node.put(PATH_PREDICATE, NodeReference::new(predicate)?);
            if let Some(condition) = condition.filter(|condition| !condition.is_empty()) {
                node.put(PATH_OBJECT, condition);
            }
            if let Some(following) = next.take() {
                node.put(PATH_TO, following);
            }
            next = Some(node);
        }

        next.map(|first| GraphPath { first })
            .ok_or(GraphError::EmptyPath)
    }

    /// Parse path text, resolving prefixes against `namespaces`
    pub fn parse(text: &str, namespaces: &NamespaceManager) -> GraphResult<Self> {
        parse_graph_path(text, namespaces)
    }

    /// The first step node of the chain
    pub fn as_node(&self) -> &Node {
        &self.first
    }

    /// Decode the steps of this path
    pub fn steps(&self) -> Vec<LocationStep> {
        self.step_refs()
            .map(|step| {
                let condition = step.condition.and_then(|condition| match condition {
                    ObjectType::Node(node) => Some(node.clone()),
                    _ => None,
                });
                if step.predicate == ANY_PREDICATE {
                    LocationStep::Any { condition }
                } else {
                    LocationStep::Relation {
                        predicate: step.predicate.to_string(),
                        condition,
                    }
                }
            })
            .collect()
    }

    pub(crate) fn first_step(&self) -> StepRef<'_> {
        StepRef::decode(&self.first)
    }

    fn step_refs(&self) -> impl Iterator<Item = StepRef<'_>> {
        std::iter::successors(Some(self.first_step()), |step| step.next.map(StepRef::decode))
    }
}

impl FromStr for GraphPath {
    type Err = GraphError;

    /// Parse with the default prefixes
    fn from_str(text: &str) -> GraphResult<Self> {
        GraphPath::parse(text, &NamespaceManager::new())
    }
}

impl fmt::Display for GraphPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.step_refs().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if step.predicate == ANY_PREDICATE {
                f.write_str("*")?;
            } else {
                write!(f, "<{}>", step.predicate)?;
            }
            if let Some(ObjectType::Node(condition)) = step.condition {
                f.write_str(" ")?;
                write_condition(f, condition)?;
            }
        }
        Ok(())
    }
}

fn write_condition(f: &mut fmt::Formatter<'_>, condition: &Node) -> fmt::Result {
    f.write_str("[")?;
    let mut first = true;
    for (relation, objects) in condition.entries() {
        for object in objects {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            if relation == ANY_PREDICATE {
                f.write_str("* ")?;
            } else {
                write!(f, "<{}> ", relation)?;
            }
            write_object(f, object)?;
        }
    }
    f.write_str("]")
}

fn write_object(f: &mut fmt::Formatter<'_>, object: &ObjectType) -> fmt::Result {
    match object {
        ObjectType::Node(node) => write_condition(f, node),
        ObjectType::NamedNode(_) | ObjectType::NodeReference(_) => {
            write!(f, "<{}>", object.identifier().unwrap_or_default())
        }
        ObjectType::Literal(literal) => {
            write_quoted(f, literal.value())?;
            match literal.datatype() {
                Some(datatype) => write!(f, "^^<{}>", datatype),
                None => Ok(()),
            }
        }
        ObjectType::LangString(lang_string) => {
            write_quoted(f, lang_string.value())?;
            write!(f, "@{}", lang_string.language())
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

/// Borrowed view of one step node
#[derive(Debug, Clone, Copy)]
pub(crate) struct StepRef<'a> {
    pub predicate: &'a str,
    pub condition: Option<&'a ObjectType>,
    pub next: Option<&'a Node>,
}

impl<'a> StepRef<'a> {
    pub fn decode(step: &'a Node) -> Self {
        StepRef {
            predicate: step
                .values(PATH_PREDICATE)
                .find_map(ObjectType::identifier)
                .unwrap_or(ANY_PREDICATE),
            condition: step.values(PATH_OBJECT).next(),
            next: step
                .values(PATH_TO)
                .find_map(ObjectType::as_node_type)
                .map(|node| node.content()),
        }
    }
}
