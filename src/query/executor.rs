//! Graph path evaluation
//!
//! The root a path is evaluated against behaves like the single child of a
//! virtual document: a leading wildcard step selects the root itself when it
//! matches the step's condition. A leading predicate step descends from the
//! root directly.

use super::ast::{GraphPath, StepRef};
use crate::graph::{Node, ObjectType, ResultSet};
use crate::rdf::vocabulary::ANY_PREDICATE;
use tracing::{debug, trace};

/// Evaluate `path` against `root`
pub fn find(root: &Node, path: &GraphPath) -> ResultSet {
    let mut result = ResultSet::new();
    let first = path.first_step();

    if first.predicate == ANY_PREDICATE {
        let selected = first
            .condition
            .map_or(true, |condition| root.matches(condition));
        trace!("Root selected by first step: {}", selected);
        if selected {
            match first.next {
                Some(next) => walk(root, StepRef::decode(next), &mut result),
                None => result.add(root.clone()),
            }
        }
    } else {
        walk(root, first, &mut result);
    }

    debug!("Graph path {} found {} values", path, result.len());
    result
}

fn walk(position: &Node, step: StepRef<'_>, result: &mut ResultSet) {
    let relations = [step.predicate];
    let conditions: &[ObjectType] = match step.condition {
        Some(condition) => std::slice::from_ref(condition),
        None => &[],
    };

    for candidate in position.matching(&relations, conditions) {
        trace!("Step {} matched {}", step.predicate, candidate);
        match step.next {
            Some(next) => {
                if let Some(node) = candidate.as_node_type() {
                    walk(node.content(), StepRef::decode(next), result);
                }
            }
            None => result.add(candidate.clone()),
        }
    }
}
