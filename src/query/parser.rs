//! Graph path parser using Pest
//!
//! Bare tokens are resolved as follows:
//! - `prefix:local` with a registered prefix expands to an IRI
//! - a token with a scheme followed by `//` is taken as an IRI
//! - a name-like prefix that is not registered is an error
//! - anything else is a plain literal (only in object position)

use super::ast::{GraphPath, LocationStep};
use crate::graph::{GraphResult, LangString, Literal, Node, NodeReference, ObjectType};
use crate::rdf::vocabulary::ANY_PREDICATE;
use crate::rdf::NamespaceManager;
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use thiserror::Error;
use tracing::debug;

#[derive(Parser)]
#[grammar = "query/graph_path.pest"]
struct GraphPathParser;

/// Parser errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Pest parsing error
    #[error("Parse error: {0}")]
    PestError(#[from] pest::error::Error<Rule>),

    /// Semantic error
    #[error("Semantic error: {0}")]
    SemanticError(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a graph path, resolving prefixes against `namespaces`
pub fn parse_graph_path(input: &str, namespaces: &NamespaceManager) -> GraphResult<GraphPath> {
    let pairs = GraphPathParser::parse(Rule::path, input).map_err(ParseError::from)?;

    let mut steps = Vec::new();
    for pair in pairs {
        if pair.as_rule() == Rule::path {
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::step => steps.push(parse_step(inner, namespaces)?),
                    Rule::EOI => break,
                    _ => {}
                }
            }
        }
    }

    // A fixed predicate can only fetch the final values
    if let Some(position) = steps
        .iter()
        .position(|step| matches!(step, LocationStep::Relation { .. }))
    {
        if position + 1 != steps.len() {
            return Err(ParseError::SemanticError(format!(
                "predicate step {} must be the last step",
                position + 1
            ))
            .into());
        }
    }

    debug!("Compiled graph path with {} steps: {}", steps.len(), input);
    GraphPath::from_steps(steps)
}

fn parse_step(pair: Pair<Rule>, namespaces: &NamespaceManager) -> GraphResult<LocationStep> {
    let mut predicate = None;
    let mut condition = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::any_predicate => predicate = Some(ANY_PREDICATE.to_string()),
            Rule::iri => predicate = Some(parse_iri(inner, namespaces)?),
            Rule::condition => condition = Some(parse_condition(inner, namespaces)?),
            _ => {}
        }
    }

    match predicate {
        Some(predicate) if predicate == ANY_PREDICATE => Ok(LocationStep::Any { condition }),
        Some(predicate) => Ok(LocationStep::Relation { predicate, condition }),
        None => Err(ParseError::SemanticError("step without predicate".to_string()).into()),
    }
}

fn parse_condition(pair: Pair<Rule>, namespaces: &NamespaceManager) -> GraphResult<Node> {
    let mut node = Node::new();
    for entry in pair.into_inner() {
        if entry.as_rule() != Rule::entry {
            continue;
        }
        let mut predicate = None;
        let mut object = None;
        for inner in entry.into_inner() {
            match inner.as_rule() {
                Rule::any_predicate => predicate = Some(ANY_PREDICATE.to_string()),
                Rule::iri => predicate = Some(parse_iri(inner, namespaces)?),
                Rule::object => object = Some(parse_object(inner, namespaces)?),
                _ => {}
            }
        }
        match (predicate, object) {
            (Some(predicate), Some(object)) => {
                node.try_put(predicate, object)?;
            }
            _ => {
                return Err(
                    ParseError::SemanticError("incomplete condition entry".to_string()).into(),
                )
            }
        }
    }
    Ok(node)
}

fn parse_object(pair: Pair<Rule>, namespaces: &NamespaceManager) -> GraphResult<ObjectType> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::SemanticError("empty object".to_string()))?;

    match inner.as_rule() {
        Rule::condition => Ok(parse_condition(inner, namespaces)?.into()),
        Rule::literal => parse_literal(inner, namespaces),
        Rule::iri_ref => Ok(NodeReference::new(iri_body(inner))?.into()),
        Rule::token => match expand_token(inner.as_str(), namespaces)? {
            Some(iri) => Ok(NodeReference::new(iri)?.into()),
            None => Ok(Literal::create(inner.as_str(), None)),
        },
        rule => Err(ParseError::SemanticError(format!("unexpected {:?} in object", rule)).into()),
    }
}

fn parse_literal(pair: Pair<Rule>, namespaces: &NamespaceManager) -> GraphResult<ObjectType> {
    let mut value = String::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::string_body => value = unescape(inner.as_str()),
            Rule::lang_tag => {
                let language = inner.as_str().trim_start_matches('@');
                return Ok(LangString::new(value, Some(language))?.into());
            }
            Rule::datatype => {
                let datatype = parse_iri(inner, namespaces)?;
                return Ok(Literal::new(value, Some(&datatype))?.into());
            }
            _ => {}
        }
    }
    Ok(Literal::plain(value).into())
}

/// Resolve an `iri` or `datatype` pair, which must denote an IRI
fn parse_iri(pair: Pair<Rule>, namespaces: &NamespaceManager) -> GraphResult<String> {
    let inner = pair
        .into_inner()
        .next()
        .ok_or_else(|| ParseError::SemanticError("empty IRI".to_string()))?;

    let iri = match inner.as_rule() {
        Rule::iri_ref => iri_body(inner).to_string(),
        _ => expand_token(inner.as_str(), namespaces)?.ok_or_else(|| {
            ParseError::SemanticError(format!("expected an IRI, found {:?}", inner.as_str()))
        })?,
    };
    Ok(NodeReference::new(iri)?.as_ref().to_string())
}

fn iri_body(pair: Pair<Rule>) -> &str {
    pair.into_inner().next().map_or("", |body| body.as_str())
}

/// Expand a bare token to an IRI, `None` if it is plain text
fn expand_token(token: &str, namespaces: &NamespaceManager) -> GraphResult<Option<String>> {
    let Some((prefix, local)) = token.split_once(':') else {
        return Ok(None);
    };
    if local.starts_with("//") {
        return Ok(Some(token.to_string()));
    }
    if !is_prefix_name(prefix) {
        return Ok(None);
    }
    Ok(Some(namespaces.expand(token)?))
}

fn is_prefix_name(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            first.is_ascii_alphabetic()
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        }
    }
}

fn unescape(text: &str) -> String {
    let mut value = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some(escaped) => value.push(escaped),
            None => value.push('\\'),
        }
    }
    value
}
