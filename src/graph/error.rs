//! Errors raised by the graph engine

use crate::query::parser::ParseError;
use crate::rdf::PrefixError;
use thiserror::Error;

/// The four outcomes callers can distinguish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// At least one qualifying value was required, none was found
    NotFound,
    /// At most one qualifying value was required, several were found
    Ambiguous,
    /// An argument was present but violated a construction contract
    InvalidConstruction,
    /// A required argument was absent
    MissingArgument,
}

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("No {0} found")]
    NotFound(&'static str),

    #[error("Ambiguous {what}: {count} candidates")]
    Ambiguous { what: &'static str, count: usize },

    #[error("Invalid IRI: {0:?}")]
    InvalidIri(String),

    #[error("Node type must not be empty")]
    EmptyType,

    #[error("Datatype {0} is reserved for language-tagged strings")]
    ReservedDatatype(String),

    #[error("{0} cannot be used as a relation, use a named node instead")]
    ReservedPredicate(String),

    #[error("Language tag must not be empty")]
    EmptyLanguage,

    #[error("Language tag is missing")]
    MissingLanguage,

    #[error(transparent)]
    Prefix(#[from] PrefixError),

    #[error("Invalid graph path: {0}")]
    Parse(#[from] ParseError),

    #[error("Graph path must have at least one step")]
    EmptyPath,

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}

impl GraphError {
    /// Map onto the coarse error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::NotFound(_) => ErrorKind::NotFound,
            GraphError::Ambiguous { .. } => ErrorKind::Ambiguous,
            GraphError::MissingLanguage => ErrorKind::MissingArgument,
            GraphError::InvalidIri(_)
            | GraphError::EmptyType
            | GraphError::ReservedDatatype(_)
            | GraphError::ReservedPredicate(_)
            | GraphError::EmptyLanguage
            | GraphError::Prefix(_)
            | GraphError::Parse(_)
            | GraphError::EmptyPath
            | GraphError::InvalidModel(_) => ErrorKind::InvalidConstruction,
        }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
