//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation and the
//! string-level IRI helpers (concatenation, namespace/local-name splitting).

use super::vocabulary::{RDFS_NS, RDF_NS, XML_NS, XSD_NS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Not a compact IRI
    #[error("Not a compact IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager: the prefix table used by the path parser and by
/// literal rendering.
///
/// Serializes as a plain `{ prefix: iri }` map so it can be loaded from the
/// embedding application's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: HashMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();

        mgr.add_prefix("rdf", RDF_NS);
        mgr.add_prefix("rdfs", RDFS_NS);
        mgr.add_prefix("xsd", XSD_NS);
        mgr.add_prefix("xml", XML_NS);
        mgr.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        mgr.add_prefix("foaf", "http://xmlns.com/foaf/0.1/");
        mgr.add_prefix("dc", "http://purl.org/dc/elements/1.1/");
        mgr.add_prefix("dcterms", "http://purl.org/dc/terms/");

        mgr
    }

    /// Create a namespace manager without any prefixes
    pub fn empty() -> Self {
        Self {
            prefixes: HashMap::new(),
        }
    }

    /// Add a prefix
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Builder-style variant of [`add_prefix`](Self::add_prefix)
    pub fn with_prefix(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.add_prefix(prefix, iri);
        self
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        if let Some(pos) = compact_iri.find(':') {
            let prefix = &compact_iri[..pos];
            let local = &compact_iri[pos + 1..];
            let iri = self.get_iri(prefix)?;
            Ok(concat(iri, local))
        } else {
            Err(PrefixError::InvalidIri(compact_iri.to_string()))
        }
    }

    /// Compact an IRI using the longest matching namespace. Prefixes bound
    /// to the same namespace resolve to the alphabetically first one.
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, namespace_iri)| {
                iri.len() > namespace_iri.len() && iri.starts_with(namespace_iri.as_str())
            })
            .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)))
            .map(|(prefix, namespace_iri)| format!("{}:{}", prefix, &iri[namespace_iri.len()..]))
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NamespaceManager {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mgr = Self::empty();
        for (prefix, iri) in iter {
            mgr.add_prefix(prefix, iri);
        }
        mgr
    }
}

/// Join a namespace and a local name, inserting `#` unless the namespace
/// already ends in `/` or `#`
pub fn concat(namespace: &str, local_name: &str) -> String {
    let separator = !(namespace.ends_with('/') || namespace.ends_with('#'));
    let mut iri = String::with_capacity(namespace.len() + usize::from(separator) + local_name.len());
    iri.push_str(namespace);
    if separator {
        iri.push('#');
    }
    iri.push_str(local_name);
    iri
}

/// Local name of an IRI: everything after the first `#`, otherwise after
/// the last `/`
pub fn local_name_of(iri: &str) -> &str {
    match iri.find('#') {
        Some(pos) => &iri[pos + 1..],
        None => iri.rfind('/').map_or(iri, |pos| &iri[pos + 1..]),
    }
}

/// Namespace part of an IRI, including the trailing separator
pub fn namespace_of(iri: &str) -> &str {
    &iri[..iri.len() - local_name_of(iri).len()]
}
