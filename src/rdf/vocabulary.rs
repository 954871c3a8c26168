//! Well-known vocabulary IRIs and positional predicate helpers
//!
//! Positional predicates (`rdf:_1`, `rdf:_2`, ...) encode ordered containment
//! inside an otherwise unordered node.

/// RDF syntax namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDF schema namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XML schema datatypes namespace
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
/// XML namespace (for `xml:lang`)
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace#";

/// Subject identity in RDF/XML; never a relation of a node
pub const RDF_ABOUT: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#about";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
pub const RDF_PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";
pub const XML_LANG: &str = "http://www.w3.org/XML/1998/namespace#lang";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Namespace of the graph-path step markers
pub const GRAPH_PATH_NS: &str = "urn:x-graph-path:";
/// Wildcard predicate, standing for every relation of a node
pub const ANY_PREDICATE: &str = "urn:x-graph-path:anyPredicate";
/// Step marker: the condition a step's candidates must match
pub const PATH_OBJECT: &str = "urn:x-graph-path:object";
/// Step marker: the predicate a step descends through
pub const PATH_PREDICATE: &str = "urn:x-graph-path:predicate";
/// Step marker: the following step
pub const PATH_TO: &str = "urn:x-graph-path:to";

/// XSD datatypes whose literals render without quotes
const XSD_NUMERIC: &[&str] = &[
    "byte",
    "decimal",
    "double",
    "float",
    "int",
    "integer",
    "long",
    "negativeInteger",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "positiveInteger",
    "short",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
];

/// First index of the positional predicates
pub const FIRST_INDEX: u64 = 1;

/// Positional predicate IRI for an index (`rdf:_n`)
pub fn to_url(index: u64) -> String {
    format!("{}_{}", RDF_NS, index)
}

/// Index of a positional predicate, or `None` if `predicate` is not one
pub fn sequence_number_of(predicate: &str) -> Option<u64> {
    let digits = predicate.strip_prefix(RDF_NS)?.strip_prefix('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) || digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

/// Whether `datatype` is one of the numeric XSD datatypes
pub fn is_numeric_datatype(datatype: &str) -> bool {
    datatype
        .strip_prefix(XSD_NS)
        .map_or(false, |local| XSD_NUMERIC.contains(&local))
}
