//! Literal values
//!
//! A [`Literal`] is a scalar with an optional datatype. A [`LangString`] is a
//! literal whose datatype is implicitly `rdf:langString` and which carries a
//! language tag.

use super::error::{GraphError, GraphResult};
use super::identifiable::{is_absolute_iri, validate_iri, NodeReference};
use super::node::Node;
use super::object::ObjectType;
use crate::rdf::vocabulary::{
    is_numeric_datatype, RDF_LANG_STRING, RDF_PLAIN_LITERAL, RDF_TYPE, RDF_VALUE, XML_LANG,
    XSD_STRING,
};
use crate::rdf::NamespaceManager;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

static DEFAULT_NAMESPACES: LazyLock<NamespaceManager> = LazyLock::new(NamespaceManager::new);

/// A literal value. `datatype == None` is a plain literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    value: String,
    datatype: Option<String>,
}

impl Literal {
    /// Create a plain literal
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
        }
    }

    /// Create a literal with an optional datatype.
    ///
    /// An absent or empty datatype, `rdf:PlainLiteral` or `xsd:string`
    /// yields a plain literal. `rdf:langString` is reserved for
    /// [`LangString`].
    pub fn new(value: impl Into<String>, datatype: Option<&str>) -> GraphResult<Self> {
        let datatype = match datatype {
            None | Some("") | Some(RDF_PLAIN_LITERAL) | Some(XSD_STRING) => None,
            Some(RDF_LANG_STRING) => {
                return Err(GraphError::ReservedDatatype(RDF_LANG_STRING.to_string()))
            }
            Some(datatype) => {
                validate_iri(datatype)?;
                Some(datatype.to_string())
            }
        };
        Ok(Self {
            value: value.into(),
            datatype,
        })
    }

    /// Create the object a bare string stands for.
    ///
    /// Without a language, an absolute IRI becomes a [`NodeReference`] and
    /// anything else a plain literal. With a language, a [`LangString`].
    pub fn create(value: impl Into<String>, lang: Option<&str>) -> ObjectType {
        let value = value.into();
        match lang {
            Some(lang) if !lang.is_empty() => LangString {
                value,
                language: lang.to_string(),
            }
            .into(),
            _ if is_absolute_iri(&value) => NodeReference::new_unchecked(value).into(),
            _ => Literal::plain(value).into(),
        }
    }

    /// Like [`create`](Self::create), but never yields a node reference
    pub fn create_literal(value: impl Into<String>, lang: Option<&str>) -> ObjectType {
        match lang {
            Some(lang) if !lang.is_empty() => LangString {
                value: value.into(),
                language: lang.to_string(),
            }
            .into(),
            _ => Literal::plain(value).into(),
        }
    }

    /// Get the lexical value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the datatype, `None` for plain literals
    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.datatype.is_none()
    }

    /// Type IRI this literal reports through `rdf:type`
    pub fn type_iri(&self) -> &str {
        self.datatype.as_deref().unwrap_or(RDF_PLAIN_LITERAL)
    }

    /// A plain condition constrains the value only; a typed one both fields.
    pub(crate) fn matches_literal(&self, condition: &Literal) -> bool {
        self.value == condition.value
            && condition
                .datatype
                .as_ref()
                .map_or(true, |datatype| self.datatype.as_ref() == Some(datatype))
    }

    pub(crate) fn matches_node(&self, condition: &Node) -> bool {
        let type_matches = |iri: &str| {
            iri == self.type_iri() || (self.is_plain() && iri == XSD_STRING)
        };
        matches_virtual_fields(&self.value, type_matches, None, condition)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = escape_controls(&self.value);
        match self.datatype.as_deref() {
            None => write!(f, "\"{}\"", value),
            Some(datatype) if is_numeric_datatype(datatype) => write!(f, "{}", value),
            Some(datatype) => match DEFAULT_NAMESPACES.compact(datatype) {
                Some(compact) => write!(f, "\"{}\"^^{}", value, compact),
                None => write!(f, "\"{}\"^^<{}>", value, datatype),
            },
        }
    }
}

/// A language-tagged string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LangString {
    value: String,
    language: String,
}

impl LangString {
    /// Create a language-tagged string.
    ///
    /// A missing language is a [`GraphError::MissingLanguage`], an empty one
    /// a [`GraphError::EmptyLanguage`].
    pub fn new(value: impl Into<String>, language: Option<&str>) -> GraphResult<Self> {
        match language {
            None => Err(GraphError::MissingLanguage),
            Some("") => Err(GraphError::EmptyLanguage),
            Some(language) => Ok(Self {
                value: value.into(),
                language: language.to_string(),
            }),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub(crate) fn matches_literal(&self, condition: &Literal) -> bool {
        condition.is_plain() && self.value == condition.value
    }

    pub(crate) fn matches_lang_string(&self, condition: &LangString) -> bool {
        self.value == condition.value && self.language.eq_ignore_ascii_case(&condition.language)
    }

    pub(crate) fn matches_node(&self, condition: &Node) -> bool {
        matches_virtual_fields(
            &self.value,
            |iri| iri == RDF_LANG_STRING,
            Some(&self.language),
            condition,
        )
    }
}

impl fmt::Display for LangString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"@{}", escape_controls(&self.value), self.language)
    }
}

/// Match a literal against a node-shaped condition, reading `rdf:type`,
/// `rdf:value` and `xml:lang` as virtual fields. Any other relation fails.
fn matches_virtual_fields(
    value: &str,
    type_matches: impl Fn(&str) -> bool,
    language: Option<&str>,
    condition: &Node,
) -> bool {
    condition.entries().all(|(relation, required)| {
        required.iter().all(|expected| {
            let text = expected.identifier().or_else(|| expected.literal_value());
            match relation {
                RDF_TYPE => text.map_or(false, &type_matches),
                RDF_VALUE => expected.literal_value() == Some(value),
                XML_LANG => match (language, expected.literal_value()) {
                    (Some(language), Some(tag)) => language.eq_ignore_ascii_case(tag),
                    _ => false,
                },
                _ => false,
            }
        })
    })
}

/// Render CR and LF as visible markers
fn escape_controls(value: &str) -> Cow<'_, str> {
    if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace('\r', "\u{240D}").replace('\n', "\u{2424}"))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ErrorKind;

    #[test]
    fn test_create_creates_lang_string() {
        assert_eq!(
            Literal::create("Hoc est corpus meum.", Some("la")),
            ObjectType::LangString(LangString::new("Hoc est corpus meum.", Some("la")).unwrap())
        );
    }

    #[test]
    fn test_create_creates_node_reference() {
        let expected: ObjectType = NodeReference::new("http://example.org/").unwrap().into();
        assert_eq!(Literal::create("http://example.org/", None), expected);
        assert_eq!(Literal::create("http://example.org/", Some("")), expected);
    }

    #[test]
    fn test_create_creates_plain_literal() {
        let text = "public static void main(String[] args)";
        let expected = ObjectType::Literal(Literal::new(text, Some(RDF_PLAIN_LITERAL)).unwrap());
        assert_eq!(Literal::create(text, None), expected);
        assert_eq!(Literal::create(text, Some("")), expected);
    }

    #[test]
    fn test_create_literal_never_creates_node_reference() {
        assert_eq!(
            Literal::create_literal("http://example.org/", None),
            ObjectType::Literal(Literal::plain("http://example.org/"))
        );
        assert_eq!(
            Literal::create_literal("Hoc est corpus meum.", Some("la")),
            ObjectType::LangString(LangString::new("Hoc est corpus meum.", Some("la")).unwrap())
        );
    }

    #[test]
    fn test_reserved_datatype_is_rejected() {
        let err = Literal::new("Hello", Some(RDF_LANG_STRING)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConstruction);
        assert!(Literal::new("Hello", Some("not an iri")).is_err());
        assert!(Literal::new("Hello", Some("")).unwrap().is_plain());
    }

    #[test]
    fn test_lang_string_requires_language() {
        assert_eq!(
            LangString::new("Hello", None).unwrap_err().kind(),
            ErrorKind::MissingArgument
        );
        assert_eq!(
            LangString::new("Hello", Some("")).unwrap_err().kind(),
            ErrorKind::InvalidConstruction
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Literal::plain("Heger").to_string(), "\"Heger\"");
        assert_eq!(
            Literal::new("1641", Some("http://www.w3.org/2001/XMLSchema#integer"))
                .unwrap()
                .to_string(),
            "1641"
        );
        assert_eq!(
            Literal::new("1641", Some("http://www.w3.org/2001/XMLSchema#gYear"))
                .unwrap()
                .to_string(),
            "\"1641\"^^xsd:gYear"
        );
        assert_eq!(
            Literal::new("x", Some("http://example.org/type")).unwrap().to_string(),
            "\"x\"^^<http://example.org/type>"
        );
        assert_eq!(
            LangString::new("Hoc est", Some("la")).unwrap().to_string(),
            "\"Hoc est\"@la"
        );
        assert_eq!(Literal::plain("a\r\nb").to_string(), "\"a\u{240D}\u{2424}b\"");
    }

    #[test]
    fn test_literal_matches_literal_condition() {
        let typed = Literal::new("1641", Some("http://www.w3.org/2001/XMLSchema#gYear")).unwrap();
        assert!(typed.matches_literal(&Literal::plain("1641")));
        assert!(typed.matches_literal(&typed));
        assert!(!Literal::plain("1641").matches_literal(&typed));
        assert!(!typed.matches_literal(&Literal::plain("1642")));
    }

    #[test]
    fn test_string_datatype_is_plain() {
        let declared = Literal::new("x", Some(XSD_STRING)).unwrap();
        assert_eq!(declared, Literal::plain("x"));
        assert!(declared.is_plain());
        assert_eq!(declared.to_string(), "\"x\"");

        let condition = ObjectType::from(Literal::new("x", Some(XSD_STRING)).unwrap());
        assert!(ObjectType::from(Literal::plain("x")).matches(&condition));
        assert!(Literal::plain("x").matches_node(&Node::typed(XSD_STRING).unwrap()));
    }

    #[test]
    fn test_lang_string_matches_node_condition() {
        let lang_string = LangString::new("X", Some("la")).unwrap();

        assert!(lang_string.matches_node(&Node::new().with(XML_LANG, "la")));
        assert!(!lang_string.matches_node(&Node::new().with(XML_LANG, "fr")));
        assert!(lang_string.matches_node(&Node::typed(RDF_LANG_STRING).unwrap()));
        assert!(!lang_string.matches_node(&Node::typed("http://example.org/other").unwrap()));
        assert!(lang_string.matches_node(&Node::new().with(RDF_VALUE, "X")));
        assert!(!lang_string.matches_node(&Node::new().with("http://example.org/p", "X")));
    }

    #[test]
    fn test_literal_matches_node_condition() {
        let literal = Literal::plain("aut");
        assert!(literal.matches_node(&Node::new()));
        assert!(literal.matches_node(&Node::typed(RDF_PLAIN_LITERAL).unwrap()));
        assert!(!literal.matches_node(&Node::new().with(XML_LANG, "en")));
        assert!(!literal.matches_node(&Node::new().with(RDF_VALUE, "edt")));
    }
}
