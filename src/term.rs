//! RDF term model
//!
//! A term arrives either as a plain string (an identifier) or as a
//! structured record `{value, type?, datatype?, lang?}`. Both shapes are
//! decoded into [`Term`] so rendering can match on variants.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::vocab::{is_blank_node_label, BNODE_TYPE, LITERAL_TYPE, URI_TYPE};

/// Classification of any term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    Uri,
    Bnode,
    Literal,
}

/// Explicit `type` of a structured identifier record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Uri,
    Bnode,
}

/// A subject, predicate, or object term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Value")]
pub enum Term {
    /// Plain string form: "http://..." or "_:b0"
    Identifier(String),
    /// Structured identifier record; `kind` is `None` when the record has no
    /// `type` or an unrecognised one
    Node {
        value: String,
        kind: Option<NodeKind>,
    },
    /// Structured literal record
    Literal {
        value: String,
        datatype: Option<String>,
        lang: Option<String>,
    },
}

impl Term {
    /// Structured IRI term
    pub fn uri(value: impl Into<String>) -> Self {
        Term::Node {
            value: value.into(),
            kind: Some(NodeKind::Uri),
        }
    }

    /// Structured blank node term
    pub fn bnode(value: impl Into<String>) -> Self {
        Term::Node {
            value: value.into(),
            kind: Some(NodeKind::Bnode),
        }
    }

    /// Plain literal without datatype or language
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    /// Literal with a datatype IRI
    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: Some(datatype.into()),
            lang: None,
        }
    }

    /// Literal with a language tag
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            datatype: None,
            lang: Some(lang.into()),
        }
    }

    /// The lexical value of the term
    pub fn value(&self) -> &str {
        match self {
            Term::Identifier(value) => value,
            Term::Node { value, .. } => value,
            Term::Literal { value, .. } => value,
        }
    }

    /// Classify the term. Plain strings and untyped records are blank nodes
    /// when their value carries the `_:` prefix, IRIs otherwise.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Identifier(value) | Term::Node { value, kind: None } => {
                if is_blank_node_label(value) {
                    TermKind::Bnode
                } else {
                    TermKind::Uri
                }
            }
            Term::Node {
                kind: Some(NodeKind::Uri),
                ..
            } => TermKind::Uri,
            Term::Node {
                kind: Some(NodeKind::Bnode),
                ..
            } => TermKind::Bnode,
            Term::Literal { .. } => TermKind::Literal,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Identifier(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Identifier(s)
    }
}

impl From<Value> for Term {
    /// Strings are identifiers and objects are records. Any other scalar
    /// is coerced to its string form rather than rejected.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(record) => term_from_record(&record),
            other => Term::Identifier(scalar_string(&other)),
        }
    }
}

fn term_from_record(record: &Map<String, Value>) -> Term {
    let field = |key: &str| record.get(key).filter(|v| !v.is_null()).map(scalar_string);
    term_from_parts(
        field("value").unwrap_or_default(),
        record.get("type").and_then(Value::as_str),
        field("datatype"),
        field("lang"),
    )
}

/// String form of a loose JSON value: numbers and booleans as their JSON
/// text, `null` and containers as the empty string
pub(crate) fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Build a term from the loose record fields used by indexes and triples.
/// Only `type = "literal"` yields a literal; datatype and lang are dropped
/// for anything else.
pub(crate) fn term_from_parts(
    value: String,
    kind: Option<&str>,
    datatype: Option<String>,
    lang: Option<String>,
) -> Term {
    match kind {
        Some(LITERAL_TYPE) => Term::Literal {
            value,
            datatype,
            lang,
        },
        Some(URI_TYPE) => Term::Node {
            value,
            kind: Some(NodeKind::Uri),
        },
        Some(BNODE_TYPE) => Term::Node {
            value,
            kind: Some(NodeKind::Bnode),
        },
        _ => Term::Node { value, kind: None },
    }
}
