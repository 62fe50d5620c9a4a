//! Subject → predicate → objects index
//!
//! The index keeps subjects and predicates in insertion order, which is the
//! order they are serialized in. Every predicate holds a list of objects;
//! single values are normalized to a one-element list when they enter the
//! index.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::term::{scalar_string, term_from_parts, Term};
use crate::vocab::{LITERAL_TYPE, URI_TYPE};

/// Predicates of one subject with their objects, in insertion order
pub type PredicateObjects = Vec<(String, Vec<Term>)>;

/// Insertion-ordered RDF index
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Index {
    entries: Vec<(String, PredicateObjects)>,
    positions: HashMap<String, usize>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from a list of flat triples.
    ///
    /// Subjects and predicates keep first-seen order; an object already
    /// present under the same subject and predicate is skipped.
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut index = Index::new();
        for triple in triples {
            index.insert(triple.s.clone(), triple.p.clone(), triple.object());
        }
        index
    }

    /// Add one object, skipping exact duplicates
    pub fn insert(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: Term,
    ) {
        let objects = self.objects_mut(subject.into(), predicate.into());
        if !objects.contains(&object) {
            objects.push(object);
        }
    }

    /// Add a plain literal object
    pub fn push_literal(
        &mut self,
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.insert(subject, predicate, Term::literal(value));
    }

    /// Iterate subjects with their predicates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, Vec<Term>)])> {
        self.entries
            .iter()
            .map(|(subject, predicates)| (subject.as_str(), predicates.as_slice()))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(subject, _)| subject.as_str())
    }

    pub fn predicates(&self, subject: &str) -> Option<&[(String, Vec<Term>)]> {
        self.positions
            .get(subject)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn objects(&self, subject: &str, predicate: &str) -> Option<&[Term]> {
        self.predicates(subject)?
            .iter()
            .find(|(p, _)| p == predicate)
            .map(|(_, objects)| objects.as_slice())
    }

    /// Number of subjects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of subject/predicate/object statements
    pub fn triple_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, predicates)| predicates.iter())
            .map(|(_, objects)| objects.len())
            .sum()
    }

    fn predicates_mut(&mut self, subject: String) -> &mut PredicateObjects {
        let pos = match self.positions.get(&subject) {
            Some(&pos) => pos,
            None => {
                let pos = self.entries.len();
                self.positions.insert(subject.clone(), pos);
                self.entries.push((subject, Vec::new()));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    fn objects_mut(&mut self, subject: String, predicate: String) -> &mut Vec<Term> {
        let predicates = self.predicates_mut(subject);
        let pos = match predicates.iter().position(|(p, _)| *p == predicate) {
            Some(pos) => pos,
            None => {
                predicates.push((predicate, Vec::new()));
                predicates.len() - 1
            }
        };
        &mut predicates[pos].1
    }
}

/// Normalize a predicate's value to a list of objects. A list keeps its
/// items, a record becomes a one-element list, and any other value is a
/// single plain literal.
fn objects_from_value(value: Value) -> Vec<Term> {
    match value {
        Value::Array(items) => items.into_iter().map(Term::from).collect(),
        record @ Value::Object(_) => vec![Term::from(record)],
        other => vec![Term::literal(scalar_string(&other))],
    }
}

impl TryFrom<Map<String, Value>> for Index {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut index = Index::new();
        for (subject, predicates) in map {
            let predicates = match predicates {
                Value::Object(predicates) => predicates,
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "predicates of subject '{}' must be an object, found {}",
                        subject, other
                    )))
                }
            };

            // Subjects without predicates are kept
            index.predicates_mut(subject.clone());
            for (predicate, value) in predicates {
                index
                    .objects_mut(subject.clone(), predicate)
                    .extend(objects_from_value(value));
            }
        }
        Ok(index)
    }
}

/// A flat triple record as produced by upstream RDF parsers.
///
/// Subjects are indexed by their value alone, so a subject type field in
/// the input is ignored. Non-string scalars are coerced to strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Triple {
    #[serde(deserialize_with = "loose_string")]
    pub s: String,
    #[serde(deserialize_with = "loose_string")]
    pub p: String,
    #[serde(deserialize_with = "loose_string")]
    pub o: String,
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub o_type: Option<String>,
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub o_datatype: Option<String>,
    #[serde(default, deserialize_with = "loose_optional_string")]
    pub o_lang: Option<String>,
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| scalar_string(&value))
}

fn loose_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok((!value.is_null()).then(|| scalar_string(&value)))
}

impl Triple {
    /// Triple whose object is an IRI
    pub fn uri(s: impl Into<String>, p: impl Into<String>, o: impl Into<String>) -> Self {
        Self::with_object_type(s, p, o, URI_TYPE)
    }

    /// Triple whose object is a plain literal
    pub fn literal(s: impl Into<String>, p: impl Into<String>, o: impl Into<String>) -> Self {
        Self::with_object_type(s, p, o, LITERAL_TYPE)
    }

    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.o_datatype = Some(datatype.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.o_lang = Some(lang.into());
        self
    }

    fn with_object_type(
        s: impl Into<String>,
        p: impl Into<String>,
        o: impl Into<String>,
        o_type: &str,
    ) -> Self {
        Triple {
            s: s.into(),
            p: p.into(),
            o: o.into(),
            o_type: Some(o_type.to_string()),
            o_datatype: None,
            o_lang: None,
        }
    }

    /// The object as an index term. Empty annotations count as absent.
    pub fn object(&self) -> Term {
        term_from_parts(
            self.o.clone(),
            non_empty(&self.o_type).as_deref(),
            non_empty(&self.o_datatype),
            non_empty(&self.o_lang),
        )
    }
}

fn non_empty(field: &Option<String>) -> Option<String> {
    field.as_ref().filter(|s| !s.is_empty()).cloned()
}
