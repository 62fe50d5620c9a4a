//! JSON-LD serialization of an RDF index
//!
//! Writes one JSON object per subject into a top-level array, using a fixed
//! indentation layout:
//!
//! ```text
//! [
//!   {
//!     "@id" : "http://ex/s",
//!     "http://ex/p" : [
//!       { "@value" : "hello" }
//!     ]
//!   }
//! ]
//! ```

use tracing::debug;

use crate::index::{Index, Triple};
use crate::render::{render_identifier, render_term, Position};
use crate::term::Term;
use crate::vocab::{
    CONTENT_TYPE, ID_KEY, NEWLINE, OBJECT_INDENT, PREDICATE_INDENT, SUBJECT_INDENT,
    SUBJECT_SEPARATOR,
};

/// How identifiers and literal annotations are escaped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapePolicy {
    /// Plain subject/predicate identifiers, datatypes and language tags are
    /// written without escaping. Byte-compatible with existing output.
    #[default]
    Compatible,
    /// Everything placed inside quotes is escaped
    Strict,
}

/// Options for serialization
#[derive(Debug, Clone, Default)]
pub struct SerializerOptions {
    pub escape_policy: EscapePolicy,
    /// Write non-ASCII characters in escaped strings as `\uXXXX`
    pub ascii_only: bool,
}

/// An RDF serializer producing text of a single media type
pub trait RdfSerializer {
    /// Media type of the produced text
    fn content_type(&self) -> &'static str;

    /// Serialize a complete index
    fn serialize_index(&self, index: &Index) -> String;

    /// Serialize a flat triple list by indexing it first
    fn serialize_triples(&self, triples: &[Triple]) -> String {
        self.serialize_index(&Index::from_triples(triples))
    }
}

/// JSON-LD serializer
#[derive(Debug, Clone, Default)]
pub struct JsonLdSerializer {
    options: SerializerOptions,
}

impl JsonLdSerializer {
    pub fn new(options: SerializerOptions) -> Self {
        Self { options }
    }

    fn write_subject(
        &self,
        out: &mut String,
        subject: &str,
        predicates: &[(String, Vec<Term>)],
    ) {
        out.push_str(SUBJECT_INDENT);
        out.push_str("{ ");
        out.push_str(NEWLINE);
        out.push_str(PREDICATE_INDENT);
        out.push_str(&format!("\"{}\" : ", ID_KEY));
        out.push_str(&render_identifier(subject, Position::Subject, &self.options));

        for (predicate, objects) in predicates {
            out.push(',');
            out.push_str(NEWLINE);
            out.push_str(PREDICATE_INDENT);
            out.push_str(&render_identifier(predicate, Position::Predicate, &self.options));
            out.push_str(" : [");

            for (i, object) in objects.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(NEWLINE);
                out.push_str(OBJECT_INDENT);
                out.push_str(&render_term(object, Position::Object, &self.options));
            }

            out.push_str(NEWLINE);
            out.push_str(PREDICATE_INDENT);
            out.push(']');
        }

        out.push_str(NEWLINE);
        out.push_str(SUBJECT_INDENT);
        out.push('}');
    }
}

impl RdfSerializer for JsonLdSerializer {
    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    fn serialize_index(&self, index: &Index) -> String {
        debug!(
            subjects = index.len(),
            triples = index.triple_count(),
            "serializing index as JSON-LD"
        );

        let mut body = String::new();
        for (subject, predicates) in index.iter() {
            if !body.is_empty() {
                body.push_str(SUBJECT_SEPARATOR);
            }
            self.write_subject(&mut body, subject, predicates);
        }
        if !body.is_empty() {
            body.push(' ');
        }

        format!("[{}{}{}]", NEWLINE, body, NEWLINE)
    }
}

/// Serialize an index with default options
pub fn serialize(index: &Index) -> String {
    JsonLdSerializer::default().serialize_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index_from(value: serde_json::Value) -> Index {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_index() {
        assert_eq!(serialize(&Index::new()), "[\n\n]");
    }

    #[test]
    fn test_single_literal() {
        let index = index_from(json!({"http://ex/s": {"http://ex/p": "hello"}}));
        let expected = concat!(
            "[\n",
            "  { \n",
            "    \"@id\" : \"http://ex/s\",\n",
            "    \"http://ex/p\" : [\n",
            "      { \"@value\" : \"hello\" }\n",
            "    ]\n",
            "  } \n",
            "]"
        );
        assert_eq!(serialize(&index), expected);
    }

    #[test]
    fn test_uri_object() {
        let index = index_from(json!({
            "http://ex/s": {"http://ex/p2": [{"value": "http://ex/o", "type": "uri"}]}
        }));
        let out = serialize(&index);
        assert!(out.contains(
            "    \"http://ex/p2\" : [\n      { \"@id\" : \"http://ex/o\" }\n    ]"
        ));
    }

    #[test]
    fn test_multiple_objects_and_subjects() {
        let mut index = Index::new();
        index.insert("http://ex/a", "http://ex/p", Term::from("http://ex/o1"));
        index.insert("http://ex/a", "http://ex/p", Term::from("_:b0"));
        index.insert("http://ex/a", "http://ex/q", Term::lang_literal("hi", "en"));
        index.insert("_:b0", "http://ex/p", Term::literal("x"));

        let expected = concat!(
            "[\n",
            "  { \n",
            "    \"@id\" : \"http://ex/a\",\n",
            "    \"http://ex/p\" : [\n",
            "      { \"@id\" : \"http://ex/o1\" },\n",
            "      { \"@id\" : \"_:b0\" }\n",
            "    ],\n",
            "    \"http://ex/q\" : [\n",
            "      { \"@value\" : \"hi\", \"@language\" : \"en\" }\n",
            "    ]\n",
            "  },\n",
            "\n",
            "  { \n",
            "    \"@id\" : \"_:b0\",\n",
            "    \"http://ex/p\" : [\n",
            "      { \"@value\" : \"x\" }\n",
            "    ]\n",
            "  } \n",
            "]"
        );
        assert_eq!(serialize(&index), expected);
    }

    #[test]
    fn test_subject_without_predicates() {
        let index = index_from(json!({"http://ex/s": {}}));
        assert_eq!(
            serialize(&index),
            "[\n  { \n    \"@id\" : \"http://ex/s\"\n  } \n]"
        );
    }

    #[test]
    fn test_empty_object_list() {
        let index = index_from(json!({"http://ex/s": {"http://ex/p": []}}));
        assert!(serialize(&index).contains("\"http://ex/p\" : [\n    ]"));
    }

    #[test]
    fn test_output_is_valid_json() {
        let index = index_from(json!({
            "http://ex/s": {
                "http://ex/p": [
                    "http://ex/o",
                    {"value": "say \"hi\"\n", "type": "literal", "lang": "en"},
                    {
                        "value": "1",
                        "type": "literal",
                        "datatype": "http://www.w3.org/2001/XMLSchema#integer"
                    }
                ]
            },
            "_:b1": {"http://ex/p": "plain"}
        }));
        let parsed: serde_json::Value = serde_json::from_str(&serialize(&index)).unwrap();
        assert_eq!(parsed[0]["@id"], "http://ex/s");
        assert_eq!(parsed[0]["http://ex/p"][1]["@value"], "say \"hi\"\n");
        assert_eq!(
            parsed[0]["http://ex/p"][2]["@type"],
            "http://www.w3.org/2001/XMLSchema#integer"
        );
        assert_eq!(parsed[1]["@id"], "_:b1");
    }

    #[test]
    fn test_strict_policy_escapes_subjects() {
        let mut index = Index::new();
        index.push_literal("http://ex/\"s\"", "http://ex/p", "v");
        let serializer = JsonLdSerializer::new(SerializerOptions {
            escape_policy: EscapePolicy::Strict,
            ..Default::default()
        });
        let out = serializer.serialize_index(&index);
        assert!(out.contains(r#""@id" : "http://ex/\"s\"""#));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn test_serialize_triples() {
        let triples = vec![
            Triple::uri("http://ex/s", "http://ex/p", "http://ex/o"),
            Triple::literal("http://ex/s", "http://ex/p", "hello"),
        ];
        let out = JsonLdSerializer::default().serialize_triples(&triples);
        assert!(
            out.contains("{ \"@id\" : \"http://ex/o\" },\n      { \"@value\" : \"hello\" }")
        );
    }

    #[test]
    fn test_content_type() {
        assert_eq!(
            JsonLdSerializer::default().content_type(),
            "application/ld+json"
        );
    }
}
