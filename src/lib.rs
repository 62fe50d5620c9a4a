//! RDF Index to JSON-LD
//!
//! This library serializes an in-memory RDF index (subject → predicate →
//! objects) into JSON-LD text.
//!
//! # Overview
//!
//! The index is built elsewhere, usually from parsed triples. Serializing it:
//!
//! 1. Walks subjects and predicates in insertion order
//! 2. Renders subjects and predicates as quoted strings
//! 3. Renders objects as `{ "@id" : ... }` node references or
//!    `{ "@value" : ... }` value objects
//! 4. Lays the result out as an array of subject objects with a fixed
//!    indentation
//!
//! The output is advertised as `application/ld+json`.
//!
//! # Term shapes
//!
//! An object may be given as a plain string (an IRI, or a blank node when
//! it starts with `_:`) or as a record with `value` and optional `type`
//! (`uri`, `bnode`, `literal`), `datatype` and `lang`. When a literal
//! carries both a datatype and a language, only the language is written.
//!
//! # Usage
//!
//! ```
//! use rdf_index_jsonld::{serialize, Index, Term};
//!
//! let mut index = Index::new();
//! index.insert("http://ex/s", "http://ex/p", Term::literal("hello"));
//!
//! let text = serialize(&index);
//! assert!(text.contains(r#"{ "@value" : "hello" }"#));
//! ```
//!
//! Use [`JsonLdSerializer`] with [`SerializerOptions`] to control escaping,
//! or [`RdfSerializer::serialize_triples`] to serialize a flat triple list.

pub mod error;
pub mod escape;
pub mod index;
pub mod loader;
pub mod render;
pub mod serializer;
pub mod term;
pub mod vocab;

// Re-export main types for convenience
pub use crate::error::SerializeError;
pub use crate::escape::json_escape;
pub use crate::index::{Index, Triple};
pub use crate::loader::{load_index, load_triples, InputSource};
pub use crate::render::{render_term, Position};
pub use crate::serializer::{
    serialize, EscapePolicy, JsonLdSerializer, RdfSerializer, SerializerOptions,
};
pub use crate::term::{NodeKind, Term, TermKind};
pub use crate::vocab::CONTENT_TYPE;
