//! Vocabulary and layout constants for JSON-LD output
//!
//! Keywords, the advertised media type, and the fixed whitespace used by
//! the serializer.

/// Media type advertised for serialized output
pub const CONTENT_TYPE: &str = "application/ld+json";

/// Node identifier keyword
pub const ID_KEY: &str = "@id";

/// Literal value keyword
pub const VALUE_KEY: &str = "@value";

/// Literal datatype keyword
pub const TYPE_KEY: &str = "@type";

/// Literal language tag keyword
pub const LANGUAGE_KEY: &str = "@language";

/// Prefix marking a blank node label ("_:b0")
pub const BLANK_NODE_PREFIX: &str = "_:";

/// `type` value of a structured literal record
pub const LITERAL_TYPE: &str = "literal";

/// `type` value of a structured IRI record
pub const URI_TYPE: &str = "uri";

/// `type` value of a structured blank node record
pub const BNODE_TYPE: &str = "bnode";

pub(crate) const NEWLINE: &str = "\n";
pub(crate) const SUBJECT_INDENT: &str = "  ";
pub(crate) const PREDICATE_INDENT: &str = "    ";
pub(crate) const OBJECT_INDENT: &str = "      ";
pub(crate) const SUBJECT_SEPARATOR: &str = ",\n\n";

/// Check whether an identifier is a blank node label
pub fn is_blank_node_label(value: &str) -> bool {
    value.starts_with(BLANK_NODE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank_node_label() {
        assert!(is_blank_node_label("_:b0"));
        assert!(is_blank_node_label("_:"));
        assert!(!is_blank_node_label("http://example.org/_:x"));
        assert!(!is_blank_node_label("_x"));
    }
}
