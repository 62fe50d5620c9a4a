//! Term rendering
//!
//! Turns a single [`Term`] into its JSON-LD text. Subject and predicate
//! positions produce a bare quoted string; the object position produces a
//! node reference `{ "@id" : ... }` or a value object `{ "@value" : ... }`.

use crate::escape::{escape_non_ascii, json_escape};
use crate::serializer::{EscapePolicy, SerializerOptions};
use crate::term::Term;
use crate::vocab::{ID_KEY, LANGUAGE_KEY, TYPE_KEY, VALUE_KEY};

/// Where a term sits in a triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Subject,
    Predicate,
    Object,
}

/// Render a term at the given position
pub fn render_term(term: &Term, position: Position, options: &SerializerOptions) -> String {
    match term {
        Term::Identifier(value) => render_identifier(value, position, options),
        Term::Node { value, .. } => match position {
            Position::Object => render_node_ref(value, options),
            Position::Subject | Position::Predicate => {
                render_identifier(value, position, options)
            }
        },
        Term::Literal {
            value,
            datatype,
            lang,
        } => render_literal(value, datatype.as_deref(), lang.as_deref(), options),
    }
}

/// Render a plain identifier string.
///
/// In object position the string is a node reference (blank node for `_:`
/// labels, IRI otherwise, both rendered the same way). Elsewhere it is
/// quoted, escaped only under [`EscapePolicy::Strict`].
pub(crate) fn render_identifier(
    value: &str,
    position: Position,
    options: &SerializerOptions,
) -> String {
    match position {
        Position::Object => render_node_ref(value, options),
        Position::Subject | Position::Predicate => match options.escape_policy {
            EscapePolicy::Compatible => format!("\"{}\"", value),
            EscapePolicy::Strict => format!("\"{}\"", escape(value, options)),
        },
    }
}

fn render_node_ref(value: &str, options: &SerializerOptions) -> String {
    format!("{{ \"{}\" : \"{}\" }}", ID_KEY, escape(value, options))
}

fn render_literal(
    value: &str,
    datatype: Option<&str>,
    lang: Option<&str>,
    options: &SerializerOptions,
) -> String {
    let mut out = format!("{{ \"{}\" : \"{}\"", VALUE_KEY, escape(value, options));

    // A language tag replaces the datatype suffix instead of joining it, so
    // a literal carrying both only reports @language.
    let suffix = match (lang, datatype) {
        (Some(lang), _) => {
            format!(", \"{}\" : \"{}\"", LANGUAGE_KEY, annotation(lang, options))
        }
        (None, Some(datatype)) => {
            format!(", \"{}\" : \"{}\"", TYPE_KEY, annotation(datatype, options))
        }
        (None, None) => String::new(),
    };
    out.push_str(&suffix);
    out.push_str(" }");
    out
}

/// Datatype IRIs and language tags are written raw unless escaping is strict
fn annotation(value: &str, options: &SerializerOptions) -> String {
    match options.escape_policy {
        EscapePolicy::Compatible => value.to_string(),
        EscapePolicy::Strict => escape(value, options),
    }
}

fn escape(value: &str, options: &SerializerOptions) -> String {
    let escaped = json_escape(value);
    if options.ascii_only {
        escape_non_ascii(&escaped)
    } else {
        escaped
    }
}
