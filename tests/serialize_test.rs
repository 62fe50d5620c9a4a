//! End-to-end serialization through the public API

use rdf_index_jsonld::loader::parse_index;
use rdf_index_jsonld::{
    json_escape, serialize, Index, JsonLdSerializer, RdfSerializer, Term, Triple, CONTENT_TYPE,
};
use serde_json::{json, Value};

#[test]
fn test_literal_subject_document() {
    let index = parse_index(r#"{ "http://ex/s": { "http://ex/p": "hello" } }"#, "inline").unwrap();

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
fn test_empty_document() {
    assert_eq!(serialize(&Index::new()), "[\n\n]");
}

#[test]
fn test_mixed_objects_parse_back_as_jsonld() {
    let index: Index = serde_json::from_value(json!({
        "http://ex/alice": {
            "http://xmlns.com/foaf/0.1/name": [
                {"value": "Alice", "type": "literal", "lang": "en"}
            ],
            "http://xmlns.com/foaf/0.1/knows": [
                "_:bob",
                {"value": "http://ex/carol", "type": "uri"}
            ],
            "http://ex/age": [
                {
                    "value": "30",
                    "type": "literal",
                    "datatype": "http://www.w3.org/2001/XMLSchema#integer"
                }
            ],
            "http://ex/note": [
                {"value": "both", "type": "literal", "lang": "de", "datatype": "http://ex/dt"}
            ]
        },
        "_:bob": {
            "http://xmlns.com/foaf/0.1/homepage": [{"value": "http://ex/bob/", "type": "uri"}]
        }
    }))
    .unwrap();

    let text = serialize(&index);
    let doc: Value = serde_json::from_str(&text).unwrap();
    let nodes = doc.as_array().unwrap();
    assert_eq!(nodes.len(), 2);

    let alice = &nodes[0];
    assert_eq!(alice["@id"], "http://ex/alice");
    assert_eq!(
        alice["http://xmlns.com/foaf/0.1/name"],
        json!([{"@value": "Alice", "@language": "en"}])
    );
    assert_eq!(
        alice["http://xmlns.com/foaf/0.1/knows"],
        json!([{"@id": "_:bob"}, {"@id": "http://ex/carol"}])
    );
    assert_eq!(
        alice["http://ex/age"],
        json!([{"@value": "30", "@type": "http://www.w3.org/2001/XMLSchema#integer"}])
    );
    assert_eq!(alice["http://ex/note"], json!([{"@value": "both", "@language": "de"}]));

    assert_eq!(nodes[1]["@id"], "_:bob");
    assert!(text.contains("\"http://ex/bob/\""));
    assert!(!text.contains("\\/"));
}

#[test]
fn test_triples_and_index_agree() {
    let triples = vec![
        Triple::uri("http://ex/s", "http://ex/p2", "http://ex/o"),
        Triple::literal("http://ex/s", "http://ex/p", "hello"),
    ];
    let mut index = Index::new();
    index.insert("http://ex/s", "http://ex/p2", Term::uri("http://ex/o"));
    index.insert("http://ex/s", "http://ex/p", Term::literal("hello"));

    let serializer = JsonLdSerializer::default();
    assert_eq!(serializer.serialize_triples(&triples), serializer.serialize_index(&index));
    assert!(serializer
        .serialize_index(&index)
        .contains("{ \"@id\" : \"http://ex/o\" }"));
}

#[test]
fn test_content_type_and_escape_exports() {
    assert_eq!(CONTENT_TYPE, "application/ld+json");
    assert_eq!(JsonLdSerializer::default().content_type(), CONTENT_TYPE);
    assert_eq!(json_escape("abc"), "abc");
}
