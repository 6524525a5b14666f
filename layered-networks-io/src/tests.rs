use crate::{export, load_document, ExportFormat};
use layered_networks::{CooccurrenceBuilder, CooccurrenceConfig, Document, Graph, NetworkBuilder};
use std::fs;
use std::path::Path;

/// Load a document from the fixtures directory.
fn load_fixture(name: &str) -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name);
    load_document(&path).expect(&format!("Failed to load fixture: {}", name))
}

fn build(config: CooccurrenceConfig) -> Graph {
    CooccurrenceBuilder::from_config(&config)
        .expect("valid config")
        .build(&load_fixture("lovelace.json"))
}

#[test]
fn test_fixture_loads() {
    let doc = load_fixture("lovelace.json");
    assert_eq!(doc.len(), 23);
    assert_eq!(doc.sentences().len(), 4);
    assert_eq!(doc.spans_of_type("paragraph").count(), 2);
}

#[test]
fn test_actor_network_per_paragraph() {
    let graph = build(
        CooccurrenceConfig::new()
            .with_nodes("actor")
            .with_method("textspan"),
    );

    insta::assert_snapshot!(export(&graph, ExportFormat::Text).unwrap(), @r###"
    2 nodes, 1 edges
    Ada Lovelace  [t1, t2, t10]
    Babbage       [t12, t14, t19]
    Ada Lovelace ── Babbage  1
    "###);
}

#[test]
fn test_lexical_window_network() {
    let graph = build(CooccurrenceConfig::new().with_window(vec![2]));

    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 11);
    assert!(graph.edges().iter().all(|edge| edge.weight == 1));
    // Multi-token entities are a single node, reached through coreference too
    assert_eq!(graph.weight("Analytical Engine", "Ada Lovelace"), 1);
    assert_eq!(graph.weight("Ada Lovelace", "admire"), 1);
    assert!(graph.find_node("Lovelace").is_none());
    assert!(graph.find_node("the").is_none());
}

#[test]
fn test_default_widths_accumulate() {
    let narrow = build(CooccurrenceConfig::new().with_window(vec![2]));
    let both = build(CooccurrenceConfig::new());
    for edge in narrow.edges() {
        let a = &narrow.node(edge.source).unwrap().label;
        let b = &narrow.node(edge.target).unwrap().label;
        assert!(both.weight(a, b) > edge.weight, "{} - {}", a, b);
    }
}

#[test]
fn test_noun_network_per_sentence() {
    let graph = build(
        CooccurrenceConfig::new()
            .with_nodes("noun")
            .with_method("sentence"),
    );

    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.weight("Ada Lovelace", "note"), 1);
    assert_eq!(graph.weight("note", "Analytical Engine"), 1);
    assert_eq!(graph.weight("Ada Lovelace", "Babbage"), 1);
    assert_eq!(graph.weight("Babbage", "engine"), 1);
    assert_eq!(graph.weight("Babbage", "model"), 1);
}

#[test]
fn test_stoplist_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("verbs"), "write\nbuild\n").unwrap();

    let graph = build(
        CooccurrenceConfig::new()
            .with_window(vec![2])
            .with_stopwords("verbs")
            .with_stopwords_dir(dir.path()),
    );
    assert!(graph.find_node("write").is_none());
    assert!(graph.find_node("build").is_none());
    assert_eq!(graph.weight("Ada Lovelace", "note"), 1);
}

#[test]
fn test_gexf_export_of_fixture() {
    let graph = build(CooccurrenceConfig::new().with_nodes("actor").with_method("textspan"));
    let gexf = export(&graph, ExportFormat::Gexf).unwrap();
    assert!(gexf.contains(r#"<node id="n0" label="Ada Lovelace">"#));
    assert!(gexf.contains(r#"<attvalue for="tokens" value="t12 t14 t19"/>"#));
    assert!(gexf.contains(r#"<edge id="e0" source="n0" target="n1" weight="1"/>"#));
}
