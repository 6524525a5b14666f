//! JSON export: `{"nodes": [...], "edges": [...]}`.

use std::io::Write;

use layered_networks::Graph;

use crate::errors::ExportResult;

pub fn to_json_string(graph: &Graph) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}

pub fn write_json(graph: &Graph, out: impl Write) -> ExportResult<()> {
    serde_json::to_writer_pretty(out, graph)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nodes_and_weighted_edges() {
        let mut graph = Graph::new();
        let a = graph.find_or_add_node("A");
        graph.attach_token(a, &"t1".into());
        graph.add_or_increment_edge("A", "B");
        graph.add_or_increment_edge("B", "A");

        let value: serde_json::Value = serde_json::from_str(&to_json_string(&graph).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": [
                    {"id": 0, "label": "A", "tokens": ["t1"]},
                    {"id": 1, "label": "B"}
                ],
                "edges": [
                    {"source": 0, "target": 1, "weight": 2}
                ]
            })
        );
    }
}
