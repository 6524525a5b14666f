//! GEXF 1.2 export.
//!
//! The graph is written as a static, undirected GEXF graph. Node ids are the
//! graph's [`NodeId`](layered_networks::NodeId)s (`n0`, `n1`, ...), edge
//! weights become the GEXF `weight` attribute, and contributing token ids
//! become a `tokens` node attribute when any node has them.

use std::fmt::{self, Write};

use layered_networks::Graph;

const GEXF_NAMESPACE: &str = "http://www.gexf.net/1.2draft";

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Write `graph` as a GEXF document.
pub fn write_gexf(graph: &Graph, out: &mut impl Write) -> fmt::Result {
    let has_tokens = graph.nodes().iter().any(|node| !node.tokens.is_empty());

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<gexf xmlns="{}" version="1.2">"#, GEXF_NAMESPACE)?;
    writeln!(out, "  <meta>")?;
    writeln!(out, "    <creator>layered-networks</creator>")?;
    writeln!(out, "  </meta>")?;
    writeln!(out, r#"  <graph mode="static" defaultedgetype="undirected">"#)?;

    if has_tokens {
        writeln!(out, r#"    <attributes class="node">"#)?;
        writeln!(out, r#"      <attribute id="tokens" title="tokens" type="string"/>"#)?;
        writeln!(out, "    </attributes>")?;
    }

    writeln!(out, "    <nodes>")?;
    for node in graph.nodes() {
        let label = escape(&node.label);
        if node.tokens.is_empty() {
            writeln!(out, r#"      <node id="{}" label="{}"/>"#, node.id, label)?;
        } else {
            let tokens: Vec<&str> = node.tokens.iter().map(|t| t.as_str()).collect();
            writeln!(out, r#"      <node id="{}" label="{}">"#, node.id, label)?;
            writeln!(
                out,
                r#"        <attvalues><attvalue for="tokens" value="{}"/></attvalues>"#,
                escape(&tokens.join(" "))
            )?;
            writeln!(out, "      </node>")?;
        }
    }
    writeln!(out, "    </nodes>")?;

    writeln!(out, "    <edges>")?;
    for (idx, edge) in graph.edges().iter().enumerate() {
        writeln!(
            out,
            r#"      <edge id="e{}" source="{}" target="{}" weight="{}"/>"#,
            idx, edge.source, edge.target, edge.weight
        )?;
    }
    writeln!(out, "    </edges>")?;
    writeln!(out, "  </graph>")?;
    writeln!(out, "</gexf>")
}

/// Render `graph` as a GEXF string.
pub fn to_gexf_string(graph: &Graph) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_gexf(graph, &mut out);
    out
}
