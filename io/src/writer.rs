//! Plan XML writer.
//!
//! Emits the annotated plan graph: subassemblies as `type="OR"` nodes,
//! actions and interactions as `type="AND"` nodes carrying a single
//! `<agent>` child, and the edge list. Edge attributes follow the
//! long-standing output convention: `from` names the edge's destination
//! and `to` names its source.

use aoplan_graph::assembly::{AssemblyGraph, NodeKind};

use crate::error::WriteError;

/// Render the plan graph and write it to a file.
///
/// # Errors
///
/// Returns [`WriteError::Io`] when the file cannot be written.
pub fn write_plan_file(graph: &AssemblyGraph, path: &std::path::Path) -> Result<(), WriteError> {
    std::fs::write(path, write_plan_xml(graph)).map_err(|e| WriteError::Io {
        detail: format!("{}: {e}", path.display()),
    })
}

/// Render the annotated plan graph as the output XML document.
///
/// Output is deterministic: subassemblies first, then action-like nodes,
/// both in node-id order, then edges in insertion order.
#[must_use]
pub fn write_plan_xml(graph: &AssemblyGraph) -> String {
    let root_name = graph
        .root()
        .and_then(|r| graph.node_data(r))
        .map_or("", |n| n.name());

    let mut out = String::new();
    out.push_str(&format!(
        "<graph root=\"{}\">\n",
        xml_escape(root_name)
    ));
    out.push_str("  <nodes>\n");

    for (_, node) in graph.nodes() {
        if node.kind() == NodeKind::Subassembly {
            out.push_str(&format!(
                "    <node name=\"{}\" type=\"OR\"/>\n",
                xml_escape(node.name())
            ));
        }
    }
    for (_, node) in graph.nodes() {
        if matches!(node.kind(), NodeKind::Action | NodeKind::Interaction) {
            out.push_str(&format!(
                "    <node name=\"{}\" type=\"AND\">\n",
                xml_escape(node.name())
            ));
            out.push_str(&format!(
                "      <agent name=\"{}\"/>\n",
                xml_escape(node.assigned_agent().unwrap_or(""))
            ));
            out.push_str("    </node>\n");
        }
    }

    out.push_str("  </nodes>\n");
    out.push_str("  <edges>\n");
    for (_, _, src, dst) in graph.edges() {
        let source = graph.node_data(src).map_or("", |n| n.name());
        let destination = graph.node_data(dst).map_or("", |n| n.name());
        out.push_str(&format!(
            "    <edge from=\"{}\" to=\"{}\"/>\n",
            xml_escape(destination),
            xml_escape(source)
        ));
    }
    out.push_str("  </edges>\n");
    out.push_str("</graph>\n");
    out
}

/// Escape the five XML-special characters for attribute values.
#[must_use]
pub fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
