//! Graphviz DOT rendering of annotated plan graphs.
//!
//! Subassemblies draw as boxes, actions as ellipses labeled with their
//! assigned agent, interactions as dashed ellipses. Node ids are
//! sanitized, prefixed with the arena id so distinct names can never
//! collide after sanitization.

use aoplan_graph::assembly::{AssemblyGraph, NodeKind};
use aoplan_graph::container::NodeId;

use crate::error::WriteError;

/// Render a plan graph and write the DOT document to a file.
///
/// # Errors
///
/// Returns [`WriteError::Io`] when the file cannot be written.
pub fn export_dot_file(graph: &AssemblyGraph, path: &std::path::Path) -> Result<(), WriteError> {
    std::fs::write(path, export_dot(graph)).map_err(|e| WriteError::Io {
        detail: format!("{}: {e}", path.display()),
    })
}

/// Render a plan graph as a Graphviz DOT string.
#[must_use]
pub fn export_dot(graph: &AssemblyGraph) -> String {
    let mut out = String::new();

    out.push_str("digraph plan {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    nodesep=0.4;\n");
    out.push_str("    node [fontsize=10];\n");
    out.push_str("    edge [fontsize=9, arrowsize=0.7];\n\n");

    for (id, node) in graph.nodes() {
        let dot_id = dot_node_id(id, node.name());
        match node.kind() {
            NodeKind::Subassembly | NodeKind::Interassembly => {
                out.push_str(&format!(
                    "    {} [shape=box, style=rounded, label=\"{}\"];\n",
                    dot_id,
                    dot_escape(node.name())
                ));
            }
            NodeKind::Action => {
                out.push_str(&format!(
                    "    {} [shape=ellipse, label=\"{}\"];\n",
                    dot_id,
                    action_label(node.name(), node.assigned_agent())
                ));
            }
            NodeKind::Interaction => {
                out.push_str(&format!(
                    "    {} [shape=ellipse, style=dashed, label=\"{}\"];\n",
                    dot_id,
                    action_label(node.name(), node.assigned_agent())
                ));
            }
        }
    }

    out.push('\n');
    for (_, _, src, dst) in graph.edges() {
        let src_name = graph.node_data(src).map_or("", |n| n.name());
        let dst_name = graph.node_data(dst).map_or("", |n| n.name());
        out.push_str(&format!(
            "    {} -> {};\n",
            dot_node_id(src, src_name),
            dot_node_id(dst, dst_name)
        ));
    }

    out.push_str("}\n");
    out
}

fn action_label(name: &str, agent: Option<&str>) -> String {
    match agent {
        Some(agent) => format!("{}\\n[{}]", dot_escape(name), dot_escape(agent)),
        None => dot_escape(name),
    }
}

fn dot_node_id(id: NodeId, name: &str) -> String {
    format!("n{}_{}", id, sanitize_node_id(name))
}

fn sanitize_node_id(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn dot_escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}
