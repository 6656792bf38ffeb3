//! Structural validation of an assembly problem.
//!
//! Runs once between parsing and planning. Everything it rejects would
//! otherwise surface as undefined cost lookups or meaningless expansions
//! deep inside the search, so the search layer assumes validated input.

use crate::assembly::{AssemblyGraph, AssemblyNode, NodeKind};
use crate::config::Configuration;
use crate::error::ValidationError;

/// Validate the assembly graph and configuration as one problem.
///
/// Enforces, in order:
/// - the agent set is non-empty;
/// - every subassembly's reachability map covers every agent;
/// - every action's cost map covers every agent (interactions are
///   registered in the action table and checked the same way);
/// - every edge joins a subassembly to an action or an action to a
///   subassembly, in both adjacency directions;
/// - a root is designated and is a subassembly node of the graph.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered; all are fatal for
/// the invocation.
pub fn validate(graph: &AssemblyGraph, config: &Configuration) -> Result<(), ValidationError> {
    if config.agents.is_empty() {
        return Err(ValidationError::NoAgents);
    }

    for subassembly in config.subassemblies.values() {
        for agent in &config.agents {
            if !subassembly.reachability.contains_key(&agent.name) {
                return Err(ValidationError::MissingReach {
                    subassembly: subassembly.name.clone(),
                    agent: agent.name.clone(),
                });
            }
        }
    }

    for action in config.actions.values() {
        for agent in &config.agents {
            if !action.costs.contains_key(&agent.name) {
                return Err(ValidationError::MissingCost {
                    action: action.name.clone(),
                    agent: agent.name.clone(),
                });
            }
        }
    }

    for (id, node) in graph.nodes() {
        for neighbor in graph
            .predecessor_nodes(id)
            .into_iter()
            .chain(graph.successor_nodes(id))
        {
            let Some(other) = graph.node_data(neighbor) else {
                continue;
            };
            if !kinds_alternate(node.kind(), other.kind()) {
                return Err(ValidationError::NonBipartiteEdge {
                    from: node.name().to_string(),
                    to: other.name().to_string(),
                });
            }
        }
    }

    match graph.root() {
        None => Err(ValidationError::RootMissing),
        Some(root) => match graph.node_data(root) {
            Some(node) if node.kind() == NodeKind::Subassembly => Ok(()),
            Some(node) => Err(ValidationError::UnknownRoot {
                name: node.name().to_string(),
            }),
            None => Err(ValidationError::RootMissing),
        },
    }
}

/// AND/OR adjacency: subassemblies border actions and vice versa.
/// Interaction nodes count as action-like (the writer emits them as AND).
fn kinds_alternate(a: NodeKind, b: NodeKind) -> bool {
    let action_like = |k: NodeKind| matches!(k, NodeKind::Action | NodeKind::Interaction);
    let or_like = |k: NodeKind| matches!(k, NodeKind::Subassembly | NodeKind::Interassembly);
    (action_like(a) && or_like(b)) || (or_like(a) && action_like(b))
}

/// Convenience check used by tests and diagnostics: is a node an OR node
/// with no remaining actions (a primitive part)?
#[must_use]
pub fn is_primitive(graph: &AssemblyGraph, node: crate::container::NodeId) -> bool {
    graph
        .node_data(node)
        .map(AssemblyNode::kind)
        .is_some_and(|k| k == NodeKind::Subassembly)
        && graph.number_of_successors(node) == 0
}
