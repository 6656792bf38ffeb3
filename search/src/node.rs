//! Search node and edge payloads.
//!
//! A search node is a planning state: the multiset of still-open
//! subassemblies with their assembly-graph positions, plus score
//! bookkeeping. Search nodes are distinct from assembly nodes; the two
//! graphs reference each other only through assembly node ids.

use std::collections::BTreeMap;

use aoplan_graph::container::{Graph, NodeId};

/// Sentinel for "no finite candidate action cost seen yet".
///
/// Deliberately the maximum finite value rather than infinity: the
/// heuristic multiplies it by `log2(0) = -inf` on goal nodes, and the
/// product must stay `-inf`, which only a finite factor guarantees.
pub const NO_FINITE_COST: f64 = f64::MAX;

/// One agent committed to one action for one plan step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Executing agent name.
    pub agent: String,
    /// Action name.
    pub action: String,
    /// The action's node id in the assembly graph.
    pub action_node: NodeId,
}

/// A planning state in the search graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// The open frontier: subassembly name → assembly-graph node id.
    /// Name order is the deterministic enumeration order of the expander.
    pub subassemblies: BTreeMap<String, NodeId>,
    /// Actions committed along this branch, for diagnostics.
    pub actions: BTreeMap<String, NodeId>,
    /// Accumulated cost from the search root.
    pub g_score: f64,
    /// Heuristic estimate.
    pub h_score: f64,
    /// `g_score + h_score`, the open-set ordering key.
    pub f_score: f64,
    /// Smallest finite per-agent cost over the candidate actions of this
    /// node's frontier; written by the expander, read by the heuristic.
    pub minimum_cost_action: f64,
    /// Set when the node is popped from the open set.
    pub marked: bool,
}

impl SearchNode {
    /// The initial planning state for a given open frontier.
    #[must_use]
    pub fn root(subassemblies: BTreeMap<String, NodeId>) -> Self {
        Self {
            subassemblies,
            actions: BTreeMap::new(),
            g_score: 0.0,
            h_score: 0.0,
            f_score: 0.0,
            minimum_cost_action: NO_FINITE_COST,
            marked: false,
        }
    }

    /// A freshly expanded child state. Scores other than `g_score` are
    /// filled in by the search loop before the node enters the open set.
    #[must_use]
    pub fn child(
        subassemblies: BTreeMap<String, NodeId>,
        actions: BTreeMap<String, NodeId>,
        g_score: f64,
    ) -> Self {
        Self {
            subassemblies,
            actions,
            g_score,
            h_score: 0.0,
            f_score: 0.0,
            minimum_cost_action: NO_FINITE_COST,
            marked: false,
        }
    }
}

/// One hyper-expansion step: the concurrent assignments chosen and their
/// summed cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchEdge {
    /// Sum of per-agent action costs (plus interaction surcharges) for
    /// this step. Infinite when any chosen pairing is impossible.
    pub cost: f64,
    /// The materialized assignment vector, one entry per concurrent action.
    pub planned_assignments: Vec<Assignment>,
}

/// The search graph, grown lazily during planning. A tree by
/// construction: every child is freshly allocated for its assignment, so
/// no state is ever revisited and no duplicate detection is needed.
pub type SearchGraph = Graph<SearchNode, SearchEdge>;
