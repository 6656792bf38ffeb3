//! Best-first traversal of the lazily expanded search graph.
//!
//! The loop interleaves on-demand graph growth with priority-ordered
//! exploration: popping a node expands its children's children, scores
//! them, and pushes them. Because the search graph is a tree and every
//! node is pushed exactly once, scores can be written in place on nodes
//! that have not entered the open set yet; this invariant does not carry
//! to graphs where states can be revisited.

use std::collections::BTreeMap;

use aoplan_graph::assembly::AssemblyGraph;
use aoplan_graph::config::Configuration;
use aoplan_graph::container::NodeId;

use crate::expander::NodeExpander;
use crate::frontier::OpenSet;
use crate::node::{SearchGraph, SearchNode};

/// Why the search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// A state with no remaining open subassemblies was popped.
    GoalReached { node: NodeId },
    /// The open set drained without reaching a goal; the last popped node
    /// is carried for diagnostics.
    OpenSetExhausted { last_popped: Option<NodeId> },
}

/// Outcome of one planning run, with its audit counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub termination: Termination,
    /// Nodes popped and expanded past the goal test.
    pub expansions: u64,
    /// Search nodes allocated over the whole run.
    pub nodes_created: u64,
    /// Open-set size high-water mark.
    pub open_high_water: u64,
}

impl SearchReport {
    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal(&self) -> Option<NodeId> {
        match self.termination {
            Termination::GoalReached { node } => Some(node),
            Termination::OpenSetExhausted { .. } => None,
        }
    }
}

/// The A* search over a fixed assembly graph.
#[derive(Debug, Clone, Copy)]
pub struct AstarSearch<'a> {
    assembly: &'a AssemblyGraph,
}

impl<'a> AstarSearch<'a> {
    #[must_use]
    pub fn new(assembly: &'a AssemblyGraph) -> Self {
        Self { assembly }
    }

    /// Whether a search node is a goal: every open subassembly is a
    /// primitive part (no candidate actions left in the assembly graph).
    #[must_use]
    pub fn is_goal(&self, search: &SearchGraph, node: NodeId) -> bool {
        let Some(state) = search.node_data(node) else {
            return false;
        };
        state
            .subassemblies
            .values()
            .all(|&s| self.assembly.number_of_successors(s) == 0)
    }

    /// The heuristic: `log2(longest open subassembly name) *
    /// minimum_cost_action`.
    ///
    /// An empty frontier gives `log2(0) = -inf`, so fully decomposed
    /// states sort in front of everything else. A state whose frontier
    /// holds only primitive parts keeps the no-candidate cost sentinel
    /// and sorts near the back; it is still a goal once popped.
    #[must_use]
    pub fn h_score(&self, search: &SearchGraph, node: NodeId) -> f64 {
        let Some(state) = search.node_data(node) else {
            return 0.0;
        };
        let mut maximum_length = 0usize;
        for &s in state.subassemblies.values() {
            if let Some(data) = self.assembly.node_data(s) {
                maximum_length = maximum_length.max(data.name().len());
            }
        }
        (maximum_length as f64).log2() * state.minimum_cost_action
    }

    /// Run the search from `root` until a goal is popped or the open set
    /// drains.
    pub fn search(
        &self,
        search: &mut SearchGraph,
        root: NodeId,
        expander: &NodeExpander<'_>,
    ) -> SearchReport {
        let mut open = OpenSet::new();
        let mut expansions = 0u64;
        let mut last_popped = None;

        expander.expand_node(search, root);
        self.score(search, root, 0.0, 0.0);
        if let Some(state) = search.node_data(root) {
            open.push(root, state.f_score);
        }

        while let Some(current) = open.pop() {
            last_popped = Some(current);

            if self.is_goal(search, current) {
                return SearchReport {
                    termination: Termination::GoalReached { node: current },
                    expansions,
                    nodes_created: search.number_of_nodes() as u64,
                    open_high_water: open.high_water(),
                };
            }

            if let Some(state) = search.node_data_mut(current) {
                state.marked = true;
            }
            expansions += 1;

            let current_g = search.node_data(current).map_or(0.0, |s| s.g_score);
            for edge in search.successor_edges(current).to_vec() {
                let Some((cost, child)) = search
                    .edge_data(edge)
                    .map(|e| e.cost)
                    .zip(search.edge_endpoints(edge).map(|(_, dst)| dst))
                else {
                    continue;
                };
                expander.expand_node(search, child);
                self.score(search, child, current_g, cost);
                if let Some(state) = search.node_data(child) {
                    open.push(child, state.f_score);
                }
            }
        }

        SearchReport {
            termination: Termination::OpenSetExhausted { last_popped },
            expansions,
            nodes_created: search.number_of_nodes() as u64,
            open_high_water: open.high_water(),
        }
    }

    /// Write `g`, `h`, and `f` onto a node that is about to enter the
    /// open set.
    fn score(&self, search: &mut SearchGraph, node: NodeId, parent_g: f64, edge_cost: f64) {
        let h = self.h_score(search, node);
        if let Some(state) = search.node_data_mut(node) {
            state.g_score = parent_g + edge_cost;
            state.h_score = h;
            // An infinite g against the goal heuristic's -inf would give
            // NaN; an unpayable plan has to sort last, not first.
            let f = state.g_score + h;
            state.f_score = if f.is_nan() { f64::INFINITY } else { f };
        }
    }
}

/// Build the root planning state and run the search to completion.
///
/// The input is assumed validated; an assembly graph without a designated
/// root leaves the frontier empty, which is vacuously a goal with an
/// empty plan.
pub fn plan(assembly: &AssemblyGraph, config: &Configuration) -> (SearchReport, SearchGraph) {
    let mut search = SearchGraph::new();
    let mut frontier = BTreeMap::new();
    if let Some(root) = assembly.root() {
        if let Some(data) = assembly.node_data(root) {
            frontier.insert(data.name().to_string(), root);
        }
    }
    let root_id = search.fresh_id();
    search.insert_node(root_id, SearchNode::root(frontier));
    search.set_root(root_id);

    let expander = NodeExpander::new(assembly, config);
    let astar = AstarSearch::new(assembly);
    let report = astar.search(&mut search, root_id, &expander);
    (report, search)
}
