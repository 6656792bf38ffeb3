//! Lazy hyper-expansion of search nodes.
//!
//! Expanding a search node materializes one child per legal assignment
//! vector of its open frontier, wiring each child in with an edge that
//! carries the step cost and the chosen assignments. The assembly graph
//! is read-only here; only the search graph grows.

use std::collections::BTreeMap;

use aoplan_graph::assembly::AssemblyGraph;
use aoplan_graph::config::Configuration;
use aoplan_graph::container::NodeId;

use crate::combinator::generate_assignments;
use crate::node::{Assignment, SearchEdge, SearchNode, NO_FINITE_COST};

/// Expands search nodes against a fixed assembly graph and configuration.
#[derive(Debug, Clone, Copy)]
pub struct NodeExpander<'a> {
    assembly: &'a AssemblyGraph,
    config: &'a Configuration,
}

impl<'a> NodeExpander<'a> {
    #[must_use]
    pub fn new(assembly: &'a AssemblyGraph, config: &'a Configuration) -> Self {
        Self { assembly, config }
    }

    /// Expand one search node into its children.
    ///
    /// Idempotent: a node that already has successors in the search graph
    /// is left untouched. Unknown handles are ignored (the search loop
    /// only passes handles it created). Returns the number of children
    /// created.
    pub fn expand_node(&self, search: &mut crate::node::SearchGraph, node: NodeId) -> usize {
        if !search.successor_edges(node).is_empty() {
            return 0;
        }
        let Some(state) = search.node_data(node) else {
            return 0;
        };

        // The open frontier: subassemblies that still have candidate
        // actions, in name order. Primitive parts stay in the state map
        // but take no further part in expansion.
        let parent_subassemblies = state.subassemblies.clone();
        let parent_actions = state.actions.clone();
        let parent_g = state.g_score;
        let open: Vec<NodeId> = parent_subassemblies
            .values()
            .copied()
            .filter(|&s| self.assembly.number_of_successors(s) > 0)
            .collect();

        let assignments = generate_assignments(self.assembly, self.config, &open);

        let mut created = 0;
        for assignment in assignments {
            let cost = self.step_cost(&parent_subassemblies, &assignment);

            let mut subassemblies = parent_subassemblies.clone();
            let mut actions = parent_actions.clone();
            for chosen in &assignment {
                // Consume every open predecessor of the chosen action.
                subassemblies.retain(|_, &mut s| {
                    !self
                        .assembly
                        .successor_nodes(s)
                        .contains(&chosen.action_node)
                });
                actions.insert(chosen.action.clone(), chosen.action_node);
            }
            for chosen in &assignment {
                for result in self.assembly.successor_nodes(chosen.action_node) {
                    if let Some(data) = self.assembly.node_data(result) {
                        subassemblies.insert(data.name().to_string(), result);
                    }
                }
            }

            let child = search.fresh_id();
            search.insert_node(
                child,
                SearchNode::child(subassemblies, actions, parent_g + cost),
            );
            search
                .insert_edge(
                    SearchEdge {
                        cost,
                        planned_assignments: assignment,
                    },
                    node,
                    child,
                )
                .expect("expansion endpoints are live search nodes");
            created += 1;
        }

        self.update_minimum_cost_action(search, node, &open);
        created
    }

    /// The summed step cost of one assignment vector.
    ///
    /// Each entry contributes the action's cost for its agent; when the
    /// action's target subassembly is unreachable for that agent and an
    /// interaction exists, the interaction's cost entry for the same
    /// agent is added on top. Infinity propagates through the sum.
    fn step_cost(
        &self,
        open_frontier: &BTreeMap<String, NodeId>,
        assignment: &[Assignment],
    ) -> f64 {
        let mut total = 0.0;
        for chosen in assignment {
            let action_cost = self
                .config
                .actions
                .get(&chosen.action)
                .map_or(f64::INFINITY, |spec| spec.cost_for(&chosen.agent));
            total += action_cost;
            if let Some(target) = self.target_subassembly(open_frontier, chosen.action_node) {
                if let Some(reach) = self.config.reach_for(&target, &chosen.agent) {
                    if !reach.reachable {
                        if let Some(interaction) = &reach.interaction {
                            total += interaction.cost_for(&chosen.agent);
                        }
                    }
                }
            }
        }
        total
    }

    /// The open subassembly an action realizes: the first (in name order)
    /// frontier entry that lists the action among its candidates.
    fn target_subassembly(
        &self,
        open_frontier: &BTreeMap<String, NodeId>,
        action: NodeId,
    ) -> Option<String> {
        open_frontier
            .iter()
            .find(|(_, &s)| self.assembly.successor_nodes(s).contains(&action))
            .map(|(name, _)| name.clone())
    }

    /// Record the cheapest finite candidate cost on the expanded node.
    /// The heuristic multiplies this by the name-length factor.
    fn update_minimum_cost_action(
        &self,
        search: &mut crate::node::SearchGraph,
        node: NodeId,
        open: &[NodeId],
    ) {
        let mut minimum = NO_FINITE_COST;
        for &s in open {
            for candidate in self.assembly.successor_nodes(s) {
                let Some(data) = self.assembly.node_data(candidate) else {
                    continue;
                };
                if let Some(spec) = self.config.actions.get(data.name()) {
                    if let Some(cost) = spec.minimum_finite_cost() {
                        if cost < minimum {
                            minimum = cost;
                        }
                    }
                }
            }
        }
        if let Some(state) = search.node_data_mut(node) {
            state.minimum_cost_action = minimum;
        }
    }
}
