//! Plan extraction and annotation.
//!
//! A goal node plus the predecessor chain back to the search root IS the
//! plan; each search edge on that chain carries the concurrent
//! assignments of one step. This module turns the chain into an ordered
//! step list, renders it as JSON, and materializes the annotated plan
//! graph the writers consume.

use std::collections::BTreeMap;

use aoplan_graph::assembly::{AssemblyEdge, AssemblyGraph, AssemblyNode};
use aoplan_graph::config::Configuration;
use aoplan_graph::container::NodeId;

use crate::node::{Assignment, SearchGraph};

/// One step of the plan: the assignments executed concurrently and their
/// summed cost.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStep {
    pub assignments: Vec<Assignment>,
    pub cost: f64,
}

/// A complete plan, root-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
    pub total_cost: f64,
}

impl Plan {
    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps (the product was already primitive).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render the plan as a JSON value.
    ///
    /// Non-finite costs render as `null` per JSON number rules; a plan
    /// with a finite total never contains them.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "steps": self.steps.iter().map(step_to_json).collect::<Vec<_>>(),
            "total_cost": self.total_cost,
        })
    }

    /// Compact JSON bytes of [`Plan::to_json_value`], used by the
    /// determinism tests as the canonical rendering.
    #[must_use]
    pub fn to_json_bytes(&self) -> Vec<u8> {
        self.to_json_value().to_string().into_bytes()
    }
}

fn step_to_json(step: &PlanStep) -> serde_json::Value {
    serde_json::json!({
        "assignments": step
            .assignments
            .iter()
            .map(|a| {
                serde_json::json!({
                    "agent": a.agent,
                    "action": a.action,
                    "action_node": a.action_node,
                })
            })
            .collect::<Vec<_>>(),
        "cost": step.cost,
    })
}

/// Walk predecessor edges from the goal back to the search root and
/// collect the steps root-first.
///
/// The search graph is a tree, so every node has at most one predecessor
/// edge; the goal's `g_score` is the plan's total cost.
#[must_use]
pub fn extract_plan(search: &SearchGraph, goal: NodeId) -> Plan {
    let total_cost = search.node_data(goal).map_or(0.0, |n| n.g_score);

    let mut steps = Vec::new();
    let mut current = goal;
    while let Some(&edge) = search.predecessor_edges(current).first() {
        if let Some(data) = search.edge_data(edge) {
            steps.push(PlanStep {
                assignments: data.planned_assignments.clone(),
                cost: data.cost,
            });
        }
        match search.edge_endpoints(edge) {
            Some((src, _)) => current = src,
            None => break,
        }
    }
    steps.reverse();

    Plan { steps, total_cost }
}

/// Materialize the annotated plan graph for the writers.
///
/// The result contains the root subassembly, and for every planned
/// assignment: the chosen action stamped with its agent, the action's
/// parent subassemblies, and its result subassemblies, wired with the
/// assembly graph's edges. When an assignment's agent could not reach a
/// parent subassembly, the compensating interaction is added as an extra
/// successor of that subassembly, annotated with the same agent.
#[must_use]
pub fn annotate_assembly(
    assembly: &AssemblyGraph,
    config: &Configuration,
    plan: &Plan,
) -> AssemblyGraph {
    let mut out = AssemblyGraph::new();
    let mut ids: BTreeMap<String, NodeId> = BTreeMap::new();

    let mut add_node = |out: &mut AssemblyGraph, node: AssemblyNode| -> NodeId {
        if let Some(&existing) = ids.get(node.name()) {
            return existing;
        }
        let id = out.fresh_id();
        let name = node.name().to_string();
        out.insert_node(id, node);
        ids.insert(name, id);
        id
    };

    // The root subassembly anchors the output even for an empty plan.
    let root_name = assembly
        .root()
        .and_then(|r| assembly.node_data(r))
        .map(|n| n.name().to_string());
    if let Some(name) = &root_name {
        let id = add_node(&mut out, AssemblyNode::subassembly(name.clone()));
        out.set_root(id);
    }

    for step in &plan.steps {
        for assignment in &step.assignments {
            let mut action_node =
                AssemblyNode::action(assignment.action.clone());
            action_node.assign_agent(assignment.agent.clone());
            let action_id = add_node(&mut out, action_node);

            for parent in assembly.predecessor_nodes(assignment.action_node) {
                let Some(parent_data) = assembly.node_data(parent) else {
                    continue;
                };
                let parent_id = add_node(
                    &mut out,
                    AssemblyNode::subassembly(parent_data.name().to_string()),
                );
                if out.find_edge(parent_id, action_id).is_none() {
                    let _ = out.insert_edge(AssemblyEdge, parent_id, action_id);
                }

                if let Some(reach) = config.reach_for(parent_data.name(), &assignment.agent) {
                    if !reach.reachable {
                        if let Some(interaction) = &reach.interaction {
                            let interaction_id = add_node(
                                &mut out,
                                AssemblyNode::interaction(
                                    interaction.name.clone(),
                                    assignment.agent.clone(),
                                ),
                            );
                            if out.find_edge(parent_id, interaction_id).is_none() {
                                let _ =
                                    out.insert_edge(AssemblyEdge, parent_id, interaction_id);
                            }
                        }
                    }
                }
            }

            for result in assembly.successor_nodes(assignment.action_node) {
                let Some(result_data) = assembly.node_data(result) else {
                    continue;
                };
                let result_id = add_node(
                    &mut out,
                    AssemblyNode::subassembly(result_data.name().to_string()),
                );
                if out.find_edge(action_id, result_id).is_none() {
                    let _ = out.insert_edge(AssemblyEdge, action_id, result_id);
                }
            }
        }
    }

    out
}
