//! Agent/action assignment enumeration.
//!
//! Given the open subassemblies of a planning state, produce every legal
//! way of extending the plan by one step: pick one candidate action per
//! open subassembly, pick a non-empty subset of agents, and map each
//! chosen agent onto a distinct action of the tuple. All three
//! enumerations are order-normative — the plan the search returns depends
//! on them for tie-breaking, so the orders below must not change:
//!
//! 1. action tuples: Cartesian product in lexicographic index order,
//!    candidates per subassembly in graph insertion order;
//! 2. agent subsets: sizes ascending, subsets of each size in
//!    reverse-lexicographic selector order;
//! 3. agent→action maps: k-prefix permutations in the order produced by
//!    repeated tail-reversal + next-permutation.
//!
//! Everything here is a pure function returning fresh containers; no
//! state is carried between calls.

use aoplan_graph::assembly::AssemblyGraph;
use aoplan_graph::config::Configuration;
use aoplan_graph::container::NodeId;

use crate::node::Assignment;

/// Enumerate every legal assignment vector for the given open
/// subassemblies.
///
/// `open` holds assembly-graph ids of subassemblies that still have
/// candidate actions. An empty `open` yields no assignments (the state is
/// already a goal and expansion is a no-op). When `open` is larger than
/// the agent pool, assignments shorter than `open.len()` are produced and
/// some subassemblies wait for a later step. Assignments whose pairing is
/// impossible (infinite cost) are still emitted; the cost model penalizes
/// them instead of the enumeration filtering them.
#[must_use]
pub fn generate_assignments(
    assembly: &AssemblyGraph,
    config: &Configuration,
    open: &[NodeId],
) -> Vec<Vec<Assignment>> {
    let limit = open.len().min(config.agents.len());
    if limit == 0 {
        return Vec::new();
    }

    let action_tuples = action_combination_sets(assembly, open);
    let agents = config.agent_names();

    let mut assignments = Vec::new();
    for k in 1..=limit {
        for subset in agent_combination_sets(&agents, k) {
            for tuple in &action_tuples {
                assign_agents_to_actions(&subset, tuple, &mut assignments);
            }
        }
    }
    assignments
}

/// The Cartesian product of each open subassembly's candidate action
/// list, in lexicographic order over per-subassembly indices.
///
/// Candidate order within a subassembly is the assembly graph's edge
/// insertion order. If any subassembly has no candidate actions the
/// product is empty.
#[must_use]
pub fn action_combination_sets(
    assembly: &AssemblyGraph,
    open: &[NodeId],
) -> Vec<Vec<(String, NodeId)>> {
    let candidates: Vec<Vec<(String, NodeId)>> = open
        .iter()
        .map(|&s| {
            assembly
                .successor_nodes(s)
                .into_iter()
                .filter_map(|a| {
                    assembly
                        .node_data(a)
                        .map(|data| (data.name().to_string(), a))
                })
                .collect()
        })
        .collect();
    if candidates.iter().any(Vec::is_empty) {
        return Vec::new();
    }

    let n = candidates.len();
    let mut indices = vec![0usize; n];
    let mut tuples = Vec::new();
    loop {
        tuples.push(
            (0..n)
                .map(|i| candidates[i][indices[i]].clone())
                .collect(),
        );

        // Advance the rightmost index that still has candidates left.
        let mut next = n as isize - 1;
        while next >= 0 && indices[next as usize] + 1 >= candidates[next as usize].len() {
            next -= 1;
        }
        if next < 0 {
            break;
        }
        let next = next as usize;
        indices[next] += 1;
        for slot in indices.iter_mut().skip(next + 1) {
            *slot = 0;
        }
    }
    tuples
}

/// All k-element subsets of the agent vector, each as an ordered vector
/// of names, enumerated by walking a boolean selector backwards through
/// its lexicographic permutations.
#[must_use]
pub fn agent_combination_sets(agents: &[String], k: usize) -> Vec<Vec<String>> {
    let n = agents.len();
    if k == 0 || k > n {
        return Vec::new();
    }

    let mut selector = vec![false; n];
    for slot in selector.iter_mut().take(k) {
        *slot = true;
    }

    let mut subsets = Vec::new();
    loop {
        subsets.push(
            agents
                .iter()
                .zip(&selector)
                .filter(|(_, &selected)| selected)
                .map(|(name, _)| name.clone())
                .collect(),
        );
        if !prev_permutation(&mut selector) {
            break;
        }
    }
    subsets
}

/// Map each of the `k` subset agents onto a distinct action of the tuple,
/// appending one assignment vector per k-prefix permutation.
///
/// The index vector walks `[0, n)`; after each emission the tail past the
/// agent count is reversed so that `next_permutation` steps straight to
/// the next distinct k-prefix instead of churning through tail orderings.
fn assign_agents_to_actions(
    agents: &[String],
    actions: &[(String, NodeId)],
    out: &mut Vec<Vec<Assignment>>,
) {
    let n = actions.len();
    let k = agents.len();
    debug_assert!(k <= n, "agent subsets never outnumber the action tuple");

    let mut d: Vec<usize> = (0..n).collect();
    loop {
        out.push(
            agents
                .iter()
                .enumerate()
                .map(|(i, agent)| {
                    let (action, action_node) = &actions[d[i]];
                    Assignment {
                        agent: agent.clone(),
                        action: action.clone(),
                        action_node: *action_node,
                    }
                })
                .collect(),
        );
        d[k..].reverse();
        if !next_permutation(&mut d) {
            break;
        }
    }
}

/// Rearrange `seq` into its next lexicographic permutation.
///
/// Returns `false` (leaving `seq` sorted ascending) when the input was
/// the last permutation — the `std::next_permutation` contract the
/// enumeration orders are defined against.
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }
    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        seq.reverse();
        return false;
    }
    let mut j = seq.len() - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// Rearrange `seq` into its previous lexicographic permutation.
///
/// Returns `false` (leaving `seq` sorted descending) when the input was
/// the first permutation.
pub fn prev_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }
    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] <= seq[i] {
        i -= 1;
    }
    if i == 0 {
        seq.reverse();
        return false;
    }
    let mut j = seq.len() - 1;
    while seq[j] >= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}
