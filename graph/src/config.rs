//! Planning configuration: agents, action costs, reachability.
//!
//! Costs are plain `f64` with `f64::INFINITY` standing for "this agent
//! cannot perform this action"; infinity survives cost accumulation, so
//! no sentinel arithmetic is needed anywhere downstream.

use std::collections::BTreeMap;

/// An executor (human or robot). Host and port are carried through from
/// the input for dispatching; the planner does not read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub host: String,
    pub port: String,
}

/// An action (or interaction) with its per-agent cost map.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    pub name: String,
    pub costs: BTreeMap<String, f64>,
}

impl ActionSpec {
    /// The cost of this action for one agent. A missing entry counts as
    /// unreachable; the validator rejects incomplete maps before planning,
    /// so this only fires on unvalidated input.
    #[must_use]
    pub fn cost_for(&self, agent: &str) -> f64 {
        self.costs.get(agent).copied().unwrap_or(f64::INFINITY)
    }

    /// The smallest finite cost entry, if any agent can perform the action.
    #[must_use]
    pub fn minimum_finite_cost(&self) -> Option<f64> {
        self.costs
            .values()
            .copied()
            .filter(|c| c.is_finite())
            .fold(None, |best, c| match best {
                Some(b) if b <= c => Some(b),
                _ => Some(c),
            })
    }
}

/// Whether one agent can reach a subassembly, and the interaction that
/// compensates when it cannot.
#[derive(Debug, Clone, PartialEq)]
pub struct Reach {
    pub reachable: bool,
    /// Present exactly when `reachable` is false in well-formed input.
    pub interaction: Option<ActionSpec>,
}

/// A subassembly with its per-agent reachability map.
#[derive(Debug, Clone, PartialEq)]
pub struct SubassemblySpec {
    pub name: String,
    pub reachability: BTreeMap<String, Reach>,
}

/// The full planning configuration, consumed read-only by the search layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    /// Agents in input document order. This order is normative: the
    /// combinator enumerates agent subsets over it.
    pub agents: Vec<Agent>,
    pub actions: BTreeMap<String, ActionSpec>,
    pub subassemblies: BTreeMap<String, SubassemblySpec>,
}

impl Configuration {
    /// Agent names in document order.
    #[must_use]
    pub fn agent_names(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name.clone()).collect()
    }

    /// Insert an agent, replacing any previous agent of the same name in
    /// place (the input format keys agents by name).
    pub fn upsert_agent(&mut self, agent: Agent) {
        match self.agents.iter_mut().find(|a| a.name == agent.name) {
            Some(slot) => *slot = agent,
            None => self.agents.push(agent),
        }
    }

    /// The reachability entry for one (subassembly, agent) pair.
    #[must_use]
    pub fn reach_for(&self, subassembly: &str, agent: &str) -> Option<&Reach> {
        self.subassemblies
            .get(subassembly)
            .and_then(|s| s.reachability.get(agent))
    }
}
