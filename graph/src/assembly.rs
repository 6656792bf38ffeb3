//! AND/OR assembly node model.
//!
//! Subassemblies are OR nodes (realized by any one successor action);
//! actions are AND nodes (every successor subassembly must be further
//! realized). Interaction and interassembly nodes exist for the plan
//! writer; the planner itself never creates them in the input graph.

use crate::container::Graph;

/// The AND/OR kind of an assembly node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Action,
    Subassembly,
    Interaction,
    Interassembly,
}

/// Payload of one assembly graph node.
///
/// `assigned_agent` is only representable on the action-like variants, so
/// a subassembly can never carry an agent annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyNode {
    /// A (sub-)product state, realized by any one of its successor actions.
    Subassembly { name: String },
    /// An assembly/disassembly operation, executable by one agent.
    Action {
        name: String,
        assigned_agent: Option<String>,
    },
    /// An auxiliary action charged when the primary agent cannot reach the
    /// target subassembly. Emitted only into annotated plan graphs.
    Interaction {
        name: String,
        assigned_agent: Option<String>,
    },
    /// Reserved kind for joined subassembly states.
    Interassembly { name: String },
}

impl AssemblyNode {
    /// A subassembly node.
    #[must_use]
    pub fn subassembly(name: impl Into<String>) -> Self {
        Self::Subassembly { name: name.into() }
    }

    /// An action node with no agent assigned yet.
    #[must_use]
    pub fn action(name: impl Into<String>) -> Self {
        Self::Action {
            name: name.into(),
            assigned_agent: None,
        }
    }

    /// An interaction node annotated with the agent it is charged to.
    #[must_use]
    pub fn interaction(name: impl Into<String>, agent: impl Into<String>) -> Self {
        Self::Interaction {
            name: name.into(),
            assigned_agent: Some(agent.into()),
        }
    }

    /// The node's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Subassembly { name }
            | Self::Action { name, .. }
            | Self::Interaction { name, .. }
            | Self::Interassembly { name } => name,
        }
    }

    /// The node's AND/OR kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Subassembly { .. } => NodeKind::Subassembly,
            Self::Action { .. } => NodeKind::Action,
            Self::Interaction { .. } => NodeKind::Interaction,
            Self::Interassembly { .. } => NodeKind::Interassembly,
        }
    }

    /// The assigned agent, for action-like nodes that carry one.
    #[must_use]
    pub fn assigned_agent(&self) -> Option<&str> {
        match self {
            Self::Action { assigned_agent, .. } | Self::Interaction { assigned_agent, .. } => {
                assigned_agent.as_deref()
            }
            _ => None,
        }
    }

    /// Stamp the executing agent onto an action-like node.
    ///
    /// Returns `false` (and changes nothing) on subassembly or
    /// interassembly nodes.
    pub fn assign_agent(&mut self, agent: impl Into<String>) -> bool {
        match self {
            Self::Action { assigned_agent, .. } | Self::Interaction { assigned_agent, .. } => {
                *assigned_agent = Some(agent.into());
                true
            }
            _ => false,
        }
    }
}

/// Assembly edges carry no payload; adjacency alone encodes the AND/OR
/// decomposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyEdge;

/// The assembly graph: AND/OR decomposition of the product.
pub type AssemblyGraph = Graph<AssemblyNode, AssemblyEdge>;
