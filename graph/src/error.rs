//! Typed graph and validation errors.

/// Typed failure for graph container and factory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint references a node id that is not in the graph.
    NodeNotFound { id: usize },

    /// No edge exists between the given endpoints.
    EdgeNotFound { src: usize, dst: usize },

    /// A node name was re-used for a node of a different kind.
    NameCollision { name: String },

    /// A name-keyed operation referenced a name that was never inserted.
    UnknownName { name: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeNotFound { id } => write!(f, "node {id} not in graph"),
            Self::EdgeNotFound { src, dst } => {
                write!(f, "no edge from node {src} to node {dst}")
            }
            Self::NameCollision { name } => {
                write!(f, "node name `{name}` already used for a different node kind")
            }
            Self::UnknownName { name } => write!(f, "unknown node name `{name}`"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Typed failure for structural validation of an assembly problem.
///
/// Every variant is fatal for the current invocation; nothing is retried
/// and no partial plan is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The configuration declares no agents.
    NoAgents,

    /// A subassembly's reachability map does not cover some agent.
    MissingReach { subassembly: String, agent: String },

    /// An action's cost map does not cover some agent.
    MissingCost { action: String, agent: String },

    /// An edge connects two nodes of the same AND/OR kind.
    NonBipartiteEdge { from: String, to: String },

    /// No root subassembly was designated.
    RootMissing,

    /// The designated root is not a subassembly node of the graph.
    UnknownRoot { name: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAgents => write!(f, "no agents provided"),
            Self::MissingReach { subassembly, agent } => write!(
                f,
                "agent `{agent}` is missing in the reachability map of subassembly `{subassembly}`"
            ),
            Self::MissingCost { action, agent } => {
                write!(f, "cost of `{action}` for agent `{agent}` is missing")
            }
            Self::NonBipartiteEdge { from, to } => write!(
                f,
                "graph is not an AND/OR graph: edge `{from}` -> `{to}` joins nodes of the same kind"
            ),
            Self::RootMissing => write!(f, "no root subassembly designated"),
            Self::UnknownRoot { name } => {
                write!(f, "designated root `{name}` is not a subassembly of the graph")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
