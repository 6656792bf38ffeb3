//! Name-keyed construction of assembly graphs.
//!
//! The input format identifies nodes by name; the factory owns the
//! name → handle mapping and assigns sequential ids in insertion order,
//! which fixes the edge enumeration order the search layer ties on.

use std::collections::BTreeMap;

use crate::assembly::{AssemblyEdge, AssemblyGraph, AssemblyNode, NodeKind};
use crate::container::{EdgeId, NodeId};
use crate::error::GraphError;

/// Builds an [`AssemblyGraph`] from a stream of typed node/edge insertions.
#[derive(Debug, Default)]
pub struct GraphFactory {
    graph: AssemblyGraph,
    names: BTreeMap<String, NodeId>,
}

impl GraphFactory {
    /// A factory with an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a subassembly (OR) node. Re-inserting the same name with the
    /// same kind is a no-op returning the existing id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NameCollision`] if the name was previously
    /// inserted for a node of a different kind.
    pub fn insert_or(&mut self, name: &str) -> Result<NodeId, GraphError> {
        self.insert_named(name, AssemblyNode::subassembly(name), NodeKind::Subassembly)
    }

    /// Insert an action (AND) node. Same collision rules as
    /// [`GraphFactory::insert_or`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NameCollision`] on a cross-kind name re-use.
    pub fn insert_and(&mut self, name: &str) -> Result<NodeId, GraphError> {
        self.insert_named(name, AssemblyNode::action(name), NodeKind::Action)
    }

    fn insert_named(
        &mut self,
        name: &str,
        node: AssemblyNode,
        kind: NodeKind,
    ) -> Result<NodeId, GraphError> {
        if let Some(&existing) = self.names.get(name) {
            let existing_kind = self
                .graph
                .node_data(existing)
                .map(AssemblyNode::kind)
                .expect("factory name table references a live node");
            if existing_kind == kind {
                return Ok(existing);
            }
            return Err(GraphError::NameCollision {
                name: name.to_string(),
            });
        }
        let id = self.graph.fresh_id();
        self.graph.insert_node(id, node);
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Insert an edge between two named nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownName`] if either name was never
    /// inserted.
    pub fn insert_edge(&mut self, from: &str, to: &str) -> Result<EdgeId, GraphError> {
        let src = self.node_id(from).ok_or_else(|| GraphError::UnknownName {
            name: from.to_string(),
        })?;
        let dst = self.node_id(to).ok_or_else(|| GraphError::UnknownName {
            name: to.to_string(),
        })?;
        self.graph.insert_edge(AssemblyEdge, src, dst)
    }

    /// Designate the root subassembly. Returns `false` if the name is
    /// unknown (the validator reports the missing root).
    pub fn set_root(&mut self, name: &str) -> bool {
        match self.node_id(name) {
            Some(id) => self.graph.set_root(id),
            None => false,
        }
    }

    /// The handle for a previously inserted name.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// Finish construction and hand the graph over.
    #[must_use]
    pub fn finish(self) -> AssemblyGraph {
        self.graph
    }
}
