//! Generic directed multigraph with stable integer handles.
//!
//! Nodes and edges live in arenas owned by the graph; incidence lists store
//! edge handles and edges store endpoint node handles, so there is no
//! aliasing between records. Edge handles stay valid across erasure
//! (tombstoned slots), and all enumeration — the edge arena, and each
//! node's predecessor/successor lists — is insertion-ordered. The search
//! layer depends on that order for deterministic tie-breaking.

use std::collections::BTreeMap;

use crate::error::GraphError;

/// Opaque node identity. Assigned by the caller (the factory hands out
/// sequential ids).
pub type NodeId = usize;

/// Opaque edge identity, stable for the lifetime of the graph.
pub type EdgeId = usize;

#[derive(Debug, Clone)]
struct NodeRecord<N> {
    data: N,
    predecessors: Vec<EdgeId>,
    successors: Vec<EdgeId>,
}

#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    data: E,
    source: NodeId,
    destination: NodeId,
}

/// A directed multigraph parameterized by node and edge payload types.
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: BTreeMap<NodeId, NodeRecord<N>>,
    edges: Vec<Option<EdgeRecord<E>>>,
    live_edges: usize,
    root: Option<NodeId>,
}

impl<N, E> Graph<N, E> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            live_edges: 0,
            root: None,
        }
    }

    /// Number of nodes currently in the graph.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges currently in the graph.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.live_edges
    }

    /// Smallest id strictly greater than every id ever inserted.
    ///
    /// Callers that let the graph drive id assignment (the search layer
    /// does) allocate with this and pass the result to [`Graph::insert_node`].
    #[must_use]
    pub fn fresh_id(&self) -> NodeId {
        self.nodes.last_key_value().map_or(0, |(id, _)| id + 1)
    }

    /// Whether a node with the given id is present.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Insert a node under a caller-assigned id.
    ///
    /// On id collision the original node is kept and `false` is returned
    /// (`std::collections` map-insert no-overwrite semantics, matching the
    /// documented collision policy).
    pub fn insert_node(&mut self, node: NodeId, data: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        self.nodes.insert(
            node,
            NodeRecord {
                data,
                predecessors: Vec::new(),
                successors: Vec::new(),
            },
        );
        true
    }

    /// Insert a directed edge between two existing nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent.
    pub fn insert_edge(
        &mut self,
        data: E,
        src: NodeId,
        dst: NodeId,
    ) -> Result<EdgeId, GraphError> {
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound { id: src });
        }
        if !self.nodes.contains_key(&dst) {
            return Err(GraphError::NodeNotFound { id: dst });
        }

        let edge = self.edges.len();
        self.edges.push(Some(EdgeRecord {
            data,
            source: src,
            destination: dst,
        }));
        self.live_edges += 1;

        if let Some(record) = self.nodes.get_mut(&src) {
            record.successors.push(edge);
        }
        if let Some(record) = self.nodes.get_mut(&dst) {
            record.predecessors.push(edge);
        }
        Ok(edge)
    }

    /// Find the first edge from `src` to `dst`, by linear scan over the
    /// edge arena in insertion order.
    #[must_use]
    pub fn find_edge(&self, src: NodeId, dst: NodeId) -> Option<EdgeId> {
        self.edges.iter().enumerate().find_map(|(id, slot)| {
            slot.as_ref().and_then(|e| {
                (e.source == src && e.destination == dst).then_some(id)
            })
        })
    }

    /// Remove the first edge from `src` to `dst`, returning its handle.
    /// The incidence lists of both endpoints are scrubbed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent
    /// and [`GraphError::EdgeNotFound`] if no edge joins them.
    pub fn remove_edge(&mut self, src: NodeId, dst: NodeId) -> Result<EdgeId, GraphError> {
        if !self.nodes.contains_key(&src) {
            return Err(GraphError::NodeNotFound { id: src });
        }
        if !self.nodes.contains_key(&dst) {
            return Err(GraphError::NodeNotFound { id: dst });
        }
        let edge = self
            .find_edge(src, dst)
            .ok_or(GraphError::EdgeNotFound { src, dst })?;
        self.tombstone_edge(edge);
        Ok(edge)
    }

    /// Erase the first edge from `src` to `dst`.
    ///
    /// The bool-returning convenience over [`Graph::remove_edge`];
    /// `false` covers both unknown endpoints and a missing edge.
    pub fn erase_edge(&mut self, src: NodeId, dst: NodeId) -> bool {
        self.remove_edge(src, dst).is_ok()
    }

    /// Erase a node and every incident edge.
    ///
    /// Returns `false` if the node is unknown. Neighbors' incidence lists
    /// drop all references to the removed edges.
    pub fn erase_node(&mut self, node: NodeId) -> bool {
        let Some(record) = self.nodes.remove(&node) else {
            return false;
        };
        for edge in record.predecessors.into_iter().chain(record.successors) {
            // A self-loop appears in both lists; the second pass is a no-op.
            self.tombstone_edge(edge);
        }
        if self.root == Some(node) {
            self.root = None;
        }
        true
    }

    fn tombstone_edge(&mut self, edge: EdgeId) {
        let Some(record) = self.edges.get_mut(edge).and_then(Option::take) else {
            return;
        };
        self.live_edges -= 1;
        if let Some(node) = self.nodes.get_mut(&record.source) {
            node.successors.retain(|&e| e != edge);
        }
        if let Some(node) = self.nodes.get_mut(&record.destination) {
            node.predecessors.retain(|&e| e != edge);
        }
    }

    /// Successor edges of a node, in insertion order. Unknown nodes have
    /// no successors.
    #[must_use]
    pub fn successor_edges(&self, node: NodeId) -> &[EdgeId] {
        self.nodes
            .get(&node)
            .map_or(&[][..], |n| n.successors.as_slice())
    }

    /// Predecessor edges of a node, in insertion order.
    #[must_use]
    pub fn predecessor_edges(&self, node: NodeId) -> &[EdgeId] {
        self.nodes
            .get(&node)
            .map_or(&[][..], |n| n.predecessors.as_slice())
    }

    /// Number of successor edges of a node.
    #[must_use]
    pub fn number_of_successors(&self, node: NodeId) -> usize {
        self.successor_edges(node).len()
    }

    /// Number of predecessor edges of a node.
    #[must_use]
    pub fn number_of_predecessors(&self, node: NodeId) -> usize {
        self.predecessor_edges(node).len()
    }

    /// Nodes reachable from `node` by one successor edge, in edge
    /// insertion order.
    #[must_use]
    pub fn successor_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.successor_edges(node)
            .iter()
            .filter_map(|&e| self.edge_endpoints(e).map(|(_, dst)| dst))
            .collect()
    }

    /// Nodes with an edge into `node`, in edge insertion order.
    #[must_use]
    pub fn predecessor_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.predecessor_edges(node)
            .iter()
            .filter_map(|&e| self.edge_endpoints(e).map(|(src, _)| src))
            .collect()
    }

    /// Shared access to a node's payload.
    #[must_use]
    pub fn node_data(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(&node).map(|n| &n.data)
    }

    /// Mutable access to a node's payload.
    pub fn node_data_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(&node).map(|n| &mut n.data)
    }

    /// Shared access to an edge's payload.
    #[must_use]
    pub fn edge_data(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge).and_then(|e| e.as_ref()).map(|e| &e.data)
    }

    /// The `(source, destination)` endpoints of an edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges
            .get(edge)
            .and_then(|e| e.as_ref())
            .map(|e| (e.source, e.destination))
    }

    /// The designated root node, if set.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Designate the root node. Returns `false` if the node is unknown.
    pub fn set_root(&mut self, node: NodeId) -> bool {
        if !self.nodes.contains_key(&node) {
            return false;
        }
        self.root = Some(node);
        true
    }

    /// Iterate all nodes as `(id, payload)` in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> {
        self.nodes.iter().map(|(&id, record)| (id, &record.data))
    }

    /// Iterate all live edges as `(id, payload, source, destination)` in
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E, NodeId, NodeId)> {
        self.edges.iter().enumerate().filter_map(|(id, slot)| {
            slot.as_ref()
                .map(|e| (id, &e.data, e.source, e.destination))
        })
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
