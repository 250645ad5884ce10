use crate::flow_network::edge::Edge;
use crate::flow_network::error::FlowError;
use crate::flow_network::input::InputGraph;
use crate::flow_network::vertex::Vertex;
use crate::flow_network::{EdgeId, VertexId};
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt::Debug;

/// The mutable residual network the algorithms drive to a maximum flow.
///
/// Vertices and edges live in index-addressed arenas; the forward/reverse
/// pairing is a pair of optional edge indices, so pruning a reverse edge is
/// an index-table update rather than pointer surgery. All flow arithmetic
/// goes through [`FlowNetwork::increase_flow`].
pub struct FlowNetwork<F> {
    vertices: Vec<Vertex<F>>,
    edges: Vec<Edge<F>>,
    free_edge_slots: Vec<EdgeId>,
    source: VertexId,
    sink: VertexId,
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    /// Builds the residual network from the abstract input graph. The
    /// source and sink are designated explicitly by name rather than by
    /// reserved identifiers.
    pub fn from_input(input: &InputGraph<F>, source: &str, sink: &str) -> Result<Self, FlowError> {
        let mut index: HashMap<&str, VertexId> = HashMap::new();
        let mut vertices = Vec::new();
        for name in input.vertices() {
            if index.insert(name, vertices.len()).is_some() {
                return Err(FlowError::MalformedInput(format!("duplicate vertex {name}")));
            }
            vertices.push(Vertex::new(name));
        }

        let source = *index
            .get(source)
            .ok_or_else(|| FlowError::MalformedInput(format!("no source vertex named {source}")))?;
        let sink = *index
            .get(sink)
            .ok_or_else(|| FlowError::MalformedInput(format!("no sink vertex named {sink}")))?;
        if source == sink {
            return Err(FlowError::MalformedInput("source and sink must be distinct vertices".to_string()));
        }

        let mut network = FlowNetwork { vertices, edges: Vec::new(), free_edge_slots: Vec::new(), source, sink };
        for edge in input.edges() {
            let from = *index
                .get(edge.from.as_str())
                .ok_or_else(|| FlowError::MalformedInput(format!("edge endpoint {} is not a vertex", edge.from)))?;
            let to = *index
                .get(edge.to.as_str())
                .ok_or_else(|| FlowError::MalformedInput(format!("edge endpoint {} is not a vertex", edge.to)))?;
            if edge.capacity < F::zero() {
                return Err(FlowError::MalformedInput(format!(
                    "negative capacity {:?} on edge {} -> {}",
                    edge.capacity, edge.from, edge.to
                )));
            }
            let edge_id = network.allocate_edge(Edge::forward_edge(from, to, edge.capacity));
            network.attach_edge(from, edge_id)?;
        }

        Ok(network)
    }

    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex<F> {
        &self.vertices[id]
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge<F> {
        &self.edges[id]
    }

    pub fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.vertices.iter().position(|v| v.name() == name)
    }

    /// Sum of flow over the non-reverse edges leaving the source. This is
    /// the reported maximum-flow value once an algorithm terminates, and it
    /// is a pure query.
    pub fn total_outflow(&self) -> F {
        self.outgoing_flow(self.source)
    }

    /// Sum of capacity over the non-reverse edges leaving `id`.
    pub fn outgoing_capacity(&self, id: VertexId) -> F {
        self.vertices[id]
            .edges()
            .iter()
            .map(|&e| &self.edges[e])
            .filter(|e| !e.is_reverse())
            .fold(F::zero(), |sum, e| sum + e.capacity())
    }

    /// Sum of flow over the non-reverse edges leaving `id`.
    pub fn outgoing_flow(&self, id: VertexId) -> F {
        self.vertices[id]
            .edges()
            .iter()
            .map(|&e| &self.edges[e])
            .filter(|e| !e.is_reverse())
            .fold(F::zero(), |sum, e| sum + e.flow())
    }

    /// First outgoing edge of `id` (forward or reverse, adjacency order)
    /// with positive residual capacity whose destination sits strictly
    /// below `id`'s height. Used by preflow-push to find a push target.
    ///
    /// Forward edges into the source are never targets: routing new flow
    /// into the source would leave a circulation inflating the gross
    /// outflow, and stranded excess can always return by cancelling the
    /// reverse edges the preflow created.
    pub fn lower_neighbor_edge(&self, id: VertexId) -> Option<EdgeId> {
        let height = self.vertices[id].height();
        self.vertices[id].edges().iter().copied().find(|&e| {
            let edge = &self.edges[e];
            if edge.residual_capacity() <= F::zero() {
                return false;
            }
            if !edge.is_reverse() && edge.to() == self.source {
                return false;
            }
            self.vertices[edge.to()].height() < height
        })
    }

    pub fn reset_visited_marks(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_visited(false);
        }
    }

    pub fn mark_visited(&mut self, id: VertexId) {
        self.vertices[id].set_visited(true);
    }

    pub fn set_height(&mut self, id: VertexId, height: usize) {
        self.vertices[id].set_height(height);
    }

    /// Increases flow along `edge_id` by `amount`, maintaining the
    /// forward/reverse duality.
    ///
    /// On a forward edge this bumps the flow, lazily creates the reverse
    /// edge on first positive flow (or mirrors the new flow into an
    /// existing one), and moves `amount` of excess from origin to
    /// destination. On a reverse edge it cancels flow on the paired forward
    /// edge, reverses that edge's excess transfer, and prunes itself from
    /// the residual graph when its capacity reaches exactly zero.
    pub fn increase_flow(&mut self, edge_id: EdgeId, amount: F) -> Result<(), FlowError> {
        if amount < F::zero() {
            return Err(FlowError::CapacityViolation(format!("negative increment {amount:?}")));
        }

        match self.edges[edge_id].forward {
            Some(forward_id) => {
                let available = self.edges[edge_id].capacity;
                if amount > available {
                    return Err(FlowError::CapacityViolation(format!(
                        "increment {amount:?} on reverse edge with residual capacity {available:?}"
                    )));
                }

                self.edges[edge_id].capacity -= amount;
                self.edges[forward_id].flow -= amount;

                // cancelling undoes the forward edge's excess transfer
                let (from, to) = (self.edges[forward_id].from, self.edges[forward_id].to);
                self.vertices[from].increase_excess(amount);
                self.vertices[to].decrease_excess(amount);

                if self.edges[edge_id].capacity == F::zero() {
                    // no residual capacity left; drop the reverse edge so no
                    // search traverses it again
                    self.edges[forward_id].reverse = None;
                    let origin = self.edges[edge_id].from;
                    self.vertices[origin].detach(edge_id);
                    self.free_edge_slots.push(edge_id);
                }
            }
            None => {
                let edge = &self.edges[edge_id];
                if edge.flow + amount > edge.capacity {
                    return Err(FlowError::CapacityViolation(format!(
                        "increment {:?} on forward edge with capacity {:?} and flow {:?}",
                        amount, edge.capacity, edge.flow
                    )));
                }

                self.edges[edge_id].flow += amount;
                let (from, to, flow) = (self.edges[edge_id].from, self.edges[edge_id].to, self.edges[edge_id].flow);

                match self.edges[edge_id].reverse {
                    Some(reverse_id) => self.edges[reverse_id].capacity = flow,
                    None if flow > F::zero() => {
                        let reverse_id = self.allocate_edge(Edge::reverse_edge(edge_id, to, from, flow));
                        self.edges[edge_id].reverse = Some(reverse_id);
                        self.attach_edge(to, reverse_id)?;
                    }
                    None => {}
                }

                self.vertices[from].decrease_excess(amount);
                self.vertices[to].increase_excess(amount);
            }
        }

        Ok(())
    }

    fn allocate_edge(&mut self, edge: Edge<F>) -> EdgeId {
        match self.free_edge_slots.pop() {
            Some(id) => {
                self.edges[id] = edge;
                id
            }
            None => {
                self.edges.push(edge);
                self.edges.len() - 1
            }
        }
    }

    /// Registers `edge_id` in the adjacency of `vertex`, which must be the
    /// edge's recorded origin.
    fn attach_edge(&mut self, vertex: VertexId, edge_id: EdgeId) -> Result<(), FlowError> {
        let origin = self.edges[edge_id].from;
        if origin != vertex {
            return Err(FlowError::StructuralInvariantViolation(format!(
                "attaching edge with origin {} to vertex {}",
                self.vertices[origin].name(),
                self.vertices[vertex].name()
            )));
        }
        self.vertices[vertex].attach(edge_id);
        Ok(())
    }
}
