use crate::flow_network::{EdgeId, VertexId};
use num_traits::NumAssign;

/// An edge in the residual network.
///
/// Forward edges carry the input capacities and the current flow. A reverse
/// edge exists only while its paired forward edge carries positive flow, and
/// its capacity field always mirrors that flow; its own flow stays zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<F> {
    pub(crate) from: VertexId,
    pub(crate) to: VertexId,
    pub(crate) capacity: F,
    pub(crate) flow: F,
    // paired forward edge, set iff this is a reverse edge
    pub(crate) forward: Option<EdgeId>,
    // paired reverse edge, set iff this is a forward edge with flow > 0
    pub(crate) reverse: Option<EdgeId>,
}

impl<F> Edge<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    pub(crate) fn forward_edge(from: VertexId, to: VertexId, capacity: F) -> Self {
        Edge { from, to, capacity, flow: F::zero(), forward: None, reverse: None }
    }

    pub(crate) fn reverse_edge(forward: EdgeId, from: VertexId, to: VertexId, capacity: F) -> Self {
        Edge { from, to, capacity, flow: F::zero(), forward: Some(forward), reverse: None }
    }

    #[inline]
    pub fn from(&self) -> VertexId {
        self.from
    }

    #[inline]
    pub fn to(&self) -> VertexId {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> F {
        self.capacity
    }

    /// Flow on this edge. Always zero for reverse edges; cancellation is
    /// recorded on the paired forward edge instead.
    #[inline]
    pub fn flow(&self) -> F {
        self.flow
    }

    /// `capacity - flow` for a forward edge; for a reverse edge the capacity
    /// field itself, which equals the paired forward edge's flow.
    #[inline]
    pub fn residual_capacity(&self) -> F {
        if self.is_reverse() {
            self.capacity
        } else {
            self.capacity - self.flow
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.forward.is_some()
    }

    /// Paired forward edge, present iff this is a reverse edge.
    #[inline]
    pub fn forward_edge_id(&self) -> Option<EdgeId> {
        self.forward
    }

    /// Paired reverse edge, present iff this forward edge carries flow.
    #[inline]
    pub fn reverse_edge_id(&self) -> Option<EdgeId> {
        self.reverse
    }
}
