use crate::flow_network::EdgeId;
use num_traits::NumAssign;

/// A vertex in the residual network: its name, the ordered adjacency of
/// edges originating here (forward and reverse), and the per-vertex state
/// the algorithms mutate.
#[derive(Debug, Clone)]
pub struct Vertex<F> {
    name: String,
    edges: Vec<EdgeId>,
    excess: F,
    height: usize,
    visited: bool,
}

impl<F> Vertex<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    pub(crate) fn new(name: &str) -> Self {
        Vertex { name: name.to_string(), edges: Vec::new(), excess: F::zero(), height: 0, visited: false }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edge ids in insertion order, reverse edges included.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub fn excess(&self) -> F {
        self.excess
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn detach(&mut self, edge: EdgeId) {
        self.edges.retain(|&e| e != edge);
    }

    pub(crate) fn increase_excess(&mut self, amount: F) {
        self.excess += amount;
    }

    pub(crate) fn decrease_excess(&mut self, amount: F) {
        self.excess -= amount;
    }

    pub(crate) fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}
