use crate::flow_network::error::FlowError;
use crate::flow_network::input::InputGraph;
use crate::flow_network::network::FlowNetwork;
use crate::flow_network::{EdgeId, VertexId};
use num_traits::NumAssign;
use std::fmt::Debug;

/// Ford-Fulkerson: repeated depth-first augmenting-path search.
///
/// The search walks an explicit stack of (vertex, adjacency cursor) frames
/// rather than the call stack, so path length is bounded only by the
/// vertex count. Each discovered path is augmented by its bottleneck
/// residual capacity, once per edge.
#[derive(Default)]
pub struct AugmentingPath {
    stack: Vec<(VertexId, usize)>,
    path: Vec<EdgeId>,
}

impl AugmentingPath {
    /// Builds a fresh residual network from the input graph and drives it
    /// to a maximum flow.
    pub fn solve<F>(&mut self, input: &InputGraph<F>, source: &str, sink: &str) -> Result<F, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        let mut network = FlowNetwork::from_input(input, source, sink)?;
        self.run(&mut network)
    }

    /// Runs on a caller-built network and reports the source's outflow.
    pub fn run<F>(&mut self, network: &mut FlowNetwork<F>) -> Result<F, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        while self.augment(network, None)?.is_some() {}
        Ok(network.total_outflow())
    }

    /// One search from source to sink over edges whose residual capacity is
    /// at least `min_residual` (any positive amount when `None`). On
    /// success, applies the path's bottleneck and returns it.
    pub(crate) fn augment<F>(&mut self, network: &mut FlowNetwork<F>, min_residual: Option<F>) -> Result<Option<F>, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        network.reset_visited_marks();
        let sink = network.sink();

        self.stack.clear();
        self.path.clear();
        network.mark_visited(network.source());
        self.stack.push((network.source(), 0));

        loop {
            let Some(&(u, cursor)) = self.stack.last() else {
                return Ok(None);
            };
            let Some(edge_id) = network.vertex(u).edges().get(cursor).copied() else {
                // adjacency exhausted, backtrack
                self.stack.pop();
                self.path.pop();
                continue;
            };
            if let Some(frame) = self.stack.last_mut() {
                frame.1 += 1;
            }

            let edge = network.edge(edge_id);
            let to = edge.to();
            let residual = edge.residual_capacity();
            let admissible = match min_residual {
                Some(threshold) => residual >= threshold,
                None => residual > F::zero(),
            };
            if !admissible || network.vertex(to).visited() {
                continue;
            }

            network.mark_visited(to);
            self.path.push(edge_id);
            if to == sink {
                return self.apply_bottleneck(network).map(Some);
            }
            self.stack.push((to, 0));
        }
    }

    fn apply_bottleneck<F>(&mut self, network: &mut FlowNetwork<F>) -> Result<F, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        let mut bottleneck = network.edge(self.path[0]).residual_capacity();
        for &edge_id in &self.path[1..] {
            let residual = network.edge(edge_id).residual_capacity();
            if residual < bottleneck {
                bottleneck = residual;
            }
        }

        // each path edge is distinct (the path is simple), so one increment
        // per edge applies the bottleneck exactly once
        for &edge_id in &self.path {
            network.increase_flow(edge_id, bottleneck)?;
        }
        Ok(bottleneck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn augments_until_no_path_remains() {
        let mut input = InputGraph::new();
        for name in ["s", "a", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 4.0);
        input.add_edge("a", "t", 9.0);

        let mut network = FlowNetwork::from_input(&input, "s", "t").unwrap();
        let mut search = AugmentingPath::default();
        assert_eq!(search.augment(&mut network, None).unwrap(), Some(4.0));
        assert_eq!(search.augment(&mut network, None).unwrap(), None);
        assert_eq!(network.total_outflow(), 4.0);
    }

    #[test]
    fn search_can_cancel_flow_through_reverse_edges() {
        // the greedy first path may route s -> a -> b -> t; the second
        // augmentation must undo part of it through the reverse edge
        let mut input = InputGraph::new();
        for name in ["s", "a", "b", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 1.0);
        input.add_edge("s", "b", 1.0);
        input.add_edge("a", "b", 1.0);
        input.add_edge("a", "t", 1.0);
        input.add_edge("b", "t", 1.0);

        let mut search = AugmentingPath::default();
        assert_eq!(search.solve(&input, "s", "t").unwrap(), 2.0);
    }
}
