use crate::flow_network::error::FlowError;
use crate::flow_network::input::InputGraph;
use crate::flow_network::network::FlowNetwork;
use crate::maximum_flow::active_vertex_queue::ActiveVertexQueue;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Generic preflow-push with FIFO vertex selection.
///
/// The source starts at height n, every source edge is saturated, and
/// vertices with positive excess are discharged in FIFO order: push along
/// an admissible edge when one exists, relabel by one otherwise. The queue
/// empties exactly when every non-terminal vertex has zero excess, at which
/// point the preflow is a maximum flow.
#[derive(Default)]
pub struct PushRelabelFifo;

impl PushRelabelFifo {
    pub fn solve<F>(&mut self, input: &InputGraph<F>, source: &str, sink: &str) -> Result<F, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        let mut network = FlowNetwork::from_input(input, source, sink)?;
        self.run(&mut network)
    }

    pub fn run<F>(&mut self, network: &mut FlowNetwork<F>) -> Result<F, FlowError>
    where
        F: NumAssign + PartialOrd + Copy + Debug,
    {
        let source = network.source();
        let sink = network.sink();
        let mut active = ActiveVertexQueue::new(source, sink);

        // height n at the source exceeds every simple path length, so no
        // admissible edge can ever route flow back out of it
        network.set_height(source, network.num_vertices());

        let source_edges = network.vertex(source).edges().to_vec();
        for edge_id in source_edges {
            let residual = network.edge(edge_id).residual_capacity();
            if residual > F::zero() {
                let to = network.edge(edge_id).to();
                network.increase_flow(edge_id, residual)?;
                active.push(to);
            }
        }

        while let Some(u) = active.pop() {
            match network.lower_neighbor_edge(u) {
                Some(edge_id) => {
                    // endpoints snapshot: the edge slot is gone if the push
                    // drains a reverse edge to zero
                    let edge = network.edge(edge_id);
                    let (from, to) = (edge.from(), edge.to());
                    let residual = edge.residual_capacity();
                    let excess = network.vertex(u).excess();
                    let amount = if residual < excess { residual } else { excess };

                    network.increase_flow(edge_id, amount)?;

                    if network.vertex(from).excess() > F::zero() {
                        active.push(from);
                    }
                    if network.vertex(to).excess() > F::zero() {
                        active.push(to);
                    }
                }
                None => {
                    // no lower neighbor, relabel and retry later
                    let height = network.vertex(u).height();
                    network.set_height(u, height + 1);
                    active.push(u);
                }
            }
        }

        Ok(network.total_outflow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_state_has_no_excess_outside_the_terminals() {
        let mut input = InputGraph::new();
        for name in ["s", "a", "b", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 10.0);
        input.add_edge("s", "b", 5.0);
        input.add_edge("a", "t", 5.0);
        input.add_edge("b", "t", 10.0);

        let mut network = FlowNetwork::from_input(&input, "s", "t").unwrap();
        let flow = PushRelabelFifo::default().run(&mut network).unwrap();
        assert_eq!(flow, 10.0);

        for name in ["a", "b"] {
            let id = network.find_vertex(name).unwrap();
            assert_eq!(network.vertex(id).excess(), 0.0);
        }
        assert_eq!(network.vertex(network.sink()).excess(), flow);
    }

    #[test]
    fn surplus_returns_by_cancellation_not_through_an_edge_into_the_source() {
        // a is overfed and also has a forward edge back to s; draining the
        // surplus through a -> s would leave a circulation that inflates
        // the source's gross outflow to 2
        let mut input = InputGraph::new();
        for name in ["s", "a", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 2.0);
        input.add_edge("a", "t", 1.0);
        input.add_edge("a", "s", 5.0);

        let mut network = FlowNetwork::from_input(&input, "s", "t").unwrap();
        let flow = PushRelabelFifo::default().run(&mut network).unwrap();
        assert_eq!(flow, 1.0);

        let a = network.find_vertex("a").unwrap();
        let back_edge = network
            .vertex(a)
            .edges()
            .iter()
            .copied()
            .find(|&e| !network.edge(e).is_reverse() && network.edge(e).to() == network.source())
            .unwrap();
        assert_eq!(network.edge(back_edge).flow(), 0.0);
    }

    #[test]
    fn excess_with_no_outlet_drains_back_to_the_source() {
        // a receives 10 but can only forward 3; the remaining 7 must be
        // pushed back over the reverse edge after relabeling above n
        let mut input = InputGraph::new();
        for name in ["s", "a", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 10.0);
        input.add_edge("a", "t", 3.0);

        let mut solver = PushRelabelFifo::default();
        assert_eq!(solver.solve(&input, "s", "t").unwrap(), 3.0);
    }
}
