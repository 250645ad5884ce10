use crate::flow_network::error::FlowError;
use crate::flow_network::input::InputGraph;
use crate::flow_network::network::FlowNetwork;
use crate::maximum_flow::augmenting_path::AugmentingPath;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Capacity-scaled Ford-Fulkerson.
///
/// Runs the same augmenting-path search under a shrinking admissibility
/// threshold: a phase only traverses edges with residual capacity >= delta,
/// delta starting at the largest power of two not exceeding the source's
/// outgoing capacity and halving per phase. Each phase therefore augments
/// by at least delta, bounding augmentations per phase by the edge count.
#[derive(Default)]
pub struct CapacityScaling {
    search: AugmentingPath,
}

impl CapacityScaling {
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
        let two = F::one() + F::one();
        let mut delta = initial_threshold(network.outgoing_capacity(network.source()));

        while delta >= F::one() {
            while self.search.augment(network, Some(delta))?.is_some() {}
            delta /= two;
        }

        // unscaled sweep: a no-op for integral capacities (a residual >= 1
        // path would have been found in the delta = 1 phase), but needed to
        // pick up fractional residuals of real-valued capacities
        self.search.run(network)
    }
}

/// Largest power of two not exceeding `capacity`, or one if the capacity
/// is below two.
fn initial_threshold<F>(capacity: F) -> F
where
    F: NumAssign + PartialOrd + Copy,
{
    let two = F::one() + F::one();
    let mut threshold = F::one();
    // comparing against capacity / two keeps the doubling from
    // overflowing integer capacities near the type's maximum
    while threshold <= capacity / two {
        threshold *= two;
    }
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_threshold_is_largest_power_of_two_within_capacity() {
        assert_eq!(initial_threshold(8.0), 8.0);
        assert_eq!(initial_threshold(15.0), 8.0);
        assert_eq!(initial_threshold(16), 16);
        assert_eq!(initial_threshold(7), 4);
        assert_eq!(initial_threshold(1), 1);
        assert_eq!(initial_threshold(0.9), 1.0);
    }

    #[test]
    fn initial_threshold_handles_capacities_near_the_integer_maximum() {
        assert_eq!(initial_threshold(i64::MAX), 1_i64 << 62);
        assert_eq!(initial_threshold((1_i64 << 62) + 1), 1_i64 << 62);
        assert_eq!(initial_threshold(1_i64 << 62), 1_i64 << 62);
    }

    #[test]
    fn first_phase_only_admits_paths_at_or_above_the_threshold() {
        // source capacity 8 gives an initial delta of 8; the only s-t path
        // is capped at 3 and must wait for a later phase
        let mut input = InputGraph::new();
        for name in ["s", "a", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 8.0);
        input.add_edge("a", "t", 3.0);

        let mut network = FlowNetwork::from_input(&input, "s", "t").unwrap();
        let mut scaling = CapacityScaling::default();
        assert_eq!(scaling.search.augment(&mut network, Some(8.0)).unwrap(), None);
        assert_eq!(network.total_outflow(), 0.0);

        assert_eq!(scaling.run(&mut network).unwrap(), 3.0);
    }

    #[test]
    fn fractional_capacities_still_reach_the_maximum() {
        let mut input = InputGraph::new();
        for name in ["s", "a", "t"] {
            input.add_vertex(name);
        }
        input.add_edge("s", "a", 0.75);
        input.add_edge("a", "t", 0.5);

        let mut scaling = CapacityScaling::default();
        assert_eq!(scaling.solve(&input, "s", "t").unwrap(), 0.5);
    }
}
