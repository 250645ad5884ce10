use crate::flow_network::VertexId;
use std::collections::{HashSet, VecDeque};

/// FIFO queue of vertices with positive excess, deduplicated by
/// membership. The source and sink are never admitted, whatever their
/// excess.
pub struct ActiveVertexQueue {
    queue: VecDeque<VertexId>,
    members: HashSet<VertexId>,
    source: VertexId,
    sink: VertexId,
}

impl ActiveVertexQueue {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        ActiveVertexQueue { queue: VecDeque::new(), members: HashSet::new(), source, sink }
    }

    pub fn push(&mut self, vertex: VertexId) {
        if vertex == self.source || vertex == self.sink {
            return;
        }
        if self.members.insert(vertex) {
            self.queue.push_back(vertex);
        }
    }

    pub fn pop(&mut self) -> Option<VertexId> {
        let vertex = self.queue.pop_front()?;
        self.members.remove(&vertex);
        Some(vertex)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order_with_deduplication() {
        let mut queue = ActiveVertexQueue::new(0, 1);
        queue.push(2);
        queue.push(3);
        queue.push(2);
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn readmits_after_pop() {
        let mut queue = ActiveVertexQueue::new(0, 1);
        queue.push(2);
        assert_eq!(queue.pop(), Some(2));
        queue.push(2);
        assert_eq!(queue.pop(), Some(2));
    }

    #[test]
    fn refuses_source_and_sink() {
        let mut queue = ActiveVertexQueue::new(0, 1);
        queue.push(0);
        queue.push(1);
        assert!(queue.is_empty());
    }
}
