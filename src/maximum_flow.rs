pub mod active_vertex_queue;
pub mod augmenting_path;
pub mod capacity_scaling;
pub mod push_relabel_fifo;
