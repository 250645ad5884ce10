pub mod edge;
pub mod error;
pub mod input;
pub mod network;
pub mod vertex;

pub type VertexId = usize;
pub type EdgeId = usize;
