pub mod flow_network;
pub mod maximum_flow;
