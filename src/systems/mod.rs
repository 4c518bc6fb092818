pub mod edge_body;
pub mod swarm;
