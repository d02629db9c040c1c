pub mod components;
pub mod cycle;
pub mod dijkstra;
pub mod traversal;
