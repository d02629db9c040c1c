use std::{
    error::Error,
    fmt::{Debug, Display},
    hash::Hash,
};

pub mod algorithms;
pub mod graph;
pub mod input;

pub use algorithms::{
    components::ConnectedComponents,
    cycle::CycleDetection,
    dijkstra::{Dijkstra, DijkstraResult},
    traversal::Traversal,
};
pub use graph::{adjacency::UndirectedGraph, matrix::DirectedWeightedGraph};

/// Edge weight of a [`DirectedWeightedGraph`]. `0` is reserved for "no edge".
pub type Weight = u32;

/// Shortest distance reported by [`Dijkstra::dijkstra`]; unreachable vertices
/// are `f64::INFINITY`.
pub type Distance = f64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    InvalidVertex(usize),
    EdgeNotFound { from: String, to: String },
    TooManyVertices(usize),
    Malformed(String),
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVertex(vertex) => write!(f, "vertex: {vertex} not found in graph"),
            Self::EdgeNotFound { from, to } => {
                write!(f, "no edge between \'{from}\' and \'{to}\'")
            }
            Self::TooManyVertices(count) => {
                write!(f, "{count} vertices do not fit into an adjacency matrix")
            }
            Self::Malformed(reason) => write!(f, "malformed graph: {reason}"),
        }
    }
}

/// Vertex label of an [`UndirectedGraph`].
pub trait Label: Clone + Eq + Hash + Ord + Debug + Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Display {}

pub trait Graph {
    type Vertex: Clone + Eq + Hash;
    type Edge;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Every edge exactly once.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Neighbors of `vertex` in ascending vertex order. Empty if `vertex` is
    /// not part of the graph.
    fn neighbors(&self, vertex: &Self::Vertex) -> impl Iterator<Item = Self::Vertex>;

    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;
}
