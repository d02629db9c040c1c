use std::fmt::{self, Display};

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError, Weight, graph::Target, input::edgelist::EdgeList};

/// Square weight matrix stored as a flat row-major buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyMatrixSerde")]
pub struct AdjacencyMatrix {
    side: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    /// Create a `side × side` matrix with every entry set to `0`.
    ///
    /// Panics if `side * side` overflows `usize`, see [`Self::try_new`].
    pub fn new(side: usize) -> AdjacencyMatrix {
        match Self::try_new(side) {
            Ok(matrix) => matrix,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_new(side: usize) -> Result<AdjacencyMatrix, GraphError> {
        let len = side
            .checked_mul(side)
            .ok_or(GraphError::TooManyVertices(side))?;

        Ok(Self {
            side,
            weights: vec![0; len],
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Weight> {
        if row >= self.side || col >= self.side {
            return None;
        }
        Some(self.weights[row * self.side + col])
    }

    /// Overwrite an entry and return the previous value.
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, weight: Weight) -> Weight {
        assert!(
            row < self.side && col < self.side,
            "entry ({row}, {col}) is outside of a {0}x{0} matrix",
            self.side
        );
        std::mem::replace(&mut self.weights[row * self.side + col], weight)
    }

    pub fn row(&self, row: usize) -> &[Weight] {
        let from = row * self.side;
        &self.weights[from..from + self.side]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> {
        // `chunks_exact` rejects a chunk size of zero.
        self.weights.chunks_exact(self.side.max(1))
    }

    pub fn nonzero_count(&self) -> usize {
        self.weights.iter().filter(|w| **w != 0).count()
    }

    /// Add one zero row and one zero column. Returns the new side length.
    pub fn grow(&mut self) -> usize {
        let side = self.side + 1;
        let mut weights = Vec::with_capacity(side * side);

        self.rows().for_each(|row| {
            weights.extend_from_slice(row);
            weights.push(0);
        });
        weights.resize(side * side, 0);

        self.side = side;
        self.weights = weights;

        side
    }
}

#[derive(Deserialize)]
struct AdjacencyMatrixSerde {
    side: usize,
    weights: Vec<Weight>,
}

impl TryFrom<AdjacencyMatrixSerde> for AdjacencyMatrix {
    type Error = GraphError;

    fn try_from(value: AdjacencyMatrixSerde) -> Result<Self, Self::Error> {
        let AdjacencyMatrixSerde { side, weights } = value;

        let len = side
            .checked_mul(side)
            .ok_or(GraphError::TooManyVertices(side))?;
        if weights.len() != len {
            return Err(GraphError::Malformed(format!(
                "{side}x{side} matrix needs {len} weights, found {}",
                weights.len()
            )));
        }

        if let Some(vertex) = (0..side).find(|v| weights[v * side + v] != 0) {
            return Err(GraphError::Malformed(format!("self-loop on vertex {vertex}")));
        }

        Ok(Self { side, weights })
    }
}

/// Directed graph with positive integer weights over the vertices `0..n`.
///
/// Vertices can only be appended. Invalid edge mutations (unknown vertices,
/// self-loops, zero weights) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedWeightedGraph {
    matrix: AdjacencyMatrix,
}

impl DirectedWeightedGraph {
    pub fn new() -> DirectedWeightedGraph {
        Self::default()
    }

    pub fn with_vertices(vertex_count: usize) -> DirectedWeightedGraph {
        Self {
            matrix: AdjacencyMatrix::new(vertex_count),
        }
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Append the vertex `vertex_count()` and return the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        self.matrix.grow()
    }

    /// Set the weight of the edge `src -> dst`, replacing any previous weight.
    ///
    /// Returns `false` without touching the graph if either vertex does not
    /// exist, `src == dst`, or `weight` is zero.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: Weight) -> bool {
        if !self.contains_vertex(&src) || !self.contains_vertex(&dst) || weight < 1 || src == dst {
            trace!("ignoring edge ({src}, {dst}, {weight})");
            return false;
        }

        self.matrix.set(src, dst, weight);
        true
    }

    /// Remove the edge `src -> dst` and return its weight if it existed.
    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Option<Weight> {
        if !self.contains_vertex(&src) || !self.contains_vertex(&dst) {
            return None;
        }

        match self.matrix.set(src, dst, 0) {
            0 => None,
            weight => Some(weight),
        }
    }

    pub fn weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.matrix.get(src, dst).filter(|w| *w != 0)
    }

    pub fn out_neighbors(&self, vertex: usize) -> impl Iterator<Item = Target<Weight>> + '_ {
        let row: &[Weight] = if self.contains_vertex(&vertex) {
            self.matrix.row(vertex)
        } else {
            &[]
        };

        row.iter()
            .enumerate()
            .filter(|(_, w)| **w != 0)
            .map(|(dst, w)| Target::new(dst, *w))
    }

    /// Check whether consecutive vertices of `path` are joined by edges.
    ///
    /// The empty path is valid and a single vertex is valid if it exists.
    /// Longer paths must only name existing vertices.
    pub fn is_valid_path(&self, path: &[usize]) -> Result<bool, GraphError> {
        match path {
            [] => Ok(true),
            [vertex] => Ok(self.contains_vertex(vertex)),
            _ => {
                if let Some(vertex) = path.iter().find(|v| !self.contains_vertex(v)) {
                    return Err(GraphError::InvalidVertex(*vertex));
                }

                Ok(path.windows(2).all(|pair| self.has_edge(&pair[0], &pair[1])))
            }
        }
    }
}

impl Graph for DirectedWeightedGraph {
    type Vertex = usize;
    type Edge = (usize, usize, Weight);

    fn vertex_count(&self) -> usize {
        self.matrix.side()
    }

    fn edge_count(&self) -> usize {
        self.matrix.nonzero_count()
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.matrix.side()
    }

    fn vertices(&self) -> Vec<usize> {
        (0..self.vertex_count()).collect()
    }

    fn edges(&self) -> Vec<(usize, usize, Weight)> {
        self.vertices()
            .into_iter()
            .flat_map(|src| {
                self.out_neighbors(src)
                    .map(move |t| (src, t.target(), *t.value()))
            })
            .collect()
    }

    fn neighbors(&self, vertex: &usize) -> impl Iterator<Item = usize> {
        self.out_neighbors(*vertex).map(|t| t.target())
    }

    fn has_edge(&self, from: &usize, to: &usize) -> bool {
        self.weight(*from, *to).is_some()
    }
}

impl From<EdgeList> for DirectedWeightedGraph {
    fn from(edge_list: EdgeList) -> Self {
        let mut graph = DirectedWeightedGraph::with_vertices(edge_list.vertex_count());
        edge_list.edges().for_each(|(src, dst, weight)| {
            graph.add_edge(src, dst, weight);
        });

        info!(
            "Created directed graph (vertex_count: {:?}, edge_count = {:?})",
            graph.vertex_count(),
            graph.edge_count()
        );

        graph
    }
}

impl Display for DirectedWeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.vertex_count();
        if side == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        fn join(values: impl Iterator<Item = String>) -> String {
            values.collect::<Vec<_>>().join(" ")
        }

        writeln!(f, "GRAPH ({side} vertices):")?;
        writeln!(f, "   |{}", join((0..side).map(|i| format!("{i:2}"))))?;
        writeln!(f, "{}", "-".repeat(side * 3 + 3))?;
        for (i, row) in self.matrix.rows().enumerate() {
            writeln!(f, "{i:2} |{}", join(row.iter().map(|w| format!("{w:2}"))))?;
        }

        Ok(())
    }
}
