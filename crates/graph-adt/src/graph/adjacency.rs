use std::fmt::{self, Display};

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError, Label, input::edgelist::PairList};

/// Undirected, unweighted graph over arbitrary labels.
///
/// Vertices keep their insertion order and every neighbor list keeps the
/// order in which edges were added. Adjacency is always symmetric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    bound(
        serialize = "L: Label + Serialize",
        deserialize = "L: Label + Deserialize<'de>"
    ),
    try_from = "UndirectedGraphSerde<L>"
)]
pub struct UndirectedGraph<L> {
    order: Vec<L>,
    adjacency: FxHashMap<L, Vec<L>>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "L: Label + Deserialize<'de>"))]
struct UndirectedGraphSerde<L> {
    order: Vec<L>,
    adjacency: FxHashMap<L, Vec<L>>,
}

impl<L: Label> TryFrom<UndirectedGraphSerde<L>> for UndirectedGraph<L> {
    type Error = GraphError;

    fn try_from(value: UndirectedGraphSerde<L>) -> Result<Self, Self::Error> {
        let UndirectedGraphSerde { order, adjacency } = value;

        let listed = order.iter().collect::<FxHashSet<_>>();
        if listed.len() != order.len()
            || listed.len() != adjacency.len()
            || !order.iter().all(|label| adjacency.contains_key(label))
        {
            return Err(GraphError::Malformed(
                "vertex order does not match the adjacency lists".to_string(),
            ));
        }

        for (label, neighbors) in &adjacency {
            for (i, neighbor) in neighbors.iter().enumerate() {
                if neighbor == label {
                    return Err(GraphError::Malformed(format!("self-loop on vertex {label}")));
                }

                if neighbors[..i].contains(neighbor) {
                    return Err(GraphError::Malformed(format!(
                        "duplicate edge between {label} and {neighbor}"
                    )));
                }

                if !adjacency
                    .get(neighbor)
                    .is_some_and(|back| back.contains(label))
                {
                    return Err(GraphError::Malformed(format!(
                        "edge {label} -> {neighbor} has no reverse edge"
                    )));
                }
            }
        }

        Ok(Self { order, adjacency })
    }
}

impl<L: Label> Default for UndirectedGraph<L> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            adjacency: FxHashMap::default(),
        }
    }
}

impl<L: Label> PartialEq for UndirectedGraph<L> {
    fn eq(&self, other: &Self) -> bool {
        self.order.eq(&other.order) && self.adjacency.eq(&other.adjacency)
    }
}

impl<L: Label> Eq for UndirectedGraph<L> {}

impl<L: Label> UndirectedGraph<L> {
    pub fn new() -> UndirectedGraph<L> {
        Self::default()
    }

    /// Insert `label` with no neighbors. Returns `false` if it already exists.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.adjacency.contains_key(&label) {
            return false;
        }

        self.adjacency.insert(label.clone(), Vec::new());
        self.order.push(label);
        true
    }

    /// Connect `u` and `v`, creating missing endpoints. Self-loops are ignored.
    pub fn add_edge(&mut self, u: L, v: L) {
        if u == v {
            return;
        }

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        Self::link(&mut self.adjacency, &u, &v);
        Self::link(&mut self.adjacency, &v, &u);
    }

    fn link(adjacency: &mut FxHashMap<L, Vec<L>>, from: &L, to: &L) {
        let neighbors = adjacency.entry(from.clone()).or_default();
        if !neighbors.contains(to) {
            neighbors.push(to.clone());
        }
    }

    /// Disconnect `u` and `v`.
    ///
    /// Nothing happens if either vertex is missing. If both exist but are not
    /// adjacent this fails with [`GraphError::EdgeNotFound`].
    pub fn remove_edge(&mut self, u: &L, v: &L) -> Result<(), GraphError> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return Ok(());
        }

        if !self.has_edge(u, v) {
            return Err(GraphError::EdgeNotFound {
                from: u.to_string(),
                to: v.to_string(),
            });
        }

        for (from, to) in [(u, v), (v, u)] {
            if let Some(neighbors) = self.adjacency.get_mut(from) {
                neighbors.retain(|n| n != to);
            }
        }

        Ok(())
    }

    /// Remove `label` and every edge touching it. Returns `false` if it was
    /// not part of the graph.
    pub fn remove_vertex(&mut self, label: &L) -> bool {
        let Some(neighbors) = self.adjacency.remove(label) else {
            return false;
        };

        debug!("removing vertex {label} with {} neighbors", neighbors.len());

        self.adjacency
            .values_mut()
            .for_each(|neighbors| neighbors.retain(|n| n != label));
        self.order.retain(|v| v != label);

        true
    }

    /// Neighbors of `label` in the order the edges were added.
    pub fn neighbors_of(&self, label: &L) -> Option<&[L]> {
        self.adjacency.get(label).map(Vec::as_slice)
    }

    /// Check whether every pair of consecutive labels in `path` is adjacent.
    ///
    /// The empty path is valid and a single label is valid if it exists.
    pub fn is_valid_path(&self, path: &[L]) -> bool {
        match path {
            [] => true,
            [label] => self.contains_vertex(label),
            _ => path.windows(2).all(|pair| self.has_edge(&pair[0], &pair[1])),
        }
    }
}

impl<L: Label> Graph for UndirectedGraph<L> {
    type Vertex = L;
    type Edge = (L, L);

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    fn contains_vertex(&self, vertex: &L) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn vertices(&self) -> Vec<L> {
        self.order.clone()
    }

    fn edges(&self) -> Vec<(L, L)> {
        let mut closed = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.edge_count());

        for key in &self.order {
            closed.insert(key);
            self.adjacency[key]
                .iter()
                .filter(|n| !closed.contains(n))
                .for_each(|n| edges.push((key.clone(), n.clone())));
        }

        edges
    }

    fn neighbors(&self, vertex: &L) -> impl Iterator<Item = L> {
        let mut neighbors = self.adjacency.get(vertex).cloned().unwrap_or_default();
        neighbors.sort();
        neighbors.into_iter()
    }

    fn has_edge(&self, from: &L, to: &L) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }
}

impl<L: Label> FromIterator<(L, L)> for UndirectedGraph<L> {
    fn from_iter<T: IntoIterator<Item = (L, L)>>(iter: T) -> Self {
        let mut graph = UndirectedGraph::new();
        iter.into_iter().for_each(|(u, v)| graph.add_edge(u, v));
        graph
    }
}

impl<L: Label> From<PairList<L>> for UndirectedGraph<L> {
    fn from(pairs: PairList<L>) -> Self {
        let graph = UndirectedGraph::from_iter(pairs.into_pairs());

        debug!(
            "Created undirected graph (vertex_count: {:?}, edge_count = {:?})",
            graph.vertex_count(),
            graph.edge_count()
        );

        graph
    }
}

impl<L: Label> Display for UndirectedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let out = self
            .order
            .iter()
            .map(|label| {
                let neighbors = self.adjacency[label]
                    .iter()
                    .map(|n| format!("'{n}'"))
                    .collect::<Vec<_>>();
                format!("{label}: [{}]", neighbors.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n  ");

        if out.chars().count() < 70 {
            write!(f, "GRAPH: {{{}}}", out.replace("\n  ", ", "))
        } else {
            write!(f, "GRAPH: {{\n  {out}}}")
        }
    }
}
