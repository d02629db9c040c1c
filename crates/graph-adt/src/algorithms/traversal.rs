use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use crate::Graph;

/// Depth- and breadth-first search over any [`Graph`].
///
/// Both searches return the vertices in the order they were first visited.
/// If `end` is given the search stops as soon as `end` is taken from the
/// stack or queue, and `end` is appended even if it was visited before.
pub trait Traversal: Graph {
    fn dfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex>;

    fn bfs(&self, start: &Self::Vertex, end: Option<&Self::Vertex>) -> Vec<Self::Vertex>;
}

struct Visited<V> {
    seen: FxHashSet<V>,
    order: Vec<V>,
}

impl<V: Clone + Eq + std::hash::Hash> Visited<V> {
    fn new() -> Self {
        Self {
            seen: FxHashSet::default(),
            order: Vec::new(),
        }
    }

    /// Returns `false` if `vertex` was already recorded.
    fn record(&mut self, vertex: &V) -> bool {
        if !self.seen.insert(vertex.clone()) {
            return false;
        }
        self.order.push(vertex.clone());
        true
    }

    fn contains(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }
}

impl<G: Graph> Traversal for G {
    fn dfs(&self, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }

        let mut visited = Visited::new();
        let mut stack = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if end.is_some_and(|end| *end == vertex) {
                visited.order.push(vertex);
                break;
            }

            if visited.record(&vertex) {
                let neighbors = self.neighbors(&vertex).collect::<Vec<_>>();
                // Reversed so the smallest neighbor is on top of the stack.
                stack.extend(neighbors.into_iter().rev());
            }
        }

        trace!("dfs visited {} vertices", visited.order.len());
        visited.order
    }

    fn bfs(&self, start: &G::Vertex, end: Option<&G::Vertex>) -> Vec<G::Vertex> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }

        let mut visited = Visited::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(vertex) = queue.pop_front() {
            if end.is_some_and(|end| *end == vertex) {
                visited.order.push(vertex);
                break;
            }

            if visited.record(&vertex) {
                // A vertex may be queued several times before it is first
                // dequeued. Only the first dequeue records it.
                queue.extend(self.neighbors(&vertex).filter(|n| !visited.contains(n)));
            }
        }

        trace!("bfs visited {} vertices", visited.order.len());
        visited.order
    }
}
