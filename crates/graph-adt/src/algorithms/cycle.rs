use log::debug;
use rustc_hash::FxHashSet;
use tracing::instrument;

use crate::{DirectedWeightedGraph, Graph, Label, UndirectedGraph};

pub trait CycleDetection {
    fn has_cycle(&self) -> bool;
}

impl CycleDetection for DirectedWeightedGraph {
    /// A directed cycle exists iff some edge leads back to a vertex on the
    /// current search path.
    #[instrument(level = "trace", skip(self))]
    fn has_cycle(&self) -> bool {
        let vertex_count = self.vertex_count();
        let mut visited = vec![false; vertex_count];
        let mut on_path = vec![false; vertex_count];
        // (vertex, first column of its row that is still unexplored)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..vertex_count {
            if visited[root] {
                continue;
            }

            visited[root] = true;
            on_path[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (vertex, next) = *frame;
                let row = self.matrix().row(vertex);

                match row[next..].iter().position(|w| *w != 0) {
                    Some(offset) => {
                        let neighbor = next + offset;
                        frame.1 = neighbor + 1;

                        if on_path[neighbor] {
                            debug!("found back edge ({vertex}, {neighbor})");
                            return true;
                        }

                        if !visited[neighbor] {
                            visited[neighbor] = true;
                            on_path[neighbor] = true;
                            stack.push((neighbor, 0));
                        }
                    }
                    None => {
                        on_path[vertex] = false;
                        stack.pop();
                    }
                }
            }
        }

        false
    }
}

impl<L: Label> CycleDetection for UndirectedGraph<L> {
    /// An undirected cycle exists iff the search meets a visited vertex that
    /// is not the parent of the current vertex.
    #[instrument(level = "trace", skip(self))]
    fn has_cycle(&self) -> bool {
        let mut visited = FxHashSet::default();

        for root in self.vertices() {
            if visited.contains(&root) {
                continue;
            }

            visited.insert(root.clone());
            let mut stack: Vec<(L, Option<L>)> = vec![(root, None)];

            while let Some((vertex, parent)) = stack.pop() {
                for neighbor in self.neighbors(&vertex) {
                    if parent.as_ref() == Some(&neighbor) {
                        continue;
                    }

                    if visited.contains(&neighbor) {
                        debug!("found cycle through ({vertex}, {neighbor})");
                        return true;
                    }

                    visited.insert(neighbor.clone());
                    stack.push((neighbor, Some(vertex.clone())));
                }
            }
        }

        false
    }
}
