use std::cmp::Reverse;

use log::{debug, trace};
use priority_queue::PriorityQueue;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{DirectedWeightedGraph, Distance, Graph, graph::Target};

pub trait Dijkstra {
    /// Shortest distances and predecessors from `source` to every vertex.
    fn shortest_paths(&self, source: usize) -> DijkstraResult;

    /// Shortest distance from `source` to every vertex, indexed by vertex.
    /// Unreachable vertices are `f64::INFINITY`.
    fn dijkstra(&self, source: usize) -> Vec<Distance> {
        self.shortest_paths(source).distances()
    }
}

impl Dijkstra for DirectedWeightedGraph {
    #[instrument(level = "trace", skip(self))]
    fn shortest_paths(&self, source: usize) -> DijkstraResult {
        let mut settled: Vec<Option<ResultNode>> = vec![None; self.vertex_count()];

        if !self.contains_vertex(&source) {
            debug!("source vertex {source} is not part of the graph");
            return DijkstraResult::new(source, settled);
        }

        let mut frontier = PriorityQueue::with_hasher(FxBuildHasher);
        let mut predecessors: Vec<Option<usize>> = vec![None; self.vertex_count()];
        frontier.push(source, Reverse(0u64));

        while let Some((vertex, Reverse(cost))) = frontier.pop() {
            if settled[vertex].is_some() {
                continue;
            }

            settled[vertex] = Some(ResultNode::new(
                Target::new(vertex, cost),
                predecessors[vertex],
            ));

            for neighbor in self.out_neighbors(vertex) {
                let target = neighbor.target();
                if settled[target].is_some() {
                    continue;
                }

                let path_cost = Reverse(cost + u64::from(*neighbor.value()));
                match frontier.get_priority(&target).copied() {
                    Some(priority) if priority >= path_cost => {}
                    Some(_) => {
                        frontier.change_priority(&target, path_cost);
                        predecessors[target] = Some(vertex);
                    }
                    None => {
                        frontier.push(target, path_cost);
                        predecessors[target] = Some(vertex);
                    }
                }
            }
        }

        let unreachable = settled.iter().filter(|node| node.is_none()).count();
        if unreachable > 0 {
            trace!("could not reach {unreachable} vertices from {source}");
        }

        DijkstraResult::new(source, settled)
    }
}

/// Settled vertices of a single-source Dijkstra run, indexed by vertex.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct DijkstraResult {
    source: usize,
    nodes: Vec<Option<ResultNode>>,
}

impl DijkstraResult {
    pub fn new(source: usize, nodes: Vec<Option<ResultNode>>) -> Self {
        Self { source, nodes }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn get(&self, node_id: usize) -> Option<&ResultNode> {
        self.nodes.get(node_id)?.as_ref()
    }

    pub fn distance(&self, node_id: usize) -> Option<u64> {
        self.get(node_id).map(|node| *node.cost())
    }

    pub fn distances(&self) -> Vec<Distance> {
        self.nodes
            .iter()
            .map(|node| node.as_ref().map_or(f64::INFINITY, |n| *n.cost() as f64))
            .collect()
    }

    /// Vertices on a shortest path from the source to `node_id`, both ends
    /// included. `None` if `node_id` was not reached.
    pub fn path(&self, node_id: usize) -> Option<Vec<usize>> {
        let mut node = self.get(node_id)?;
        let mut path = vec![node.node_id()];

        while let Some(prev_node_id) = node.prev_node_id() {
            node = self.get(prev_node_id)?;
            path.push(node.node_id());
        }

        path.reverse();

        Some(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultNode {
    target: Target<u64>,
    prev_node_id: Option<usize>,
}

impl ResultNode {
    pub fn new(target: Target<u64>, prev_node_id: Option<usize>) -> Self {
        Self {
            target,
            prev_node_id,
        }
    }

    pub fn node_id(&self) -> usize {
        self.target.target()
    }

    pub fn prev_node_id(&self) -> Option<usize> {
        self.prev_node_id
    }

    pub fn cost(&self) -> &u64 {
        self.target.value()
    }
}
