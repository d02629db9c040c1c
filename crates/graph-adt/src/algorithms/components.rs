use log::debug;
use rustc_hash::FxHashSet;
use tracing::instrument;

use crate::{Graph, Label, UndirectedGraph};

pub trait ConnectedComponents: Graph {
    /// Maximal connected vertex sets, each in depth-first discovery order.
    fn connected_components(&self) -> Vec<Vec<Self::Vertex>>;

    fn count_connected_components(&self) -> usize {
        self.connected_components().len()
    }
}

impl<L: Label> ConnectedComponents for UndirectedGraph<L> {
    #[instrument(level = "trace", skip(self))]
    fn connected_components(&self) -> Vec<Vec<L>> {
        let mut visited = FxHashSet::default();
        let mut components = Vec::new();

        for root in self.vertices() {
            if visited.contains(&root) {
                continue;
            }

            let mut component = Vec::new();
            let mut stack = vec![root];

            while let Some(vertex) = stack.pop() {
                if !visited.insert(vertex.clone()) {
                    continue;
                }

                let neighbors = self
                    .neighbors(&vertex)
                    .filter(|n| !visited.contains(n))
                    .collect::<Vec<_>>();
                stack.extend(neighbors.into_iter().rev());
                component.push(vertex);
            }

            components.push(component);
        }

        debug!("found {} connected components", components.len());
        components
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectedComponents;
    use crate::UndirectedGraph;

    fn setup() -> UndirectedGraph<char> {
        ["AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG"]
            .iter()
            .map(|edge| {
                let mut chars = edge.chars();
                (chars.next().unwrap(), chars.next().unwrap())
            })
            .collect()
    }

    #[test]
    fn components() {
        let graph = setup();

        assert_eq!(
            graph.connected_components(),
            vec![
                vec!['A', 'C', 'B', 'D', 'E', 'H'],
                vec!['Q', 'G', 'F']
            ]
        );
        assert_eq!(graph.count_connected_components(), 2);
    }

    #[test]
    fn isolated_vertices() {
        let mut graph = setup();
        graph.add_vertex('Z');
        graph.add_vertex('Y');

        assert_eq!(graph.count_connected_components(), 4);
        assert_eq!(UndirectedGraph::<char>::new().count_connected_components(), 0);
    }

    #[test]
    fn edge_changes() {
        let mut graph = setup();
        let cases = [
            ("add", "QH", 1),
            ("remove", "FG", 2),
            ("remove", "GQ", 3),
            ("remove", "HQ", 4),
            ("remove", "AE", 4),
            ("remove", "CA", 5),
            ("remove", "EB", 5),
            ("remove", "CE", 5),
            ("remove", "DE", 6),
            ("remove", "BC", 6),
            ("add", "EA", 5),
            ("add", "EF", 4),
            ("add", "GQ", 3),
            ("add", "AC", 2),
            ("add", "DQ", 1),
            ("add", "EG", 1),
            ("add", "QH", 1),
            ("remove", "CD", 1),
            ("remove", "BD", 1),
            ("remove", "QG", 2),
        ];

        for (command, edge, expected) in cases {
            let mut chars = edge.chars();
            let (u, v) = (chars.next().unwrap(), chars.next().unwrap());
            if command == "add" {
                graph.add_edge(u, v);
            } else {
                graph.remove_edge(&u, &v).unwrap();
            }
            assert_eq!(
                graph.count_connected_components(),
                expected,
                "after {command} {edge}"
            );
        }
    }
}
