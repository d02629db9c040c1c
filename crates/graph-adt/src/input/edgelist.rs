use std::{error::Error, iter::Copied, slice::Iter, str::FromStr};

use crate::{Label, Weight};

/// Weighted edges `(src, dst, weight)` used to build a
/// [`DirectedWeightedGraph`](crate::DirectedWeightedGraph).
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    edges: Box<[(usize, usize, Weight)]>,
    max_vertex: usize,
}

impl EdgeList {
    pub fn new(edges: Vec<(usize, usize, Weight)>) -> Self {
        let max_vertex = edges
            .iter()
            .map(|(s, t, _)| *s.max(t))
            .max()
            .unwrap_or(0);
        Self {
            edges: edges.into_boxed_slice(),
            max_vertex,
        }
    }

    /// Largest vertex index mentioned by any edge, `0` for an empty list.
    pub fn max_vertex(&self) -> usize {
        self.max_vertex
    }

    /// Number of vertices needed to hold every edge, `0` for an empty list.
    pub fn vertex_count(&self) -> usize {
        if self.edges.is_empty() {
            0
        } else {
            self.max_vertex + 1
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> Copied<Iter<'_, (usize, usize, Weight)>> {
        self.edges.iter().copied()
    }
}

impl TryFrom<&str> for EdgeList {
    type Error = Box<dyn Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut result: Vec<(usize, usize, Weight)> = vec![];

        records(value).try_for_each(|line| -> Result<(), Box<dyn Error>> {
            let mut tokens = line.split_whitespace();

            let source = usize::from_str(tokens.next().ok_or("No source found!")?);

            let target = usize::from_str(tokens.next().ok_or("No target found!")?);

            let value = Weight::from_str(tokens.next().ok_or("No value found!")?);

            result.push((source?, target?, value?));

            Ok(())
        })?;

        Ok(EdgeList::new(result))
    }
}

/// Unweighted label pairs used to build an
/// [`UndirectedGraph`](crate::UndirectedGraph).
#[derive(Debug, Clone)]
pub struct PairList<L> {
    pairs: Vec<(L, L)>,
}

impl<L: Label> PairList<L> {
    pub fn new(pairs: Vec<(L, L)>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> impl Iterator<Item = &(L, L)> {
        self.pairs.iter()
    }

    pub fn into_pairs(self) -> Vec<(L, L)> {
        self.pairs
    }
}

impl TryFrom<&str> for PairList<String> {
    type Error = Box<dyn Error>;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pairs = records(value)
            .map(|line| -> Result<(String, String), Box<dyn Error>> {
                let mut tokens = line.split_whitespace();

                let source = tokens.next().ok_or("No source found!")?;

                let target = tokens.next().ok_or("No target found!")?;

                Ok((source.to_string(), target.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PairList::new(pairs))
    }
}

/// Non-empty lines that are not `#` comments.
fn records(value: &str) -> impl Iterator<Item = &str> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
