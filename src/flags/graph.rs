//! Undirected graphs and their implementation of `Object`.

use crate::combinatorics;
use crate::error::{Result, precondition};
use crate::flags::common::*;
use crate::iterators::{StreamingIterator, Subsets};
use crate::object::Object;
use canonical_form::Canonize;
use std::fmt;

/// Undirected graphs.
///
/// Implementation of graphs by upper triangular adjacency matrix,
/// represented as a boolean vector of length `n` choose `2`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct Graph {
    size: usize,
    edge: SymNonRefl<bool>,
}

impl Graph {
    /// Create a graph on `n` vertices with edge set `edge`.
    /// The vertices of this graph are `0,...,n-1`.
    pub fn new(n: usize, edge: &[(usize, usize)]) -> Self {
        let mut new_edge = SymNonRefl::new(false, n);
        for &(u, v) in edge {
            assert!(u < n && v < n && u != v, "Invalid edge {u}{v}");
            new_edge[(u, v)] = true;
        }
        Self {
            size: n,
            edge: new_edge,
        }
    }

    /// Create the graph on `n` vertices with no edge.
    pub fn empty(n: usize) -> Self {
        Self {
            size: n,
            edge: SymNonRefl::new(false, n),
        }
    }

    /// Return the vector of vertices adjacent to `v`.
    pub fn nbrs(&self, v: usize) -> Vec<usize> {
        (0..self.size).filter(|&u| self.edge(u, v)).collect()
    }

    /// Returns `true` if `uv` is an edge.
    #[inline]
    pub fn edge(&self, u: usize, v: usize) -> bool {
        u != v && self.edge[(u, v)]
    }

    /// Returns the edges as couples `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |v| {
            (0..v)
                .filter(move |&u| self.edge[(u, v)])
                .map(move |u| (u, v))
        })
    }

    pub fn clique(n: usize) -> Self {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in 0..i {
                edges.push((j, i))
            }
        }
        Self::new(n, &edges)
    }

    pub fn cycle(n: usize) -> Self {
        let mut edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        edges.push((n - 1, 0));
        Self::new(n, &edges)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(V=[{}], E={{", self.size)?;
        for (u, v) in self.edges() {
            if self.size < 10 {
                write!(f, " {u}{v}")?
            } else {
                write!(f, " {u}-{v}")?
            }
        }
        write!(f, " }})")
    }
}

impl Canonize for Graph {
    fn size(&self) -> usize {
        self.size
    }
    fn invariant_neighborhood(&self, v: usize) -> Vec<Vec<usize>> {
        assert!(v < self.size);
        vec![self.nbrs(v)]
    }
    fn apply_morphism(&self, p: &[usize]) -> Self {
        self.induce(&combinatorics::invert(p))
    }
}

impl Object for Graph {
    const NAME: &'static str = "Graph";

    fn induce(&self, p: &[usize]) -> Self {
        debug_assert!(p.iter().all(|&i| i < self.size));
        Self {
            size: p.len(),
            edge: self.edge.induce(p),
        }
    }

    fn size_zero_objects() -> Vec<Self> {
        vec![Self::empty(0)]
    }

    fn superobjects(&self) -> Vec<Self> {
        let n = self.size;
        let mut res = Vec::new();
        let mut iter = Subsets::new(n);
        while let Some(subset) = iter.next() {
            let mut edge = self.edge.clone();
            edge.resize(n + 1, false);
            for &v in subset {
                edge[(v, n)] = true;
            }
            res.push(Self { edge, size: n + 1 });
        }
        res
    }

    fn marked_pairs(&self) -> Vec<(usize, usize)> {
        let mut res: Vec<_> = self.edges().collect();
        res.sort_unstable();
        res
    }

    fn from_marked_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        for &(u, v) in pairs {
            if u >= n || v >= n || u == v {
                return precondition(format!(
                    "invalid edge ({u}, {v}) in a graph of size {n}"
                ));
            }
        }
        Ok(Self::new(n, pairs))
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_unit() {
        let g = Graph::new(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        let h = Graph::new(5, &[(3, 2), (1, 2), (3, 4), (0, 4), (1, 0)]);
        assert_eq!(g, h);
        assert_eq!(g.canonical(), Graph::cycle(5).canonical());
    }

    #[test]
    fn edge_iterator() {
        let g = Graph::new(5, &[(0, 1), (1, 2), (0, 4), (2, 3), (3, 4)]);
        assert_eq!(g.edges().count(), 5);
        assert_eq!(Graph::clique(4).edges().count(), 6);
        assert_eq!(Graph::empty(6).edges().count(), 0);
        assert_eq!(
            Graph::new(3, &[(2, 0), (1, 2)]).marked_pairs(),
            vec![(0, 2), (1, 2)]
        );
    }

    #[test]
    fn marked_pairs_are_checked() {
        assert!(Graph::from_marked_pairs(3, &[(0, 3)]).is_err());
        assert!(Graph::from_marked_pairs(3, &[(1, 1)]).is_err());
        let g = Graph::from_marked_pairs(3, &[(0, 1)]).unwrap();
        assert!(g.edge(1, 0));
    }

    #[test]
    fn superobjects() {
        let e2 = Graph::new(2, &[(0, 1)]);
        let sup = e2.superobjects();
        assert_eq!(sup.len(), 4);
        assert!(sup.iter().all(|g| g.induce(&[0, 1]) == e2));
    }
}
