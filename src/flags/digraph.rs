//! `[Digraph]`s and their implementation of `Object`.
use crate::combinatorics;
use crate::error::{Result, precondition};
use crate::flags::common::*;
use crate::iterators::{Functions, StreamingIterator};
use crate::object::Object;
use canonical_form::Canonize;
use std::fmt;
use std::ops::Neg;

/// The arcs between two vertices of a directed graph.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash, Default, Serialize, Deserialize)]
pub enum Arc {
    /// No arc.
    #[default]
    None,
    /// Arc from the first to the second vertex considered.
    Edge,
    /// Arc from the second to the first vertex considered.
    BackEdge,
    /// Arcs in both directions.
    Double,
}

impl Neg for Arc {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Edge => BackEdge,
            BackEdge => Edge,
            x => x,
        }
    }
}

use Arc::*;

impl Arc {
    fn forward(self) -> bool {
        self == Edge || self == Double
    }
    fn with_forward(self) -> Self {
        match self {
            None | Edge => Edge,
            BackEdge | Double => Double,
        }
    }
}

/// Loopless directed graphs.
///
/// Every ordered pair of distinct vertices may or may not carry an arc, so two
/// vertices are in one of the four relations described by [`Arc`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct Digraph {
    /// Number of vertices.
    size: usize,
    /// Flat matrix of arcs.
    edge: AntiSym<Arc>,
}

impl Digraph {
    /// Create a digraph with `n` vertices and arcs in `arcs`.
    ///
    /// # Panics
    /// * If `arcs` contains vertices not in `{0, ..., n-1}`
    /// * If a loop `(u, u)` is provided
    /// ```
    /// use flag_expansion::flags::Digraph;
    ///
    /// // Directed path with 3 vertices `0 -> 1 -> 2`
    /// let p3 = Digraph::new(3, [(0, 1), (1, 2)]);
    /// ```
    pub fn new<I>(n: usize, arcs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut res = Self::empty(n);
        for (u, v) in arcs {
            check_arc((u, v), n);
            res.add_arc(u, v);
        }
        res
    }

    /// Digraph with `n` vertices and no arc.
    pub fn empty(n: usize) -> Self {
        Self {
            size: n,
            edge: AntiSym::new(None, n),
        }
    }

    fn add_arc(&mut self, u: usize, v: usize) {
        let old = self.edge.get(u, v);
        self.edge.set((u, v), old.with_forward());
    }

    /// Relation between `u` and `v`, seen from `u`.
    /// ```
    /// use flag_expansion::flags::{Digraph, Arc};
    /// let g = Digraph::new(3, [(0, 1), (1, 2), (2, 1)]);
    /// assert_eq!(g.arc(0, 1), Arc::Edge);
    /// assert_eq!(g.arc(1, 0), Arc::BackEdge);
    /// assert_eq!(g.arc(1, 2), Arc::Double);
    /// assert_eq!(g.arc(0, 2), Arc::None);
    /// ```
    pub fn arc(&self, u: usize, v: usize) -> Arc {
        check_arc((u, v), self.size);
        self.edge.get(u, v)
    }

    /// Returns `true` if there is an arc from `u` to `v`.
    pub fn has_arc(&self, u: usize, v: usize) -> bool {
        u != v && self.edge.get(u, v).forward()
    }

    /// Out-neighborhood of `v`.
    pub fn out_nbrs(&self, v: usize) -> Vec<usize> {
        (0..self.size).filter(|&u| self.has_arc(v, u)).collect()
    }

    /// In-neighborhood of `v`.
    pub fn in_nbrs(&self, v: usize) -> Vec<usize> {
        (0..self.size).filter(|&u| self.has_arc(u, v)).collect()
    }

    /// The arcs `(u, v)`, meaning `u -> v`, in lexicographic order.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        let mut res = Vec::new();
        for u in 0..self.size {
            for v in 0..self.size {
                if self.has_arc(u, v) {
                    res.push((u, v))
                }
            }
        }
        res
    }

    pub(crate) fn induce_arcs(&self, p: &[usize]) -> Self {
        Self {
            size: p.len(),
            edge: self.edge.induce(p),
        }
    }

    /// Extensions of `self` by a vertex whose relation to each old vertex
    /// ranges over `choices`.
    pub(crate) fn extensions(&self, choices: &[Arc]) -> Vec<Self> {
        let n = self.size;
        let mut res = Vec::new();
        let mut iter = Functions::new(n, choices.len());
        while let Some(f) = iter.next() {
            let mut edge = self.edge.clone();
            edge.resize(n + 1, None);
            for v in 0..n {
                edge.set((v, n), choices[f[v]]);
            }
            res.push(Self { edge, size: n + 1 });
        }
        res
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(V=[{}], A={{", self.size)?;
        for (u, v) in self.arcs() {
            if self.size < 10 {
                write!(f, " {u}{v}")?;
            } else {
                write!(f, " {u}-{v}")?;
            }
        }
        write!(f, " }})")
    }
}

fn check_vertex(u: usize, graph_size: usize) {
    assert!(
        u < graph_size,
        "Invalid vertex {u}: the vertex set has size {graph_size}"
    );
}

fn check_arc((u, v): (usize, usize), graph_size: usize) {
    check_vertex(u, graph_size);
    check_vertex(v, graph_size);
    assert!(u != v, "Invalid arc ({u}, {v}): Digraph have no loop");
}

pub(crate) fn check_marked_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<()> {
    for &(u, v) in pairs {
        if u >= n || v >= n || u == v {
            return precondition(format!("invalid arc ({u}, {v}) in a digraph of size {n}"));
        }
    }
    Ok(())
}

impl Canonize for Digraph {
    fn size(&self) -> usize {
        self.size
    }
    fn invariant_neighborhood(&self, v: usize) -> Vec<Vec<usize>> {
        assert!(v < self.size);
        vec![self.out_nbrs(v), self.in_nbrs(v)]
    }
    fn apply_morphism(&self, p: &[usize]) -> Self {
        self.induce_arcs(&combinatorics::invert(p))
    }
}

impl Object for Digraph {
    const NAME: &'static str = "Digraph";

    fn induce(&self, p: &[usize]) -> Self {
        self.induce_arcs(p)
    }

    fn size_zero_objects() -> Vec<Self> {
        vec![Self::empty(0)]
    }

    fn superobjects(&self) -> Vec<Self> {
        self.extensions(&[None, Edge, BackEdge, Double])
    }

    fn marked_pairs(&self) -> Vec<(usize, usize)> {
        self.arcs()
    }

    fn from_marked_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        check_marked_pairs(n, pairs)?;
        Ok(Self::new(n, pairs.iter().copied()))
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_digraph() {
        for (size, &nb) in [1, 1, 3, 16, 218].iter().enumerate() {
            assert_eq!(Digraph::generate(size).len(), nb);
        }
    }

    #[test]
    fn arcs() {
        let g = Digraph::new(3, [(2, 0), (0, 2), (1, 0)]);
        assert_eq!(g.arcs(), vec![(0, 2), (1, 0), (2, 0)]);
        assert_eq!(g.out_nbrs(0), vec![2]);
        assert_eq!(g.in_nbrs(0), vec![1, 2]);
        let h = g.induce(&[0, 2]);
        assert_eq!(h.arc(0, 1), Double);
        assert!(Digraph::from_marked_pairs(2, &[(0, 0)]).is_err());
    }

    #[test]
    fn orientation_matters() {
        let p = Digraph::new(3, [(0, 1), (1, 2)]);
        let q = Digraph::new(3, [(1, 0), (1, 2)]);
        assert!(!p.is_isomorphic(&q));
        let r = Digraph::new(3, [(2, 1), (1, 0)]);
        assert!(p.is_isomorphic(&r));
    }
}
