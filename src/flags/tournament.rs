//! Tournaments, built on top of [`Digraph`].

use crate::error::{Result, precondition};
use crate::flags::digraph::{Arc, Digraph, check_marked_pairs};
use crate::object::Object;
use canonical_form::Canonize;
use std::fmt;

/// Tournaments: digraphs with exactly one arc between any two vertices.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Hash, Serialize, Deserialize)]
pub struct Tournament(Digraph);

impl Tournament {
    /// Tournament where `u -> v` for every `u < v`.
    pub fn transitive(n: usize) -> Self {
        let arcs = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
        Self(Digraph::new(n, arcs))
    }

    /// Returns `true` if `u -> v`.
    pub fn beats(&self, u: usize, v: usize) -> bool {
        self.0.has_arc(u, v)
    }

    /// The underlying digraph.
    pub fn digraph(&self) -> &Digraph {
        &self.0
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Canonize for Tournament {
    fn size(&self) -> usize {
        self.0.size()
    }
    fn invariant_neighborhood(&self, v: usize) -> Vec<Vec<usize>> {
        vec![self.0.out_nbrs(v)]
    }
    fn apply_morphism(&self, p: &[usize]) -> Self {
        Self(self.0.apply_morphism(p))
    }
}

impl Object for Tournament {
    const NAME: &'static str = "Tournament";

    fn induce(&self, p: &[usize]) -> Self {
        Self(self.0.induce_arcs(p))
    }

    fn size_zero_objects() -> Vec<Self> {
        vec![Self(Digraph::empty(0))]
    }

    fn superobjects(&self) -> Vec<Self> {
        self.0
            .extensions(&[Arc::Edge, Arc::BackEdge])
            .into_iter()
            .map(Self)
            .collect()
    }

    fn marked_pairs(&self) -> Vec<(usize, usize)> {
        self.0.arcs()
    }

    fn from_marked_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        check_marked_pairs(n, pairs)?;
        let g = Digraph::new(n, pairs.iter().copied());
        for u in 0..n {
            for v in u + 1..n {
                let arc = g.arc(u, v);
                if arc != Arc::Edge && arc != Arc::BackEdge {
                    return precondition(format!(
                        "vertices {u} and {v} must be joined by exactly one arc"
                    ));
                }
            }
        }
        Ok(Self(g))
    }
}
