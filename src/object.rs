//! The combinatorial object capability.
//!
//! Every kind of structure handled by the engine (graphs, digraphs,
//! tournaments...) implements [`Object`]. The engine never depends on a
//! concrete kind.

use crate::combinatorics::*;
use crate::error::Result;
use canonical_form::Canonize;
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};

/// Trait for combinatorial objects (universal theory objects).
///
/// Objects must implement the `Canonize` trait from the `canonical_form`
/// crate, which provides reduction modulo isomorphism and is used for
/// isomorphism tests.
pub trait Object
where
    Self: Canonize + Debug + Display,
{
    /// A unique name for this kind of objects. For instance "Graph".
    const NAME: &'static str;

    /// Returns the object induced by the vertices of `p`,
    /// vertex `i` of the result being `p[i]`.
    fn induce(&self, p: &[usize]) -> Self;
    /// Returns the list of all objects of size 0.
    fn size_zero_objects() -> Vec<Self>;
    /// Returns the objects of size `self.size() + 1` that contain `self`
    /// as the object induced by their first `self.size()` vertices.
    ///
    /// This list can have redundancy and is a priori not reduced modulo isomorphism.
    fn superobjects(&self) -> Vec<Self>;
    /// The marked pairs of the text format.
    fn marked_pairs(&self) -> Vec<(usize, usize)>;
    /// Builds an object of size `n` from its marked pairs.
    fn from_marked_pairs(n: usize, pairs: &[(usize, usize)]) -> Result<Self>;

    // provided methods
    /// Return the list of objects of size `n+1` reduced modulo isomorphism,
    /// given the list of objects of size `n`.
    fn generate_next(previous: &[Self]) -> Vec<Self> {
        let mut res: BTreeSet<Self> = BTreeSet::new();
        for g in previous {
            for h in g.superobjects() {
                let _ = res.insert(h.canonical());
            }
        }
        res.into_iter().collect()
    }

    /// Return the list of objects of size `n` reduced modulo isomorphism.
    fn generate(n: usize) -> Vec<Self> {
        let mut res = Self::size_zero_objects();
        for _ in 0..n {
            res = Self::generate_next(&res);
        }
        res
    }

    /// Sub-object induced by the vertices `v` with `mask[v] == true`,
    /// in increasing order.
    fn subobject(&self, mask: &[bool]) -> Self {
        debug_assert_eq!(mask.len(), self.size());
        self.induce(&mask_to_set(mask))
    }

    /// Reorder `self` so that the `eta.len()` first vertices are the values
    /// of `eta` in the corresponding order.
    fn select_type(&self, eta: &[usize]) -> Self {
        self.induce(&permutation_of_injection(self.size(), eta))
    }

    /// Tries to complete the partial map `f` from the vertices of `self` to
    /// those of `other` into an isomorphism.
    ///
    /// Unset values of `f` are marked by `other.size()`. The defined part of
    /// `f` is not assumed to be consistent. Returns `true` if an isomorphism
    /// extending `f` exists, in which case `f` holds it. On `false`, the
    /// content of `f` is unspecified.
    fn complete_isomorphism(&self, other: &Self, f: &mut [usize]) -> bool {
        let n = self.size();
        if n != other.size() || f.len() != n {
            return false;
        }
        let mut domain = Vec::with_capacity(n);
        let mut image = Vec::with_capacity(n);
        for (u, &v) in f.iter().enumerate() {
            if v != n {
                domain.push(u);
                image.push(v);
            }
        }
        if !is_injection(n, &image) {
            return false;
        }
        // Two objects with aligned prefixes admit a prefix-preserving
        // isomorphism iff their typed canonical forms agree.
        let extendable = |domain: &[usize], image: &[usize]| {
            self.select_type(domain).canonical_typed(domain.len())
                == other.select_type(image).canonical_typed(image.len())
        };
        if !extendable(&domain, &image) {
            return false;
        }
        // Each step keeps an extension possible, so no backtracking is needed.
        for u in 0..n {
            if f[u] != n {
                continue;
            }
            domain.push(u);
            let mut found = false;
            for v in 0..n {
                if image.contains(&v) {
                    continue;
                }
                image.push(v);
                if extendable(&domain, &image) {
                    f[u] = v;
                    found = true;
                    break;
                }
                let _ = image.pop();
            }
            if !found {
                return false;
            }
        }
        true
    }

    /// Returns an isomorphism from `self` to `other` if there is one.
    fn find_isomorphism(&self, other: &Self) -> Option<Vec<usize>> {
        let mut f = vec![other.size(); self.size()];
        if self.complete_isomorphism(other, &mut f) {
            Some(f)
        } else {
            None
        }
    }

    /// Returns `true` if `self` and `other` are isomorphic.
    fn is_isomorphic(&self, other: &Self) -> bool {
        self.size() == other.size() && self.canonical() == other.canonical()
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Graph;

    fn is_isomorphism(g: &Graph, h: &Graph, f: &[usize]) -> bool {
        let n = g.size();
        (0..n).all(|u| (0..n).all(|v| u == v || g.edge(u, v) == h.edge(f[u], f[v])))
    }

    #[test]
    fn generate_graph() {
        for (size, &nb) in [1, 1, 2, 4, 11, 34].iter().enumerate() {
            assert_eq!(Graph::generate(size).len(), nb);
        }
    }

    #[test]
    fn find_isomorphism() {
        let p4 = Graph::new(4, &[(0, 1), (1, 2), (2, 3)]);
        let q4 = Graph::new(4, &[(2, 0), (0, 3), (3, 1)]);
        let f = p4.find_isomorphism(&q4).unwrap();
        assert!(is_isomorphism(&p4, &q4, &f));
        let star = Graph::new(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(p4.find_isomorphism(&star), None);
        assert!(!p4.is_isomorphic(&star));
    }

    #[test]
    fn complete_isomorphism() {
        let p3 = Graph::new(3, &[(0, 1), (1, 2)]);
        // The center must go to the center
        let mut f = vec![1, 3, 3];
        assert!(!p3.complete_isomorphism(&p3, &mut f));
        let mut f = vec![2, 3, 3];
        assert!(p3.complete_isomorphism(&p3, &mut f));
        assert_eq!(f, vec![2, 1, 0]);
        // Inconsistent partial maps are rejected
        let mut f = vec![0, 0, 3];
        assert!(!p3.complete_isomorphism(&p3, &mut f));
        let mut f = vec![3, 3];
        assert!(!p3.complete_isomorphism(&p3, &mut f));
    }

    #[test]
    fn subobject_and_select_type() {
        let g = Graph::new(4, &[(0, 3), (1, 2)]);
        let h = g.subobject(&[true, false, true, true]);
        assert_eq!(h, Graph::new(3, &[(0, 2)]));
        let s = g.select_type(&[3, 1]);
        assert!(s.edge(0, 2));
        assert!(s.edge(1, 3));
        assert!(!s.edge(0, 1));
    }
}
