//! Flat data structures for binary relations.

use std::mem::swap;
use std::ops::{Index, IndexMut, Neg};

/// Common interface for square matrices without diagonal stored in a single
/// array while taking advantage of symmetries.
pub trait FlatMatrix: Sized {
    /// Type of the entries of the matrix.
    type Item;
    /// Length of the underlying vector depending on the number of
    /// lines of the matrix.
    fn data_size(size: usize) -> usize {
        if size == 0 { 0 } else { (size * (size - 1)) / 2 }
    }
    /// Direct access to the underlying vector.
    fn get_vec(&self) -> &Vec<Self::Item>;
    /// Mutable access to the underlying vector.
    fn get_vec_mut(&mut self) -> &mut Vec<Self::Item>;
    /// Create a matrix by wrapping the underlying vector.
    fn from_vec(_: Vec<Self::Item>) -> Self;
    /// Access to a matrix element.
    fn get(&self, i: usize, j: usize) -> Self::Item;
    /// Redefine a matrix entry.
    fn set(&mut self, ij: (usize, usize), v: Self::Item);

    /// Map a pair `i < j` to the corresponding index in the vector.
    #[inline]
    fn flat_index(i: usize, j: usize) -> usize {
        debug_assert!(i < j);
        Self::data_size(j) + i
    }
    /// Create a new matrix with `n` lines filled with `elem`.
    fn new(elem: Self::Item, n: usize) -> Self
    where
        Self::Item: Clone,
    {
        Self::from_vec(vec![elem; Self::data_size(n)])
    }
    /// Change the number of lines in the matrix to `n`.
    /// If lines are added, fill them with `e`.
    fn resize(&mut self, n: usize, e: Self::Item)
    where
        Self::Item: Clone,
    {
        self.get_vec_mut().resize(Self::data_size(n), e)
    }
    /// Matrix of the relation induced on `p`, in the order of `p`.
    fn induce(&self, p: &[usize]) -> Self
    where
        Self::Item: Clone + Default,
    {
        let mut res = Self::new(Self::Item::default(), p.len());
        for v in 0..p.len() {
            for u in 0..v {
                res.set((u, v), self.get(p[u], p[v]));
            }
        }
        res
    }
}

/// Symmetric relation R such that R(x,x) never holds.
#[derive(Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SymNonRefl<A>(Vec<A>);

impl<A: Clone> FlatMatrix for SymNonRefl<A> {
    type Item = A;

    fn get_vec(&self) -> &Vec<A> {
        &self.0
    }
    fn get_vec_mut(&mut self) -> &mut Vec<A> {
        &mut self.0
    }
    fn from_vec(v: Vec<A>) -> Self {
        SymNonRefl(v)
    }
    fn get(&self, i: usize, j: usize) -> A {
        self[(i, j)].clone()
    }
    fn set(&mut self, ij: (usize, usize), v: A) {
        self[ij] = v
    }
}

fn sym_index(mut i: usize, mut j: usize) -> usize {
    if j < i {
        swap(&mut i, &mut j)
    };
    debug_assert!(j > i);
    (j * (j - 1)) / 2 + i
}

impl<A> Index<(usize, usize)> for SymNonRefl<A> {
    type Output = A;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.0[sym_index(i, j)]
    }
}

impl<A> IndexMut<(usize, usize)> for SymNonRefl<A> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut A {
        &mut self.0[sym_index(i, j)]
    }
}

/// Relation R such that R(x,y) = -R(y,x) and R(x,x) does not hold.
#[derive(Clone, Debug, PartialOrd, Ord, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AntiSym<A>(Vec<A>);

impl<A> FlatMatrix for AntiSym<A>
where
    A: Neg<Output = A> + Copy,
{
    type Item = A;

    fn get_vec(&self) -> &Vec<A> {
        &self.0
    }
    fn get_vec_mut(&mut self) -> &mut Vec<A> {
        &mut self.0
    }
    fn from_vec(v: Vec<A>) -> Self {
        AntiSym(v)
    }
    fn get(&self, i: usize, j: usize) -> A {
        debug_assert!(i != j);
        if i < j {
            self.0[Self::flat_index(i, j)]
        } else {
            -self.0[Self::flat_index(j, i)]
        }
    }
    fn set(&mut self, (i, j): (usize, usize), v: A) {
        if i < j {
            self.0[Self::flat_index(i, j)] = v
        } else {
            self.0[Self::flat_index(j, i)] = -v
        }
    }
}

/// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symnonrefl() {
        assert_eq!(SymNonRefl::new(42, 0).0.len(), 0);
        assert_eq!(SymNonRefl::new(42, 5)[(4, 3)], 42);
        let mut m = SymNonRefl::new(0, 12);
        m[(3, 2)] = 11;
        assert_eq!(m[(2, 3)], 11);
        m.set((3, 4), 22);
        assert_eq!(m.get(4, 3), 22);

        let n = 10;
        let mut m = SymNonRefl::new(0, n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    m[(i, j)] += 1;
                }
            }
        }
        assert!(m.0.iter().all(|&x| x == 2));
    }

    #[test]
    fn antisym() {
        assert_eq!(AntiSym::new(42, 0).0.len(), 0);
        let mut rel = AntiSym::new(0, 12);
        rel.set((5, 2), 42);
        assert_eq!(rel.get(5, 2), 42);
        assert_eq!(rel.get(2, 5), -42);
    }

    #[test]
    fn induce_reorders() {
        let mut m = SymNonRefl::new(0u8, 4);
        m[(0, 3)] = 1;
        m[(1, 2)] = 2;
        let sub = m.induce(&[3, 1, 0]);
        assert_eq!(sub[(0, 2)], 1);
        assert_eq!(sub[(0, 1)], 0);
        let mut a = AntiSym::new(0i8, 3);
        a.set((2, 0), 1);
        let sub = a.induce(&[2, 0]);
        assert_eq!(sub.get(0, 1), 1);
        assert_eq!(sub.get(1, 0), -1);
    }
}
