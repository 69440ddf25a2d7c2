//! Flags: objects with some labeled vertices.

use crate::combinatorics::*;
use crate::engine::Engine;
use crate::error::{Result, precondition};
use crate::object::Object;
use canonical_form::Canonize;
use num::{BigInt, BigRational};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// An object of the engine together with an injective labeling of some
/// of its vertices.
///
/// A flag does not own its object: it shares the list of representatives
/// of its size and stores an index into it. Label `i` is on vertex
/// `type_morphism()[i]`.
///
/// Two flags are equal if there is an isomorphism between their objects that
/// preserves the labels.
#[derive(Clone)]
pub struct Flag<O> {
    objects: Arc<Vec<O>>,
    index: usize,
    type_morphism: Vec<usize>,
    multiplicity: OnceLock<u64>,
}

impl<O: Object> Flag<O> {
    pub(crate) fn from_parts(objects: Arc<Vec<O>>, index: usize, type_morphism: Vec<usize>) -> Self {
        debug_assert!(index < objects.len());
        debug_assert!(is_injection(objects[index].size(), &type_morphism));
        Self {
            objects,
            index,
            type_morphism,
            multiplicity: OnceLock::new(),
        }
    }

    pub(crate) fn with_type_morphism(&self, type_morphism: Vec<usize>) -> Self {
        Self::from_parts(self.objects.clone(), self.index, type_morphism)
    }

    pub(crate) fn preset_multiplicity(&self, m: u64) {
        let _ = self.multiplicity.set(m);
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.object().size()
    }

    /// Number of labeled vertices.
    pub fn type_size(&self) -> usize {
        self.type_morphism.len()
    }

    /// The underlying object, a representative of its isomorphism class.
    pub fn object(&self) -> &O {
        &self.objects[self.index]
    }

    /// Index of the object in the list of objects of its size.
    pub fn object_index(&self) -> usize {
        self.index
    }

    pub fn type_morphism(&self) -> &[usize] {
        &self.type_morphism
    }

    /// `res[v]` is `true` if `v` carries a label.
    pub fn labeled_vertices(&self) -> Vec<bool> {
        let mut res = vec![false; self.size()];
        for &v in &self.type_morphism {
            res[v] = true;
        }
        res
    }

    /// The object induced by the labeled vertices, vertex `i` carrying
    /// label `i`.
    pub fn unlabeled_type(&self) -> O {
        self.object().induce(&self.type_morphism)
    }

    /// The flag induced by the labeled vertices.
    pub fn type_flag(&self, engine: &Engine<O>) -> Result<Self> {
        let ty = self.unlabeled_type();
        engine.flag(&ty, &(0..ty.size()).collect::<Vec<_>>())
    }

    /// The flag induced by the vertices `v` with `mask[v] == true`.
    ///
    /// The mask is expected to contain every labeled vertex; this is only
    /// checked in debug builds. See [`Flag::checked_subflag`].
    pub fn subflag(&self, engine: &Engine<O>, mask: &[bool]) -> Result<Self> {
        debug_assert_eq!(mask.len(), self.size());
        debug_assert!(self.type_morphism.iter().all(|&v| mask[v]));
        let set = mask_to_set(mask);
        let position = pseudo_invert(self.size(), &set);
        let mut v = Vec::with_capacity(self.type_size());
        for &u in &self.type_morphism {
            match position[u] {
                Some(i) => v.push(i),
                None => return precondition(format!("labeled vertex {u} is not selected")),
            }
        }
        engine.flag(&self.object().induce(&set), &v)
    }

    /// Same as [`Flag::subflag`] but fails if `mask` does not have one
    /// entry per vertex or misses a labeled vertex.
    pub fn checked_subflag(&self, engine: &Engine<O>, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.size() {
            return precondition(format!(
                "mask of length {} on a flag of size {}",
                mask.len(),
                self.size()
            ));
        }
        if let Some(&v) = self.type_morphism.iter().find(|&&v| !mask[v]) {
            return precondition(format!("mask misses the labeled vertex {v}"));
        }
        self.subflag(engine, mask)
    }

    /// Tries to complete the partial map `f` from the vertices of `self` to
    /// those of `other` into a label-preserving isomorphism.
    ///
    /// Unset entries are marked by `other.size()`. The labeled vertices of
    /// `self` are first sent to the matching labeled vertices of `other`;
    /// an entry already set to something else makes the completion fail.
    pub fn complete_isomorphism(&self, other: &Self, f: &mut [usize]) -> bool {
        let n = other.size();
        if self.size() != n || self.type_size() != other.type_size() || f.len() != n {
            return false;
        }
        for (&u, &v) in self.type_morphism.iter().zip(&other.type_morphism) {
            if f[u] == n {
                f[u] = v
            } else if f[u] != v {
                return false;
            }
        }
        self.object().complete_isomorphism(other.object(), f)
    }

    /// A label-preserving isomorphism from `self` to `other`, if any.
    pub fn find_isomorphism(&self, other: &Self) -> Option<Vec<usize>> {
        let mut f = vec![other.size(); self.size()];
        if self.complete_isomorphism(other, &mut f) {
            Some(f)
        } else {
            None
        }
    }

    /// Canonical form of the object with the labeled vertices moved in
    /// front, in the order of their labels.
    ///
    /// Two flags are equal if and only if their normalized forms are.
    pub fn normalized_form(&self) -> O {
        self.object()
            .select_type(&self.type_morphism)
            .canonical_typed(self.type_size())
    }

    /// Number of injective labelings `v` of `self.object()` such that
    /// `engine.flag(self.object(), v)` equals `self`.
    pub fn multiplicity(&self, engine: &Engine<O>) -> Result<u64> {
        if let Some(&m) = self.multiplicity.get() {
            return Ok(m);
        }
        let m = engine.count_labelings(self)?;
        Ok(*self.multiplicity.get_or_init(|| m))
    }

    /// Probability that a uniformly random labeling of the type vertices
    /// of `self.object()` gives `self`.
    pub fn norm_factor(&self, engine: &Engine<O>) -> Result<BigRational> {
        let labelings = falling_factorial(self.size(), self.type_size());
        Ok(BigRational::new(
            BigInt::from(self.multiplicity(engine)?),
            BigInt::from(labelings),
        ))
    }
}

impl<O: Object> PartialEq for Flag<O> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size()
            && self.type_size() == other.type_size()
            && (self.index == other.index || self.object().is_isomorphic(other.object()))
            && self.find_isomorphism(other).is_some()
    }
}

impl<O: Object> Eq for Flag<O> {}

impl<O: fmt::Debug> fmt::Debug for Flag<O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Flag")
            .field("object", &self.objects[self.index])
            .field("type_morphism", &self.type_morphism)
            .finish()
    }
}

impl<O: fmt::Display> fmt::Display for Flag<O> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} labeled by {:?}", self.objects[self.index], self.type_morphism)
    }
}

impl<O: Object> Engine<O> {
    /// The flag on (the representative of) `g` with label `i` on vertex
    /// `v[i]`.
    pub fn flag(&self, g: &O, v: &[usize]) -> Result<Flag<O>> {
        if !is_injection(g.size(), v) {
            return precondition(format!(
                "{v:?} is not an injective labeling of a {} of size {}",
                O::NAME,
                g.size()
            ));
        }
        let (index, iso) = self.locate(g)?;
        Ok(Flag::from_parts(
            self.objects(g.size()),
            index,
            compose(&iso, v),
        ))
    }
}
