//! Enumeration of flags, bucketed by normalized type.

use crate::combinatorics::*;
use crate::engine::{Engine, Type};
use crate::error::{Result, invariant, precondition};
use crate::flag::Flag;
use crate::iterators::{Injection, StreamingIterator};
use crate::object::Object;
use canonical_form::Canonize;
use log::*;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// The flags of a given size whose type has a given size, one list per
/// normalized type.
pub(crate) struct Buckets<O> {
    pub(crate) flags: Vec<Arc<Vec<Flag<O>>>>,
    multiplicities: Vec<Vec<u64>>,
    /// Normalized form of each flag to its position in its list.
    pub(crate) index: Vec<BTreeMap<O, usize>>,
}

impl<O: Object> Engine<O> {
    /// The flags `(g, id)` for every object `g` of size `size`.
    ///
    /// The flag at position `i` is a normalized type, its object being
    /// `self.objects(size)[i]`.
    pub fn normalized_types(&self, size: usize) -> Arc<Vec<Flag<O>>> {
        self.types.get_or_init(&size, || {
            let objects = self.objects(size);
            let id: Vec<usize> = (0..size).collect();
            (0..objects.len())
                .map(|i| Flag::from_parts(objects.clone(), i, id.clone()))
                .collect()
        })
    }

    /// The key identifying the normalized type of `ty`.
    pub fn type_key(&self, ty: &O) -> Result<Type> {
        let (id, _) = self.locate(ty)?;
        Ok(Type::new(ty.size(), id))
    }

    pub(crate) fn buckets(&self, type_size: usize, size: usize) -> Result<Arc<Buckets<O>>> {
        if type_size > size {
            return precondition(format!(
                "flags of size {size} cannot have a type of size {type_size}"
            ));
        }
        self.buckets
            .get_or_try_init(&(type_size, size), || self.populate_buckets(type_size, size))
    }

    // Every labeling of every object is tried. Only the labelings whose
    // type is exactly a normalized type are kept, so that a flag is counted
    // once per labeling giving it.
    fn populate_buckets(&self, type_size: usize, size: usize) -> Result<Buckets<O>> {
        let types = self.objects(type_size);
        let n_types = types.len();
        let objects = self.objects(size);
        let mut flags: Vec<Vec<Flag<O>>> = (0..n_types).map(|_| Vec::new()).collect();
        let mut multiplicities: Vec<Vec<u64>> = vec![Vec::new(); n_types];
        let mut index: Vec<BTreeMap<O, usize>> = (0..n_types).map(|_| BTreeMap::new()).collect();
        let mut iter = Injection::new(size, type_size);
        while let Some(v) = iter.next() {
            for (i, g) in objects.iter().enumerate() {
                let ty = g.induce(v);
                let (id, _) = self.locate(&ty)?;
                if ty != types[id] {
                    continue;
                }
                let key = g.select_type(v).canonical_typed(type_size);
                match index[id].entry(key) {
                    Entry::Occupied(e) => multiplicities[id][*e.get()] += 1,
                    Entry::Vacant(e) => {
                        let _ = e.insert(flags[id].len());
                        flags[id].push(Flag::from_parts(objects.clone(), i, v.to_vec()));
                        multiplicities[id].push(1);
                    }
                }
            }
        }
        for (bucket, mult) in flags.iter().zip(&multiplicities) {
            for (f, &m) in bucket.iter().zip(mult) {
                f.preset_multiplicity(m)
            }
        }
        info!(
            "{} flags of size {} with a type of size {}: {}",
            O::NAME,
            size,
            type_size,
            flags.iter().map(Vec::len).sum::<usize>()
        );
        for (id, bucket) in flags.iter().enumerate() {
            debug!("{}: {} flags", Type::new(type_size, id), bucket.len());
        }
        Ok(Buckets {
            flags: flags.into_iter().map(Arc::new).collect(),
            multiplicities,
            index,
        })
    }

    /// The flags of size `size` whose type is the normalized type of `ty`,
    /// pairwise distinct and covering every such flag.
    ///
    /// Also returns an isomorphism from `ty` onto the normalized type:
    /// vertex `u` of `ty` corresponds to label `iso[u]` of the returned flags.
    pub fn enumerate_flags(&self, size: usize, ty: &O) -> Result<(Arc<Vec<Flag<O>>>, Vec<usize>)> {
        let buckets = self.buckets(ty.size(), size)?;
        let (id, iso) = self.locate(ty)?;
        Ok((buckets.flags[id].clone(), iso))
    }

    /// The flags of size `size` and type `type_flag`, labeled like
    /// `type_flag`.
    ///
    /// `type_flag` must be a type, i.e. have all its vertices labeled.
    pub fn enumerate_flags_of_type(&self, size: usize, type_flag: &Flag<O>) -> Result<Vec<Flag<O>>> {
        if type_flag.size() != type_flag.type_size() {
            return precondition(format!(
                "a flag of size {} with {} labels is not a type",
                type_flag.size(),
                type_flag.type_size()
            ));
        }
        let (list, iso) = self.enumerate_flags(size, type_flag.object())?;
        // Label `i` of the type is on the vertex `iso[m[i]]` of the normalized type.
        let relabel = compose(&iso, type_flag.type_morphism());
        Ok(list
            .iter()
            .map(|f| f.with_type_morphism(compose(f.type_morphism(), &relabel)))
            .collect())
    }

    // Position of `flag` in the buckets, as (type id, index in the bucket).
    fn bucket_position(&self, flag: &Flag<O>) -> Result<(usize, usize)> {
        let type_size = flag.type_size();
        let buckets = self.buckets(type_size, flag.size())?;
        let (id, iso) = self.locate(&flag.unlabeled_type())?;
        let w = compose(flag.type_morphism(), &invert(&iso));
        let key = flag.object().select_type(&w).canonical_typed(type_size);
        trace!("Looking for {} in the flags of {}", flag, Type::new(type_size, id));
        match buckets.index[id].get(&key) {
            Some(&i) => Ok((id, i)),
            None => invariant(format!("flag {flag} missing from its bucket")),
        }
    }

    /// Position of `flag` in the list of flags of its size and normalized
    /// type.
    ///
    /// If the type of `flag` is not labeled as the normalized type, the
    /// position is the one of the flag relabeled by [`Engine::locate`].
    pub fn flag_index(&self, flag: &Flag<O>) -> Result<usize> {
        Ok(self.bucket_position(flag)?.1)
    }

    pub(crate) fn count_labelings(&self, flag: &Flag<O>) -> Result<u64> {
        let (id, i) = self.bucket_position(flag)?;
        let buckets = self.buckets(flag.type_size(), flag.size())?;
        Ok(buckets.multiplicities[id][i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::flags::{Digraph, Graph, Tournament};

    #[test]
    fn graph_flag_counts() {
        let engine = Engine::<Graph>::new();
        let (edge_type, _) = engine.enumerate_flags(2, &Graph::clique(2)).unwrap();
        assert_eq!(edge_type.len(), 1);
        // Size 3 flags over one labeled vertex
        let (flags, iso) = engine.enumerate_flags(3, &Graph::empty(1)).unwrap();
        assert_eq!(flags.len(), 6);
        assert_eq!(iso, vec![0]);
        // Size 3 flags over a labeled edge
        let (flags, _) = engine.enumerate_flags(3, &Graph::clique(2)).unwrap();
        assert_eq!(flags.len(), 4);
        let (flags, _) = engine.enumerate_flags(3, &Graph::empty(2)).unwrap();
        assert_eq!(flags.len(), 4);
    }

    #[test]
    fn buckets_are_pairwise_distinct() {
        let engine = Engine::<Digraph>::new();
        let (flags, _) = engine.enumerate_flags(3, &Digraph::new(2, [(0, 1)])).unwrap();
        for (i, f) in flags.iter().enumerate() {
            for g in &flags[..i] {
                assert_ne!(f, g);
            }
            assert_eq!(engine.flag_index(f).unwrap(), i);
        }
    }

    // Number of labelings of the object of `f` giving `f` back.
    fn labelings_giving<O: Object>(engine: &Engine<O>, f: &Flag<O>) -> u64 {
        let mut count = 0;
        let mut iter = Injection::new(f.size(), f.type_size());
        while let Some(v) = iter.next() {
            if engine.flag(f.object(), v).unwrap() == *f {
                count += 1
            }
        }
        count
    }

    #[test]
    fn multiplicities_count_labelings() {
        let engine = Engine::<Graph>::new();
        for (type_size, size) in [(2, 4), (3, 3), (3, 4)] {
            for ty in engine.objects(type_size).iter() {
                let (flags, _) = engine.enumerate_flags(size, ty).unwrap();
                for f in flags.iter() {
                    let m = f.multiplicity(&engine).unwrap();
                    assert!(m > 0 && m <= falling_factorial(size, type_size));
                    assert_eq!(m, labelings_giving(&engine, f));
                }
            }
        }
    }

    #[test]
    fn rigid_types() {
        let engine = Engine::<Graph>::new();
        // The path labeled on all its vertices, and its reverse
        let p3 = Graph::new(3, &[(0, 1), (1, 2)]);
        let (flags, _) = engine.enumerate_flags(3, &p3).unwrap();
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].multiplicity(&engine).unwrap(), 2);
        assert_eq!(
            flags[0].norm_factor(&engine).unwrap(),
            num::BigRational::new(1.into(), 3.into())
        );
        // Only the identity preserves a transitive tournament
        let engine = Engine::<Tournament>::new();
        let (flags, _) = engine.enumerate_flags(3, &Tournament::transitive(3)).unwrap();
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].multiplicity(&engine).unwrap(), 1);
        let (flags, _) = engine.enumerate_flags(4, &Tournament::transitive(3)).unwrap();
        for f in flags.iter() {
            assert_eq!(f.multiplicity(&engine).unwrap(), labelings_giving(&engine, f));
        }
    }

    #[test]
    fn normalized_types() {
        let engine = Engine::<Graph>::new();
        let types = engine.normalized_types(2);
        assert_eq!(types.len(), 2);
        assert!(types.iter().all(|t| t.size() == 2 && t.type_size() == 2));
        assert!(Arc::ptr_eq(&types, &engine.normalized_types(2)));
        assert_eq!(engine.type_key(&Graph::clique(2)).unwrap().size, 2);
    }

    #[test]
    fn flags_of_type_keep_the_labels() {
        let engine = Engine::<Graph>::new();
        // Label 0 on the center of a path, label 1 on an end
        let p3 = Graph::new(3, &[(0, 1), (1, 2)]);
        let ty = engine.flag(&p3, &[1, 0, 2]).unwrap();
        let flags = engine.enumerate_flags_of_type(4, &ty).unwrap();
        assert!(!flags.is_empty());
        for f in &flags {
            assert_eq!(f.type_flag(&engine).unwrap(), ty);
        }
        let not_a_type = engine.flag(&p3, &[1]).unwrap();
        assert!(matches!(
            engine.enumerate_flags_of_type(4, &not_a_type),
            Err(Error::Precondition(_))
        ));
        assert!(engine.enumerate_flags(1, &Graph::empty(2)).is_err());
    }
}
