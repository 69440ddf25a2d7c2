//! Enumeration of objects up to isomorphism.

use crate::engine::Engine;
use crate::error::{Result, invariant};
use crate::object::Object;
use canonical_form::Canonize;
use log::*;
use std::sync::Arc;

impl<O: Object> Engine<O> {
    /// The objects of size `size`, one per isomorphism class,
    /// sorted by canonical form.
    ///
    /// The list of size `n` is obtained by extending the list of size
    /// `n - 1` by one vertex.
    pub fn objects(&self, size: usize) -> Arc<Vec<O>> {
        self.objects.get_or_init(&size, || {
            let res = if size == 0 {
                let mut res: Vec<O> = O::size_zero_objects()
                    .into_iter()
                    .map(|g| g.canonical())
                    .collect();
                res.sort();
                res.dedup();
                res
            } else {
                O::generate_next(&self.objects(size - 1))
            };
            info!("{} objects of size {}: {}", O::NAME, size, res.len());
            res
        })
    }

    /// The index of the representative of `g` in `self.objects(g.size())`,
    /// and an isomorphism from `g` onto that representative.
    ///
    /// Vertex `u` of `g` is mapped to vertex `iso[u]` of the representative.
    /// When `g` is itself the representative, `iso` is the identity.
    pub fn locate(&self, g: &O) -> Result<(usize, Vec<usize>)> {
        let objects = self.objects(g.size());
        let p = g.morphism_to_canonical();
        let canonical = g.apply_morphism(&p);
        let id = match objects.binary_search(&canonical) {
            Ok(id) => id,
            Err(_) => return invariant(format!("{} {g} not found among representatives", O::NAME)),
        };
        trace!("Located {} {} at index {}", O::NAME, g, id);
        if objects[id] == *g {
            Ok((id, (0..g.size()).collect()))
        } else {
            Ok((id, p))
        }
    }
}
