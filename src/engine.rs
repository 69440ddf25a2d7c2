//! The engine owning every enumeration and expansion cache.

use crate::cache::OnceMap;
use crate::expansion::ProductTable;
use crate::flag::Flag;
use crate::object::Object;
use crate::typed::Buckets;
use std::fmt;

/// Type (or root) of a flag.
/// It is identified by its size and its id in the list of objects of that size.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct Type {
    /// Size of the type.
    pub size: usize,
    /// Index of the type in the list of objects of this size.
    pub id: usize,
}

impl Type {
    /// Constructor for the type.
    pub fn new(size: usize, id: usize) -> Self {
        Self { size, id }
    }
    /// Create a type of size 0.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }
    /// Return wether the input has size zero
    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            write!(f, "empty type")
        } else {
            write!(f, "type {} of size {}", self.id, self.size)
        }
    }
}

/// Key of a product table: the type, the sizes of the two factors and
/// the size of the expansion.
pub(crate) type ProductKey = (Type, usize, usize, usize);

/// Entry point of the crate, generic over the kind of objects.
///
/// Every list and table is computed at most once for the lifetime of the
/// engine, and requesting it again returns the same shared allocation.
/// ```
/// use flag_expansion::{Engine, flags::Graph};
/// use std::sync::Arc;
///
/// let engine = Engine::<Graph>::new();
/// let graphs = engine.objects(4);
/// assert_eq!(graphs.len(), 11);
/// assert!(Arc::ptr_eq(&graphs, &engine.objects(4)));
/// ```
#[derive(Debug)]
pub struct Engine<O> {
    pub(crate) objects: OnceMap<usize, Vec<O>>,
    pub(crate) types: OnceMap<usize, Vec<Flag<O>>>,
    pub(crate) buckets: OnceMap<(usize, usize), Buckets<O>>,
    pub(crate) products: OnceMap<ProductKey, ProductTable>,
}

impl<O: Object> Default for Engine<O> {
    fn default() -> Self {
        Self {
            objects: OnceMap::new(),
            types: OnceMap::new(),
            buckets: OnceMap::new(),
            products: OnceMap::new(),
        }
    }
}

impl<O: Object> Engine<O> {
    /// An engine with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached lists and tables.
    pub fn cached_entries(&self) -> usize {
        self.objects.len() + self.types.len() + self.buckets.len() + self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Graph;

    #[test]
    fn type_display() {
        assert_eq!(Type::empty().to_string(), "empty type");
        assert_eq!(Type::new(2, 1).to_string(), "type 1 of size 2");
        assert!(!Type::new(1, 0).is_empty());
    }

    #[test]
    fn caches_grow() {
        let engine = Engine::<Graph>::new();
        assert_eq!(engine.cached_entries(), 0);
        let _ = engine.objects(3);
        // Sizes 0 to 3 are enumerated
        assert_eq!(engine.objects.len(), 4);
    }
}
