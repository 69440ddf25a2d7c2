//! Streaming iterators on combinatorial objects (subsets, functions, injections).
//!
//! All these iterators work without allocating new memory after
//! their initialisation.

/// Interface for streaming iterators.
///
/// The elements yielded by the iterator are borrowed by the iterator,
/// so a loop on such an iterator `iter` is written as follows.
///```ignore
///while let Some(item) = iter.next() {
///    ...
///}
///```
pub trait StreamingIterator<A>
where
    A: ?Sized,
{
    /// Return the next value of the iterator.
    fn next(&mut self) -> Option<&A>;

    /// Consume the iterator and return the number of elements yielded.
    fn count(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}

/// Iterator on subsets of `[n]`, as increasing arrays.
#[derive(Clone, Debug)]
pub struct Subsets {
    n: usize,
    data: Vec<usize>,
    started: bool,
}

impl Subsets {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: Vec::with_capacity(n),
            started: false,
        }
    }
}

impl StreamingIterator<[usize]> for Subsets {
    fn next(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.data);
        }
        // Binary counter where `data` lists the positions of the ones
        let mut bit = 0;
        while self.data.first() == Some(&bit) {
            let _ = self.data.remove(0);
            bit += 1;
        }
        if bit == self.n {
            return None;
        }
        self.data.insert(0, bit);
        Some(&self.data)
    }
}

/// Iterator on functions from `[n]` to `[k]`.
#[derive(Clone, Debug)]
pub struct Functions {
    k: usize,
    data: Vec<usize>,
    started: bool,
}

impl Functions {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            k,
            data: vec![0; n],
            started: false,
        }
    }
}

impl StreamingIterator<[usize]> for Functions {
    fn next(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            if self.k == 0 && !self.data.is_empty() {
                return None;
            }
            return Some(&self.data);
        }
        for x in self.data.iter_mut() {
            if *x + 1 < self.k {
                *x += 1;
                return Some(&self.data);
            }
            *x = 0;
        }
        None
    }
}

/// Iterator on subsets of `[n]` with `k` elements represented by
/// increasing arrays, in lexicographic order.
///
/// The first `fixed` elements can be pinned to `[fixed]`: this is how the
/// labeled vertices of a flag are kept in every selection.
#[derive(Clone, Debug)]
pub struct Choose {
    n: usize,
    fixed: usize,
    data: Vec<usize>,
    started: bool,
}

impl Choose {
    /// Subsets of `[n]` with `k` elements.
    pub fn new(n: usize, k: usize) -> Self {
        Self::with_fixed_part(n, k, 0)
    }
    /// Subsets of `[n]` with `k` elements that contain `[fixed]`.
    pub fn with_fixed_part(n: usize, k: usize, fixed: usize) -> Self {
        assert!(fixed <= k && k <= n);
        Self {
            n,
            fixed,
            data: (0..k).collect(),
            started: false,
        }
    }
}

impl StreamingIterator<[usize]> for Choose {
    fn next(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.data);
        }
        let k = self.data.len();
        // Rightmost free position that can still move right
        let i = (self.fixed..k)
            .rev()
            .find(|&i| self.data[i] < self.n - k + i)?;
        self.data[i] += 1;
        for j in i + 1..k {
            self.data[j] = self.data[j - 1] + 1;
        }
        Some(&self.data)
    }
}

/// Iterator on the injections from `[k]` to `[n]` in lexicographic order.
///
/// With `fixed > 0`, the first `fixed` values are pinned to the identity.
#[derive(Clone, Debug)]
pub struct Injection {
    n: usize,
    fixed: usize,
    data: Vec<usize>,
    used: Vec<bool>,
    started: bool,
}

impl Injection {
    /// Iterator on the injections from `[k]` to `[n]` that stabilize `[fixed]`.
    pub fn with_fixed_part(n: usize, k: usize, fixed: usize) -> Self {
        assert!(k <= n);
        assert!(fixed <= k);
        let mut used = vec![false; n];
        for u in used.iter_mut().take(k) {
            *u = true;
        }
        Self {
            n,
            fixed,
            data: (0..k).collect(),
            used,
            started: false,
        }
    }

    /// Iterator on the injections from `[k]` to `[n]`.
    pub fn new(n: usize, k: usize) -> Self {
        Self::with_fixed_part(n, k, 0)
    }
}

impl StreamingIterator<[usize]> for Injection {
    fn next(&mut self) -> Option<&[usize]> {
        if !self.started {
            self.started = true;
            return Some(&self.data);
        }
        let k = self.data.len();
        let mut i = k;
        while i > self.fixed {
            i -= 1;
            let old = self.data[i];
            self.used[old] = false;
            if let Some(v) = (old + 1..self.n).find(|&v| !self.used[v]) {
                self.data[i] = v;
                self.used[v] = true;
                // Refill the tail with the smallest unused values
                let mut candidate = 0;
                for j in i + 1..k {
                    while self.used[candidate] {
                        candidate += 1;
                    }
                    self.data[j] = candidate;
                    self.used[candidate] = true;
                }
                return Some(&self.data);
            }
        }
        None
    }
}
