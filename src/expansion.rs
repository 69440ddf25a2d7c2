//! Expansion coefficients of flags and of products of flags.
//!
//! The density of a flag `F` of size `k` in a flag `G` of size `n` (with
//! the same type of size `t`) is the probability that `k - t` unlabeled
//! vertices of `G` chosen uniformly at random induce, together with the
//! labeled vertices, a flag equal to `F`. For a product `F1 F2`, two
//! disjoint sets of unlabeled vertices are chosen.

use crate::combinatorics::*;
use crate::engine::{Engine, Type};
use crate::error::{Result, invariant, precondition};
use crate::flag::Flag;
use crate::iterators::*;
use crate::object::Object;
use canonical_form::Canonize;
use log::*;
use num::{BigInt, BigRational, Zero};
use sprs::{CsMat, TriMat};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A nonzero entry of a sparse row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coefficient {
    /// Index of the flag in the list of expansion flags.
    pub index: usize,
    pub value: BigRational,
}

/// Sparse row, sorted by increasing `index`.
pub type Row = Vec<Coefficient>;

/// `table[i][j]` is the expansion of the product of the flags `i` and `j`.
pub type ProductTable = Vec<Arc<Vec<Row>>>;

/// Expansion of a concrete flag or product of flags.
#[derive(Clone, Debug)]
pub struct Expansion<O> {
    /// The flags of the expansion size, labeled like the input.
    pub flags: Vec<Flag<O>>,
    /// Nonzero coefficients, indexed in `flags`.
    pub row: Row,
}

impl<O> Expansion<O> {
    /// The pairs (flag, coefficient) with nonzero coefficient.
    pub fn terms(&self) -> impl Iterator<Item = (&Flag<O>, &BigRational)> + '_ {
        self.row.iter().map(move |c| (&self.flags[c.index], &c.value))
    }

    /// One coefficient per expansion flag, zeros included.
    pub fn dense(&self) -> Vec<BigRational> {
        let mut res = vec![BigRational::zero(); self.flags.len()];
        for c in &self.row {
            res[c.index] = c.value.clone();
        }
        res
    }
}

fn induce_and_reduce<O: Object>(type_size: usize, g: &O, subset: &[usize]) -> O {
    g.induce(subset).canonical_typed(type_size)
}

fn lookup<O: Object>(index: &BTreeMap<O, usize>, f: &O) -> Result<usize> {
    match index.get(f) {
        Some(&i) => Ok(i),
        None => invariant(format!("{} {f} is not in the list of subflags", O::NAME)),
    }
}

/// Returns a vector `m` of length `g_vec.len()` of
/// `index1.len()`x`index2.len()` matrices
/// such that `m[k][i,j]` is the number of ordered pairs of disjoint sets
/// `A`, `B` of unlabeled vertices of `g_vec[k]` with `|A| = k1 - type_size`
/// and `|B| = k2 - type_size` such that the type and `A` induce the flag `i`
/// and the type and `B` induce the flag `j`.
///
/// The labeled vertices of the objects of `g_vec` must be `0..type_size`
/// and the flags are identified by their typed canonical form.
///
/// The matrices are in CSR form.
pub fn count_disjoint_tabulate<O: Object>(
    type_size: usize,
    (k1, k2): (usize, usize),
    index1: &BTreeMap<O, usize>,
    index2: &BTreeMap<O, usize>,
    g_vec: &[O],
) -> Result<Vec<CsMat<u64>>> {
    let shape = (index1.len(), index2.len());
    let mut res = Vec::with_capacity(g_vec.len());
    for g in g_vec {
        let n = g.size();
        debug_assert!(n + type_size >= k1 + k2);
        let mut tri_mat: TriMat<u64> = TriMat::new(shape);
        let mut iter1 = Choose::with_fixed_part(n, k1, type_size);
        while let Some(subset1) = iter1.next() {
            let i = lookup(index1, &induce_and_reduce(type_size, g, subset1))?;
            let rest: Vec<usize> = (type_size..n).filter(|v| !subset1.contains(v)).collect();
            let mut iter2 = Choose::new(rest.len(), k2 - type_size);
            while let Some(choice) = iter2.next() {
                let subset2: Vec<usize> = (0..type_size)
                    .chain(choice.iter().map(|&x| rest[x]))
                    .collect();
                let j = lookup(index2, &induce_and_reduce(type_size, g, &subset2))?;
                tri_mat.add_triplet(i, j, 1);
            }
        }
        let mat: CsMat<u64> = tri_mat.to_csr();
        res.push(mat)
    }
    Ok(res)
}

impl<O: Object> Engine<O> {
    /// The expansions of all the products of a flag of size `size1` and a
    /// flag of size `size2` with type `ty` in the basis of flags of size
    /// `exp_size`.
    ///
    /// Flags are the ones of [`Engine::enumerate_flags`] and the returned
    /// isomorphism is the one from `ty` onto the normalized type.
    /// `table[i][j]` is a sparse row over the flags of size `exp_size`.
    pub fn expand_flag_product_enumerate(
        &self,
        ty: &O,
        size1: usize,
        size2: usize,
        exp_size: usize,
    ) -> Result<(Arc<ProductTable>, Vec<usize>)> {
        let t = ty.size();
        if size1 < t || size2 < t {
            return precondition(format!(
                "cannot multiply flags of sizes {size1} and {size2} over a type of size {t}"
            ));
        }
        if exp_size + t < size1 + size2 {
            return precondition(format!(
                "flags of sizes {size1} and {size2} over a type of size {t} \
                 do not fit disjointly in size {exp_size}"
            ));
        }
        let (id, iso) = self.locate(ty)?;
        let key = (Type::new(t, id), size1, size2, exp_size);
        let table = self
            .products
            .get_or_try_init(&key, || self.product_table(key.0, size1, size2, exp_size))?;
        Ok((table, iso))
    }

    fn product_table(
        &self,
        ty: Type,
        size1: usize,
        size2: usize,
        exp_size: usize,
    ) -> Result<ProductTable> {
        let t = ty.size;
        let left = self.buckets(t, size1)?;
        let right = self.buckets(t, size2)?;
        let target = self.buckets(t, exp_size)?;
        let g_vec: Vec<O> = target.flags[ty.id]
            .iter()
            .map(|f| f.object().select_type(f.type_morphism()))
            .collect();
        let counts = count_disjoint_tabulate(
            t,
            (size1, size2),
            &left.index[ty.id],
            &right.index[ty.id],
            &g_vec,
        )?;
        let (d1, d2, e) = (size1 - t, size2 - t, exp_size - t);
        let denom = big_binomial(d1, e) * big_binomial(d2, e - d1);
        let mut table = vec![vec![Row::new(); right.flags[ty.id].len()]; left.flags[ty.id].len()];
        for (k, mat) in counts.iter().enumerate() {
            for (&count, (i, j)) in mat.iter() {
                table[i][j].push(Coefficient {
                    index: k,
                    value: BigRational::new(BigInt::from(count), denom.clone()),
                })
            }
        }
        info!(
            "Products of {} flags of sizes {} and {} in size {} over {}: {}x{} table",
            O::NAME,
            size1,
            size2,
            exp_size,
            ty,
            table.len(),
            right.flags[ty.id].len()
        );
        Ok(table.into_iter().map(Arc::new).collect())
    }

    /// The expansions of the flags of size `base_size` and type `ty` in the
    /// basis of flags of size `exp_size`.
    ///
    /// `res[i]` is a sparse row over the flags of size `exp_size`.
    pub fn expand_flag_enumerate(
        &self,
        ty: &O,
        base_size: usize,
        exp_size: usize,
    ) -> Result<(Arc<Vec<Row>>, Vec<usize>)> {
        let t = ty.size();
        if base_size < t || exp_size < base_size {
            return precondition(format!(
                "cannot expand flags of size {base_size} over a type of size {t} in size {exp_size}"
            ));
        }
        let (table, iso) = self.expand_flag_product_enumerate(ty, t, base_size, exp_size)?;
        Ok((table[0].clone(), iso))
    }

    /// Same as [`Engine::expand_flag_product_enumerate`] with the empty type.
    pub fn expand_object_product_enumerate(
        &self,
        size1: usize,
        size2: usize,
        exp_size: usize,
    ) -> Result<Arc<ProductTable>> {
        let (table, _) = self.expand_flag_product_enumerate(&self.empty_type()?, size1, size2, exp_size)?;
        Ok(table)
    }

    /// Same as [`Engine::expand_flag_enumerate`] with the empty type.
    pub fn expand_object_enumerate(&self, base_size: usize, exp_size: usize) -> Result<Arc<Vec<Row>>> {
        let (rows, _) = self.expand_flag_enumerate(&self.empty_type()?, base_size, exp_size)?;
        Ok(rows)
    }

    fn empty_type(&self) -> Result<O> {
        match self.objects(0).first() {
            Some(g) => Ok(g.clone()),
            None => invariant(format!("no {} of size 0", O::NAME)),
        }
    }

    /// Expansion of `flag` in the flags of size `exp_size` with the same
    /// type.
    pub fn expand_flag(&self, flag: &Flag<O>, exp_size: usize) -> Result<Expansion<O>> {
        let ty = flag.unlabeled_type();
        let (rows, iso) = self.expand_flag_enumerate(&ty, flag.size(), exp_size)?;
        let row = rows[self.flag_index(flag)?].clone();
        Ok(Expansion {
            flags: self.relabeled_flags(exp_size, &ty, &iso)?,
            row,
        })
    }

    /// Expansion of the product of `f1` and `f2` in the flags of size
    /// `exp_size` with the same type.
    ///
    /// `f1` and `f2` must have the same labeled type.
    pub fn expand_flag_product(
        &self,
        f1: &Flag<O>,
        f2: &Flag<O>,
        exp_size: usize,
    ) -> Result<Expansion<O>> {
        let ty = f1.unlabeled_type();
        if ty != f2.unlabeled_type() {
            return precondition(format!(
                "cannot multiply flags of types {} and {}",
                ty,
                f2.unlabeled_type()
            ));
        }
        let (table, iso) = self.expand_flag_product_enumerate(&ty, f1.size(), f2.size(), exp_size)?;
        let row = table[self.flag_index(f1)?][self.flag_index(f2)?].clone();
        Ok(Expansion {
            flags: self.relabeled_flags(exp_size, &ty, &iso)?,
            row,
        })
    }

    // The flags of size `size` and type `ty`, with label `i` of the result
    // on the vertex labeled `iso[i]` in the normalized bucket.
    fn relabeled_flags(&self, size: usize, ty: &O, iso: &[usize]) -> Result<Vec<Flag<O>>> {
        let (list, _) = self.enumerate_flags(size, ty)?;
        Ok(list
            .iter()
            .map(|f| f.with_type_morphism(compose(f.type_morphism(), iso)))
            .collect())
    }
}
