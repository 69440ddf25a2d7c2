//! Basic combinatorial functions.
//!
//! In this page, `[n]` denotes the set `{0,1,...,n-1}`.
//!
//! Functions from `[n]` to `[k]` are represented by a vector of length `n`.
//! This in particular holds for permutations and type morphisms.

use num::{BigInt, PrimInt, range};

/// Computes the product `start * ... * end`.
pub fn product<T>(start: T, end: T) -> T
where
    T: PrimInt,
{
    let mut res = T::one();
    for x in range(start, end + T::one()) {
        res = res * x;
    }
    res
}

/// Returns the number of subsets of size `k`
/// of a set of size `n`.
pub fn binomial<T>(k: T, n: T) -> T
where
    T: PrimInt,
{
    if k < T::zero() || k > n {
        return T::zero();
    }
    product(n - k + T::one(), n) / product(T::one(), k)
}

/// Number of injections from `[k]` to `[n]`, that is `n (n-1) ... (n-k+1)`.
pub fn falling_factorial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    product((n - k) as u64 + 1, n as u64)
}

/// Arbitrary precision version of [`binomial`].
pub fn big_binomial(k: usize, n: usize) -> BigInt {
    if k > n {
        return BigInt::from(0);
    }
    let mut res = BigInt::from(1);
    for i in 0..k {
        res *= n - i;
        res /= i + 1;
    }
    res
}

/// Inverts a permutation.
pub fn invert(t: &[usize]) -> Vec<usize> {
    let n = t.len();
    let mut res = vec![n; n];
    for (i, &v) in t.iter().enumerate() {
        debug_assert_eq!(res[v], n); // Check if t is injective
        res[v] = i;
    }
    res
}

/// Inverts an injection from `[t.len()]` to `[n]`.
pub fn pseudo_invert(n: usize, t: &[usize]) -> Vec<Option<usize>> {
    let mut res = vec![None; n];
    for (i, &v) in t.iter().enumerate() {
        debug_assert_eq!(res[v], None);
        res[v] = Some(i);
    }
    res
}

/// Returns `true` if `t` is an injection from `[t.len()]` to `[n]`.
pub fn is_injection(n: usize, t: &[usize]) -> bool {
    let mut seen = vec![false; n];
    for &v in t {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Assuming `t` is an injection from `[k]` to `[n]`,
/// returns the unique bijection of `[n]`
/// that is equal to `t` on `[k]` and is increasing on `{k,k+1,.., n-1}`.
pub fn permutation_of_injection(n: usize, t: &[usize]) -> Vec<usize> {
    let mut res = t.to_vec();
    let mut unassigned = vec![true; n];
    for &v in t.iter() {
        unassigned[v] = false;
    }
    for (i, &b) in unassigned.iter().enumerate() {
        if b {
            res.push(i);
        }
    }
    res
}

/// Returns the array `[ p[q[0]],..., p[q[n-1]] ]`.
/// The image of `q` must be contained in `[p.len()]`.
pub fn compose(p: &[usize], q: &[usize]) -> Vec<usize> {
    q.iter().map(|&x| p[x]).collect()
}

/// The increasing list of the positions set to `true` in `mask`.
pub fn mask_to_set(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &b)| if b { Some(i) } else { None })
        .collect()
}
