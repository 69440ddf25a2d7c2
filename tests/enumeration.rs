extern crate flag_expansion;

use canonical_form::Canonize;
use flag_expansion::combinatorics::falling_factorial;
use flag_expansion::flags::*;
use flag_expansion::*;
use num::{BigInt, BigRational};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;

fn relabel<O: Object>(g: &O, rng: &mut StdRng) -> (O, Vec<usize>) {
    let mut p: Vec<usize> = (0..g.size()).collect();
    p.shuffle(rng);
    (g.induce(&p), p)
}

fn complete_and_distinct<O: Object>(size: usize) {
    let engine = Engine::<O>::new();
    let objects = engine.objects(size);
    for (i, g) in objects.iter().enumerate() {
        for h in &objects[..i] {
            assert!(!g.is_isomorphic(h));
        }
    }
    // Every object met by extending the list is already there.
    for g in engine.objects(size - 1).iter() {
        for h in g.superobjects() {
            let (id, iso) = engine.locate(&h).unwrap();
            assert_eq!(h.apply_morphism(&iso), objects[id]);
        }
    }
}

fn relabeled_objects_are_located<O: Object>(size: usize, seed: u64) {
    let engine = Engine::<O>::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for (i, g) in engine.objects(size).iter().enumerate() {
        for _ in 0..3 {
            let (h, _) = relabel(g, &mut rng);
            let (id, iso) = engine.locate(&h).unwrap();
            assert_eq!(id, i);
            let f = h.find_isomorphism(g).unwrap();
            assert_eq!(h.apply_morphism(&f), *g);
            assert_eq!(h.apply_morphism(&iso), *g);
        }
    }
}

fn relabeled_flags_are_equal<O: Object>(type_size: usize, size: usize, seed: u64) {
    let engine = Engine::<O>::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for ty in engine.objects(type_size).iter() {
        let (flags, _) = engine.enumerate_flags(size, ty).unwrap();
        for (i, f) in flags.iter().enumerate() {
            let (g, p) = relabel(f.object(), &mut rng);
            // Vertex `p[u]` of the object is vertex `u` of `g`.
            let inv = combinatorics::invert(&p);
            let v: Vec<usize> = f.type_morphism().iter().map(|&x| inv[x]).collect();
            let h = engine.flag(&g, &v).unwrap();
            assert_eq!(&h, f);
            assert_eq!(h.normalized_form(), f.normalized_form());
            assert_eq!(engine.flag_index(&h).unwrap(), i);
        }
    }
}

fn norm_factors_are_probabilities<O: Object>(type_size: usize, size: usize) {
    let engine = Engine::<O>::new();
    let labelings = falling_factorial(size, type_size);
    for ty in engine.objects(type_size).iter() {
        let (flags, _) = engine.enumerate_flags(size, ty).unwrap();
        for f in flags.iter() {
            let scaled = f.norm_factor(&engine).unwrap() * BigRational::from(BigInt::from(labelings));
            assert!(scaled.is_integer());
            let m = scaled.to_integer();
            assert!(m > BigInt::from(0) && m <= BigInt::from(labelings));
        }
    }
}

// Norm factors recomputed by trying every labeling of the object.
fn norm_factors_count_labelings<O: Object>(type_size: usize, size: usize) {
    let engine = Engine::<O>::new();
    let labelings = falling_factorial(size, type_size);
    for ty in engine.objects(type_size).iter() {
        let (flags, _) = engine.enumerate_flags(size, ty).unwrap();
        for f in flags.iter() {
            let mut hits = 0u64;
            let mut iter = Injection::new(size, type_size);
            while let Some(v) = iter.next() {
                if engine.flag(f.object(), v).unwrap() == *f {
                    hits += 1;
                }
            }
            assert_eq!(
                f.norm_factor(&engine).unwrap(),
                BigRational::new(BigInt::from(hits), BigInt::from(labelings))
            );
        }
    }
}

fn enumeration_is_shared<O: Object>(type_size: usize, size: usize) {
    let engine = Engine::<O>::new();
    assert!(Arc::ptr_eq(&engine.objects(size), &engine.objects(size)));
    for ty in engine.objects(type_size).iter() {
        let (a, _) = engine.enumerate_flags(size, ty).unwrap();
        let (b, _) = engine.enumerate_flags(size, ty).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

#[test]
fn counts() {
    let graphs = Engine::<Graph>::new();
    assert_eq!(graphs.objects(3).len(), 4);
    assert_eq!(graphs.objects(4).len(), 11);
    let digraphs = Engine::<Digraph>::new();
    let counts: Vec<_> = (0..4).map(|n| digraphs.objects(n).len()).collect();
    assert_eq!(counts, vec![1, 1, 3, 16]);
    let tournaments = Engine::<Tournament>::new();
    let counts: Vec<_> = (0..5).map(|n| tournaments.objects(n).len()).collect();
    assert_eq!(counts, vec![1, 1, 1, 2, 4]);
}

#[test]
fn completeness() {
    complete_and_distinct::<Graph>(5);
    complete_and_distinct::<Digraph>(3);
    complete_and_distinct::<Tournament>(5);
}

#[test]
fn location() {
    relabeled_objects_are_located::<Graph>(5, 0);
    relabeled_objects_are_located::<Digraph>(3, 1);
    relabeled_objects_are_located::<Tournament>(5, 2);
}

#[test]
fn flag_equality() {
    relabeled_flags_are_equal::<Graph>(2, 4, 3);
    relabeled_flags_are_equal::<Digraph>(1, 3, 4);
    relabeled_flags_are_equal::<Tournament>(2, 4, 5);
}

#[test]
fn norm_factors() {
    norm_factors_are_probabilities::<Graph>(2, 4);
    norm_factors_are_probabilities::<Digraph>(2, 3);
    norm_factors_are_probabilities::<Tournament>(3, 4);
}

#[test]
fn norm_factors_of_asymmetric_types() {
    norm_factors_count_labelings::<Graph>(3, 4);
    norm_factors_count_labelings::<Graph>(3, 5);
    norm_factors_count_labelings::<Digraph>(2, 3);
    norm_factors_count_labelings::<Tournament>(3, 4);
}

#[test]
fn idempotence() {
    enumeration_is_shared::<Graph>(1, 4);
    enumeration_is_shared::<Tournament>(2, 4);
}

#[test]
fn flags_of_a_relabeled_type() {
    let engine = Engine::<Tournament>::new();
    let cycle = Tournament::from_marked_pairs(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let ty = engine.flag(&cycle, &[2, 0, 1]).unwrap();
    let (normalized, _) = engine.enumerate_flags(4, &cycle).unwrap();
    let flags = engine.enumerate_flags_of_type(4, &ty).unwrap();
    assert_eq!(flags.len(), normalized.len());
    for f in &flags {
        assert_eq!(f.type_flag(&engine).unwrap(), ty);
    }
}
