//!Enumeration of combinatorial objects and flags up to isomorphism, and
//!exact expansion coefficients for
//![flag algebras](http://people.cs.uchicago.edu/~razborov/files/flag.pdf).
//!
//!Everything goes through an [`Engine`], which computes each list of
//!objects, list of flags and table of coefficients once and shares it
//!afterwards.
//!
//!# Example
//!
//!```rust
//!use flag_expansion::*;
//!use flags::Graph;
//!use num::{BigRational, One};
//!
//!let engine = Engine::<Graph>::new();
//!
//!// Flags of size 3 rooted on one vertex.
//!let (flags, _) = engine.enumerate_flags(3, &Graph::empty(1)).unwrap();
//!assert_eq!(flags.len(), 6);
//!
//!// Square of the rooted edge.
//!let edge = engine.flag(&Graph::clique(2), &[0]).unwrap();
//!let square = engine.expand_flag_product(&edge, &edge, 3).unwrap();
//!for (f, c) in square.terms() {
//!    assert_eq!(c, &BigRational::one());
//!    println!("{}", text::write_flag(f));
//!}
//!```

#![warn(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    //unused_qualifications,
    unused_labels,
    //unused_results
)]

mod cache;
pub mod combinatorics;
mod engine;
pub mod error;
pub mod expansion;
pub mod export;
mod flag;
pub mod flags;
mod iterators;
mod object;
mod objects;
pub mod text;
mod typed;

pub use crate::cache::OnceMap;
pub use crate::engine::{Engine, Type};
pub use crate::error::{Error, Result};
pub use crate::expansion::{Coefficient, Expansion, ProductTable, Row};
pub use crate::flag::Flag;
pub use crate::iterators::{Choose, Functions, Injection, StreamingIterator, Subsets};
pub use crate::object::Object;

#[macro_use]
extern crate serde_derive;

use env_logger::{Builder, Env};
use log::LevelFilter;

fn init_log(level: LevelFilter) {
    let _ = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_target(false)
        .try_init();
}

/// Log at the Info level, unless `RUST_LOG` says otherwise.
pub fn init_default_log() {
    init_log(LevelFilter::Info)
}

/// Log everything, unless `RUST_LOG` says otherwise.
pub fn init_debug_log() {
    init_log(LevelFilter::Trace)
}
