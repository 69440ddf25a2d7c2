//! Kinds of objects.

mod common;
mod digraph;
mod graph;
mod tournament;
pub use crate::flags::common::*;
pub use crate::flags::digraph::*;
pub use crate::flags::graph::*;
pub use crate::flags::tournament::*;
