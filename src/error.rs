//! Error type of the crate.

use std::io;
use thiserror::Error;

/// Errors raised by the enumeration and expansion engine.
///
/// Every variant is a contract violation or an I/O failure: none of them is
/// transient, so callers are expected to propagate rather than retry.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument does not satisfy a documented precondition
    /// (invalid morphism, selector not covering the type, size bounds...).
    #[error("precondition violated: {0}")]
    Precondition(String),
    /// A search that cannot fail on valid input found nothing.
    #[error("internal invariant broken: {0}")]
    Invariant(String),
    /// Malformed textual representation.
    #[error("parse error: {0}")]
    Parse(String),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Shorthand for results of this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn precondition<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::Precondition(msg.into()))
}

pub(crate) fn invariant<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::Invariant(msg.into()))
}
