//! Saving computed tables for external tools.
//!
//! Tables are serialized with `bincode` inside a gzip stream.

use crate::error::Result;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `table` in the file `path`.
pub fn save_table<A, P>(table: &A, path: P) -> Result<()>
where
    A: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    info!("Saving {}", path.display());
    let file = File::create(path)?;
    write_table(table, BufWriter::new(file))
}

// The writer is flushed here so that a failed write is reported.
fn write_table<A, W>(table: &A, writer: W) -> Result<()>
where
    A: Serialize + ?Sized,
    W: Write,
{
    let mut encoder = GzEncoder::new(writer, Compression::default());
    bincode::serialize_into(&mut encoder, table)?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// Read a table written by [`save_table`].
pub fn load_table<A, P>(path: P) -> Result<A>
where
    A: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Loading {}", path.display());
    let file = File::open(path)?;
    let mut decoder = GzDecoder::new(BufReader::new(file));
    let table = bincode::deserialize_from(&mut decoder)?;
    Ok(table)
}
