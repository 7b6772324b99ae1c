use crate::error::SplitError;
use indicatif::ProgressIterator;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension given to every written part
pub const FASTA_EXTENSION: &str = "fasta";

pub fn read_all(path: &Path) -> Result<String, SplitError> {
    let mut f = File::open(path).map_err(|error| SplitError::io(path, error))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)
        .map_err(|error| SplitError::io(path, error))?;
    Ok(buf)
}

pub fn write_all(path: &Path, content: &str) -> Result<(), SplitError> {
    let mut f = File::create(path).map_err(|error| SplitError::io(path, error))?;
    f.write_all(content.as_bytes())
        .map_err(|error| SplitError::io(path, error))
}

/// Path of part `index`: `<prefix>_<index>.fasta`.
/// The prefix may carry directories, e.g. `out/m1` gives `out/m1_0.fasta`.
pub fn output_path(prefix: &str, index: usize) -> PathBuf {
    PathBuf::from(format!("{}_{}.{}", prefix, index, FASTA_EXTENSION))
}

/// Writes each chunk to its own file in order and returns the written paths.
/// Stops at the first failure. Files written before it are left in place.
pub fn write_chunks(prefix: &str, chunks: &[&str]) -> Result<Vec<PathBuf>, SplitError> {
    let mut written = Vec::with_capacity(chunks.len());
    for (index, chunk) in chunks
        .iter()
        .enumerate()
        .progress_count(chunks.len() as u64)
    {
        let path = output_path(prefix, index);
        write_all(&path, chunk)?;
        debug!("wrote {} bytes to {:?}", chunk.len(), path);
        written.push(path);
    }
    Ok(written)
}
