pub mod error;
pub mod generator;
pub mod io;
pub mod split;
pub mod tracing;
pub mod utility;

pub use error::SplitError;
pub use split::{chunk_spans, split_fasta, split_fasta_with_progress};
