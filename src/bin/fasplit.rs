use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use fasplit::io::{read_all, write_chunks};
use fasplit::split::split_fasta_with_progress;
use fasplit::tracing::start_fasplit_tracing_subscriber;
use fasplit::utility::count_records;
use std::path::Path;
use tracing::{debug, info, warn};

/// Splits a FASTA file into roughly equal parts, cutting only between records.
/// Parts are written to <prefix>_<index>.fasta, counting from 0.
#[derive(Parser)]
#[clap(version, about)]
#[clap(author = "Trevor S. <trevor.schneggenburger@gmail.com>")]
struct Args {
    #[arg(short = 'n', long, default_value_t = 6, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    /// Number of parts to split into.
    /// Fewer parts are written when the file runs out of records first.
    parts: usize,

    #[arg(short, long, default_value = "m1", verbatim_doc_comment)]
    /// Prefix of the output files.
    /// May include a directory, e.g. 'out/m1' writes 'out/m1_0.fasta', ...
    prefix: String,

    #[arg()]
    /// The FASTA file to split
    input: String,
}

fn main() -> Result<()> {
    // Initialize the tracing subscriber to handle debug, info, warn, and error macro calls
    start_fasplit_tracing_subscriber();

    // Parse arguments from the command line
    let args = Args::parse();
    let input_path = Path::new(&args.input);

    info!("loading fasta at {}", args.input);
    let fasta = read_all(input_path).context("could not load input")?;

    info!("splitting {} bytes into {} parts...", fasta.len(), args.parts);
    let chunks = split_fasta_with_progress(&fasta, args.parts, |step, parts| {
        debug!("splitting {} of {}", step, parts);
    })
    .with_context(|| format!("could not split {}", args.input))?;

    if chunks.is_empty() {
        warn!("{} is empty, nothing to write", args.input);
        return Ok(());
    }
    if chunks.len() < args.parts {
        warn!(
            "ran out of records after {} of {} requested parts",
            chunks.len(),
            args.parts
        );
    }

    info!("writing {} parts...", chunks.len());
    let written = write_chunks(&args.prefix, &chunks).context("could not write parts")?;
    for (path, chunk) in written.iter().zip(chunks.iter()) {
        info!(
            "{}: {} bytes, {} records",
            path.display(),
            chunk.len(),
            count_records(chunk)
        );
    }

    info!("done!");
    Ok(())
}
