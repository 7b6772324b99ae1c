use crate::split::RECORD_START;
use bio::io::fasta;

/// Number of FASTA records in `chunk`.
/// Anything before the first header (a preamble) is ignored, as is anything
/// after a record the reader fails to parse.
pub fn count_records(chunk: &str) -> usize {
    let first_record = chunk
        .bytes()
        .position(|byte| byte == RECORD_START)
        .unwrap_or(chunk.len());
    fasta::Reader::new(&chunk.as_bytes()[first_record..])
        .records()
        .map_while(Result::ok)
        .count()
}
