use crate::error::SplitError;
use std::ops::Range;

/// Byte that begins every FASTA record header
pub const RECORD_START: u8 = b'>';

/// Offset of the first record start at or after `from`, if there is one
fn next_record_start(text: &[u8], from: usize) -> Option<usize> {
    text.get(from..)?
        .iter()
        .position(|&byte| byte == RECORD_START)
        .map(|offset| from + offset)
}

/// Computes the byte spans that partition `text` into at most `parts` pieces of
/// roughly `text.len() / parts` bytes, cutting only in front of a `>`.
///
/// Part `i` nominally ends at `(i + 1) * (len / parts)`. The real end is pushed
/// forward to the next record start, and the following part begins there.
/// When no record start is left, the current part runs to the end of the input
/// and the remaining parts are never produced, so fewer than `parts` spans may
/// come back. The last permitted part always runs to the end of the input.
///
/// Empty input gives no spans. A `parts` of zero is rejected.
pub fn chunk_spans(text: &str, parts: usize) -> Result<Vec<Range<usize>>, SplitError> {
    chunk_spans_with_progress(text, parts, |_, _| {})
}

fn chunk_spans_with_progress<F>(
    text: &str,
    parts: usize,
    mut on_step: F,
) -> Result<Vec<Range<usize>>, SplitError>
where
    F: FnMut(usize, usize),
{
    if parts == 0 {
        return Err(SplitError::InvalidPartCount(parts));
    }
    let bytes = text.as_bytes();
    let total_length = bytes.len();
    if total_length == 0 {
        return Ok(vec![]);
    }
    let target_size = total_length / parts;

    let mut spans = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        on_step(i + 1, parts);
        // Never search at `start` itself, a part must contain at least one byte
        let search_from = ((i + 1) * target_size).max(start + 1);
        let boundary = if i + 1 == parts {
            None
        } else {
            next_record_start(bytes, search_from)
        };
        match boundary {
            Some(end) => {
                spans.push(start..end);
                start = end;
            }
            None => {
                spans.push(start..total_length);
                break;
            }
        }
    }
    Ok(spans)
}

/// Splits FASTA `text` into at most `parts` contiguous slices, see [`chunk_spans`].
///
/// Concatenating the returned slices gives back `text` exactly.
pub fn split_fasta(text: &str, parts: usize) -> Result<Vec<&str>, SplitError> {
    split_fasta_with_progress(text, parts, |_, _| {})
}

/// Same as [`split_fasta`], calling `on_step(step, parts)` once per attempted part
/// with `step` counting from 1.
pub fn split_fasta_with_progress<F>(
    text: &str,
    parts: usize,
    on_step: F,
) -> Result<Vec<&str>, SplitError>
where
    F: FnMut(usize, usize),
{
    let spans = chunk_spans_with_progress(text, parts, on_step)?;
    Ok(spans.into_iter().map(|span| &text[span]).collect())
}
