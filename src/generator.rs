use rand::Rng;

fn u8_to_base(n: u8) -> char {
    match n {
        0 => 'A',
        1 => 'C',
        2 => 'G',
        3 => 'T',
        _ => panic!("Impossible case"),
    }
}

pub fn create_random_sequence<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| u8_to_base(rng.random_range(0..4))).collect()
}

/// Builds FASTA text with `records` records named `seq_<i>`.
/// Sequence lengths are drawn from `1..=max_len` and wrapped at 60 columns.
pub fn create_random_fasta<R: Rng>(rng: &mut R, records: usize, max_len: usize) -> String {
    let mut fasta = String::new();
    for i in 0..records {
        let len = rng.random_range(1..=max_len.max(1));
        let sequence = create_random_sequence(rng, len);
        fasta.push_str(&format!(">seq_{}\n", i));
        for line in sequence.as_bytes().chunks(60) {
            fasta.extend(line.iter().map(|&base| base as char));
            fasta.push('\n');
        }
    }
    fasta
}
