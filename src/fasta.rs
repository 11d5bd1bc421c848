//! Line-based FASTA-style ingestion: header lines (prefixed with `>`) and
//! blank lines are discarded, everything else is concatenated into one
//! symbol sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::{AlignerError, Sequence};

/// Reads one sequence from a FASTA-style file.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Sequence, AlignerError> {
    let path = path.as_ref();
    debug!("reading sequence from {}", path.display());
    let file = File::open(path)?;
    parse_fasta(BufReader::new(file))
}

/// Parses FASTA-style content from any buffered reader.
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Sequence, AlignerError> {
    let mut data = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('>') {
            continue;
        }
        data.extend_from_slice(line.as_bytes());
    }
    Ok(Sequence::from(data))
}
