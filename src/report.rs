//! Fixed-width rendering of an alignment for console display. Chunks the
//! aligned strings into blocks and brackets each block with 0-based
//! position counters that advance over non-gap symbols only.

use crate::traceback::{AlignmentResult, GAP_BYTE};

/// Default block width, matching typical pairwise alignment output.
pub const DEFAULT_BLOCK_WIDTH: usize = 60;

pub fn format_alignment(result: &AlignmentResult, width: usize) -> String {
    let mut out = format!("optimal_alignment_score: {}\n\n", result.score);

    let len = result.aligned_seq1.len();
    let mut idx1 = result.start.i as usize;
    let mut idx2 = result.start.j as usize;

    let mut pos = 0;
    while pos < len {
        let chunk_len = width.min(len - pos);
        let chunk1 = &result.aligned_seq1[pos..pos + chunk_len];
        let chunk2 = &result.aligned_seq2[pos..pos + chunk_len];
        let chunk_m = &result.marker[pos..pos + chunk_len];

        let chunk_start1 = idx1;
        let chunk_start2 = idx2;
        idx1 += chunk1.iter().filter(|&&c| c != GAP_BYTE).count();
        idx2 += chunk2.iter().filter(|&&c| c != GAP_BYTE).count();

        let gutter = format!("Seq1: {:>4}  ", chunk_start1);
        out.push_str(&format!(
            "{}{}  {:>4}\n",
            gutter,
            String::from_utf8_lossy(chunk1),
            idx1
        ));
        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(gutter.len()),
            String::from_utf8_lossy(chunk_m)
        ));
        out.push_str(&format!(
            "Seq2: {:>4}  {}  {:>4}\n\n",
            chunk_start2,
            String::from_utf8_lossy(chunk2),
            idx2
        ));

        pos += chunk_len;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar;
    use crate::{ScoreParams, Sequence};

    fn reference_result() -> AlignmentResult {
        scalar::align(
            &Sequence::new(b"GGTTGACTA"),
            &Sequence::new(b"TGTTACGG"),
            &ScoreParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn single_block_layout() {
        let text = format_alignment(&reference_result(), 60);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "optimal_alignment_score: 8");
        assert_eq!(lines[2], "Seq1:    1  GTTGAC     7");
        assert_eq!(lines[3], "            ||| ||");
        assert_eq!(lines[4], "Seq2:    1  GTT-AC     6");
    }

    #[test]
    fn counters_skip_gaps_across_blocks() {
        let text = format_alignment(&reference_result(), 4);
        let lines: Vec<&str> = text.lines().collect();
        // First block consumes GTTG / GTT-; the gap must not advance seq2.
        assert_eq!(lines[2], "Seq1:    1  GTTG     5");
        assert_eq!(lines[4], "Seq2:    1  GTT-     4");
        // Second block picks up where the counters left off.
        assert_eq!(lines[6], "Seq1:    5  AC     7");
        assert_eq!(lines[8], "Seq2:    4  AC     6");
    }

    #[test]
    fn empty_alignment_prints_only_the_score() {
        let result = AlignmentResult::empty();
        let text = format_alignment(&result, 60);
        assert_eq!(text, "optimal_alignment_score: 0\n\n");
    }
}
