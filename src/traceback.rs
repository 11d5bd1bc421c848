// Traceback reconstruction shared by all engines. Each engine fills its
// own tables; only the backward walk is common.

use crate::matrix::DpTables;
use crate::scoring::{AlignmentStats, Position};

/// Gap symbol inserted into the aligned subsequences.
pub const GAP_BYTE: u8 = b'-';

/// Marker line symbols: match, mismatch, gap.
pub const MARKER_MATCH: u8 = b'|';
pub const MARKER_MISMATCH: u8 = b'*';
pub const MARKER_GAP: u8 = b' ';

/// Which recurrence term attained a cell's score. `None` is recorded iff
/// the cell value is zero, so the traceback stop conditions coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Diagonal,
    Up,
    Left,
}

/// A reconstructed local alignment.
///
/// `start` is the cell where the backward walk stopped; it doubles as the
/// pair of 0-based offsets of the first aligned symbols. `end` holds the
/// 0-based inclusive offsets of the last aligned symbols (best cell minus
/// one, so an empty alignment reports (-1, -1)). The two aligned
/// subsequences and the marker line always have equal length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i32,
    pub start: Position,
    pub end: Position,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub marker: Vec<u8>,
    pub stats: AlignmentStats,
}

impl AlignmentResult {
    /// The alignment of an empty input: score 0 and empty aligned output,
    /// identical across all engines.
    pub fn empty() -> Self {
        Self {
            score: 0,
            start: Position { i: 0, j: 0 },
            end: Position { i: -1, j: -1 },
            aligned_seq1: Vec::new(),
            aligned_seq2: Vec::new(),
            marker: Vec::new(),
            stats: AlignmentStats::default(),
        }
    }
}

/// Walks the traceback matrix backward from the best cell until a
/// zero-score cell or a table boundary, then reverses the emitted pairs
/// into left-to-right aligned strings.
pub fn reconstruct(tables: &DpTables, seq1: &[u8], seq2: &[u8]) -> AlignmentResult {
    let mut i = tables.best.i as usize;
    let mut j = tables.best.j as usize;

    let mut aligned_seq1 = Vec::new();
    let mut aligned_seq2 = Vec::new();
    let mut marker = Vec::new();
    let mut stats = AlignmentStats::default();

    while i > 0 && j > 0 && tables.scores.get(i, j) > 0 {
        match tables.dirs.get(i, j) {
            Direction::None => break,
            Direction::Diagonal => {
                let (a, b) = (seq1[i - 1], seq2[j - 1]);
                aligned_seq1.push(a);
                aligned_seq2.push(b);
                if a == b {
                    marker.push(MARKER_MATCH);
                    stats.matches += 1;
                } else {
                    marker.push(MARKER_MISMATCH);
                    stats.mismatches += 1;
                }
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                aligned_seq1.push(seq1[i - 1]);
                aligned_seq2.push(GAP_BYTE);
                marker.push(MARKER_GAP);
                stats.gaps += 1;
                i -= 1;
            }
            Direction::Left => {
                aligned_seq1.push(GAP_BYTE);
                aligned_seq2.push(seq2[j - 1]);
                marker.push(MARKER_GAP);
                stats.gaps += 1;
                j -= 1;
            }
        }
    }

    // Built backwards during the walk.
    aligned_seq1.reverse();
    aligned_seq2.reverse();
    marker.reverse();

    AlignmentResult {
        score: tables.best_score,
        start: Position {
            i: i as i32,
            j: j as i32,
        },
        end: Position {
            i: tables.best.i - 1,
            j: tables.best.j - 1,
        },
        aligned_seq1,
        aligned_seq2,
        marker,
        stats,
    }
}
