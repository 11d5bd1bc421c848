// Scalar reference engine: row-major fill plus the shared traceback.
// Every other engine is validated against this path.

use log::debug;

use crate::matrix::DpTables;
use crate::scoring::{Position, ScoreParams};
use crate::traceback::{self, AlignmentResult, Direction};
use crate::{AlignerError, Sequence};

/// Aligns two sequences on the single-threaded reference path.
pub fn align(
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoreParams,
) -> Result<AlignmentResult, AlignerError> {
    crate::validate_lengths(seq1, seq2)?;
    if seq1.is_empty() || seq2.is_empty() {
        return Ok(AlignmentResult::empty());
    }
    let tables = fill_tables(seq1.as_bytes(), seq2.as_bytes(), params)?;
    debug!(
        "scalar engine: best score {} at ({}, {})",
        tables.best_score, tables.best.i, tables.best.j
    );
    Ok(traceback::reconstruct(
        &tables,
        seq1.as_bytes(),
        seq2.as_bytes(),
    ))
}

/// Fills H and T row by row.
///
/// Cell (i, j) depends on (i-1, j-1), (i-1, j) and (i, j-1), all already
/// final when the row scan reaches it. The best cell is tracked with a
/// strict comparison, so the first maximum in row-major order wins ties.
pub(crate) fn fill_tables(
    seq1: &[u8],
    seq2: &[u8],
    params: &ScoreParams,
) -> Result<DpTables, AlignerError> {
    let m = seq1.len();
    let n = seq2.len();
    let mut tables = DpTables::try_new(m, n)?;

    for i in 1..=m {
        for j in 1..=n {
            let diag =
                tables.scores.get(i - 1, j - 1) + params.substitution(seq1[i - 1], seq2[j - 1]);
            let up = tables.scores.get(i - 1, j) + params.gap;
            let left = tables.scores.get(i, j - 1) + params.gap;
            let h = 0.max(diag).max(up).max(left);

            let dir = if h == 0 {
                Direction::None
            } else if h == diag {
                Direction::Diagonal
            } else if h == up {
                Direction::Up
            } else {
                Direction::Left
            };

            tables.scores.set(i, j, h);
            tables.dirs.set(i, j, dir);

            if h > tables.best_score {
                tables.best_score = h;
                tables.best = Position {
                    i: i as i32,
                    j: j as i32,
                };
            }
        }
    }

    Ok(tables)
}
