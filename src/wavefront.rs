// Massively parallel engine: one unit of work per cell, batched into
// whole-diagonal passes. Each pass scores every cell on anti-diagonal k
// across a scoped thread team writing disjoint spans; the scope join is
// the barrier before diagonal k+1, standing in for a device kernel launch
// followed by a synchronize. No two workers ever target the same cell.

use log::debug;
use std::thread;
use std::time::Instant;

use crate::diagonal::{self, Span};
use crate::matrix::DpTables;
use crate::scoring::ScoreParams;
use crate::traceback::{self, AlignmentResult};
use crate::{AlignerError, Sequence};

/// Diagonals shorter than this are scored inline; splitting them across
/// threads costs more than the cells themselves.
const MIN_PARALLEL_SPAN: usize = 64;

/// Aligns two sequences on the thread-per-wavefront path. The reported
/// score is bit-identical to the scalar engine's.
pub fn align(
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoreParams,
) -> Result<AlignmentResult, AlignerError> {
    crate::validate_lengths(seq1, seq2)?;
    if seq1.is_empty() || seq2.is_empty() {
        return Ok(AlignmentResult::empty());
    }
    let start = Instant::now();
    let tables = fill_tables(seq1.as_bytes(), seq2.as_bytes(), params)?;
    debug!(
        "wavefront engine: best score {} in {:?}",
        tables.best_score,
        start.elapsed()
    );
    Ok(traceback::reconstruct(
        &tables,
        seq1.as_bytes(),
        seq2.as_bytes(),
    ))
}

pub(crate) fn fill_tables(
    seq1: &[u8],
    seq2: &[u8],
    params: &ScoreParams,
) -> Result<DpTables, AlignerError> {
    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    diagonal::fill_wavefront(seq1, seq2, params, |span| {
        score_diagonal(span, params, workers)
    })
}

/// Scores one full diagonal, fanning the cells out over `workers`
/// concurrent spans when the diagonal is long enough to pay for it.
fn score_diagonal(span: Span<'_>, params: &ScoreParams, workers: usize) {
    let len = span.curr.len();
    if workers <= 1 || len < MIN_PARALLEL_SPAN {
        diagonal::score_span(span, params);
        return;
    }

    let chunk = (len + workers - 1) / workers;
    let Span {
        rev1,
        seq2,
        diag,
        up,
        left,
        curr,
        dirs,
    } = span;

    thread::scope(|scope| {
        for (idx, (curr_chunk, dirs_chunk)) in
            curr.chunks_mut(chunk).zip(dirs.chunks_mut(chunk)).enumerate()
        {
            let t = idx * chunk;
            let take = curr_chunk.len();
            let sub = Span {
                rev1: &rev1[t..t + take],
                seq2: &seq2[t..t + take],
                diag: &diag[t..t + take],
                up: &up[t..t + take],
                left: &left[t..t + take],
                curr: curr_chunk,
                dirs: dirs_chunk,
            };
            scope.spawn(move || diagonal::score_span(sub, params));
        }
    });
}
