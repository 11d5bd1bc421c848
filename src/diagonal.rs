// Anti-diagonal wavefront iteration shared by the data-parallel engines.
//
// Cell (i, j) depends on (i-1, j-1), (i-1, j) and (i, j-1). All cells with
// i + j = k are mutually independent once wavefront k-1 is complete, so a
// diagonal may be scored by wide vector lanes or by concurrent workers.
// Vectorizing along a row instead would read a left neighbor from before
// the row started, which violates the recurrence.
//
// State is kept in three rolling buffers indexed by column j: the buffer
// slot j of diagonal k holds H[k-j][j]. With that layout every lane's
// three neighbor reads are contiguous loads from the two previous buffers:
//   diagonal (i-1, j-1) -> prev2[j-1]
//   up       (i-1, j)   -> prev[j]
//   left     (i, j-1)   -> prev[j-1]
// Slot 0 and the slot of each diagonal's row-0 cell are never written, so
// they keep their initial zero, which is exactly the boundary value.

use crate::matrix::DpTables;
use crate::scoring::{Position, ScoreParams};
use crate::traceback::Direction;
use crate::AlignerError;

/// One contiguous run of cells on a shared anti-diagonal, with every
/// per-lane input pre-sliced so that lane `t` reads index `t` everywhere.
pub(crate) struct Span<'a> {
    /// Symbol of the first sequence per lane (reversed copy of seq1).
    pub rev1: &'a [u8],
    /// Symbol of the second sequence per lane.
    pub seq2: &'a [u8],
    /// H at (i-1, j-1) per lane.
    pub diag: &'a [i32],
    /// H at (i-1, j) per lane.
    pub up: &'a [i32],
    /// H at (i, j-1) per lane.
    pub left: &'a [i32],
    pub curr: &'a mut [i32],
    pub dirs: &'a mut [Direction],
}

/// Scores a span one lane at a time. Fallback kernel for the SIMD engine
/// and the per-worker kernel of the wavefront engine.
pub(crate) fn score_span(span: Span<'_>, params: &ScoreParams) {
    for t in 0..span.curr.len() {
        let d = span.diag[t] + params.substitution(span.rev1[t], span.seq2[t]);
        let u = span.up[t] + params.gap;
        let l = span.left[t] + params.gap;
        let h = 0.max(d).max(u).max(l);

        span.curr[t] = h;
        span.dirs[t] = if h == 0 {
            Direction::None
        } else if h == d {
            Direction::Diagonal
        } else if h == u {
            Direction::Up
        } else {
            Direction::Left
        };
    }
}

/// Inclusive column range of anti-diagonal `k` within an m x n problem.
fn diagonal_cols(k: usize, m: usize, n: usize) -> (usize, usize) {
    let jlo = if k > m { k - m } else { 1 };
    let jhi = n.min(k - 1);
    (jlo, jhi)
}

/// Drives the wavefront over all anti-diagonals, delegating each
/// diagonal's scoring to `fill_span`, then scattering the completed
/// diagonal into the full tables and tracking the best cell.
///
/// Ties on the best score are resolved toward the row-major earliest
/// cell, so the result matches the scalar builder's row-major scan.
pub(crate) fn fill_wavefront<F>(
    seq1: &[u8],
    seq2: &[u8],
    params: &ScoreParams,
    mut fill_span: F,
) -> Result<DpTables, AlignerError>
where
    F: FnMut(Span<'_>),
{
    let m = seq1.len();
    let n = seq2.len();
    let mut tables = DpTables::try_new(m, n)?;

    let rev1: Vec<u8> = seq1.iter().rev().copied().collect();
    let mut prev2 = vec![0i32; n + 1];
    let mut prev = vec![0i32; n + 1];
    let mut curr = vec![0i32; n + 1];
    let mut dirs = vec![Direction::None; n + 1];

    for k in 2..=(m + n) {
        let (jlo, jhi) = diagonal_cols(k, m, n);
        let len = jhi - jlo + 1;
        let a0 = m + jlo - k;

        fill_span(Span {
            rev1: &rev1[a0..a0 + len],
            seq2: &seq2[jlo - 1..jlo - 1 + len],
            diag: &prev2[jlo - 1..jlo - 1 + len],
            up: &prev[jlo..jlo + len],
            left: &prev[jlo - 1..jlo - 1 + len],
            curr: &mut curr[jlo..=jhi],
            dirs: &mut dirs[jlo..=jhi],
        });

        for j in jlo..=jhi {
            let i = k - j;
            let h = curr[j];
            tables.scores.set(i, j, h);
            tables.dirs.set(i, j, dirs[j]);

            let earlier = i < tables.best.i as usize
                || (i == tables.best.i as usize && j < tables.best.j as usize);
            if h > tables.best_score || (h == tables.best_score && earlier) {
                tables.best_score = h;
                tables.best = Position {
                    i: i as i32,
                    j: j as i32,
                };
            }
        }

        std::mem::swap(&mut prev2, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(tables)
}
