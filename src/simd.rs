// Vectorized engine: wide-lane arithmetic over anti-diagonal wavefronts.
//
// Scores 8 cells of a shared diagonal per step with AVX2 when the CPU
// supports it, falling back to a bit-identical scalar span kernel. The
// engine fills its own H and T tables; only the traceback walk is shared
// with the scalar engine.

use log::debug;
use std::time::Instant;

use crate::diagonal;
use crate::matrix::DpTables;
use crate::scoring::ScoreParams;
use crate::traceback::{self, AlignmentResult};
use crate::{AlignerError, Sequence};

/// Aligns two sequences on the wide-lane wavefront path. The reported
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
        "simd engine: best score {} in {:?}",
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
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return diagonal::fill_wavefront(seq1, seq2, params, |span| unsafe {
                avx2::score_span_avx2(span, params)
            });
        }
    }

    diagonal::fill_wavefront(seq1, seq2, params, |span| diagonal::score_span(span, params))
}

#[cfg(target_arch = "x86_64")]
mod avx2 {
    use std::arch::x86_64::*;

    use crate::diagonal::{self, Span};
    use crate::scoring::ScoreParams;
    use crate::traceback::Direction;

    const LANES: usize = 8;

    /// Scores a diagonal span in batches of 8 i32 lanes.
    ///
    /// # Safety
    ///
    /// Requires AVX2 (checked by the caller via `is_x86_feature_detected!`).
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn score_span_avx2(span: Span<'_>, params: &ScoreParams) {
        let len = span.curr.len();
        let full = len - len % LANES;

        let vzero = _mm256_setzero_si256();
        let vmatch = _mm256_set1_epi32(params.match_score);
        let vmismatch = _mm256_set1_epi32(params.mismatch);
        let vgap = _mm256_set1_epi32(params.gap);
        let vdiag = _mm256_set1_epi32(1);
        let vup = _mm256_set1_epi32(2);
        let vleft = _mm256_set1_epi32(3);

        let mut codes = [0i32; LANES];
        let mut t = 0;
        while t < full {
            let a =
                _mm256_cvtepu8_epi32(_mm_loadl_epi64(span.rev1.as_ptr().add(t) as *const __m128i));
            let b =
                _mm256_cvtepu8_epi32(_mm_loadl_epi64(span.seq2.as_ptr().add(t) as *const __m128i));
            let subst = _mm256_blendv_epi8(vmismatch, vmatch, _mm256_cmpeq_epi32(a, b));

            let d = _mm256_add_epi32(
                _mm256_loadu_si256(span.diag.as_ptr().add(t) as *const __m256i),
                subst,
            );
            let u = _mm256_add_epi32(
                _mm256_loadu_si256(span.up.as_ptr().add(t) as *const __m256i),
                vgap,
            );
            let l = _mm256_add_epi32(
                _mm256_loadu_si256(span.left.as_ptr().add(t) as *const __m256i),
                vgap,
            );

            let h = _mm256_max_epi32(_mm256_max_epi32(d, u), _mm256_max_epi32(l, vzero));
            _mm256_storeu_si256(span.curr.as_mut_ptr().add(t) as *mut __m256i, h);

            // Tie-break order: Diagonal, then Up, then Left; None for zero.
            let mut dir = vleft;
            dir = _mm256_blendv_epi8(dir, vup, _mm256_cmpeq_epi32(h, u));
            dir = _mm256_blendv_epi8(dir, vdiag, _mm256_cmpeq_epi32(h, d));
            dir = _mm256_blendv_epi8(dir, vzero, _mm256_cmpeq_epi32(h, vzero));
            _mm256_storeu_si256(codes.as_mut_ptr() as *mut __m256i, dir);

            for (lane, &code) in codes.iter().enumerate() {
                span.dirs[t + lane] = match code {
                    1 => Direction::Diagonal,
                    2 => Direction::Up,
                    3 => Direction::Left,
                    _ => Direction::None,
                };
            }

            t += LANES;
        }

        if t < len {
            let Span {
                rev1,
                seq2,
                diag,
                up,
                left,
                curr,
                dirs,
            } = span;
            diagonal::score_span(
                Span {
                    rev1: &rev1[t..],
                    seq2: &seq2[t..],
                    diag: &diag[t..],
                    up: &up[t..],
                    left: &left[t..],
                    curr: &mut curr[t..],
                    dirs: &mut dirs[t..],
                },
                params,
            );
        }
    }
}
