//! Smith-Waterman local sequence alignment with three interchangeable
//! execution engines: a scalar reference path, a SIMD wavefront path and a
//! massively parallel wavefront path. All engines share one scoring scheme
//! and one traceback reconstructor and report bit-identical optimal scores.

use thiserror::Error;

pub mod batch;
pub mod fasta;
pub mod matrix;
pub mod report;
pub mod scalar;
pub mod scoring;
pub mod simd;
pub mod traceback;
pub mod wavefront;

pub(crate) mod diagonal;

pub use crate::batch::BatchAligner;
pub use crate::scoring::{AlignmentStats, Position, ScoreParams};
pub use crate::traceback::{AlignmentResult, Direction};

/// Upper bound on a single sequence length accepted by the engines.
///
/// The score and traceback tables grow as O(m * n); inputs past this bound
/// are rejected up front, and allocation failures below it are still
/// surfaced as [`AlignerError::MemoryError`] rather than truncated.
pub const MAX_SEQUENCE_SIZE: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("sequence too large: {0} symbols")]
    SequenceTooLarge(usize),
    #[error("score table allocation failed: {0}")]
    MemoryError(String),
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("batch worker failed: {0}")]
    WorkerError(String),
}

/// An immutable symbol sequence. Inputs to every alignment call; never
/// mutated by the engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    pub fn new(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Sequence {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

/// Execution strategy for one alignment call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// Row-major single-threaded reference path, the correctness oracle.
    Scalar,
    /// Wide-lane arithmetic over anti-diagonal wavefronts, single thread.
    Simd,
    /// One work item per cell, whole-diagonal passes with a barrier
    /// between wavefronts.
    Wavefront,
}

/// Front end tying a [`ScoreParams`] to an [`Engine`].
#[derive(Debug, Clone)]
pub struct Aligner {
    params: ScoreParams,
    engine: Engine,
}

impl Default for Aligner {
    fn default() -> Self {
        Self {
            params: ScoreParams::default(),
            engine: Engine::Scalar,
        }
    }
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: ScoreParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn params(&self) -> &ScoreParams {
        &self.params
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn align(
        &self,
        seq1: &Sequence,
        seq2: &Sequence,
    ) -> Result<AlignmentResult, AlignerError> {
        run_engine(self.engine, seq1, seq2, &self.params)
    }
}

pub(crate) fn run_engine(
    engine: Engine,
    seq1: &Sequence,
    seq2: &Sequence,
    params: &ScoreParams,
) -> Result<AlignmentResult, AlignerError> {
    match engine {
        Engine::Scalar => scalar::align(seq1, seq2, params),
        Engine::Simd => simd::align(seq1, seq2, params),
        Engine::Wavefront => wavefront::align(seq1, seq2, params),
    }
}

pub(crate) fn validate_lengths(seq1: &Sequence, seq2: &Sequence) -> Result<(), AlignerError> {
    for seq in [seq1, seq2] {
        if seq.len() > MAX_SEQUENCE_SIZE {
            return Err(AlignerError::SequenceTooLarge(seq.len()));
        }
    }
    Ok(())
}
