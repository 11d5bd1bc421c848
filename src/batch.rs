// Batch alignment over independent sequence pairs. Every pair is one
// self-contained alignment call owning its own tables, so pairs are
// distributed over a worker pool with no shared mutable state.

use crossbeam_channel::bounded;
use std::thread;

use log::debug;

use crate::scoring::ScoreParams;
use crate::traceback::AlignmentResult;
use crate::{run_engine, AlignerError, Engine, Sequence};

type WorkResult = (usize, Result<AlignmentResult, AlignerError>);

/// Aligns many sequence pairs concurrently with one engine configuration.
pub struct BatchAligner {
    params: ScoreParams,
    engine: Engine,
    workers: usize,
}

impl BatchAligner {
    pub fn new(params: ScoreParams, engine: Engine) -> Self {
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self {
            params,
            engine,
            workers,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Aligns every pair and returns the results in input order. The
    /// first engine error aborts the batch.
    pub fn align_all(
        &self,
        pairs: &[(Sequence, Sequence)],
    ) -> Result<Vec<AlignmentResult>, AlignerError> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.workers.min(pairs.len());
        debug!("batch of {} pairs on {} workers", pairs.len(), workers);

        let (work_tx, work_rx) = bounded(pairs.len());
        let (result_tx, result_rx) = bounded::<WorkResult>(pairs.len());

        for (idx, (seq1, seq2)) in pairs.iter().enumerate() {
            work_tx
                .send((idx, seq1, seq2))
                .map_err(|e| AlignerError::WorkerError(e.to_string()))?;
        }
        drop(work_tx);

        let mut results: Vec<Option<AlignmentResult>> = vec![None; pairs.len()];

        thread::scope(|scope| -> Result<(), AlignerError> {
            for _ in 0..workers {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let params = self.params;
                let engine = self.engine;
                scope.spawn(move || {
                    while let Ok((idx, seq1, seq2)) = work_rx.recv() {
                        let result = run_engine(engine, seq1, seq2, &params);
                        if result_tx.send((idx, result)).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(result_tx);

            for _ in 0..pairs.len() {
                let (idx, result) = result_rx
                    .recv()
                    .map_err(|e| AlignerError::WorkerError(e.to_string()))?;
                results[idx] = Some(result?);
            }
            Ok(())
        })?;

        Ok(results.into_iter().flatten().collect())
    }
}
