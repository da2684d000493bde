use std::sync::Mutex;

use crate::consensus::cnn_strategy::{ClusterOutcome, CnnConsensusStrategy};
use crate::consensus::config::ConsensusConfig;
use crate::consensus::consensus_read::ConsensusRead;
use crate::reads::read_record::ReadRecord;
use crate::utils::errors::ConsensusError;

/// Anything that wants the collapsed reads. Per cluster failures arrive as
/// the error variant; they never stop the worker.
pub trait ConsensusSink: Send {
    fn handle_work(&mut self, item: Result<ConsensusRead, ConsensusError>);
}

struct WorkerState {
    buffer: Vec<Vec<ReadRecord>>,
    sinks: Vec<Box<dyn ConsensusSink>>,
    shut_down: bool,
    num_filtered: u64,
}

/**
 * Batching dispatcher in front of the CNN strategy.
 *
 * Clusters accumulate in a mutex guarded buffer until `batch_size` of them
 * are ready, then the strategy runs inference once for the whole batch and
 * the results go out to every registered sink in input order. `flush`
 * dispatches a partial batch, `shutdown` flushes and rejects further work,
 * and dropping the worker flushes whatever is still buffered.
 */
pub struct DeepLearningConsensusWorker {
    strategy: CnnConsensusStrategy,
    batch_size: usize,
    min_depth: usize,
    state: Mutex<WorkerState>,
}

impl DeepLearningConsensusWorker {
    /// Clusters thinner than this are dropped, not collapsed.
    pub const DEFAULT_MIN_DEPTH: usize = 2;

    pub fn new(
        strategy: CnnConsensusStrategy,
        batch_size: usize,
    ) -> Result<Self, ConsensusError> {
        Self::with_min_depth(strategy, batch_size, Self::DEFAULT_MIN_DEPTH)
    }

    pub fn with_min_depth(
        strategy: CnnConsensusStrategy,
        batch_size: usize,
        min_depth: usize,
    ) -> Result<Self, ConsensusError> {
        if batch_size == 0 {
            return Err(ConsensusError::ConfigurationError(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            strategy,
            batch_size,
            min_depth,
            state: Mutex::new(WorkerState {
                buffer: Vec::new(),
                sinks: Vec::new(),
                shut_down: false,
                num_filtered: 0,
            }),
        })
    }

    pub fn from_config(
        strategy: CnnConsensusStrategy,
        config: &ConsensusConfig,
    ) -> Result<Self, ConsensusError> {
        config.validate()?;
        Self::with_min_depth(strategy, config.batch_size, config.min_depth)
    }

    pub fn min_depth(&self) -> usize {
        self.min_depth
    }

    /// Clusters dropped so far for being below the depth gate.
    pub fn num_filtered(&self) -> u64 {
        self.lock_state().num_filtered
    }

    pub fn add_sink(&self, sink: Box<dyn ConsensusSink>) {
        self.lock_state().sinks.push(sink);
    }

    /**
     * Buffer one cluster, dispatching the batch when it is full. Safe to
     * call from several producers at once; the buffer mutex also
     * serializes dispatch, so output order matches input order.
     */
    pub fn handle_work(&self, cluster: Vec<ReadRecord>) -> Result<(), ConsensusError> {
        let mut state = self.lock_state();
        if state.shut_down {
            return Err(ConsensusError::WorkerShutdown);
        }
        state.buffer.push(cluster);
        if state.buffer.len() >= self.batch_size {
            self.dispatch(&mut state);
        }
        Ok(())
    }

    /// Dispatch whatever is buffered as a final partial batch.
    pub fn flush(&self) {
        let mut state = self.lock_state();
        self.dispatch(&mut state);
    }

    /// Drain the buffer, then refuse all further work.
    pub fn shutdown(&self) {
        let mut state = self.lock_state();
        self.dispatch(&mut state);
        state.shut_down = true;
    }

    fn dispatch(&self, state: &mut WorkerState) {
        let batch = std::mem::take(&mut state.buffer);
        if batch.is_empty() {
            return;
        }
        let outcomes = self.strategy.call_batch(&batch, self.min_depth);
        for outcome in outcomes {
            match outcome {
                ClusterOutcome::Consensus(read) => {
                    for sink in state.sinks.iter_mut() {
                        sink.handle_work(Ok(read.clone()));
                    }
                }
                ClusterOutcome::Failed(error) => {
                    warn!("cluster failed to collapse: {}", error);
                    for sink in state.sinks.iter_mut() {
                        sink.handle_work(Err(error.clone()));
                    }
                }
                ClusterOutcome::Filtered => {
                    state.num_filtered += 1;
                }
            }
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, WorkerState> {
        // a poisoned buffer means a sink panicked; nothing to salvage
        self.state.lock().expect("consensus worker state poisoned")
    }
}

impl Drop for DeepLearningConsensusWorker {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            self.dispatch(&mut state);
        }
    }
}
