use thiserror::Error;

/// Errors raised while collapsing a cluster of reads into a consensus read.
///
/// Per-cluster failures (`EmptyCluster`, `InvalidAlignment`,
/// `DegenerateCluster`, `InferenceFailed`) are delivered back through the
/// registered sinks and never tear down the worker. `ConfigurationError`
/// is raised at construction time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsensusError {
    #[error("cluster contains no reads")]
    EmptyCluster,
    #[error("invalid alignment: {0}")]
    InvalidAlignment(String),
    #[error("no read survived the alignment transforms")]
    DegenerateCluster,
    #[error("inference failed: {0}")]
    InferenceFailed(String),
    #[error("worker has been shut down")]
    WorkerShutdown,
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
}
