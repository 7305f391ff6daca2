use std::io;

use thiserror::Error;

/// Errors produced while setting up or running an integration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Interval count or thread count was not strictly positive.
    #[error("invalid configuration: intervals = {intervals}, threads = {threads} (both must be positive)")]
    InvalidConfig { intervals: i64, threads: i64 },

    /// A worker thread terminated abnormally; no partial result is produced.
    #[error("worker {worker} panicked before producing its partial sum")]
    WorkerPanicked { worker: usize },

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {kind}")]
    Spawn { worker: usize, kind: io::ErrorKind },

    /// The per-worker range table could not be allocated.
    #[error("cannot allocate work ranges for {threads} threads")]
    TooManyThreads { threads: usize },

    /// Interval count outside the range accepted by the command-line front end.
    #[error("interval count {intervals} must be in range {min} - {max}")]
    OutOfRange { intervals: i64, min: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
