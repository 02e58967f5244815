//! Error types for code generation.
//!
//! Configuration errors (`EmptyVocabulary`, `InvalidWorkerCount`) are raised
//! before any worker is spawned. The remaining variants describe failures of
//! the fan-out itself or of the output encoding, none of which are expected
//! for well-formed input but all of which are reported rather than dropped.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for a generation run.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A vocabulary was built with no tokens.
    #[error("vocabulary `{name}` has no tokens")]
    EmptyVocabulary { name: String },

    /// The requested worker count cannot produce a result set.
    #[error("invalid worker count {workers}: must be greater than 0")]
    InvalidWorkerCount { workers: usize },

    /// Internal channel send/receive failure between workers and collector.
    #[error("channel error: {context}")]
    ChannelError { context: String },

    /// The collector received a draw from a worker index outside the run.
    #[error("draw from unknown worker {worker}")]
    UnknownWorker { worker: usize },

    /// A worker panicked before reporting its draw.
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    /// The collector finished without a draw from this worker.
    #[error("no draw collected from worker {worker}")]
    MissingDraw { worker: usize },

    /// The collector received a second draw for the same worker.
    #[error("duplicate draw from worker {worker}")]
    DuplicateDraw { worker: usize },

    /// Encoding or decoding the result set failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for errors caused by invalid input rather than by the
    /// run itself.
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::EmptyVocabulary { .. } | Self::InvalidWorkerCount { .. }
        )
    }
}
