use thiserror::Error;

/// Errors surfaced by the word-frequency pipeline.
///
/// All of them are fatal to the run that raised them: a bad configuration
/// value fails before any work starts, a fetch failure fails before
/// chunking, and a dead map task aborts the whole run rather than returning
/// a table that under-represents part of the input.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A configuration value violates its constraint. Every knob must be at
    /// least one.
    #[error("invalid configuration: {field} must be greater than zero (got {value})")]
    InvalidConfig { field: &'static str, value: usize },

    /// The injected text source failed to produce the input text. The
    /// pipeline does not retry; retry policy belongs to the source.
    #[error("failed to fetch source text")]
    Fetch(#[source] anyhow::Error),

    /// A map task died before handing back its partial table. Carries the
    /// byte offset of the chunk that was being counted.
    #[error("map task for chunk at offset {offset} failed: {reason}")]
    ChunkProcessing { offset: usize, reason: String },
}

pub type PipelineResult<T> = Result<T, PipelineError>;
