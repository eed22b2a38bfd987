use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::chunk::Chunk;
use crate::error::{PipelineError, PipelineResult};
use crate::table::FrequencyTable;

/// Map function applied to each chunk. A plain function pointer so every
/// task can copy it freely; the pipeline wires in
/// [`tokenize`](crate::tokenize::tokenize), tests substitute misbehaving
/// ones to exercise the failure path.
pub type MapFn = fn(&str) -> FrequencyTable;

/// Runs `map_fn` over every chunk, at most `parallelism` tasks at a time,
/// and returns the partial tables in chunk order.
///
/// Each task reads its own disjoint slice of the shared text and owns the
/// table it produces, so the phase needs no locks. The ordered stream
/// doubles as the join barrier: the caller observes either every partial
/// table or an error, never a half-finished batch.
///
/// The map function is expected to be total, so the only real failure is a
/// task dying (a panic in a substituted map function, a runtime shutting
/// down mid-flight). Such a failure surfaces as
/// [`PipelineError::ChunkProcessing`] naming the chunk's offset, and the
/// whole run aborts rather than under-counting that part of the text.
/// Abandoned sibling tasks finish on their own; they hold no shared state,
/// so dropping the run mid-phase leaves nothing behind to corrupt.
pub async fn run_map_phase(
    text: Arc<str>,
    chunks: &[Chunk],
    map_fn: MapFn,
    parallelism: usize,
) -> PipelineResult<Vec<FrequencyTable>> {
    if parallelism == 0 {
        return Err(PipelineError::InvalidConfig {
            field: "parallelism",
            value: parallelism,
        });
    }

    debug!(chunks = chunks.len(), parallelism, "starting map phase");

    let mut results = stream::iter(chunks.iter().copied())
        .map(|chunk| {
            let text = Arc::clone(&text);
            async move {
                let handle = tokio::spawn(async move { map_fn(chunk.slice(&text)) });
                handle.await.map_err(|join_err| PipelineError::ChunkProcessing {
                    offset: chunk.offset(),
                    reason: join_err.to_string(),
                })
            }
        })
        .buffered(parallelism);

    let mut partials = Vec::with_capacity(chunks.len());
    while let Some(result) = results.next().await {
        partials.push(result?);
    }

    Ok(partials)
}
