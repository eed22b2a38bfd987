use async_trait::async_trait;

use crate::rank::RankedEntry;

/// Where the pipeline's input text comes from.
///
/// Fetching is the only slow or failing edge of a run and it belongs to the
/// caller: the pipeline calls `fetch` exactly once, before chunking, and
/// wraps whatever error comes back in
/// [`PipelineError::Fetch`](crate::PipelineError::Fetch) without retrying.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch(&self) -> anyhow::Result<String>;
}

/// Receives the finished ranking.
///
/// Purely an output edge: the pipeline calls `present` once per run and has
/// no contract about what the sink does with the entries. Rendering,
/// storage, or dropping them on the floor are all the sink's business.
pub trait Sink: Send + Sync {
    fn present(&self, entries: &[RankedEntry]);
}
