use std::sync::Arc;

use tracing::{debug, info};

use crate::chunk::chunk_text;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::io::{Sink, TextSource};
use crate::map::{run_map_phase, MapFn};
use crate::rank::{top_n, RankedEntry};
use crate::reduce::merge_tables;
use crate::table::FrequencyTable;
use crate::tokenize::tokenize;

/// The assembled Map-Shuffle-Reduce word counter.
///
/// One fork, one join: chunking is sequential, the map phase fans out to at
/// most `parallelism` concurrent tasks, and everything after the join runs
/// sequentially again. The pipeline owns no I/O of its own; text comes from
/// the injected [`TextSource`], results go to the injected [`Sink`], and
/// every failure returns to the caller rather than being reported here.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    map_fn: MapFn,
}

impl Pipeline {
    /// Builds a pipeline around the standard tokenizer. The configuration
    /// is validated here, so a zero-valued knob fails construction instead
    /// of surfacing mid-run.
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            map_fn: tokenize,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Full run: fetch the text, count it, rank it, hand the ranking to the
    /// sink. The ranked list is also returned, so callers that only want
    /// the data do not need a capturing sink.
    pub async fn run<S, K>(&self, source: &S, sink: &K) -> PipelineResult<Vec<RankedEntry>>
    where
        S: TextSource + ?Sized,
        K: Sink + ?Sized,
    {
        let text = source.fetch().await.map_err(PipelineError::Fetch)?;
        info!(bytes = text.len(), "fetched source text");

        let table = self.analyze(&text).await?;
        let ranked = top_n(&table, self.config.top_n)?;
        sink.present(&ranked);
        Ok(ranked)
    }

    /// Map-Shuffle-Reduce over text the caller already has: chunk it, count
    /// every chunk concurrently, then merge the partial tables into the
    /// final word → count table.
    pub async fn analyze(&self, text: &str) -> PipelineResult<FrequencyTable> {
        let chunks = chunk_text(text, self.config.chunk_size)?;
        debug!(
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size,
            "chunked source text"
        );

        let shared: Arc<str> = Arc::from(text);
        let partials = run_map_phase(shared, &chunks, self.map_fn, self.config.parallelism).await?;

        let table = merge_tables(partials);
        info!(
            distinct_words = table.distinct_words(),
            total_tokens = table.total_count(),
            "reduce phase complete"
        );
        Ok(table)
    }
}
