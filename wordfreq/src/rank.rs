use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};
use crate::table::FrequencyTable;

/// One row of the ranked output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

/// Picks the `n` most frequent words, highest count first.
///
/// Equal counts order lexicographically ascending by word, so repeated runs
/// over the same table produce identical output. A table with fewer than
/// `n` distinct words returns all of them.
pub fn top_n(table: &FrequencyTable, n: usize) -> PipelineResult<Vec<RankedEntry>> {
    if n == 0 {
        return Err(PipelineError::InvalidConfig {
            field: "top_n",
            value: n,
        });
    }

    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(word, count)| RankedEntry {
            word: word.to_owned(),
            count,
        })
        .collect();
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(n);
    Ok(entries)
}
