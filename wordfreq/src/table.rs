use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Word → occurrence-count mapping.
///
/// The map phase produces one table per chunk, each owned exclusively by the
/// task that built it; the reduce phase then folds them into a single final
/// table. [`merge`](Self::merge) takes the other table by value so a partial
/// result is consumed exactly once and never observed half-merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        // Two lookups and an allocation the first time a word shows up, a
        // single lookup on every later occurrence.
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Count recorded for `word`, zero if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Folds `other` into `self`, summing counts key-wise.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Sum over all counts. For a table built from one chunk this equals the
    /// number of tokens extracted from that chunk.
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct words.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter
                .into_iter()
                .map(|(word, count)| (word.into(), count))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_counts_repeats() {
        let mut table = FrequencyTable::new();
        table.increment("cat");
        table.increment("cat");
        table.increment("mat");

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("mat"), 1);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.total_count(), 3);
        assert_eq!(table.distinct_words(), 2);
    }

    #[test]
    fn merge_sums_overlapping_keys() {
        let mut left: FrequencyTable = [("the", 3), ("cat", 1)].into_iter().collect();
        let right: FrequencyTable = [("the", 2), ("mat", 4)].into_iter().collect();

        left.merge(right);

        let expected: FrequencyTable = [("the", 5), ("cat", 1), ("mat", 4)].into_iter().collect();
        assert_eq!(left, expected);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut table: FrequencyTable = [("word", 7)].into_iter().collect();
        table.merge(FrequencyTable::new());
        assert_eq!(table.count("word"), 7);
        assert_eq!(table.distinct_words(), 1);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
        assert_eq!(table.distinct_words(), 0);
    }
}
