use tracing::debug;

use crate::table::FrequencyTable;

/// Merges the per-chunk tables into one, summing counts key-wise.
///
/// Runs strictly after the map phase has joined, so this sequential fold is
/// the only reader of the partials. Summation is commutative and
/// associative: any ordering of the input tables produces the same final
/// table. No tables at all (empty input text) merge into an empty table.
pub fn merge_tables(partials: Vec<FrequencyTable>) -> FrequencyTable {
    let merged = partials
        .into_iter()
        .fold(FrequencyTable::new(), |mut acc, partial| {
            acc.merge(partial);
            acc
        });
    debug!(
        distinct_words = merged.distinct_words(),
        total_tokens = merged.total_count(),
        "merged partial tables"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn no_partials_merge_into_an_empty_table() {
        assert!(merge_tables(Vec::new()).is_empty());
    }

    #[test]
    fn counts_sum_across_partials() {
        let partials = vec![
            [("the", 2), ("cat", 1)].into_iter().collect(),
            [("the", 1), ("mat", 1)].into_iter().collect(),
            [("cat", 1)].into_iter().collect(),
        ];

        let merged = merge_tables(partials);

        assert_eq!(merged.count("the"), 3);
        assert_eq!(merged.count("cat"), 2);
        assert_eq!(merged.count("mat"), 1);
        assert_eq!(merged.total_count(), 6);
    }

    #[test]
    fn merge_is_order_independent() {
        let partials: Vec<FrequencyTable> = vec![
            [("a", 1), ("b", 2)].into_iter().collect(),
            [("b", 3), ("c", 4)].into_iter().collect(),
            [("a", 5)].into_iter().collect(),
            [("d", 1), ("a", 1), ("c", 1)].into_iter().collect(),
        ];
        let expected = merge_tables(partials.clone());

        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let mut shuffled = partials.clone();
            shuffled.shuffle(&mut rng);
            assert_eq!(merge_tables(shuffled), expected);
        }
    }
}
