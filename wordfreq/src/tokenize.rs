use crate::table::FrequencyTable;

/// Counts the words of one chunk.
///
/// The chunk is case-folded first, then every maximal run of alphanumeric or
/// underscore characters becomes a token; whitespace and punctuation only
/// delimit and never reach the output keys. A chunk with no word characters
/// yields an empty table. The input is neither mutated nor retained.
pub fn tokenize(chunk: &str) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    let lowered = chunk.to_lowercase();
    for token in lowered.split(|c: char| !is_word_char(c)) {
        if !token.is_empty() {
            table.increment(token);
        }
    }
    table
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
