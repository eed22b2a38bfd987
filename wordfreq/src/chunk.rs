use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// A contiguous slice of the source text assigned to one map task.
///
/// The offset and length are byte positions into the original text, always
/// landing on character boundaries. Chunks are disjoint and ordered;
/// concatenating them in order reproduces the text exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    offset: usize,
    len: usize,
}

impl Chunk {
    fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset of the chunk's first character in the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length of the chunk in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves the chunk against the text it was cut from.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.offset..self.offset + self.len]
    }
}

/// Splits `text` into chunks of exactly `chunk_size` characters, except
/// possibly the last. Empty text yields no chunks.
///
/// Partitioning is by raw character offset, not by word boundary: a word
/// straddling two chunks is counted as two shorter tokens. Chunking never
/// inspects the content it cuts.
pub fn chunk_text(text: &str, chunk_size: usize) -> PipelineResult<Vec<Chunk>> {
    if chunk_size == 0 {
        return Err(PipelineError::InvalidConfig {
            field: "chunk_size",
            value: chunk_size,
        });
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut chars_in_chunk = 0;
    for (offset, _) in text.char_indices() {
        if chars_in_chunk == chunk_size {
            chunks.push(Chunk::new(start, offset - start));
            start = offset;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }
    if start < text.len() {
        chunks.push(Chunk::new(start, text.len() - start));
    }
    Ok(chunks)
}
