//! Word-frequency analysis as a single-process Map-Shuffle-Reduce pipeline.
//!
//! The input text is cut into fixed-size [chunks](chunk), each chunk is
//! [tokenized](tokenize) into its own frequency table by a bounded pool of
//! concurrent map tasks ([map]), the partial tables are merged key-wise
//! after the join ([reduce]), and the final table is ranked ([rank]) into
//! the top-N list handed to the caller's [`Sink`].
//!
//! Text acquisition and presentation stay outside the crate: implement
//! [`TextSource`] and [`Sink`], then hand both to [`Pipeline::run`].

pub mod chunk;
pub mod config;
pub mod error;
pub mod io;
pub mod map;
pub mod pipeline;
pub mod rank;
pub mod reduce;
pub mod table;
pub mod tokenize;

pub use chunk::{chunk_text, Chunk};
pub use config::{default_parallelism, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
pub use io::{Sink, TextSource};
pub use map::{run_map_phase, MapFn};
pub use pipeline::Pipeline;
pub use rank::{top_n, RankedEntry};
pub use reduce::merge_tables;
pub use table::FrequencyTable;
pub use tokenize::tokenize;
