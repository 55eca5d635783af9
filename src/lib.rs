pub mod error;
pub mod indexer;
pub mod occurrences;
pub mod reader;
pub mod serializer;
pub mod tokenizer;
pub mod word_index;

// Re-export main types for convenient access
pub use error::{IndexError, Result};
pub use indexer::{build_index, build_index_with, run, BuildCounts, IndexStats, RunConfig, DEFAULT_OUTPUT};
pub use occurrences::OccurrenceList;
pub use reader::{DocumentReader, ReaderConfig};
pub use serializer::{render, render_to_string, write_index};
pub use tokenizer::{tokenize, Tokenizer, MAX_LINE_LENGTH};
pub use word_index::WordIndex;
