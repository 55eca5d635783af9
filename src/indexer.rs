use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::Result;
use crate::reader::{DocumentReader, ReaderConfig};
use crate::serializer::write_index_file;
use crate::tokenizer::{Tokenizer, MAX_LINE_LENGTH};
use crate::word_index::WordIndex;

/// Output file used when no destination is given
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Build a fresh index from `lines`, numbering them from 1
pub fn build_index<I>(lines: I) -> WordIndex
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    build_index_with(&Tokenizer::default(), lines).0
}

/// Counters gathered while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildCounts {
    pub lines: u64,
    pub truncated_lines: u64,
    pub tokens: u64,
}

/// Build a fresh index with an explicit tokenizer
pub fn build_index_with<I>(tokenizer: &Tokenizer, lines: I) -> (WordIndex, BuildCounts)
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut index = WordIndex::new();
    let mut counts = BuildCounts::default();

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = i + 1;

        if tokenizer.is_truncated(line) {
            debug!(
                line_number,
                "line exceeds {} bytes, dropping the remainder",
                tokenizer.max_line_length()
            );
            counts.truncated_lines += 1;
        }

        counts.tokens += tokenizer.index_line(line, line_number, &mut index) as u64;
        counts.lines += 1;
    }

    (index, counts)
}

/// Settings for one indexing run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub reader: ReaderConfig,
    /// Bytes per line read, terminator included
    pub max_line_length: usize,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            reader: ReaderConfig::default(),
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }
}

/// Summary of a completed run
#[derive(Serialize, Debug, Clone)]
pub struct IndexStats {
    pub input_path: String,
    pub output_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub truncated_lines: u64,
    pub tokens_seen: u64,
    pub distinct_words: u64,
    pub total_occurrences: u64,
    pub duration_ms: u64,
}

/// Read the input, index it, and write the report.
///
/// The output file is created only once the index is complete, so a failed
/// read never leaves an output file behind.
pub async fn run(config: &RunConfig) -> Result<IndexStats> {
    let start_time = std::time::Instant::now();
    info!("Indexing {}", config.input_path.display());

    let reader = DocumentReader::new(config.reader.clone());
    let (document, read_stats) = reader.read(&config.input_path).await?;

    let tokenizer = Tokenizer::new(config.max_line_length);
    let (index, counts) = build_index_with(&tokenizer, document.lines());
    drop(document);

    info!(
        "Built index: {} distinct words from {} lines",
        index.len(),
        counts.lines
    );

    write_index_file(&config.output_path, &index).await?;

    let stats = IndexStats {
        input_path: config.input_path.display().to_string(),
        output_path: config.output_path.display().to_string(),
        lines_read: read_stats.lines_read,
        bytes_read: read_stats.bytes_read,
        truncated_lines: counts.truncated_lines,
        tokens_seen: counts.tokens,
        distinct_words: index.len() as u64,
        total_occurrences: index.total_occurrences() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Wrote index to {} in {}ms",
        config.output_path.display(),
        stats.duration_ms
    );
    Ok(stats)
}
