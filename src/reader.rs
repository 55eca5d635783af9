use memmap2::Mmap;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::error::{IndexError, Result};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Map the file into memory instead of reading it through a buffer
    pub use_mmap: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
        }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// Loaded document contents, line terminators excluded from each line.
///
/// Bytes are kept raw: the tokenizer only cares about ASCII letters, so a
/// document that is not valid UTF-8 still indexes.
pub enum Document {
    /// Lines read through a buffered async reader
    Buffered(Vec<Vec<u8>>),
    /// Memory-mapped file, split on demand
    Mapped(Mmap),
    Empty,
}

impl Document {
    /// Iterate lines in document order
    pub fn lines(&self) -> Box<dyn Iterator<Item = &[u8]> + '_> {
        match self {
            Document::Buffered(lines) => Box::new(lines.iter().map(Vec::as_slice)),
            Document::Mapped(map) => {
                let data: &[u8] = map;
                if data.is_empty() {
                    return Box::new(std::iter::empty());
                }
                let data = data.strip_suffix(b"\n").unwrap_or(data);
                Box::new(data.split(|&b| b == b'\n'))
            }
            Document::Empty => Box::new(std::iter::empty()),
        }
    }

    pub fn line_count(&self) -> usize {
        match self {
            Document::Buffered(lines) => lines.len(),
            _ => self.lines().count(),
        }
    }
}

/// Reads a whole document line by line
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Load the document at `file_path` using the configured strategy
    pub async fn read<P: AsRef<Path>>(&self, file_path: P) -> Result<(Document, ReadStats)> {
        if self.config.use_mmap {
            self.read_mapped(file_path).await
        } else {
            self.read_buffered(file_path).await
        }
    }

    /// Read file contents line-by-line with async buffered I/O
    pub async fn read_buffered<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Document, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting buffered read of file: {}", path.display());

        let file = File::open(path)
            .await
            .map_err(|e| IndexError::input(path, e))?;
        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);

        let mut lines = Vec::new();
        let mut byte_count = 0u64;

        loop {
            let mut line = Vec::new();
            let n = reader
                .read_until(b'\n', &mut line)
                .await
                .map_err(|e| IndexError::input(path, e))?;
            if n == 0 {
                break;
            }
            byte_count += n as u64;
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            debug!(line_number = lines.len() + 1, "line: {}", String::from_utf8_lossy(&line));
            lines.push(line);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: lines.len() as u64,
            bytes_read: byte_count,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        log_read(path, &stats);

        Ok((Document::Buffered(lines), stats))
    }

    /// Map the file into memory; lines are split lazily from the mapping
    pub async fn read_mapped<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Document, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting mapped read of file: {}", path.display());

        let file = std::fs::File::open(path).map_err(|e| IndexError::input(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| IndexError::input(path, e))?
            .len();

        let document = if len == 0 {
            Document::Empty
        } else {
            // SAFETY: the mapping is read-only and dropped before the run ends;
            // the input file is not expected to change while it is indexed
            let map = unsafe { Mmap::map(&file) }.map_err(|e| IndexError::input(path, e))?;
            Document::Mapped(map)
        };

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: document.line_count() as u64,
            bytes_read: len,
            duration_ms: start_time.elapsed().as_millis() as u64,
        };
        log_read(path, &stats);

        Ok((document, stats))
    }
}

fn log_read(path: &Path, stats: &ReadStats) {
    info!(
        "Successfully read {}: {} lines, {} bytes in {}ms",
        path.display(),
        stats.lines_read,
        stats.bytes_read,
        stats.duration_ms
    );
}

/// Convenience function for reading a document with default configuration
pub async fn read_document<P: AsRef<Path>>(file_path: P) -> Result<Document> {
    let reader = DocumentReader::new(ReaderConfig::default());
    let (document, _stats) = reader.read(file_path).await?;
    Ok(document)
}
