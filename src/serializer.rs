use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::debug;

use crate::error::{IndexError, Result};
use crate::word_index::WordIndex;

/// Format one record: `word 1, 5, ` (every line number is followed by ", ")
pub fn render_entry(word: &str, lines: &[usize]) -> String {
    let mut record = String::with_capacity(word.len() + 1 + lines.len() * 4);
    record.push_str(word);
    record.push(' ');
    for line in lines {
        // Writing into a String cannot fail
        let _ = write!(record, "{line}, ");
    }
    record
}

/// One record per word, in ascending word order, without terminators
pub fn render(index: &WordIndex) -> Vec<String> {
    index
        .serialize()
        .map(|(word, lines)| render_entry(word, lines))
        .collect()
}

/// Whole report with each record terminated by `\n`
pub fn render_to_string(index: &WordIndex) -> String {
    let mut out = String::new();
    for (word, lines) in index.serialize() {
        out.push_str(&render_entry(word, lines));
        out.push('\n');
    }
    out
}

/// Stream the report into any writer
pub fn write_index<W: Write>(index: &WordIndex, mut writer: W) -> std::io::Result<()> {
    for (word, lines) in index.serialize() {
        writeln!(writer, "{}", render_entry(word, lines))?;
    }
    writer.flush()
}

/// Create `path` and write the report into it
pub async fn write_index_file(path: &Path, index: &WordIndex) -> Result<()> {
    let file = tokio::fs::File::create(path)
        .await
        .map_err(|e| IndexError::output(path, e))?;
    let mut writer = BufWriter::new(file);

    for (word, lines) in index.serialize() {
        let record = render_entry(word, lines);
        writer
            .write_all(record.as_bytes())
            .await
            .map_err(|e| IndexError::output(path, e))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| IndexError::output(path, e))?;
    }

    writer.flush().await.map_err(|e| IndexError::output(path, e))?;
    debug!("Wrote {} records to {}", index.len(), path.display());
    Ok(())
}
