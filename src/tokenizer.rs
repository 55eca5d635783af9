use tracing::debug;

use crate::word_index::WordIndex;

/// Bytes consumed by a single line read, terminator included
pub const MAX_LINE_LENGTH: usize = 512;

/// Splits lines into lowercase ASCII word tokens.
///
/// Only ASCII letters are word characters. Everything else, including
/// digits, apostrophes, underscores and non-ASCII bytes, ends a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    max_line_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl Tokenizer {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Content bytes of `line` that take part in tokenization: up to the
    /// first `\n`, capped at the read bound (one byte is kept for the
    /// terminator).
    pub fn scanned<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        let end = line
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(line.len());
        let bound = self.max_line_length.saturating_sub(1);
        &line[..end.min(bound)]
    }

    /// Whether part of `line` falls past the read bound
    pub fn is_truncated(&self, line: &[u8]) -> bool {
        let end = line
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(line.len());
        end > self.max_line_length.saturating_sub(1)
    }

    /// Lazy token iterator over one line. Cloning restarts from the
    /// clone point.
    pub fn tokens<'a>(&self, line: &'a [u8]) -> Tokens<'a> {
        Tokens {
            rest: self.scanned(line),
        }
    }

    /// Insert every token of `line` into `index` under `line_number`.
    /// Returns the number of tokens seen.
    pub fn index_line(&self, line: &[u8], line_number: usize, index: &mut WordIndex) -> usize {
        let mut count = 0;
        for token in self.tokens(line) {
            debug!(line_number, token = %token, "inserted");
            index.insert(&token, line_number);
            count += 1;
        }
        count
    }
}

pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Iterator over the lowercase tokens of one line
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let start = self.rest.iter().position(|&b| is_word_byte(b))?;
        let tail = &self.rest[start..];
        let len = tail
            .iter()
            .position(|&b| !is_word_byte(b))
            .unwrap_or(tail.len());

        let token: String = tail[..len]
            .iter()
            .map(|b| b.to_ascii_lowercase() as char)
            .collect();
        self.rest = &tail[len..];
        Some(token)
    }
}

/// Tokenize one line with the default bound
pub fn tokenize(line: &str) -> Vec<String> {
    Tokenizer::default().tokens(line.as_bytes()).collect()
}
