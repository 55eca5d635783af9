use std::collections::BTreeMap;

use crate::occurrences::OccurrenceList;

/// Ordered mapping from normalized word to the lines it appears on.
///
/// Keys are lowercase ASCII and compare byte-wise, so iteration order is
/// plain alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordIndex {
    entries: BTreeMap<String, OccurrenceList>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` occurs on `line_number`.
    ///
    /// The word is case-folded first, so "Apple" and "apple" share an entry.
    /// Recording the same word/line pair again leaves the index unchanged.
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str, line_number: usize) {
        if word.is_empty() {
            return;
        }

        // Tokenizer output is already lowercase; skip the allocation for it
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.insert_normalized(word.to_ascii_lowercase(), line_number);
        } else if let Some(lines) = self.entries.get_mut(word) {
            lines.add(line_number);
        } else {
            self.entries
                .insert(word.to_owned(), OccurrenceList::with_line(line_number));
        }
    }

    fn insert_normalized(&mut self, word: String, line_number: usize) {
        self.entries
            .entry(word)
            .and_modify(|lines| {
                lines.add(line_number);
            })
            .or_insert_with(|| OccurrenceList::with_line(line_number));
    }

    /// Case-insensitive lookup
    pub fn get(&self, word: &str) -> Option<&OccurrenceList> {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.entries.get(&word.to_ascii_lowercase())
        } else {
            self.entries.get(word)
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// All entries in ascending word order
    pub fn serialize(&self) -> impl Iterator<Item = (&str, &[usize])> + '_ {
        self.entries
            .iter()
            .map(|(word, lines)| (word.as_str(), lines.to_sequence()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every word's line count
    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(OccurrenceList::len).sum()
    }
}
