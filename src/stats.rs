//! Corpus statistics.
//!
//! Row counts and text lengths of a single corpus, useful to sanity-check an export
//! before running a coverage check on it.
use std::collections::HashSet;

use log::info;
use serde::Serialize;

use crate::io::Corpus;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    nb_rows: usize,
    nb_with_text: usize,
    nb_unique_texts: usize,
    /// in characters, not bytes
    max_text_len: usize,
}

impl CorpusStats {
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut unique = HashSet::new();
        let mut stats = Self {
            nb_rows: corpus.len(),
            ..Default::default()
        };

        for text in corpus.texts().filter_map(|(_, text)| text) {
            stats.nb_with_text += 1;
            stats.max_text_len = stats.max_text_len.max(text.chars().count());
            unique.insert(text);
        }
        stats.nb_unique_texts = unique.len();

        stats
    }

    pub fn nb_rows(&self) -> usize {
        self.nb_rows
    }

    pub fn nb_with_text(&self) -> usize {
        self.nb_with_text
    }

    pub fn nb_unique_texts(&self) -> usize {
        self.nb_unique_texts
    }

    pub fn max_text_len(&self) -> usize {
        self.max_text_len
    }

    pub fn log(&self, field: &str) {
        info!("Total rows: {}", self.nb_rows);
        info!("Rows with non-empty {:?}: {}", field, self.nb_with_text);
        info!("Unique {:?} values: {}", field, self.nb_unique_texts);
        info!("Max length of {:?} column: {}", field, self.max_text_len);
    }
}
