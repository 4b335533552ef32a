/*! Text index over the reference corpus.

Two structures are built from the same texts:

- an exact table, mapping each full text to every row index holding it,
- the lexicographically sorted list of unique texts, used for prefix queries.

The sorted list is built once, after the exact table is complete. The index is never
mutated afterwards, so it can be shared between threads as is.

Rows without text (absent or empty) are not indexed at all.
!*/
use std::collections::{BTreeSet, HashMap};

use log::info;

#[derive(Debug, Default)]
pub struct TextIndex {
    exact: HashMap<String, Vec<usize>>,
    sorted: Vec<String>,
    nb_rows: usize,
}

impl TextIndex {
    /// Build the index from `(index, text)` pairs.
    pub fn build<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (usize, Option<&'a str>)>,
    {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut nb_rows = 0;
        for (idx, text) in rows {
            match text {
                Some(text) if !text.is_empty() => {
                    exact.entry(text.to_string()).or_default().push(idx);
                    nb_rows += 1;
                }
                _ => (),
            }
        }

        let mut sorted: Vec<String> = exact.keys().cloned().collect();
        // str ordering is byte ordering, which for utf-8 is also codepoint ordering
        sorted.sort_unstable();

        info!("Index built. Unique texts: {}", sorted.len());

        Self {
            exact,
            sorted,
            nb_rows,
        }
    }

    /// Rows whose text is exactly `text`.
    pub fn exact_matches(&self, text: &str) -> BTreeSet<usize> {
        self.exact
            .get(text)
            .map(|indices| indices.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Rows whose text starts with `prefix` (exact matches included).
    ///
    /// Texts sharing a prefix are contiguous in the sorted list, starting at the first
    /// text that is `>= prefix`: we binary search it and scan forward.
    /// An empty prefix yields nothing.
    pub fn prefix_matches(&self, prefix: &str) -> BTreeSet<usize> {
        let mut matches = BTreeSet::new();
        if prefix.is_empty() {
            return matches;
        }

        let start = self.sorted.partition_point(|text| text.as_str() < prefix);
        for text in self.sorted[start..]
            .iter()
            .take_while(|text| text.starts_with(prefix))
        {
            if let Some(indices) = self.exact.get(text) {
                matches.extend(indices.iter().copied());
            }
        }

        matches
    }

    /// Number of distinct indexed texts.
    pub fn nb_unique_texts(&self) -> usize {
        self.sorted.len()
    }

    /// Number of indexed rows (rows with a non-empty text).
    pub fn nb_indexed_rows(&self) -> usize {
        self.nb_rows
    }

    /// Sorted unique texts.
    pub fn texts(&self) -> &[String] {
        &self.sorted
    }
}
