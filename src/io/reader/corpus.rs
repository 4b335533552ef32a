/*! Corpus loader

Picks a reader from the file extension and materializes every row of a corpus,
alongside the name of the field holding the row text.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::info;

use crate::error::Error;

use super::{CsvReader, JsonlReader, Row};

/// Supported corpus file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Jsonl,
    Csv,
}

impl Format {
    /// Detect format from extension. Returns the format and whether the file is gzipped.
    pub fn from_path(path: &Path) -> Result<(Self, bool), Error> {
        let unknown = || Error::UnknownFormat(path.to_path_buf());
        let mut ext = path.extension().and_then(|e| e.to_str()).ok_or_else(unknown)?;

        let gzipped = ext.eq_ignore_ascii_case("gz");
        if gzipped {
            // look at the extension before .gz
            ext = path
                .file_stem()
                .map(Path::new)
                .and_then(|stem| stem.extension())
                .and_then(|e| e.to_str())
                .ok_or_else(unknown)?;
        }

        let format = match ext.to_ascii_lowercase().as_str() {
            "jsonl" | "json" | "ndjson" => Format::Jsonl,
            "csv" => Format::Csv,
            _ => return Err(unknown()),
        };

        Ok((format, gzipped))
    }
}

pub struct Corpus {
    text_field: String,
    rows: Vec<Row>,
}

impl Corpus {
    /// open a (possibly gzipped) file.
    fn open(path: &Path, gzipped: bool) -> Result<Box<dyn BufRead>, Error> {
        let f = File::open(path)?;
        if gzipped {
            Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
        } else {
            Ok(Box::new(BufReader::new(f)))
        }
    }

    /// Load every row of the corpus located at `path`.
    ///
    /// Fails on the first unreadable row: a partially loaded corpus would make any
    /// coverage claim meaningless.
    pub fn load(path: &Path, text_field: &str) -> Result<Self, Error> {
        let (format, gzipped) = Format::from_path(path)?;
        info!("Loading {:?} ({:?}, gzip: {})...", path, format, gzipped);
        let br = Self::open(path, gzipped)?;

        let rows = match format {
            Format::Jsonl => JsonlReader::new(br).collect::<Result<Vec<_>, _>>()?,
            Format::Csv => {
                let reader = CsvReader::new(br)?;
                if !reader.has_column(text_field) {
                    return Err(Error::MissingField {
                        field: text_field.to_string(),
                        path: path.to_path_buf(),
                    });
                }
                reader.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(Self {
            text_field: text_field.to_string(),
            rows,
        })
    }

    /// Build a corpus from already materialized rows.
    pub fn from_rows(rows: Vec<Row>, text_field: &str) -> Self {
        Self {
            text_field: text_field.to_string(),
            rows,
        }
    }

    pub fn text_field(&self) -> &str {
        &self.text_field
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over `(index, text)` pairs, empty texts being [None].
    pub fn texts(&self) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        self.rows
            .iter()
            .map(move |row| (row.index(), row.text(&self.text_field)))
    }
}
