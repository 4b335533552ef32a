/*! CSV reader.

The first record is the header row; every subsequent record becomes a [Row]
keyed by column name.
!*/
use std::io::Read;

use crate::error::Error;

use super::Row;

pub struct CsvReader<R> {
    headers: Vec<String>,
    records: csv::StringRecordsIntoIter<R>,
    index: usize,
}

impl<R> CsvReader<R>
where
    R: Read,
{
    pub fn new(r: R) -> Result<Self, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(r);
        let headers = reader.headers()?.iter().map(String::from).collect();
        Ok(Self {
            headers,
            records: reader.into_records(),
            index: 0,
        })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

impl<R> Iterator for CsvReader<R>
where
    R: Read,
{
    type Item = Result<Row, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(Error::Csv(e))),
        };

        let fields = self
            .headers
            .iter()
            .zip(record.iter())
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect();

        let row = Row::new(self.index, fields);
        self.index += 1;
        Some(Ok(row))
    }
}
