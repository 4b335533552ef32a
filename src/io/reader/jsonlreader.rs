/*! JSON Lines reader.

One JSON object per line. Lines made of a sole `[` or `]` are skipped so that
pretty much any "one object per line" JSON array export can be read too.
 !*/
use std::collections::BTreeMap;
use std::io::{BufRead, Lines};

use log::warn;
use serde_json::Value;

use crate::error::Error;

use super::Row;

#[derive(Debug)]
pub struct JsonlReader<R> {
    lines: Lines<R>,
    index: usize,
}

impl<R> JsonlReader<R>
where
    R: BufRead,
{
    pub fn new(br: R) -> Self {
        Self {
            lines: br.lines(),
            index: 0,
        }
    }

    /// Convert a parsed JSON object into [Row] fields.
    ///
    /// `null`s are dropped, non-string values are kept in their JSON representation.
    fn to_fields(object: serde_json::Map<String, Value>) -> BTreeMap<String, String> {
        object
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::Null => None,
                Value::String(s) => Some((k, s)),
                other => Some((k, other.to_string())),
            })
            .collect()
    }
}

impl<R> Iterator for JsonlReader<R>
where
    R: BufRead,
{
    type Item = Result<Row, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };

            // array framing and trailing commas between objects
            let trimmed = line.trim().trim_end_matches(',');
            match trimmed {
                "[" | "]" => continue,
                "" => {
                    warn!("skipping blank line after row {}", self.index);
                    continue;
                }
                _ => (),
            }

            let index = self.index;
            self.index += 1;

            return Some(match serde_json::from_str::<Value>(trimmed) {
                Ok(Value::Object(object)) => Ok(Row::new(index, Self::to_fields(object))),
                Ok(_) => Err(Error::MalformedRow {
                    row: index,
                    line: line.clone(),
                }),
                Err(e) => Err(Error::InvalidJson {
                    row: index,
                    line: line.clone(),
                    source: e,
                }),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn read_all(data: &str) -> Vec<Result<Row, Error>> {
        JsonlReader::new(Cursor::new(data.to_string())).collect()
    }

    #[test]
    fn rows_are_indexed_in_order() {
        let data = r#"{"text": "first"}
{"text": "second", "source": "hf"}
"#;
        let rows: Vec<Row> = read_all(data).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index(), 0);
        assert_eq!(rows[0].field("text"), Some("first"));
        assert_eq!(rows[1].index(), 1);
        assert_eq!(rows[1].field("source"), Some("hf"));
    }

    #[test]
    fn blank_lines_do_not_consume_an_index() {
        let data = "{\"text\": \"a\"}\n\n   \n{\"text\": \"b\"}\n";
        let rows: Vec<Row> = read_all(data).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].index(), 1);
    }

    #[test]
    fn array_framing() {
        let data = "[\n{\"text\": \"a\"},\n{\"text\": \"b\"}\n]\n";
        let rows: Vec<Row> = read_all(data).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("text"), Some("a"));
    }

    #[test]
    fn null_and_non_string_values() {
        let data = r#"{"text": null, "id": 12, "tags": ["a"]}"#;
        let rows: Vec<Row> = read_all(data).into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(rows[0].field("text"), None);
        assert_eq!(rows[0].field("id"), Some("12"));
        assert_eq!(rows[0].field("tags"), Some(r#"["a"]"#));
    }

    #[test]
    fn non_object_is_malformed() {
        let res = read_all("{\"text\": \"a\"}\n42\n");
        assert!(res[0].is_ok());
        match &res[1] {
            Err(Error::MalformedRow { row, .. }) => assert_eq!(*row, 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn invalid_json_is_located() {
        let res = read_all("{\"text\": \"a\"}\n\n{\"text\": \n");
        assert!(res[0].is_ok());
        let e = res[1].as_ref().unwrap_err();
        match e {
            Error::InvalidJson { row, line, .. } => {
                assert_eq!(*row, 1);
                assert_eq!(line, "{\"text\": ");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(e.row(), Some(1));
        assert!(e.to_string().starts_with("Row 1: invalid JSON"));
    }
}
