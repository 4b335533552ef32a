/*! Corpus reading utilities

Each supported format has its own reader yielding [Row]s in file order,
and [Corpus] picks one from the file extension and materializes the rows.

!*/
pub mod corpus;
mod csvreader;
mod jsonlreader;
mod row;

pub use corpus::{Corpus, Format};
pub use csvreader::CsvReader;
pub use jsonlreader::JsonlReader;
pub use row::Row;
