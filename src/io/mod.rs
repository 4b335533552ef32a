/*!
# IO utilities

Loading of reference and evaluation corpora from local exports.

Only reading is implemented: the coverage check never writes corpus files back.
!*/
pub mod reader;

pub use reader::{Corpus, Row};
