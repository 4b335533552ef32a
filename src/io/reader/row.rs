/*! A single corpus row.
!*/
use std::collections::BTreeMap;
use std::fmt;

/// A corpus entry: its position in the corpus and its string-valued fields.
///
/// Every field is kept (not only the text one) so that diagnostics can show the full row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    index: usize,
    fields: BTreeMap<String, String>,
}

impl Row {
    pub fn new(index: usize, fields: BTreeMap<String, String>) -> Self {
        Self { index, fields }
    }

    /// Convenience constructor for a row holding a single field.
    pub fn with_field(index: usize, name: &str, value: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(name.to_string(), value.to_string());
        Self { index, fields }
    }

    /// Position of the row in its corpus (zero-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get a field value. Absent fields yield [None].
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a field value, treating the empty string as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).filter(|t| !t.is_empty())
    }
}

impl fmt::Display for Row {
    /// Displays the row fields as a JSON object.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(&self.fields) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{:?}", self.fields),
        }
    }
}
