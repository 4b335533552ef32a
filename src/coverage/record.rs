use std::collections::BTreeSet;

use itertools::Itertools;

use crate::io::Row;

/// An evaluation corpus row, seen through its context field.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationRow<'a> {
    row: &'a Row,
    field: &'a str,
}

impl<'a> EvaluationRow<'a> {
    pub fn new(row: &'a Row, field: &'a str) -> Self {
        Self { row, field }
    }

    pub fn index(&self) -> usize {
        self.row.index()
    }

    /// Context text, [None] if absent or empty.
    pub fn context(&self) -> Option<&'a str> {
        self.row.text(self.field)
    }

    /// Full row content, for diagnostics.
    pub fn content(&self) -> String {
        self.row.to_string()
    }
}

/// Outcome of the resolution of a single evaluation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRecord {
    evaluation_index: usize,
    exact_matches: BTreeSet<usize>,
    prefix_only_matches: BTreeSet<usize>,
    resolved_index: usize,
}

impl ResolutionRecord {
    pub fn new(
        evaluation_index: usize,
        exact_matches: BTreeSet<usize>,
        prefix_only_matches: BTreeSet<usize>,
        resolved_index: usize,
    ) -> Self {
        Self {
            evaluation_index,
            exact_matches,
            prefix_only_matches,
            resolved_index,
        }
    }

    pub fn evaluation_index(&self) -> usize {
        self.evaluation_index
    }

    pub fn exact_matches(&self) -> &BTreeSet<usize> {
        &self.exact_matches
    }

    /// Rows matched by prefix but not exactly.
    pub fn prefix_only_matches(&self) -> &BTreeSet<usize> {
        &self.prefix_only_matches
    }

    pub fn resolved_index(&self) -> usize {
        self.resolved_index
    }

    /// Audit line: `Row i: Exact match rows [..] | Prefix shared by rows [..]`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if !self.exact_matches.is_empty() {
            parts.push(format!(
                "Exact match rows [{}]",
                self.exact_matches.iter().join(", ")
            ));
        }
        if !self.prefix_only_matches.is_empty() {
            parts.push(format!(
                "Prefix shared by rows [{}]",
                self.prefix_only_matches.iter().join(", ")
            ));
        }
        format!("Row {}: {}", self.evaluation_index, parts.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_both() {
        let r = ResolutionRecord::new(4, [0].into(), [2, 9].into(), 0);
        assert_eq!(
            r.describe(),
            "Row 4: Exact match rows [0] | Prefix shared by rows [2, 9]"
        );
    }

    #[test]
    fn describe_prefix_only() {
        let r = ResolutionRecord::new(1, BTreeSet::new(), [5].into(), 5);
        assert_eq!(r.describe(), "Row 1: Prefix shared by rows [5]");
    }

    #[test]
    fn evaluation_row_context() {
        let row = Row::with_field(2, "context", "");
        let eval = EvaluationRow::new(&row, "context");
        assert_eq!(eval.index(), 2);
        assert_eq!(eval.context(), None);
        assert_eq!(eval.content(), r#"{"context":""}"#);
    }
}
