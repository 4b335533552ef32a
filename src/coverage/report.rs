/*! Forward/reverse mapping and summary.

The reverse mapping is obtained by inverting the forward one. Since several evaluation rows
may resolve to the same document row, the inversion is lossy: the evaluation row with the
highest index wins. [Summary] exposes both sizes so that the collapse is visible.
!*/
use std::collections::BTreeMap;
use std::io::Write;

use log::info;
use serde::Serialize;

use crate::error::Error;

use super::ResolutionRecord;

/// Evaluation row to document row, and back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageMapping {
    forward: BTreeMap<usize, usize>,
    reverse: BTreeMap<usize, usize>,
}

impl CoverageMapping {
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ResolutionRecord>,
    {
        let forward: BTreeMap<usize, usize> = records
            .into_iter()
            .map(|r| (r.evaluation_index(), r.resolved_index()))
            .collect();

        // last writer wins
        let reverse = forward.iter().map(|(q, d)| (*d, *q)).collect();

        Self { forward, reverse }
    }

    /// evaluation row -> resolved document row
    pub fn forward(&self) -> &BTreeMap<usize, usize> {
        &self.forward
    }

    /// document row -> (last) evaluation row resolving to it
    pub fn reverse(&self) -> &BTreeMap<usize, usize> {
        &self.reverse
    }

    /// true if no two evaluation rows resolve to the same document row.
    pub fn is_injective(&self) -> bool {
        self.forward.len() == self.reverse.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub nb_doc_rows: usize,
    pub nb_eval_rows: usize,
    pub nb_resolved: usize,
    pub nb_forward: usize,
    pub nb_reverse: usize,
}

impl Summary {
    /// Number of evaluation rows hidden by the reverse mapping collapse.
    pub fn nb_collapsed(&self) -> usize {
        self.nb_forward - self.nb_reverse
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    forward: &'a BTreeMap<usize, usize>,
    reverse: &'a BTreeMap<usize, usize>,
}

/// Holds a completed coverage mapping along with its summary.
#[derive(Debug)]
pub struct Reporter {
    mapping: CoverageMapping,
    summary: Summary,
}

impl Reporter {
    pub fn new(nb_doc_rows: usize, nb_eval_rows: usize, records: Vec<ResolutionRecord>) -> Self {
        let nb_resolved = records.len();
        let mapping = CoverageMapping::from_records(records);
        let summary = Summary {
            nb_doc_rows,
            nb_eval_rows,
            nb_resolved,
            nb_forward: mapping.forward.len(),
            nb_reverse: mapping.reverse.len(),
        };
        Self { mapping, summary }
    }

    pub fn mapping(&self) -> &CoverageMapping {
        &self.mapping
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Report lines, in emission order.
    pub fn lines(&self) -> Vec<String> {
        let s = &self.summary;
        let mut lines = Vec::with_capacity(s.nb_forward + s.nb_reverse + 8);

        lines.push(format!("Collected mapping for {} rows.", s.nb_forward));
        lines.extend(
            self.mapping
                .forward
                .iter()
                .map(|(q, d)| format!("Question Row {} -> Doc Row {}", q, d)),
        );

        lines.push(format!("Reverse mapping count: {}", s.nb_reverse));
        lines.push(format!("Mapping count: {}", s.nb_forward));
        lines.extend(
            self.mapping
                .reverse
                .iter()
                .map(|(d, q)| format!("Doc Row {} -> Question Row {}", d, q)),
        );

        lines.push("-".repeat(30));
        lines.push("Summary:".to_string());
        lines.push(format!("Total QA Rows: {}", s.nb_eval_rows));
        lines.push(format!("Total Doc Rows: {}", s.nb_doc_rows));
        lines.push(format!("Total Matches Found: {}", s.nb_resolved));
        lines
    }

    pub fn log_mapping(&self) {
        for line in self.lines() {
            info!("{}", line);
        }
    }

    /// Write the mapping and summary as a JSON object.
    pub fn write_json<W: Write>(&self, w: W) -> Result<(), Error> {
        let report = JsonReport {
            summary: &self.summary,
            forward: &self.mapping.forward,
            reverse: &self.mapping.reverse,
        };
        serde_json::to_writer_pretty(w, &report)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn records(pairs: &[(usize, usize)]) -> Vec<ResolutionRecord> {
        pairs
            .iter()
            .map(|(q, d)| ResolutionRecord::new(*q, [*d].into(), BTreeSet::new(), *d))
            .collect()
    }

    #[test]
    fn injective_mapping() {
        let m = CoverageMapping::from_records(records(&[(0, 4), (1, 2), (2, 0)]));
        assert!(m.is_injective());
        assert_eq!(m.reverse().get(&4), Some(&0));
        assert_eq!(m.reverse().len(), 3);
    }

    #[test]
    fn reverse_collapse_keeps_last() {
        let m = CoverageMapping::from_records(records(&[(0, 3), (1, 3), (2, 5), (3, 3)]));
        assert!(!m.is_injective());
        assert_eq!(m.forward().len(), 4);
        assert_eq!(m.reverse().len(), 2);
        assert_eq!(m.reverse().get(&3), Some(&3));
        assert!(m.reverse().len() <= m.forward().len());
    }

    #[test]
    fn summary_counts() {
        let r = Reporter::new(10, 3, records(&[(0, 1), (1, 1), (2, 7)]));
        let s = r.summary();
        assert_eq!(s.nb_doc_rows, 10);
        assert_eq!(s.nb_eval_rows, 3);
        assert_eq!(s.nb_resolved, 3);
        assert_eq!(s.nb_forward, 3);
        assert_eq!(s.nb_reverse, 2);
        assert_eq!(s.nb_collapsed(), 1);
    }

    #[test]
    fn lines_are_ordered() {
        let r = Reporter::new(8, 3, records(&[(2, 0), (0, 7), (1, 3)]));
        let lines = r.lines();
        let forward: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("Question Row"))
            .collect();
        assert_eq!(
            forward,
            vec![
                "Question Row 0 -> Doc Row 7",
                "Question Row 1 -> Doc Row 3",
                "Question Row 2 -> Doc Row 0"
            ]
        );
        let reverse: Vec<&String> = lines.iter().filter(|l| l.starts_with("Doc Row")).collect();
        assert_eq!(
            reverse,
            vec![
                "Doc Row 0 -> Question Row 2",
                "Doc Row 3 -> Question Row 1",
                "Doc Row 7 -> Question Row 0"
            ]
        );
        assert_eq!(lines.last().unwrap(), "Total Matches Found: 3");
    }

    #[test]
    fn json_report() {
        let r = Reporter::new(2, 2, records(&[(0, 1), (1, 1)]));
        let mut buf = Vec::new();
        r.write_json(&mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["summary"]["nb_reverse"], 1);
        assert_eq!(v["forward"]["0"], 1);
        assert_eq!(v["reverse"]["1"], 1);
    }
}
