/*! Resolution of evaluation contexts against the [TextIndex].
!*/
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::index::TextIndex;

use super::{EvaluationRow, ResolutionRecord};

pub struct Resolver<'i> {
    index: &'i TextIndex,
}

impl<'i> Resolver<'i> {
    pub fn new(index: &'i TextIndex) -> Self {
        Self { index }
    }

    /// Resolve a single evaluation row.
    ///
    /// The resolved index is the lowest of all prefix matches, which always include exact ones:
    /// a lower prefix-only match wins over a higher exact one.
    pub fn resolve_row(&self, row: EvaluationRow) -> Result<ResolutionRecord, Error> {
        let context = row.context().ok_or_else(|| Error::EmptyContext {
            row: row.index(),
            content: row.content(),
        })?;

        let exact = self.index.exact_matches(context);
        let all_prefix = self.index.prefix_matches(context);

        let resolved = match all_prefix.iter().chain(exact.iter()).min() {
            Some(resolved) => *resolved,
            None => {
                return Err(Error::UnresolvedContext {
                    row: row.index(),
                    content: row.content(),
                })
            }
        };

        let prefix_only = all_prefix.difference(&exact).copied().collect();
        debug!(
            "Row {}: {} exact, {} prefix matches",
            row.index(),
            exact.len(),
            all_prefix.len()
        );

        Ok(ResolutionRecord::new(row.index(), exact, prefix_only, resolved))
    }

    /// Resolve rows one at a time, in order, stopping at the first failure.
    pub fn resolve<'a, I>(&self, rows: I) -> Result<Vec<ResolutionRecord>, Error>
    where
        I: IntoIterator<Item = EvaluationRow<'a>>,
    {
        rows.into_iter()
            .map(|row| -> Result<ResolutionRecord, Error> {
                let record = self.resolve_row(row)?;
                info!("{}", record.describe());
                Ok(record)
            })
            .collect()
    }

    /// Resolve rows concurrently.
    ///
    /// Workers skip rows located after the earliest failure seen so far.
    /// Every row before the earliest failure is still resolved, so the reported error is
    /// always the one of the first failing row in corpus order, as in [Self::resolve].
    /// Audit lines are logged in corpus order once every worker is done.
    pub fn resolve_par(&self, rows: &[EvaluationRow]) -> Result<Vec<ResolutionRecord>, Error> {
        let first_failure = AtomicUsize::new(usize::MAX);

        let results: Vec<Option<Result<ResolutionRecord, Error>>> = rows
            .par_iter()
            .enumerate()
            .map(|(pos, row)| {
                if pos > first_failure.load(Ordering::Relaxed) {
                    return None;
                }
                let res = self.resolve_row(*row);
                if res.is_err() {
                    first_failure.fetch_min(pos, Ordering::Relaxed);
                }
                Some(res)
            })
            .collect();

        // skipped rows all come after a failure, which is returned first.
        let mut records = Vec::with_capacity(results.len());
        for res in results.into_iter().flatten() {
            let record = res?;
            info!("{}", record.describe());
            records.push(record);
        }

        Ok(records)
    }
}
