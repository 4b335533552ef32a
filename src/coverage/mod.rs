/*! Coverage check

Traces every evaluation row back to the reference document row(s) it was generated from.

The [TextIndex](crate::index::TextIndex) is built once from the reference corpus, then each
evaluation context is resolved against it by exact and prefix matching ([Resolver]).
Resolutions are gathered into a forward/reverse mapping ([Reporter]).

Resolution is all-or-nothing: the first evaluation row that has no context or that
cannot be traced aborts the whole check.
!*/
mod record;
mod report;
mod resolver;

pub use record::{EvaluationRow, ResolutionRecord};
pub use report::{CoverageMapping, Reporter, Summary};
pub use resolver::Resolver;

use log::info;

use crate::error::Error;
use crate::index::TextIndex;
use crate::io::Corpus;

/// Run the coverage check of `evals` against `docs`.
///
/// When `parallel` is set, evaluation rows are resolved on the rayon thread pool.
/// The resulting report is the same either way.
pub fn check(docs: &Corpus, evals: &Corpus, parallel: bool) -> Result<Reporter, Error> {
    info!("1. Total row count for evaluation corpus: {}", evals.len());
    info!("2. Total row count for reference corpus: {}", docs.len());

    info!(
        "Building lookup index for reference corpus {:?} column...",
        docs.text_field()
    );
    let index = TextIndex::build(docs.texts());

    info!(
        "3. Checking existence of {:?} from evaluation corpus in reference corpus...",
        evals.text_field()
    );
    let rows: Vec<EvaluationRow> = evals
        .rows()
        .iter()
        .map(|row| EvaluationRow::new(row, evals.text_field()))
        .collect();

    let resolver = Resolver::new(&index);
    let records = if parallel {
        resolver.resolve_par(&rows)?
    } else {
        resolver.resolve(rows)?
    };

    Ok(Reporter::new(docs.len(), evals.len(), records))
}
