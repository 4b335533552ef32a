//! # corpus-coverage
//!
//! Verifies that every row of an evaluation corpus (question/context pairs) can be traced back
//! to the reference document row(s) it was generated from.
//!
//! ## Getting started
//!
//! ```sh
//! corpus-coverage 0.1.0
//! traceability check between a reference corpus and an evaluation corpus.
//!
//! USAGE:
//!     corpus-coverage <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check    Map every evaluation row to the document row it comes from
//!     help     Prints this message or the help of the given subcommand(s)
//!     stats    Row counts and text lengths of a corpus
//! ```
//!
//! Logging goes to stderr at `info` level by default. Use `RUST_LOG` to change it.
//!
//! A failed run always prints its error on stderr and exits with status 2 when an evaluation
//! row has no context or cannot be traced, and 1 for any other error.

use std::fs::File;
use std::io::{BufWriter, Write};

use corpus_coverage::{coverage, error::Error, io::Corpus, stats::CorpusStats};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn run(opt: cli::CorpusCoverage) -> Result<(), Error> {
    match opt {
        cli::CorpusCoverage::Check(c) => {
            let docs = Corpus::load(&c.docs, &c.doc_field)?;
            let evals = Corpus::load(&c.evals, &c.eval_field)?;

            let reporter = coverage::check(&docs, &evals, c.parallel)?;
            reporter.log_mapping();

            if let Some(dst) = c.output {
                info!("writing report to {:?}", dst);
                let mut w = BufWriter::new(File::create(dst)?);
                reporter.write_json(&mut w)?;
                w.flush()?;
            }
        }

        cli::CorpusCoverage::Stats(s) => {
            let corpus = Corpus::load(&s.src, &s.field)?;
            CorpusStats::from_corpus(&corpus).log(corpus.text_field());
        }
    };
    Ok(())
}

fn main() {
    init_logger();

    let opt = cli::CorpusCoverage::from_args();
    debug!("cli args\n{:#?}", opt);

    // written to stderr directly so that the failing row shows up whatever RUST_LOG says.
    if let Err(e) = run(opt) {
        eprintln!("{}", e);
        std::process::exit(exit_code(&e));
    }
}

/// 2 when the evaluation corpus is not fully covered, 1 for any other failure.
fn exit_code(e: &Error) -> i32 {
    if e.is_coverage_failure() {
        2
    } else {
        1
    }
}
