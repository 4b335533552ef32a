//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "corpus-coverage",
    about = "traceability check between a reference corpus and an evaluation corpus."
)]
/// Holds every command that is callable by the `corpus-coverage` command.
pub enum CorpusCoverage {
    #[structopt(about = "Map every evaluation row to the document row it comes from")]
    Check(Check),
    #[structopt(about = "Row counts and text lengths of a corpus")]
    Stats(Stats),
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
///
/// ```sh
/// corpus-coverage-check 0.1.0
/// Map every evaluation row to the document row it comes from
///
/// USAGE:
///     corpus-coverage check [FLAGS] [OPTIONS] <docs> <evals>
///
/// FLAGS:
///     -h, --help        Prints help information
///     -p, --parallel    resolve evaluation rows concurrently
///     -V, --version     Prints version information
///
/// OPTIONS:
///         --doc-field <doc-field>      text field of the reference corpus [default: text]
///         --eval-field <eval-field>    context field of the evaluation corpus [default: context]
///     -o, --output <output>            write the mapping as JSON
///
/// ARGS:
///     <docs>     reference corpus (.jsonl, .json or .csv, optionally .gz)
///     <evals>    evaluation corpus (.jsonl, .json or .csv, optionally .gz)
/// ```
pub struct Check {
    #[structopt(
        parse(from_os_str),
        help = "reference corpus (.jsonl, .json or .csv, optionally .gz)"
    )]
    pub docs: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "evaluation corpus (.jsonl, .json or .csv, optionally .gz)"
    )]
    pub evals: PathBuf,
    #[structopt(
        long = "doc-field",
        help = "text field of the reference corpus",
        default_value = "text"
    )]
    pub doc_field: String,
    #[structopt(
        long = "eval-field",
        help = "context field of the evaluation corpus",
        default_value = "context"
    )]
    pub eval_field: String,
    #[structopt(
        short = "p",
        long = "parallel",
        help = "resolve evaluation rows concurrently"
    )]
    pub parallel: bool,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "write the mapping as JSON"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(parse(from_os_str), help = "corpus location")]
    pub src: PathBuf,
    #[structopt(long = "field", help = "text field", default_value = "text")]
    pub field: String,
}
