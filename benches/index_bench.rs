use corpus_coverage::coverage::{EvaluationRow, Resolver};
use corpus_coverage::index::TextIndex;
use corpus_coverage::io::Row;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NB_DOCS: usize = 20_000;

// documents share long common prefixes so that prefix scans are not trivially short.
fn gen_docs() -> Vec<String> {
    (0..NB_DOCS)
        .map(|i| format!("section {} paragraph {} of the reference corpus", i % 100, i))
        .collect()
}

fn gen_index(docs: &[String]) -> TextIndex {
    TextIndex::build(docs.iter().enumerate().map(|(i, t)| (i, Some(t.as_str()))))
}

pub fn build(c: &mut Criterion) {
    let docs = gen_docs();
    c.bench_function("index build", |b| b.iter(|| gen_index(black_box(&docs))));
}

pub fn queries(c: &mut Criterion) {
    let docs = gen_docs();
    let index = gen_index(&docs);

    c.bench_function("prefix query (narrow)", |b| {
        b.iter(|| index.prefix_matches(black_box("section 42 paragraph 4242")))
    });
    c.bench_function("prefix query (wide)", |b| {
        b.iter(|| index.prefix_matches(black_box("section 42 ")))
    });
}

pub fn resolve(c: &mut Criterion) {
    let docs = gen_docs();
    let index = gen_index(&docs);

    // every tenth document, truncated
    let evals: Vec<Row> = docs
        .iter()
        .step_by(10)
        .enumerate()
        .map(|(i, t)| Row::with_field(i, "context", &t[..t.len() - 10]))
        .collect();
    let rows: Vec<EvaluationRow> = evals
        .iter()
        .map(|r| EvaluationRow::new(r, "context"))
        .collect();
    let resolver = Resolver::new(&index);

    c.bench_function("resolve sequential", |b| {
        b.iter(|| resolver.resolve(rows.iter().copied()).unwrap())
    });
    c.bench_function("resolve parallel", |b| {
        b.iter(|| resolver.resolve_par(&rows).unwrap())
    });
}

criterion_group!(benches, build, queries, resolve);
criterion_main!(benches);
