//! Performance benchmarks for varlex
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- classify

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use varlex::{Classifier, GeneSymbols};

fn gene_symbols() -> GeneSymbols {
    GeneSymbols::from_symbols([
        "ABL1", "ALK", "BRAF", "BRCA1", "BRCA2", "EGFR", "ERBB2", "FLT3", "KIT", "KRAS", "MET",
        "NTRK1", "PDGFRA", "PIK3CA", "RET", "ROS1", "TP53",
    ])
}

/// Benchmark tokenization for different descriptor shapes
fn bench_tokenize(c: &mut Criterion) {
    let classifier = Classifier::new(&gene_symbols()).unwrap();
    let descriptors = vec![
        ("substitution", "V600E"),
        ("frameshift", "N1333Gfs*10"),
        ("delins", "E709_T710delinsD"),
        ("fusion", "EGFR-ALK FUSION"),
        ("exon", "EXON 19 DELETION"),
        ("annotated", "V600E (c.1799T>A, confirmed somatic)"),
        ("unknown", "completely unrecognized wording here"),
    ];

    let mut group = c.benchmark_group("tokenize");
    for (name, descriptor) in descriptors {
        group.bench_with_input(BenchmarkId::from_parameter(name), descriptor, |b, d| {
            b.iter(|| classifier.library().tokenize(black_box(d)));
        });
    }
    group.finish();
}

/// Benchmark end-to-end classification
fn bench_classify(c: &mut Criterion) {
    let classifier = Classifier::new(&gene_symbols()).unwrap();

    c.bench_function("classify/single", |b| {
        b.iter(|| classifier.classify(black_box("EGFR-ALK FUSION")));
    });

    let batch: Vec<String> = [
        "V600E",
        "G12D",
        "EGFR FUSION",
        "EXON 19 DELETION",
        "BRAF V600E",
        "AMPLIFICATION",
        "MSI-H",
        "FLT3 ITD",
    ]
    .iter()
    .cycle()
    .take(1000)
    .map(|s| s.to_string())
    .collect();

    let mut group = c.benchmark_group("classify_many");
    group.throughput(Throughput::Elements(batch.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| classifier.classify_many(black_box(&batch)));
    });
    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| varlex::parallel::classify_many_parallel(&classifier, black_box(&batch)));
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_classify);
criterion_main!(benches);
