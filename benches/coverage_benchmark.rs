//! Benchmarks for coverage matching performance.
//!
//! Run with: cargo bench
//!
//! Coverage matching is O(expectations x paragraphs) partial-ratio
//! evaluations; these benchmarks track how that scales with document
//! size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use propeval::{match_coverage, partial_ratio, EvaluationConfig, Expectation};

/// Build a synthetic proposal with the given number of paragraphs.
fn synthetic_proposal(paragraph_count: usize) -> String {
    (0..paragraph_count)
        .map(|i| {
            format!(
                "paragraph {i} describes activity {} of the work plan, including \
                 staffing, reporting cadence and review cycles for the period.",
                i % 7
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build synthetic expectations, some of which the proposal addresses.
fn synthetic_expectations(count: usize) -> Vec<Expectation> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                Expectation::new("Scope", format!("activity {} of the work plan", i % 7))
            } else {
                Expectation::new("Scope", format!("requirement {i} with no counterpart text"))
            }
        })
        .collect()
}

fn bench_partial_ratio(c: &mut Criterion) {
    let needle = "deliverables are due quarterly with a summary memo";
    let haystack = synthetic_proposal(1).repeat(4);

    c.bench_function("partial_ratio_long_paragraph", |b| {
        b.iter(|| partial_ratio(black_box(needle), black_box(&haystack)));
    });
}

fn bench_coverage_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage");

    for (expectations, paragraphs) in [(5, 20), (10, 50), (20, 100)] {
        let exps = synthetic_expectations(expectations);
        let proposal = synthetic_proposal(paragraphs);

        group.bench_function(format!("{expectations}e_{paragraphs}p"), |b| {
            let config = EvaluationConfig::default();
            b.iter(|| match_coverage(black_box(&exps), black_box(&proposal), &config));
        });
    }

    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let exps = synthetic_expectations(10);
    let proposal = synthetic_proposal(50);

    c.bench_function("coverage_sequential", |b| {
        let config = EvaluationConfig::default().sequential();
        b.iter(|| match_coverage(black_box(&exps), black_box(&proposal), &config));
    });

    c.bench_function("coverage_parallel", |b| {
        let config = EvaluationConfig::default();
        b.iter(|| match_coverage(black_box(&exps), black_box(&proposal), &config));
    });
}

criterion_group!(
    benches,
    bench_partial_ratio,
    bench_coverage_scaling,
    bench_sequential_vs_parallel,
);
criterion_main!(benches);
