//! Benchmarks for the hot per-request paths of the router: intent
//! classification and date-range extraction.
//!
//! Both run once per incoming query before any network I/O, so their cost
//! bounds the router's own overhead on top of the upstream calls.

use std::time::Duration;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};

use gitscout_chat::{extract_date_range, Intent};

/// Representative messages covering every routing rule.
fn sample_messages() -> Vec<String> {
    vec![
        "what is the current date".to_string(),
        "how many commits between 2024-01-01 and 2024-03-31".to_string(),
        "what changed in abc1234def".to_string(),
        "show me the latest commits".to_string(),
        "summarize last week's release".to_string(),
        "list open pull requests".to_string(),
        "how many open bugs do we have, give me a count".to_string(),
        "explain the difference between a merge and a rebase".to_string(),
        format!("a long fallback message {}", "word ".repeat(200)),
    ]
}

fn bench_classification(c: &mut Criterion) {
    let messages = sample_messages();

    let mut group = c.benchmark_group("intent_classification");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("classify_all_rules", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let message = &messages[idx % messages.len()];
            let intent = Intent::classify(message);
            idx += 1;
            intent
        });
    });

    group.finish();
}

fn bench_date_extraction(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date");
    let messages = [
        "commits since 2024-01-01",
        "commits between 2024-01-01 and 2024-03-31",
        "how many commits last year",
        "commits yesterday",
        "no temporal reference at all in this message",
    ];

    let mut group = c.benchmark_group("date_extraction");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("extract_date_range", |b| {
        let mut idx = 0usize;
        b.iter(|| {
            let message = messages[idx % messages.len()];
            let range = extract_date_range(message, today);
            idx += 1;
            range
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classification, bench_date_extraction);
criterion_main!(benches);
