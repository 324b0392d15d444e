//! Benchmarks for batch normalization.
//!
//! Run with: cargo bench --package catalog

use catalog::{RawRecord, normalize};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn synthetic_batch(n: usize) -> Vec<RawRecord> {
    (0..n)
        .map(|i| RawRecord {
            title: format!("Movie {}", i % (n / 2 + 1)), // some duplicate titles
            genre: if i % 2 == 0 {
                " Action ".to_string()
            } else {
                "Drama".to_string()
            },
            rating: format!("{:.1}", 5.0 + (i % 50) as f64 / 10.0),
            voting: if i % 3 == 0 {
                format!("{}.{}K", 1 + i % 90, i % 10)
            } else {
                format!("{},{:03}", 1 + i % 40, i % 1000)
            },
            duration: match i % 4 {
                0 => "2h 15m".to_string(),
                1 => "1h".to_string(),
                2 => "45m".to_string(),
                _ => String::new(),
            },
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let raw = synthetic_batch(10_000);

    c.bench_function("normalize_10k", |b| {
        b.iter(|| {
            let batch = normalize(black_box(&raw)).unwrap();
            black_box(batch)
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
