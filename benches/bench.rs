//! Criterion benchmarks for Sentiscope.
//!
//! Covers the normalizer, TF-IDF vectorization and model training.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentiscope::analysis::TextNormalizer;
use sentiscope::ml::{Penalty, TfIdfVectorizer, train};
use std::hint::black_box;

/// Generate labeled synthetic reviews for benchmarking.
fn generate_reviews(count: usize) -> (Vec<String>, Vec<String>) {
    let positive = [
        "wonderful", "brilliant", "moving", "superb", "charming", "gripping", "delightful",
    ];
    let negative = [
        "dreadful", "boring", "tedious", "clumsy", "awful", "lifeless", "predictable",
    ];
    let neutral = [
        "film", "movie", "plot", "actor", "scene", "story", "director", "ending", "cast",
    ];

    let mut texts = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let is_positive = i % 2 == 0;
        let mood = if is_positive { &positive } else { &negative };
        let doc_length = 30 + (i % 50);
        let mut words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            if j % 4 == 0 {
                words.push(mood[(i * 3 + j) % mood.len()]);
            } else {
                words.push(neutral[(i * 7 + j * 13) % neutral.len()]);
            }
        }
        texts.push(format!("<p>{}!</p>", words.join(" ")));
        labels.push(if is_positive { "positive" } else { "negative" }.to_string());
    }
    (texts, labels)
}

/// Benchmark raw text cleaning.
fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer");

    let normalizer = TextNormalizer::new().unwrap();
    let (texts, _) = generate_reviews(1000);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| black_box(normalizer.normalize_all(black_box(&texts))))
    });

    group.finish();
}

/// Benchmark TF-IDF fitting and transformation.
fn bench_vectorizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf");

    let (texts, _) = generate_reviews(1000);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("fit_transform", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::english().unwrap();
            black_box(vectorizer.fit_transform(black_box(&texts)).unwrap())
        })
    });

    group.finish();
}

/// Benchmark end-to-end training under both penalties.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);

    let (texts, labels) = generate_reviews(500);

    group.bench_function("train_l2", |b| {
        b.iter(|| black_box(train(&texts, &labels, Penalty::L2, 1.0).unwrap()))
    });
    group.bench_function("train_l1", |b| {
        b.iter(|| black_box(train(&texts, &labels, Penalty::L1, 1.0).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_normalizer, bench_vectorizer, bench_training);
criterion_main!(benches);
