use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stalefish::analysis::analyzer::Analyzer;
use stalefish::analysis::filters::lowercase::LowercaseFilter;
use stalefish::analysis::filters::stopword::StopWordFilter;
use stalefish::analysis::tokenizer::StandardTokenizer;
use stalefish::core::config::IndexerConfig;
use stalefish::index::index_writer::Indexer;
use stalefish::storage::memory::InMemoryStorage;

fn analyzer() -> Analyzer {
    Analyzer::new(Box::new(StandardTokenizer))
        .with_token_filter(Box::new(LowercaseFilter))
        .with_token_filter(Box::new(StopWordFilter::english()))
}

fn bench_add_document(c: &mut Criterion) {
    let body = "the quick brown fox jumps over the lazy dog ".repeat(20);

    c.bench_function("indexer_add_document", |b| {
        b.iter(|| {
            let storage = Arc::new(InMemoryStorage::new());
            let mut indexer = Indexer::new(storage, analyzer(), IndexerConfig::default());
            indexer.add_document(black_box(body.clone())).unwrap();
        });
    });
}

fn bench_add_document_batched_merge(c: &mut Criterion) {
    let body = "the quick brown fox jumps over the lazy dog ".repeat(5);

    c.bench_function("indexer_add_document_threshold_100", |b| {
        b.iter(|| {
            let storage = Arc::new(InMemoryStorage::new());
            let config = IndexerConfig::with_merge_threshold(100);
            let mut indexer = Indexer::new(storage, analyzer(), config);
            for _ in 0..10 {
                indexer.add_document(black_box(body.clone())).unwrap();
            }
            indexer.flush().unwrap();
        });
    });
}

criterion_group!(benches, bench_add_document, bench_add_document_batched_merge);
criterion_main!(benches);
