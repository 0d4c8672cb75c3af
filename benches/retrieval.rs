use anyhow::Result;
use catechist::corpus::QaRecord;
use catechist::embeddings::Embedder;
use catechist::index::VectorIndex;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const DIMENSION: usize = 384;
const CORPUS_SIZE: i64 = 2000;

/// Deterministic hash-based embedder so the benchmark needs no backend.
struct HashEmbedder;

fn hash_vector(text: &str) -> Vec<f32> {
    let mut state: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in text.bytes() {
        state ^= u64::from(byte);
        state = state.wrapping_mul(0x0100_0000_01b3);
    }

    (0..DIMENSION)
        .map(|i| {
            let mixed = state.wrapping_add(i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
            (mixed >> 40) as f32 / 16_777_216.0
        })
        .collect()
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(hash_vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| hash_vector(t)).collect())
    }
}

fn synthetic_corpus() -> Vec<QaRecord> {
    (1..=CORPUS_SIZE)
        .map(|id| QaRecord {
            id,
            question: format!("What does article {id} teach?"),
            answer: format!("Article {id} teaches a distinct point of doctrine."),
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let embedder = HashEmbedder;
    let records = synthetic_corpus();
    let index = VectorIndex::build(&records, &embedder).expect("can build index");

    c.bench_function("retrieve_top_4", |b| {
        b.iter(|| {
            index.retrieve(
                black_box(&embedder),
                black_box("What does article 1234 teach?"),
                black_box(4),
            )
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
