// Pipeline benchmarks over a synthetic short-post corpus
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use simrec_core::{Pipeline, PipelineConfig, Post, StopWords};

const VOCABULARY: usize = 2_000;

fn generate_post(rng: &mut impl Rng, author: usize) -> Post {
    let words: Vec<String> = (0..12)
        .map(|_| format!("word{}", rng.random_range(0..VOCABULARY)))
        .collect();
    Post::new(format!("author{}", author), words.join(" "))
}

fn generate_corpus(authors: usize, posts_per_author: usize) -> Vec<Post> {
    let mut rng = rand::rng();
    let mut posts = Vec::with_capacity(authors * posts_per_author);
    for author in 0..authors {
        for _ in 0..posts_per_author {
            posts.push(generate_post(&mut rng, author));
        }
    }
    posts
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let stop_words: StopWords = ["the", "a", "on", "and", "of"].into_iter().collect();

    for authors in [50, 200, 500].iter() {
        let posts = generate_corpus(*authors, 5);
        group.bench_with_input(BenchmarkId::new("run", authors), authors, |b, _| {
            let config = PipelineConfig {
                max_post_len: 400,
                ..PipelineConfig::default()
            };
            let pipeline = Pipeline::new(config).unwrap();

            b.iter(|| {
                let output = pipeline.run(black_box(&posts), &stop_words).unwrap();
                black_box(output)
            });
        });
    }

    group.finish();
}

fn benchmark_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let stop_words: StopWords = ["the", "a", "on", "and", "of"].into_iter().collect();
    let posts = generate_corpus(500, 5);
    let config = PipelineConfig {
        max_post_len: 400,
        ..PipelineConfig::default()
    };

    group.bench_function("tokenize_2500_posts", |b| {
        b.iter(|| {
            let tokens =
                simrec_core::tokenize::tokenize_posts(black_box(&posts), &stop_words, &config)
                    .unwrap();
            black_box(tokens)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline, benchmark_tokenize);
criterion_main!(benches);
