use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rankdex::generator::random::UserGenerator;
use rankdex::index::ngram::generate_ngrams;
use rankdex::index::search_index::SearchIndex;

fn bench_ngram_generation(c: &mut Criterion) {
    c.bench_function("generate_ngrams", |b| {
        b.iter(|| generate_ngrams(black_box("rahul_kumar42"), 2, 5));
    });
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for count in [1000usize, 10_000].iter() {
        let mut generator = UserGenerator::with_seed(42);
        let users: Vec<_> = generator
            .population(*count, 100, 5000)
            .into_iter()
            .map(|(user, _)| user)
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &users, |b, users| {
            b.iter(|| black_box(SearchIndex::build(users.iter(), 2, 5)));
        });
    }

    group.finish();
}

fn bench_intersection(c: &mut Criterion) {
    let mut generator = UserGenerator::with_seed(42);
    let users: Vec<_> = generator
        .population(10_000, 100, 5000)
        .into_iter()
        .map(|(user, _)| user)
        .collect();
    let index = SearchIndex::build(users.iter(), 2, 5);

    let mut group = c.benchmark_group("posting_intersection");

    for query in ["ra", "rahul", "kumar"].iter() {
        let grams = index.query_grams(query);
        group.bench_with_input(BenchmarkId::from_parameter(query), &grams, |b, grams| {
            b.iter(|| black_box(index.candidates(grams)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ngram_generation, bench_index_build, bench_intersection);
criterion_main!(benches);
