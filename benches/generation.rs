use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use tilegen::generation::{classify_grid, prune_spurs, GenerationConfig, MapGenerator, TransitionResolver};
use tilegen::terrain::NoiseSource;

fn bench_generate_default(c: &mut Criterion) {
    let mut generator = MapGenerator::new(GenerationConfig::default()).unwrap();
    let mut rng = Pcg64Mcg::seed_from_u64(1);

    c.bench_function("generate_20x15", |b| {
        b.iter(|| {
            generator
                .generate_with_rng(Some(black_box(12345)), 0.1, &mut rng)
                .map(|m| m.decorations.len())
                .unwrap()
        });
    });
}

fn bench_generate_large(c: &mut Criterion) {
    let mut generator = MapGenerator::new(GenerationConfig::with_size(256, 256)).unwrap();
    let mut rng = Pcg64Mcg::seed_from_u64(1);

    c.bench_function("generate_256x256", |b| {
        b.iter(|| {
            generator
                .generate_with_rng(Some(black_box(12345)), 0.05, &mut rng)
                .map(|m| m.prune.converted)
                .unwrap()
        });
    });
}

fn bench_prune_and_resolve(c: &mut Criterion) {
    let config = GenerationConfig::with_size(128, 128);
    let noise = NoiseSource::new(777);
    let classified = classify_grid(&noise, &config.bands, 128, 128, 0.2).unwrap();
    let resolver = TransitionResolver::new(&config.tiles);

    c.bench_function("prune_128", |b| {
        b.iter(|| {
            let mut grid = classified.clone();
            prune_spurs(black_box(&mut grid))
        });
    });

    let mut stable = classified.clone();
    prune_spurs(&mut stable);
    c.bench_function("resolve_128", |b| {
        b.iter(|| resolver.resolve(black_box(&stable)));
    });
}

criterion_group!(
    benches,
    bench_generate_default,
    bench_generate_large,
    bench_prune_and_resolve,
);
criterion_main!(benches);
