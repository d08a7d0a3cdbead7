use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use farmwise_catalog::{BudgetTier, ReferenceCatalog};
use farmwise_crops::{CropConditions, ExperienceLevel, rank_crops, recommend_crops};

fn minimal_conditions() -> CropConditions {
    CropConditions::new("Ibadan", "loamy", 2.0, "tropical", "rainy_season")
}

fn full_conditions() -> CropConditions {
    minimal_conditions()
        .with_soil_ph(6.2)
        .with_rainfall(950.0)
        .with_temperature(27.5)
        .with_irrigation(true)
        .with_budget(BudgetTier::Medium)
        .with_experience(ExperienceLevel::Beginner)
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = ReferenceCatalog::standard();
    let mut group = c.benchmark_group("recommend_crops");

    for (label, conditions) in [
        ("minimal", minimal_conditions()),
        ("full", full_conditions()),
    ] {
        group.bench_with_input(BenchmarkId::new("standard_catalog", label), &conditions, |b, conditions| {
            b.iter(|| recommend_crops(catalog, black_box(conditions)).unwrap());
        });
    }

    group.finish();
}

fn bench_rank_only(c: &mut Criterion) {
    let catalog = ReferenceCatalog::standard();
    let conditions = full_conditions();

    c.bench_function("rank_crops/full", |b| {
        b.iter(|| rank_crops(catalog, black_box(&conditions)));
    });
}

criterion_group!(benches, bench_recommend, bench_rank_only);
criterion_main!(benches);
