use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio_core::config::DecayConfig;
use folio_core::Category;
use folio_decay::{formula, DecayEngine};

fn bench_multiplier(c: &mut Criterion) {
    let config = DecayConfig::new(7, 90.0, 50.0);
    c.bench_function("formula::multiplier", |b| {
        b.iter(|| {
            for days in [0.0, 5.0, 30.0, 90.0, 365.0, 10_000.0] {
                black_box(formula::multiplier(black_box(days), &config));
            }
        })
    });
}

fn bench_engine_apply(c: &mut Criterion) {
    let engine = DecayEngine::default();
    let now = Utc::now();
    let activity = now - Duration::days(45);
    c.bench_function("engine::apply all categories", |b| {
        b.iter(|| {
            for category in Category::ALL {
                black_box(engine.apply(category, black_box(80.0), Some(activity), None, now));
            }
        })
    });
}

criterion_group!(benches, bench_multiplier, bench_engine_apply);
criterion_main!(benches);
