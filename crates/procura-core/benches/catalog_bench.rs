//! Benchmarks for Procura core operations
//!
//! Run with: cargo bench -p procura-core
//!
//! These benchmarks establish performance baselines for:
//! - Learn-page catalog filtering (the only per-keystroke hot path)
//! - Invite roster operations
//! - Wizard step tracking
//! - Lead id generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use procura_core::catalog::{self, ArticleCategory};
use procura_core::roster::EmailRoster;
use procura_core::wizard::{Advance, BackPolicy, StepTracker};
use procura_core::LeadId;

// ============================================================================
// Catalog Filtering Benchmarks
// ============================================================================

fn bench_catalog_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");
    group.throughput(Throughput::Elements(catalog::all().len() as u64));

    group.bench_function("empty_query", |b| {
        b.iter(|| black_box(catalog::filtered("", None)))
    });

    group.bench_function("common_word", |b| {
        b.iter(|| black_box(catalog::filtered("supplier", None)))
    });

    group.bench_function("no_hit", |b| {
        b.iter(|| black_box(catalog::filtered("zzz-nothing", None)))
    });

    group.bench_function("query_plus_category", |b| {
        b.iter(|| black_box(catalog::filtered("cost", Some(ArticleCategory::Operations))))
    });

    group.finish();
}

fn bench_catalog_lookup(c: &mut Criterion) {
    c.bench_function("catalog_get_by_slug", |b| {
        b.iter(|| black_box(catalog::get("receiving-dock-discipline")))
    });
}

// ============================================================================
// Roster Benchmarks
// ============================================================================

fn bench_roster_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("roster_add");

    for size in [5, 20].iter() {
        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, &size| {
            b.iter_batched(
                EmailRoster::new,
                |mut roster| {
                    for i in 0..size {
                        roster.add(&format!("user{i}@venue.com")).unwrap();
                    }
                    black_box(roster)
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_roster_contains(c: &mut Criterion) {
    let mut roster = EmailRoster::new();
    for i in 0..20 {
        roster.add(&format!("user{i}@venue.com")).unwrap();
    }

    c.bench_function("roster_contains_in_20", |b| {
        b.iter(|| black_box(roster.contains("user13@venue.com")))
    });
}

// ============================================================================
// Wizard Benchmarks
// ============================================================================

fn bench_wizard_walk(c: &mut Criterion) {
    c.bench_function("wizard_full_walk", |b| {
        b.iter_batched(
            || StepTracker::new(6, BackPolicy::DelegateToHost),
            |mut steps| {
                while !matches!(steps.advance(), Advance::Completed) {}
                black_box(steps)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

// ============================================================================
// ID Generation Benchmarks
// ============================================================================

fn bench_id_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("id_generation");

    group.bench_function("lead_id", |b| b.iter(|| black_box(LeadId::new())));

    let id = LeadId::new();
    group.bench_function("lead_id_to_string", |b| b.iter(|| black_box(id.to_string())));

    group.finish();
}

// ============================================================================
// Criterion Groups
// ============================================================================

criterion_group!(catalog_benches, bench_catalog_filter, bench_catalog_lookup,);

criterion_group!(roster_benches, bench_roster_add, bench_roster_contains,);

criterion_group!(wizard_benches, bench_wizard_walk,);

criterion_group!(id_benches, bench_id_generation,);

criterion_main!(catalog_benches, roster_benches, wizard_benches, id_benches,);
