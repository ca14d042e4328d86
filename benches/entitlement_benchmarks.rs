//! Performance benchmarks for the entitlement engine.
//!
//! This benchmark suite checks that the engine meets its performance targets:
//! - Single monthly ledger: < 500μs mean
//! - Monthly ledgers for a 20-person ward: < 10ms mean
//! - Rotation for one month: < 50μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hakedis_engine::calculation::{auto_distribute, compute_monthly_entitlement};
use hakedis_engine::config::ConfigLoader;
use hakedis_engine::models::AssignmentBook;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/hakedis").expect("Failed to load config")
}

fn staff_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("staff_{:02}", i)).collect()
}

/// Builds a month of rotation assignments for the given staff.
fn rotation_book(config: &ConfigLoader, staff: &[String]) -> AssignmentBook {
    auto_distribute(3, 2026, staff, &AssignmentBook::new(), config.rotation_codes())
        .expect("rotation failed")
        .into_iter()
        .collect()
}

/// Benchmark: one staff member's ledger for a month with holidays and eves.
fn bench_single_ledger(c: &mut Criterion) {
    let config = load_config();
    let staff = config.roster().on_duty_in_rotation_order();
    let book = rotation_book(&config, &staff);
    let calendar = config.calendar();

    c.bench_function("single_monthly_ledger", |b| {
        b.iter(|| {
            compute_monthly_entitlement(
                black_box(&staff[0]),
                3,
                2026,
                black_box(&book),
                config.catalog(),
                &calendar,
            )
        })
    });
}

/// Benchmark: every ledger of a ward, sharing one calendar cache.
fn bench_ward(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("ward");

    for size in [5usize, 20] {
        let staff = staff_ids(size);
        let book = rotation_book(&config, &staff);
        let calendar = config.calendar();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("ledgers", size), &staff, |b, staff| {
            b.iter(|| {
                for member in staff {
                    let _ = compute_monthly_entitlement(
                        black_box(member),
                        3,
                        2026,
                        &book,
                        config.catalog(),
                        &calendar,
                    );
                }
            })
        });
    }

    group.finish();
}

/// Benchmark: distributing the rotation for a month.
fn bench_rotation(c: &mut Criterion) {
    let config = load_config();
    let staff = staff_ids(8);
    let previous = rotation_book(&config, &staff);

    c.bench_function("rotation_one_month", |b| {
        b.iter(|| auto_distribute(4, 2026, black_box(&staff), &previous, config.rotation_codes()))
    });
}

criterion_group!(benches, bench_single_ledger, bench_ward, bench_rotation);
criterion_main!(benches);
