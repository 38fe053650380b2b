//! Benchmarks for the evolution loop.
//!
//! Run with: cargo bench -p tagloom-engine --bench evolve_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tagloom_core::{Program, Row, Symbol};
use tagloom_engine::Evolution;

fn collatz_like_base(repeats: usize) -> Row {
    let unit = [Symbol::Alpha, Symbol::Alpha, Symbol::Beta];
    let symbols: Vec<Symbol> = unit.iter().copied().cycle().take(3 * repeats).collect();
    Row::of_symbols(&symbols)
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");

    // Shrinking program: terminates well before the budget.
    let shrink = Program::from_ct("00;;;").unwrap();
    for width in [8usize, 64, 256] {
        group.bench_with_input(
            BenchmarkId::new("shrink", width),
            &width,
            |b, &width| {
                b.iter(|| {
                    let evolution =
                        Evolution::new(Row::repeat(Symbol::Beta, width), shrink.clone()).unwrap();
                    black_box(evolution.run())
                })
            },
        );
    }

    // Growing program: runs the full budget and widens every step.
    let grow = Program::from_ct("0").unwrap();
    for budget in [64usize, 250] {
        group.bench_with_input(BenchmarkId::new("grow", budget), &budget, |b, &budget| {
            b.iter(|| {
                let evolution = Evolution::new(Row::repeat(Symbol::Beta, 1), grow.clone())
                    .unwrap()
                    .with_step_budget(budget);
                black_box(evolution.run())
            })
        });
    }

    // Mixed workload over a structured base row.
    let mixed = Program::from_ct("010001;100;100100100;;;;").unwrap();
    group.bench_function("mixed", |b| {
        b.iter(|| {
            let evolution = Evolution::new(collatz_like_base(7), mixed.clone()).unwrap();
            black_box(evolution.run())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_evolve);
criterion_main!(benches);
