use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqkit_core::compare::{Direction, Natural};
use seqkit_core::config::{MergeStrategy, SeqConfig};
use seqkit_operators::SeqExt;

fn make_runs(runs: usize, len: usize) -> Vec<Vec<u64>> {
    (0..runs)
        .map(|r| (0..len as u64).map(|i| i * runs as u64 + r as u64).collect())
        .collect()
}

fn bench_sorted_merge(c: &mut Criterion) {
    let runs = make_runs(16, 4096);
    for strategy in [MergeStrategy::Scan, MergeStrategy::Heap] {
        let cfg = SeqConfig::default().with_merge_strategy(strategy);
        let name = format!("sorted_merge_16x4096_{strategy:?}").to_lowercase();
        c.bench_function(&name, |b| {
            b.iter(|| {
                let mut iters: Vec<_> = runs.iter().cloned().map(Vec::into_iter).collect();
                let head = iters.remove(0);
                let total: u64 = head
                    .sorted_merge_with_config(Direction::Ascending, Natural, iters, &cfg)
                    .sum();
                black_box(total)
            })
        });
    }
}

fn bench_full_join(c: &mut Criterion) {
    let first: Vec<(u32, u32)> = (0..8192).map(|i| (i % 1024, i)).collect();
    let second: Vec<(u32, u32)> = (0..2048).map(|i| (i % 1536, i)).collect();
    c.bench_function("full_join_8192x2048", |b| {
        b.iter(|| {
            let rows = first
                .clone()
                .into_iter()
                .full_join(
                    second.clone(),
                    |a| a.0,
                    |b| b.0,
                    |a| a.1 as u64,
                    |b| b.1 as u64,
                    |a, b| (a.1 + b.1) as u64,
                )
                .count();
            black_box(rows)
        })
    });
}

fn bench_partial_sort(c: &mut Criterion) {
    let data: Vec<u64> = (0..100_000u64).map(|i| (i * 7919) % 100_003).collect();
    c.bench_function("partial_sort_top100_of_100k", |b| {
        b.iter(|| {
            let top: Vec<u64> = data
                .iter()
                .copied()
                .partial_sort(100, Direction::Ascending)
                .collect();
            black_box(top)
        })
    });
}

fn bench_bind_by_index(c: &mut Criterion) {
    let indices: Vec<isize> = (0..50_000isize).flat_map(|i| [i, i - 8]).collect();
    c.bench_function("bind_by_index_lookback_16", |b| {
        b.iter(|| {
            let hits = (0..50_000u64)
                .bind_by_index_with_lookback(indices.iter().copied(), Some(16), |v, _| v, |_| 0)
                .sum::<u64>();
            black_box(hits)
        })
    });
}

criterion_group!(
    operators,
    bench_sorted_merge,
    bench_full_join,
    bench_partial_sort,
    bench_bind_by_index
);
criterion_main!(operators);
