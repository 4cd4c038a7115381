//! Ordered and sorted merge tests

use seqkit_core::compare::{Direction, Natural};
use seqkit_core::config::{MergeStrategy, SeqConfig};
use seqkit_operators::{Merged, SeqExt};

fn identity(x: &i32) -> i32 {
    *x
}

#[test]
fn test_ordered_merge_basic() {
    let merged: Vec<i32> = vec![1, 3, 5]
        .into_iter()
        .ordered_merge_by(vec![2, 3, 4], identity, identity, |a| a, |b| b, |a, _| a)
        .collect();
    assert_eq!(merged, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_ordered_merge_with_itself_is_identity() {
    let seq = vec![1, 1, 2, 5, 8, 8, 9];
    let merged: Vec<i32> = seq
        .clone()
        .into_iter()
        .ordered_merge_by(seq.clone(), identity, identity, |a| a, |b| b, |a, _| a)
        .collect();
    assert_eq!(merged, seq);
}

#[test]
fn test_ordered_merge_drains_tails() {
    let merged: Vec<i32> = vec![1, 2]
        .into_iter()
        .ordered_merge_by(vec![0, 5, 6, 7], identity, identity, |a| a, |b| b, |a, _| a)
        .collect();
    assert_eq!(merged, vec![0, 1, 2, 5, 6, 7]);

    let empty: Vec<i32> = Vec::new()
        .into_iter()
        .ordered_merge_by(vec![3, 4], identity, identity, |a| a, |b| b, |a, _| a)
        .collect();
    assert_eq!(empty, vec![3, 4]);
}

#[test]
fn test_ordered_merge_heterogeneous_keys_and_selectors() {
    let first = vec![(1, "one"), (3, "three")];
    let second = vec![(2, 20.0), (3, 30.0)];
    let merged: Vec<String> = first
        .into_iter()
        .ordered_merge_by(
            second,
            |a: &(i32, &str)| a.0,
            |b: &(i32, f64)| b.0,
            |a| format!("L:{}", a.1),
            |b| format!("R:{}", b.1),
            |a, b| format!("B:{}={}", a.1, b.1),
        )
        .collect();
    assert_eq!(merged, vec!["L:one", "R:20", "B:three=30"]);
}

#[test]
fn test_ordered_merge_custom_comparer_descending() {
    let merged: Vec<i32> = vec![9, 5, 1]
        .into_iter()
        .ordered_merge_with(
            vec![8, 5, 2],
            identity,
            identity,
            |a| a,
            |b| b,
            |a, _| a,
            |a: &i32, b: &i32| b.cmp(a),
        )
        .collect();
    assert_eq!(merged, vec![9, 8, 5, 2, 1]);
}

#[test]
fn test_ordered_merge_tagged() {
    let tags: Vec<Merged<i32, i32>> = vec![1, 2]
        .into_iter()
        .ordered_merge_tagged(vec![2, 3], identity, identity)
        .collect();
    assert_eq!(
        tags,
        vec![Merged::First(1), Merged::Both(2, 2), Merged::Second(3)]
    );
    let sum: i32 = tags
        .into_iter()
        .map(|m| m.project(|a| a, |b| b * 10, |a, b| a + b))
        .sum();
    assert_eq!(sum, 1 + 4 + 30);
}

fn sorted_merge_all(strategy: MergeStrategy) {
    let cfg = SeqConfig::default().with_merge_strategy(strategy);
    let others = vec![
        vec![2, 4, 6].into_iter(),
        Vec::new().into_iter(),
        vec![0, 7].into_iter(),
    ];
    let merged: Vec<i32> = vec![1, 3, 5]
        .into_iter()
        .sorted_merge_with_config(Direction::Ascending, Natural, others, &cfg)
        .collect();
    assert_eq!(merged, vec![0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_sorted_merge_scan() {
    sorted_merge_all(MergeStrategy::Scan);
}

#[test]
fn test_sorted_merge_heap() {
    sorted_merge_all(MergeStrategy::Heap);
}

#[test]
fn test_sorted_merge_descending() {
    let merged: Vec<i32> = vec![9, 4, 1]
        .into_iter()
        .sorted_merge(Direction::Descending, vec![vec![8, 4, 3].into_iter()])
        .collect();
    assert_eq!(merged, vec![9, 8, 4, 4, 3, 1]);
}

#[test]
fn test_sorted_merge_ties_prefer_lowest_input() {
    for strategy in [MergeStrategy::Scan, MergeStrategy::Heap] {
        let cfg = SeqConfig::default().with_merge_strategy(strategy);
        let a = vec![(1, 'a'), (2, 'a')].into_iter();
        let others = vec![
            vec![(1, 'b'), (2, 'b')].into_iter(),
            vec![(1, 'c')].into_iter(),
        ];
        let merged: Vec<(i32, char)> = a
            .sorted_merge_with_config(
                Direction::Ascending,
                |x: &(i32, char), y: &(i32, char)| x.0.cmp(&y.0),
                others,
                &cfg,
            )
            .collect();
        assert_eq!(
            merged,
            vec![(1, 'a'), (1, 'b'), (1, 'c'), (2, 'a'), (2, 'b')],
            "strategy {strategy:?}"
        );
    }
}

#[test]
fn test_sorted_merge_without_others_passes_through() {
    // Unsorted input comes back untouched when there is nothing to merge with.
    let merged: Vec<i32> = vec![3, 1, 2]
        .into_iter()
        .sorted_merge(Direction::Ascending, Vec::<std::vec::IntoIter<i32>>::new())
        .collect();
    assert_eq!(merged, vec![3, 1, 2]);
}

#[test]
fn test_sorted_merge_is_lazy() {
    use std::cell::Cell;

    let pulled = Cell::new(0);
    let counting = |v: Vec<i32>| {
        let pulled = &pulled;
        v.into_iter().inspect(move |_| pulled.set(pulled.get() + 1))
    };
    let mut merged = counting(vec![1, 4])
        .sorted_merge(Direction::Ascending, vec![counting(vec![2, 3])]);
    assert_eq!(pulled.get(), 0);
    assert_eq!(merged.next(), Some(1));
    assert_eq!(pulled.get(), 3);
}
