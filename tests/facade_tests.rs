//! The root crate re-exports everything an operator chain needs

use seqkit::prelude::*;

#[test]
fn test_prelude_chains_operators() {
    let cfg = SeqConfig::default().with_merge_strategy(MergeStrategy::Heap);
    let merged: Vec<i32> = vec![1, 4, 7]
        .into_iter()
        .sorted_merge_with_config(Direction::Ascending, Natural, vec![vec![2, 5].into_iter()], &cfg)
        .collect();

    let parts: Vec<Vec<i32>> = merged
        .into_iter()
        .partitions(vec![2], Underflow::Rest)
        .map(Part::into_vec)
        .collect();
    assert_eq!(parts, vec![vec![1, 2], vec![4, 5, 7]]);
}

#[test]
fn test_root_reexports() {
    let lookup: seqkit::Lookup<bool, i32> = vec![1, 2, 3].into_iter().to_lookup(|x| x % 2 == 1, |x| x);
    assert_eq!(lookup.get(&true), &[1, 3]);

    let err = seqkit::Error::invalid_argument("k", "must be positive");
    assert_eq!(err.to_string(), "invalid argument `k`: must be positive");
}
