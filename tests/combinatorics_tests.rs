//! Permutations / Subsets / PartialSort tests

use std::collections::HashSet;

use seqkit_core::compare::Direction;
use seqkit_core::error::Error;
use seqkit_operators::SeqExt;

#[test]
fn test_permutations_of_three() {
    let perms: Vec<Vec<char>> = "abc".chars().permutations().collect();
    assert_eq!(perms.len(), 6);
    assert_eq!(perms[0], vec!['a', 'b', 'c']);
    assert_eq!(perms[5], vec!['c', 'b', 'a']);
    let distinct: HashSet<Vec<char>> = perms.into_iter().collect();
    assert_eq!(distinct.len(), 6);
}

#[test]
fn test_permutations_follow_source_order_not_value_order() {
    let perms: Vec<Vec<i32>> = vec![3, 1, 2].into_iter().permutations().collect();
    assert_eq!(perms[0], vec![3, 1, 2]);
    assert_eq!(perms[1], vec![3, 2, 1]);
    assert_eq!(perms.len(), 6);
}

#[test]
fn test_permutations_small_inputs() {
    let empty: Vec<Vec<i32>> = Vec::new().into_iter().permutations().collect();
    assert_eq!(empty, vec![Vec::<i32>::new()]);

    let one: Vec<Vec<i32>> = vec![7].into_iter().permutations().collect();
    assert_eq!(one, vec![vec![7]]);
}

#[test]
fn test_permutations_with_duplicate_values() {
    let perms: Vec<Vec<i32>> = vec![1, 1, 2].into_iter().permutations().collect();
    assert_eq!(perms.len(), 6);
}

#[test]
fn test_permutations_are_independent_copies() {
    let mut perms = vec![String::from("x"), String::from("y")].into_iter().permutations();
    let mut first = perms.next().unwrap();
    first[0].push('!');
    assert_eq!(perms.next().unwrap(), vec!["y".to_string(), "x".to_string()]);
    assert_eq!(first, vec!["x!".to_string(), "y".to_string()]);
}

#[test]
fn test_subsets_by_increasing_size() {
    let subsets: Vec<Vec<i32>> = vec![1, 2, 3].into_iter().subsets().collect();
    assert_eq!(
        subsets,
        vec![
            vec![],
            vec![1],
            vec![2],
            vec![3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
            vec![1, 2, 3],
        ]
    );
}

#[test]
fn test_subsets_of_empty() {
    let subsets: Vec<Vec<i32>> = Vec::new().into_iter().subsets().collect();
    assert_eq!(subsets, vec![Vec::<i32>::new()]);
}

#[test]
fn test_subsets_of_size() {
    let pairs: Vec<Vec<char>> = "abcd"
        .chars()
        .subsets_of_size(2)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[0], vec!['a', 'b']);
    assert_eq!(pairs[5], vec!['c', 'd']);
}

#[test]
fn test_subsets_of_size_validation_is_deferred() {
    let mut it = vec![1, 2].into_iter().subsets_of_size(3);
    // Constructing it did not fail; the first pull does.
    match it.next() {
        Some(Err(Error::InvalidArgument { name, .. })) => assert_eq!(name, "subset_size"),
        other => panic!("expected invalid argument, got {other:?}"),
    }
    assert!(it.next().is_none());
}

#[test]
fn test_partial_sort() {
    let top: Vec<i32> = vec![5, 1, 9, 3, 7, 2]
        .into_iter()
        .partial_sort(3, Direction::Ascending)
        .collect();
    assert_eq!(top, vec![1, 2, 3]);

    let bottom: Vec<i32> = vec![5, 1, 9, 3, 7, 2]
        .into_iter()
        .partial_sort(2, Direction::Descending)
        .collect();
    assert_eq!(bottom, vec![9, 7]);
}

#[test]
fn test_partial_sort_more_than_available() {
    let all: Vec<i32> = vec![3, 1, 2].into_iter().partial_sort(10, Direction::Ascending).collect();
    assert_eq!(all, vec![1, 2, 3]);

    let none: Vec<i32> = vec![3, 1, 2].into_iter().partial_sort(0, Direction::Ascending).collect();
    assert!(none.is_empty());
}

#[test]
fn test_partial_sort_by_key_is_stable() {
    let words = vec!["bb", "a", "cc", "d", "eee", "ff"];
    let shortest: Vec<&str> = words
        .into_iter()
        .partial_sort_by_key(4, |w| w.len(), Direction::Ascending)
        .collect();
    assert_eq!(shortest, vec!["a", "d", "bb", "cc"]);
}

#[test]
fn test_partial_sort_by_comparer() {
    let pairs = vec![(1, 'x'), (3, 'y'), (2, 'z')];
    let out: Vec<(i32, char)> = pairs
        .into_iter()
        .partial_sort_by(2, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0), Direction::Descending)
        .collect();
    assert_eq!(out, vec![(3, 'y'), (2, 'z')]);
}
