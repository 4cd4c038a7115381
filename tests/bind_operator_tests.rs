//! Index binding tests

use seqkit_operators::SeqExt;

#[derive(Debug, PartialEq)]
enum Bound {
    Hit(char, usize),
    Miss(isize),
}

fn bind(source: &str, indices: Vec<isize>, lookback: Option<usize>) -> Vec<Bound> {
    source
        .chars()
        .bind_by_index_with_lookback(indices, lookback, Bound::Hit, Bound::Miss)
        .collect()
}

#[test]
fn test_forward_indices() {
    assert_eq!(
        bind("abcdef", vec![0, 2, 5], Some(0)),
        vec![Bound::Hit('a', 0), Bound::Hit('c', 2), Bound::Hit('f', 5)]
    );
}

#[test]
fn test_repeated_current_index() {
    // The current element stays bindable even with no history at all.
    assert_eq!(
        bind("abc", vec![1, 1, 1], Some(0)),
        vec![Bound::Hit('b', 1), Bound::Hit('b', 1), Bound::Hit('b', 1)]
    );
}

#[test]
fn test_negative_and_past_end_are_missing() {
    assert_eq!(
        bind("abc", vec![-1, 0, 7, 2], None),
        vec![
            Bound::Miss(-1),
            Bound::Hit('a', 0),
            Bound::Miss(7),
            Bound::Hit('c', 2),
        ]
    );
}

#[test]
fn test_bounded_lookback_window() {
    // After reading index 5, a window of 2 keeps indices 3 and 4.
    assert_eq!(
        bind("abcdefg", vec![5, 4, 3, 2, 6, 5], Some(2)),
        vec![
            Bound::Hit('f', 5),
            Bound::Hit('e', 4),
            Bound::Hit('d', 3),
            Bound::Miss(2),
            Bound::Hit('g', 6),
            Bound::Hit('f', 5),
        ]
    );
}

#[test]
fn test_zero_lookback_misses_every_backward_reference() {
    assert_eq!(
        bind("abcd", vec![3, 2, 0], Some(0)),
        vec![Bound::Hit('d', 3), Bound::Miss(2), Bound::Miss(0)]
    );
}

#[test]
fn test_unbounded_lookback_keeps_everything() {
    assert_eq!(
        bind("abcd", vec![3, 0, 1, 2], None),
        vec![
            Bound::Hit('d', 3),
            Bound::Hit('a', 0),
            Bound::Hit('b', 1),
            Bound::Hit('c', 2),
        ]
    );
}

#[test]
fn test_default_lookback_from_config() {
    // The process-wide default is unbounded unless SEQKIT_LOOKBACK is set.
    let expected_hit = std::env::var("SEQKIT_LOOKBACK").is_err();
    let out: Vec<Bound> = "xyz"
        .chars()
        .bind_by_index(vec![2, 0], Bound::Hit, Bound::Miss)
        .collect();
    assert_eq!(out[0], Bound::Hit('z', 2));
    if expected_hit {
        assert_eq!(out[1], Bound::Hit('x', 0));
    }
}

#[test]
fn test_empty_source() {
    assert_eq!(bind("", vec![0, -3], None), vec![Bound::Miss(0), Bound::Miss(-3)]);
}
