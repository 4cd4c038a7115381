//! Operators holding several cursors release all of them when the consumer
//! stops pulling early.

use std::cell::Cell;
use std::rc::Rc;

use seqkit_core::compare::{Direction, Natural};
use seqkit_core::config::{MergeStrategy, SeqConfig};
use seqkit_operators::{zip_longest3, SeqExt};

/// Counts how many wrapped cursors have been dropped.
struct Counted<I> {
    inner: I,
    drops: Rc<Cell<usize>>,
}

impl<I> Counted<I> {
    fn new(inner: I, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            inner,
            drops: Rc::clone(drops),
        }
    }
}

impl<I: Iterator> Iterator for Counted<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

impl<I> Drop for Counted<I> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn test_full_join_releases_both_cursors() {
    let drops = Rc::new(Cell::new(0));
    {
        let first = Counted::new(vec![1, 2, 3, 4].into_iter(), &drops);
        let second = Counted::new(vec![2, 3, 9].into_iter(), &drops);
        let mut joined = first.full_join(
            second,
            |a: &i32| *a,
            |b: &i32| *b,
            |a| (a, 0),
            |b| (0, b),
            |a, b| (a, b),
        );
        assert_eq!(joined.next(), Some((1, 0)));
        assert_eq!(joined.next(), Some((2, 2)));
    }
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_sorted_merge_releases_every_cursor() {
    for strategy in [MergeStrategy::Scan, MergeStrategy::Heap] {
        let drops = Rc::new(Cell::new(0));
        let cfg = SeqConfig::default().with_merge_strategy(strategy);
        let mut taken = Vec::new();
        {
            let head = Counted::new(vec![1, 4, 7].into_iter(), &drops);
            let others = vec![
                Counted::new(vec![2, 5, 8].into_iter(), &drops),
                Counted::new(vec![3, 6, 9].into_iter(), &drops),
            ];
            for x in head.sorted_merge_with_config(Direction::Ascending, Natural, others, &cfg) {
                if x > 3 {
                    break;
                }
                taken.push(x);
            }
        }
        assert_eq!(taken, vec![1, 2, 3], "{strategy:?}");
        assert_eq!(drops.get(), 3, "{strategy:?}");
    }
}

#[test]
fn test_ordered_merge_releases_both_cursors() {
    let drops = Rc::new(Cell::new(0));
    {
        let first = Counted::new(vec![1, 3, 5].into_iter(), &drops);
        let second = Counted::new(vec![2, 4, 6].into_iter(), &drops);
        let mut merged = first.ordered_merge_by(
            second,
            |a: &i32| *a,
            |b: &i32| *b,
            |a| a,
            |b| b,
            |a, _| a,
        );
        assert_eq!(merged.next(), Some(1));
        assert_eq!(merged.next(), Some(2));
    }
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_zip_longest_releases_every_cursor() {
    let drops = Rc::new(Cell::new(0));
    {
        let zipped = zip_longest3(
            Counted::new(vec![1].into_iter(), &drops),
            Counted::new(vec![1, 2, 3].into_iter(), &drops),
            Counted::new(vec![1, 2].into_iter(), &drops),
            |a, b, c| (a, b, c),
        );
        for (n, row) in zipped.enumerate() {
            if n == 1 {
                assert_eq!(row, (None, Some(2), Some(2)));
                break;
            }
        }
    }
    assert_eq!(drops.get(), 3);
}
