use seqkit_core::error::{Error, Result};

use super::counter::Combinations;

enum State<I, T> {
    Pending(I),
    Running {
        items: Vec<T>,
        size: usize,
        combos: Combinations,
    },
    Done,
}

/// Every subset of a finite source, by increasing size: the empty set
/// first, the full set last. Within one size, subsets follow lexicographic
/// order of element positions.
pub struct Subsets<I: Iterator> {
    state: State<I, I::Item>,
}

impl<I: Iterator> Subsets<I> {
    pub fn new(source: I) -> Self {
        Self {
            state: State::Pending(source),
        }
    }
}

impl<I> Iterator for Subsets<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if let State::Pending(_) = self.state {
            if let State::Pending(source) = std::mem::replace(&mut self.state, State::Done) {
                let items: Vec<I::Item> = source.collect();
                let combos = Combinations::new(items.len(), 0);
                self.state = State::Running {
                    items,
                    size: 0,
                    combos,
                };
            }
        }

        let State::Running {
            items,
            size,
            combos,
        } = &mut self.state
        else {
            return None;
        };

        loop {
            if let Some(idx) = combos.next_indices() {
                return Some(idx.iter().map(|&i| items[i].clone()).collect());
            }
            if *size == items.len() {
                self.state = State::Done;
                return None;
            }
            *size += 1;
            *combos = Combinations::new(items.len(), *size);
        }
    }
}

/// Subsets of exactly `size` elements.
///
/// The bound is checked only once the source is known: when `size` exceeds
/// the source length, the first pull yields one `InvalidArgument` error and
/// the sequence then ends.
pub struct SubsetsOfSize<I: Iterator> {
    size: usize,
    state: State<I, I::Item>,
}

impl<I: Iterator> SubsetsOfSize<I> {
    pub fn new(source: I, size: usize) -> Self {
        Self {
            size,
            state: State::Pending(source),
        }
    }
}

impl<I> Iterator for SubsetsOfSize<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Result<Vec<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let State::Pending(_) = self.state {
            if let State::Pending(source) = std::mem::replace(&mut self.state, State::Done) {
                let items: Vec<I::Item> = source.collect();
                if self.size > items.len() {
                    return Some(Err(Error::invalid_argument(
                        "subset_size",
                        format!(
                            "subset size {} exceeds sequence length {}",
                            self.size,
                            items.len()
                        ),
                    )));
                }
                let combos = Combinations::new(items.len(), self.size);
                self.state = State::Running {
                    items,
                    size: self.size,
                    combos,
                };
            }
        }

        let State::Running { items, combos, .. } = &mut self.state else {
            return None;
        };
        match combos.next_indices() {
            Some(idx) => Some(Ok(idx.iter().map(|&i| items[i].clone()).collect())),
            None => {
                self.state = State::Done;
                None
            }
        }
    }
}
