use super::counter::{next_permutation, NestedCounter};

enum State<I, T> {
    Pending(I),
    Running {
        items: Vec<T>,
        order: Vec<usize>,
        counter: NestedCounter,
        first: bool,
    },
    Done,
}

/// Every ordering of a finite source, original order first.
///
/// The source is snapshotted on the first pull. Orderings are produced in
/// lexicographic order of element positions, so duplicate values still give
/// `N!` outputs. Each yielded `Vec` is an independent copy.
pub struct Permutations<I: Iterator> {
    state: State<I, I::Item>,
}

impl<I: Iterator> Permutations<I> {
    pub fn new(source: I) -> Self {
        Self {
            state: State::Pending(source),
        }
    }
}

impl<I> Iterator for Permutations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if let State::Pending(_) = self.state {
            if let State::Pending(source) = std::mem::replace(&mut self.state, State::Done) {
                let items: Vec<I::Item> = source.collect();
                let n = items.len();
                self.state = State::Running {
                    items,
                    order: (0..n).collect(),
                    counter: NestedCounter::factorial(n),
                    first: true,
                };
            }
        }

        let State::Running {
            items,
            order,
            counter,
            first,
        } = &mut self.state
        else {
            return None;
        };

        if *first {
            *first = false;
        } else if !(counter.advance() && next_permutation(order)) {
            self.state = State::Done;
            return None;
        }
        Some(order.iter().map(|&i| items[i].clone()).collect())
    }
}
