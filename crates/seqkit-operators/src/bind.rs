//! Bind a stream of requested indices to source elements in one pass.
//!
//! The source is read forward only. The most recently read element is always
//! bindable at its own index; up to `lookback` elements before it stay
//! bindable through a [`LookbackQueue`]. Anything else (negative indices,
//! indices past the end, or behind the window) goes to the missing selector.

use std::iter::Fuse;

use seqkit_core::config::SeqConfig;
use seqkit_mem::lookback::LookbackQueue;

pub struct BindByIndex<I, X, M, S>
where
    I: Iterator,
{
    source: Fuse<I>,
    indices: X,
    /// Most recently read element and its index.
    current: Option<(usize, I::Item)>,
    history: LookbackQueue<I::Item>,
    match_sel: M,
    missing_sel: S,
}

impl<I, X, M, S> BindByIndex<I, X, M, S>
where
    I: Iterator,
    X: Iterator<Item = isize>,
{
    /// `lookback == None` retains unbounded history; `Some(0)` retains none.
    pub fn new(source: I, indices: X, lookback: Option<usize>, match_sel: M, missing_sel: S) -> Self {
        Self {
            source: source.fuse(),
            indices,
            current: None,
            history: LookbackQueue::new(lookback),
            match_sel,
            missing_sel,
        }
    }

    /// Use the configured default lookback.
    pub fn with_config(source: I, indices: X, config: &SeqConfig, match_sel: M, missing_sel: S) -> Self {
        Self::new(source, indices, config.default_lookback, match_sel, missing_sel)
    }

    pub fn lookback(&self) -> Option<usize> {
        self.history.max_count()
    }

    /// Read forward until the element at `target` is current. Returns false
    /// when the source ends first.
    fn advance_to(&mut self, target: usize) -> bool {
        loop {
            let next_index = match &self.current {
                Some((idx, _)) if *idx >= target => return true,
                Some((idx, _)) => idx + 1,
                None => 0,
            };
            let item = match self.source.next() {
                Some(item) => item,
                None => return false,
            };
            if let Some((_, prev)) = self.current.replace((next_index, item)) {
                self.history.push(prev);
            }
        }
    }

    fn resolve(&mut self, requested: isize) -> Option<&I::Item> {
        let target = usize::try_from(requested).ok()?;
        if !self.advance_to(target) {
            return None;
        }
        let (cur_index, item) = self.current.as_ref()?;
        if target == *cur_index {
            return Some(item);
        }
        let window_start = cur_index.checked_sub(self.history.len())?;
        let offset = target.checked_sub(window_start)?;
        self.history.get(offset)
    }
}

impl<I, X, M, S, R> Iterator for BindByIndex<I, X, M, S>
where
    I: Iterator,
    I::Item: Clone,
    X: Iterator<Item = isize>,
    M: FnMut(I::Item, usize) -> R,
    S: FnMut(isize) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        let requested = self.indices.next()?;
        match self.resolve(requested).cloned() {
            Some(item) => Some((self.match_sel)(item, requested as usize)),
            None => Some((self.missing_sel)(requested)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}
