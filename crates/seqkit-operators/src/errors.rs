//! Error-tolerant pass-through for fallible sources.

use std::iter::Fuse;

/// Skips `Err` items the predicate accepts. The first error it rejects is
/// yielded and ends the sequence, since a failed upstream cannot resume.
pub struct IgnoreErrors<I, P> {
    source: Fuse<I>,
    ignore: P,
    failed: bool,
    skipped: usize,
}

impl<I, P, T, E> IgnoreErrors<I, P>
where
    I: Iterator<Item = Result<T, E>>,
    P: FnMut(&E) -> bool,
{
    pub fn new(source: I, ignore: P) -> Self {
        Self {
            source: source.fuse(),
            ignore,
            failed: false,
            skipped: 0,
        }
    }

    /// Errors skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I, P, T, E> Iterator for IgnoreErrors<I, P>
where
    I: Iterator<Item = Result<T, E>>,
    P: FnMut(&E) -> bool,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Result<T, E>> {
        if self.failed {
            return None;
        }
        loop {
            match self.source.next()? {
                Ok(item) => return Some(Ok(item)),
                Err(e) if (self.ignore)(&e) => self.skipped += 1,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
