//! Lock-step zips over 2, 3 or 4 inputs.
//!
//! - [`ZipShortest`] ends as soon as any input ends.
//! - [`ZipLongest`] runs until every input ends, padding the exhausted ones
//!   with `None` ([`Padded`]) or `Default::default()` ([`Defaulted`]).
//! - [`EquiZip`] expects equal lengths and yields one
//!   `Error::SequenceTooShort` naming the first input that ended early.
//!
//! Inputs are held as a tuple; the selector takes one argument per input.

use std::iter::Fuse;
use std::marker::PhantomData;

use seqkit_core::error::{Error, Result};

use crate::metrics;

pub struct ZipShortest<T, F> {
    iters: T,
    f: F,
}

impl<T, F> ZipShortest<T, F> {
    pub fn new(iters: T, f: F) -> Self {
        Self { iters, f }
    }
}

/// Pass `Option`s to the selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Padded;

/// Pass `Default::default()` for exhausted inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defaulted;

/// Inputs must be fused; the constructors below take care of it.
pub struct ZipLongest<T, F, P = Padded> {
    iters: T,
    f: F,
    pad: PhantomData<P>,
}

impl<T, F, P> ZipLongest<T, F, P> {
    pub fn new(iters: T, f: F) -> Self {
        Self {
            iters,
            f,
            pad: PhantomData,
        }
    }
}

/// Inputs must be fused; the constructors below take care of it.
pub struct EquiZip<T, F> {
    iters: T,
    f: F,
    yielded: usize,
    done: bool,
}

impl<T, F> EquiZip<T, F> {
    pub fn new(iters: T, f: F) -> Self {
        Self {
            iters,
            f,
            yielded: 0,
            done: false,
        }
    }
}

fn min_hint(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (x, None) => x,
        (None, y) => y,
    };
    (a.0.min(b.0), upper)
}

fn max_hint(a: (usize, Option<usize>), b: (usize, Option<usize>)) -> (usize, Option<usize>) {
    let upper = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x.max(y)),
        _ => None,
    };
    (a.0.max(b.0), upper)
}

macro_rules! zip_arity {
    (
        shortest = $shortest:ident,
        longest = $longest:ident,
        longest_default = $longest_default:ident,
        equi = $equi:ident,
        $($it:ident $item:ident $idx:tt),+
    ) => {
        impl<$($it,)+ F, R> Iterator for ZipShortest<($($it,)+), F>
        where
            $($it: Iterator,)+
            F: FnMut($(<$it as Iterator>::Item),+) -> R,
        {
            type Item = R;

            fn next(&mut self) -> Option<R> {
                $(let $item = self.iters.$idx.next()?;)+
                Some((self.f)($($item),+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let hint = (usize::MAX, None);
                $(let hint = min_hint(hint, self.iters.$idx.size_hint());)+
                hint
            }
        }

        impl<$($it,)+ F, R> Iterator for ZipLongest<($(Fuse<$it>,)+), F, Padded>
        where
            $($it: Iterator,)+
            F: FnMut($(Option<<$it as Iterator>::Item>),+) -> R,
        {
            type Item = R;

            fn next(&mut self) -> Option<R> {
                $(let $item = self.iters.$idx.next();)+
                if $($item.is_none())&&+ {
                    return None;
                }
                Some((self.f)($($item),+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let hint = (0, Some(0));
                $(let hint = max_hint(hint, self.iters.$idx.size_hint());)+
                hint
            }
        }

        impl<$($it,)+ F, R> Iterator for ZipLongest<($(Fuse<$it>,)+), F, Defaulted>
        where
            $($it: Iterator,)+
            $(<$it as Iterator>::Item: Default,)+
            F: FnMut($(<$it as Iterator>::Item),+) -> R,
        {
            type Item = R;

            fn next(&mut self) -> Option<R> {
                $(let $item = self.iters.$idx.next();)+
                if $($item.is_none())&&+ {
                    return None;
                }
                Some((self.f)($($item.unwrap_or_default()),+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let hint = (0, Some(0));
                $(let hint = max_hint(hint, self.iters.$idx.size_hint());)+
                hint
            }
        }

        impl<$($it,)+ F, R> Iterator for EquiZip<($(Fuse<$it>,)+), F>
        where
            $($it: Iterator,)+
            F: FnMut($(<$it as Iterator>::Item),+) -> R,
        {
            type Item = Result<R>;

            fn next(&mut self) -> Option<Result<R>> {
                if self.done {
                    return None;
                }
                $(let $item = self.iters.$idx.next();)+
                let present = [$($item.is_some()),+];
                if let ($(Some($item),)+) = ($($item,)+) {
                    self.yielded += 1;
                    return Some(Ok((self.f)($($item),+)));
                }

                self.done = true;
                let short = present.iter().position(|p| !p)?;
                if present.iter().all(|p| !p) {
                    return None;
                }
                metrics::emit("equi_zip", "length_mismatch", short);
                Some(Err(Error::SequenceTooShort {
                    index: short,
                    len: self.yielded,
                }))
            }
        }

        /// Zip until the first input ends.
        pub fn $shortest<$($it,)+ F, R>($($item: $it,)+ f: F) -> ZipShortest<($($it::IntoIter,)+), F>
        where
            $($it: IntoIterator,)+
            F: FnMut($(<$it as IntoIterator>::Item),+) -> R,
        {
            ZipShortest::new(($($item.into_iter(),)+), f)
        }

        /// Zip until every input ends, passing `None` for exhausted inputs.
        pub fn $longest<$($it,)+ F, R>($($item: $it,)+ f: F) -> ZipLongest<($(Fuse<$it::IntoIter>,)+), F, Padded>
        where
            $($it: IntoIterator,)+
            F: FnMut($(Option<<$it as IntoIterator>::Item>),+) -> R,
        {
            ZipLongest::new(($($item.into_iter().fuse(),)+), f)
        }

        /// Zip until every input ends, padding with `Default::default()`.
        pub fn $longest_default<$($it,)+ F, R>($($item: $it,)+ f: F) -> ZipLongest<($(Fuse<$it::IntoIter>,)+), F, Defaulted>
        where
            $($it: IntoIterator,)+
            $(<$it as IntoIterator>::Item: Default,)+
            F: FnMut($(<$it as IntoIterator>::Item),+) -> R,
        {
            ZipLongest::new(($($item.into_iter().fuse(),)+), f)
        }

        /// Zip inputs that must all have the same length.
        pub fn $equi<$($it,)+ F, R>($($item: $it,)+ f: F) -> EquiZip<($(Fuse<$it::IntoIter>,)+), F>
        where
            $($it: IntoIterator,)+
            F: FnMut($(<$it as IntoIterator>::Item),+) -> R,
        {
            EquiZip::new(($($item.into_iter().fuse(),)+), f)
        }
    };
}

zip_arity!(
    shortest = zip_shortest2,
    longest = zip_longest2,
    longest_default = zip_longest_default2,
    equi = equi_zip2,
    A a 0, B b 1
);
zip_arity!(
    shortest = zip_shortest3,
    longest = zip_longest3,
    longest_default = zip_longest_default3,
    equi = equi_zip3,
    A a 0, B b 1, C c 2
);
zip_arity!(
    shortest = zip_shortest4,
    longest = zip_longest4,
    longest_default = zip_longest_default4,
    equi = equi_zip4,
    A a 0, B b 1, C c 2, D d 3
);
