//! Equality and ordering capabilities that operators are parameterized over.
//!
//! Operators default to the natural `Eq + Hash` / `Ord` of the key type; the
//! traits below exist so callers can substitute case-insensitive keys,
//! reversed orderings, and so on without wrapping every element.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Equality plus a consistent hash: `equals(a, b)` implies
/// `hash_key(a) == hash_key(b)`. Hashed structures are only correct when
/// implementations keep that promise.
pub trait EqualityComparer<K: ?Sized> {
    fn equals(&self, a: &K, b: &K) -> bool;
    fn hash_key(&self, key: &K) -> u64;
}

/// Natural `Eq + Hash` equality.
///
/// Hashing uses `DefaultHasher::new()` (fixed keys) so bucket layouts are
/// reproducible run to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEq;

impl<K: Eq + Hash + ?Sized> EqualityComparer<K> for DefaultEq {
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn hash_key(&self, key: &K) -> u64 {
        let mut h = DefaultHasher::new();
        key.hash(&mut h);
        h.finish()
    }
}

/// Compares keys by a projection, e.g. `KeyedEq(|s: &String| s.to_lowercase())`.
#[derive(Debug, Clone, Copy)]
pub struct KeyedEq<F>(pub F);

impl<K, P, F> EqualityComparer<K> for KeyedEq<F>
where
    K: ?Sized,
    F: Fn(&K) -> P,
    P: Eq + Hash,
{
    fn equals(&self, a: &K, b: &K) -> bool {
        (self.0)(a) == (self.0)(b)
    }

    fn hash_key(&self, key: &K) -> u64 {
        DefaultEq.hash_key(&(self.0)(key))
    }
}

/// Total ordering over keys.
pub trait Comparer<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Natural `Ord` ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparer<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Sort direction for ordered operators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }

    /// Compare `a` and `b` with `cmp`, honoring this direction.
    pub fn compare<K: ?Sized, C: Comparer<K> + ?Sized>(self, cmp: &C, a: &K, b: &K) -> Ordering {
        self.apply(cmp.compare(a, b))
    }
}
