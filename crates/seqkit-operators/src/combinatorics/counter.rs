//! Index generators that never compute a factorial or binomial up front.

/// Mixed-radix counter: digit `i` counts `0..bounds[i]` and carries into
/// digit `i + 1` on rollover. Equivalent to `bounds.len()` nested loops.
///
/// The number of distinct states is the product of the bounds, which for
/// permutations is `N!`; that product is never materialized, so any `N`
/// works as long as the caller keeps pulling.
#[derive(Debug, Clone)]
pub struct NestedCounter {
    bounds: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl NestedCounter {
    /// A bound of zero makes the counter empty from the start.
    pub fn new(bounds: Vec<usize>) -> Self {
        let exhausted = bounds.iter().any(|&b| b == 0);
        let digits = vec![0; bounds.len()];
        Self {
            bounds,
            digits,
            exhausted,
        }
    }

    /// Counter with one state per permutation of `n` elements.
    pub fn factorial(n: usize) -> Self {
        Self::new((2..=n).collect())
    }

    /// Step to the next state. Returns false once every state was visited.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for (digit, &bound) in self.digits.iter_mut().zip(&self.bounds) {
            *digit += 1;
            if *digit < bound {
                return true;
            }
            *digit = 0;
        }
        self.exhausted = true;
        false
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Rearrange `perm` into its lexicographic successor. Returns false (and
/// leaves `perm` untouched) when it is already the last permutation.
pub fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    // Rightmost ascent.
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;
    // Smallest element right of the pivot that still exceeds it.
    let mut j = perm.len() - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// Lexicographic `k`-combinations of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Next combination, or `None` once all were produced. `k == 0` yields
    /// the empty combination once.
    pub fn next_indices(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let mut i = k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(&self.indices);
            }
        }
        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_visits_product_of_bounds() {
        let mut c = NestedCounter::new(vec![2, 3]);
        let mut states = vec![c.digits().to_vec()];
        while c.advance() {
            states.push(c.digits().to_vec());
        }
        assert_eq!(states.len(), 6);
        assert_eq!(states[1], vec![1, 0]);
        assert_eq!(states[2], vec![0, 1]);
        assert!(c.is_exhausted());
        assert!(!c.advance());
    }

    #[test]
    fn test_factorial_counter() {
        for (n, expected) in [(0, 1), (1, 1), (3, 6), (5, 120)] {
            let mut c = NestedCounter::factorial(n);
            let mut states = 1;
            while c.advance() {
                states += 1;
            }
            assert_eq!(states, expected, "n = {n}");
        }
    }

    #[test]
    fn test_zero_bound_is_empty() {
        let mut c = NestedCounter::new(vec![3, 0]);
        assert!(c.is_exhausted());
        assert!(!c.advance());
    }

    #[test]
    fn test_next_permutation_sequence() {
        let mut p = vec![0, 1, 2];
        let mut seen = vec![p.clone()];
        while next_permutation(&mut p) {
            seen.push(p.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_combinations() {
        let mut c = Combinations::new(4, 2);
        let mut all = Vec::new();
        while let Some(idx) = c.next_indices() {
            all.push(idx.to_vec());
        }
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn test_combination_edges() {
        let mut empty = Combinations::new(3, 0);
        assert_eq!(empty.next_indices(), Some(&[][..]));
        assert_eq!(empty.next_indices(), None);

        let mut too_many = Combinations::new(2, 3);
        assert_eq!(too_many.next_indices(), None);

        let mut all = Combinations::new(3, 3);
        assert_eq!(all.next_indices(), Some(&[0, 1, 2][..]));
        assert_eq!(all.next_indices(), None);
    }
}
