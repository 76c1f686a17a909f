//! Lexicographic k-combinations of the index range `[0, n)`.

/// Number of k-element subsets of an n-element set, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step.
        acc = acc.checked_mul((n - i) as u128)? / (i as u128 + 1);
        if acc > u64::MAX as u128 {
            return None;
        }
    }
    Some(acc as u64)
}

/// Returns the k-combination of `[0, n)` at position `rank` in lexicographic
/// order, or `None` if `rank >= C(n, k)`.
pub fn unrank_combination(n: usize, k: usize, rank: u64) -> Option<Vec<usize>> {
    if rank >= binomial(n, k)? {
        return None;
    }
    let mut rank = rank;
    let mut combination = Vec::with_capacity(k);
    let mut next = 0;
    for slot in 0..k {
        let remaining = k - slot - 1;
        loop {
            // Combinations starting with `next` at this slot.
            let block = binomial(n - next - 1, remaining)?;
            if rank < block {
                break;
            }
            rank -= block;
            next += 1;
        }
        combination.push(next);
        next += 1;
    }
    Some(combination)
}

/// Iterator over the k-combinations of `[0, n)` in lexicographic order.
///
/// The iterator is finite; [`Combinations::reset`] starts it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Create an iterator over the k-combinations of `[0, n)`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Rewind the iterator to the first combination.
    pub fn reset(&mut self) {
        *self = Self::new(self.n, self.k);
    }

    fn advance(&mut self) -> bool {
        let (n, k) = (self.n, self.k);
        // Rightmost slot that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.clone())
    }
}
