//! Brute-force consensus search over the subsets of shares.
//!
//! Every subset of `threshold` shares is enumerated in lexicographic order of
//! indices. A subset is accepted when the polynomial it induces passes through
//! every share of the collection, including the shares outside the subset; its
//! value at zero is then the secret. The first accepted subset wins, so the
//! result does not depend on the strategy used to walk the subsets.
//!
//! The acceptance rule can be relaxed with [`SearchOptions::max_faults`]: a
//! subset is then accepted when at most that many shares disagree with it.
//! For the first accepted subset to be the honest one, the collection must
//! hold at least `threshold + 2 * max_faults` shares, which is enforced.
//!
//! With `n` shares this costs `O(C(n, k) · n · k)` field operations: the search
//! is meant for tens of shares. When more than `n - k` shares are corrupted in
//! a coordinated way, a wrong subset may pass validation and a wrong secret is
//! returned; no check can rule this out within a single small field.

use crate::{value_at, value_at_zero, Error, Result, Share};
use rayon::prelude::*;
use serde::Serialize;
use shamir_math::zq::Modulus;
use shamir_util::{binomial, unrank_combination, Combinations};
use std::time::{Duration, Instant};
use zeroize::Zeroizing;

/// How the subsets are walked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One subset after the other, on the calling thread.
    #[default]
    Sequential,
    /// Subsets are spread by rank over the rayon thread pool; the consistent
    /// subset of lowest rank is returned.
    ///
    /// With a deadline the outcome depends on scheduling: a lower rank first
    /// examined after the deadline reports [`Error::Timeout`], and that
    /// timeout wins over a consistent subset of higher rank.
    Parallel,
}

/// Options of a consensus search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Enumeration strategy.
    pub strategy: Strategy,
    /// Time after which the search gives up with [`Error::Timeout`].
    pub deadline: Option<Duration>,
    /// Number of shares allowed to disagree with an accepted subset.
    pub max_faults: usize,
}

/// A successful reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    /// The polynomial's value at zero.
    pub secret: u64,
    /// Positions, in the input collection, of the shares of the winning subset.
    pub subset: Vec<usize>,
    /// Lexicographic rank of the winning subset among all subsets.
    pub rank: u64,
    /// Positions of the shares that disagree with the reconstructed
    /// polynomial. Always empty unless faults are tolerated.
    pub disagreeing: Vec<usize>,
}

/// Search for a subset of `threshold` shares consistent with all the shares.
#[derive(Debug, Clone)]
pub struct ConsensusSearch<'a> {
    shares: &'a [Share],
    threshold: usize,
    modulus: &'a Modulus,
    options: SearchOptions,
}

impl<'a> ConsensusSearch<'a> {
    /// Create a sequential search without deadline.
    pub fn new(shares: &'a [Share], threshold: usize, modulus: &'a Modulus) -> Self {
        Self {
            shares,
            threshold,
            modulus,
            options: SearchOptions::default(),
        }
    }

    /// Replace all the options of the search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the enumeration strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Give up after `deadline` has elapsed.
    ///
    /// Under [`Strategy::Parallel`] the result is then no longer deterministic.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.options.deadline = Some(deadline);
        self
    }

    /// Accept subsets with which up to `max_faults` shares disagree.
    pub fn with_max_faults(mut self, max_faults: usize) -> Self {
        self.options.max_faults = max_faults;
        self
    }

    /// Run the search.
    ///
    /// Fails with [`Error::InvalidThreshold`] when the threshold is 0, with
    /// [`Error::InsufficientShares`] when there are fewer shares than the
    /// threshold, with [`Error::NotFound`] when no subset is consistent, and
    /// with [`Error::Timeout`] when the deadline passes first. Tolerating
    /// faults requires `threshold + 2 * max_faults` shares, or the search
    /// fails with [`Error::InvalidInput`]. An interpolation error, caused by
    /// two shares of a subset sharing an index, ends the search if it is met
    /// before a consistent subset.
    pub fn run(&self) -> Result<Reconstruction> {
        let n = self.shares.len();
        if self.threshold == 0 {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        if n < self.threshold {
            return Err(Error::insufficient_shares(n, self.threshold));
        }
        let required = self
            .threshold
            .saturating_add(self.options.max_faults.saturating_mul(2));
        if n < required {
            return Err(Error::invalid_input(format!(
                "tolerating {} faults with threshold {} requires {} shares, got {}",
                self.options.max_faults, self.threshold, required, n
            )));
        }
        let total = binomial(n, self.threshold).ok_or_else(|| {
            Error::invalid_input(format!(
                "{} shares with threshold {} exceed 2^64 combinations",
                n, self.threshold
            ))
        })?;

        let started = Instant::now();
        let found = match self.options.strategy {
            Strategy::Sequential => self.run_sequential(started),
            Strategy::Parallel => self.run_parallel(total, started),
        };
        found.unwrap_or(Err(Error::NotFound { examined: total }))
    }

    fn run_sequential(&self, started: Instant) -> Option<Result<Reconstruction>> {
        Combinations::new(self.shares.len(), self.threshold)
            .zip(0u64..)
            .find_map(|(subset, rank)| self.step(subset, rank, started))
    }

    fn run_parallel(&self, total: u64, started: Instant) -> Option<Result<Reconstruction>> {
        let n = self.shares.len();
        (0..total).into_par_iter().find_map_first(|rank| {
            // The rank is below `total`, so the combination exists.
            let subset = unrank_combination(n, self.threshold, rank)?;
            self.step(subset, rank, started)
        })
    }

    /// Examine one subset; `None` means the search goes on.
    fn step(
        &self,
        subset: Vec<usize>,
        rank: u64,
        started: Instant,
    ) -> Option<Result<Reconstruction>> {
        if self.is_past_deadline(started) {
            return Some(Err(Error::Timeout { examined: rank }));
        }
        match self.attempt(&subset) {
            Ok(Some((secret, disagreeing))) => Some(Ok(Reconstruction {
                secret,
                subset,
                rank,
                disagreeing,
            })),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }

    fn is_past_deadline(&self, started: Instant) -> bool {
        self.options
            .deadline
            .is_some_and(|deadline| started.elapsed() >= deadline)
    }

    /// Returns the secret induced by the subset, and the shares disagreeing
    /// with it, if at most `max_faults` shares of the collection disagree.
    fn attempt(&self, subset: &[usize]) -> Result<Option<(u64, Vec<usize>)>> {
        let points = Zeroizing::new(subset.iter().map(|&i| self.shares[i]).collect::<Vec<_>>());
        let candidate = value_at_zero(&points, self.modulus)?;
        let mut disagreeing = vec![];
        for (i, share) in self.shares.iter().enumerate() {
            // Shares built without a modulus may hold unreduced coordinates.
            if value_at(&points, share.x, self.modulus)? != self.modulus.reduce(share.y) {
                if disagreeing.len() == self.options.max_faults {
                    return Ok(None);
                }
                disagreeing.push(i);
            }
        }
        Ok(Some((candidate, disagreeing)))
    }
}

/// Sequential consensus search without deadline.
pub fn search(shares: &[Share], threshold: usize, modulus: &Modulus) -> Result<Reconstruction> {
    ConsensusSearch::new(shares, threshold, modulus).run()
}
