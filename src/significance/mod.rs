// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Permutation tests for the discrete information measures.
//!
//! The observed value is computed once on the inputs as given. Each of the
//! `nperm` iterations then shuffles a private copy of one series, recomputes
//! the measure and counts how often the shuffled value reaches the observed
//! one. With that count starting at one,
//!
//! - `p = count / (nperm + 1)`, which is never zero,
//! - `se = sqrt(p (1 - p) / (nperm + 1))`.
//!
//! ```rust
//! use infosig::significance::{PermutationTest, seeded_rng};
//!
//! let mut rng = seeded_rng(2019);
//! let sig = PermutationTest::new(1000)
//!     .unwrap()
//!     .with_rng(&mut rng)
//!     .mutual_information(&[0i32, 0, 0, 0, 0, 0, 0, 0], &[0i32, 0, 0, 0, 0, 0, 0, 0])
//!     .unwrap();
//! assert_eq!(sig.value, 0.0);
//! assert_eq!(sig.p, 1.0);
//! assert_eq!(sig.se, 0.0);
//! ```

pub mod rng;

pub use rng::{seeded_rng, shuffle_in_place, unit_uniform, with_default_rng};

use crate::error::{InformError, Result};
use crate::estimators::approaches::discrete::{
    DiscreteActiveInformation, DiscreteMutualInformation, DiscreteTransferEntropy,
};
use crate::estimators::traits::GlobalValue;
use crate::series::{RawSeries, Series};
use rand::RngCore;

/// Smallest accepted number of permutations.
pub const MIN_PERMUTATIONS: usize = 10;

/// A measured value together with its permutation-test significance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceResult {
    /// The measure computed on the unpermuted inputs.
    pub value: f64,
    /// One-sided Monte Carlo p-value in `(0, 1]`.
    pub p: f64,
    /// Standard error of `p`.
    pub se: f64,
}

impl SignificanceResult {
    fn from_count(value: f64, count: usize, nperm: usize) -> Self {
        let trials = (nperm + 1) as f64;
        let p = count as f64 / trials;
        let se = (p * (1.0 - p) / trials).sqrt();
        Self { value, p, se }
    }
}

/// Permutation test configuration: the number of permutations and, optionally,
/// the generator driving the shuffles.
pub struct PermutationTest<'r> {
    nperm: usize,
    rng: Option<&'r mut dyn RngCore>,
}

impl<'r> PermutationTest<'r> {
    /// Fails with `InsufficientPermutations` when `nperm < MIN_PERMUTATIONS`.
    pub fn new(nperm: usize) -> Result<Self> {
        if nperm < MIN_PERMUTATIONS {
            return Err(InformError::InsufficientPermutations {
                nperm,
                min: MIN_PERMUTATIONS,
            });
        }
        Ok(Self { nperm, rng: None })
    }

    /// Drive the shuffles with `rng` instead of the process-wide default generator.
    pub fn with_rng(mut self, rng: &'r mut dyn RngCore) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn nperm(&self) -> usize {
        self.nperm
    }

    /// Mutual information of `x` and `y`; `y` is shuffled.
    pub fn mutual_information<'a, 'b>(
        &mut self,
        x: impl Into<RawSeries<'a>>,
        y: impl Into<RawSeries<'b>>,
    ) -> Result<SignificanceResult> {
        let (xs, ys) = Series::encode_pair(x, y)?;
        let observed = DiscreteMutualInformation::new(&xs, &ys)?.global_value();
        let mut scratch = ys.scratch();
        Ok(self.run("mutual information", observed, &mut scratch, |shuffled| {
            DiscreteMutualInformation::from_slices(xs.as_slice(), shuffled).global_value()
        }))
    }

    /// Active information of `series` with history length `k`; the series itself is shuffled.
    pub fn active_information<'a>(
        &mut self,
        series: impl Into<RawSeries<'a>>,
        k: usize,
    ) -> Result<SignificanceResult> {
        let xs = Series::encode(series)?;
        let observed = DiscreteActiveInformation::new(&xs, k)?.global_value();
        let mut scratch = xs.scratch();
        Ok(self.run("active information", observed, &mut scratch, |shuffled| {
            DiscreteActiveInformation::from_slice(shuffled, k).global_value()
        }))
    }

    /// Transfer entropy from `source` to `target`; the source is shuffled.
    pub fn transfer_entropy<'a, 'b>(
        &mut self,
        source: impl Into<RawSeries<'a>>,
        target: impl Into<RawSeries<'b>>,
        k: usize,
    ) -> Result<SignificanceResult> {
        let (ss, ts) = Series::encode_pair(source, target)?;
        let observed = DiscreteTransferEntropy::new(&ss, &ts, k)?.global_value();
        let mut scratch = ss.scratch();
        Ok(self.run("transfer entropy", observed, &mut scratch, |shuffled| {
            DiscreteTransferEntropy::from_slices(shuffled, ts.as_slice(), k).global_value()
        }))
    }

    /// Shuffle `scratch` `nperm` times, re-measure and aggregate.
    ///
    /// Shuffled values equal to the observed one count toward the null.
    /// The contents of `scratch` afterwards are unspecified.
    fn run<F>(
        &mut self,
        measure_name: &str,
        observed: f64,
        scratch: &mut [i32],
        mut measure: F,
    ) -> SignificanceResult
    where
        F: FnMut(&[i32]) -> f64,
    {
        let nperm = self.nperm;
        log::debug!(
            "{measure_name}: permutation test with {nperm} permutations, observed {observed}"
        );
        let count = rng::with_rng(self.rng.as_deref_mut(), |rng| {
            let mut count = 1usize;
            for iteration in 0..nperm {
                shuffle_in_place(scratch, rng);
                let permuted = measure(scratch);
                log::trace!("{measure_name}: permutation {iteration} -> {permuted}");
                if permuted >= observed {
                    count += 1;
                }
            }
            count
        });
        let result = SignificanceResult::from_count(observed, count, nperm);
        log::debug!(
            "{measure_name}: count {count}/{}, p = {}, se = {}",
            nperm + 1,
            result.p,
            result.se
        );
        result
    }
}

/// Mutual information of `x` and `y` with its permutation significance.
///
/// `rng` makes the run reproducible; `None` uses the process-wide default generator.
pub fn mutual_information_significance<'a, 'b>(
    x: impl Into<RawSeries<'a>>,
    y: impl Into<RawSeries<'b>>,
    nperm: usize,
    rng: Option<&mut dyn RngCore>,
) -> Result<SignificanceResult> {
    let mut test = PermutationTest::new(nperm)?;
    test.rng = rng;
    test.mutual_information(x, y)
}

/// Active information of `series` with history length `k` and its permutation significance.
pub fn active_information_significance<'a>(
    series: impl Into<RawSeries<'a>>,
    k: usize,
    nperm: usize,
    rng: Option<&mut dyn RngCore>,
) -> Result<SignificanceResult> {
    let mut test = PermutationTest::new(nperm)?;
    test.rng = rng;
    test.active_information(series, k)
}

/// Transfer entropy from `source` to `target` and its permutation significance.
pub fn transfer_entropy_significance<'a, 'b>(
    source: impl Into<RawSeries<'a>>,
    target: impl Into<RawSeries<'b>>,
    k: usize,
    nperm: usize,
    rng: Option<&mut dyn RngCore>,
) -> Result<SignificanceResult> {
    let mut test = PermutationTest::new(nperm)?;
    test.rng = rng;
    test.transfer_entropy(source, target, k)
}
