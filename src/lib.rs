// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infosig
//!
//! Discrete information-theoretic measures over integer-valued time series,
//! with permutation-test significance.
//!
//! ## Quick Start
//!
//! ```rust
//! use infosig::significance::seeded_rng;
//!
//! // Point estimates, in bits
//! let mi = infosig::mutual_information(&[0i32, 0, 0, 0, 1, 1, 1, 1], &[1i32, 1, 1, 1, 0, 0, 0, 0]).unwrap();
//! assert!((mi - 1.0).abs() < 1e-12);
//!
//! let ai = infosig::active_information(&[1i32, 1, 0, 0, 1, 0, 0, 1], 2).unwrap();
//! assert!((ai - 0.918296).abs() < 1e-6);
//!
//! // Significance under a reproducible generator
//! let mut rng = seeded_rng(2019);
//! let sig = infosig::transfer_entropy_significance(
//!     &[0i32, 0, 1, 0, 0, 0, 0, 0],
//!     &[0i32, 0, 0, 1, 0, 0, 0, 0],
//!     2,
//!     1000,
//!     Some(&mut rng),
//! )
//! .unwrap();
//! assert!(sig.p > 0.0 && sig.p <= 1.0);
//! ```
//!
//! ## Measures
//!
//! | Measure | Global | Local | Significance |
//! |---------|--------|-------|--------------|
//! | Entropy | ✅ | ✅ | ❌ |
//! | Mutual Information | ✅ | ✅ | ✅ |
//! | Conditional Mutual Information | ✅ | ✅ | ❌ |
//! | Active Information | ✅ | ✅ | ✅ |
//! | Transfer Entropy | ✅ | ✅ | ✅ |
//!
//! All estimates are plug-in (maximum likelihood) estimates over sparse
//! frequency tables, reported in bits.
//!
//! ## Architecture
//!
//! 1. **Series encoding** ([`series`]): raw numbers, `i32` buffers or byte
//!    buffers are validated into a canonical [`series::Series`].
//! 2. **Estimators** ([`estimators`]): factory types (`Entropy`,
//!    `MutualInformation`, `ActiveInformation`, `TransferEntropy`) over the
//!    discrete approaches, which build frequency tables and fold them into
//!    measures.
//! 3. **Significance** ([`significance`]): permutation tests with an injectable
//!    or process-wide random number generator.
//!
//! Every failure is an input-validation [`error::InformError`] reported before
//! any computation starts.

pub mod error;
pub mod estimators;
pub mod series;
pub mod significance;

pub use error::{InformError, Result};
pub use estimators::{GlobalValue, LocalValues, OptionalLocalValues};
pub use series::{RawSeries, Series};
pub use significance::{
    MIN_PERMUTATIONS, PermutationTest, SignificanceResult, active_information_significance,
    mutual_information_significance, transfer_entropy_significance,
};

use estimators::active_information::ActiveInformation;
use estimators::entropy::Entropy;
use estimators::mutual_information::MutualInformation;
use estimators::transfer_entropy::TransferEntropy;

/// Shannon entropy of a series, in bits.
pub fn entropy<'a>(series: impl Into<RawSeries<'a>>) -> Result<f64> {
    Ok(Entropy::new_discrete(series)?.global_value())
}

/// Mutual information between two equal-length series, in bits.
pub fn mutual_information<'a, 'b>(
    x: impl Into<RawSeries<'a>>,
    y: impl Into<RawSeries<'b>>,
) -> Result<f64> {
    Ok(MutualInformation::new_discrete(x, y)?.global_value())
}

/// Active information storage of a series with history length `k`, in bits.
pub fn active_information<'a>(series: impl Into<RawSeries<'a>>, k: usize) -> Result<f64> {
    Ok(ActiveInformation::new_discrete(series, k)?.global_value())
}

/// Transfer entropy from `source` to `target` with target history length `k`, in bits.
pub fn transfer_entropy<'a, 'b>(
    source: impl Into<RawSeries<'a>>,
    target: impl Into<RawSeries<'b>>,
    k: usize,
) -> Result<f64> {
    Ok(TransferEntropy::new_discrete(source, target, k)?.global_value())
}
