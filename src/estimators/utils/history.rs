// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! History embeddings of symbol series.
//!
//! For history length `k` a series of length `N` yields `N - k` aligned
//! observations. Observation `i` pairs the future symbol `x[i + k]` with the
//! k-tuple `(x[i], ..., x[i + k - 1])` immediately preceding it. Tuples are
//! replaced by compact codes so the downstream tables stay sparse no matter how
//! large `base^k` grows.

use crate::error::{InformError, Result};
use crate::estimators::approaches::discrete::discrete_utils::compact_codes;

/// Future symbols and the coded histories preceding them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEmbedding {
    /// `x[i + k]` for every aligned position `i`.
    pub futures: Vec<i32>,
    /// Compact code of `(x[i], ..., x[i + k - 1])` for every aligned position `i`.
    pub histories: Vec<i32>,
}

impl HistoryEmbedding {
    /// Number of aligned observations.
    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.futures.is_empty()
    }
}

/// Reject history lengths that leave no aligned observation.
pub fn validate_history_length(len: usize, k: usize) -> Result<()> {
    if k < 1 || k >= len {
        return Err(InformError::InvalidHistoryLength { k, len });
    }
    Ok(())
}

/// Slice a series into futures and length-`k` histories.
///
/// The caller guarantees `1 <= k < series.len()`.
pub fn history_slices(series: &[i32], k: usize) -> HistoryEmbedding {
    let n_samples = series.len().saturating_sub(k);
    let histories = compact_codes(series.windows(k).take(n_samples));
    let futures = series[k.min(series.len())..].to_vec();
    HistoryEmbedding { futures, histories }
}

/// Slice a source/target pair for transfer entropy.
///
/// Returns the target embedding together with the source symbols aligned to
/// each observation: for the future `target[j]` this is `source[j - 1]`, the
/// source value concurrent with the last element of the target history.
///
/// The caller guarantees equal lengths and `1 <= k < target.len()`.
pub fn te_slices(source: &[i32], target: &[i32], k: usize) -> (HistoryEmbedding, Vec<i32>) {
    let embedding = history_slices(target, k);
    let sources = source[k - 1..source.len() - 1].to_vec();
    debug_assert_eq!(sources.len(), embedding.len());
    (embedding, sources)
}
