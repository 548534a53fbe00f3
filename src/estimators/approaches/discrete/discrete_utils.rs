// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::hash::Hash;

/// Sparse table of observation counts keyed by observed states.
///
/// Only observed keys are stored, so every entry has a count of at least one
/// and the counts sum to `total`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<K: Eq + Hash> {
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K: Eq + Hash> FrequencyTable<K> {
    /// Build a table in a single pass over the observations.
    pub fn from_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts = HashMap::new();
        let mut total = 0;
        for key in observations {
            *counts.entry(key).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Number of observations for `key`, zero if it was never observed.
    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Empirical probability of `key`.
    pub fn probability(&self, key: &K) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(key) as f64 / self.total as f64
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct observed states.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Reduce the table onto a projection of its keys by summing counts.
    pub fn marginal<M, F>(&self, project: F) -> FrequencyTable<M>
    where
        M: Eq + Hash,
        F: Fn(&K) -> M,
    {
        let mut counts = HashMap::with_capacity(self.counts.len());
        for (key, &count) in self.counts.iter() {
            *counts.entry(project(key)).or_insert(0) += count;
        }
        FrequencyTable {
            counts,
            total: self.total,
        }
    }

    /// Normalize the counts by the total.
    pub fn probabilities(&self) -> ProbabilityTable<K>
    where
        K: Clone,
    {
        let n_f = self.total as f64;
        let probs = self
            .counts
            .iter()
            .map(|(key, &count)| (key.clone(), count as f64 / n_f))
            .collect();
        ProbabilityTable { probs }
    }
}

impl FrequencyTable<i32> {
    /// Build a table of single symbols using the dense counting path where possible.
    pub fn from_symbols(data: &[i32]) -> Self {
        Self {
            counts: count_frequencies_slice(data),
            total: data.len(),
        }
    }
}

/// Frequency table normalized by its total; values sum to one.
///
/// Defined over the observed support only: unobserved states have probability
/// zero and are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable<K: Eq + Hash> {
    probs: HashMap<K, f64>,
}

impl<K: Eq + Hash> ProbabilityTable<K> {
    pub fn get(&self, key: &K) -> f64 {
        self.probs.get(key).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.probs.iter().map(|(key, &p)| (key, p))
    }

    /// Sum of all probabilities, one up to rounding.
    pub fn mass(&self) -> f64 {
        canonical_sum(self.probs.values().copied().collect())
    }
}

/// Helper function to count the occurrences of each value in a slice.
/// Uses a dense vector for small non-negative ranges, otherwise falls back to HashMap.
pub fn count_frequencies_slice(data: &[i32]) -> HashMap<i32, usize> {
    if data.is_empty() {
        return HashMap::new();
    }

    let min_v = data.iter().copied().min().unwrap_or(0);
    let max_v = data.iter().copied().max().unwrap_or(0);

    // Dense mode only pays off while the symbol range stays small.
    const MAX_DENSE_RANGE: i32 = 4096;
    if min_v >= 0 && max_v - min_v <= MAX_DENSE_RANGE {
        let len = (max_v - min_v) as usize + 1;
        let mut dense = vec![0usize; len];
        for &v in data.iter() {
            dense[(v - min_v) as usize] += 1;
        }
        return dense
            .iter()
            .enumerate()
            .filter(|&(_, &cnt)| cnt != 0)
            .map(|(i, &cnt)| (min_v + i as i32, cnt))
            .collect();
    }

    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Map each key of a sequence to a compact i32 code.
///
/// Codes are assigned in order of first occurrence, so equal keys share a code
/// and the code space is only as large as the number of distinct keys.
pub fn compact_codes<K, I>(keys: I) -> Vec<i32>
where
    K: Eq + Hash,
    I: IntoIterator<Item = K>,
{
    let mut map: HashMap<K, i32> = HashMap::new();
    keys.into_iter()
        .map(|key| {
            let next_id = map.len() as i32;
            *map.entry(key).or_insert(next_id)
        })
        .collect()
}

/// Sum terms in a canonical order.
///
/// Hash-map iteration order varies between tables, so terms are sorted first;
/// identical multisets of terms then always produce bit-identical sums.
pub fn canonical_sum(mut terms: Vec<f64>) -> f64 {
    terms.sort_by(f64::total_cmp);
    terms.iter().sum()
}
