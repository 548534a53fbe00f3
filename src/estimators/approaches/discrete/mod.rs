// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: plug-in (maximum likelihood) estimates of
// entropy, mutual information, active information and transfer entropy,
// all in bits.

pub mod discrete_utils;
pub mod mle;

use crate::error::{self, InformError};
use crate::estimators::approaches::discrete::discrete_utils::{FrequencyTable, canonical_sum};
use crate::estimators::traits::{
    ActiveInformationEstimator, ConditionalMutualInformationEstimator, GlobalValue, LocalValues,
    MutualInformationEstimator, OptionalLocalValues, TransferEntropyEstimator,
};
use crate::estimators::utils::history::{history_slices, te_slices, validate_history_length};
use crate::series::Series;
use ndarray::Array1;

fn check_lengths(left: &Series, right: &Series) -> error::Result<()> {
    if left.len() != right.len() {
        return Err(InformError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

/// Discrete Mutual Information estimator between two aligned symbol sequences.
///
/// I(X;Y) = Σ p(x,y) log2( p(x,y) / (p(x) p(y)) ), summed over observed pairs.
/// The marginals are reductions of the joint table.
pub struct DiscreteMutualInformation {
    observations: Vec<(i32, i32)>,
    joint: FrequencyTable<(i32, i32)>,
    x_marginal: FrequencyTable<i32>,
    y_marginal: FrequencyTable<i32>,
}

impl DiscreteMutualInformation {
    pub fn new(x: &Series, y: &Series) -> error::Result<Self> {
        check_lengths(x, y)?;
        Ok(Self::from_slices(x.as_slice(), y.as_slice()))
    }

    /// Build from aligned slices of equal, non-zero length.
    pub(crate) fn from_slices(x: &[i32], y: &[i32]) -> Self {
        let observations: Vec<(i32, i32)> = x.iter().copied().zip(y.iter().copied()).collect();
        let joint = FrequencyTable::from_observations(observations.iter().copied());
        let x_marginal = joint.marginal(|&(a, _)| a);
        let y_marginal = joint.marginal(|&(_, b)| b);
        Self {
            observations,
            joint,
            x_marginal,
            y_marginal,
        }
    }

    pub fn joint(&self) -> &FrequencyTable<(i32, i32)> {
        &self.joint
    }

    pub fn x_marginal(&self) -> &FrequencyTable<i32> {
        &self.x_marginal
    }

    pub fn y_marginal(&self) -> &FrequencyTable<i32> {
        &self.y_marginal
    }

    /// log2( p(x,y) / (p(x) p(y)) ) written in counts.
    fn pointwise(&self, key: &(i32, i32), joint_count: usize) -> f64 {
        let n_f = self.joint.total() as f64;
        let cx = self.x_marginal.count(&key.0) as f64;
        let cy = self.y_marginal.count(&key.1) as f64;
        ((joint_count as f64 * n_f) / (cx * cy)).log2()
    }
}

impl GlobalValue for DiscreteMutualInformation {
    fn global_value(&self) -> f64 {
        let n_f = self.joint.total() as f64;
        let terms = self
            .joint
            .iter()
            .map(|(key, count)| (count as f64 / n_f) * self.pointwise(key, count))
            .collect();
        canonical_sum(terms)
    }
}

impl LocalValues for DiscreteMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        self.observations
            .iter()
            .map(|key| self.pointwise(key, self.joint.count(key)))
            .collect()
    }
}

impl OptionalLocalValues for DiscreteMutualInformation {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl MutualInformationEstimator for DiscreteMutualInformation {}

/// Discrete Conditional Mutual Information estimator I(X; Y | Z).
///
/// I(X;Y|Z) = Σ p(x,y,z) log2( p(x,y|z) / (p(x|z) p(y|z)) )
///          = Σ p(x,y,z) log2( N(x,y,z) N(z) / (N(x,z) N(y,z)) )
pub struct DiscreteConditionalMutualInformation {
    observations: Vec<(i32, i32, i32)>,
    joint: FrequencyTable<(i32, i32, i32)>,
    xz: FrequencyTable<(i32, i32)>,
    yz: FrequencyTable<(i32, i32)>,
    z: FrequencyTable<i32>,
}

impl DiscreteConditionalMutualInformation {
    pub fn new(x: &Series, y: &Series, cond: &Series) -> error::Result<Self> {
        check_lengths(x, y)?;
        check_lengths(x, cond)?;
        Ok(Self::from_slices(x.as_slice(), y.as_slice(), cond.as_slice()))
    }

    /// Build from aligned slices of equal, non-zero length.
    pub(crate) fn from_slices(x: &[i32], y: &[i32], cond: &[i32]) -> Self {
        let observations: Vec<(i32, i32, i32)> = x
            .iter()
            .zip(y.iter())
            .zip(cond.iter())
            .map(|((&a, &b), &c)| (a, b, c))
            .collect();
        let joint = FrequencyTable::from_observations(observations.iter().copied());
        let xz = joint.marginal(|&(a, _, c)| (a, c));
        let yz = joint.marginal(|&(_, b, c)| (b, c));
        let z = joint.marginal(|&(_, _, c)| c);
        Self {
            observations,
            joint,
            xz,
            yz,
            z,
        }
    }

    pub fn joint(&self) -> &FrequencyTable<(i32, i32, i32)> {
        &self.joint
    }

    fn pointwise(&self, key: &(i32, i32, i32), joint_count: usize) -> f64 {
        let (x, y, z) = *key;
        let c_z = self.z.count(&z) as f64;
        let c_xz = self.xz.count(&(x, z)) as f64;
        let c_yz = self.yz.count(&(y, z)) as f64;
        ((joint_count as f64 * c_z) / (c_xz * c_yz)).log2()
    }
}

impl GlobalValue for DiscreteConditionalMutualInformation {
    fn global_value(&self) -> f64 {
        let n_f = self.joint.total() as f64;
        let terms = self
            .joint
            .iter()
            .map(|(key, count)| (count as f64 / n_f) * self.pointwise(key, count))
            .collect();
        canonical_sum(terms)
    }
}

impl LocalValues for DiscreteConditionalMutualInformation {
    fn local_values(&self) -> Array1<f64> {
        self.observations
            .iter()
            .map(|key| self.pointwise(key, self.joint.count(key)))
            .collect()
    }
}

impl OptionalLocalValues for DiscreteConditionalMutualInformation {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl ConditionalMutualInformationEstimator for DiscreteConditionalMutualInformation {}

/// Discrete Active Information Storage estimator.
///
/// AI(X, k) = I(x_{i+k}; x^{(k)}_i), the mutual information between each symbol
/// and the length-`k` history preceding it.
pub struct DiscreteActiveInformation {
    inner: DiscreteMutualInformation,
    history_len: usize,
}

impl DiscreteActiveInformation {
    pub fn new(series: &Series, history_len: usize) -> error::Result<Self> {
        validate_history_length(series.len(), history_len)?;
        Ok(Self::from_slice(series.as_slice(), history_len))
    }

    /// Build from a slice with `1 <= history_len < series.len()`.
    pub(crate) fn from_slice(series: &[i32], history_len: usize) -> Self {
        let embedding = history_slices(series, history_len);
        // I(X_next; X_past)
        let inner = DiscreteMutualInformation::from_slices(&embedding.futures, &embedding.histories);
        Self { inner, history_len }
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }
}

impl GlobalValue for DiscreteActiveInformation {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl LocalValues for DiscreteActiveInformation {
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values()
    }
}

impl OptionalLocalValues for DiscreteActiveInformation {
    fn supports_local(&self) -> bool {
        self.inner.supports_local()
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        self.inner.local_values_opt()
    }
}

impl ActiveInformationEstimator for DiscreteActiveInformation {}

/// Discrete Transfer Entropy estimator using the conditional mutual information form.
///
/// T_{S→T}(k) = I(t_{i+1}; s_i | t^{(k)}_i), where the source symbol is the one
/// concurrent with the most recent element of the target history.
pub struct DiscreteTransferEntropy {
    inner: DiscreteConditionalMutualInformation,
    history_len: usize,
}

impl DiscreteTransferEntropy {
    pub fn new(source: &Series, target: &Series, history_len: usize) -> error::Result<Self> {
        check_lengths(source, target)?;
        validate_history_length(target.len(), history_len)?;
        Ok(Self::from_slices(
            source.as_slice(),
            target.as_slice(),
            history_len,
        ))
    }

    /// Build from equal-length slices with `1 <= history_len < target.len()`.
    pub(crate) fn from_slices(source: &[i32], target: &[i32], history_len: usize) -> Self {
        let (embedding, sources) = te_slices(source, target, history_len);
        // TE(S -> T) = I(T_next; S_now | T_past)
        let inner = DiscreteConditionalMutualInformation::from_slices(
            &embedding.futures,
            &sources,
            &embedding.histories,
        );
        Self { inner, history_len }
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }
}

impl GlobalValue for DiscreteTransferEntropy {
    fn global_value(&self) -> f64 {
        self.inner.global_value()
    }
}

impl LocalValues for DiscreteTransferEntropy {
    fn local_values(&self) -> Array1<f64> {
        self.inner.local_values()
    }
}

impl OptionalLocalValues for DiscreteTransferEntropy {
    fn supports_local(&self) -> bool {
        self.inner.supports_local()
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        self.inner.local_values_opt()
    }
}

impl TransferEntropyEstimator for DiscreteTransferEntropy {}
