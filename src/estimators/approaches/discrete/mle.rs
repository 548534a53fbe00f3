// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::estimators::approaches::discrete::discrete_utils::{FrequencyTable, canonical_sum};
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};
use crate::series::Series;
use ndarray::Array1;

/// Shannon entropy estimator for discrete data using maximum likelihood (base 2, bits).
///
/// Computes H = -Σ p_i log2 p_i from empirical probabilities p_i = n_i/N.
/// Local values are -log2 p(x) for each sample.
pub struct DiscreteEntropy {
    data: Vec<i32>,
    table: FrequencyTable<i32>,
}

impl DiscreteEntropy {
    pub fn new(series: &Series) -> Self {
        Self::from_slice(series.as_slice())
    }

    pub(crate) fn from_slice(data: &[i32]) -> Self {
        let table = FrequencyTable::from_symbols(data);
        Self {
            data: data.to_vec(),
            table,
        }
    }

    pub fn table(&self) -> &FrequencyTable<i32> {
        &self.table
    }
}

impl GlobalValue for DiscreteEntropy {
    /// Separate implementation, not inferred from local_values.
    fn global_value(&self) -> f64 {
        let n_f = self.table.total() as f64;
        let terms = self
            .table
            .iter()
            .map(|(_, cnt)| {
                let p = cnt as f64 / n_f;
                p * (n_f / cnt as f64).log2()
            })
            .collect();
        canonical_sum(terms)
    }
}

impl LocalValues for DiscreteEntropy {
    fn local_values(&self) -> Array1<f64> {
        let n_f = self.table.total() as f64;
        self.data
            .iter()
            .map(|v| (n_f / self.table.count(v) as f64).log2())
            .collect()
    }
}

impl OptionalLocalValues for DiscreteEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
