use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteActiveInformation;
use crate::series::{RawSeries, Series};

pub use crate::estimators::traits::ActiveInformationEstimator;

/// Active information storage of a single discrete series.
///
/// The mutual information between each symbol and the `k` symbols preceding it:
///
/// $$ A_X(k) = \sum_{x_{i+1}, x^{(k)}_i} p(x_{i+1}, x^{(k)}_i)
///     \log_2 \frac{p(x_{i+1}, x^{(k)}_i)}{p(x_{i+1}) p(x^{(k)}_i)} $$
///
/// See Lizier, J.T. et al. (2012) "Local measures of information storage in
/// complex distributed computation". Information Sciences 208: 39-54.
pub struct ActiveInformation;

impl ActiveInformation {
    /// Create a maximum-likelihood discrete active information estimator.
    ///
    /// The history length must satisfy `1 <= k < len`, otherwise
    /// `InvalidHistoryLength` is returned.
    pub fn new_discrete<'a>(
        series: impl Into<RawSeries<'a>>,
        history_len: usize,
    ) -> Result<DiscreteActiveInformation> {
        let series = Series::encode(series)?;
        DiscreteActiveInformation::new(&series, history_len)
    }
}
