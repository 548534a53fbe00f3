use crate::error::Result;
use crate::estimators::approaches::discrete::{
    DiscreteConditionalMutualInformation, DiscreteMutualInformation,
};
use crate::series::{RawSeries, Series};

pub use crate::estimators::traits::{
    ConditionalMutualInformationEstimator, MutualInformationEstimator,
};

/// Mutual information estimation methods for pairs of discrete series.
///
/// Only the bivariate form is provided:
///
/// $$ I(X;Y) = \sum_{x,y} p(x,y) \log_2 \frac{p(x,y)}{p(x)p(y)} $$
///
/// ```rust
/// use infosig::estimators::mutual_information::MutualInformation;
/// use infosig::estimators::GlobalValue;
///
/// let xs = [0i32, 0, 0, 0, 1, 1, 1, 1];
/// let ys = [1i32, 1, 1, 1, 0, 0, 0, 0];
/// let mi = MutualInformation::new_discrete(&xs, &ys).unwrap();
/// assert!((mi.global_value() - 1.0).abs() < 1e-12);
/// ```
pub struct MutualInformation;

impl MutualInformation {
    /// Create a maximum-likelihood discrete mutual information estimator.
    ///
    /// Fails with `LengthMismatch` for series of different lengths and with
    /// `EmptyInput` when both are empty.
    pub fn new_discrete<'a, 'b>(
        x: impl Into<RawSeries<'a>>,
        y: impl Into<RawSeries<'b>>,
    ) -> Result<DiscreteMutualInformation> {
        let (xs, ys) = Series::encode_pair(x, y)?;
        DiscreteMutualInformation::new(&xs, &ys)
    }

    /// Create a discrete conditional mutual information estimator I(X; Y | Z).
    pub fn new_discrete_conditional<'a, 'b, 'c>(
        x: impl Into<RawSeries<'a>>,
        y: impl Into<RawSeries<'b>>,
        cond: impl Into<RawSeries<'c>>,
    ) -> Result<DiscreteConditionalMutualInformation> {
        let (xs, ys) = Series::encode_pair(x, y)?;
        let zs = Series::encode(cond)?;
        DiscreteConditionalMutualInformation::new(&xs, &ys, &zs)
    }
}
