use crate::error::Result;
use crate::estimators::approaches::discrete;
use crate::series::{RawSeries, Series};
pub use crate::estimators::traits::LocalValues;

/// Entropy estimation methods for discrete symbol series
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new discrete (maximum likelihood) entropy estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Raw observations, validated and normalized by [`Series::encode`]
    ///
    /// # Returns
    ///
    /// A discrete entropy estimator measuring in bits
    pub fn new_discrete<'a>(data: impl Into<RawSeries<'a>>) -> Result<discrete::mle::DiscreteEntropy> {
        let series = Series::encode(data)?;
        Ok(discrete::mle::DiscreteEntropy::new(&series))
    }
}
