use crate::error::Result;
use crate::estimators::approaches::discrete::DiscreteTransferEntropy;
use crate::series::{RawSeries, Series};

pub use crate::estimators::traits::TransferEntropyEstimator;

/// Transfer entropy between discrete series.
///
/// Introduced by Schreiber (2000) to quantify information transfer from a
/// source to a target while conditioning out the target's own history:
///
/// $$ T_{S \rightarrow T}(k) = \sum p(t_{i+1}, t^{(k)}_i, s_i)
///     \log_2 \frac{p(t_{i+1}, s_i \mid t^{(k)}_i)}{p(t_{i+1} \mid t^{(k)}_i) p(s_i \mid t^{(k)}_i)} $$
///
/// `s_i` is the source symbol concurrent with the last element of the target
/// history `t^{(k)}_i`.
///
/// Schreiber, T. (2000) "Measuring information transfer". Physical Review
/// Letters 85 (2): 461-464. doi:10.1103/PhysRevLett.85.461
pub struct TransferEntropy;

impl TransferEntropy {
    /// Create a maximum-likelihood discrete transfer entropy estimator.
    pub fn new_discrete<'a, 'b>(
        source: impl Into<RawSeries<'a>>,
        target: impl Into<RawSeries<'b>>,
        history_len: usize,
    ) -> Result<DiscreteTransferEntropy> {
        let (source, target) = Series::encode_pair(source, target)?;
        DiscreteTransferEntropy::new(&source, &target, history_len)
    }
}
