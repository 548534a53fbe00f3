pub mod discrete;

// Unified re-exports so tests and users can import
// infosig::estimators::approaches::* ergonomically.
pub use discrete::mle::DiscreteEntropy;
pub use discrete::{
    DiscreteActiveInformation, DiscreteConditionalMutualInformation, DiscreteMutualInformation,
    DiscreteTransferEntropy,
};
