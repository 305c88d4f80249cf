//! Training samples

use mvn_core::CVector;
use serde::{Deserialize, Serialize};

/// Input vector paired with the output the learner should produce.
///
/// `D` is `Cmplx` for a single neuron and `CVector` for a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample<D> {
    pub input: CVector,
    pub desired: D,
}

impl<D> Sample<D> {
    pub fn new(input: CVector, desired: D) -> Self {
        Self { input, desired }
    }
}
