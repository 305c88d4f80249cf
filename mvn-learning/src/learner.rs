//! Capabilities a teacher needs from the model it trains

use crate::error::LearningResult;
use mvn_core::{CVector, Cmplx, MvnError, Network, Neuron};

/// Difference `desired − actual`, the error a learner is corrected with
pub trait Residual: Sized {
    fn residual(&self, actual: &Self) -> LearningResult<Self>;
}

impl Residual for Cmplx {
    fn residual(&self, actual: &Self) -> LearningResult<Self> {
        Ok(self - actual)
    }
}

impl Residual for CVector {
    fn residual(&self, actual: &Self) -> LearningResult<Self> {
        if self.len() != actual.len() {
            return Err(MvnError::DimensionMismatch {
                expected: self.len(),
                actual: actual.len(),
            }
            .into());
        }
        Ok(self.iter().zip(actual).map(|(d, a)| d - a).collect())
    }
}

/// Model trainable by a [`Teacher`](crate::Teacher)
pub trait Learner {
    /// Output type: `Cmplx` for a neuron, `CVector` for a network
    type Desired: Residual;

    fn output(&self, input: &[Cmplx]) -> mvn_core::Result<Self::Desired>;

    fn learn(&mut self, input: &[Cmplx], error: &Self::Desired, rate: f64) -> mvn_core::Result<()>;
}

impl Learner for Neuron {
    type Desired = Cmplx;

    fn output(&self, input: &[Cmplx]) -> mvn_core::Result<Cmplx> {
        Neuron::output(self, input)
    }

    fn learn(&mut self, input: &[Cmplx], error: &Cmplx, rate: f64) -> mvn_core::Result<()> {
        Neuron::learn(self, input, *error, rate, false)
    }
}

impl Learner for Network {
    type Desired = CVector;

    fn output(&self, input: &[Cmplx]) -> mvn_core::Result<CVector> {
        Network::output(self, input)
    }

    fn learn(&mut self, input: &[Cmplx], error: &CVector, rate: f64) -> mvn_core::Result<()> {
        Network::learn(self, input, error, rate)
    }
}
