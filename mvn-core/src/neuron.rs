//! # Multi-Valued Neuron
//!
//! A neuron with `N` inputs owns `N + 1` complex weights (index 0 is the bias)
//! and a logic order `k`: `k == 0` is the continuous neuron, `k > 0` snaps its
//! output onto the k-th roots of unity.
//!
//! Learning uses the error-correction rule: the weighted sum is moved by the
//! error itself, spread evenly over the `N + 1` weights. No gradient is taken.

use crate::error::{MvnError, Result};
use crate::logic::{activation, CVector, Cmplx};
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Multi-valued neuron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// Bias followed by one weight per input
    weights: CVector,
    /// Logic order; 0 means continuous
    k: usize,
}

impl Neuron {
    /// Creates a neuron in k-valued logic with `inputs` inputs.
    ///
    /// Real and imaginary parts of every weight are drawn from `[0, 1)`.
    pub fn new<R: Rng>(k: usize, inputs: usize, rng: &mut R) -> Self {
        let weights = (0..=inputs)
            .map(|_| Cmplx::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
            .collect();
        Self { weights, k }
    }

    /// Creates a neuron whose weights come from a generator seeded with `seed`
    pub fn seeded(k: usize, inputs: usize, seed: u64) -> Self {
        Self::new(k, inputs, &mut StdRng::seed_from_u64(seed))
    }

    /// Creates a neuron from an explicit weight vector (bias first)
    pub fn with_weights(k: usize, weights: CVector) -> Result<Self> {
        if weights.is_empty() {
            return Err(MvnError::InvalidConstruction(
                "a neuron needs at least its bias weight".into(),
            ));
        }
        Ok(Self { weights, k })
    }

    /// Logic order
    pub fn k(&self) -> usize {
        self.k
    }

    /// True for a discrete (k > 0) neuron
    pub fn is_discrete(&self) -> bool {
        self.k > 0
    }

    /// Number of inputs, excluding the bias
    pub fn input_count(&self) -> usize {
        self.weights.len() - 1
    }

    /// Weights, bias first
    pub fn weights(&self) -> &[Cmplx] {
        &self.weights
    }

    /// Mutable weights, bias first. The length cannot change.
    pub fn weights_mut(&mut self) -> &mut [Cmplx] {
        &mut self.weights
    }

    /// Weight applied to the i-th input
    pub fn weight_for_input(&self, i: usize) -> Result<Cmplx> {
        self.weights.get(i + 1).copied().ok_or_else(|| {
            MvnError::InvalidArgument(format!(
                "input {i} out of range for a neuron with {} inputs",
                self.input_count()
            ))
        })
    }

    fn check_inputs(&self, inputs: &[Cmplx]) -> Result<()> {
        if inputs.len() != self.input_count() {
            return Err(MvnError::dimension(self.input_count(), inputs.len()));
        }
        Ok(())
    }

    /// `w0 + w1·x1 + … + wN·xN`
    pub fn weighted_sum(&self, inputs: &[Cmplx]) -> Result<Cmplx> {
        self.check_inputs(inputs)?;
        Ok(self.sum_unchecked(inputs))
    }

    fn sum_unchecked(&self, inputs: &[Cmplx]) -> Cmplx {
        let (bias, rest) = (self.weights[0], &self.weights[1..]);
        rest.iter().zip(inputs).fold(bias, |z, (w, x)| z + w * x)
    }

    /// Activation applied to the weighted sum
    pub fn output(&self, inputs: &[Cmplx]) -> Result<Cmplx> {
        activation(self.k, self.weighted_sum(inputs)?)
    }

    /// Error-correction learning step.
    ///
    /// `factor = error·rate/(N+1)`, additionally divided by `|z|` when
    /// `variable_rate` is set; then `w0 += factor` and
    /// `wi += factor·conj(xi)`. Nothing is written when an error is returned.
    pub fn learn(
        &mut self,
        inputs: &[Cmplx],
        error: Cmplx,
        rate: f64,
        variable_rate: bool,
    ) -> Result<()> {
        let factor = self.correction_factor(inputs, error, rate, variable_rate)?;
        self.apply_correction(inputs, factor);
        Ok(())
    }

    /// Step size of a learning step, computed without touching the weights.
    ///
    /// Fails with `SingularCorrection` on a zero weighted sum under the
    /// variable rate, or whenever the factor is not finite.
    pub(crate) fn correction_factor(
        &self,
        inputs: &[Cmplx],
        error: Cmplx,
        rate: f64,
        variable_rate: bool,
    ) -> Result<Cmplx> {
        self.check_inputs(inputs)?;

        let mut factor = error * rate / self.weights.len() as f64;

        if variable_rate {
            let z = self.sum_unchecked(inputs);
            if z.is_zero() {
                return Err(MvnError::SingularCorrection(
                    "variable rate on a zero weighted sum".into(),
                ));
            }
            factor /= z.norm();
        }

        if !factor.is_finite() {
            return Err(MvnError::SingularCorrection(format!(
                "non-finite correction factor {factor}"
            )));
        }

        Ok(factor)
    }

    /// `w0 += factor`, `wi += factor·conj(xi)`; `inputs` must already match
    /// the arity
    pub(crate) fn apply_correction(&mut self, inputs: &[Cmplx], factor: Cmplx) {
        let (bias, rest) = self.weights.split_at_mut(1);
        bias[0] += factor;
        for (w, x) in rest.iter_mut().zip(inputs) {
            *w += factor * x.conj();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{root_of_unity, sector_number};

    fn c(re: f64, im: f64) -> Cmplx {
        Cmplx::new(re, im)
    }

    #[test]
    fn test_random_weights_in_unit_square() {
        let neuron = Neuron::seeded(3, 5, 7);
        assert_eq!(neuron.weights().len(), 6);
        assert_eq!(neuron.input_count(), 5);
        for w in neuron.weights() {
            assert!((0.0..1.0).contains(&w.re));
            assert!((0.0..1.0).contains(&w.im));
        }
    }

    #[test]
    fn test_same_seed_same_weights() {
        assert_eq!(Neuron::seeded(0, 4, 11), Neuron::seeded(0, 4, 11));
        assert_ne!(Neuron::seeded(0, 4, 11), Neuron::seeded(0, 4, 12));
    }

    #[test]
    fn test_weighted_sum() {
        let neuron = Neuron::with_weights(0, vec![c(1.0, 0.0), c(0.0, 1.0), c(2.0, 0.0)]).unwrap();
        let z = neuron.weighted_sum(&[c(1.0, 0.0), c(0.0, 1.0)]).unwrap();
        // 1 + i·1 + 2·i
        assert!((z - c(1.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let mut neuron = Neuron::seeded(2, 2, 1);
        let before = neuron.clone();
        assert_eq!(
            neuron.output(&[c(1.0, 0.0)]),
            Err(MvnError::DimensionMismatch { expected: 2, actual: 1 })
        );
        assert!(neuron.learn(&[c(1.0, 0.0); 3], c(1.0, 0.0), 1.0, false).is_err());
        assert_eq!(neuron, before);
    }

    #[test]
    fn test_output_is_deterministic() {
        let neuron = Neuron::seeded(5, 3, 99);
        let x = [c(0.2, -0.4), c(1.0, 1.0), c(-0.3, 0.0)];
        assert_eq!(neuron.output(&x).unwrap(), neuron.output(&x).unwrap());
    }

    #[test]
    fn test_learn_moves_sum_towards_target() {
        let mut neuron = Neuron::with_weights(0, vec![Cmplx::zero(), Cmplx::zero()]).unwrap();
        let x = [c(1.0, 0.0)];
        for error in [c(1.0, 0.0), c(-0.5, 2.0), c(0.0, -3.0)] {
            neuron.weights_mut().fill(Cmplx::zero());
            let z0 = neuron.weighted_sum(&x).unwrap();
            let target = z0 + error;
            neuron.learn(&x, error, 1.0, false).unwrap();
            let z1 = neuron.weighted_sum(&x).unwrap();
            assert!((target - z1).norm() < (target - z0).norm());
        }
    }

    #[test]
    fn test_learn_on_unit_inputs_is_exact() {
        // with |xi| = 1 the rule moves the weighted sum by exactly `error`
        let mut neuron = Neuron::seeded(0, 3, 5);
        let x = [
            root_of_unity(1, 4).unwrap(),
            root_of_unity(2, 5).unwrap(),
            root_of_unity(0, 3).unwrap(),
        ];
        let error = c(0.3, -0.8);
        let z0 = neuron.weighted_sum(&x).unwrap();
        neuron.learn(&x, error, 1.0, false).unwrap();
        let z1 = neuron.weighted_sum(&x).unwrap();
        assert!((z1 - (z0 + error)).norm() < 1e-12);
    }

    #[test]
    fn test_variable_rate_on_zero_sum_fails() {
        let mut neuron = Neuron::with_weights(0, vec![Cmplx::zero(); 2]).unwrap();
        let result = neuron.learn(&[c(1.0, 0.0)], c(1.0, 0.0), 1.0, true);
        assert!(matches!(result, Err(MvnError::SingularCorrection(_))));
        assert!(neuron.weights().iter().all(|w| w.is_zero()));
    }

    #[test]
    fn test_variable_rate_on_subnormal_sum_fails() {
        // |z| = 1e-320 is nonzero but dividing by it overflows
        let weights = vec![c(1e-320, 0.0), Cmplx::zero()];
        let mut neuron = Neuron::with_weights(0, weights.clone()).unwrap();
        let result = neuron.learn(&[c(1.0, 0.0)], c(0.5, 0.5), 1.0, true);
        assert!(matches!(result, Err(MvnError::SingularCorrection(_))));
        assert_eq!(neuron.weights(), weights.as_slice());
    }

    #[test]
    fn test_non_finite_error_is_rejected() {
        let mut neuron = Neuron::seeded(0, 1, 2);
        let before = neuron.clone();
        let result = neuron.learn(&[c(1.0, 0.0)], c(f64::NAN, 0.0), 1.0, false);
        assert!(matches!(result, Err(MvnError::SingularCorrection(_))));
        assert_eq!(neuron, before);
    }

    #[test]
    fn test_discrete_neuron_outputs_root() {
        let neuron = Neuron::seeded(4, 2, 3);
        let out = neuron.output(&[c(1.0, 0.0), c(0.0, 1.0)]).unwrap();
        let n = sector_number(4, out);
        assert!((out - root_of_unity(n, 4).unwrap()).norm() < 1e-12);
        assert!(neuron.is_discrete());
    }

    #[test]
    fn test_weight_for_input() {
        let neuron = Neuron::with_weights(0, vec![c(9.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)]).unwrap();
        assert_eq!(neuron.weight_for_input(1).unwrap(), c(2.0, 0.0));
        assert!(neuron.weight_for_input(2).is_err());
        assert!(Neuron::with_weights(0, vec![]).is_err());
    }
}
