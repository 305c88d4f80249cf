//! # Multi-Layer MVN Network
//!
//! Feed-forward network of multi-valued neurons trained without gradients.
//!
//! ## Learning step
//!
//! 1. **Backward pass**: the output-layer errors are divided by `s(m)` and
//!    propagated towards the input through the reciprocals of the connecting
//!    weights:
//!
//!    ```text
//!    δ(k, j) = 1/s(j) · Σ_i δ(i, j+1) / w_k(i, j+1)      s(0) = 1, s(j) = 1 + N(j-1)
//!    ```
//!
//! 2. **Forward pass with correction**: the evaluator walks the layers; each
//!    layer is corrected with its exact input window before its outputs are
//!    computed for the next layer. Hidden layers use the variable rate
//!    (division by `|z|`), the output layer does not.
//!
//! Every local error is computed before any weight changes, since hidden
//! errors read the pre-update weights of the following layer.

use crate::error::{MvnError, Result};
use crate::forward::{ForwardEvaluator, LayerStack};
use crate::logic::{CVector, Cmplx};
use crate::neuron::Neuron;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Neurons sharing the same inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    fn random<R: Rng>(k: usize, inputs: usize, size: usize, rng: &mut R) -> Self {
        let neurons = (0..size).map(|_| Neuron::new(k, inputs, rng)).collect();
        Self { neurons }
    }

    /// Number of neurons
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }
}

impl LayerStack for [Layer] {
    fn layers_count(&self) -> usize {
        self.len()
    }

    fn layer(&self, index: usize) -> &[Neuron] {
        &self[index].neurons
    }
}

/// Size summary of a network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Non-input layers
    pub layers: usize,
    pub neurons: usize,
    /// Weights including biases
    pub weights: usize,
}

/// Flat export of every weight, layer-major then neuron-major, with the
/// logic order of each neuron
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSnapshot {
    pub weights: CVector,
    pub k_values: Vec<usize>,
}

impl WeightSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Multi-layer network of multi-valued neurons (MLMVN)
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    /// Local errors of the last learning step, one vector per layer
    local_errors: Vec<CVector>,
    input_size: usize,
    max_layer_size: usize,
    evaluator: ForwardEvaluator,
    /// Correction factors of the layer being corrected
    corrections: CVector,
}

impl Network {
    /// Builds a network.
    ///
    /// `sizes` lists the input count, then every hidden layer, then the
    /// output layer. `k_values` holds one logic order per non-input layer.
    pub fn new<R: Rng>(sizes: &[usize], k_values: &[usize], rng: &mut R) -> Result<Self> {
        validate_topology(sizes, k_values)?;

        let layers: Vec<Layer> = sizes
            .windows(2)
            .zip(k_values)
            .map(|(pair, &k)| Layer::random(k, pair[0], pair[1], rng))
            .collect();
        let local_errors = sizes[1..].iter().map(|&n| vec![Cmplx::zero(); n]).collect();
        let max_layer_size = sizes[1..].iter().copied().max().unwrap_or(0);

        tracing::debug!(?sizes, ?k_values, "built MLMVN");

        Ok(Self {
            layers,
            local_errors,
            input_size: sizes[0],
            max_layer_size,
            evaluator: ForwardEvaluator::new(),
            corrections: vec![Cmplx::zero(); max_layer_size],
        })
    }

    /// Builds a network with weights drawn from a generator seeded with `seed`
    pub fn seeded(sizes: &[usize], k_values: &[usize], seed: u64) -> Result<Self> {
        Self::new(sizes, k_values, &mut StdRng::seed_from_u64(seed))
    }

    /// Number of non-input layers
    pub fn layers_count(&self) -> usize {
        self.layers.len()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::len)
    }

    pub fn max_layer_size(&self) -> usize {
        self.max_layer_size
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// i-th neuron of layer `layer`
    pub fn neuron(&self, i: usize, layer: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.neurons.get(i)
    }

    /// Mutable i-th neuron of layer `layer`
    pub fn neuron_mut(&mut self, i: usize, layer: usize) -> Option<&mut Neuron> {
        self.layers.get_mut(layer)?.neurons.get_mut(i)
    }

    /// Local errors computed by the most recent `learn` call
    pub fn layer_errors(&self, layer: usize) -> Option<&[Cmplx]> {
        self.local_errors.get(layer).map(Vec::as_slice)
    }

    pub fn stats(&self) -> NetworkStats {
        let mut stats = NetworkStats { layers: self.layers.len(), neurons: 0, weights: 0 };
        let mut inputs = self.input_size;
        for layer in &self.layers {
            stats.neurons += layer.len();
            stats.weights += layer.len() * (inputs + 1);
            inputs = layer.len();
        }
        stats
    }

    /// Network output for `inputs`, computed with a fresh evaluator
    pub fn output(&self, inputs: &[Cmplx]) -> Result<CVector> {
        ForwardEvaluator::new().output(self, inputs)
    }

    /// One learning step towards `output + errors`.
    ///
    /// `errors` are the desired output minus the current output. Input and
    /// error lengths and every local error are checked before anything is
    /// written. Each layer is corrected as a whole: its correction factors are
    /// computed first, so a `SingularCorrection` leaves the failing layer and
    /// every later one untouched while earlier layers keep their update.
    pub fn learn(&mut self, inputs: &[Cmplx], errors: &[Cmplx], rate: f64) -> Result<()> {
        if inputs.len() != self.input_size {
            return Err(MvnError::dimension(self.input_size, inputs.len()));
        }
        if errors.len() != self.output_size() {
            return Err(MvnError::dimension(self.output_size(), errors.len()));
        }

        self.propagate_errors(errors)?;

        tracing::trace!(
            error_norm = errors.iter().map(|e| e.norm_sqr()).sum::<f64>().sqrt(),
            "correcting MLMVN weights"
        );

        let last = self.layers.len() - 1;
        let Self { layers, local_errors, evaluator, corrections, .. } = self;
        let mut pass = evaluator.start(layers.as_slice(), inputs);

        loop {
            let index = pass.current_layer();
            let variable_rate = index < last;
            let layer_inputs = pass.input();
            let layer = &mut layers[index];

            for ((factor, neuron), &error) in corrections.iter_mut().zip(&layer.neurons).zip(&local_errors[index]) {
                *factor = neuron.correction_factor(layer_inputs, error, rate, variable_rate)?;
            }
            for (neuron, &factor) in layer.neurons.iter_mut().zip(corrections.iter()) {
                neuron.apply_correction(layer_inputs, factor);
            }

            if pass.step(layers.as_slice())? {
                break;
            }
        }

        Ok(())
    }

    /// Backward pass: fills `local_errors` for every layer
    fn propagate_errors(&mut self, errors: &[Cmplx]) -> Result<()> {
        let m = self.layers.len() - 1;

        let s_m = self.s(m);
        for (delta, &error) in self.local_errors[m].iter_mut().zip(errors) {
            *delta = error / s_m;
            if !delta.is_finite() {
                return Err(MvnError::SingularCorrection(format!("non-finite output error {error}")));
            }
        }

        for j in (0..m).rev() {
            let s_j = self.s(j);
            let (head, tail) = self.local_errors.split_at_mut(j + 1);
            let (current, next) = (&mut head[j], &tail[0]);
            let next_layer = &self.layers[j + 1];

            for (k, delta) in current.iter_mut().enumerate() {
                let mut sum = Cmplx::zero();
                for (i, (neuron, &next_delta)) in next_layer.neurons.iter().zip(next).enumerate() {
                    let weight = neuron.weight_for_input(k)?;
                    let term = next_delta / weight;
                    // tiny weights underflow |w|² to zero inside the division
                    if weight.is_zero() || !term.is_finite() {
                        return Err(MvnError::SingularCorrection(format!(
                            "weight {weight} from neuron {k} of layer {j} to neuron {i} of layer {} cannot be inverted",
                            j + 1
                        )));
                    }
                    sum += term;
                }
                *delta = sum / s_j;
                if !delta.is_finite() {
                    return Err(MvnError::SingularCorrection(format!(
                        "local error of neuron {k} in layer {j} overflowed"
                    )));
                }
            }
        }

        Ok(())
    }

    fn s(&self, j: usize) -> f64 {
        if j == 0 { 1.0 } else { 1.0 + self.layers[j - 1].len() as f64 }
    }

    /// Flattens every weight, layer-major then neuron-major
    pub fn export_weights(&self) -> WeightSnapshot {
        let neurons = self.layers.iter().flat_map(|layer| &layer.neurons);
        WeightSnapshot {
            weights: neurons.clone().flat_map(|n| n.weights().iter().copied()).collect(),
            k_values: neurons.map(Neuron::k).collect(),
        }
    }

    /// Replaces every neuron from a snapshot of the same topology.
    ///
    /// The new layers are built and checked first; on error the network is
    /// left untouched.
    pub fn load_weights(&mut self, snapshot: &WeightSnapshot) -> Result<()> {
        let stats = self.stats();
        if snapshot.weights.len() != stats.weights {
            return Err(MvnError::SizeMismatch {
                what: "weights",
                expected: stats.weights,
                actual: snapshot.weights.len(),
            });
        }
        if snapshot.k_values.len() != stats.neurons {
            return Err(MvnError::SizeMismatch {
                what: "k values",
                expected: stats.neurons,
                actual: snapshot.k_values.len(),
            });
        }

        let mut weights = snapshot.weights.as_slice();
        let mut k_values = snapshot.k_values.iter();
        let mut layers = Vec::with_capacity(self.layers.len());

        for layer in &self.layers {
            let mut neurons = Vec::with_capacity(layer.len());
            for (current, &k) in layer.neurons.iter().zip(k_values.by_ref()) {
                let (own, rest) = weights.split_at(current.weights().len());
                neurons.push(Neuron::with_weights(k, own.to_vec())?);
                weights = rest;
            }
            layers.push(Layer { neurons });
        }

        self.layers = layers;
        tracing::debug!(weights = stats.weights, neurons = stats.neurons, "loaded MLMVN weights");
        Ok(())
    }
}

impl LayerStack for Network {
    fn layers_count(&self) -> usize {
        self.layers.len()
    }

    fn layer(&self, index: usize) -> &[Neuron] {
        &self.layers[index].neurons
    }

    fn max_layer_size(&self) -> usize {
        self.max_layer_size
    }
}

pub(crate) fn validate_topology(sizes: &[usize], k_values: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(MvnError::InvalidConstruction(format!(
            "need an input size and at least one layer, got {} sizes",
            sizes.len()
        )));
    }
    if k_values.len() != sizes.len() - 1 {
        return Err(MvnError::InvalidConstruction(format!(
            "{} layers need {} k values, got {}",
            sizes.len() - 1,
            sizes.len() - 1,
            k_values.len()
        )));
    }
    if let Some(layer) = sizes[1..].iter().position(|&n| n == 0) {
        return Err(MvnError::InvalidConstruction(format!("layer {layer} has no neurons")));
    }
    Ok(())
}
