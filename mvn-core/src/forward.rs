//! # Forward Evaluator
//!
//! Layer-by-layer evaluation of a feed-forward stack of multi-valued neurons
//! using at most two scratch vectors, whatever the depth of the network.
//!
//! ```text
//!   input ──► layer 0 ──► slot[0] ──► layer 1 ──► slot[1] ──► layer 2 ──► slot[0] ...
//! ```
//!
//! Layer `l` writes into `slot[l % 2]` and reads from `slot[(l - 1) % 2]`
//! (or from the caller's input when `l == 0`). The last layer may write into a
//! caller-supplied buffer instead. Slots are allocated on first use, sized to
//! the widest layer, and reused by every later pass.
//!
//! The evaluator never owns neurons. Each [`ForwardPass::step`] receives the
//! network through the read-only [`LayerStack`] view, which lets the learning
//! driver correct a layer between two steps of the same pass.

use crate::error::{MvnError, Result};
use crate::logic::{CVector, Cmplx};
use crate::neuron::Neuron;
use num_traits::Zero;

/// Read-only view of a layered network
pub trait LayerStack {
    /// Number of non-input layers
    fn layers_count(&self) -> usize;

    /// Neurons of layer `index`
    fn layer(&self, index: usize) -> &[Neuron];

    /// Width of the widest layer
    fn max_layer_size(&self) -> usize {
        (0..self.layers_count())
            .map(|i| self.layer(i).len())
            .max()
            .unwrap_or(0)
    }

    /// Width of the last layer
    fn output_size(&self) -> usize {
        match self.layers_count() {
            0 => 0,
            n => self.layer(n - 1).len(),
        }
    }
}

/// Reusable scratch space for forward passes
#[derive(Debug, Clone, Default)]
pub struct ForwardEvaluator {
    slots: [CVector; 2],
}

impl ForwardEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scratch slots allocated so far (0, 1 or 2)
    pub fn allocated_slots(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_empty()).count()
    }

    fn reserve<V: LayerStack + ?Sized>(&mut self, view: &V) {
        let width = view.max_layer_size();
        // a single-layer network only ever writes into slot 0
        let needed = view.layers_count().min(2);
        for slot in self.slots.iter_mut().take(needed) {
            if slot.len() < width {
                slot.resize(width, Cmplx::zero());
            }
        }
    }

    /// Starts a pass over `view` reading `input` as the layer-0 source
    pub fn start<'a, V: LayerStack + ?Sized>(
        &'a mut self,
        view: &V,
        input: &'a [Cmplx],
    ) -> ForwardPass<'a> {
        self.reserve(view);
        ForwardPass {
            input,
            slots: &mut self.slots,
            out: None,
            source: Source::External,
            read_len: input.len(),
            layer: 0,
            layers_count: view.layers_count(),
        }
    }

    /// Starts a pass whose last layer writes straight into `out`
    pub fn start_into<'a, V: LayerStack + ?Sized>(
        &'a mut self,
        view: &V,
        input: &'a [Cmplx],
        out: &'a mut [Cmplx],
    ) -> ForwardPass<'a> {
        let mut pass = self.start(view, input);
        pass.out = Some(out);
        pass
    }

    /// Runs a whole pass and writes the network output into `out`
    pub fn output_into<V: LayerStack + ?Sized>(
        &mut self,
        view: &V,
        input: &[Cmplx],
        out: &mut [Cmplx],
    ) -> Result<()> {
        let mut pass = self.start_into(view, input, out);
        while !pass.step(view)? {}
        Ok(())
    }

    /// Runs a whole pass and returns the network output
    pub fn output<V: LayerStack + ?Sized>(&mut self, view: &V, input: &[Cmplx]) -> Result<CVector> {
        let mut result = vec![Cmplx::zero(); view.output_size()];
        self.output_into(view, input, &mut result)?;
        Ok(result)
    }
}

/// Where the current read window lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    External,
    Slot(usize),
    Caller,
}

/// One in-flight evaluation.
///
/// States: `AtLayer(0) → … → AtLayer(L-1) → Done`.
#[derive(Debug)]
pub struct ForwardPass<'a> {
    input: &'a [Cmplx],
    slots: &'a mut [CVector; 2],
    out: Option<&'a mut [Cmplx]>,
    source: Source,
    read_len: usize,
    layer: usize,
    layers_count: usize,
}

impl<'a> ForwardPass<'a> {
    /// Layer that the next `step` evaluates
    pub fn current_layer(&self) -> usize {
        self.layer
    }

    /// True once the last layer has been evaluated
    pub fn is_done(&self) -> bool {
        self.layer >= self.layers_count
    }

    /// Read window of the current layer.
    ///
    /// Once the pass is done this is the network output.
    pub fn input(&self) -> &[Cmplx] {
        match self.source {
            Source::External => self.input,
            Source::Slot(i) => &self.slots[i][..self.read_len],
            Source::Caller => self.out.as_deref().unwrap_or(&[]),
        }
    }

    /// Evaluates the current layer and advances.
    ///
    /// Returns `Ok(true)` once the last layer has been processed; further
    /// calls do nothing and keep returning `Ok(true)`.
    pub fn step<V: LayerStack + ?Sized>(&mut self, view: &V) -> Result<bool> {
        if self.is_done() {
            return Ok(true);
        }

        let neurons = view.layer(self.layer);
        let target = self.layer % 2;
        let last = self.layer + 1 == self.layers_count;

        let [even, odd] = &mut *self.slots;
        let (from_slot, to_slot) = if target == 0 { (&*odd, even) } else { (&*even, odd) };

        let from: &[Cmplx] = match self.source {
            Source::External => self.input,
            _ => &from_slot[..self.read_len],
        };

        if to_slot.len() < neurons.len() {
            to_slot.resize(neurons.len(), Cmplx::zero());
        }

        let (dest, source): (&mut [Cmplx], Source) = match self.out.as_deref_mut() {
            Some(out) if last => {
                if out.len() != neurons.len() {
                    return Err(MvnError::dimension(neurons.len(), out.len()));
                }
                (out, Source::Caller)
            }
            _ => (&mut to_slot[..neurons.len()], Source::Slot(target)),
        };

        for (value, neuron) in dest.iter_mut().zip(neurons) {
            *value = neuron.output(from)?;
        }

        self.source = source;
        self.read_len = neurons.len();
        self.layer += 1;

        Ok(self.is_done())
    }
}
