//! # mvn-core - Multi-Valued Neurons
//!
//! Neurons whose state lives on the complex unit circle, and the multi-layer
//! network (MLMVN) built from them.
//!
//! ## Modules
//!
//! - **logic**: roots of unity, phases, sectors and the activation function
//! - **neuron**: the multi-valued neuron and its error-correction rule
//! - **forward**: double-buffered forward evaluator
//! - **network**: MLMVN construction, backward error propagation, learning,
//!   weight export and import
//! - **config**: serializable network configuration
//!
//! ## Example
//!
//! ```
//! use mvn_core::prelude::*;
//!
//! let mut net = Network::seeded(&[2, 2, 1], &[0, 0], 7).unwrap();
//! let x = vec![Cmplx::from_polar(1.0, 0.5), Cmplx::from_polar(1.0, 2.0)];
//! let y = net.output(&x).unwrap();
//! let desired = Cmplx::from_polar(1.0, 1.0);
//! net.learn(&x, &[desired - y[0]], 1.0).unwrap();
//! ```

pub mod error;
pub use error::{MvnError, Result};

pub mod logic;
pub use logic::{
    activation, phase, phase_distance, root_of_unity, sector_number, sector_number_with_epsilon,
    CVector, Cmplx, SECTOR_EPSILON, TWO_PI,
};

pub mod neuron;
pub use neuron::Neuron;

pub mod forward;
pub use forward::{ForwardEvaluator, ForwardPass, LayerStack};

pub mod network;
pub use network::{Layer, Network, NetworkStats, WeightSnapshot};

pub mod config;
pub use config::NetworkConfig;

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::config::NetworkConfig;
    pub use crate::error::{MvnError, Result};
    pub use crate::forward::{ForwardEvaluator, LayerStack};
    pub use crate::logic::*;
    pub use crate::network::{Network, NetworkStats, WeightSnapshot};
    pub use crate::neuron::Neuron;
}
