//! # mvn-learning - Training Harness for Multi-Valued Neurons
//!
//! Generic teacher over anything that can produce an output and take an
//! error-correction step, plus the encoders that turn raw labels into
//! unit-circle samples.
//!
//! ## Modules
//!
//! - **sample**: input/desired pairs
//! - **learner**: the `Learner` capability, implemented for `Neuron` and `Network`
//! - **predicates**: hit matching, sample picking and square error
//! - **teacher**: epoch driver, hit counting and MSE
//! - **transforms**: discrete and continuous value encoders
//! - **config**: training configuration
//!
//! ## Example
//!
//! ```
//! use mvn_core::Neuron;
//! use mvn_learning::prelude::*;
//!
//! // 3-valued max(x1, x2)
//! let mut neuron = Neuron::seeded(3, 2, 3);
//! let mut teacher = Teacher::new(&mut neuron);
//! for a in 0..3 {
//!     for b in 0..3 {
//!         teacher.add_sample(discrete_sample(&[a, b], a.max(b), 3).unwrap());
//!     }
//! }
//!
//! let report = teacher.train_until_hits(&SectorMatch::new(3)).unwrap();
//! assert!(report.converged);
//! ```

pub mod error;
pub use error::{LearningError, LearningResult};

pub mod sample;
pub use sample::Sample;

pub mod learner;
pub use learner::{Learner, Residual};

pub mod predicates;
pub use predicates::{AlwaysPick, Match, PhaseSquareError, PhaseTolerancePicker, Picker, SectorMatch, SquareError};

pub mod config;
pub use config::TrainingConfig;

pub mod teacher;
pub use teacher::{EpochReport, Teacher};

pub mod transforms;

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::config::TrainingConfig;
    pub use crate::error::{LearningError, LearningResult};
    pub use crate::learner::{Learner, Residual};
    pub use crate::predicates::*;
    pub use crate::sample::Sample;
    pub use crate::teacher::{EpochReport, Teacher};
    pub use crate::transforms::*;
}
