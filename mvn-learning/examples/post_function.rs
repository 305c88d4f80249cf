//! Trains one 3-valued neuron on `max(x1, x2)`.
//!
//! ```text
//! RUST_LOG=mvn_learning=debug cargo run -p mvn-learning --example post_function
//! ```

use mvn_core::{Neuron, sector_number};
use mvn_learning::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const K: usize = 3;

fn main() -> LearningResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "post_function=info,mvn_learning=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut samples = Vec::new();
    for a in 0..K {
        for b in 0..K {
            samples.push(discrete_sample(&[a, b], a.max(b), K)?);
        }
    }

    let mut neuron = Neuron::new(K, 2, &mut rand::thread_rng());
    let report = Teacher::with_samples(&mut neuron, samples).train_until_hits(&SectorMatch::new(K))?;
    tracing::info!(epochs = report.epochs, converged = report.converged, "training finished");

    for a in 0..K {
        for b in 0..K {
            let out = neuron.output(&discrete_vector(&[a, b], K)?)?;
            tracing::info!(a, b, max = sector_number(K, out), "post");
        }
    }
    tracing::info!(weights = ?neuron.weights(), "learned weights");

    Ok(())
}
