//! Trains a continuous [2, 2, 1] network on three phase-encoded samples,
//! then prints the learned weights as JSON.
//!
//! ```text
//! cargo run -p mvn-learning --example three_classes
//! ```

use mvn_core::NetworkConfig;
use mvn_learning::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG: &str = r#"{ "layer_sizes": [2, 2, 1], "k_values": [0, 0], "seed": 2026 }"#;

fn main() -> LearningResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "three_classes=info,mvn_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut net = NetworkConfig::from_json(CONFIG)?.build()?;

    let samples = vec![
        continuous_sample(&[4.23, 2.10], &[0.76])?,
        continuous_sample(&[5.34, 1.24], &[2.56])?,
        continuous_sample(&[2.10, 0.00], &[5.35])?,
    ];

    let mut teacher = Teacher::with_samples(&mut net, samples)
        .with_config(TrainingConfig { learning_rate: 1.0, max_epochs: 1_000 })?;
    let before = teacher.mse(&PhaseSquareError)?;
    let report = teacher.train_until_mse(&PhaseSquareError, &PhaseTolerancePicker::new(0.05), 0.0025)?;
    tracing::info!(
        before,
        after = report.mse,
        epochs = report.epochs,
        converged = report.converged,
        "training finished"
    );

    let stats = net.stats();
    tracing::info!(layers = stats.layers, neurons = stats.neurons, weights = stats.weights, "network");
    println!("{}", net.export_weights().to_json()?);

    Ok(())
}
