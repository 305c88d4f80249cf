//! Network configuration

use crate::error::Result;
use crate::network::{validate_topology, Network};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Topology and initialization of an MLMVN
///
/// ```
/// use mvn_core::NetworkConfig;
///
/// let config = NetworkConfig::from_json(
///     r#"{ "layer_sizes": [2, 2, 1], "k_values": [0, 0], "seed": 7 }"#,
/// ).unwrap();
/// let net = config.build().unwrap();
/// assert_eq!(net.stats().weights, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Input count, hidden layer sizes, output layer size
    pub layer_sizes: Vec<usize>,
    /// Logic order of each non-input layer (0 = continuous)
    pub k_values: Vec<usize>,
    /// Seed for weight initialization; `None` uses the thread generator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(layer_sizes: Vec<usize>, k_values: Vec<usize>) -> Self {
        Self { layer_sizes, k_values, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the topology without building anything
    pub fn validate(&self) -> Result<()> {
        validate_topology(&self.layer_sizes, &self.k_values)
    }

    pub fn build(&self) -> Result<Network> {
        match self.seed {
            Some(seed) => Network::new(
                &self.layer_sizes,
                &self.k_values,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Network::new(&self.layer_sizes, &self.k_values, &mut rand::thread_rng()),
        }
    }
}

impl Network {
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        config.build()
    }
}
