use serde::{Deserialize, Serialize};

/// Training hyperparameters. Missing fields fall back to their defaults when
/// deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyper {
    pub epochs: usize,
    pub mini_batch_size: usize,
    pub learning_rate: f64,
}

impl Hyper {
    pub fn new() -> Hyper {
        Hyper::default()
    }
}

impl Default for Hyper {
    fn default() -> Self {
        Hyper {
            epochs: 30,
            mini_batch_size: 10,
            learning_rate: 0.5,
        }
    }
}
