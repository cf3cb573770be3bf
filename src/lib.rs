pub mod batch;
pub mod data;
mod error;
pub mod f;
mod network;
pub mod optimizers;

pub use data::{as_dataset, Dataset, Sample};
pub use error::{NetworkError, Result};
pub use network::{Gradients, Network};
pub use optimizers::{Hyper, MiniBatchGradientDescent};
