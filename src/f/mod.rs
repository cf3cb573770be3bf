pub mod activation;
pub mod loss;
pub mod shape;

pub use activation::*;
pub use loss::*;
pub use shape::*;
