mod mbgd;
mod optimizer;

pub use mbgd::MiniBatchGradientDescent;
pub use optimizer::Hyper;
