use std::f64::consts::E;

use ndarray::Array1;

pub fn sigmoid(x: f64) -> f64 {
    1. / (1. + E.powf(-x))
}

/// Elementwise logistic function.
pub fn sigmoid_vec(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(sigmoid)
}

/// Derivative of the logistic function, `s(z) * (1 - s(z))`.
pub fn sigmoid_prime(z: &Array1<f64>) -> Array1<f64> {
    z.mapv(|v| {
        let s = sigmoid(v);
        s * (1. - s)
    })
}
