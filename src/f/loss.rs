use ndarray::Array1;

/// Cross-entropy cost, `-sum(y ln a + (1 - y) ln(1 - a))`. A term whose
/// coefficient is exactly zero contributes nothing, so saturated outputs give
/// a finite cost when they agree with the target.
pub fn cross_entropy(output: &Array1<f64>, desired: &Array1<f64>) -> f64 {
    assert_eq!(
        output.len(),
        desired.len(),
        "output has {} components, target has {}",
        output.len(),
        desired.len()
    );

    output
        .iter()
        .zip(desired.iter())
        .map(|(&a, &y)| -(xlny(y, a) + xlny(1. - y, 1. - a)))
        .sum()
}

fn xlny(x: f64, y: f64) -> f64 {
    if x == 0. {
        return 0.;
    }
    x * y.ln()
}

/// Output-layer error for cross-entropy paired with sigmoid outputs. The
/// sigmoid derivative cancels against the cost derivative, leaving `a - y`.
pub fn cost_delta(output: &Array1<f64>, desired: &Array1<f64>) -> Array1<f64> {
    output - desired
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn cross_entropy_of_confident_correct_output_is_small() {
        let good = cross_entropy(&array![0.99, 0.01], &array![1., 0.]);
        let bad = cross_entropy(&array![0.01, 0.99], &array![1., 0.]);
        assert!(good < 0.05);
        assert!(bad > good);
    }

    #[test]
    fn cross_entropy_at_half_is_ln_two_per_component() {
        let c = cross_entropy(&array![0.5, 0.5, 0.5], &array![1., 0., 1.]);
        assert_abs_diff_eq!(c, 3. * 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn saturated_outputs_stay_finite() {
        assert_eq!(cross_entropy(&array![1.0, 0.0], &array![1., 0.]), 0.);
        assert!(cross_entropy(&array![1.0], &array![0.]).is_infinite());
    }

    #[test]
    #[should_panic(expected = "output has 2 components, target has 1")]
    fn cross_entropy_rejects_mismatched_lengths() {
        cross_entropy(&array![0.5, 0.5], &array![1.]);
    }

    #[test]
    fn cost_delta_is_output_minus_target() {
        assert_eq!(cost_delta(&array![0.7, 0.2], &array![1., 0.]), array![0.7 - 1., 0.2]);
    }
}
