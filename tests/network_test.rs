use approx::assert_abs_diff_eq;
use ndarray::{array, Array1, Array2};
use neuralnet::{f, Network, NetworkError, Sample};

#[test]
fn test_weights_and_biases_follow_layer_sizes() {
    for sizes in [vec![1, 1], vec![2, 3, 1], vec![784, 30, 10], vec![3, 1, 4, 1, 5]] {
        let net = Network::random(sizes.clone()).unwrap();

        assert_eq!(net.biases().len(), sizes.len() - 1);
        assert_eq!(net.weights().len(), sizes.len() - 1);

        for i in 0..sizes.len() - 1 {
            assert_eq!(net.biases()[i].len(), sizes[i + 1]);
            assert_eq!(net.weights()[i].nrows(), sizes[i + 1]);
            assert_eq!(net.weights()[i].ncols(), sizes[i]);
        }
    }
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        Network::random(vec![5]),
        Err(NetworkError::TooFewLayers(1))
    ));
    assert!(matches!(
        Network::random(vec![0, 2]),
        Err(NetworkError::EmptyLayer { index: 0 })
    ));
}

#[test]
fn test_networks_do_not_share_parameters() {
    let mut a = Network::random(vec![2, 2]).unwrap();
    let b = a.clone();

    a.set_parameters(vec![array![[1., 1.], [1., 1.]]], vec![array![0., 0.]])
        .unwrap();

    assert_ne!(a.weights(), b.weights());
}

#[test]
fn test_evaluate_counts_argmax_matches() {
    let or = Network::from_parameters(
        vec![array![[0.0, 0.0], [1.0, 1.0]]],
        vec![array![0.5, 0.0]],
    )
    .unwrap();

    assert_eq!(f::argmax(&or.feedforward(&array![1.0, 0.0]).to_vec()), 1);
    assert_eq!(f::argmax(&or.feedforward(&array![0.0, 1.0]).to_vec()), 1);
    assert_eq!(f::argmax(&or.feedforward(&array![1.0, 1.0]).to_vec()), 1);
    assert_eq!(f::argmax(&or.feedforward(&array![0.0, 0.0]).to_vec()), 0);

    let data = vec![
        Sample::new(vec![0.0, 0.0], vec![1.0, 0.0]),
        Sample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
        Sample::new(vec![1.0, 0.0], vec![0.0, 1.0]),
        Sample::new(vec![1.0, 1.0], vec![0.0, 1.0]),
        Sample::new(vec![1.0, 1.0], vec![1.0, 0.0]),
    ];

    assert_eq!(or.evaluate(&data), 4);
}

#[test]
fn test_evaluate_breaks_ties_toward_first_index() {
    // Zero weights and biases make every output exactly 0.5.
    let flat = Network::from_parameters(vec![Array2::zeros((3, 2))], vec![Array1::zeros(3)]).unwrap();

    let data = vec![
        Sample::new(vec![0.3, 0.7], vec![1.0, 0.0, 0.0]),
        Sample::new(vec![0.3, 0.7], vec![0.0, 1.0, 0.0]),
        Sample::new(vec![0.3, 0.7], vec![1.0, 1.0, 0.0]),
    ];

    assert_eq!(flat.evaluate(&data), 2);
}

#[test]
fn test_total_cost_sums_cross_entropy() {
    let flat = Network::from_parameters(vec![Array2::zeros((2, 2))], vec![Array1::zeros(2)]).unwrap();

    let data = vec![
        Sample::new(vec![1.0, 0.0], vec![1.0, 0.0]),
        Sample::new(vec![0.0, 1.0], vec![0.0, 1.0]),
    ];

    assert_abs_diff_eq!(flat.total_cost(&data), 4.0 * 2f64.ln(), epsilon = 1e-12);
    assert_eq!(flat.total_cost(&[]), 0.0);
}

#[test]
#[should_panic(expected = "target has 3 components")]
fn test_backpropagate_rejects_wrong_target_length() {
    let net = Network::random(vec![2, 2]).unwrap();
    net.backpropagate(&array![1.0, 0.0], &array![1.0, 0.0, 0.0]);
}

#[test]
#[should_panic(expected = "target has 1 components, network outputs 2")]
fn test_total_cost_rejects_wrong_target_length() {
    let flat = Network::from_parameters(vec![Array2::zeros((2, 2))], vec![Array1::zeros(2)]).unwrap();
    flat.total_cost(&[Sample::new(vec![1.0, 0.0], vec![1.0])]);
}

#[test]
#[should_panic(expected = "target has 4 components, network outputs 2")]
fn test_evaluate_rejects_wrong_target_length() {
    let flat = Network::from_parameters(vec![Array2::zeros((2, 2))], vec![Array1::zeros(2)]).unwrap();
    flat.evaluate(&[Sample::new(vec![1.0, 0.0], vec![0.0, 0.0, 0.0, 1.0])]);
}
