use ndarray::{Array1, Array2, Axis};
use ndarray_rand::rand_distr::StandardNormal;
use ndarray_rand::RandomExt;
use rand::{thread_rng, Rng};
use tracing::{debug, trace};

use crate::batch;
use crate::data::Sample;
use crate::error::{NetworkError, Result};
use crate::f;
use crate::optimizers::{Hyper, MiniBatchGradientDescent};

/// Per-layer cost gradients, shaped exactly like a network's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub biases: Vec<Array1<f64>>,
    pub weights: Vec<Array2<f64>>,
}

impl Gradients {
    pub fn zeros_like(network: &Network) -> Gradients {
        Gradients {
            biases: network
                .biases
                .iter()
                .map(|b| Array1::zeros(b.raw_dim()))
                .collect(),
            weights: network
                .weights
                .iter()
                .map(|w| Array2::zeros(w.raw_dim()))
                .collect(),
        }
    }

    /// Adds `other` layer-wise into `self`.
    pub fn accumulate(mut self, other: Gradients) -> Gradients {
        for (acc, nb) in self.biases.iter_mut().zip(other.biases.iter()) {
            *acc += nb;
        }
        for (acc, nw) in self.weights.iter_mut().zip(other.weights.iter()) {
            *acc += nw;
        }
        self
    }
}

/// Fully connected sigmoid network trained against a cross-entropy cost.
///
/// Layer `i` maps `sizes[i]` activations to `sizes[i + 1]` through a
/// `sizes[i + 1] x sizes[i]` weight matrix and a bias vector of length
/// `sizes[i + 1]`.
#[derive(Debug, Clone)]
pub struct Network {
    sizes: Vec<usize>,
    biases: Vec<Array1<f64>>,
    weights: Vec<Array2<f64>>,
}

impl Network {
    /// Builds a network with every weight and bias drawn from a standard
    /// normal distribution.
    pub fn new<R: Rng + ?Sized>(sizes: Vec<usize>, rng: &mut R) -> Result<Network> {
        validate_sizes(&sizes)?;

        let mut biases = Vec::with_capacity(sizes.len() - 1);
        let mut weights = Vec::with_capacity(sizes.len() - 1);

        for (&from, &to) in sizes.iter().zip(sizes.iter().skip(1)) {
            biases.push(Array1::random_using(to, StandardNormal, rng));
            weights.push(Array2::random_using((to, from), StandardNormal, rng));
        }

        trace!(sizes = ?sizes, "initialized network");

        Ok(Network {
            sizes,
            biases,
            weights,
        })
    }

    /// Same as [`Network::new`] using the thread-local generator.
    pub fn random(sizes: Vec<usize>) -> Result<Network> {
        Network::new(sizes, &mut thread_rng())
    }

    /// Builds a network from explicit parameters. Layer sizes are read off
    /// the weight matrices.
    pub fn from_parameters(
        weights: Vec<Array2<f64>>,
        biases: Vec<Array1<f64>>,
    ) -> Result<Network> {
        let mut sizes = Vec::with_capacity(weights.len() + 1);
        if let Some(first) = weights.first() {
            sizes.push(first.ncols());
            sizes.extend(weights.iter().map(|w| w.nrows()));
        }

        validate_sizes(&sizes)?;
        check_parameters(&sizes, &weights, &biases)?;

        Ok(Network {
            sizes,
            biases,
            weights,
        })
    }

    /// Replaces every weight and bias. The new parameters must match the
    /// network's layer sizes.
    pub fn set_parameters(
        &mut self,
        weights: Vec<Array2<f64>>,
        biases: Vec<Array1<f64>>,
    ) -> Result<()> {
        check_parameters(&self.sizes, &weights, &biases)?;
        self.weights = weights;
        self.biases = biases;
        Ok(())
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn num_layers(&self) -> usize {
        self.sizes.len()
    }

    pub fn biases(&self) -> &[Array1<f64>] {
        &self.biases
    }

    pub fn weights(&self) -> &[Array2<f64>] {
        &self.weights
    }

    pub fn get_trainer(&mut self) -> MiniBatchGradientDescent<'_> {
        MiniBatchGradientDescent::new(self)
    }

    pub fn feedforward(&self, input: &Array1<f64>) -> Array1<f64> {
        self.check_input(input);

        let mut active = input.clone();
        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            active = f::sigmoid_vec(&(w.dot(&active) + b));
        }
        active
    }

    /// Number of samples whose strongest output matches the strongest target
    /// component.
    pub fn evaluate(&self, data: &[Sample]) -> usize {
        data.iter()
            .filter(|sample| {
                self.check_target(&sample.target);
                let output = self.feedforward(&sample.input);
                f::argmax(&output.to_vec()) == f::argmax(&sample.target.to_vec())
            })
            .count()
    }

    /// Summed cross-entropy cost over `data`.
    pub fn total_cost(&self, data: &[Sample]) -> f64 {
        data.iter()
            .map(|sample| {
                self.check_target(&sample.target);
                f::cross_entropy(&self.feedforward(&sample.input), &sample.target)
            })
            .sum()
    }

    pub fn train<R: Rng + ?Sized>(&mut self, data: &[Sample], hyper: &Hyper, rng: &mut R) {
        self.train_with(data, hyper, rng, |_| {});
    }

    /// Runs `hyper.epochs` epochs of mini-batch gradient descent, calling
    /// `each_epoch` with the epoch index once every epoch has finished.
    pub fn train_with<R, F>(
        &mut self,
        data: &[Sample],
        hyper: &Hyper,
        rng: &mut R,
        mut each_epoch: F,
    ) where
        R: Rng + ?Sized,
        F: FnMut(usize),
    {
        self.train_observed(data, hyper, rng, |epoch, _| each_epoch(epoch));
    }

    /// Like [`Network::train_with`], but the callback also sees the network
    /// as it stands after the epoch.
    pub fn train_observed<R, F>(
        &mut self,
        data: &[Sample],
        hyper: &Hyper,
        rng: &mut R,
        mut each_epoch: F,
    ) where
        R: Rng + ?Sized,
        F: FnMut(usize, &Network),
    {
        for epoch in 0..hyper.epochs {
            self.train_epoch(data, hyper, rng);
            debug!(epoch, epochs = hyper.epochs, "epoch complete");
            each_epoch(epoch, self);
        }
    }

    /// One pass over a freshly shuffled copy of `data`.
    pub fn train_epoch<R>(&mut self, data: &[Sample], hyper: &Hyper, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        let n = data.len();
        let shuffled = batch::shuffle(data, rng);
        let batches = batch::chunk(&shuffled, hyper.mini_batch_size);

        trace!(samples = n, batches = batches.len(), "running epoch");

        for mini_batch in batches {
            self.update_mini_batch(mini_batch, hyper.learning_rate, n);
        }
    }

    /// Applies one gradient step for `batch`. Gradients are summed over the
    /// batch and scaled by `eta / n`, where `n` is the size of the whole
    /// training set rather than the batch.
    pub fn update_mini_batch(&mut self, batch: &[Sample], eta: f64, n: usize) {
        if batch.is_empty() || n == 0 {
            return;
        }

        let nabla = batch.iter().fold(Gradients::zeros_like(self), |acc, sample| {
            acc.accumulate(self.backpropagate(&sample.input, &sample.target))
        });

        let step = eta / n as f64;
        for (b, nb) in self.biases.iter_mut().zip(nabla.biases.iter()) {
            b.scaled_add(-step, nb);
        }
        for (w, nw) in self.weights.iter_mut().zip(nabla.weights.iter()) {
            w.scaled_add(-step, nw);
        }
    }

    /// Gradient of the cross-entropy cost for a single sample.
    pub fn backpropagate(&self, input: &Array1<f64>, target: &Array1<f64>) -> Gradients {
        self.check_input(input);
        self.check_target(target);

        let layers = self.weights.len();

        let mut activation = input.clone();
        let mut activations = Vec::with_capacity(layers + 1);
        let mut zs = Vec::with_capacity(layers);
        activations.push(activation.clone());

        for (w, b) in self.weights.iter().zip(self.biases.iter()) {
            let z = w.dot(&activation) + b;
            activation = f::sigmoid_vec(&z);
            zs.push(z);
            activations.push(activation.clone());
        }

        // Collected from the output layer backwards, reversed at the end.
        let mut nabla_b = Vec::with_capacity(layers);
        let mut nabla_w = Vec::with_capacity(layers);

        let mut delta = f::cost_delta(&activations[layers], target);
        nabla_w.push(outer(&delta, &activations[layers - 1]));
        nabla_b.push(delta.clone());

        for l in (0..layers - 1).rev() {
            delta = self.weights[l + 1].t().dot(&delta) * f::sigmoid_prime(&zs[l]);
            nabla_w.push(outer(&delta, &activations[l]));
            nabla_b.push(delta.clone());
        }

        nabla_b.reverse();
        nabla_w.reverse();

        Gradients {
            biases: nabla_b,
            weights: nabla_w,
        }
    }

    fn check_target(&self, target: &Array1<f64>) {
        let output_size = self.sizes[self.sizes.len() - 1];
        assert_eq!(
            target.len(),
            output_size,
            "target has {} components, network outputs {}",
            target.len(),
            output_size
        );
    }

    fn check_input(&self, input: &Array1<f64>) {
        assert_eq!(
            input.len(),
            self.sizes[0],
            "input has {} components, network expects {}",
            input.len(),
            self.sizes[0]
        );
    }
}

fn validate_sizes(sizes: &[usize]) -> Result<()> {
    if sizes.len() < 2 {
        return Err(NetworkError::TooFewLayers(sizes.len()));
    }

    if let Some(index) = sizes.iter().position(|&s| s == 0) {
        return Err(NetworkError::EmptyLayer { index });
    }

    Ok(())
}

fn check_parameters(
    sizes: &[usize],
    weights: &[Array2<f64>],
    biases: &[Array1<f64>],
) -> Result<()> {
    let layers = sizes.len() - 1;
    if weights.len() != layers || biases.len() != layers {
        return Err(NetworkError::ShapeMismatch(format!(
            "expected {} layers, got {} weight matrices and {} bias vectors",
            layers,
            weights.len(),
            biases.len()
        )));
    }

    for (i, (w, b)) in weights.iter().zip(biases.iter()).enumerate() {
        let expected = (sizes[i + 1], sizes[i]);
        if w.dim() != expected {
            return Err(NetworkError::ShapeMismatch(format!(
                "layer {} weights are {:?}, expected {:?}",
                i,
                w.dim(),
                expected
            )));
        }
        if b.len() != sizes[i + 1] {
            return Err(NetworkError::ShapeMismatch(format!(
                "layer {} biases have length {}, expected {}",
                i,
                b.len(),
                sizes[i + 1]
            )));
        }
    }

    Ok(())
}

fn outer(a: &Array1<f64>, b: &Array1<f64>) -> Array2<f64> {
    a.view()
        .insert_axis(Axis(1))
        .dot(&b.view().insert_axis(Axis(0)))
}
