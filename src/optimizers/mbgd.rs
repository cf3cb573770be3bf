use rand::rngs::StdRng;
use rand::{thread_rng, RngCore, SeedableRng};
use tracing::{debug, info};

use super::Hyper;
use crate::data::Sample;
use crate::network::Network;

/// Chained-setter front end over [`Network::train_observed`].
pub struct MiniBatchGradientDescent<'a> {
    network: &'a mut Network,
    hyper: Hyper,
    rng: Box<dyn RngCore + 'a>,
    each_epoch: Box<dyn FnMut(usize) + 'a>,
    eval_data: Option<&'a [Sample]>,
    verbose: bool,
    pub costs: Vec<f64>,
}

impl<'a> MiniBatchGradientDescent<'a> {
    pub fn new(network: &'a mut Network) -> MiniBatchGradientDescent<'a> {
        MiniBatchGradientDescent {
            network,
            hyper: Hyper::new(),
            rng: Box::new(thread_rng()),
            each_epoch: Box::new(|_| {}),
            eval_data: None,
            verbose: false,
            costs: vec![],
        }
    }

    pub fn override_hyper(&mut self, hyper: Hyper) -> &mut Self {
        self.hyper = hyper;
        self
    }

    pub fn verbose(&mut self) -> &mut Self {
        self.verbose = true;
        self
    }

    pub fn set_learning_rate(&mut self, rate: f64) -> &mut Self {
        self.hyper.learning_rate = rate;
        self
    }

    pub fn set_epochs(&mut self, epochs: usize) -> &mut Self {
        self.hyper.epochs = epochs;
        self
    }

    pub fn set_mini_batch_size(&mut self, size: usize) -> &mut Self {
        self.hyper.mini_batch_size = size;
        self
    }

    pub fn set_rng(&mut self, rng: impl RngCore + 'a) -> &mut Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.set_rng(StdRng::seed_from_u64(seed))
    }

    /// Called with the epoch index after every epoch, in order.
    pub fn each_epoch(&mut self, callback: impl FnMut(usize) + 'a) -> &mut Self {
        self.each_epoch = Box::new(callback);
        self
    }

    /// Data whose total cost is measured and recorded in `costs` after every
    /// epoch.
    pub fn set_eval_data(&mut self, data: &'a [Sample]) -> &mut Self {
        self.eval_data = Some(data);
        self
    }

    pub fn train(&mut self, data: &[Sample]) -> &mut Self {
        let eval_data = self.eval_data;
        let verbose = self.verbose;
        let epochs = self.hyper.epochs;
        let costs = &mut self.costs;
        let each_epoch = &mut self.each_epoch;

        self.network
            .train_observed(data, &self.hyper, &mut *self.rng, |epoch, network| {
                if let Some(eval) = eval_data {
                    let cost = network.total_cost(eval);
                    costs.push(cost);

                    if verbose {
                        info!("({}/{}) sum-error = {}", epoch, epochs, cost);
                    } else {
                        debug!(epoch, cost, "evaluated epoch");
                    }
                }

                (*each_epoch)(epoch);
            });

        self
    }
}
