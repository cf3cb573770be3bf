use neuralnet::{f, Network, Sample};
use rand::{prelude::*, thread_rng};

fn gen_training_data() -> Sample {
    let mut rng = thread_rng();

    let classes: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![0., 0.], f::onehot(0, 2)),
        (vec![0., 1.], f::onehot(1, 2)),
        (vec![1., 0.], f::onehot(1, 2)),
        (vec![1., 1.], f::onehot(0, 2)),
    ];

    let data = classes.choose(&mut rng).unwrap();
    Sample::new(data.0.clone(), data.1.clone())
}

fn main() {
    tracing_subscriber::fmt::init();

    let train = (0..500).map(|_| gen_training_data()).collect::<Vec<Sample>>();
    let test = (0..50).map(|_| gen_training_data()).collect::<Vec<Sample>>();

    let mut nn = Network::random(vec![2, 4, 2]).unwrap();
    nn.get_trainer()
        .set_learning_rate(3.0)
        .set_epochs(300)
        .set_mini_batch_size(10)
        .set_eval_data(&test)
        .verbose()
        .train(&train);

    let correct = nn.evaluate(&test);
    println!("Accuracy: {}%", (correct as f64 / test.len() as f64) * 100.);
}
