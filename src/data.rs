use ndarray::Array1;

/// One training example: an input vector and the output the network should
/// produce for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Array1<f64>,
    pub target: Array1<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample {
            input: Array1::from(input),
            target: Array1::from(target),
        }
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Sample {
    fn from((input, target): (Vec<f64>, Vec<f64>)) -> Self {
        Sample::new(input, target)
    }
}

pub type Dataset = Vec<Sample>;

/// Zips parallel input and target lists into samples.
pub fn as_dataset(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>) -> Dataset {
    assert_eq!(
        x.len(),
        y.len(),
        "mismatched input/target counts: {} inputs, {} targets",
        x.len(),
        y.len()
    );

    x.into_iter().zip(y).map(Sample::from).collect()
}
