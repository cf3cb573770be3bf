/// Index of the largest element. Ties go to the first occurrence; an empty
/// slice yields 0.
pub fn argmax(d: &[f64]) -> usize {
    if d.len() < 1 {
        return 0;
    }

    let mut max_ix = 0;
    let mut max = &d[0];

    for (i, v) in d.iter().enumerate() {
        if v > max {
            max = v;
            max_ix = i;
        }
    }

    max_ix
}

pub fn onehot(i: usize, size: usize) -> Vec<f64> {
    let mut oh = vec![0.; size];
    if i < size {
        oh[i] = 1.;
    }
    oh
}
