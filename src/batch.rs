use rand::Rng;

/// Uniform Fisher-Yates shuffle. Returns a new permutation and leaves `data`
/// untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(data: &[T], rng: &mut R) -> Vec<T> {
    let mut list = data.to_vec();
    let n = list.len();

    if n < 2 {
        return list;
    }

    for i in 0..n - 1 {
        let j = rng.gen_range(i..n);
        if i != j {
            list.swap(i, j);
        }
    }

    list
}

/// Splits `data` into consecutive batches of `size`; the last one may be
/// shorter. A size of 0 is taken to mean a single batch of everything.
pub fn chunk<T>(data: &[T], size: usize) -> Vec<&[T]> {
    if data.is_empty() {
        return vec![];
    }

    let size = if size == 0 { data.len() } else { size };
    data.chunks(size).collect()
}
