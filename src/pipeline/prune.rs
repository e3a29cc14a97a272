pub const DEFAULT_MAX_POINTS: usize = 8;

/// Shrink an over-long sequence to at most `max_size` evenly spaced entries,
/// always preserving the first and last elements. Sequences already within
/// the limit are returned unchanged. Interior picks may repeat for
/// degenerate sizes; duplicates are kept, not treated as an error.
pub fn prune<T: Clone>(data: &[T], max_size: usize) -> Vec<T> {
    let data_size = data.len();
    if data_size <= max_size {
        return data.to_vec();
    }

    let k = max_size.saturating_sub(2);
    let step = (data_size - 2) as f64 / (k + 1) as f64;

    let mut pruned = Vec::with_capacity(k + 2);
    pruned.push(data[0].clone());
    for i in 1..=k {
        let index = (step * i as f64).ceil() as usize;
        pruned.push(data[index].clone());
    }
    pruned.push(data[data_size - 1].clone());

    pruned
}
