/// Element-wise mean of equal-length rows, ignoring `None` entries
/// (positions past the end of a series).
///
/// A position is `None` in the result only when every row is missing there.
pub fn masked_mean<'a, I>(rows: I, len: usize) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a [Option<f64>]>,
{
    let mut sums = vec![0.0; len];
    let mut counts = vec![0usize; len];

    for row in rows {
        debug_assert_eq!(row.len(), len);
        for ((sum, count), value) in sums.iter_mut().zip(counts.iter_mut()).zip(row) {
            if let Some(v) = value {
                *sum += v;
                *count += 1;
            }
        }
    }

    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| (count > 0).then(|| sum / count as f64))
        .collect()
}

/// Euclidean distance over the positions present in both vectors.
#[inline]
pub fn masked_euclidean(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    a.iter()
        .zip(b)
        .filter_map(|(x, y)| Some((x.as_ref()? - y.as_ref()?).powi(2)))
        .sum::<f64>()
        .sqrt()
}
