//! Quantile estimation over sorted samples

/// Sort finite values ascending, dropping nulls and non-finite entries
pub fn sorted_finite<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sorted: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Quantile of a sorted sample by linear interpolation between order statistics
///
/// With `h = p * (n - 1)`, the estimate is
/// `sorted[floor(h)] + (h - floor(h)) * (sorted[ceil(h)] - sorted[floor(h)])`.
///
/// The caller must guarantee `sorted` is in non-decreasing order.
/// Returns `None` for an empty sample or `p` outside `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let h = p * (n - 1) as f64;
    let lo = h.floor() as usize;
    let hi = (h.ceil() as usize).min(n - 1);
    let a = sorted[lo];
    let b = sorted[hi];

    Some(a + (h - h.floor()) * (b - a))
}
