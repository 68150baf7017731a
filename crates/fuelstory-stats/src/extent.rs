//! Extents of numeric series

/// Minimum and maximum of the finite values in a series
///
/// Returns `None` when no finite value is present.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Largest finite value in a series
pub fn max_finite<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    extent(values).map(|(_, hi)| hi)
}

/// Largest absolute finite value in a series
pub fn max_abs<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    max_finite(values.into_iter().map(|v| v.map(f64::abs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_skips_missing() {
        let values = vec![Some(3.0), None, Some(-1.0), Some(f64::NAN), Some(7.5)];
        assert_eq!(extent(values), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(extent(Vec::<Option<f64>>::new()), None);
        assert_eq!(extent(vec![None, Some(f64::INFINITY)]), None);
    }

    #[test]
    fn test_max_abs() {
        assert_eq!(max_abs(vec![Some(-4.0), Some(2.0)]), Some(4.0));
        assert_eq!(max_finite(vec![Some(-4.0), Some(2.0)]), Some(2.0));
    }
}
