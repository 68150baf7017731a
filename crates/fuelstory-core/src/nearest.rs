//! Nearest-point lookup over a series sorted by x

use crate::error::{StoryError, StoryResult};

/// Sorted x keys of a series
///
/// Built once per render pass. Queries bisect the keys and compare the two
/// neighbours around the insertion point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearestIndex {
    keys: Vec<f64>,
}

impl NearestIndex {
    /// Build from items already sorted ascending by `key_fn`
    ///
    /// Fails with `UnsortedSeries` at the first key smaller than its
    /// predecessor, or at a key that is not finite.
    pub fn build<T, F>(items: &[T], key_fn: F) -> StoryResult<Self>
    where
        F: Fn(&T) -> f64,
    {
        let keys: Vec<f64> = items.iter().map(key_fn).collect();
        for (index, key) in keys.iter().enumerate() {
            if !key.is_finite() {
                return Err(StoryError::UnsortedSeries { index });
            }
            if index > 0 && *key < keys[index - 1] {
                return Err(StoryError::UnsortedSeries { index });
            }
        }
        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// Position of the item closest to `x0`
    ///
    /// Returns `None` for a series with fewer than two keys, a non-finite
    /// query, or a query outside `[first key, last key]`. Ties resolve to the
    /// lower position.
    pub fn query(&self, x0: f64) -> Option<usize> {
        let (first, last) = (*self.keys.first()?, *self.keys.last()?);
        if !x0.is_finite() || x0 < first || x0 > last {
            return None;
        }
        // a lone key has no neighbour pair: the insertion point lands at len
        if self.keys.len() < 2 {
            return None;
        }

        // bisect-left, never below 1 so that both neighbours exist
        let i = self.keys.partition_point(|k| *k < x0).clamp(1, self.keys.len() - 1);
        let (before, after) = (self.keys[i - 1], self.keys[i]);
        if x0 - before <= after - x0 {
            Some(i - 1)
        } else {
            Some(i)
        }
    }

    /// Item closest to `x0` in the series the index was built from
    pub fn lookup<'a, T>(&self, items: &'a [T], x0: f64) -> Option<&'a T> {
        self.query(x0).and_then(|i| items.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn index(keys: &[f64]) -> NearestIndex {
        NearestIndex::build(keys, |k| *k).unwrap()
    }

    #[test]
    fn test_picks_closer_neighbour() {
        let idx = index(&[2000.0, 2001.0, 2002.0, 2003.0]);
        assert_eq!(idx.query(2001.2), Some(1));
        assert_eq!(idx.query(2001.8), Some(2));
        assert_eq!(idx.query(2003.0), Some(3));
    }

    #[test]
    fn test_tie_goes_to_lower() {
        let idx = index(&[2000.0, 2001.0]);
        assert_eq!(idx.query(2000.5), Some(0));
    }

    #[test]
    fn test_first_key_is_reachable() {
        let idx = index(&[2000.0, 2001.0, 2002.0]);
        assert_eq!(idx.query(2000.0), Some(0));
        assert_eq!(idx.query(2000.1), Some(0));
    }

    #[test]
    fn test_out_of_range() {
        let idx = index(&[2000.0, 2001.0, 2002.0]);
        assert_eq!(idx.query(1999.9), None);
        assert_eq!(idx.query(2002.1), None);
        assert_eq!(idx.query(f64::NAN), None);
        assert_eq!(NearestIndex::default().query(2000.0), None);
    }

    #[test]
    fn test_single_item_has_no_nearest() {
        let idx = index(&[2010.0]);
        assert_eq!(idx.query(2010.0), None);
        assert_eq!(idx.query(2010.5), None);
        assert_eq!(idx.lookup(&[2010.0], 2010.0), None);
    }

    #[test]
    fn test_lookup_returns_item() {
        let rows = vec![(2000, "a"), (2005, "b"), (2010, "c")];
        let idx = NearestIndex::build(&rows, |r| r.0 as f64).unwrap();
        assert_eq!(idx.lookup(&rows, 2006.0), Some(&(2005, "b")));
        assert_eq!(idx.lookup(&rows, 2009.0), Some(&(2010, "c")));
    }

    #[test]
    fn test_rejects_unsorted() {
        let err = NearestIndex::build(&[1.0, 3.0, 2.0], |k| *k).unwrap_err();
        assert!(matches!(err, StoryError::UnsortedSeries { index: 2 }));

        let err = NearestIndex::build(&[1.0, f64::NAN], |k| *k).unwrap_err();
        assert!(matches!(err, StoryError::UnsortedSeries { index: 1 }));
    }

    #[test]
    fn test_duplicate_keys() {
        let idx = index(&[1.0, 2.0, 2.0, 3.0]);
        assert_eq!(idx.query(2.0), Some(1));
    }

    proptest! {
        #[test]
        fn prop_result_is_a_closest_key(
            mut keys in prop::collection::vec(-1000i32..1000, 2..40),
            t in 0.0f64..1.0,
        ) {
            keys.sort();
            let keys: Vec<f64> = keys.into_iter().map(f64::from).collect();
            let idx = index(&keys);
            let first = keys[0];
            let last = keys[keys.len() - 1];
            let x0 = first + (last - first) * t;

            let i = idx.query(x0).unwrap();
            let best = keys.iter().map(|k| (k - x0).abs()).fold(f64::INFINITY, f64::min);
            prop_assert!(((keys[i] - x0).abs() - best).abs() < 1e-9);
        }
    }
}
