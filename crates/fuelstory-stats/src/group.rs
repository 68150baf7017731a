//! Insertion-ordered grouping of records by category key

use std::collections::HashMap;
use std::hash::Hash;

use crate::boxplot::BoxPlotSummary;

/// Records grouped by a category key
///
/// Groups appear in the order their key is first seen while iterating the
/// input, and records inside a group keep their input order.
#[derive(Debug, Clone)]
pub struct CategoryGroups<'a, K, R> {
    groups: Vec<(K, Vec<&'a R>)>,
}

impl<'a, K, R> CategoryGroups<'a, K, R>
where
    K: Eq + Hash + Clone,
{
    /// Group records by the key returned from `key_fn`
    pub fn build<I, F>(records: I, key_fn: F) -> Self
    where
        I: IntoIterator<Item = &'a R>,
        F: Fn(&R) -> K,
    {
        let mut slots: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, Vec<&'a R>)> = Vec::new();

        for record in records {
            let key = key_fn(record);
            match slots.get(&key) {
                Some(&slot) => groups[slot].1.push(record),
                None => {
                    slots.insert(key.clone(), groups.len());
                    groups.push((key, vec![record]));
                }
            }
        }

        Self { groups }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    /// Records for one key
    pub fn get(&self, key: &K) -> Option<&[&'a R]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Iterate over `(key, records)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a R])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Summarize every group, omitting keys with no usable observations
    pub fn summarize<F>(&self, value_fn: F) -> Vec<(K, BoxPlotSummary)>
    where
        F: Fn(&R) -> Option<f64>,
    {
        self.groups
            .iter()
            .filter_map(|(key, records)| {
                BoxPlotSummary::from_values(records.iter().map(|r| value_fn(r)))
                    .map(|summary| (key.clone(), summary))
            })
            .collect()
    }
}

/// Group records by key and summarize each group's values
pub fn summarize_groups<'a, K, R, I, FK, FV>(
    records: I,
    key_fn: FK,
    value_fn: FV,
) -> Vec<(K, BoxPlotSummary)>
where
    K: Eq + Hash + Clone,
    R: 'a,
    I: IntoIterator<Item = &'a R>,
    FK: Fn(&R) -> K,
    FV: Fn(&R) -> Option<f64>,
{
    CategoryGroups::build(records, key_fn).summarize(value_fn)
}
