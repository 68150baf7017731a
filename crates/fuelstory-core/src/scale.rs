//! Domain-to-pixel scales
//!
//! Two kinds of mapping are used by the scene passes:
//!
//! - `LinearScale`: continuous interpolation with optional nicing
//! - `BandScale`: discrete keys mapped to padded, equal-width slots
//!
//! Scales are plain values rebuilt on every render pass.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;

/// Default tick count used when nicing a domain
pub const DEFAULT_TICK_COUNT: usize = 10;

// Thresholds between the 1, 2, 5 and 10 step multipliers
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Continuous linear mapping from a data domain to a pixel range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Create a scale; the domain may be increasing or decreasing
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Check whether the domain has zero span
    pub fn is_degenerate(&self) -> bool {
        self.domain[0] == self.domain[1]
    }

    /// Map a domain value to a pixel coordinate
    ///
    /// A zero-span domain maps every value to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Map a pixel coordinate back to the domain
    ///
    /// A zero-span domain or range inverts to the first domain bound.
    pub fn invert(&self, pixel: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d0 == d1 || r0 == r1 {
            return d0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Extend the domain outward to round values
    pub fn nice(self) -> Self {
        self.nice_with(DEFAULT_TICK_COUNT)
    }

    /// Extend the domain outward to multiples of a 1/2/5×10ⁿ step
    ///
    /// The step is recomputed from the widened domain until it stops
    /// changing. Reversed domains stay reversed; zero-span and non-finite
    /// domains are returned unchanged.
    pub fn nice_with(mut self, count: usize) -> Self {
        let [d0, d1] = self.domain;
        if count == 0 || d0 == d1 || !d0.is_finite() || !d1.is_finite() {
            return self;
        }

        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut previous: Option<f64> = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if previous == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }

        self.domain = if reversed { [stop, start] } else { [start, stop] };
        self
    }

    /// Round tick values inside the domain, ordered like the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [d0, d1] = self.domain;
        if !d0.is_finite() || !d1.is_finite() || count == 0 {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }

        let reversed = d1 < d0;
        let (start, stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let step = tick_increment(start, stop, count);

        let mut ticks: Vec<f64> = if step > 0.0 {
            let i0 = (start / step).ceil() as i64;
            let i1 = (stop / step).floor() as i64;
            (i0..=i1).map(|i| i as f64 * step).collect()
        } else if step < 0.0 {
            let inc = -step;
            let i0 = (start * inc).ceil() as i64;
            let i1 = (stop * inc).floor() as i64;
            (i0..=i1).map(|i| i as f64 / inc).collect()
        } else {
            Vec::new()
        };

        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// Distance between consecutive ticks for `count`, as a positive step
    pub fn tick_step(&self, count: usize) -> Option<f64> {
        let [d0, d1] = self.domain;
        let (start, stop) = if d1 < d0 { (d1, d0) } else { (d0, d1) };
        let step = tick_increment(start, stop, count);
        if step > 0.0 {
            Some(step)
        } else if step < 0.0 {
            Some(-1.0 / step)
        } else {
            None
        }
    }
}

/// Tick increment for `count` ticks across `[start, stop]`
///
/// Positive results are the step itself. Negative results encode a step
/// smaller than one as its negated reciprocal, which keeps the arithmetic
/// exact for decimal steps.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !(stop > start) {
        return 0.0;
    }
    let step = (stop - start) / count as f64;
    let power = step.log10().floor() as i32;
    let error = step / 10f64.powi(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0 {
        factor * 10f64.powi(power)
    } else {
        -10f64.powi(-power) / factor
    }
}

/// Discrete keys mapped to equal-width, padded pixel slots
///
/// Each of the `n` keys owns a slot of width `step = extent / n`. The band
/// inside the slot is `step * (1 - padding)` wide and centred in it, so a
/// key at index `i` starts at `i * step + step * padding / 2`.
///
/// Key lookups go through a hash index, so `map` and `center` are O(1).
/// A repeated key resolves to its first slot.
#[derive(Debug, Clone)]
pub struct BandScale<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
    range: [f64; 2],
    padding: f64,
}

impl<K> BandScale<K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Create a band scale with no padding
    pub fn new(keys: Vec<K>, range: [f64; 2]) -> Self {
        let mut index = HashMap::with_capacity(keys.len());
        for (i, key) in keys.iter().enumerate() {
            index.entry(key.clone()).or_insert(i);
        }

        Self {
            keys,
            index,
            range,
            padding: 0.0,
        }
    }

    /// Set the padding fraction, clamped to `[0, 1)`
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = if padding.is_finite() {
            padding.clamp(0.0, 0.999)
        } else {
            0.0
        };
        self
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Width of one slot
    pub fn step(&self) -> f64 {
        if self.keys.is_empty() {
            return 0.0;
        }
        (self.range[1] - self.range[0]) / self.keys.len() as f64
    }

    /// Width of the band drawn inside each slot
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Position of a key in the domain
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Start coordinate of a key's band
    pub fn map(&self, key: &K) -> Result<f64, ScaleError> {
        let index = self
            .index_of(key)
            .ok_or_else(|| ScaleError::UnknownCategory {
                key: format!("{:?}", key),
            })?;
        Ok(self.band_start(index))
    }

    /// Centre coordinate of a key's band
    pub fn center(&self, key: &K) -> Result<f64, ScaleError> {
        Ok(self.map(key)? + self.bandwidth() / 2.0)
    }

    /// Centre coordinate of the band at a domain position
    pub fn center_at(&self, index: usize) -> Option<f64> {
        (index < self.keys.len()).then(|| self.band_start(index) + self.bandwidth() / 2.0)
    }

    /// Key whose band contains the pixel, if any
    ///
    /// Padding between bands belongs to no key.
    pub fn hit_test(&self, pixel: f64) -> Option<&K> {
        let step = self.step();
        if !(step > 0.0) || !pixel.is_finite() {
            return None;
        }

        let slot = ((pixel - self.range[0]) / step).floor();
        if slot < 0.0 || slot >= self.keys.len() as f64 {
            return None;
        }

        let index = slot as usize;
        let offset = pixel - self.band_start(index);
        if (0.0..=self.bandwidth()).contains(&offset) {
            self.keys.get(index)
        } else {
            None
        }
    }

    fn band_start(&self, index: usize) -> f64 {
        let step = self.step();
        self.range[0] + index as f64 * step + step * self.padding / 2.0
    }
}
