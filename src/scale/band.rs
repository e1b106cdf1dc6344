use std::collections::HashMap;
use std::hash::Hash;

/// Discrete key to pixel-band mapping.
///
/// Domain order is first-seen order of the keys handed to `new`; duplicates
/// collapse onto the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K: Eq + Hash + Clone> {
    domain: Vec<K>,
    index: HashMap<K, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl<K: Eq + Hash + Clone> BandScale<K> {
    pub fn new<I: IntoIterator<Item = K>>(keys: I, range: (f64, f64)) -> Self {
        let mut domain = Vec::new();
        let mut index = HashMap::new();
        for key in keys {
            if !index.contains_key(&key) {
                index.insert(key.clone(), domain.len());
                domain.push(key);
            }
        }
        let mut scale = Self {
            domain,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            bandwidth: 0.0,
            start: 0.0,
        };
        scale.rescale();
        scale
    }

    /// Sets inner and outer padding together.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (start, stop) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = start + (stop - start - step * (n - self.padding_inner)) * self.align;
        self.bandwidth = step * (1.0 - self.padding_inner);
        self.step = step;
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band for `key`, `None` outside the domain.
    pub fn map(&self, key: &K) -> Option<f64> {
        let i = *self.index.get(key)?;
        let n = self.domain.len();
        // Reversed ranges hand out bands from the far end.
        let slot = if self.range.1 < self.range.0 { n - 1 - i } else { i };
        Some(self.start + self.step * slot as f64)
    }
}
