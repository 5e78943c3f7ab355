use super::Sample;
use std::collections::VecDeque;

/// Stores the most recent cpu samples, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct CpuHistory {
    samples: VecDeque<Sample>,
    /// Maximum number of samples kept
    capacity: usize,
}

impl CpuHistory {
    /// Creates a history already filled with `capacity` zero samples, so a
    /// chart drawn from it spans the full width straight away.
    pub fn new(capacity: usize) -> Self {
        let mut samples = VecDeque::with_capacity(capacity + 1);
        samples.resize(capacity, 0);
        Self { samples, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Appends a sample, then drops samples from the front until the
    /// history fits its capacity again.
    pub fn record(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Returns the samples in chronological order with the newest at the end
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Returns the newest sample
    pub fn last(&self) -> Option<Sample> {
        self.samples.back().copied()
    }

    /// Returns the largest sample currently held
    pub fn peak(&self) -> Option<Sample> {
        self.samples.iter().copied().max()
    }

    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().map(|&s| s as f32).sum::<f32>() / self.samples.len() as f32
    }
}

impl Default for CpuHistory {
    fn default() -> Self {
        Self::new(super::HISTORY_LEN)
    }
}
