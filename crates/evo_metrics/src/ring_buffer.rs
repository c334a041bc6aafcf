//! Fixed-capacity window over the most recent samples

use std::time::Duration;

pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    next: usize,
}

impl<T: Copy> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            next: 0,
        }
    }

    /// Add a sample, evicting the oldest once full.
    pub fn push(&mut self, sample: T) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.next] = sample;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> Option<T> {
        if self.samples.is_empty() {
            return None;
        }
        let index = (self.next + self.capacity - 1) % self.capacity;
        self.samples.get(index).copied()
    }
}

impl RingBuffer<Duration> {
    pub fn average(&self) -> Duration {
        if self.samples.is_empty() {
            return Duration::ZERO;
        }
        self.samples.iter().sum::<Duration>() / self.samples.len() as u32
    }
}

impl RingBuffer<f32> {
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest() {
        let mut buffer = RingBuffer::new(3);
        for value in [1.0f32, 2.0, 3.0] {
            buffer.push(value);
        }
        assert_eq!(buffer.average(), 2.0);

        buffer.push(7.0);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.average(), 4.0); // (2 + 3 + 7) / 3
        assert_eq!(buffer.latest(), Some(7.0));
    }

    #[test]
    fn durations_average() {
        let mut buffer = RingBuffer::new(2);
        buffer.push(Duration::from_millis(10));
        buffer.push(Duration::from_millis(30));
        assert_eq!(buffer.average(), Duration::from_millis(20));
    }

    #[test]
    fn empty_is_zero() {
        let buffer = RingBuffer::<f32>::new(0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.average(), 0.0);
        assert_eq!(buffer.latest(), None);
    }
}
