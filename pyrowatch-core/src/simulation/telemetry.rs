use rand::Rng;
use std::collections::VecDeque;

/// Nominal cadence of the telemetry simulator.
pub const TICK_INTERVAL_SECS: i64 = 5;

/// Number of samples each history window retains.
pub const HISTORY_CAPACITY: usize = 6;

/// A bounded random walk: one step nudges the value by a uniform jitter and
/// clamps it back into the sensor's plausible band.
#[derive(Debug, Clone, Copy)]
pub struct RandomWalk {
    pub jitter: f64,
    pub min: f64,
    pub max: f64,
}

impl RandomWalk {
    pub fn step<R: Rng>(&self, rng: &mut R, value: f64) -> f64 {
        (value + rng.gen_range(-self.jitter..=self.jitter)).clamp(self.min, self.max)
    }
}

pub const TEMPERATURE_WALK: RandomWalk = RandomWalk {
    jitter: 5.0,
    min: 200.0,
    max: 700.0,
};

pub const PRESSURE_WALK: RandomWalk = RandomWalk {
    jitter: 2.5,
    min: 85.0,
    max: 105.0,
};

pub const FLOW_WALK: RandomWalk = RandomWalk {
    jitter: 1.5,
    min: 20.0,
    max: 35.0,
};

pub const SYNGAS_WALK: RandomWalk = RandomWalk {
    jitter: 1.5,
    min: 20.0,
    max: 35.0,
};

pub const CHAR_WALK: RandomWalk = RandomWalk {
    jitter: 0.5,
    min: 5.0,
    max: 10.0,
};

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Fixed-capacity sliding window over the most recent samples. Pushing past
/// capacity drops exactly the oldest entry.
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T> SampleWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: T) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn latest(&self) -> Option<&T> {
        self.samples.back()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_window_drops_oldest_past_capacity() {
        let mut window = SampleWindow::new(6);
        for i in 0..10 {
            window.push(i);
        }
        assert_eq!(window.len(), 6);
        let kept: Vec<i32> = window.iter().copied().collect();
        assert_eq!(kept, vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(window.latest(), Some(&9));
    }

    #[test]
    fn test_window_below_capacity_keeps_everything() {
        let mut window = SampleWindow::new(6);
        window.push("a");
        window.push("b");
        assert_eq!(window.len(), 2);
        assert_eq!(window.latest(), Some(&"b"));
    }

    #[test]
    fn test_walk_stays_inside_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut value = 485.0;
        for _ in 0..1000 {
            value = TEMPERATURE_WALK.step(&mut rng, value);
            assert!((200.0..=700.0).contains(&value));
        }
    }

    #[test]
    fn test_walk_clamps_out_of_band_input() {
        let mut rng = StdRng::seed_from_u64(7);
        let stepped = PRESSURE_WALK.step(&mut rng, 500.0);
        assert_eq!(stepped, 105.0);
        let stepped = PRESSURE_WALK.step(&mut rng, 0.0);
        assert_eq!(stepped, 85.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(95.349), 95.3);
        assert_eq!(round1(95.35), 95.4);
        assert_eq!(round1(28.0), 28.0);
    }
}
