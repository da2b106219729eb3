use crate::domain::market_data::Sample;

/// Per-frame driver state: tracks where we are inside the current
/// sampling period and turns the raw sequence into the tweened one.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    sampling_period_ms: f64,
    last_sample_time_ms: f64,
    fraction: f64,
}

impl AnimationClock {
    pub fn new(sampling_period_ms: f64) -> Self {
        Self { sampling_period_ms, last_sample_time_ms: 0.0, fraction: 1.0 }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn sampling_period_ms(&self) -> f64 {
        self.sampling_period_ms
    }

    pub fn last_sample_time_ms(&self) -> f64 {
        self.last_sample_time_ms
    }

    pub fn set_last_sample_time_ms(&mut self, t_ms: f64) {
        self.last_sample_time_ms = t_ms;
    }

    /// Progress through the current sampling period: 0 right after a
    /// sample lands, rising to 1 just before the next one. Rounded to two
    /// decimals so the tween lands on stable positions.
    pub fn update_fraction(&mut self, t_ms: f64) {
        let last = self.last_sample_time_ms.round();
        let finish = last + self.sampling_period_ms;
        let differ = self.sampling_period_ms - (finish - t_ms);
        let fraction = (differ / self.sampling_period_ms).clamp(0.0, 1.0);
        self.fraction = (fraction * 100.0).round() / 100.0;
    }

    /// Whether a full sampling period has elapsed since the last admitted
    /// sample. Compared in whole seconds, matching the admission cadence
    /// of the sample times themselves.
    pub fn should_admit(&self, t_ms: f64) -> bool {
        t_ms / 1000.0 >= self.last_sample_time_ms / 1000.0 + self.sampling_period_ms / 1000.0
    }

    /// Mark a sample admitted at `t_ms` and restart the tween.
    pub fn admit(&mut self, t_ms: f64) {
        self.last_sample_time_ms = t_ms;
        self.fraction = 0.0;
    }

    /// The raw sequence with its last element tweened between the two
    /// final raw samples. Returns `None` when fewer than 2 samples exist;
    /// callers keep whatever interpolated sequence they had.
    pub fn interpolate(&self, samples: &[Sample]) -> Option<Vec<Sample>> {
        if samples.len() < 2 {
            return None;
        }
        let mut data = samples.to_vec();
        let last = samples[samples.len() - 2];
        let next = samples[samples.len() - 1];
        let idx = data.len() - 1;
        data[idx] = last.lerp(&next, self.fraction);
        Some(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_zero_at_admission_and_one_at_period_end() {
        let mut clock = AnimationClock::new(500.0);
        clock.admit(1000.0);
        clock.update_fraction(1000.0);
        assert_eq!(clock.fraction(), 0.0);
        clock.update_fraction(1499.0);
        assert!((clock.fraction() - 1.0).abs() < 0.01);
    }

    #[test]
    fn short_buffers_yield_nothing() {
        let clock = AnimationClock::new(500.0);
        assert!(clock.interpolate(&[]).is_none());
        assert!(clock.interpolate(&[Sample::new(0.0, 1.0)]).is_none());
    }
}
