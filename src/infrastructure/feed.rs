use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::market_data::{PriceFeed, Sample};

const PRICE_MIN: f64 = 61_100.4543;
const PRICE_MAX: f64 = 61_102.9999;

/// Demo price source: uniform draws inside a narrow band, so the chart
/// stays busy without trending away from the fixed y domain.
pub struct RandomPriceFeed {
    rng: SmallRng,
}

impl RandomPriceFeed {
    pub fn new() -> Self {
        Self { rng: SmallRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl Default for RandomPriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeed for RandomPriceFeed {
    fn next_sample(&mut self, time: f64) -> Sample {
        Sample::new(time, self.rng.gen_range(PRICE_MIN..PRICE_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_inside_band() {
        let mut feed = RandomPriceFeed::with_seed(7);
        for i in 0..1000 {
            let sample = feed.next_sample(i as f64);
            assert!(sample.value >= PRICE_MIN && sample.value < PRICE_MAX);
            assert_eq!(sample.time, i as f64);
        }
    }

    #[test]
    fn seeded_feeds_are_reproducible() {
        let mut a = RandomPriceFeed::with_seed(42);
        let mut b = RandomPriceFeed::with_seed(42);
        for i in 0..10 {
            assert_eq!(a.next_sample(i as f64), b.next_sample(i as f64));
        }
    }
}
