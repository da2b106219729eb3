use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Value Object - one committed data point.
///
/// `time` is seconds since chart start (seeded history is negative),
/// `value` is the price. The engine treats the price as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    /// Point on the segment `self -> next` at `fraction` in [0, 1].
    pub fn lerp(&self, next: &Sample, fraction: f64) -> Sample {
        Sample {
            time: self.time + fraction * (next.time - self.time),
            value: self.value + fraction * (next.value - self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Sample::new(0.0, 10.0);
        let b = Sample::new(1.0, 20.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.time, 0.5);
        assert_eq!(mid.value, 15.0);
    }
}
