pub use super::value_objects::Sample;

/// Append-only, time-ordered sample sequence owned by the animation clock.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    samples: Vec<Sample>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut buf = SampleBuffer::new();
        buf.push(Sample::new(-1.0, 1.0));
        buf.push(Sample::new(0.0, 2.0));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.latest().unwrap().time, 0.0);
        assert_eq!(buf.samples()[0].value, 1.0);
    }
}
