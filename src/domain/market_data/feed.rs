use super::value_objects::Sample;

/// Data source collaborator. The engine asks for one sample per admission
/// tick and never inspects where the value came from.
pub trait PriceFeed {
    fn next_sample(&mut self, time: f64) -> Sample;
}

impl<F> PriceFeed for F
where
    F: FnMut(f64) -> f64,
{
    fn next_sample(&mut self, time: f64) -> Sample {
        Sample::new(time, self(time))
    }
}
