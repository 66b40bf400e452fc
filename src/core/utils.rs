use crate::{DVector, Float};
use fastrand::Rng;

pub(crate) fn generate_random_vector(
    dimension: usize,
    lb: Float,
    ub: Float,
    rng: &mut Rng,
) -> DVector<Float> {
    DVector::from_vec((0..dimension).map(|_| rng.range(lb, ub)).collect())
}

/// A helper trait to get floating-point random values in a range
pub trait SampleFloat {
    /// Get a random value in the range `[lower, upper]` (or exactly `lower` if the two are
    /// equal). The result never leaves the range, even when `upper - lower` is not representable.
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`
    fn float(&mut self) -> Float;
}
impl SampleFloat for Rng {
    #[allow(clippy::suboptimal_flops)]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        let u = self.float();
        (lower * (1.0 - u) + upper * u).max(lower).min(upper)
    }
    fn float(&mut self) -> Float {
        self.f64()
    }
}
