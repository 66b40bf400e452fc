use crate::{error::EvaluationError, traits::CostFunction, DVector, Float};

/// The sphere function, a convex bowl with its minimum at the origin.
///
/// ```math
/// f(\vec{x}) = \sum_{i=1}^n x_i^2
/// ```
/// It is defined for any $`n \geq 0`$ and has a minimum at $`f(\vec{0}) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;
impl CostFunction for Sphere {
    fn name(&self) -> &'static str {
        "sphere"
    }
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, EvaluationError> {
        Ok(x.norm_squared())
    }
    fn supports(&self, _dimensions: usize) -> bool {
        true
    }
    fn optimal_position(&self, dimensions: usize) -> DVector<Float> {
        DVector::zeros(dimensions)
    }
    fn optimal_score(&self) -> Float {
        0.0
    }
}
