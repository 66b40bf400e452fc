use crate::{
    error::EvaluationError,
    traits::{cost_function::require_coordinates, CostFunction},
    DVector, Float,
};

/// A one-dimensional parabola, $`f(x) = x_0^2`$, with a minimum at $`f(0) = 0`$.
///
/// Only the first coordinate is read.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadratic1D;
impl CostFunction for Quadratic1D {
    fn name(&self) -> &'static str {
        "quadratic_1d"
    }
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, EvaluationError> {
        require_coordinates(self.name(), x, 1)?;
        Ok(x[0].powi(2))
    }
    fn supports(&self, dimensions: usize) -> bool {
        dimensions == 1
    }
    fn optimal_position(&self, _dimensions: usize) -> DVector<Float> {
        DVector::zeros(1)
    }
    fn optimal_score(&self) -> Float {
        0.0
    }
}

/// A two-dimensional paraboloid, $`f(x) = x_0^2 + x_1^2`$, with a minimum at
/// $`f(0, 0) = 0`$.
///
/// Only the first two coordinates are read.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quadratic2D;
impl CostFunction for Quadratic2D {
    fn name(&self) -> &'static str {
        "quadratic_2d"
    }
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, EvaluationError> {
        require_coordinates(self.name(), x, 2)?;
        #[allow(clippy::suboptimal_flops)]
        Ok(x[0].powi(2) + x[1].powi(2))
    }
    fn supports(&self, dimensions: usize) -> bool {
        dimensions == 2
    }
    fn optimal_position(&self, _dimensions: usize) -> DVector<Float> {
        DVector::zeros(2)
    }
    fn optimal_score(&self) -> Float {
        0.0
    }
}
