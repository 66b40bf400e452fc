use crate::{
    error::EvaluationError,
    traits::{cost_function::require_coordinates, CostFunction},
    DVector, Float, PI,
};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(\vec{x}) = 10n + \sum_{i=1}^n (x_i^2 - 10cos(2\pi x_i))
/// ```
/// where $`n`$ is the length of $`\vec{x}`$ ($`n \geq 1`$). The minimum is $`f(\vec{0}) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;
impl CostFunction for Rastrigin {
    fn name(&self) -> &'static str {
        "rastrigin"
    }
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, EvaluationError> {
        require_coordinates(self.name(), x, 1)?;
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 * x.len() as Float
            + x.iter()
                .map(|xi| xi.powi(2) - 10.0 * Float::cos(2.0 * PI * xi))
                .sum::<Float>())
    }
    fn supports(&self, dimensions: usize) -> bool {
        dimensions >= 1
    }
    fn optimal_position(&self, dimensions: usize) -> DVector<Float> {
        DVector::zeros(dimensions)
    }
    fn optimal_score(&self) -> Float {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dvector;

    #[test]
    fn test_rastrigin_minimum() {
        assert_relative_eq!(Rastrigin.evaluate(&dvector![0.0, 0.0, 0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_rastrigin_integer_lattice() {
        // cos(2πk) = 1 for integer k, so only the quadratic term survives
        assert_relative_eq!(
            Rastrigin.evaluate(&dvector![1.0, -2.0]).unwrap(),
            5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rastrigin_half_lattice() {
        // cos(π) = -1 contributes +20 per coordinate
        assert_relative_eq!(
            Rastrigin.evaluate(&dvector![0.5]).unwrap(),
            20.25,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rastrigin_requires_a_coordinate() {
        assert!(Rastrigin.evaluate(&DVector::zeros(0)).is_err());
        assert!(!Rastrigin.supports(0));
    }
}
