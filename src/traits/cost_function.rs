use crate::{error::EvaluationError, DVector, Float};

/// A trait which describes a function $`f(\mathbb{R}^n) \to \mathbb{R}`$ with a known optimum.
///
/// Implementors must be pure: evaluating the same position twice gives the same value.
pub trait CostFunction {
    /// The name under which the function is registered.
    fn name(&self) -> &'static str;
    /// The evaluation of the function at a point `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError::DimensionMismatch`] if `x` does not have enough
    /// coordinates for the function.
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, EvaluationError>;
    /// Checks whether the function (and its optimum) is defined in `dimensions` dimensions.
    fn supports(&self, dimensions: usize) -> bool;
    /// The optimal position of the function in a space of `dimensions` dimensions.
    fn optimal_position(&self, dimensions: usize) -> DVector<Float>;
    /// The value of the function at its optimum.
    fn optimal_score(&self) -> Float;
}

/// Fails with a [`EvaluationError::DimensionMismatch`] unless `x` has at least `expected`
/// coordinates.
pub(crate) fn require_coordinates(
    function: &'static str,
    x: &DVector<Float>,
    expected: usize,
) -> Result<(), EvaluationError> {
    if x.len() < expected {
        return Err(EvaluationError::DimensionMismatch {
            function,
            expected,
            found: x.len(),
        });
    }
    Ok(())
}
