use crate::{
    error::{ConfigError, EvaluationError},
    test_functions::ObjectiveFunction,
    traits::CostFunction,
    DVector, Float,
};

/// The default tolerance used by [`ConvergenceCalculator::check_convergence`].
pub const DEFAULT_TOLERANCE: Float = 1e-6;

/// Measures how close a result is to the known optimum of a registered objective function.
#[derive(Clone, Debug)]
pub struct ConvergenceCalculator {
    function_name: &'static str,
    dimensions: usize,
    optimal_position: DVector<Float>,
    optimal_score: Float,
    tolerance: Float,
}

impl ConvergenceCalculator {
    /// Create a calculator for the function registered as `function_name` in `dimensions`
    /// dimensions, using [`DEFAULT_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFunction`] if the name is not registered.
    pub fn new(function_name: &str, dimensions: usize) -> Result<Self, ConfigError> {
        Ok(Self::for_function(
            ObjectiveFunction::from_name(function_name)?,
            dimensions,
        ))
    }
    /// Create a calculator for an already-resolved function.
    pub fn for_function(function: ObjectiveFunction, dimensions: usize) -> Self {
        Self {
            function_name: function.name(),
            dimensions,
            optimal_position: function.optimal_position(dimensions),
            optimal_score: function.optimal_score(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
    /// Sets the tolerance used to decide convergence (default = `1e-6`).
    pub fn with_tolerance(mut self, tolerance: Float) -> Self {
        self.tolerance = tolerance;
        self
    }
    /// The name of the function this calculator measures against.
    pub const fn function_name(&self) -> &'static str {
        self.function_name
    }
    /// The dimensionality the calculator was built for.
    pub const fn dimensions(&self) -> usize {
        self.dimensions
    }
    /// The known optimal position.
    pub const fn optimal_position(&self) -> &DVector<Float> {
        &self.optimal_position
    }
    /// The known optimal score.
    pub const fn optimal_score(&self) -> Float {
        self.optimal_score
    }
    /// The tolerance used to decide convergence.
    pub const fn tolerance(&self) -> Float {
        self.tolerance
    }
    /// The absolute distance $`|f - f^*|`$ between `score` and the optimal score.
    pub fn precision_score(&self, score: Float) -> Float {
        (score - self.optimal_score).abs()
    }
    /// The Euclidean distance $`\lVert x - x^* \rVert_2`$ between `position` and the optimal
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::LengthMismatch`] if `position` and the optimal position have
    /// different lengths.
    pub fn precision_position(&self, position: &DVector<Float>) -> Result<Float, EvaluationError> {
        if position.len() != self.optimal_position.len() {
            return Err(EvaluationError::LengthMismatch {
                expected: self.optimal_position.len(),
                found: position.len(),
            });
        }
        Ok((position - &self.optimal_position).norm())
    }
    /// Checks whether `score` is within tolerance of the optimal score.
    pub fn check_convergence(&self, score: Float) -> bool {
        self.precision_score(score) <= self.tolerance
    }
    /// The share of the iteration budget, in percent, consumed by `iteration`.
    pub fn convergence_rate(&self, iteration: usize, max_iterations: usize) -> Float {
        100.0 * iteration as Float / max_iterations as Float
    }
}
