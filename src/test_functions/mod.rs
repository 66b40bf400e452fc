use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, traits::CostFunction, DVector, Float};

/// Module containing the sphere test function.
pub mod sphere;
pub use sphere::Sphere;

/// Module containing the one- and two-dimensional quadratic test functions.
pub mod quadratic;
pub use quadratic::{Quadratic1D, Quadratic2D};

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;

/// The fixed registry of objective functions a [`Swarm`](crate::particles::Swarm) can optimize.
///
/// Each variant is resolved from (and serialized as) its registered name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveFunction {
    /// See [`Sphere`].
    #[serde(rename = "sphere")]
    Sphere,
    /// See [`Quadratic1D`].
    #[serde(rename = "quadratic_1d")]
    Quadratic1D,
    /// See [`Quadratic2D`].
    #[serde(rename = "quadratic_2d")]
    Quadratic2D,
    /// See [`Rastrigin`].
    #[serde(rename = "rastrigin")]
    Rastrigin,
}

impl ObjectiveFunction {
    /// Every registered function, in registry order.
    pub const ALL: [Self; 4] = [
        Self::Sphere,
        Self::Quadratic1D,
        Self::Quadratic2D,
        Self::Rastrigin,
    ];

    /// Look up a function by its registered name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFunction`] if no function has that name.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| ConfigError::UnknownFunction(name.to_string()))
    }

    /// The names of every registered function.
    pub fn available() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.name()).collect()
    }

    fn function(&self) -> &'static dyn CostFunction {
        match self {
            Self::Sphere => &Sphere,
            Self::Quadratic1D => &Quadratic1D,
            Self::Quadratic2D => &Quadratic2D,
            Self::Rastrigin => &Rastrigin,
        }
    }
}

impl CostFunction for ObjectiveFunction {
    fn name(&self) -> &'static str {
        self.function().name()
    }
    fn evaluate(&self, x: &DVector<Float>) -> Result<Float, crate::error::EvaluationError> {
        self.function().evaluate(x)
    }
    fn supports(&self, dimensions: usize) -> bool {
        self.function().supports(dimensions)
    }
    fn optimal_position(&self, dimensions: usize) -> DVector<Float> {
        self.function().optimal_position(dimensions)
    }
    fn optimal_score(&self) -> Float {
        self.function().optimal_score()
    }
}

impl FromStr for ObjectiveFunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Display for ObjectiveFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Evaluate the registered function `name` at an arbitrary `position`.
///
/// # Errors
///
/// Returns a [`SwarmError::Config`](crate::error::SwarmError::Config) if the name is unknown, or
/// a [`SwarmError::Evaluation`](crate::error::SwarmError::Evaluation) if the position is too
/// short for the function.
pub fn evaluate_by_name(name: &str, position: &[Float]) -> Result<Float, crate::error::SwarmError> {
    let function = ObjectiveFunction::from_name(name)?;
    Ok(function.evaluate(&DVector::from_column_slice(position))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwarmError;

    #[test]
    fn test_registry_round_trips_names() {
        for f in ObjectiveFunction::ALL {
            assert_eq!(ObjectiveFunction::from_name(f.name()).unwrap(), f);
            assert_eq!(f.to_string().parse::<ObjectiveFunction>().unwrap(), f);
        }
        assert_eq!(
            ObjectiveFunction::available(),
            vec!["sphere", "quadratic_1d", "quadratic_2d", "rastrigin"]
        );
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            ObjectiveFunction::from_name("bogus"),
            Err(ConfigError::UnknownFunction("bogus".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_registered_names() {
        let json = serde_json::to_string(&ObjectiveFunction::Quadratic2D).unwrap();
        assert_eq!(json, "\"quadratic_2d\"");
        let f: ObjectiveFunction = serde_json::from_str("\"rastrigin\"").unwrap();
        assert_eq!(f, ObjectiveFunction::Rastrigin);
    }

    #[test]
    fn test_evaluate_by_name() {
        assert_eq!(evaluate_by_name("sphere", &[1.0, 2.0, 2.0]).unwrap(), 9.0);
        assert_eq!(evaluate_by_name("quadratic_1d", &[3.0]).unwrap(), 9.0);
        assert!(matches!(
            evaluate_by_name("nope", &[1.0]),
            Err(SwarmError::Config(ConfigError::UnknownFunction(_)))
        ));
        assert!(matches!(
            evaluate_by_name("quadratic_2d", &[1.0]),
            Err(SwarmError::Evaluation(_))
        ));
    }

    #[test]
    fn test_sphere_defined_everywhere() {
        let sphere = ObjectiveFunction::Sphere;
        assert!(sphere.supports(0));
        assert_eq!(sphere.evaluate(&DVector::zeros(0)).unwrap(), 0.0);
        assert_eq!(sphere.optimal_position(3), DVector::zeros(3));
        assert_eq!(sphere.optimal_score(), 0.0);
    }
}
