use thiserror::Error;

use crate::Float;

/// Errors raised while configuring a [`Swarm`](crate::particles::Swarm).
///
/// These are only ever produced by the [`SwarmBuilder`](crate::particles::SwarmBuilder) (and the
/// lookups it relies on), never in the middle of a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The problem type was neither `"min"` nor `"max"`.
    #[error("problem type must be either 'min' or 'max', got '{0}'")]
    InvalidProblemType(String),
    /// The iteration budget was zero.
    #[error("maximum iterations must be at least 1")]
    TooFewIterations,
    /// The function name is not in the registry.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    /// Fewer than two particles were requested.
    #[error("number of particles must be at least 2, got {0}")]
    TooFewParticles(usize),
    /// A bound did not consist of exactly two values.
    #[error("bound #{index} must contain exactly 2 values, got {len}")]
    MalformedBound {
        /// The position of the bound in the list of bounds
        index: usize,
        /// The number of values the bound contained
        len: usize,
    },
    /// A bound had an infinite or NaN end.
    #[error("bound #{index} must be finite, got [{lower}, {upper}]")]
    NonFiniteBound {
        /// The position of the bound in the list of bounds
        index: usize,
        /// The lower value
        lower: Float,
        /// The upper value
        upper: Float,
    },
    /// A bound had its lower value above its upper value.
    #[error("bound #{index} has a lower bound ({lower}) greater than its upper bound ({upper})")]
    InvertedBound {
        /// The position of the bound in the list of bounds
        index: usize,
        /// The lower value
        lower: Float,
        /// The upper value
        upper: Float,
    },
    /// One of the three PSO weights was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeWeight {
        /// The name of the weight
        name: &'static str,
        /// The rejected value
        value: Float,
    },
    /// The objective function is not defined for the configured number of dimensions.
    #[error("objective function '{function}' is not defined in {dimensions} dimension(s)")]
    UnsupportedDimensions {
        /// The name of the objective function
        function: &'static str,
        /// The configured number of dimensions
        dimensions: usize,
    },
    /// A required field was never set before building.
    #[error("swarm is missing required property: {0}")]
    MissingField(&'static str),
    /// A configuration map held a value of the wrong shape for a recognised key.
    #[error("value for '{field}' has the wrong type (expected {expected})")]
    InvalidValue {
        /// The key whose value was rejected
        field: &'static str,
        /// A description of the expected value
        expected: &'static str,
    },
    /// The topology selector was neither `"global"` nor `"ring"`.
    #[error("invalid topology '{0}', expected 'global' or 'ring'")]
    InvalidTopology(String),
}

/// Errors raised while evaluating positions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// The function needs more coordinates than the position provides.
    #[error("{function} requires at least {expected} coordinate(s), got {found}")]
    DimensionMismatch {
        /// The name of the function
        function: &'static str,
        /// The minimum number of coordinates
        expected: usize,
        /// The number of coordinates provided
        found: usize,
    },
    /// Two vectors which must share a length did not.
    #[error("expected a vector of length {expected}, got {found}")]
    LengthMismatch {
        /// The expected length
        expected: usize,
        /// The provided length
        found: usize,
    },
    /// A quantity was read before the stage responsible for it had run.
    #[error("{0} has not been initialised")]
    Uninitialised(&'static str),
}

/// The top-level error type of the crate.
#[derive(Error, Debug)]
pub enum SwarmError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`EvaluationError`].
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    /// An [`ExportSink`](crate::traits::ExportSink) failed to accept a snapshot.
    #[error("export failed: {0}")]
    Export(String),
}
