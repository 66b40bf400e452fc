use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, EvaluationError},
    traits::CostFunction,
    DVector, Float,
};

/// Whether the swarm searches for the minimum or the maximum of its objective function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemType {
    /// Search for the smallest value (`"min"`)
    #[default]
    #[serde(rename = "min")]
    Minimize,
    /// Search for the largest value (`"max"`)
    #[serde(rename = "max")]
    Maximize,
}

impl ProblemType {
    /// The value every best score starts from, so that the first evaluation always improves on
    /// it: $`+\infty`$ when minimizing, $`-\infty`$ when maximizing.
    pub const fn worst(&self) -> Float {
        match self {
            Self::Minimize => Float::INFINITY,
            Self::Maximize => Float::NEG_INFINITY,
        }
    }
    /// Checks whether `candidate` is strictly better than `current`. Ties never improve.
    pub fn improves(&self, candidate: Float, current: Float) -> bool {
        match self {
            Self::Minimize => candidate < current,
            Self::Maximize => candidate > current,
        }
    }
}

impl FromStr for ProblemType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Self::Minimize),
            "max" => Ok(Self::Maximize),
            other => Err(ConfigError::InvalidProblemType(other.to_string())),
        }
    }
}

impl Display for ProblemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimize => write!(f, "min"),
            Self::Maximize => write!(f, "max"),
        }
    }
}

/// A single candidate solution in a [`Swarm`](super::Swarm).
///
/// Every vector field is `None` until the stage responsible for it has run. Neighbours are
/// stored as indices into the owning swarm's particle list.
#[derive(Clone, Debug, Default)]
pub struct Particle {
    /// The ordering used to compare scores
    pub problem_type: ProblemType,
    /// The current position
    pub position: Option<DVector<Float>>,
    /// The current velocity
    pub velocity: Option<DVector<Float>>,
    /// The best position this particle has visited
    pub best_position: Option<DVector<Float>>,
    /// The score at [`Particle::best_position`]
    pub best_score: Float,
    /// The score at the current position
    pub score: Option<Float>,
    /// Indices of this particle's neighbours
    pub neighbours: Vec<usize>,
}

impl Particle {
    /// Create an unevaluated particle whose best score is the worst value for `problem_type`.
    pub fn new(problem_type: ProblemType) -> Self {
        Self {
            problem_type,
            position: None,
            velocity: None,
            best_position: None,
            best_score: problem_type.worst(),
            score: None,
            neighbours: Vec::new(),
        }
    }
    /// Change the problem type of a particle which has not been evaluated yet, reseeding its
    /// best score to match.
    pub(crate) fn restamp(&mut self, problem_type: ProblemType) {
        self.problem_type = problem_type;
        if self.best_position.is_none() {
            self.best_score = problem_type.worst();
        }
    }
    /// The current position.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Uninitialised`] if no position has been assigned.
    pub fn position(&self) -> Result<&DVector<Float>, EvaluationError> {
        self.position
            .as_ref()
            .ok_or(EvaluationError::Uninitialised("particle position"))
    }
    /// The current velocity.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Uninitialised`] if no velocity has been assigned.
    pub fn velocity(&self) -> Result<&DVector<Float>, EvaluationError> {
        self.velocity
            .as_ref()
            .ok_or(EvaluationError::Uninitialised("particle velocity"))
    }
    /// The best position visited so far.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Uninitialised`] if the particle was never evaluated.
    pub fn best_position(&self) -> Result<&DVector<Float>, EvaluationError> {
        self.best_position
            .as_ref()
            .ok_or(EvaluationError::Uninitialised("particle best position"))
    }
    /// Evaluate `func` at the current position, store the result in [`Particle::score`], and
    /// adopt the position as the personal best if it is strictly better. The first evaluation is
    /// always adopted, even if it scores as badly as the seed value.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluationError`] if the position is missing or the function rejects it.
    pub fn evaluate(&mut self, func: &dyn CostFunction) -> Result<Float, EvaluationError> {
        let score = func.evaluate(self.position()?)?;
        if self.best_position.is_none() || self.problem_type.improves(score, self.best_score) {
            self.best_score = score;
            self.best_position = self.position.clone();
        }
        self.score = Some(score);
        Ok(score)
    }
}
