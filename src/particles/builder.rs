use std::collections::HashMap;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{Bounds, SwarmConfig},
    error::ConfigError,
    particles::{Particle, ProblemType, Swarm, SwarmSettings},
    test_functions::ObjectiveFunction,
    traits::CostFunction,
    Float,
};

/// A loosely-typed configuration value, as found in a configuration map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A string such as a problem type or function name
    Text(String),
    /// An integer such as a particle count
    Integer(i64),
    /// A real number such as a weight
    Number(Float),
    /// A list of `[lower, upper]` pairs
    Bounds(Vec<Vec<Float>>),
}

impl ConfigValue {
    fn as_text(&self, field: &'static str) -> Result<&str, ConfigError> {
        match self {
            Self::Text(s) => Ok(s),
            _ => Err(ConfigError::InvalidValue {
                field,
                expected: "a string",
            }),
        }
    }
    fn as_count(&self, field: &'static str) -> Result<usize, ConfigError> {
        match self {
            // negative counts become 0 and are rejected by the setter
            Self::Integer(n) => Ok(usize::try_from(*n).unwrap_or_default()),
            _ => Err(ConfigError::InvalidValue {
                field,
                expected: "an integer",
            }),
        }
    }
    fn as_float(&self, field: &'static str) -> Result<Float, ConfigError> {
        match self {
            Self::Number(x) => Ok(*x),
            Self::Integer(n) => Ok(*n as Float),
            _ => Err(ConfigError::InvalidValue {
                field,
                expected: "a number",
            }),
        }
    }
    fn as_bounds(&self, field: &'static str) -> Result<&[Vec<Float>], ConfigError> {
        match self {
            Self::Bounds(b) => Ok(b),
            _ => Err(ConfigError::InvalidValue {
                field,
                expected: "a list of [lower, upper] pairs",
            }),
        }
    }
}

/// A validating builder for [`Swarm`]s.
///
/// Every setter checks its argument immediately and returns a [`ConfigError`] if it is invalid;
/// [`SwarmBuilder::build`] then checks that every required field has been set.
///
/// Setters may be called in any order. Particles are allocated by
/// [`SwarmBuilder::with_num_particles`] and re-stamped with the final problem type when the
/// swarm is built.
#[derive(Clone, Debug, Default)]
pub struct SwarmBuilder {
    problem_type: Option<ProblemType>,
    max_iterations: Option<usize>,
    objective_function: Option<ObjectiveFunction>,
    num_particles: Option<usize>,
    particles: Vec<Particle>,
    bounds: Option<Bounds>,
    cognitive_weight: Option<Float>,
    social_weight: Option<Float>,
    inertia_weight: Option<Float>,
    rng: Option<Rng>,
}

fn non_negative(name: &'static str, value: Float) -> Result<Float, ConfigError> {
    // written so that NaN is rejected too
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NegativeWeight { name, value })
    }
}

impl SwarmBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the problem type from `"min"` or `"max"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProblemType`] for any other string.
    pub fn with_problem_type(mut self, problem_type: &str) -> Result<Self, ConfigError> {
        let problem_type: ProblemType = problem_type.parse()?;
        self.problem_type = Some(problem_type);
        self.particles
            .iter_mut()
            .for_each(|p| p.restamp(problem_type));
        Ok(self)
    }
    /// Sets the number of iterations in a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewIterations`] if `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self, ConfigError> {
        if max_iterations < 1 {
            return Err(ConfigError::TooFewIterations);
        }
        self.max_iterations = Some(max_iterations);
        Ok(self)
    }
    /// Sets the objective function by its registered name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownFunction`] if the name is not registered.
    pub fn with_objective_function(mut self, name: &str) -> Result<Self, ConfigError> {
        self.objective_function = Some(ObjectiveFunction::from_name(name)?);
        Ok(self)
    }
    /// Sets the number of particles and (re)allocates the particle collection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooFewParticles`] if fewer than two particles are requested.
    pub fn with_num_particles(mut self, num_particles: usize) -> Result<Self, ConfigError> {
        if num_particles < 2 {
            return Err(ConfigError::TooFewParticles(num_particles));
        }
        let problem_type = self.problem_type.unwrap_or_default();
        self.num_particles = Some(num_particles);
        self.particles = (0..num_particles)
            .map(|_| Particle::new(problem_type))
            .collect();
        Ok(self)
    }
    /// Sets one `[lower, upper]` bound per dimension. The number of bounds sets the
    /// dimensionality of the swarm.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedBound`] if a bound does not have exactly two values, or
    /// [`ConfigError::NonFiniteBound`] if either end is infinite or NaN, or
    /// [`ConfigError::InvertedBound`] if its lower value exceeds its upper value.
    pub fn with_bounds<I, B>(mut self, bounds: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[Float]>,
    {
        self.bounds = Some(Bounds::try_from_pairs(bounds)?);
        Ok(self)
    }
    /// Sets the cognitive weight $`c_1`$.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeWeight`] if $`c_1 < 0`$.
    pub fn with_cognitive_weight(mut self, value: Float) -> Result<Self, ConfigError> {
        self.cognitive_weight = Some(non_negative("cognitive weight", value)?);
        Ok(self)
    }
    /// Sets the social weight $`c_2`$.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeWeight`] if $`c_2 < 0`$.
    pub fn with_social_weight(mut self, value: Float) -> Result<Self, ConfigError> {
        self.social_weight = Some(non_negative("social weight", value)?);
        Ok(self)
    }
    /// Sets the inertia weight $`\omega`$.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeWeight`] if $`\omega < 0`$.
    pub fn with_inertia_weight(mut self, value: Float) -> Result<Self, ConfigError> {
        self.inertia_weight = Some(non_negative("inertia weight", value)?);
        Ok(self)
    }
    /// Use the given random number generator for every stochastic step of the run.
    pub fn with_rng(mut self, rng: Rng) -> Self {
        self.rng = Some(rng);
        self
    }
    /// Seed the swarm's random number generator.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(Rng::with_seed(seed))
    }
    /// Finish building the swarm.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first required field which was never
    /// set, or [`ConfigError::UnsupportedDimensions`] if the objective function is not defined
    /// for the number of bounds given.
    pub fn build(self) -> Result<Swarm, ConfigError> {
        let problem_type = self
            .problem_type
            .ok_or(ConfigError::MissingField("problem_type"))?;
        let num_particles = self
            .num_particles
            .ok_or(ConfigError::MissingField("num_particles"))?;
        let bounds = self.bounds.ok_or(ConfigError::MissingField("bounds"))?;
        let cognitive_weight = self
            .cognitive_weight
            .ok_or(ConfigError::MissingField("cognitive_weight"))?;
        let social_weight = self
            .social_weight
            .ok_or(ConfigError::MissingField("social_weight"))?;
        let inertia_weight = self
            .inertia_weight
            .ok_or(ConfigError::MissingField("inertia_weight"))?;
        let objective_function = self
            .objective_function
            .ok_or(ConfigError::MissingField("objective_function"))?;
        let max_iterations = self
            .max_iterations
            .ok_or(ConfigError::MissingField("max_iterations"))?;
        let dimensions = bounds.len();
        if !objective_function.supports(dimensions) {
            return Err(ConfigError::UnsupportedDimensions {
                function: objective_function.name(),
                dimensions,
            });
        }
        let mut particles = self.particles;
        particles.iter_mut().for_each(|p| p.restamp(problem_type));
        let settings = SwarmSettings {
            problem_type,
            num_particles,
            dimensions,
            bounds,
            cognitive_weight,
            social_weight,
            inertia_weight,
            objective_function,
            max_iterations,
        };
        Ok(Swarm::new(
            settings,
            particles,
            self.rng.unwrap_or_default(),
        ))
    }
    /// Build a swarm from an unordered map of configuration fields.
    ///
    /// Recognised keys are `problem_type`, `num_particles`, `bounds`, `cognitive_weight`,
    /// `social_weight`, `inertia_weight`, `objective_function` and `max_iterations`; any other
    /// key is ignored. The map's ordering is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a recognised key holds the wrong kind of value,
    /// or any error the corresponding setter or [`SwarmBuilder::build`] would return.
    pub fn build_from_map(
        mut self,
        map: &HashMap<String, ConfigValue>,
    ) -> Result<Swarm, ConfigError> {
        // problem_type goes first so that particles are allocated with the right ordering
        for key in [
            "problem_type",
            "max_iterations",
            "objective_function",
            "num_particles",
            "bounds",
            "cognitive_weight",
            "social_weight",
            "inertia_weight",
        ] {
            let Some(value) = map.get(key) else {
                continue;
            };
            self = match key {
                "problem_type" => self.with_problem_type(value.as_text(key)?)?,
                "max_iterations" => self.with_max_iterations(value.as_count(key)?)?,
                "objective_function" => self.with_objective_function(value.as_text(key)?)?,
                "num_particles" => self.with_num_particles(value.as_count(key)?)?,
                "bounds" => self.with_bounds(value.as_bounds(key)?)?,
                "cognitive_weight" => self.with_cognitive_weight(value.as_float(key)?)?,
                "social_weight" => self.with_social_weight(value.as_float(key)?)?,
                "inertia_weight" => self.with_inertia_weight(value.as_float(key)?)?,
                _ => self,
            };
        }
        self.build()
    }
    /// Build a swarm from a typed [`SwarmConfig`]. The config's `topology` is not used here; see
    /// [`Pipeline::standard`](crate::pipeline::Pipeline::standard).
    ///
    /// # Errors
    ///
    /// Returns any error the individual setters or [`SwarmBuilder::build`] would return.
    pub fn from_config(config: &SwarmConfig) -> Result<Swarm, ConfigError> {
        let builder = Self::new()
            .with_problem_type(&config.problem_type)?
            .with_max_iterations(config.max_iterations)?
            .with_objective_function(&config.objective_function)?
            .with_num_particles(config.num_particles)?
            .with_bounds(&config.bounds)?
            .with_cognitive_weight(config.cognitive_weight)?
            .with_social_weight(config.social_weight)?
            .with_inertia_weight(config.inertia_weight)?;
        match config.seed {
            Some(seed) => builder.with_seed(seed).build(),
            None => builder.build(),
        }
    }
    /// A small ready-made swarm: minimize the sphere function in two dimensions with ten
    /// particles for ten iterations.
    ///
    /// # Errors
    ///
    /// This never fails in practice; the signature matches [`SwarmBuilder::build`].
    pub fn demo() -> Result<Swarm, ConfigError> {
        Self::new()
            .with_problem_type("min")?
            .with_max_iterations(10)?
            .with_objective_function("sphere")?
            .with_num_particles(10)?
            .with_bounds([[-5.0, 5.0], [-5.0, 5.0]])?
            .with_cognitive_weight(2.0)?
            .with_social_weight(2.0)?
            .with_inertia_weight(0.5)?
            .build()
    }
}
