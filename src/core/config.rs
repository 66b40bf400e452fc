use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, particles::TopologyKind, Float};

/// A complete run configuration, as submitted by a client.
///
/// String-valued fields are validated when the swarm is built (see
/// [`SwarmBuilder::from_config`](crate::particles::SwarmBuilder::from_config)) rather than during
/// deserialization, so that a bad value produces a [`ConfigError`] naming the problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Either `"global"` or `"ring"`
    pub topology: String,
    /// Either `"min"` or `"max"`
    pub problem_type: String,
    /// The number of particles (at least 2)
    pub num_particles: usize,
    /// The number of iterations (at least 1)
    pub max_iterations: usize,
    /// One `[lower, upper]` pair per dimension. Pairs of the wrong length are accepted here and
    /// rejected with [`ConfigError::MalformedBound`] when the swarm is built.
    pub bounds: Vec<Vec<Float>>,
    /// The cognitive weight $`c_1 \geq 0`$
    pub cognitive_weight: Float,
    /// The social weight $`c_2 \geq 0`$
    pub social_weight: Float,
    /// The inertia weight $`\omega \geq 0`$
    pub inertia_weight: Float,
    /// The registered name of the objective function
    pub objective_function: String,
    /// An optional seed for the run's random number generator
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SwarmConfig {
    /// Resolve the topology selector.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTopology`] unless the selector is `"global"` or `"ring"`.
    pub fn topology_kind(&self) -> Result<TopologyKind, ConfigError> {
        self.topology.parse()
    }
}
