use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, particles::Particle};

/// A rule which decides which particles influence each other.
pub trait Topology {
    /// Return the indices of the neighbours of the particle at `index`.
    ///
    /// This must not modify `particles`.
    fn assign_neighbours(&self, particles: &[Particle], index: usize) -> Vec<usize>;
}

/// Each particle is connected to all others.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalTopology;
impl Topology for GlobalTopology {
    fn assign_neighbours(&self, particles: &[Particle], index: usize) -> Vec<usize> {
        (0..particles.len()).filter(|&i| i != index).collect()
    }
}

/// Each particle is connected to the one before and the one after it, with the ends joined.
///
/// In a swarm of two particles both slots hold the same (only) other particle.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingTopology;
impl Topology for RingTopology {
    fn assign_neighbours(&self, particles: &[Particle], index: usize) -> Vec<usize> {
        let n = particles.len();
        if n == 0 {
            return Vec::new();
        }
        vec![(index + n - 1) % n, (index + 1) % n]
    }
}

/// The topologies available to the standard pipelines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopologyKind {
    /// See [`GlobalTopology`]
    #[default]
    #[serde(rename = "global")]
    Global,
    /// See [`RingTopology`]
    #[serde(rename = "ring")]
    Ring,
}

impl Topology for TopologyKind {
    fn assign_neighbours(&self, particles: &[Particle], index: usize) -> Vec<usize> {
        match self {
            Self::Global => GlobalTopology.assign_neighbours(particles, index),
            Self::Ring => RingTopology.assign_neighbours(particles, index),
        }
    }
}

impl FromStr for TopologyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "ring" => Ok(Self::Ring),
            other => Err(ConfigError::InvalidTopology(other.to_string())),
        }
    }
}

impl Display for TopologyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Ring => write!(f, "ring"),
        }
    }
}
