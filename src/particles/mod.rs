/// [`Particle`] type and the [`ProblemType`] ordering.
pub mod particle;
pub use particle::{Particle, ProblemType};

/// [`Swarm`] type which owns the particles and the run-level state.
pub mod swarm;
pub use swarm::{InitStep, RunState, Swarm, SwarmSettings};

/// [`SwarmBuilder`], the validating constructor of [`Swarm`]s.
pub mod builder;
pub use builder::{ConfigValue, SwarmBuilder};

/// [`Topology`] trait and the global and ring neighbourhoods.
pub mod topology;
pub use topology::{GlobalTopology, RingTopology, Topology, TopologyKind};
