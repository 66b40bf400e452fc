use tracing::trace;

use crate::{
    core::utils::generate_random_vector,
    error::SwarmError,
    particles::{InitStep, Swarm, Topology, TopologyKind},
    traits::Stage,
};

/// Draws every particle's position uniformly from the swarm's bounds, once per run.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitialisePosition;
impl Stage for InitialisePosition {
    fn name(&self) -> &'static str {
        "initialise position"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        if swarm.is_initialised(InitStep::Position) {
            trace!("positions already initialised");
            return Ok(());
        }
        let bounds = swarm.bounds().clone();
        for particle in &mut swarm.particles {
            particle.position = Some(bounds.sample(&mut swarm.rng));
        }
        swarm.mark_initialised(InitStep::Position);
        Ok(())
    }
}

/// Draws every particle's velocity uniformly from $`[-1, 1]^n`$, once per run.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitialiseVelocity;
impl Stage for InitialiseVelocity {
    fn name(&self) -> &'static str {
        "initialise velocity"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        if swarm.is_initialised(InitStep::Velocity) {
            trace!("velocities already initialised");
            return Ok(());
        }
        let dimensions = swarm.dimensions();
        for particle in &mut swarm.particles {
            particle.velocity = Some(generate_random_vector(
                dimensions,
                -1.0,
                1.0,
                &mut swarm.rng,
            ));
        }
        swarm.mark_initialised(InitStep::Velocity);
        Ok(())
    }
}

/// Assigns every particle its neighbours according to a [`TopologyKind`], once per run.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitialiseTopology {
    kind: TopologyKind,
}
impl InitialiseTopology {
    /// Create the stage for the given topology.
    pub const fn new(kind: TopologyKind) -> Self {
        Self { kind }
    }
    /// Shorthand for `InitialiseTopology::new(TopologyKind::Global)`.
    pub const fn global() -> Self {
        Self::new(TopologyKind::Global)
    }
    /// Shorthand for `InitialiseTopology::new(TopologyKind::Ring)`.
    pub const fn ring() -> Self {
        Self::new(TopologyKind::Ring)
    }
    /// The topology this stage assigns.
    pub const fn kind(&self) -> TopologyKind {
        self.kind
    }
}
impl Stage for InitialiseTopology {
    fn name(&self) -> &'static str {
        match self.kind {
            TopologyKind::Global => "initialise global topology",
            TopologyKind::Ring => "initialise ring topology",
        }
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        if swarm.is_initialised(InitStep::Topology) {
            trace!("topology already initialised");
            return Ok(());
        }
        let neighbours: Vec<Vec<usize>> = (0..swarm.particles.len())
            .map(|i| self.kind.assign_neighbours(&swarm.particles, i))
            .collect();
        for (particle, neighbours) in swarm.particles.iter_mut().zip(neighbours) {
            particle.neighbours = neighbours;
        }
        swarm.mark_initialised(InitStep::Topology);
        Ok(())
    }
}
