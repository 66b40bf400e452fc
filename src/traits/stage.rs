use dyn_clone::DynClone;

use crate::{error::SwarmError, particles::Swarm};

/// A single unit of work applied to a [`Swarm`] once per iteration.
///
/// Stages are composed into a [`Pipeline`](crate::pipeline::Pipeline), which threads the swarm
/// through each of them in order.
pub trait Stage: DynClone {
    /// A short name used in logs.
    fn name(&self) -> &'static str;
    /// Apply the stage to the swarm.
    ///
    /// # Errors
    ///
    /// Returns a [`SwarmError`] if the stage cannot be completed. The swarm may have been
    /// partially modified and the run should be abandoned.
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError>;
}

dyn_clone::clone_trait_object!(Stage);
