use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use crate::{
    error::SwarmError,
    particles::{Swarm, TopologyKind},
    stages::{
        Export, InitialisePosition, InitialiseTopology, InitialiseVelocity, ParticleEvaluator,
        SwarmEvaluator, UpdatePosition, UpdateVelocity,
    },
    traits::{ExportSink, Stage},
};

/// An ordered list of [`Stage`]s which together make up one iteration of the optimizer.
///
/// The standard pipeline is
/// ```text
/// initialise position -> initialise velocity -> initialise topology -> evaluate particles
///   -> evaluate swarm -> update velocity -> update position -> export
/// ```
/// The initialisation stages only act on the first pass. Because the particles are evaluated
/// before they move, the scores recorded in a pass belong to the positions the swarm had when
/// the pass began.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }
    /// Append a stage to the end of the pipeline.
    pub fn with_stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Box::new(stage));
        self
    }
    /// The standard particle swarm pipeline with the given topology, exporting to `sink`.
    pub fn standard(kind: TopologyKind, sink: Arc<RwLock<dyn ExportSink>>) -> Self {
        Self::new()
            .with_stage(InitialisePosition)
            .with_stage(InitialiseVelocity)
            .with_stage(InitialiseTopology::new(kind))
            .with_stage(ParticleEvaluator)
            .with_stage(SwarmEvaluator)
            .with_stage(UpdateVelocity)
            .with_stage(UpdatePosition)
            .with_stage(Export::new(sink))
    }
    /// Shorthand for `Pipeline::standard(TopologyKind::Global, sink)`.
    pub fn standard_global(sink: Arc<RwLock<dyn ExportSink>>) -> Self {
        Self::standard(TopologyKind::Global, sink)
    }
    /// Shorthand for `Pipeline::standard(TopologyKind::Ring, sink)`.
    pub fn standard_ring(sink: Arc<RwLock<dyn ExportSink>>) -> Self {
        Self::standard(TopologyKind::Ring, sink)
    }
    /// The names of the stages, in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
    /// The number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }
    /// Checks whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
    /// Run every stage once, in order. This is one iteration of the optimizer.
    ///
    /// The pipeline does not advance [`Swarm::current_iteration`]; that is up to the caller.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by a stage.
    pub fn run(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        for stage in &mut self.stages {
            stage.process(swarm)?;
        }
        debug!(
            iteration = swarm.current_iteration,
            global_best_score = swarm.global_best_score,
            "pipeline pass complete"
        );
        Ok(())
    }
}
