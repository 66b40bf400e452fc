use chrono::{DateTime, Utc};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::Bounds,
    error::EvaluationError,
    particles::{Particle, ProblemType},
    test_functions::ObjectiveFunction,
    DVector, Float,
};

/// The configuration of a [`Swarm`], fixed once the swarm is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwarmSettings {
    /// Whether the objective is minimized or maximized
    pub problem_type: ProblemType,
    /// The number of particles in the swarm
    pub num_particles: usize,
    /// The number of dimensions of the search space (always `bounds.len()`)
    pub dimensions: usize,
    /// One bound per dimension
    pub bounds: Bounds,
    /// The pull towards each particle's personal best
    pub cognitive_weight: Float,
    /// The pull towards the best neighbour's personal best
    pub social_weight: Float,
    /// The share of the previous velocity that is kept
    pub inertia_weight: Float,
    /// The function being optimized
    pub objective_function: ObjectiveFunction,
    /// The number of pipeline passes in a run
    pub max_iterations: usize,
}

/// The one-shot initialisation steps of a swarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitStep {
    /// Particle positions have been drawn
    Position,
    /// Particle velocities have been drawn
    Velocity,
    /// Neighbours have been assigned
    Topology,
}

/// Where a swarm is in its run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No pipeline pass has completed
    NotStarted,
    /// Some, but not all, pipeline passes have completed
    Iterating,
    /// Every pipeline pass has completed
    Done,
}

/// A population of particles together with its configuration and run-level state.
///
/// Swarms can only be created by the [`SwarmBuilder`](super::SwarmBuilder). Each swarm owns its
/// particles and its random number generator, so independent runs never share state.
#[derive(Clone, Debug)]
pub struct Swarm {
    run_id: String,
    created_at: DateTime<Utc>,
    /// When the run finished (set on the final export, or by the runner)
    pub finished_at: Option<DateTime<Utc>>,
    settings: SwarmSettings,
    /// The particles of the swarm
    pub particles: Vec<Particle>,
    /// The number of completed pipeline passes
    pub current_iteration: usize,
    /// The best score seen by the swarm
    pub global_best_score: Float,
    /// The position at which [`Swarm::global_best_score`] was found
    pub global_best_position: Option<DVector<Float>>,
    position_initialised: bool,
    velocity_initialised: bool,
    topology_initialised: bool,
    /// The distance of the global best score from the optimum, one entry per evaluation
    pub score_precision: Vec<Float>,
    /// The distance of the global best position from the optimum, one entry per evaluation
    pub position_precision: Vec<Float>,
    /// Set the first time the global best score is within tolerance of the optimum
    pub converged: bool,
    /// The iteration on which the swarm converged
    pub convergence_iteration: Option<usize>,
    /// The share of the iteration budget, in percent, used before converging
    pub convergence_rate: Option<Float>,
    pub(crate) rng: Rng,
}

impl Swarm {
    pub(crate) fn new(settings: SwarmSettings, particles: Vec<Particle>, rng: Rng) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            finished_at: None,
            global_best_score: settings.problem_type.worst(),
            settings,
            particles,
            current_iteration: 0,
            global_best_position: None,
            position_initialised: false,
            velocity_initialised: false,
            topology_initialised: false,
            score_precision: Vec::new(),
            position_precision: Vec::new(),
            converged: false,
            convergence_iteration: None,
            convergence_rate: None,
            rng,
        }
    }
    /// The unique identifier of this run.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
    /// When the swarm was built.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    /// The swarm's configuration.
    pub const fn settings(&self) -> &SwarmSettings {
        &self.settings
    }
    /// Shorthand for `settings().problem_type`.
    pub const fn problem_type(&self) -> ProblemType {
        self.settings.problem_type
    }
    /// Shorthand for `settings().dimensions`.
    pub const fn dimensions(&self) -> usize {
        self.settings.dimensions
    }
    /// Shorthand for `settings().bounds`.
    pub const fn bounds(&self) -> &Bounds {
        &self.settings.bounds
    }
    /// Shorthand for `settings().max_iterations`.
    pub const fn max_iterations(&self) -> usize {
        self.settings.max_iterations
    }
    /// Shorthand for `settings().objective_function`.
    pub const fn objective_function(&self) -> ObjectiveFunction {
        self.settings.objective_function
    }
    /// The lower end of every bound.
    pub fn lower_bounds(&self) -> DVector<Float> {
        self.settings.bounds.lower_bounds()
    }
    /// The upper end of every bound.
    pub fn upper_bounds(&self) -> DVector<Float> {
        self.settings.bounds.upper_bounds()
    }
    /// The global best position.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::Uninitialised`] if the swarm has not been evaluated.
    pub fn global_best_position(&self) -> Result<&DVector<Float>, EvaluationError> {
        self.global_best_position
            .as_ref()
            .ok_or(EvaluationError::Uninitialised("global best position"))
    }
    /// Checks whether the given initialisation step has already run.
    pub const fn is_initialised(&self, step: InitStep) -> bool {
        match step {
            InitStep::Position => self.position_initialised,
            InitStep::Velocity => self.velocity_initialised,
            InitStep::Topology => self.topology_initialised,
        }
    }
    /// Record that an initialisation step has run. Flags can never be cleared.
    pub(crate) fn mark_initialised(&mut self, step: InitStep) {
        match step {
            InitStep::Position => self.position_initialised = true,
            InitStep::Velocity => self.velocity_initialised = true,
            InitStep::Topology => self.topology_initialised = true,
        }
    }
    /// Where the swarm is in its run.
    pub const fn state(&self) -> RunState {
        if self.current_iteration == 0 {
            RunState::NotStarted
        } else if self.current_iteration < self.settings.max_iterations {
            RunState::Iterating
        } else {
            RunState::Done
        }
    }
    /// Checks whether the swarm is on the last pipeline pass of its run.
    pub const fn is_final_iteration(&self) -> bool {
        self.current_iteration + 1 == self.settings.max_iterations
    }
}
