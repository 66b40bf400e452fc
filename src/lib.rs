//! `swarmline` runs Particle Swarm Optimization (PSO) as an explicit pipeline of small stages.
//! A [`Swarm`](particles::Swarm) owns every particle and all run-level state, and a
//! [`Pipeline`](pipeline::Pipeline) of [`Stage`](traits::Stage)s is threaded through it once per
//! iteration by a [`Runner`](core::Runner). Every intermediate state of the swarm can be exported
//! as a [`Snapshot`](stages::Snapshot) to an [`ExportSink`](traits::ExportSink), which makes the
//! optimizer easy to record, replay elsewhere, or animate.
//!
//! # Table of Contents
//! - [Quick Start](#quick-start)
//! - [The Standard Pipeline](#the-standard-pipeline)
//! - [Convergence](#convergence)
//!
//! # Quick Start
//!
//! Swarms are configured through the [`SwarmBuilder`](particles::SwarmBuilder), which validates
//! each field as it is set:
//!
//! ```rust
//! use swarmline::prelude::*;
//!
//! fn main() -> Result<(), SwarmError> {
//!     let swarm = SwarmBuilder::new()
//!         .with_problem_type("min")?
//!         .with_objective_function("sphere")?
//!         .with_num_particles(10)?
//!         .with_bounds([[-5.0, 5.0], [-5.0, 5.0]])?
//!         .with_cognitive_weight(0.5)?
//!         .with_social_weight(0.5)?
//!         .with_inertia_weight(0.5)?
//!         .with_max_iterations(10)?
//!         .with_seed(0)
//!         .build()?;
//!     let pipeline = Pipeline::standard(TopologyKind::Global, NopSink::build());
//!     let mut runner = Runner::new(pipeline, swarm);
//!     runner.run()?;
//!     println!("{}", runner.summary());
//!     Ok(())
//! }
//! ```
//!
//! # The Standard Pipeline
//!
//! Both standard pipelines run the same eight stages, differing only in the topology:
//!
//! 1. [`InitialisePosition`](stages::InitialisePosition)
//! 2. [`InitialiseVelocity`](stages::InitialiseVelocity)
//! 3. [`InitialiseTopology`](stages::InitialiseTopology)
//! 4. [`ParticleEvaluator`](stages::ParticleEvaluator)
//! 5. [`SwarmEvaluator`](stages::SwarmEvaluator)
//! 6. [`UpdateVelocity`](stages::UpdateVelocity)
//! 7. [`UpdatePosition`](stages::UpdatePosition)
//! 8. [`Export`](stages::Export)
//!
//! The initialisation stages are guarded by one-shot flags on the swarm, so only the first
//! iteration actually initialises anything.
//!
//! The velocity update for particle $`i`$ is
//!
//! ```math
//! v_i^{t+1} = \omega v_i^t + c_1 r_1 \odot (p_i^t - x_i^t) + c_2 r_2 \odot (n_i^t - x_i^t)
//! ```
//! where $`r_1, r_2 \sim U(0,1)^n`$ are drawn independently per dimension, $`p_i`$ is the
//! particle's personal best, and $`n_i`$ is the personal best of its best neighbour.
//!
//! # Convergence
//!
//! Every registered objective function has a known optimum. After each evaluation the
//! [`ConvergenceCalculator`](convergence::ConvergenceCalculator) records how far the global best
//! is from that optimum, and the swarm is flagged as converged the first time the score lies
//! within tolerance.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the core run machinery: bounds, configuration, the runner, and summaries
pub mod core;
/// Module containing the known-optimum precision and convergence calculations
pub mod convergence;
/// Module containing the error types used throughout the crate
pub mod error;
/// Module containing particles, swarms, the swarm builder, and neighbourhood topologies
pub mod particles;
/// Module containing the [`Pipeline`](pipeline::Pipeline) type
pub mod pipeline;
/// Module containing every [`Stage`](traits::Stage) of the standard pipelines
pub mod stages;
/// Module containing the registry of objective functions
pub mod test_functions;
/// Module containing the crate's extension traits
pub mod traits;

pub use nalgebra::DVector;

/// The floating-point type used throughout the crate.
pub type Float = f64;

/// The mathematical constant $`\pi`$.
pub const PI: Float = std::f64::consts::PI;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::{
        core::{run, RunSummary, Runner, SwarmConfig},
        error::{ConfigError, EvaluationError, SwarmError},
        particles::{ProblemType, Swarm, SwarmBuilder, TopologyKind},
        pipeline::Pipeline,
        stages::{MemorySink, NopSink, Snapshot},
        test_functions::ObjectiveFunction,
        traits::{CostFunction, ExportSink, Stage},
        DVector, Float,
    };
}
