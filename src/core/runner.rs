use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use tracing::{info, info_span};

use crate::{
    core::{RunSummary, SwarmConfig},
    error::SwarmError,
    particles::{Swarm, SwarmBuilder},
    pipeline::Pipeline,
    traits::ExportSink,
};

/// Drives a [`Swarm`] through a [`Pipeline`] once per iteration until the iteration budget is
/// spent.
///
/// # Usage:
///
/// ```rust
/// use swarmline::prelude::*;
///
/// let swarm = SwarmBuilder::demo().unwrap();
/// let mut runner = Runner::new(Pipeline::standard_ring(NopSink::build()), swarm);
/// runner.run().unwrap();
/// assert_eq!(runner.swarm.current_iteration, 10);
/// println!("{}", runner.summary());
/// ```
#[derive(Clone, Debug)]
pub struct Runner {
    /// The swarm being optimized, usually read after the run.
    pub swarm: Swarm,
    pipeline: Pipeline,
}

impl Runner {
    /// Creates a new [`Runner`] for the given pipeline and swarm.
    pub const fn new(pipeline: Pipeline, swarm: Swarm) -> Self {
        Self { swarm, pipeline }
    }

    /// Convenience method to use chainable methods to set up the [`Runner`].
    pub fn setup<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Edit the [`Swarm`] of the [`Runner`].
    pub fn on_swarm<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut Swarm) -> &mut Swarm,
    {
        f(&mut self.swarm);
        self
    }

    /// The pipeline applied on every iteration.
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run the pipeline once per remaining iteration.
    ///
    /// Each pass is followed by an increment of [`Swarm::current_iteration`], so a completed run
    /// always ends with `current_iteration == max_iterations`. Calling this again on a finished
    /// run does nothing. If no stage recorded a finishing time, the runner records one.
    ///
    /// # Errors
    ///
    /// Returns the first [`SwarmError`] raised by a stage. The swarm is left as it was at the
    /// point of failure and `current_iteration` counts only the passes that completed.
    pub fn run(&mut self) -> Result<(), SwarmError> {
        let span = info_span!("run", run_id = self.swarm.run_id());
        let _guard = span.enter();
        info!(
            max_iterations = self.swarm.max_iterations(),
            num_particles = self.swarm.particles.len(),
            objective_function = %self.swarm.objective_function(),
            "starting particle swarm run"
        );
        while self.swarm.current_iteration < self.swarm.max_iterations() {
            self.pipeline.run(&mut self.swarm)?;
            self.swarm.current_iteration += 1;
        }
        if self.swarm.finished_at.is_none() {
            self.swarm.finished_at = Some(Utc::now());
        }
        info!(
            best_position = ?self.swarm.global_best_position.as_ref().map(|x| x.as_slice()),
            best_score = self.swarm.global_best_score,
            converged = self.swarm.converged,
            "particle swarm run complete"
        );
        Ok(())
    }

    /// A [`RunSummary`] of the swarm in its current state.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from(&self.swarm)
    }

    /// Consume the runner, returning the swarm.
    pub fn into_swarm(self) -> Swarm {
        self.swarm
    }
}

/// Build a swarm from `config`, run it through the standard pipeline for its topology and
/// return a summary of the result.
///
/// # Errors
///
/// Returns [`SwarmError::Config`] if the configuration is rejected, or any error raised during
/// the run.
pub fn run(
    config: &SwarmConfig,
    sink: Arc<RwLock<dyn ExportSink>>,
) -> Result<RunSummary, SwarmError> {
    let kind = config.topology_kind()?;
    let swarm = SwarmBuilder::from_config(config)?;
    let mut runner = Runner::new(Pipeline::standard(kind, sink), swarm);
    runner.run()?;
    Ok(runner.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        particles::RunState,
        stages::{MemorySink, NopSink, UpdatePosition},
    };

    fn config(topology: &str) -> SwarmConfig {
        SwarmConfig {
            topology: topology.to_string(),
            problem_type: "min".to_string(),
            num_particles: 12,
            max_iterations: 25,
            bounds: vec![vec![-5.0, 5.0], vec![-5.0, 5.0]],
            cognitive_weight: 1.5,
            social_weight: 1.5,
            inertia_weight: 0.7,
            objective_function: "sphere".to_string(),
            seed: Some(42),
        }
    }

    #[test]
    fn test_run_completes_budget() {
        let mut runner = Runner::new(
            Pipeline::standard_global(NopSink::build()),
            SwarmBuilder::demo().unwrap(),
        );
        runner.run().unwrap();
        assert_eq!(runner.swarm.current_iteration, 10);
        assert_eq!(runner.swarm.state(), RunState::Done);
        assert_eq!(runner.swarm.score_precision.len(), 10);
        assert!(runner.swarm.finished_at.is_some());
        // a finished run is not extended
        runner.run().unwrap();
        assert_eq!(runner.swarm.score_precision.len(), 10);
    }

    #[test]
    fn test_runner_stamps_finish_without_export() {
        let swarm = SwarmBuilder::demo().unwrap();
        let pipeline = Pipeline::new();
        let mut runner = Runner::new(pipeline, swarm);
        runner.run().unwrap();
        assert!(runner.swarm.finished_at.is_some());
        assert!(runner.summary().time_taken_seconds.is_some());
    }

    #[test]
    fn test_failed_run_keeps_progress() {
        let mut runner = Runner::new(
            Pipeline::new().with_stage(UpdatePosition),
            SwarmBuilder::demo().unwrap(),
        );
        assert!(runner.run().is_err());
        assert_eq!(runner.swarm.current_iteration, 0);
        assert!(runner.swarm.finished_at.is_none());
    }

    #[test]
    fn test_run_entry_point() {
        let sink = MemorySink::build();
        let summary = run(&config("ring"), sink.clone()).unwrap();
        let history = sink.read();
        assert_eq!(history.history().len(), 25);
        let last = history.latest().unwrap();
        assert_eq!(last.run_id, summary.run_id);
        assert_eq!(last.global_best.score, summary.global_best_score);
        assert!(last.finished_at.is_some());
        assert!(summary.global_best_score.is_finite());
    }

    #[test]
    fn test_run_entry_point_is_reproducible() {
        let a = run(&config("global"), NopSink::build()).unwrap();
        let b = run(&config("global"), NopSink::build()).unwrap();
        assert_ne!(a.run_id, b.run_id);
        assert_eq!(a.global_best_score, b.global_best_score);
        assert_eq!(a.global_best_position, b.global_best_position);
    }

    #[test]
    fn test_run_entry_point_rejects_bad_config() {
        assert!(matches!(
            run(&config("star"), NopSink::build()),
            Err(SwarmError::Config(_))
        ));
        let mut bad = config("global");
        bad.objective_function = "quadratic_1d".to_string();
        assert!(matches!(
            run(&bad, NopSink::build()),
            Err(SwarmError::Config(_))
        ));
    }
}
