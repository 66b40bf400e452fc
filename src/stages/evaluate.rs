use tracing::info;

use crate::{
    convergence::ConvergenceCalculator,
    error::{EvaluationError, SwarmError},
    particles::Swarm,
    traits::Stage,
};

/// Evaluates the objective at every particle's position and updates personal bests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParticleEvaluator;
impl Stage for ParticleEvaluator {
    fn name(&self) -> &'static str {
        "evaluate particles"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        let func = swarm.objective_function();
        for particle in &mut swarm.particles {
            particle.evaluate(&func)?;
        }
        Ok(())
    }
}

/// Updates the global best from the particles' current scores and records how far it is from
/// the known optimum.
///
/// The first time the global best score lands within tolerance of the optimum, the swarm is
/// marked as converged. Later iterations never clear or overwrite that record.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwarmEvaluator;
impl Stage for SwarmEvaluator {
    fn name(&self) -> &'static str {
        "evaluate swarm"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        let problem_type = swarm.problem_type();
        let mut best_index = None;
        let mut best_score = swarm.global_best_score;
        for (i, particle) in swarm.particles.iter().enumerate() {
            let score = particle
                .score
                .ok_or(EvaluationError::Uninitialised("particle score"))?;
            let unseeded = swarm.global_best_position.is_none() && best_index.is_none();
            if unseeded || problem_type.improves(score, best_score) {
                best_score = score;
                best_index = Some(i);
            }
        }
        if let Some(i) = best_index {
            swarm.global_best_score = best_score;
            swarm.global_best_position = Some(swarm.particles[i].position()?.clone());
        }

        let calculator =
            ConvergenceCalculator::for_function(swarm.objective_function(), swarm.dimensions());
        let score_precision = calculator.precision_score(swarm.global_best_score);
        let position_precision = calculator.precision_position(swarm.global_best_position()?)?;
        swarm.score_precision.push(score_precision);
        swarm.position_precision.push(position_precision);

        if !swarm.converged && calculator.check_convergence(swarm.global_best_score) {
            let rate =
                calculator.convergence_rate(swarm.current_iteration, swarm.max_iterations());
            swarm.converged = true;
            swarm.convergence_iteration = Some(swarm.current_iteration);
            swarm.convergence_rate = Some(rate);
            info!(
                run_id = swarm.run_id(),
                iteration = swarm.current_iteration,
                rate,
                "swarm converged"
            );
        }
        Ok(())
    }
}
