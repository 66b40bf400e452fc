use crate::{
    core::utils::generate_random_vector,
    error::{EvaluationError, SwarmError},
    particles::{Particle, ProblemType, Swarm},
    traits::Stage,
    DVector, Float,
};

/// Finds the neighbour of `particle` with the best personal best score. Ties go to the neighbour
/// listed first.
fn best_neighbour<'a>(
    particles: &'a [Particle],
    particle: &Particle,
    problem_type: ProblemType,
) -> Result<&'a DVector<Float>, EvaluationError> {
    let mut best: Option<&Particle> = None;
    for &j in &particle.neighbours {
        let neighbour = &particles[j];
        match best {
            Some(b) if !problem_type.improves(neighbour.best_score, b.best_score) => {}
            _ => best = Some(neighbour),
        }
    }
    best.ok_or(EvaluationError::Uninitialised("particle neighbours"))?
        .best_position()
}

/// Applies the velocity update
/// ```math
/// v \gets \omega v + c_1 r_1 \odot (p - x) + c_2 r_2 \odot (g - x)
/// ```
/// to every particle, where $`p`$ is the particle's personal best, $`g`$ is its best
/// neighbour's personal best and $`r_1, r_2 \sim U(0, 1)^n`$ are drawn independently per
/// particle and per dimension. The new velocity is clipped to the swarm's bounds.
///
/// Every neighbour lookup is resolved before any particle is modified, so the result does not
/// depend on the order in which particles are processed.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdateVelocity;
impl Stage for UpdateVelocity {
    fn name(&self) -> &'static str {
        "update velocity"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        let problem_type = swarm.problem_type();
        let dimensions = swarm.dimensions();
        let bounds = swarm.bounds().clone();
        let (w, c1, c2) = {
            let settings = swarm.settings();
            (
                settings.inertia_weight,
                settings.cognitive_weight,
                settings.social_weight,
            )
        };
        let nbests = swarm
            .particles
            .iter()
            .map(|p| best_neighbour(&swarm.particles, p, problem_type).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        for (particle, nbest) in swarm.particles.iter_mut().zip(nbests) {
            let r1 = generate_random_vector(dimensions, 0.0, 1.0, &mut swarm.rng);
            let r2 = generate_random_vector(dimensions, 0.0, 1.0, &mut swarm.rng);
            let velocity = {
                let x = particle.position()?;
                let v = particle.velocity()?;
                let p = particle.best_position()?;
                v.scale(w)
                    + r1.component_mul(&(p - x)).scale(c1)
                    + r2.component_mul(&(nbest - x)).scale(c2)
            };
            particle.velocity = Some(bounds.clip(&velocity));
        }
        Ok(())
    }
}

/// Moves every particle along its velocity and clips the result to the swarm's bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdatePosition;
impl Stage for UpdatePosition {
    fn name(&self) -> &'static str {
        "update position"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        let bounds = swarm.bounds().clone();
        for particle in &mut swarm.particles {
            let moved = particle.position()? + particle.velocity()?;
            particle.position = Some(bounds.clip(&moved));
        }
        Ok(())
    }
}
