use std::{io::Write, sync::Arc};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
    error::SwarmError,
    particles::{Swarm, SwarmSettings},
    traits::{ExportSink, Stage},
    DVector, Float,
};

fn to_vec(x: Option<&DVector<Float>>) -> Option<Vec<Float>> {
    x.map(|x| x.iter().copied().collect())
}

/// The global best of a swarm at the time of a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlobalBest {
    /// The best score seen so far
    pub score: Float,
    /// Where that score was found (`None` before the first evaluation)
    pub position: Option<Vec<Float>>,
}

/// The state of a single particle at the time of a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    /// The particle's index in the swarm
    pub index: usize,
    /// The particle's position
    pub position: Option<Vec<Float>>,
    /// The particle's velocity
    pub velocity: Option<Vec<Float>>,
    /// The particle's personal best position
    pub best_position: Option<Vec<Float>>,
    /// The particle's personal best score
    pub best_score: Float,
}

/// A serializable record of a swarm after one pipeline pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The unique identifier of the run
    pub run_id: String,
    /// The number of pipeline passes completed before this one
    pub iteration: usize,
    /// When the swarm was built
    pub created_at: DateTime<Utc>,
    /// When the run finished, if it has
    pub finished_at: Option<DateTime<Utc>>,
    /// The swarm's configuration
    pub settings: SwarmSettings,
    /// The swarm's global best
    pub global_best: GlobalBest,
    /// Every particle, in order
    pub particles: Vec<ParticleSnapshot>,
    /// The score precision history
    pub score_precision: Vec<Float>,
    /// The position precision history
    pub position_precision: Vec<Float>,
    /// Whether the swarm has converged
    pub converged: bool,
    /// The iteration on which the swarm converged
    pub convergence_iteration: Option<usize>,
    /// The share of the iteration budget, in percent, used before converging
    pub convergence_rate: Option<Float>,
}

impl Snapshot {
    /// Record the current state of `swarm`.
    pub fn capture(swarm: &Swarm) -> Self {
        Self {
            run_id: swarm.run_id().to_string(),
            iteration: swarm.current_iteration,
            created_at: swarm.created_at(),
            finished_at: swarm.finished_at,
            settings: swarm.settings().clone(),
            global_best: GlobalBest {
                score: swarm.global_best_score,
                position: to_vec(swarm.global_best_position.as_ref()),
            },
            particles: swarm
                .particles
                .iter()
                .enumerate()
                .map(|(index, p)| ParticleSnapshot {
                    index,
                    position: to_vec(p.position.as_ref()),
                    velocity: to_vec(p.velocity.as_ref()),
                    best_position: to_vec(p.best_position.as_ref()),
                    best_score: p.best_score,
                })
                .collect(),
            score_precision: swarm.score_precision.clone(),
            position_precision: swarm.position_precision.clone(),
            converged: swarm.converged,
            convergence_iteration: swarm.convergence_iteration,
            convergence_rate: swarm.convergence_rate,
        }
    }
}

/// Hands a [`Snapshot`] of the swarm to an [`ExportSink`] after every pass.
///
/// On the final pass of a run the swarm's `finished_at` timestamp is set before the snapshot is
/// taken. A failing sink aborts the run.
#[derive(Clone)]
pub struct Export {
    sink: Arc<RwLock<dyn ExportSink>>,
}
impl Export {
    /// Create the stage around a shared sink.
    pub fn new(sink: Arc<RwLock<dyn ExportSink>>) -> Self {
        Self { sink }
    }
    /// The sink this stage writes to.
    pub fn sink(&self) -> Arc<RwLock<dyn ExportSink>> {
        self.sink.clone()
    }
}
impl Stage for Export {
    fn name(&self) -> &'static str {
        "export"
    }
    fn process(&mut self, swarm: &mut Swarm) -> Result<(), SwarmError> {
        if swarm.is_final_iteration() {
            swarm.finished_at = Some(Utc::now());
        }
        let snapshot = Snapshot::capture(swarm);
        self.sink.write().export(&snapshot)
    }
}

/// An [`ExportSink`] which discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopSink;
impl NopSink {
    /// Finalize the [`ExportSink`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl ExportSink for NopSink {
    fn export(&mut self, _snapshot: &Snapshot) -> Result<(), SwarmError> {
        Ok(())
    }
}

/// An [`ExportSink`] which keeps every snapshot in memory.
///
/// # Usage:
///
/// ```rust
/// use swarmline::prelude::*;
///
/// let sink = MemorySink::build();
/// let swarm = SwarmBuilder::demo().unwrap();
/// let mut runner = Runner::new(Pipeline::standard_global(sink.clone()), swarm);
/// runner.run().unwrap();
/// assert_eq!(sink.read().history().len(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    history: Vec<Snapshot>,
}
impl MemorySink {
    /// Finalize the [`ExportSink`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
    /// Every snapshot received so far, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }
    /// The most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.history.last()
    }
    /// The snapshots belonging to a single run.
    pub fn snapshots_for<'a>(&'a self, run_id: &'a str) -> impl Iterator<Item = &'a Snapshot> {
        self.history.iter().filter(move |s| s.run_id == run_id)
    }
    /// Write the full history to `writer` in Python's pickle format.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::Export`] if serialization or writing fails.
    pub fn to_pickle<W: Write>(&self, writer: &mut W) -> Result<(), SwarmError> {
        serde_pickle::to_writer(writer, &self.history, Default::default())
            .map_err(|e| SwarmError::Export(e.to_string()))
    }
}
impl ExportSink for MemorySink {
    fn export(&mut self, snapshot: &Snapshot) -> Result<(), SwarmError> {
        self.history.push(snapshot.clone());
        Ok(())
    }
}
