/// Module containing the one-shot initialisation stages.
pub mod initialise;
/// Module containing the evaluation stages.
pub mod evaluate;
/// Module containing the velocity and position update stages.
pub mod update;
/// Module containing the [`Export`] stage, [`Snapshot`]s and the built-in sinks.
pub mod export;

pub use evaluate::{ParticleEvaluator, SwarmEvaluator};
pub use export::{Export, GlobalBest, MemorySink, NopSink, ParticleSnapshot, Snapshot};
pub use initialise::{InitialisePosition, InitialiseTopology, InitialiseVelocity};
pub use update::{UpdatePosition, UpdateVelocity};
