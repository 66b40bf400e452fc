/// [`Bound`] and [`Bounds`] types for binding each dimension of the search space to a range.
pub mod bound;
/// [`SwarmConfig`] type for describing a run as plain data.
pub mod config;
/// [`Runner`] type for driving a swarm through a pipeline.
pub mod runner;
/// [`RunSummary`] type for the result of a run.
pub mod summary;
pub(crate) mod utils;

pub use bound::{Bound, Bounds};
pub use config::SwarmConfig;
pub use runner::{run, Runner};
pub use summary::RunSummary;
pub use utils::SampleFloat;
