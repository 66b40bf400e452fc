/// Module containing the [`CostFunction`] trait.
pub mod cost_function;
/// Module containing the [`ExportSink`] trait.
pub mod export_sink;
/// Module containing the [`Stage`] trait.
pub mod stage;

pub use cost_function::CostFunction;
pub use export_sink::ExportSink;
pub use stage::Stage;
