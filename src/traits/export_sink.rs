use crate::{error::SwarmError, stages::Snapshot};

/// A destination for the [`Snapshot`]s produced by the [`Export`](crate::stages::Export) stage.
///
/// A sink receives one snapshot per completed iteration. Nothing it does is read back by the
/// optimizer.
pub trait ExportSink {
    /// Accept a snapshot.
    ///
    /// # Errors
    ///
    /// Implementors should return [`SwarmError::Export`] if the snapshot could not be stored.
    fn export(&mut self, snapshot: &Snapshot) -> Result<(), SwarmError>;
}
