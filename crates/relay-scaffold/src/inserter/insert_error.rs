use crate::config::SchemaLoadError;
use crate::host::HostError;
use thiserror::Error;

/// Failures that end a command invocation. Cancellations and other
/// "nothing to do" paths are not errors; see
/// [`InsertOutcome`](crate::inserter::InsertOutcome).
#[derive(Debug, Error)]
pub enum InsertError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    SchemaLoad(#[from] SchemaLoadError),
}
