use thiserror::Error;

/// Errors surfaced by the store itself.
///
/// Operation failures are not represented here; they travel through the
/// dispatch cycle as failure-action payloads.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum StoreError {
    /// The dispatch task is gone and the queue can no longer be drained.
    #[error("state store task has stopped")]
    Closed,
}
