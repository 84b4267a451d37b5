use thiserror::Error;

/// Construction-time misuse of the tree API.
///
/// Ticking never produces errors; failures inside a tree are reported as
/// [`Status::Failure`](crate::Status::Failure).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    #[error("{kind} must have at least one child")]
    EmptyComposite { kind: &'static str },

    #[error("limit {field} must be finite and non-negative, got {value}")]
    InvalidLimit { field: &'static str, value: f32 },
}
