use thiserror::Error;

/// Result type alias for signup operations
pub type Result<T> = anyhow::Result<T>;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("The wizard has already been confirmed")]
    AlreadyConfirmed,

    #[error("Confirm is only available on the final step (current step {current} of {total})")]
    NotOnFinalStep { current: usize, total: usize },

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
