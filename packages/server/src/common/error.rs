use thiserror::Error;

/// Domain errors surfaced by every action in the crate.
///
/// The split matters to callers: `Validation` carries user-correctable
/// messages, `Storage` is an opaque, retryable infrastructure failure, and
/// the two must never be conflated.
#[derive(Error, Debug)]
pub enum DomainError {
    /// One or more user-correctable input problems. Validation never stops
    /// at the first violation; every message is collected before rejecting.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The requester is not the owner of the resource.
    #[error("permission denied")]
    Forbidden,

    /// No matching record.
    #[error("not found")]
    NotFound,

    /// An opaque identifier crossing the API boundary was malformed.
    #[error("invalid identifier")]
    InvalidId,

    /// A search term was unusable (blank or empty).
    #[error("invalid search query")]
    InvalidQuery,

    /// Generic credential failure. Unknown username and wrong password
    /// produce this same error so login cannot be used to enumerate users.
    #[error("invalid username or password")]
    Authentication,

    /// Infrastructure failure in the persistence layer.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Failure in an injected collaborator (e.g. the password hasher).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Builds a `Validation` error from collected messages.
    ///
    /// Callers accumulate all violations first and hand the whole list over.
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation(messages)
    }

    /// Returns the validation messages, if this is a validation failure.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
