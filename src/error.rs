use std::fmt;

/// Raised when a [`Subscription`](crate::Subscription) is built without its
/// required fields, or with an empty subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingSubscriber,
    EmptySubscriber,
    MissingEventName,
    MissingEventKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingSubscriber => write!(f, "subscription has no subscriber"),
            ValidationError::EmptySubscriber => write!(f, "subscriber must not be empty"),
            ValidationError::MissingEventName => write!(f, "subscription has no event name"),
            ValidationError::MissingEventKind => write!(f, "subscription has no event kind"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure signaled by a [`SubscriptionsRepository`](crate::SubscriptionsRepository)
/// implementation. The service never catches or retries these; they reach
/// its caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    LockPoisoned(&'static str),
    Backend(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::LockPoisoned(operation) => {
                write!(f, "repository lock poisoned during {}", operation)
            }
            RepositoryError::Backend(message) => write!(f, "repository backend error: {}", message),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Everything a [`PushChannelService`](crate::PushChannelService) operation
/// can fail with: invalid input or an underlying storage fault. Absence is
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushChannelError {
    Validation(ValidationError),
    Repository(RepositoryError),
}

impl fmt::Display for PushChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushChannelError::Validation(err) => write!(f, "validation error: {}", err),
            PushChannelError::Repository(err) => write!(f, "repository error: {}", err),
        }
    }
}

impl std::error::Error for PushChannelError {}

impl From<ValidationError> for PushChannelError {
    fn from(value: ValidationError) -> Self {
        PushChannelError::Validation(value)
    }
}

impl From<RepositoryError> for PushChannelError {
    fn from(value: RepositoryError) -> Self {
        PushChannelError::Repository(value)
    }
}
