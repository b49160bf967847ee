//! Error types for processor and provider dispatch.
//!
//! Both dispatch paths share a single error enum. The first two variants are
//! raised by the dispatch itself; the third wraps failures raised by the
//! handlers an application implements.

use crate::operation::Operation;

/// Main error type for state processing and providing.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The support predicate rejected the resource
    #[error("Resource of type {resource_type} is not supported")]
    ResourceNotSupported { resource_type: String },

    /// No handler exists for the dispatched operation
    #[error("Operation of type {} is not implemented", .operation.kind)]
    OperationNotImplemented { operation: Operation },

    /// Errors raised by an application-supplied handler
    #[error("Handler error: {0}")]
    Handler(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for dispatch operations.
pub type StateResult<T> = Result<T, StateError>;

impl StateError {
    /// Create a resource-not-supported error for the given type tag.
    pub fn resource_not_supported(resource_type: impl Into<String>) -> Self {
        Self::ResourceNotSupported {
            resource_type: resource_type.into(),
        }
    }

    /// Create an operation-not-implemented error carrying the operation.
    pub fn operation_not_implemented(operation: &Operation) -> Self {
        Self::OperationNotImplemented {
            operation: operation.clone(),
        }
    }

    /// Wrap an error raised by a handler implementation.
    pub fn handler<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Handler(error.into())
    }

    /// The operation carried by this error, if any.
    pub fn operation(&self) -> Option<&Operation> {
        match self {
            Self::OperationNotImplemented { operation } => Some(operation),
            _ => None,
        }
    }

    /// Stable code for programmatic handling by the hosting framework.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ResourceNotSupported { .. } => "RESOURCE_NOT_SUPPORTED",
            Self::OperationNotImplemented { .. } => "OPERATION_NOT_IMPLEMENTED",
            Self::Handler(_) => "HANDLER_ERROR",
        }
    }

    /// Suggested HTTP status for translating this error into a response.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ResourceNotSupported { .. } => 400,
            Self::OperationNotImplemented { .. } => 405,
            Self::Handler(_) => 500,
        }
    }
}
