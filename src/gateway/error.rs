//! Error types for the posts gateway.
//!
//! Two failure kinds exist: the request never completed (transport) or the
//! server answered with a non-2xx status. Past the gateway both collapse
//! into the error's display string.

use reqwest::StatusCode;
use thiserror::Error;

/// Gateway operation, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// User-facing message for a failed operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch posts",
            Operation::Create => "Failed to add post",
            Operation::Update => "Failed to update post",
            Operation::Delete => "Failed to delete post",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

/// Errors that can occur during gateway calls.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request could not be sent, or the response could not be received or decoded.
    /// The source carries no URL; the base URL is already on screen.
    #[error("{}: {source}", operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered outside the 2xx range
    #[error("{}", operation.failure_message())]
    Status {
        operation: Operation,
        status: StatusCode,
    },
}

impl GatewayError {
    pub fn operation(&self) -> Operation {
        match self {
            GatewayError::Transport { operation, .. } => *operation,
            GatewayError::Status { operation, .. } => *operation,
        }
    }

    /// Error kind string for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Transport { .. } => "transport_failure",
            GatewayError::Status { .. } => "status_failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_operation_message() {
        let err = GatewayError::Status {
            operation: Operation::List,
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.to_string(), "Failed to fetch posts");
        assert_eq!(err.kind(), "status_failure");
        assert_eq!(err.operation(), Operation::List);
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(Operation::Create.failure_message(), "Failed to add post");
        assert_eq!(Operation::Update.failure_message(), "Failed to update post");
        assert_eq!(Operation::Delete.failure_message(), "Failed to delete post");
    }
}
