//! SDK error types.
//!
//! Every resource operation reports failures as [`SdkError::Resource`],
//! tagged with the [`ResourceKind`] of the group that failed. The transport
//! cause, when there is one, is kept as the error source and its message is
//! embedded in the resource message.

use std::fmt;

use crate::client::ClientError;

/// Resource group an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Wallet operations.
    Wallet,
    /// Service registration and discovery.
    Service,
    /// Payment and receipt lookups.
    Payment,
    /// Dispute operations.
    Dispute,
    /// Webhook operations.
    Webhook,
    /// Service execution.
    Execution,
    /// Agent reputation lookups.
    Reputation,
}

impl ResourceKind {
    /// Returns the lowercase name of the resource.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::Service => "service",
            Self::Payment => "payment",
            Self::Dispute => "dispute",
            Self::Webhook => "webhook",
            Self::Execution => "execution",
            Self::Reputation => "reputation",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SDK errors.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Transport or API error outside any resource operation.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Invalid caller input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A resource operation failed.
    #[error("{kind} error: {message}")]
    Resource {
        /// Resource group that failed.
        kind: ResourceKind,
        /// Human-readable message, including the cause's message.
        message: String,
        /// Underlying transport or parse error.
        #[source]
        source: Option<ClientError>,
    },
}

impl SdkError {
    /// Creates a resource error without an underlying cause.
    #[must_use]
    pub fn resource(kind: ResourceKind, message: impl Into<String>) -> Self {
        Self::Resource {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Wraps a transport error as a resource error.
    ///
    /// `context` describes the failed action, e.g. `"failed to create wallet"`.
    #[must_use]
    pub fn wrap(kind: ResourceKind, context: &str, cause: ClientError) -> Self {
        Self::Resource {
            kind,
            message: format!("{}: {}", context, cause),
            source: Some(cause),
        }
    }

    /// Returns the resource kind, if this is a resource error.
    #[must_use]
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Resource { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the HTTP status of the underlying cause, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status(),
            Self::Resource {
                source: Some(e), ..
            } => e.status(),
            _ => None,
        }
    }
}
