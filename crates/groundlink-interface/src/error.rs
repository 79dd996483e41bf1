//! Error kinds for the discover-then-invoke workflow

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Malformed directory address: {0}")]
    MalformedAddress(String),

    #[error("Directory resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Directory protocol error: {0}")]
    ProtocolError(String),

    #[error("No such provider found: {name}")]
    ProviderNotFound { name: String },

    #[error("Failed to bind to provider {provider}: {reason}")]
    BindFailed { provider: String, reason: String },

    #[error("Failed to set parameter {parameter}: {reason}")]
    RemoteSetFailed { parameter: String, reason: String },

    #[error("Failed to invoke action {action}: {reason}")]
    RemoteInvokeFailed { action: String, reason: String },
}

pub type Result<T> = std::result::Result<T, LinkError>;

impl LinkError {
    pub fn kind(&self) -> LinkErrorKind {
        match self {
            LinkError::MalformedAddress(_) => LinkErrorKind::MalformedAddress,
            LinkError::ResolutionFailed(_) => LinkErrorKind::ResolutionFailed,
            LinkError::ProtocolError(_) => LinkErrorKind::ProtocolError,
            LinkError::ProviderNotFound { .. } => LinkErrorKind::ProviderNotFound,
            LinkError::BindFailed { .. } => LinkErrorKind::BindFailed,
            LinkError::RemoteSetFailed { .. } => LinkErrorKind::RemoteSetFailed,
            LinkError::RemoteInvokeFailed { .. } => LinkErrorKind::RemoteInvokeFailed,
        }
    }

    /// Check if this error came back from a remote call on an open session
    pub fn is_remote_call(&self) -> bool {
        matches!(
            self,
            LinkError::RemoteSetFailed { .. } | LinkError::RemoteInvokeFailed { .. }
        )
    }

    /// Check if this error was raised while talking to the directory
    pub fn is_directory(&self) -> bool {
        matches!(
            self,
            LinkError::ResolutionFailed(_) | LinkError::ProtocolError(_)
        )
    }
}

/// Fieldless mirror of [`LinkError`], for matching on the cause alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkErrorKind {
    MalformedAddress,
    ResolutionFailed,
    ProtocolError,
    ProviderNotFound,
    BindFailed,
    RemoteSetFailed,
    RemoteInvokeFailed,
}

impl fmt::Display for LinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkErrorKind::MalformedAddress => write!(f, "malformed-address"),
            LinkErrorKind::ResolutionFailed => write!(f, "resolution-failed"),
            LinkErrorKind::ProtocolError => write!(f, "protocol-error"),
            LinkErrorKind::ProviderNotFound => write!(f, "provider-not-found"),
            LinkErrorKind::BindFailed => write!(f, "bind-failed"),
            LinkErrorKind::RemoteSetFailed => write!(f, "remote-set-failed"),
            LinkErrorKind::RemoteInvokeFailed => write!(f, "remote-invoke-failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkError::ProviderNotFound {
            name: "App: hello-world".to_string(),
        };
        assert_eq!(err.to_string(), "No such provider found: App: hello-world");

        let err = LinkError::RemoteSetFailed {
            parameter: "A_Parameter".to_string(),
            reason: "unknown parameter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to set parameter A_Parameter: unknown parameter"
        );
    }

    #[test]
    fn test_error_groups() {
        assert!(LinkError::ResolutionFailed("down".to_string()).is_directory());
        assert!(LinkError::ProtocolError("garbage".to_string()).is_directory());
        assert!(!LinkError::MalformedAddress("x".to_string()).is_directory());

        let invoke = LinkError::RemoteInvokeFailed {
            action: "Go".to_string(),
            reason: "arity".to_string(),
        };
        assert!(invoke.is_remote_call());
        assert!(!invoke.is_directory());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LinkErrorKind::BindFailed.to_string(), "bind-failed");
        assert_eq!(
            LinkError::BindFailed {
                provider: "p".to_string(),
                reason: "r".to_string()
            }
            .kind(),
            LinkErrorKind::BindFailed
        );
    }
}
