//! Error types for the groundlink-connect crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    #[error("gRPC status error: {0}")]
    Status(#[from] tonic::Status),

    #[error("Invalid domain metadata: {0}")]
    InvalidMetadata(#[from] tonic::metadata::errors::InvalidMetadataValue),

    #[error("Unsupported scheme {0:?} (expected grpc, grpcs, http or https)")]
    UnsupportedScheme(String),

    #[error("Invalid endpoint {uri}: {reason}")]
    InvalidEndpoint { uri: String, reason: String },

    #[error("Malformed directory entry: {0}")]
    MalformedEntry(String),

    #[error("Rejected by provider: {0}")]
    Rejected(String),

    #[error("Session with provider {0} is closed")]
    SessionClosed(String),
}

impl ConnectError {
    /// Check if the failure happened below the RPC layer (dialing, connection loss, timeouts)
    pub fn is_transport(&self) -> bool {
        match self {
            ConnectError::Transport(_) => true,
            ConnectError::Status(status) => matches!(
                status.code(),
                tonic::Code::Unavailable | tonic::Code::DeadlineExceeded | tonic::Code::Cancelled
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(ConnectError::Status(tonic::Status::unavailable("refused")).is_transport());
        assert!(ConnectError::Status(tonic::Status::deadline_exceeded("slow")).is_transport());
        assert!(!ConnectError::Status(tonic::Status::not_found("no such action")).is_transport());
        assert!(!ConnectError::Rejected("no".to_string()).is_transport());
    }

    #[test]
    fn test_rejected_display() {
        let err = ConnectError::Rejected("unknown parameter A_Parameter".to_string());
        assert_eq!(
            err.to_string(),
            "Rejected by provider: unknown parameter A_Parameter"
        );
    }
}
