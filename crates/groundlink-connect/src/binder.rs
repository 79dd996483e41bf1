//! GrpcBinder: opens provider sessions from directory entries

use async_trait::async_trait;
use groundlink_interface::{
    LinkError, ProviderDescriptor, ProviderSession, Result, SessionBinder,
};
use tracing::{debug, info};

use crate::session::RemoteProvider;
use crate::transport;
use crate::TransportOptions;

/// Dials providers over gRPC.
///
/// Binding is eager: the channel is connected before a session is handed out,
/// so an unreachable provider is reported at bind time rather than on the
/// first call.
///
/// # Example
///
/// ```rust,no_run
/// use groundlink_connect::{GrpcBinder, TransportOptions};
/// use groundlink_interface::{ConnectionInfo, ProviderDescriptor, SessionBinder};
///
/// # async fn example() -> anyhow::Result<()> {
/// let binder = GrpcBinder::new(TransportOptions::default());
/// let provider = ProviderDescriptor::new(
///     "App: hello-world",
///     ConnectionInfo::new("grpc://10.0.0.5:50051").with_domain(vec!["esa".to_string()]),
/// );
///
/// let mut session = binder.open_session(&provider).await?;
/// session.close().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrpcBinder {
    options: TransportOptions,
}

impl GrpcBinder {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl SessionBinder for GrpcBinder {
    async fn open_session(
        &self,
        descriptor: &ProviderDescriptor,
    ) -> Result<Box<dyn ProviderSession>> {
        let provider = descriptor.name();
        let connection = descriptor.connection();
        let bind_failed = |reason: String| LinkError::BindFailed {
            provider: provider.to_string(),
            reason,
        };

        // Validate the connection details before dialing
        let endpoint = transport::endpoint_from_uri(&connection.uri, &self.options)
            .map_err(|e| bind_failed(e.to_string()))?;
        let domain = RemoteProvider::encode_domain(&connection.domain)
            .map_err(|e| bind_failed(e.to_string()))?;

        debug!("Connecting to provider {} at {}", provider, connection.uri);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| bind_failed(format!("Connection failed: {}", e)))?;

        info!("Bound to provider {} at {}", provider, connection.uri);

        Ok(Box::new(RemoteProvider::new(
            provider.to_string(),
            channel,
            domain,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundlink_interface::{ConnectionInfo, LinkErrorKind};
    use std::time::Duration;

    fn quick_binder() -> GrpcBinder {
        GrpcBinder::new(TransportOptions {
            connect_timeout: Duration::from_millis(500),
            request_timeout: Duration::from_millis(500),
        })
    }

    async fn bind_error(connection: ConnectionInfo) -> LinkError {
        let descriptor = ProviderDescriptor::new("App: hello-world", connection);
        match quick_binder().open_session(&descriptor).await {
            Ok(_) => panic!("Expected bind to fail"),
            Err(e) => e,
        }
    }

    #[tokio::test]
    async fn test_invalid_uri_fails_bind() {
        let err = bind_error(ConnectionInfo::new("not a uri")).await;
        assert_eq!(err.kind(), LinkErrorKind::BindFailed);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_fails_bind() {
        let err = bind_error(ConnectionInfo::new("maltcp://10.0.0.5:1024/hello-world")).await;
        assert_eq!(err.kind(), LinkErrorKind::BindFailed);
    }

    #[tokio::test]
    async fn test_unencodable_domain_fails_bind() {
        let err = bind_error(
            ConnectionInfo::new("grpc://127.0.0.1:1").with_domain(vec!["bad\ndomain".to_string()]),
        )
        .await;
        assert_eq!(err.kind(), LinkErrorKind::BindFailed);
    }

    #[tokio::test]
    async fn test_unreachable_provider_fails_bind() {
        let err = bind_error(ConnectionInfo::new("grpc://127.0.0.1:1")).await;
        match err {
            LinkError::BindFailed { provider, reason } => {
                assert_eq!(provider, "App: hello-world");
                assert!(reason.starts_with("Connection failed"));
            }
            other => panic!("Expected BindFailed, got {:?}", other),
        }
    }
}
