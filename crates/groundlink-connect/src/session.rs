//! RemoteProvider: ProviderSession that proxies calls to a provider via gRPC

use async_trait::async_trait;
use groundlink_interface::{Attribute, LinkError, ProviderSession, Result};
use groundlink_proto::{
    provider_service_client::ProviderServiceClient, LaunchActionRequest, SetParameterRequest,
};
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;
use tracing::debug;

use crate::convert::to_wire;
use crate::error::ConnectError;

/// Metadata key carrying the provider's domain on every call
pub const DOMAIN_METADATA_KEY: &str = "x-groundlink-domain";

/// A session with one provider, reached over an established gRPC channel.
///
/// # Example
///
/// ```rust,no_run
/// use groundlink_connect::RemoteProvider;
/// use groundlink_interface::{Attribute, ProviderSession};
/// use tonic::transport::Channel;
///
/// # async fn example() -> anyhow::Result<()> {
/// let channel = Channel::from_static("http://10.0.0.5:50051").connect().await?;
/// let mut provider = RemoteProvider::new("App: hello-world".to_string(), channel, None);
///
/// provider
///     .set_parameter("A_Parameter", &Attribute::from("The parameter was set!"))
///     .await?;
/// provider.close().await;
/// # Ok(())
/// # }
/// ```
pub struct RemoteProvider {
    name: String,

    /// The gRPC client; `None` once the session has been closed
    client: Option<ProviderServiceClient<Channel>>,

    /// Encoded domain, attached to every request when present
    domain: Option<MetadataValue<Ascii>>,
}

impl RemoteProvider {
    /// Create a session over a connected channel.
    ///
    /// Use [`GrpcBinder`](crate::GrpcBinder) to dial and validate a provider
    /// from its directory entry.
    pub fn new(name: String, channel: Channel, domain: Option<MetadataValue<Ascii>>) -> Self {
        Self {
            name,
            client: Some(ProviderServiceClient::new(channel)),
            domain,
        }
    }

    /// Encode a domain as a dot-separated metadata value. An empty domain encodes to `None`.
    pub fn encode_domain(
        domain: &[String],
    ) -> std::result::Result<Option<MetadataValue<Ascii>>, ConnectError> {
        if domain.is_empty() {
            return Ok(None);
        }
        let value = domain.join(".").parse::<MetadataValue<Ascii>>()?;
        Ok(Some(value))
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// Helper to attach domain metadata to a request
    fn with_domain<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(domain) = &self.domain {
            request
                .metadata_mut()
                .insert(DOMAIN_METADATA_KEY, domain.clone());
        }
        request
    }

    fn client(&mut self) -> std::result::Result<&mut ProviderServiceClient<Channel>, ConnectError> {
        self.client
            .as_mut()
            .ok_or_else(|| ConnectError::SessionClosed(self.name.clone()))
    }

    async fn try_set_parameter(
        &mut self,
        name: &str,
        value: &Attribute,
    ) -> std::result::Result<(), ConnectError> {
        let request = self.with_domain(SetParameterRequest {
            name: name.to_string(),
            value: Some(to_wire(value)),
        });

        let ack = self.client()?.set_parameter(request).await?.into_inner();
        acknowledge(ack.accepted, ack.reason)
    }

    async fn try_invoke_action(
        &mut self,
        name: &str,
        arguments: &[Attribute],
    ) -> std::result::Result<(), ConnectError> {
        let request = self.with_domain(LaunchActionRequest {
            name: name.to_string(),
            arguments: arguments.iter().map(to_wire).collect(),
        });

        let ack = self.client()?.launch_action(request).await?.into_inner();
        acknowledge(ack.accepted, ack.reason)
    }
}

fn acknowledge(accepted: bool, reason: String) -> std::result::Result<(), ConnectError> {
    if accepted {
        Ok(())
    } else if reason.is_empty() {
        Err(ConnectError::Rejected("no reason given".to_string()))
    } else {
        Err(ConnectError::Rejected(reason))
    }
}

#[async_trait]
impl ProviderSession for RemoteProvider {
    fn provider_name(&self) -> &str {
        &self.name
    }

    async fn set_parameter(&mut self, name: &str, value: &Attribute) -> Result<()> {
        debug!(
            "Setting parameter {} = {} ({}) on provider {}",
            name,
            value,
            value.type_name(),
            self.name
        );

        self.try_set_parameter(name, value)
            .await
            .map_err(|e| LinkError::RemoteSetFailed {
                parameter: name.to_string(),
                reason: e.to_string(),
            })
    }

    async fn invoke_action(&mut self, name: &str, arguments: &[Attribute]) -> Result<()> {
        debug!(
            "Invoking action {} with {} argument(s) on provider {}",
            name,
            arguments.len(),
            self.name
        );

        self.try_invoke_action(name, arguments)
            .await
            .map_err(|e| LinkError::RemoteInvokeFailed {
                action: name.to_string(),
                reason: e.to_string(),
            })
    }

    async fn close(&mut self) {
        if self.client.take().is_some() {
            debug!("Closed session with provider {}", self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundlink_interface::LinkErrorKind;
    use std::time::Duration;
    use tonic::transport::Endpoint;

    fn lazy_provider() -> RemoteProvider {
        // Nothing listens on port 1; every call fails at the transport
        let channel = Endpoint::from_static("http://127.0.0.1:1")
            .connect_timeout(Duration::from_millis(500))
            .timeout(Duration::from_millis(500))
            .connect_lazy();
        RemoteProvider::new("App: hello-world".to_string(), channel, None)
    }

    #[test]
    fn test_remote_provider_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<RemoteProvider>();
    }

    #[test]
    fn test_encode_domain() {
        assert!(RemoteProvider::encode_domain(&[]).unwrap().is_none());

        let encoded = RemoteProvider::encode_domain(&["esa".to_string(), "NMF_SDK".to_string()])
            .unwrap()
            .unwrap();
        assert_eq!(encoded.to_str().unwrap(), "esa.NMF_SDK");

        let err = RemoteProvider::encode_domain(&["bad\nvalue".to_string()]).unwrap_err();
        assert!(matches!(err, ConnectError::InvalidMetadata(_)));
    }

    #[test]
    fn test_acknowledge() {
        assert!(acknowledge(true, String::new()).is_ok());
        assert!(matches!(
            acknowledge(false, "unknown action".to_string()),
            Err(ConnectError::Rejected(reason)) if reason == "unknown action"
        ));
        assert!(matches!(
            acknowledge(false, String::new()),
            Err(ConnectError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_set_parameter_transport_failure() {
        let mut provider = lazy_provider();

        let err = provider
            .set_parameter("A_Parameter", &Attribute::from("The parameter was set!"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), LinkErrorKind::RemoteSetFailed);
    }

    #[tokio::test]
    async fn test_invoke_action_transport_failure() {
        let mut provider = lazy_provider();

        let err = provider
            .invoke_action("Go", &[Attribute::Double(1.35565)])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), LinkErrorKind::RemoteInvokeFailed);
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_blocks_calls() {
        let mut provider = lazy_provider();
        assert!(!provider.is_closed());

        provider.close().await;
        provider.close().await;
        assert!(provider.is_closed());

        let err = provider
            .invoke_action("Go", &[Attribute::Double(1.35565)])
            .await
            .unwrap_err();
        match err {
            LinkError::RemoteInvokeFailed { action, reason } => {
                assert_eq!(action, "Go");
                assert!(reason.contains("closed"));
            }
            other => panic!("Expected RemoteInvokeFailed, got {:?}", other),
        }
    }
}
