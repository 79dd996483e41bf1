//! RemoteDirectory: DirectoryResolver backed by the gRPC directory service

use async_trait::async_trait;
use groundlink_interface::{
    ConnectionInfo, DirectoryAddress, DirectoryResolver, LinkError, ProviderDescriptor,
    ProviderListing, Result,
};
use groundlink_proto::{
    directory_service_client::DirectoryServiceClient, LookupProvidersRequest,
    LookupProvidersResponse,
};
use tracing::{debug, info};

use crate::error::ConnectError;
use crate::transport;
use crate::TransportOptions;

/// Looks providers up in a remote directory.
///
/// Every call to [`resolve`](DirectoryResolver::resolve) opens a fresh channel,
/// performs a single `LookupProviders` exchange and drops the channel again.
/// Nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct RemoteDirectory {
    options: TransportOptions,
}

impl RemoteDirectory {
    pub fn new(options: TransportOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl DirectoryResolver for RemoteDirectory {
    async fn resolve(&self, address: &DirectoryAddress) -> Result<ProviderListing> {
        // Reject what we cannot dial before touching the network
        let endpoint = transport::endpoint(
            address.scheme(),
            address.host(),
            address.port(),
            &self.options,
        )
        .map_err(|e| match e {
            ConnectError::Transport(_) => {
                LinkError::ResolutionFailed(format!("{}: {}", address, e))
            }
            _ => LinkError::MalformedAddress(format!("{}: {}", address, e)),
        })?;

        debug!("Connecting to directory at {}", address);

        let channel = endpoint.connect().await.map_err(|e| {
            LinkError::ResolutionFailed(format!("{}: connection failed: {}", address, e))
        })?;

        let request = LookupProvidersRequest {
            registry: address.registry().to_string(),
        };

        let response = DirectoryServiceClient::new(channel)
            .lookup_providers(request)
            .await
            .map_err(|status| lookup_error(address, ConnectError::from(status)))?;

        let listing = listing_from_response(response.into_inner())
            .map_err(|e| lookup_error(address, e))?;

        info!(
            "Directory {} returned {} provider(s)",
            address,
            listing.len()
        );
        debug!("Providers: {:?}", listing.names());

        Ok(listing)
    }
}

/// Sort a failed lookup into "could not reach" versus "reached, but nonsense came back"
fn lookup_error(address: &DirectoryAddress, err: ConnectError) -> LinkError {
    if err.is_transport() {
        LinkError::ResolutionFailed(format!("{}: {}", address, err))
    } else {
        LinkError::ProtocolError(format!("{}: {}", address, err))
    }
}

/// Convert a directory response into a listing, preserving order.
///
/// Every summary must carry a provider name and connection details.
pub(crate) fn listing_from_response(
    response: LookupProvidersResponse,
) -> std::result::Result<ProviderListing, ConnectError> {
    response
        .providers
        .into_iter()
        .enumerate()
        .map(|(index, summary)| {
            if summary.provider_name.is_empty() {
                return Err(ConnectError::MalformedEntry(format!(
                    "entry {} has no provider name",
                    index
                )));
            }

            let connection = summary.connection.ok_or_else(|| {
                ConnectError::MalformedEntry(format!(
                    "provider {:?} has no connection details",
                    summary.provider_name
                ))
            })?;

            Ok(ProviderDescriptor::new(
                summary.provider_name,
                ConnectionInfo::new(connection.service_uri).with_domain(connection.domain),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use groundlink_interface::LinkErrorKind;
    use groundlink_proto::{ProviderConnection, ProviderSummary};
    use std::time::Duration;

    fn summary(name: &str, uri: &str) -> ProviderSummary {
        ProviderSummary {
            provider_name: name.to_string(),
            connection: Some(ProviderConnection {
                service_uri: uri.to_string(),
                domain: vec!["esa".to_string()],
            }),
        }
    }

    #[test]
    fn test_listing_preserves_order() {
        let response = LookupProvidersResponse {
            providers: vec![
                summary("App: camera", "grpc://10.0.0.5:50100"),
                summary("App: hello-world", "grpc://10.0.0.5:50101"),
            ],
        };

        let listing = listing_from_response(response).unwrap();
        assert_eq!(listing.names(), vec!["App: camera", "App: hello-world"]);

        let second = listing.iter().nth(1).unwrap();
        assert_eq!(second.connection().uri, "grpc://10.0.0.5:50101");
        assert_eq!(second.connection().domain, vec!["esa".to_string()]);
    }

    #[test]
    fn test_empty_response_is_empty_listing() {
        let listing = listing_from_response(LookupProvidersResponse::default()).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_entry_without_connection_is_malformed() {
        let response = LookupProvidersResponse {
            providers: vec![ProviderSummary {
                provider_name: "App: hello-world".to_string(),
                connection: None,
            }],
        };

        assert!(matches!(
            listing_from_response(response),
            Err(ConnectError::MalformedEntry(_))
        ));
    }

    #[test]
    fn test_entry_without_name_is_malformed() {
        let response = LookupProvidersResponse {
            providers: vec![summary("", "grpc://10.0.0.5:50100")],
        };

        assert!(matches!(
            listing_from_response(response),
            Err(ConnectError::MalformedEntry(_))
        ));
    }

    #[test]
    fn test_lookup_error_classification() {
        let address = DirectoryAddress::parse("grpc://127.0.0.1:7000/dir").unwrap();

        let unreachable = lookup_error(
            &address,
            ConnectError::Status(tonic::Status::unavailable("connection refused")),
        );
        assert_eq!(unreachable.kind(), LinkErrorKind::ResolutionFailed);

        let garbage = lookup_error(&address, ConnectError::MalformedEntry("x".to_string()));
        assert_eq!(garbage.kind(), LinkErrorKind::ProtocolError);

        let unimplemented = lookup_error(
            &address,
            ConnectError::Status(tonic::Status::unimplemented("not a directory")),
        );
        assert_eq!(unimplemented.kind(), LinkErrorKind::ProtocolError);
    }

    #[tokio::test]
    async fn test_unsupported_scheme_fails_before_dialing() {
        let address =
            DirectoryAddress::parse("maltcp://123.123.123.123:1024/nanosat-mo-supervisor-Directory")
                .unwrap();

        let err = RemoteDirectory::default().resolve(&address).await.unwrap_err();
        assert_eq!(err.kind(), LinkErrorKind::MalformedAddress);
    }

    #[tokio::test]
    async fn test_unreachable_tls_directory() {
        let options = TransportOptions {
            connect_timeout: Duration::from_millis(500),
            request_timeout: Duration::from_millis(500),
        };
        let address = DirectoryAddress::parse("https://127.0.0.1:1/registry").unwrap();

        let err = RemoteDirectory::new(options)
            .resolve(&address)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), LinkErrorKind::ResolutionFailed);
    }

    #[tokio::test]
    async fn test_unreachable_directory() {
        let options = TransportOptions {
            connect_timeout: Duration::from_millis(500),
            request_timeout: Duration::from_millis(500),
        };
        // Port 1 on loopback is not expected to be listening
        let address = DirectoryAddress::parse("grpc://127.0.0.1:1/registry").unwrap();

        let err = RemoteDirectory::new(options)
            .resolve(&address)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), LinkErrorKind::ResolutionFailed);
    }
}
