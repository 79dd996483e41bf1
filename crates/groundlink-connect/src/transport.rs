//! Endpoint construction shared by the directory client and the binder

use groundlink_interface::DirectoryAddress;
use tonic::transport::{ClientTlsConfig, Endpoint};

use crate::error::ConnectError;
use crate::TransportOptions;

const PLAINTEXT_SCHEMES: &[&str] = &["grpc", "http"];
const TLS_SCHEMES: &[&str] = &["grpcs", "https"];

/// Build a gRPC endpoint for `host:port`.
///
/// `grpc`/`http` dial plaintext, `grpcs`/`https` dial TLS verified against the
/// bundled webpki roots. Nothing is dialed here; callers decide between eager
/// and lazy connection.
pub(crate) fn endpoint(
    scheme: &str,
    host: &str,
    port: u16,
    options: &TransportOptions,
) -> Result<Endpoint, ConnectError> {
    let tls = if PLAINTEXT_SCHEMES.contains(&scheme) {
        false
    } else if TLS_SCHEMES.contains(&scheme) {
        true
    } else {
        return Err(ConnectError::UnsupportedScheme(scheme.to_string()));
    };

    let uri = format!("{}://{}:{}", if tls { "https" } else { "http" }, host, port);
    let mut endpoint =
        Endpoint::from_shared(uri.clone()).map_err(|e| ConnectError::InvalidEndpoint {
            uri,
            reason: e.to_string(),
        })?;

    if tls {
        // SNI and certificate checks use the bare host, without IPv6 brackets
        let server_name = host.trim_start_matches('[').trim_end_matches(']');
        endpoint = endpoint.tls_config(
            ClientTlsConfig::new()
                .with_webpki_roots()
                .domain_name(server_name),
        )?;
    }

    Ok(endpoint
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout))
}

/// Build an endpoint from a provider's service URI (`grpc://host:port`).
///
/// Service URIs follow the same rules as directory addresses: scheme, host and
/// an explicit port are required.
pub(crate) fn endpoint_from_uri(
    uri: &str,
    options: &TransportOptions,
) -> Result<Endpoint, ConnectError> {
    let parsed = DirectoryAddress::parse(uri).map_err(|e| ConnectError::InvalidEndpoint {
        uri: uri.to_string(),
        reason: e.to_string(),
    })?;

    endpoint(parsed.scheme(), parsed.host(), parsed.port(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_for_grpc_scheme() {
        let endpoint = endpoint("grpc", "127.0.0.1", 50051, &TransportOptions::default()).unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().host(), Some("127.0.0.1"));
        assert_eq!(endpoint.uri().port_u16(), Some(50051));
    }

    #[test]
    fn test_endpoint_for_tls_schemes() {
        for scheme in ["grpcs", "https"] {
            let endpoint = endpoint(
                scheme,
                "directory.example.org",
                443,
                &TransportOptions::default(),
            )
            .unwrap();
            assert_eq!(endpoint.uri().scheme_str(), Some("https"), "{}", scheme);
            assert_eq!(endpoint.uri().host(), Some("directory.example.org"));
            assert_eq!(endpoint.uri().port_u16(), Some(443));
        }
    }

    #[test]
    fn test_tls_endpoint_for_ip_literals() {
        let options = TransportOptions::default();
        assert!(endpoint("grpcs", "127.0.0.1", 8443, &options).is_ok());
        assert!(endpoint("grpcs", "[::1]", 8443, &options).is_ok());
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = endpoint("maltcp", "127.0.0.1", 1024, &TransportOptions::default()).unwrap_err();
        assert!(matches!(err, ConnectError::UnsupportedScheme(s) if s == "maltcp"));
    }

    #[test]
    fn test_endpoint_from_uri() {
        let endpoint =
            endpoint_from_uri("grpc://10.0.0.5:50051", &TransportOptions::default()).unwrap();
        assert_eq!(endpoint.uri().host(), Some("10.0.0.5"));
        assert_eq!(endpoint.uri().port_u16(), Some(50051));

        let endpoint =
            endpoint_from_uri("grpcs://10.0.0.5:50051", &TransportOptions::default()).unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("https"));
    }

    #[test]
    fn test_endpoint_from_bad_uris() {
        let options = TransportOptions::default();
        for uri in [
            "",
            "10.0.0.5:50051",
            "grpc://10.0.0.5",
            "grpc://:50051",
            "https://10.0.0.5",
        ] {
            assert!(
                matches!(
                    endpoint_from_uri(uri, &options),
                    Err(ConnectError::InvalidEndpoint { .. })
                ),
                "expected {:?} to be rejected",
                uri
            );
        }
    }
}
