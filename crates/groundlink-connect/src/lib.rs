//! Groundlink Connect: client-side gRPC connectivity for directory lookup and provider sessions
//!
//! This crate provides the network side of the groundlink workflow:
//!
//! - **RemoteDirectory**: implements `DirectoryResolver` with one `LookupProviders` call
//! - **GrpcBinder**: implements `SessionBinder` by dialing the provider eagerly
//! - **RemoteProvider**: implements `ProviderSession` by proxying set/invoke calls via gRPC
//!
//! `grpc` and `http` addresses are dialed in plaintext; `grpcs` and `https` use TLS.
//!
//! # Example
//!
//! ```rust,no_run
//! use groundlink_connect::{GrpcBinder, RemoteDirectory, TransportOptions};
//! use groundlink_interface::{
//!     select, Attribute, DirectoryAddress, DirectoryResolver, SessionBinder,
//! };
//!
//! async fn example() -> anyhow::Result<()> {
//!     let options = TransportOptions::default();
//!     let address = DirectoryAddress::parse("grpc://10.0.0.5:1024/supervisor-directory")?;
//!
//!     let listing = RemoteDirectory::new(options).resolve(&address).await?;
//!     if let Some(provider) = select(&listing, "App: hello-world") {
//!         let mut session = GrpcBinder::new(options).open_session(provider).await?;
//!         session.invoke_action("Go", &[Attribute::Double(1.35565)]).await?;
//!         session.close().await;
//!     }
//!     Ok(())
//! }
//! ```

use std::time::Duration;

mod convert;
pub mod binder;
pub mod directory;
pub mod error;
pub mod session;
mod transport;

pub use binder::GrpcBinder;
pub use directory::RemoteDirectory;
pub use error::ConnectError;
pub use session::RemoteProvider;

/// Timeouts applied to every channel this crate opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOptions {
    /// Upper bound for establishing the TCP/HTTP2 connection
    pub connect_timeout: Duration,

    /// Upper bound for each request/response exchange
    pub request_timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}
