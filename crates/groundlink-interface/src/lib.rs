//! Groundlink Core Interface: directory lookup and provider sessions
//!
//! This crate defines the domain model shared by every groundlink component and
//! the traits behind which the network collaborators live:
//!
//! 1. **Discovery**: [`DirectoryResolver`] turns a [`DirectoryAddress`] into a
//!    [`ProviderListing`], and [`select`] picks a provider out of it by name
//! 2. **Binding**: [`SessionBinder`] opens a [`ProviderSession`] from a
//!    [`ProviderDescriptor`]
//! 3. **Remote calls**: a session sets parameters and invokes actions with
//!    typed [`Attribute`] values
//!
//! # Example
//!
//! ```rust,no_run
//! use groundlink_interface::{
//!     select, Attribute, DirectoryAddress, DirectoryResolver, SessionBinder,
//! };
//!
//! async fn poke<R, B>(resolver: &R, binder: &B) -> groundlink_interface::Result<()>
//! where
//!     R: DirectoryResolver,
//!     B: SessionBinder,
//! {
//!     let address = DirectoryAddress::parse("grpc://10.0.0.5:1024/supervisor-directory")?;
//!     let listing = resolver.resolve(&address).await?;
//!
//!     if let Some(provider) = select(&listing, "App: hello-world") {
//!         let mut session = binder.open_session(provider).await?;
//!         session
//!             .set_parameter("A_Parameter", &Attribute::from("The parameter was set!"))
//!             .await?;
//!         session.invoke_action("Go", &[Attribute::Double(1.35565)]).await?;
//!         session.close().await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Implementations live elsewhere: `groundlink-connect` provides the gRPC
//! versions, and tests provide in-memory recorders.

use async_trait::async_trait;

mod address;
mod attribute;
mod error;
mod operation;
mod provider;

pub use address::DirectoryAddress;
pub use attribute::Attribute;
pub use error::{LinkError, LinkErrorKind, Result};
pub use operation::{ActionInvocation, ParameterAssignment};
pub use provider::{select, ConnectionInfo, ProviderDescriptor, ProviderListing};

/// Source of provider listings.
///
/// One call is one round trip to the directory; implementations must not
/// cache or page, and must return the directory's complete current state.
#[async_trait]
pub trait DirectoryResolver: Send + Sync {
    /// Fetch the full provider listing published at `address`.
    ///
    /// # Errors
    ///
    /// - [`LinkError::MalformedAddress`] if the address cannot be used by this
    ///   resolver (checked before any network activity)
    /// - [`LinkError::ResolutionFailed`] if the directory cannot be reached
    /// - [`LinkError::ProtocolError`] if the directory answered with data that
    ///   does not describe a listing
    ///
    /// An empty listing is a successful outcome.
    async fn resolve(&self, address: &DirectoryAddress) -> Result<ProviderListing>;
}

/// Opens sessions on providers found in a listing.
#[async_trait]
pub trait SessionBinder: Send + Sync {
    /// Bind to the provider described by `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::BindFailed`] if the connection info is unusable or
    /// the provider is unreachable at bind time.
    async fn open_session(&self, descriptor: &ProviderDescriptor)
        -> Result<Box<dyn ProviderSession>>;
}

/// A live binding to exactly one provider.
///
/// Calls are request/response and complete before returning, so calls made
/// through one session are executed in the order they are issued. The owner
/// must call [`close`](ProviderSession::close) when done.
#[async_trait]
pub trait ProviderSession: Send {
    /// Name of the provider this session is bound to
    fn provider_name(&self) -> &str;

    /// Write `value` to the provider's parameter `name`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::RemoteSetFailed`] on transport failure or when the
    /// provider rejects the name or value. The two causes are not
    /// distinguished.
    async fn set_parameter(&mut self, name: &str, value: &Attribute) -> Result<()>;

    /// Invoke the provider's action `name` with `arguments` in order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::RemoteInvokeFailed`] on transport failure or when
    /// the provider rejects the call (unknown action, wrong argument types or
    /// arity).
    async fn invoke_action(&mut self, name: &str, arguments: &[Attribute]) -> Result<()>;

    /// Release the underlying connection. Calling it more than once is a no-op.
    async fn close(&mut self);
}
