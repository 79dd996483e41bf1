/// gRPC protocol definitions for groundlink.
///
/// This crate provides the message types and unary clients for the two
/// services a ground tool talks to: the provider directory and the providers
/// themselves. The wire contract is `proto/groundlink/v1/groundlink.proto`;
/// the Rust side is kept in-tree (`src/groundlink.v1.rs`) so building does not
/// depend on a `protoc` installation. Keep both files in step.
pub mod groundlink {
    pub mod v1 {
        include!("groundlink.v1.rs");
    }
}

// Re-export commonly used types for convenience
pub use groundlink::v1::*;
