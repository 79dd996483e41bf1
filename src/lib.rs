/*!
 * Groundlink - set-and-command client for directory-registered providers
 *
 * Looks up providers in a remote directory, binds to one by exact name,
 * writes a parameter on it and launches an action:
 * - Directory resolution and provider sessions over gRPC (groundlink-connect)
 * - Typed parameter and action values configured in TOML
 * - Structured logging through tracing
 * - A distinct process exit code per failure stage
 */

pub mod config;
pub mod error;
pub mod logging;
pub mod workflow;

// Re-export commonly used types
pub use config::{GroundConfig, LogLevel, TransportConfig};
pub use error::{GroundError, Result};
pub use workflow::{SetAndCommand, WorkflowPlan, WorkflowReport, WorkflowState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
