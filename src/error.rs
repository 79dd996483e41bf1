/*!
 * Error types for groundlink
 */

use std::fmt;
use std::io;

use groundlink_interface::{LinkError, LinkErrorKind};

pub type Result<T> = std::result::Result<T, GroundError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_USAGE: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_ADDRESS: i32 = 3;
pub const EXIT_DIRECTORY: i32 = 4;
pub const EXIT_NOT_FOUND: i32 = 5;
pub const EXIT_BIND: i32 = 6;
pub const EXIT_REMOTE: i32 = 7;

#[derive(Debug)]
pub enum GroundError {
    /// Command line could not be understood
    Usage(String),

    /// Configuration file missing, unreadable or invalid
    Config(String),

    /// I/O error
    Io(io::Error),
}

impl GroundError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GroundError::Usage(_) => EXIT_USAGE,
            GroundError::Config(_) | GroundError::Io(_) => EXIT_CONFIG,
        }
    }
}

/// Exit code for a workflow abort cause
pub fn link_exit_code(err: &LinkError) -> i32 {
    match err.kind() {
        LinkErrorKind::MalformedAddress => EXIT_ADDRESS,
        LinkErrorKind::ResolutionFailed | LinkErrorKind::ProtocolError => EXIT_DIRECTORY,
        LinkErrorKind::ProviderNotFound => EXIT_NOT_FOUND,
        LinkErrorKind::BindFailed => EXIT_BIND,
        LinkErrorKind::RemoteSetFailed | LinkErrorKind::RemoteInvokeFailed => EXIT_REMOTE,
    }
}

impl fmt::Display for GroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundError::Usage(msg) => write!(f, "Usage error: {}", msg),
            GroundError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GroundError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GroundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GroundError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GroundError {
    fn from(err: io::Error) -> Self {
        GroundError::Io(err)
    }
}

impl From<toml::de::Error> for GroundError {
    fn from(err: toml::de::Error) -> Self {
        GroundError::Config(format!("TOML parse error: {}", err))
    }
}
