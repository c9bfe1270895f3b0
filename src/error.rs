//! Error types for vms-status-sync

use thiserror::Error;

/// Errors that terminate a status sync invocation
#[derive(Debug, Error)]
pub enum SyncError {
    /// The consignment state contains no extractable words
    #[error("ConsignmentState is invalid: {0:?}")]
    InvalidState(String),

    /// The webhook event is unusable (e.g. empty consignment reference)
    #[error("Invalid webhook event: {0}")]
    InvalidEvent(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The VMS answered with a non-200 status
    #[error("{operation} failed. VMS responded with status {status}: {body}")]
    Upstream {
        operation: String,
        status: u16,
        body: String,
    },

    /// Network-level failure talking to the VMS
    #[error("{operation} failed: {reason}")]
    Transport { operation: String, reason: String },

    /// Serialization/deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyncError {
    /// HTTP status carried by an upstream failure, if any
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            SyncError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for status sync operations
pub type Result<T> = std::result::Result<T, SyncError>;
