//! Checkpoint error types.

use std::fmt;
use thiserror::Error;

/// Wire format a checkpoint was being encoded to or decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Json,
    Bincode,
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Bincode => f.write_str("bincode"),
        }
    }
}

/// Errors raised while saving, loading or restoring a checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode checkpoint as {codec}: {reason}")]
    Encode { codec: Codec, reason: String },

    #[error("Could not decode {codec} checkpoint: {reason}")]
    Decode { codec: Codec, reason: String },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot breaks a register or configuration invariant.
    #[error("Checkpoint is inconsistent: {0}")]
    Inconsistent(String),
}
