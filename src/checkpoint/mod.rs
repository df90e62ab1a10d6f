//! Snapshots of a calculator session.
//!
//! A checkpoint captures the registers, both screen texts, the configuration
//! and the transition log. It is a plain value: the caller decides whether
//! to keep it in memory, write it out as JSON, or pack it with bincode.
//! The calculator never persists anything on its own.

use crate::config::CalculatorConfig;
use crate::core::StateHistory;
use crate::machine::{Phase, Registers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{CheckpointError, Codec};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator.
/// Does NOT include the screen; restoring re-renders into whatever screen
/// the target calculator owns.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub registers: Registers,

    /// History line at capture time
    pub history_text: String,

    /// Display text at capture time
    pub display_text: String,

    pub config: CalculatorConfig,

    /// Transition log at capture time
    pub transitions: StateHistory<Phase>,
}

impl Checkpoint {
    pub(crate) fn capture(
        registers: &Registers,
        history_text: &str,
        display_text: &str,
        config: &CalculatorConfig,
        transitions: &StateHistory<Phase>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            registers: registers.clone(),
            history_text: history_text.to_string(),
            display_text: display_text.to_string(),
            config: config.clone(),
            transitions: transitions.clone(),
        }
    }

    /// Check the version and every register invariant.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let regs = &self.registers;
        if regs.entry.is_empty() {
            return Err(CheckpointError::Inconsistent(
                "entry is empty".to_string(),
            ));
        }
        if regs.previous.is_some() != regs.operator.is_some() {
            return Err(CheckpointError::Inconsistent(
                "previous operand and pending operator must be set together".to_string(),
            ));
        }
        if regs.operator.is_some() && (regs.just_evaluated || regs.is_error()) {
            return Err(CheckpointError::Inconsistent(
                "an operator cannot be pending on a finished or failed entry".to_string(),
            ));
        }

        let limit = self.transitions.limit();
        if limit != Some(self.config.transition_log_limit) {
            return Err(CheckpointError::Inconsistent(format!(
                "transition log limit {limit:?} does not match configured {}",
                self.config.transition_log_limit
            )));
        }
        if self.transitions.len() > self.config.transition_log_limit {
            return Err(CheckpointError::Inconsistent(
                "transition log holds more entries than its limit".to_string(),
            ));
        }

        self.config.check().map_err(|errors| {
            CheckpointError::Inconsistent(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::Encode {
            codec: Codec::Json,
            reason: e.to_string(),
        })
    }

    /// Decode a JSON checkpoint and validate it.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
                codec: Codec::Json,
                reason: e.to_string(),
            })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            codec: Codec::Bincode,
            reason: e.to_string(),
        })
    }

    /// Decode a bincode checkpoint and validate it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self =
            bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
                codec: Codec::Bincode,
                reason: e.to_string(),
            })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
