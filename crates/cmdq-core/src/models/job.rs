//! Command job model
//!
//! A `Job` pairs a command-type tag with a JSON payload. The payload is
//! serialized to text at construction time and only parsed back on demand, so
//! the job itself stays immutable and can ride inside any queue message
//! envelope unchanged.

use serde::{Deserialize, Serialize};

use crate::payload_error::InvalidPayloadError;

/// A job which is based on a command.
///
/// The command type is an opaque routing key chosen by the producer; it is
/// never interpreted as a type or symbol name. The payload is kept as the
/// JSON text produced at construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    command_type: String,
    payload: String,
}

impl Job {
    /// Create a new job, serializing the payload immediately.
    ///
    /// Fails with [`InvalidPayloadError::Serialize`] if the payload cannot be
    /// represented as JSON (for example a map with non-string keys). No
    /// validation is applied to the command type.
    pub fn new<T>(
        command_type: impl Into<String>,
        payload: &T,
    ) -> Result<Self, InvalidPayloadError>
    where
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(payload).map_err(InvalidPayloadError::Serialize)?;
        Ok(Self {
            command_type: command_type.into(),
            payload,
        })
    }

    pub fn command_type(&self) -> &str {
        &self.command_type
    }

    /// Parse the stored payload text back into a structured value.
    ///
    /// Fails with [`InvalidPayloadError::Deserialize`] if the stored text is
    /// not valid JSON. For jobs this crate constructed that cannot happen;
    /// jobs restored from an external store may carry corrupted text.
    pub fn payload(&self) -> Result<serde_json::Value, InvalidPayloadError> {
        serde_json::from_str(&self.payload).map_err(InvalidPayloadError::Deserialize)
    }

    /// Human-readable label for logging and diagnostics.
    pub fn label(&self) -> String {
        format!("CommandJob ({})", self.command_type)
    }
}
