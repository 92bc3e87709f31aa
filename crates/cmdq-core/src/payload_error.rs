//! Payload error type
//!
//! The only error the core raises to its caller: a job payload either could
//! not be serialized at construction time or could not be parsed back when
//! read. Everything that goes wrong during dispatch is absorbed by the
//! dispatcher instead and never surfaces as an error.

use thiserror::Error;

/// A job payload could not be serialized or deserialized.
#[derive(Debug, Error)]
pub enum InvalidPayloadError {
    #[error("The payload could not be serialized to JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("The payload could not be deserialized from JSON: {0}")]
    Deserialize(#[source] serde_json::Error),
}
