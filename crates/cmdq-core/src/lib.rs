//! Cmdq core – command job model and payload error types.
//!
//! This crate holds the `Job` value object carried through a job queue and
//! the error type raised when its payload cannot be serialized or read back.
//! Routing and dispatch live in the `cmdq-dispatch` crate.

pub mod models;
mod payload_error;

pub use models::Job;
pub use payload_error::InvalidPayloadError;
