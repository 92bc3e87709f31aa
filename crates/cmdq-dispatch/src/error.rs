//! Dispatch error taxonomy
//!
//! Every variant here is absorbed inside [`crate::Dispatcher::dispatch`] and
//! converted into a logged diagnostic plus a `false` outcome. The types are
//! public so an [`crate::ErrorTracker`] can inspect what it is forwarding,
//! but `dispatch` never returns them to the worker.

use cmdq_core::InvalidPayloadError;
use thiserror::Error;

/// The payload could not be turned into the configured command object.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("The payload could not be read: {0}")]
    Payload(#[from] InvalidPayloadError),

    #[error("No command shape is registered under \"{0}\"")]
    UnknownShape(String),

    #[error("The payload could not be mapped onto the command shape: {0}")]
    Mapping(#[source] serde_json::Error),
}

/// Why a dispatch attempt failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown queue \"{0}\"")]
    UnknownQueue(String),

    #[error("Unknown command type \"{0}\"")]
    UnknownCommandType(String),

    #[error("The command handler \"{0}\" is not registered")]
    UnresolvedHandler(String),

    #[error("Property mapping of the payload failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("An error occurred during command execution: {0}")]
    Invocation(#[source] anyhow::Error),
}
