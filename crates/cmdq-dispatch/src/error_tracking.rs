//! Optional error-tracking collaborator
//!
//! Best-effort telemetry seam for dispatch failures, shaped after an error
//! collector like Sentry. The dispatcher holds it as an `Option`; absence is
//! a no-op and never influences the dispatch outcome.

use crate::error::DispatchError;

/// Context attached to a captured dispatch failure.
#[derive(Debug, Clone, Copy)]
pub struct CaptureContext<'a> {
    pub queue_name: &'a str,
    pub job_label: &'a str,
}

/// Receives conversion and invocation failures for external tracking.
pub trait ErrorTracker: Send + Sync {
    fn capture(&self, error: &DispatchError, context: CaptureContext<'_>);
}
