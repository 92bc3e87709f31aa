//! Configurable dispatcher for jobs which run commands
//!
//! Resolves a job's handler from the static routing table, converts the
//! payload into the configured command shape and invokes the handler. Every
//! failure branch is absorbed here: the worker loop driving the queue only
//! ever sees `true` or `false`, so one malformed or misrouted job can never
//! halt it.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use cmdq_core::Job;

use crate::error::{ConversionError, DispatchError};
use crate::error_tracking::{CaptureContext, ErrorTracker};
use crate::registry::HandlerRegistry;
use crate::routing::RoutingTable;
use crate::shapes::ShapeRegistry;

pub struct Dispatcher {
    routing: RoutingTable,
    handlers: HandlerRegistry,
    shapes: ShapeRegistry,
    error_tracker: Option<Arc<dyn ErrorTracker>>,
}

impl Dispatcher {
    pub fn new(routing: RoutingTable, handlers: HandlerRegistry, shapes: ShapeRegistry) -> Self {
        Self {
            routing,
            handlers,
            shapes,
            error_tracker: None,
        }
    }

    /// Attach an error-tracking collaborator. Conversion and invocation
    /// failures are forwarded to it with queue and job context.
    pub fn with_error_tracker(mut self, error_tracker: Arc<dyn ErrorTracker>) -> Self {
        self.error_tracker = Some(error_tracker);
        self
    }

    /// Dispatch the given job from the specified queue.
    ///
    /// Returns `true` if the handler ran to completion, `false` otherwise.
    /// Failures are logged at error level; none propagate to the caller.
    pub async fn dispatch(&self, queue_name: &str, job: &Job) -> bool {
        tracing::debug!(job = %job.label(), "Dispatching command job");

        match self.try_dispatch(queue_name, job).await {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(
                    queue = queue_name,
                    command_type = job.command_type(),
                    error = %error,
                    "Failed dispatching command job"
                );
                if matches!(
                    error,
                    DispatchError::Conversion(_) | DispatchError::Invocation(_)
                ) {
                    if let Some(error_tracker) = &self.error_tracker {
                        let job_label = job.label();
                        error_tracker.capture(
                            &error,
                            CaptureContext {
                                queue_name,
                                job_label: &job_label,
                            },
                        );
                    }
                }
                false
            }
        }
    }

    async fn try_dispatch(&self, queue_name: &str, job: &Job) -> Result<(), DispatchError> {
        if !self.routing.has_queue(queue_name) {
            return Err(DispatchError::UnknownQueue(queue_name.to_string()));
        }

        let entry = self
            .routing
            .entry(queue_name, job.command_type())
            .ok_or_else(|| DispatchError::UnknownCommandType(job.command_type().to_string()))?;

        // Guards against configuration drift: a routing entry pointing at a
        // handler that was never registered.
        let handler = self
            .handlers
            .get(&entry.handler_id)
            .ok_or_else(|| DispatchError::UnresolvedHandler(entry.handler_id.clone()))?;

        let payload = job.payload().map_err(ConversionError::from)?;
        let command = self.shapes.convert(&entry.command_shape, payload)?;

        // Panics are caught alongside handler errors: one buggy handler must
        // not unwind through the worker loop.
        let invocation = AssertUnwindSafe(handler.invoke(&entry.handler_method, command))
            .catch_unwind()
            .await;
        match invocation {
            Ok(result) => result.map_err(DispatchError::Invocation),
            Err(panic) => Err(DispatchError::Invocation(anyhow::anyhow!(
                "The handler panicked: {}",
                panic_message(panic.as_ref())
            ))),
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
