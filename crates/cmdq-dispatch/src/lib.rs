//! Cmdq dispatch – routing table, handler registry and dispatcher.
//!
//! This crate routes a dequeued [`cmdq_core::Job`] to a concrete handler
//! invocation. The routing table and both registries are assembled once from
//! configuration before the first dispatch; the command type on the job is
//! only ever used as a lookup key into that closed table, never resolved as a
//! type or symbol name. Every failure inside [`Dispatcher::dispatch`] is
//! logged and converted into a `false` outcome so the surrounding worker loop
//! keeps processing subsequent messages.

mod dispatcher;
mod error;
mod error_tracking;
mod registry;
mod routing;
mod shapes;

pub use dispatcher::Dispatcher;
pub use error::{ConversionError, DispatchError};
pub use error_tracking::{CaptureContext, ErrorTracker};
pub use registry::{downcast_command, CommandHandler, CommandObject, HandlerRegistry};
pub use routing::{RoutingEntry, RoutingTable, RoutingTableBuilder};
pub use shapes::ShapeRegistry;
