//! Handler registry
//!
//! A closed registry of named command handlers, assembled at startup. The
//! dispatcher resolves handlers only through this registry, so a job's
//! command type can never select code that was not registered ahead of time.

use anyhow::Result;
use async_trait::async_trait;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// A converted command object, produced by the shape registry and consumed by
/// a handler method. Handlers downcast it to their concrete command type with
/// [`downcast_command`].
pub type CommandObject = Box<dyn Any + Send>;

/// A command handler exposing one or more named methods.
///
/// `method` is the configured method name from the routing entry. Handlers
/// match on the names they expose and return an error for anything else;
/// the dispatcher absorbs that error like any other invocation failure.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn invoke(&self, method: &str, command: CommandObject) -> Result<()>;
}

/// Registry of handlers keyed by their configured id.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler_id: impl Into<String>, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(handler_id.into(), handler);
    }

    pub fn is_registered(&self, handler_id: &str) -> bool {
        self.handlers.contains_key(handler_id)
    }

    pub fn get(&self, handler_id: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(handler_id).cloned()
    }
}

/// Downcast a command object to the concrete command type a handler expects.
pub fn downcast_command<T: Any>(command: CommandObject) -> Result<T> {
    command.downcast::<T>().map(|command| *command).map_err(|_| {
        anyhow::anyhow!(
            "Command object does not have the expected type {}",
            std::any::type_name::<T>()
        )
    })
}
