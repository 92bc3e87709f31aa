//! Static routing table
//!
//! Maps (queue name, command type) to the handler and command shape to use.
//! The table is assembled once from configuration before any dispatch happens
//! and is read-only afterwards; concurrent dispatchers can share it freely.

use serde::Deserialize;
use std::collections::HashMap;

/// A single routing entry: which handler to invoke, which of its methods to
/// call, and which command shape the payload converts into beforehand.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RoutingEntry {
    pub handler_id: String,
    pub handler_method: String,
    pub command_shape: String,
}

impl RoutingEntry {
    pub fn new(
        handler_id: impl Into<String>,
        handler_method: impl Into<String>,
        command_shape: impl Into<String>,
    ) -> Self {
        Self {
            handler_id: handler_id.into(),
            handler_method: handler_method.into(),
            command_shape: command_shape.into(),
        }
    }
}

/// Read-only mapping `queue name -> command type -> RoutingEntry`.
///
/// Unknown queues and command types are expected runtime conditions, not
/// programming errors; lookups simply return `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RoutingTable {
    entries: HashMap<String, HashMap<String, RoutingEntry>>,
}

impl RoutingTable {
    pub fn builder() -> RoutingTableBuilder {
        RoutingTableBuilder::default()
    }

    /// Whether any command type is routed for the given queue.
    pub fn has_queue(&self, queue_name: &str) -> bool {
        self.entries.contains_key(queue_name)
    }

    pub fn entry(&self, queue_name: &str, command_type: &str) -> Option<&RoutingEntry> {
        self.entries.get(queue_name)?.get(command_type)
    }
}

/// Builder for [`RoutingTable`]. Consuming `build` is the only way to obtain
/// a table, so a table can never be mutated once dispatch has started.
#[derive(Debug, Default)]
pub struct RoutingTableBuilder {
    entries: HashMap<String, HashMap<String, RoutingEntry>>,
}

impl RoutingTableBuilder {
    pub fn route(
        mut self,
        queue_name: impl Into<String>,
        command_type: impl Into<String>,
        entry: RoutingEntry,
    ) -> Self {
        self.entries
            .entry(queue_name.into())
            .or_default()
            .insert(command_type.into(), entry);
        self
    }

    pub fn build(self) -> RoutingTable {
        RoutingTable {
            entries: self.entries,
        }
    }
}
