//! Command shape registry
//!
//! Converts the generic JSON payload of a job into the strongly typed command
//! object named by the routing entry. Conversion is permissive structural
//! mapping at unlimited nesting depth: same-named fields are bound
//! recursively and extra payload fields are ignored, unless a shape opts into
//! `#[serde(deny_unknown_fields)]` itself.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ConversionError;
use crate::registry::CommandObject;

type ShapeConverter = Box<dyn Fn(Value) -> Result<CommandObject, serde_json::Error> + Send + Sync>;

/// Registry of payload converters keyed by the configured shape id.
#[derive(Default)]
pub struct ShapeRegistry {
    converters: HashMap<String, ShapeConverter>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the command type `T` under the given shape id.
    pub fn register<T>(&mut self, shape_id: impl Into<String>)
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.converters.insert(
            shape_id.into(),
            Box::new(|payload| {
                let command: T = serde_json::from_value(payload)?;
                Ok(Box::new(command) as CommandObject)
            }),
        );
    }

    pub fn is_registered(&self, shape_id: &str) -> bool {
        self.converters.contains_key(shape_id)
    }

    /// Convert a payload into the command object registered under `shape_id`.
    pub fn convert(&self, shape_id: &str, payload: Value) -> Result<CommandObject, ConversionError> {
        let converter = self
            .converters
            .get(shape_id)
            .ok_or_else(|| ConversionError::UnknownShape(shape_id.to_string()))?;
        converter(payload).map_err(ConversionError::Mapping)
    }
}
