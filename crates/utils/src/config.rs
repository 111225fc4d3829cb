//! Layered typed configuration
//!
//! Defaults come first; every later layer is deep-merged over the result
//! with [`dict_join_owned`]. [`Layered::build`] then deserialises the merged
//! tree into a typed settings struct and runs its [`Validate`] checks.

use crate::json;
use physocts_core::{dict_join_owned, Error, Result, ResultExt};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Post-deserialisation checks for a settings type
pub trait Validate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Reject an empty string field
pub fn ensure_not_empty(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::configuration(format!("Field '{field}' cannot be empty")))
    } else {
        Ok(())
    }
}

/// Reject a value outside `[min, max]`
pub fn ensure_in_range<T>(value: T, min: T, max: T, field: &str) -> Result<T>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if value < min || value > max {
        Err(Error::configuration(format!(
            "Field '{field}' value {value} is not in range [{min}, {max}]"
        )))
    } else {
        Ok(value)
    }
}

/// Configuration tree built from stacked JSON layers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layered {
    merged: Map<String, Value>,
}

impl Layered {
    pub fn new(defaults: Map<String, Value>) -> Self {
        Self { merged: defaults }
    }

    /// Start from a defaults value, which must be a JSON object
    pub fn from_value(defaults: Value) -> Result<Self> {
        match defaults {
            Value::Object(map) => Ok(Self::new(map)),
            other => Err(Error::not_a_mapping("base", other)),
        }
    }

    /// Deep-merge `layer` over the current tree; `null` leaves it unchanged
    pub fn merge(self, layer: Value) -> Result<Self> {
        let overlay = match layer {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => return Err(Error::not_a_mapping("override", other)),
        };
        Ok(Self {
            merged: dict_join_owned(self.merged, overlay)?,
        })
    }

    /// Load `path` as JSON and merge it as the next layer
    pub fn merge_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "merging configuration layer");
        let layer = json::load(path)
            .into_result()
            .with_context(|| format!("loading configuration layer {}", path.display()))?;
        self.merge(layer)
    }

    /// The merged tree
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.merged
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.merged
    }

    /// Deserialise the merged tree into `T` and validate it
    pub fn build<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let settings: T = serde_json::from_value(Value::Object(self.merged.clone()))?;
        settings.validate()?;
        Ok(settings)
    }
}
