//! Resource values returned by the read path and resource type tags.

use serde::Serialize;
use serde_json::Value;
use std::any::Any;

/// Result of providing resources for a read operation.
///
/// Serializes untagged: an item as itself, a collection as an array and
/// nothing as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Provided<T> {
    /// A single resource
    Item(T),
    /// A collection of resources, possibly empty
    Collection(Vec<T>),
    /// No resource was found
    Nothing,
}

impl<T> Provided<T> {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Number of resources held.
    pub fn len(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Collection(items) => items.len(),
            Self::Nothing => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single item, if this is one.
    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(item) => Some(item),
            _ => None,
        }
    }

    /// All held resources as a vector.
    pub fn into_collection(self) -> Vec<T> {
        match self {
            Self::Item(item) => vec![item],
            Self::Collection(items) => items,
            Self::Nothing => Vec::new(),
        }
    }
}

impl<T> From<Option<T>> for Provided<T> {
    fn from(item: Option<T>) -> Self {
        match item {
            Some(item) => Self::Item(item),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Vec<T>> for Provided<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Collection(items)
    }
}

/// Name the runtime type of a JSON resource for diagnostics.
pub fn debug_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Runtime type tag of a resource.
///
/// JSON resources report the type of the value they hold (see
/// [`debug_type`]); any other resource reports its type name.
pub fn type_tag<T: Any>(resource: &T) -> String {
    match (resource as &dyn Any).downcast_ref::<Value>() {
        Some(value) => debug_type(value).to_string(),
        None => std::any::type_name::<T>().to_string(),
    }
}
