//! Operation descriptors supplied by the hosting framework.
//!
//! An [`Operation`] names the action requested for a resource together with
//! the metadata a framework usually attaches to it. Dispatch only ever looks
//! at the [`OperationKind`]; the metadata travels along so handlers and error
//! reports can refer to the exact operation that was requested.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Variables extracted from the request URI, keyed by placeholder name.
pub type UriVariables = HashMap<String, Value>;

/// Free-form request-scoped metadata passed through to handlers.
pub type Context = HashMap<String, Value>;

/// Kinds of operations a framework can request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Read a single resource
    Get,
    /// Read a collection of resources
    GetCollection,
    /// Create a resource
    Post,
    /// Replace a resource
    Put,
    /// Partially update a resource
    Patch,
    /// Remove a resource
    Delete,
    /// Any operation the framework defines beyond the standard ones
    Other(String),
}

impl OperationKind {
    /// Whether this kind is handled by the write path.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch | Self::Delete)
    }

    /// Whether this kind is one of the standard read kinds.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Get | Self::GetCollection)
    }

    /// Whether this kind requests a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::GetCollection)
    }

    /// Resolve a kind name, mapping standard names to standard kinds.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.as_str() {
            "Get" => Self::Get,
            "GetCollection" => Self::GetCollection,
            "Post" => Self::Post,
            "Put" => Self::Put,
            "Patch" => Self::Patch,
            "Delete" => Self::Delete,
            _ => Self::Other(name),
        }
    }

    /// Short name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "Get",
            Self::GetCollection => "GetCollection",
            Self::Post => "Post",
            Self::Put => "Put",
            Self::Patch => "Patch",
            Self::Delete => "Delete",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable descriptor of a requested operation.
///
/// Two operations are equal when their kind and metadata match, which lets
/// callers check that an error carries the operation they dispatched.
///
/// ```rust
/// use resource_state::{Operation, OperationKind};
///
/// let operation = Operation::put()
///     .with_name("replace_book")
///     .with_uri_template("/books/{id}");
///
/// assert_eq!(operation.kind, OperationKind::Put);
/// assert_eq!(operation.name.as_deref(), Some("replace_book"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// What the operation asks for
    pub kind: OperationKind,
    /// Name the framework registered the operation under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URI template the operation is routed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_template: Option<String>,
}

impl Operation {
    /// Create an operation of the given kind without metadata.
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: None,
            uri_template: None,
        }
    }

    pub fn get() -> Self {
        Self::new(OperationKind::Get)
    }

    pub fn get_collection() -> Self {
        Self::new(OperationKind::GetCollection)
    }

    pub fn post() -> Self {
        Self::new(OperationKind::Post)
    }

    pub fn put() -> Self {
        Self::new(OperationKind::Put)
    }

    pub fn patch() -> Self {
        Self::new(OperationKind::Patch)
    }

    pub fn delete() -> Self {
        Self::new(OperationKind::Delete)
    }

    /// Create an operation from a kind name.
    ///
    /// Standard names (`"Post"`, `"GetCollection"`, ...) resolve to their
    /// standard kind; anything else becomes [`OperationKind::Other`].
    pub fn other(kind: impl Into<String>) -> Self {
        Self::new(OperationKind::from_name(kind))
    }

    /// Attach the name the operation is registered under.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the URI template the operation is routed from.
    pub fn with_uri_template(mut self, uri_template: impl Into<String>) -> Self {
        self.uri_template = Some(uri_template.into());
        self
    }
}

impl From<OperationKind> for Operation {
    fn from(kind: OperationKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.kind, name),
            None => write!(f, "{}", self.kind),
        }
    }
}
