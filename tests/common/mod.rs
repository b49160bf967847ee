//! Common test utilities for dispatch testing.
//!
//! Provides an in-memory book store that implements both the processor and
//! provider hooks, plus logging setup shared by the integration tests.

#![allow(dead_code)]

use resource_state::resource::type_tag;
use resource_state::{
    Context, Operation, OperationProcessor, OperationProvider, StateError, StateResult,
    UriVariables,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Initialise `env_logger` once for test output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// JSON book resource as a framework would deserialize it.
pub fn book(title: &str) -> Value {
    json!({
        "type": "Book",
        "title": title,
    })
}

pub fn uri_id(id: u64) -> UriVariables {
    UriVariables::from([("id".to_string(), json!(id))])
}

/// Books keyed by id, shared between a processor and a provider.
#[derive(Clone, Default)]
pub struct BookStore {
    books: Arc<Mutex<BTreeMap<u64, Value>>>,
    next_id: Arc<Mutex<u64>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.lock().map(|books| books.len()).unwrap_or_default()
    }

    fn id_from(uri_variables: &UriVariables) -> StateResult<u64> {
        uri_variables
            .get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| StateError::handler("missing id uri variable"))
    }

    fn lock(&self) -> StateResult<std::sync::MutexGuard<'_, BTreeMap<u64, Value>>> {
        self.books
            .lock()
            .map_err(|_| StateError::handler("book store poisoned"))
    }
}

impl OperationProcessor for BookStore {
    type Resource = Value;

    fn supports_resource(&self, resource: &Value, _: &UriVariables, _: &Context) -> bool {
        resource.get("type").and_then(Value::as_str) == Some("Book")
    }

    fn resource_type(&self, resource: &Value) -> String {
        resource
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| type_tag(resource))
    }

    fn handle_post(
        &self,
        mut resource: Value,
        _: &Operation,
        _: &UriVariables,
        _: &Context,
    ) -> StateResult<Value> {
        let id = {
            let mut next_id = self
                .next_id
                .lock()
                .map_err(|_| StateError::handler("id sequence poisoned"))?;
            *next_id += 1;
            *next_id
        };
        resource["id"] = json!(id);
        self.lock()?.insert(id, resource.clone());
        Ok(resource)
    }

    fn handle_put(
        &self,
        mut resource: Value,
        _: &Operation,
        uri_variables: &UriVariables,
        _: &Context,
    ) -> StateResult<Value> {
        let id = Self::id_from(uri_variables)?;
        let mut books = self.lock()?;
        if !books.contains_key(&id) {
            return Err(StateError::handler(format!("book {} not found", id)));
        }
        resource["id"] = json!(id);
        books.insert(id, resource.clone());
        Ok(resource)
    }

    fn handle_patch(
        &self,
        resource: Value,
        _: &Operation,
        uri_variables: &UriVariables,
        _: &Context,
    ) -> StateResult<Value> {
        let id = Self::id_from(uri_variables)?;
        let mut books = self.lock()?;
        let stored = books
            .get_mut(&id)
            .ok_or_else(|| StateError::handler(format!("book {} not found", id)))?;

        if let (Some(stored), Some(changes)) = (stored.as_object_mut(), resource.as_object()) {
            for (key, value) in changes {
                if key != "id" {
                    stored.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(stored.clone())
    }

    fn handle_delete(
        &self,
        _: Value,
        _: &Operation,
        uri_variables: &UriVariables,
        _: &Context,
    ) -> StateResult<()> {
        let id = Self::id_from(uri_variables)?;
        self.lock()?.remove(&id);
        Ok(())
    }
}

impl OperationProvider for BookStore {
    type Resource = Value;

    fn provide_collection(&self, _: &UriVariables, context: &Context) -> StateResult<Vec<Value>> {
        let books = self.lock()?;
        let limit = context
            .get("limit")
            .and_then(Value::as_u64)
            .map(|limit| limit as usize)
            .unwrap_or(usize::MAX);
        Ok(books.values().take(limit).cloned().collect())
    }

    fn provide_item(
        &self,
        uri_variables: &UriVariables,
        _: &Context,
    ) -> StateResult<Option<Value>> {
        let id = Self::id_from(uri_variables)?;
        Ok(self.lock()?.get(&id).cloned())
    }
}
