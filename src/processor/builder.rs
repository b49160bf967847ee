//! Builder for closure-configured processors.
//!
//! Provides a fluent API for assembling a processor from individual handler
//! closures instead of implementing [`OperationProcessor`] on a type.

use super::dispatch::OperationProcessor;
use crate::error::{StateError, StateResult};
use crate::operation::{Context, Operation, OperationKind, UriVariables};
use crate::resource::type_tag;
use std::fmt;

type SupportFn<T> = Box<dyn Fn(&T, &UriVariables, &Context) -> bool + Send + Sync>;
type DescribeFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;
type HandlerFn<T> =
    Box<dyn Fn(T, &Operation, &UriVariables, &Context) -> StateResult<T> + Send + Sync>;
type DeleteFn<T> =
    Box<dyn Fn(T, &Operation, &UriVariables, &Context) -> StateResult<()> + Send + Sync>;

/// Processor assembled from handler closures.
///
/// Kinds without a registered handler keep the not-implemented default.
pub struct FnProcessor<T> {
    supports: SupportFn<T>,
    describe: Option<DescribeFn<T>>,
    post: Option<HandlerFn<T>>,
    put: Option<HandlerFn<T>>,
    patch: Option<HandlerFn<T>>,
    delete: Option<DeleteFn<T>>,
}

impl<T: 'static> FnProcessor<T> {
    /// Start configuring a processor.
    pub fn builder() -> ProcessorBuilder<T> {
        ProcessorBuilder::new()
    }
}

impl<T> FnProcessor<T> {
    /// Whether a handler is registered for the given kind.
    pub fn handles(&self, kind: &OperationKind) -> bool {
        match kind {
            OperationKind::Post => self.post.is_some(),
            OperationKind::Put => self.put.is_some(),
            OperationKind::Patch => self.patch.is_some(),
            OperationKind::Delete => self.delete.is_some(),
            _ => false,
        }
    }
}

impl<T> fmt::Debug for FnProcessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProcessor")
            .field("post", &self.post.is_some())
            .field("put", &self.put.is_some())
            .field("patch", &self.patch.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

impl<T: 'static> OperationProcessor for FnProcessor<T> {
    type Resource = T;

    fn supports_resource(
        &self,
        resource: &T,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> bool {
        (self.supports)(resource, uri_variables, context)
    }

    fn resource_type(&self, resource: &T) -> String {
        match &self.describe {
            Some(describe) => describe(resource),
            None => type_tag(resource),
        }
    }

    fn handle_post(
        &self,
        resource: T,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<T> {
        match &self.post {
            Some(handler) => handler(resource, operation, uri_variables, context),
            None => Err(StateError::operation_not_implemented(operation)),
        }
    }

    fn handle_put(
        &self,
        resource: T,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<T> {
        match &self.put {
            Some(handler) => handler(resource, operation, uri_variables, context),
            None => Err(StateError::operation_not_implemented(operation)),
        }
    }

    fn handle_patch(
        &self,
        resource: T,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<T> {
        match &self.patch {
            Some(handler) => handler(resource, operation, uri_variables, context),
            None => Err(StateError::operation_not_implemented(operation)),
        }
    }

    fn handle_delete(
        &self,
        resource: T,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<()> {
        match &self.delete {
            Some(handler) => handler(resource, operation, uri_variables, context),
            None => Err(StateError::operation_not_implemented(operation)),
        }
    }
}

/// Builder for [`FnProcessor`].
///
/// # Examples
///
/// ```rust
/// use resource_state::{Context, FnProcessor, Operation, StateProcessor, UriVariables};
/// use serde_json::{Value, json};
///
/// let processor = FnProcessor::<Value>::builder()
///     .supports(|resource, _, _| resource.is_object())
///     .on_post(|mut resource, _, _, _| {
///         resource["id"] = json!(1);
///         Ok(resource)
///     })
///     .build();
///
/// let created = processor
///     .process(
///         json!({"title": "Dune"}),
///         &Operation::post(),
///         &UriVariables::new(),
///         &Context::new(),
///     )
///     .unwrap();
/// assert_eq!(created, Some(json!({"id": 1, "title": "Dune"})));
/// ```
pub struct ProcessorBuilder<T> {
    processor: FnProcessor<T>,
}

impl<T: 'static> ProcessorBuilder<T> {
    /// Create a builder whose processor supports every resource.
    pub fn new() -> Self {
        Self {
            processor: FnProcessor {
                supports: Box::new(supports_any::<T>),
                describe: None,
                post: None,
                put: None,
                patch: None,
                delete: None,
            },
        }
    }
}

fn supports_any<T>(_: &T, _: &UriVariables, _: &Context) -> bool {
    true
}

impl<T: 'static> Default for ProcessorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ProcessorBuilder<T> {
    /// Replace the support predicate.
    pub fn supports<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T, &UriVariables, &Context) -> bool + Send + Sync + 'static,
    {
        self.processor.supports = Box::new(predicate);
        self
    }

    /// Replace the type tag reported for rejected resources.
    pub fn describe_with<F>(mut self, describe: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.processor.describe = Some(Box::new(describe));
        self
    }

    pub fn on_post<F>(mut self, handler: F) -> Self
    where
        F: Fn(T, &Operation, &UriVariables, &Context) -> StateResult<T> + Send + Sync + 'static,
    {
        self.processor.post = Some(Box::new(handler));
        self
    }

    pub fn on_put<F>(mut self, handler: F) -> Self
    where
        F: Fn(T, &Operation, &UriVariables, &Context) -> StateResult<T> + Send + Sync + 'static,
    {
        self.processor.put = Some(Box::new(handler));
        self
    }

    pub fn on_patch<F>(mut self, handler: F) -> Self
    where
        F: Fn(T, &Operation, &UriVariables, &Context) -> StateResult<T> + Send + Sync + 'static,
    {
        self.processor.patch = Some(Box::new(handler));
        self
    }

    pub fn on_delete<F>(mut self, handler: F) -> Self
    where
        F: Fn(T, &Operation, &UriVariables, &Context) -> StateResult<()> + Send + Sync + 'static,
    {
        self.processor.delete = Some(Box::new(handler));
        self
    }

    /// Finish configuration.
    pub fn build(self) -> FnProcessor<T> {
        self.processor
    }
}
