//! Write-path dispatch.
//!
//! [`OperationProcessor`] holds the hooks an application overrides;
//! [`StateProcessor`] is the entry point the framework calls and is
//! implemented for every [`OperationProcessor`].

use crate::error::{StateError, StateResult};
use crate::operation::{Context, Operation, OperationKind, UriVariables};
use crate::resource::type_tag;
use log::{debug, warn};

/// Hooks for processing write operations on a resource type.
///
/// Only [`supports_resource`](Self::supports_resource) is required. Every
/// handler defaults to failing with [`StateError::OperationNotImplemented`],
/// so a processor that never overrides `handle_put` only fails when a put is
/// actually dispatched to it.
///
/// # Example Implementation
///
/// ```rust
/// use resource_state::{
///     Context, Operation, OperationProcessor, StateProcessor, StateResult, UriVariables,
/// };
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Book {
///     title: String,
/// }
///
/// struct BookProcessor;
///
/// impl OperationProcessor for BookProcessor {
///     type Resource = Book;
///
///     fn supports_resource(&self, book: &Book, _: &UriVariables, _: &Context) -> bool {
///         !book.title.is_empty()
///     }
///
///     fn handle_post(
///         &self,
///         mut book: Book,
///         _operation: &Operation,
///         _uri_variables: &UriVariables,
///         _context: &Context,
///     ) -> StateResult<Book> {
///         book.title = book.title.trim().to_string();
///         Ok(book)
///     }
/// }
///
/// let created = BookProcessor
///     .process(
///         Book { title: " Dune ".into() },
///         &Operation::post(),
///         &UriVariables::new(),
///         &Context::new(),
///     )
///     .unwrap();
/// assert_eq!(created, Some(Book { title: "Dune".into() }));
/// ```
pub trait OperationProcessor {
    type Resource: 'static;

    /// Return false if the given resource is not handled by this processor.
    fn supports_resource(
        &self,
        resource: &Self::Resource,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> bool;

    /// Type tag reported when a resource is rejected.
    fn resource_type(&self, resource: &Self::Resource) -> String {
        type_tag(resource)
    }

    fn handle_post(
        &self,
        _resource: Self::Resource,
        operation: &Operation,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<Self::Resource> {
        Err(StateError::operation_not_implemented(operation))
    }

    fn handle_put(
        &self,
        _resource: Self::Resource,
        operation: &Operation,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<Self::Resource> {
        Err(StateError::operation_not_implemented(operation))
    }

    fn handle_patch(
        &self,
        _resource: Self::Resource,
        operation: &Operation,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<Self::Resource> {
        Err(StateError::operation_not_implemented(operation))
    }

    /// Remove the resource. The dispatcher returns no resource afterwards.
    fn handle_delete(
        &self,
        _resource: Self::Resource,
        operation: &Operation,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<()> {
        Err(StateError::operation_not_implemented(operation))
    }
}

/// Framework-facing entry point for write operations.
pub trait StateProcessor {
    type Resource;

    /// Process a resource for the given operation.
    ///
    /// Returns the resulting resource for post, put and patch, and `None`
    /// for delete.
    fn process(
        &self,
        resource: Self::Resource,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Option<Self::Resource>>;
}

impl<P: OperationProcessor + ?Sized> StateProcessor for P {
    type Resource = P::Resource;

    fn process(
        &self,
        resource: Self::Resource,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Option<Self::Resource>> {
        if !self.supports_resource(&resource, uri_variables, context) {
            let resource_type = self.resource_type(&resource);
            debug!(
                "Rejected resource of type {} for {} operation",
                resource_type, operation.kind
            );
            return Err(StateError::resource_not_supported(resource_type));
        }

        debug!("Processing {} operation", operation);

        match operation.kind {
            OperationKind::Post => self
                .handle_post(resource, operation, uri_variables, context)
                .map(Some),
            OperationKind::Put => self
                .handle_put(resource, operation, uri_variables, context)
                .map(Some),
            OperationKind::Patch => self
                .handle_patch(resource, operation, uri_variables, context)
                .map(Some),
            OperationKind::Delete => {
                self.handle_delete(resource, operation, uri_variables, context)?;
                Ok(None)
            }
            _ => {
                warn!("No write handler for {} operation", operation.kind);
                Err(StateError::operation_not_implemented(operation))
            }
        }
    }
}
