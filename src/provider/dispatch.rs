//! Read-path dispatch.

use crate::error::StateResult;
use crate::operation::{Context, Operation, UriVariables};
use crate::resource::Provided;
use log::debug;

/// Hooks for providing resources of one type.
///
/// Every hook has a default. Collections are provided for `GetCollection`
/// operations only; by default the collection is empty and no item exists.
///
/// # Example Implementation
///
/// ```rust
/// use resource_state::{
///     Context, Operation, OperationProvider, StateProvider, StateResult, UriVariables,
/// };
///
/// struct ShelfProvider {
///     titles: Vec<String>,
/// }
///
/// impl OperationProvider for ShelfProvider {
///     type Resource = String;
///
///     fn provide_collection(&self, _: &UriVariables, _: &Context) -> StateResult<Vec<String>> {
///         Ok(self.titles.clone())
///     }
///
///     fn provide_item(
///         &self,
///         uri_variables: &UriVariables,
///         _: &Context,
///     ) -> StateResult<Option<String>> {
///         let index = uri_variables.get("index").and_then(|v| v.as_u64());
///         Ok(index.and_then(|i| self.titles.get(i as usize).cloned()))
///     }
/// }
///
/// let provider = ShelfProvider { titles: vec!["Dune".into(), "Emma".into()] };
/// let provided = provider
///     .provide(&Operation::get_collection(), &UriVariables::new(), &Context::new())
///     .unwrap();
/// assert_eq!(provided.len(), 2);
/// ```
pub trait OperationProvider {
    type Resource;

    /// Whether the operation should be answered with a collection.
    fn can_provide_collection(
        &self,
        operation: &Operation,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> bool {
        operation.kind.is_collection()
    }

    fn provide_collection(
        &self,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<Vec<Self::Resource>> {
        Ok(Vec::new())
    }

    /// Provide a single resource, or `None` if it does not exist.
    fn provide_item(
        &self,
        _uri_variables: &UriVariables,
        _context: &Context,
    ) -> StateResult<Option<Self::Resource>> {
        Ok(None)
    }
}

/// Framework-facing entry point for read operations.
pub trait StateProvider {
    type Resource;

    /// Provide a collection or a single item for the operation.
    fn provide(
        &self,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Provided<Self::Resource>>;
}

impl<P: OperationProvider + ?Sized> StateProvider for P {
    type Resource = P::Resource;

    fn provide(
        &self,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Provided<Self::Resource>> {
        if self.can_provide_collection(operation, uri_variables, context) {
            let items = self.provide_collection(uri_variables, context)?;
            debug!(
                "Provided collection of {} resources for {} operation",
                items.len(),
                operation.kind
            );
            return Ok(Provided::Collection(items));
        }

        let item = self.provide_item(uri_variables, context)?;
        debug!(
            "Provided {} for {} operation",
            if item.is_some() { "item" } else { "nothing" },
            operation.kind
        );
        Ok(item.into())
    }
}
