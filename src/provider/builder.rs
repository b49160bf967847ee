//! Builder for closure-configured providers.

use super::dispatch::OperationProvider;
use crate::error::StateResult;
use crate::operation::{Context, Operation, UriVariables};
use std::fmt;

type CollectionWhenFn = Box<dyn Fn(&Operation, &UriVariables, &Context) -> bool + Send + Sync>;
type CollectionFn<T> = Box<dyn Fn(&UriVariables, &Context) -> StateResult<Vec<T>> + Send + Sync>;
type ItemFn<T> = Box<dyn Fn(&UriVariables, &Context) -> StateResult<Option<T>> + Send + Sync>;

/// Provider assembled from closures.
///
/// Hooks that were not configured keep the defaults of [`OperationProvider`].
pub struct FnProvider<T> {
    collection_when: Option<CollectionWhenFn>,
    collection: Option<CollectionFn<T>>,
    item: Option<ItemFn<T>>,
}

impl<T> FnProvider<T> {
    /// Start configuring a provider.
    pub fn builder() -> ProviderBuilder<T> {
        ProviderBuilder::new()
    }
}

impl<T> fmt::Debug for FnProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider")
            .field("collection_when", &self.collection_when.is_some())
            .field("collection", &self.collection.is_some())
            .field("item", &self.item.is_some())
            .finish()
    }
}

impl<T> OperationProvider for FnProvider<T> {
    type Resource = T;

    fn can_provide_collection(
        &self,
        operation: &Operation,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> bool {
        match &self.collection_when {
            Some(predicate) => predicate(operation, uri_variables, context),
            None => operation.kind.is_collection(),
        }
    }

    fn provide_collection(
        &self,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Vec<T>> {
        match &self.collection {
            Some(collection) => collection(uri_variables, context),
            None => Ok(Vec::new()),
        }
    }

    fn provide_item(
        &self,
        uri_variables: &UriVariables,
        context: &Context,
    ) -> StateResult<Option<T>> {
        match &self.item {
            Some(item) => item(uri_variables, context),
            None => Ok(None),
        }
    }
}

/// Builder for [`FnProvider`].
///
/// # Examples
///
/// ```rust
/// use resource_state::{Context, FnProvider, Operation, Provided, StateProvider, UriVariables};
///
/// let provider = FnProvider::builder()
///     .collection(|_, _| Ok(vec![1, 2, 3]))
///     .item(|uri_variables, _| Ok(uri_variables.get("id").and_then(|id| id.as_i64())))
///     .build();
///
/// let provided = provider
///     .provide(&Operation::get_collection(), &UriVariables::new(), &Context::new())
///     .unwrap();
/// assert_eq!(provided, Provided::Collection(vec![1, 2, 3]));
/// ```
pub struct ProviderBuilder<T> {
    provider: FnProvider<T>,
}

impl<T> ProviderBuilder<T> {
    pub fn new() -> Self {
        Self {
            provider: FnProvider {
                collection_when: None,
                collection: None,
                item: None,
            },
        }
    }

    /// Replace the collection predicate.
    pub fn collection_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Operation, &UriVariables, &Context) -> bool + Send + Sync + 'static,
    {
        self.provider.collection_when = Some(Box::new(predicate));
        self
    }

    pub fn collection<F>(mut self, collection: F) -> Self
    where
        F: Fn(&UriVariables, &Context) -> StateResult<Vec<T>> + Send + Sync + 'static,
    {
        self.provider.collection = Some(Box::new(collection));
        self
    }

    pub fn item<F>(mut self, item: F) -> Self
    where
        F: Fn(&UriVariables, &Context) -> StateResult<Option<T>> + Send + Sync + 'static,
    {
        self.provider.item = Some(Box::new(item));
        self
    }

    /// Finish configuration.
    pub fn build(self) -> FnProvider<T> {
        self.provider
    }
}

impl<T> Default for ProviderBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
