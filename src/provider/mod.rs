//! Read-path providing of resources.
//!
//! A provider decides whether a read operation asks for a collection or a
//! single item and delegates to the matching hook.
//!
//! # Key Types
//!
//! - [`OperationProvider`] - Hooks an application implements per resource type
//! - [`StateProvider`] - Dispatch entry point called by the hosting framework
//! - [`FnProvider`] - Provider assembled from closures via [`ProviderBuilder`]

mod builder;
mod dispatch;


pub use builder::{FnProvider, ProviderBuilder};
pub use dispatch::{OperationProvider, StateProvider};
