//! Write-path processing of resources.
//!
//! A processor validates that it supports an incoming resource and then routes
//! it to the handler for the requested operation kind.
//!
//! # Key Types
//!
//! - [`OperationProcessor`] - Hooks an application implements per resource type
//! - [`StateProcessor`] - Dispatch entry point called by the hosting framework
//! - [`FnProcessor`] - Processor assembled from closures via [`ProcessorBuilder`]

mod builder;
mod dispatch;


pub use builder::{FnProcessor, ProcessorBuilder};
pub use dispatch::{OperationProcessor, StateProcessor};
