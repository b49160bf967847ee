//! Operation processors and providers for REST resources.
//!
//! Provides the two extension points a REST framework calls for a resource
//! type: a processor for write operations and a provider for read operations.
//! Applications implement the hooks they need and inherit typed dispatch over
//! the requested operation.
//!
//! # Core Components
//!
//! - [`OperationProcessor`] / [`StateProcessor`] - Write path (post, put, patch, delete)
//! - [`OperationProvider`] / [`StateProvider`] - Read path (collection or single item)
//! - [`StateError`] - Unsupported resources, unimplemented operations and handler failures
//!
//! # Quick Start
//!
//! ```rust
//! use resource_state::{
//!     Context, Operation, OperationProcessor, StateError, StateProcessor, StateResult,
//!     UriVariables,
//! };
//!
//! struct NoteProcessor;
//!
//! impl OperationProcessor for NoteProcessor {
//!     type Resource = String;
//!
//!     fn supports_resource(&self, note: &String, _: &UriVariables, _: &Context) -> bool {
//!         !note.is_empty()
//!     }
//!
//!     fn handle_post(
//!         &self,
//!         note: String,
//!         _operation: &Operation,
//!         _uri_variables: &UriVariables,
//!         _context: &Context,
//!     ) -> StateResult<String> {
//!         Ok(note.to_uppercase())
//!     }
//! }
//!
//! let (vars, ctx) = (UriVariables::new(), Context::new());
//! let created = NoteProcessor.process("hello".into(), &Operation::post(), &vars, &ctx);
//! assert_eq!(created.unwrap(), Some("HELLO".to_string()));
//!
//! // Nothing overrides handle_put
//! let error = NoteProcessor.process("hello".into(), &Operation::put(), &vars, &ctx);
//! assert!(matches!(error, Err(StateError::OperationNotImplemented { .. })));
//! ```

pub mod error;
pub mod operation;
pub mod processor;
pub mod provider;
pub mod resource;

// Re-export commonly used types for convenience
pub use error::{StateError, StateResult};
pub use operation::{Context, Operation, OperationKind, UriVariables};
pub use processor::{FnProcessor, OperationProcessor, ProcessorBuilder, StateProcessor};
pub use provider::{FnProvider, OperationProvider, ProviderBuilder, StateProvider};
pub use resource::Provided;
