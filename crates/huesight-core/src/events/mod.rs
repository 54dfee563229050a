//! Optional structured-event hook for assessment operations.
//!
//! The engine emits one event per public operation. Handlers are purely
//! observational: nothing they do can change an assessment's outcome.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AssessmentEventHandler;
pub use types::*;
