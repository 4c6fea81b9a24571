//! Publish Lambda: relays each invocation to the configured queue

pub mod adapter;
pub mod handler;
pub mod publisher;

// Re-export the main handler for convenience
pub use handler::handler;
pub use publisher::{MessagePublisher, SqsPublisher};
