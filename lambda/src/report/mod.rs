//! Report Lambda: logs the invocation and the deployment's resource identifiers

pub mod handler;

pub use handler::handler;
