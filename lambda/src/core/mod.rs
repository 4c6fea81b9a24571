//! Configuration and data model shared by both functions

pub mod config;
pub mod models;
