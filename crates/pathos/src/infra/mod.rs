//! Infrastructure adapters for configuration, logging, and persistence backends.

pub mod config;
pub mod logging;
pub mod store;
