//! Shared types: errors and configuration.

pub mod config;
pub mod error;

pub use config::{TableConfig, TokenizerConfig, WordStatConfig, DEFAULT_CAPACITY};
pub use error::{WordStatError, WsResult};
