//! Shared types for the ECE text pipeline: error taxonomy and configuration.

pub mod config;
pub mod error;

pub use config::{AtomizerConfig, DedupConfig, EceConfig, FingerprintConfig, SanitizerConfig};
pub use error::{EceError, Result};
