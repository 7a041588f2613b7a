//! Logging utilities.
//!
//! Centralizes logger initialization; the rest of the crate goes through the
//! `log` facade only, including the per-frame diagnostic lines.

mod init;

pub use init::{LoggingConfig, init_logging};
