//! Logging utilities.
//!
//! This module centralizes logger initialization. The engine itself only
//! speaks the `log` facade; binaries pick `env_logger` through
//! [`init_logging`].

mod init;

pub use init::{LoggingConfig, init_logging};
