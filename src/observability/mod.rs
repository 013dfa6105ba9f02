//! File-based structured logging.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → rotating log file
//! ```
//!
//! # Configuration
//!
//! Controlled through [`Config`](crate::Config):
//! 1. `TABPICK_LOG` sets the filter directive (`debug`, `tabpick=trace`, ...)
//! 2. `TABPICK_LOG_FILE` overrides the log file location
//! 3. Default: logging disabled
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use init::init_tracing;
