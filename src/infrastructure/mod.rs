//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this is limited to resolving where the optional log file lives.

pub mod paths;

pub use paths::default_log_file;
