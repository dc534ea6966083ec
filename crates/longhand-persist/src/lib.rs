//! longhand-persist — configuration and report persistence.
//!
//! Implements the `ReportSink` trait for a Firebase-style REST backend
//! and an in-memory recorder, and loads the layered TOML configuration
//! the CLI runs sessions from.

pub mod config;
pub mod error;
pub mod firebase;
pub mod memory;

pub use config::{create_sink, load_config, load_config_from, LonghandConfig, SinkConfig};
pub use error::SinkError;
pub use firebase::FirebaseSink;
pub use memory::MemorySink;
