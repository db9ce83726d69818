//! Core ambient pieces: configuration and logging.

mod config;
pub mod logging;

pub use config::{Config, LogConfig};
