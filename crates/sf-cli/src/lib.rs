//! `solution-finder` command-line front end
//!
//! Drives the intake wizard from flags, renders analysis results as text and
//! keeps a per-user submission history.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod store;

pub use commands::{AnalyzeArgs, AnalyzeOutcome};
pub use config::{AppConfig, ConfigError, HistoryConfig, IdentityConfig, LogFormat, LoggingConfig};
pub use store::FileRecordStore;
