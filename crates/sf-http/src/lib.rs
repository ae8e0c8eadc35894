//! HTTP transport to the analysis API
//!
//! - `POST {base}/generate` submits an intake and returns `{ "session_id" }`
//! - `GET {base}/session/{id}` returns the analysis, `404` when none exists
//!
//! Timeouts are configured here; the core defines none.

#![warn(unreachable_pub)]

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpTransport;
pub use config::ApiConfig;
pub use error::HttpError;
