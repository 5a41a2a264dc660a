#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Logging setup shared by the EzyRes dashboard crates.
//!
//! The dashboard runs in the browser, so the subscriber formats events with
//! `tracing-subscriber` and hands each line to the developer console. The same
//! entry point works natively (stderr) so tests exercise the real pipeline.

pub mod error;
mod init;
mod writer;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
pub use writer::{ConsoleMakeWriter, ConsoleWriter};
