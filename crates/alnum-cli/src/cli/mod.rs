//! Command-line plumbing around the `alnum` library.
//!
//! - [`config`] - `CliArgs` parsing and validation into `RunConfig`.
//! - [`output`] - rendering and emitting the result set.
//! - [`telemetry`] - tracing subscriber setup.

pub mod config;
pub mod output;
pub mod telemetry;
