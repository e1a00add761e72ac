//! Observability for OPC.
//! `tracing` crate with `EnvFilter`, per-target log levels.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
