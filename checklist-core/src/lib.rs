//! Core shared library for the checklist workspace.
//!
//! This crate exposes the primitives the other crates depend on: the
//! common error types, environment-variable helpers used to build explicit
//! configuration structs, and the tracing subscriber setup.

pub mod config;
pub mod errors;
pub mod logging;

pub use errors::{ChecklistError, ConfigError};
