//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it merges default config files,
//! explicit files, environment variables, and CLI overrides into a
//! [`ResolvedConfig`] consumed by the workflow.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
