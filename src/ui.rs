//! Terminal UI building blocks.
//!
//! The submodules here expose the query input, the input row with tabs, the
//! result tables, and the question detail pane. Layout and event wiring live
//! in the `app` module.

pub mod detail;
pub mod input;
pub mod tables;
pub mod tabs;
