//! CLI command implementations.

pub mod check;
pub mod get;
pub mod list;
pub mod resolve;
pub mod run;
pub mod show;
