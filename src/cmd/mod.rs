//! CLI command implementations.

pub mod serve;

pub use serve::cmd_serve;
