//! Runtime configuration for the command-line tools.
pub mod demo;
