//! Command handlers.
//!
//! Handlers are thin: they call into `deepdrive_core` and format the
//! result for the terminal.

pub mod config;
pub mod paths;
