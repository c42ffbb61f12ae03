//! Expose postcraft's CLI internals so the integration tests and the xtask
//! can reach them. The binary in `main.rs` is a thin dispatcher over these.
pub mod cli;
pub mod commands;
pub mod error;
