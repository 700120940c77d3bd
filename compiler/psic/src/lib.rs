//! PSI compiler driver.
//!
//! Exposes the command handlers used by the `psi` binary so they can be
//! tested without spawning a process.

pub mod commands;
pub mod tracing_setup;

pub use tracing_setup::init_tracing;
