//! Report Emitters
//!
//! Turn a laid-out [`Report`](crate::Report) into bytes on an output
//! stream. Layout never depends on the destination; only the emitter knows
//! whether colors are available.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};
