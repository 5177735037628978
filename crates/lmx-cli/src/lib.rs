//! Commands shared by the `lmx` multiplexer and the standalone binaries.

pub mod commands;
pub mod logging;
