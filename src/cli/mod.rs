//! Command-line interface built on the engine's query surface.

pub mod commands;
